//! 公告实体

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryFilter, Select};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub location: String,
    pub course_id: Option<i64>,
    pub is_active: bool,
    pub expires_at: Option<i64>,
    pub priority: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// 未过期条件：没有过期时间，或过期时间晚于 `now`
    ///
    /// 除「已过期列表」外，所有读取、更新、删除路径都必须带上这个条件。
    pub fn live_condition(now: i64) -> Condition {
        Condition::any()
            .add(Column::ExpiresAt.is_null())
            .add(Column::ExpiresAt.gt(now))
    }

    /// 已过期条件：过期时间不晚于 `now`
    pub fn expired_condition(now: i64) -> Condition {
        Condition::all()
            .add(Column::ExpiresAt.is_not_null())
            .add(Column::ExpiresAt.lte(now))
    }

    /// 只包含未过期公告的查询
    pub fn find_live(now: i64) -> Select<Entity> {
        Self::find().filter(Self::live_condition(now))
    }
}

impl Model {
    pub fn into_announcement(self) -> crate::models::announcements::entities::Announcement {
        use crate::models::announcements::entities::{Announcement, AnnouncementLocation};
        use chrono::{DateTime, Utc};

        Announcement {
            id: self.id,
            title: self.title,
            content: self.content,
            location: self
                .location
                .parse()
                .unwrap_or(AnnouncementLocation::Homepage),
            course_id: self.course_id,
            is_active: self.is_active,
            expires_at: self
                .expires_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            priority: self.priority,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
