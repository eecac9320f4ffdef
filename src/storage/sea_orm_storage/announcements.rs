//! 公告存储操作
//!
//! 除 `list_expired_announcements_impl` 外，每个查询都从 `Announcements::find_live(now)`
//! 出发，或在删除时显式带上 `Announcements::live_condition(now)`。

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{EduAdminError, Result};
use crate::models::{
    PaginationInfo,
    announcements::{
        entities::{Announcement, AnnouncementLocation},
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
};
use crate::utils::validate::validate_page_offset;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set,
};

fn filter_location(
    select: Select<Announcements>,
    location: Option<AnnouncementLocation>,
) -> Select<Announcements> {
    match location {
        Some(location) => select.filter(Column::Location.eq(location.to_string())),
        None => select,
    }
}

impl SeaOrmStorage {
    /// 创建公告
    pub async fn create_announcement_impl(
        &self,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            content: Set(req.content),
            location: Set(req.location.to_string()),
            course_id: Set(req.course_id),
            is_active: Set(req.is_active.unwrap_or(true)),
            expires_at: Set(req.expires_at.map(|dt| dt.timestamp())),
            priority: Set(req.priority.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 通过 ID 获取未过期的公告
    pub async fn get_announcement_by_id_impl(
        &self,
        id: i64,
        now: i64,
    ) -> Result<Option<Announcement>> {
        let result = Announcements::find_live(now)
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 部分更新未过期的公告
    pub async fn update_announcement_impl(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
        now: i64,
    ) -> Result<Option<Announcement>> {
        let existing = Announcements::find_live(now)
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询公告失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(chrono::Utc::now().timestamp());

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        if let Some(location) = update.location {
            model.location = Set(location.to_string());
            // 切回首页时课程 ID 不再有意义
            if location == AnnouncementLocation::Homepage && update.course_id.is_none() {
                model.course_id = Set(None);
            }
        }
        if let Some(course_id) = update.course_id {
            model.course_id = Set(Some(course_id));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(priority) = update.priority {
            model.priority = Set(priority);
        }
        if let Some(expires_at) = update.expires_at {
            model.expires_at = Set(expires_at.map(|dt| dt.timestamp()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("更新公告失败: {e}")))?;

        Ok(Some(updated.into_announcement()))
    }

    /// 删除未过期的公告
    pub async fn delete_announcement_impl(&self, id: i64, now: i64) -> Result<bool> {
        let result = Announcements::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Announcements::live_condition(now))
            .exec(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出未过期的公告
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListQuery,
        now: i64,
    ) -> Result<AnnouncementListResponse> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);
        validate_page_offset(page, size).map_err(EduAdminError::validation)?;

        let mut select = filter_location(Announcements::find_live(now), query.location);
        if query.active_only {
            select = select.filter(Column::IsActive.eq(true));
        }

        // 排序：优先级高的在前，同优先级按创建时间倒序
        select = select
            .order_by_desc(Column::Priority)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询公告总数失败: {e}")))?;

        let announcements = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: announcements
                .into_iter()
                .map(|m| m.into_announcement())
                .collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    /// 已启用且未过期的公告
    pub async fn list_active_announcements_impl(
        &self,
        location: Option<AnnouncementLocation>,
        now: i64,
    ) -> Result<Vec<Announcement>> {
        let announcements = filter_location(Announcements::find_live(now), location)
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::Priority)
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询活跃公告失败: {e}")))?;

        Ok(announcements
            .into_iter()
            .map(|m| m.into_announcement())
            .collect())
    }

    /// 已过期的公告，按过期时间倒序
    pub async fn list_expired_announcements_impl(
        &self,
        location: Option<AnnouncementLocation>,
        now: i64,
    ) -> Result<Vec<Announcement>> {
        let select = Announcements::find().filter(Announcements::expired_condition(now));
        let announcements = filter_location(select, location)
            .order_by_desc(Column::ExpiresAt)
            .all(&self.db)
            .await
            .map_err(|e| EduAdminError::database_operation(format!("查询过期公告失败: {e}")))?;

        Ok(announcements
            .into_iter()
            .map(|m| m.into_announcement())
            .collect())
    }
}
