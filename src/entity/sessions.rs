//! 设备会话实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    #[sea_orm(unique)]
    pub token: String,
    pub client_id: String,
    pub device_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub is_active: bool,
    pub last_active_at: i64,
    pub expires_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_session(self) -> crate::models::sessions::entities::Session {
        use crate::models::sessions::entities::Session;
        use chrono::{DateTime, Utc};

        Session {
            id: self.id,
            user_id: self.user_id,
            token: self.token,
            client_id: self.client_id,
            device_name: self.device_name,
            user_agent: self.user_agent,
            ip_address: self.ip_address,
            is_active: self.is_active,
            last_active_at: DateTime::<Utc>::from_timestamp(self.last_active_at, 0)
                .unwrap_or_default(),
            expires_at: DateTime::<Utc>::from_timestamp(self.expires_at, 0).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
