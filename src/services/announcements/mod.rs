pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::config::AnnouncementConfig;
use crate::errors::Result;
use crate::models::announcements::{
    entities::Announcement,
    requests::{
        AnnouncementFilterParams, AnnouncementListParams, CreateAnnouncementRequest,
        UpdateAnnouncementRequest,
    },
    responses::AnnouncementListResponse,
};
use crate::storage::Storage;

/// 公告服务
///
/// 所有按 ID 的操作只作用于未过期的公告，过期公告只能通过 `list_expired` 看到。
pub struct AnnouncementService {
    storage: Arc<dyn Storage>,
    settings: AnnouncementConfig,
}

impl AnnouncementService {
    pub fn new(storage: Arc<dyn Storage>, settings: AnnouncementConfig) -> Self {
        Self { storage, settings }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn create(&self, req: CreateAnnouncementRequest) -> Result<Announcement> {
        create::create_announcement(self, req).await
    }

    pub async fn get(&self, id: i64) -> Result<Announcement> {
        get::get_announcement(self, id).await
    }

    pub async fn update(&self, id: i64, req: UpdateAnnouncementRequest) -> Result<Announcement> {
        update::update_announcement(self, id, req).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        delete::delete_announcement(self, id).await
    }

    pub async fn list(&self, params: AnnouncementListParams) -> Result<AnnouncementListResponse> {
        list::list_announcements(self, params).await
    }

    pub async fn list_active(&self, params: AnnouncementFilterParams) -> Result<Vec<Announcement>> {
        list::list_active_announcements(self, params).await
    }

    pub async fn list_expired(
        &self,
        params: AnnouncementFilterParams,
    ) -> Result<Vec<Announcement>> {
        list::list_expired_announcements(self, params).await
    }
}

pub(crate) fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}
