use super::entities::Announcement;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 公告列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListResponse {
    pub items: Vec<Announcement>,
    pub pagination: PaginationInfo,
}
