use super::{AnnouncementService, now_ts};
use crate::errors::{EduAdminError, Result};
use crate::models::announcements::entities::Announcement;

pub async fn get_announcement(service: &AnnouncementService, id: i64) -> Result<Announcement> {
    service
        .storage()
        .get_announcement_by_id(id, now_ts())
        .await?
        .ok_or_else(|| EduAdminError::not_found(format!("Announcement not found: {id}")))
}
