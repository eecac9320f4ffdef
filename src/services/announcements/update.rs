use tracing::info;

use super::{AnnouncementService, now_ts};
use crate::errors::{EduAdminError, Result};
use crate::models::announcements::{
    entities::{Announcement, AnnouncementLocation},
    requests::UpdateAnnouncementRequest,
};
use crate::utils::validate::validate_title;

use super::create::{validate_content, validate_target};

pub async fn update_announcement(
    service: &AnnouncementService,
    id: i64,
    mut req: UpdateAnnouncementRequest,
) -> Result<Announcement> {
    let storage = service.storage();

    // 过期的公告在这里就会返回 404
    let existing = storage
        .get_announcement_by_id(id, now_ts())
        .await?
        .ok_or_else(|| EduAdminError::not_found(format!("Announcement not found: {id}")))?;

    if let Some(title) = req.title.as_mut() {
        *title = title.trim().to_string();
        validate_title(title).map_err(EduAdminError::validation)?;
    }
    if let Some(content) = req.content.as_deref() {
        validate_content(content)?;
    }

    // 按更新后的状态校验位置与课程
    let location = req.location.unwrap_or(existing.location);
    let course_id = match location {
        AnnouncementLocation::Homepage => None,
        AnnouncementLocation::Course => req.course_id.or(existing.course_id),
    };
    validate_target(location, course_id)?;
    if location == AnnouncementLocation::Homepage {
        req.course_id = None;
    }

    let updated = storage
        .update_announcement(id, req, now_ts())
        .await?
        .ok_or_else(|| EduAdminError::not_found(format!("Announcement not found: {id}")))?;

    info!("Announcement {} updated", id);
    Ok(updated)
}
