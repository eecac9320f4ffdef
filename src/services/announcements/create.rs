use tracing::info;

use super::AnnouncementService;
use crate::errors::{EduAdminError, Result};
use crate::models::announcements::{
    entities::{Announcement, AnnouncementLocation},
    requests::CreateAnnouncementRequest,
};
use crate::utils::validate::validate_title;

pub async fn create_announcement(
    service: &AnnouncementService,
    mut req: CreateAnnouncementRequest,
) -> Result<Announcement> {
    req.title = req.title.trim().to_string();
    validate_title(&req.title).map_err(EduAdminError::validation)?;
    validate_content(&req.content)?;
    validate_target(req.location, req.course_id)?;

    if req.location == AnnouncementLocation::Homepage {
        req.course_id = None;
    }

    // 允许创建时就已过期，这类公告只会出现在过期列表中
    let announcement = service.storage().create_announcement(req).await?;
    info!(
        "Announcement {} created at {} (priority {})",
        announcement.id, announcement.location, announcement.priority
    );
    Ok(announcement)
}

pub(crate) fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(EduAdminError::validation("Content must not be empty"));
    }
    Ok(())
}

/// 课程页公告必须指定课程
pub(crate) fn validate_target(
    location: AnnouncementLocation,
    course_id: Option<i64>,
) -> Result<()> {
    match (location, course_id) {
        (AnnouncementLocation::Course, None) => Err(EduAdminError::validation(
            "course_id is required when location is 'course'",
        )),
        (AnnouncementLocation::Course, Some(id)) if id <= 0 => Err(EduAdminError::validation(
            format!("Invalid course_id: {id}"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_requires_course_id() {
        assert!(validate_target(AnnouncementLocation::Course, None).is_err());
        assert!(validate_target(AnnouncementLocation::Course, Some(0)).is_err());
        assert!(validate_target(AnnouncementLocation::Course, Some(7)).is_ok());
        assert!(validate_target(AnnouncementLocation::Homepage, None).is_ok());
    }

    #[test]
    fn test_blank_content_rejected() {
        assert!(validate_content("  \n").is_err());
        assert!(validate_content("Nghỉ học ngày 2/9").is_ok());
    }
}
