use tracing::info;

use super::{AnnouncementService, now_ts};
use crate::errors::{EduAdminError, Result};

pub async fn delete_announcement(service: &AnnouncementService, id: i64) -> Result<()> {
    if !service.storage().delete_announcement(id, now_ts()).await? {
        return Err(EduAdminError::not_found(format!(
            "Announcement not found: {id}"
        )));
    }

    info!("Announcement {} deleted", id);
    Ok(())
}
