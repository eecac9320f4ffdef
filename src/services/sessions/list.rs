use chrono::Utc;

use super::SessionService;
use crate::errors::{EduAdminError, Result};
use crate::models::sessions::entities::SessionInfo;

pub async fn list_sessions(
    service: &SessionService,
    user_id: i64,
    active_only: bool,
) -> Result<Vec<SessionInfo>> {
    if user_id <= 0 {
        return Err(EduAdminError::validation(format!(
            "Invalid user_id: {user_id}"
        )));
    }

    let sessions = service
        .storage()
        .list_sessions_for_user(user_id, active_only, Utc::now().timestamp())
        .await?;

    Ok(sessions.iter().map(SessionInfo::from).collect())
}
