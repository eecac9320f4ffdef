use chrono::Utc;
use tracing::{info, warn};

use super::{SessionService, cache_key};
use crate::errors::{EduAdminError, Result};
use crate::models::sessions::entities::Session;

pub async fn revoke_current(service: &SessionService, current: &Session) -> Result<()> {
    service.storage().deactivate_session(current.id).await?;
    service.cache().remove(&cache_key(&current.token)).await;

    info!("Session {} of user {} revoked", current.id, current.user_id);
    Ok(())
}

/// 只能注销当前用户自己的会话，其他用户的会话一律视为不存在
pub async fn revoke_by_id(service: &SessionService, current: &Session, id: i64) -> Result<()> {
    let now = Utc::now().timestamp();
    let target = service
        .storage()
        .list_sessions_for_user(current.user_id, false, now)
        .await?
        .into_iter()
        .find(|s| s.id == id && s.is_active)
        .ok_or_else(|| EduAdminError::not_found(format!("Session not found: {id}")))?;

    service.storage().deactivate_session(target.id).await?;
    service.cache().remove(&cache_key(&target.token)).await;

    info!(
        "Session {} of user {} revoked from session {}",
        target.id, current.user_id, current.id
    );
    Ok(())
}

pub async fn sweep_expired(service: &SessionService) -> Result<u64> {
    let count = service
        .storage()
        .deactivate_expired_sessions(Utc::now().timestamp())
        .await?;

    if count > 0 {
        warn!("Deactivated {} expired session(s)", count);
    }
    Ok(count)
}
