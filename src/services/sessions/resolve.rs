use chrono::Utc;
use tracing::debug;

use super::{SessionService, cache_key, mirror_ttl};
use crate::cache::{get_json, insert_json};
use crate::errors::{EduAdminError, Result};
use crate::models::sessions::entities::Session;

/// 解析令牌：先查缓存镜像，未命中再查数据库并回填
///
/// 会话不存在、已停用或已过期都返回认证错误；距离上次记录活跃时间超过
/// `touch_interval_secs` 时刷新活跃时间。
pub async fn resolve_session(service: &SessionService, token: &str) -> Result<Session> {
    let cache = service.cache();
    let key = cache_key(token);

    let (mut session, from_cache) = match get_json::<Session>(cache, &key).await {
        Some(session) => {
            debug!("Session cache hit for id {}", session.id);
            (session, true)
        }
        None => {
            let session = service
                .storage()
                .get_session_by_token(token)
                .await?
                .ok_or_else(|| EduAdminError::authentication("Invalid session token"))?;
            (session, false)
        }
    };

    let now = Utc::now();
    if !session.is_usable_at(now) {
        cache.remove(&key).await;
        return Err(EduAdminError::authentication(
            "Session has expired or been revoked",
        ));
    }

    let now_ts = now.timestamp();
    let touched = now_ts - session.last_active_at.timestamp() >= service.settings.touch_interval_secs;
    if touched && service.storage().touch_session(session.id, now_ts).await? {
        session.last_active_at = now;
        session.updated_at = now;
    }

    if !from_cache || touched {
        insert_json(cache, key, &session, mirror_ttl(&session, now_ts)).await;
    }

    Ok(session)
}
