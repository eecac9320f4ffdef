use chrono::Utc;
use tracing::info;

use super::{ClientMeta, SessionService, cache_key, mirror_ttl};
use crate::cache::insert_json;
use crate::errors::{EduAdminError, Result};
use crate::models::sessions::{
    entities::SessionInfo,
    requests::{NewSession, OpenSessionRequest},
    responses::OpenSessionResponse,
};
use crate::utils::random_code::generate_session_token;
use crate::utils::validate::validate_client_id;

pub async fn open_session(
    service: &SessionService,
    req: OpenSessionRequest,
    meta: ClientMeta,
) -> Result<OpenSessionResponse> {
    if req.user_id <= 0 {
        return Err(EduAdminError::validation(format!(
            "Invalid user_id: {}",
            req.user_id
        )));
    }
    let client_id = req.client_id.trim().to_string();
    validate_client_id(&client_id).map_err(EduAdminError::validation)?;

    let now = Utc::now().timestamp();
    let expires_at = now + service.settings.ttl_secs;
    let user_agent = req.user_agent.or(meta.user_agent);
    let storage = service.storage();

    let existing = storage
        .find_active_session_for_client(req.user_id, &client_id, now)
        .await?;

    let (session, reused) = match existing {
        Some(existing) => {
            let refreshed = storage
                .refresh_session(existing.id, expires_at, user_agent, meta.ip_address, now)
                .await?
                .ok_or_else(|| EduAdminError::not_found("Session disappeared during refresh"))?;
            info!(
                "Session {} reused for user {} on client {}",
                refreshed.id, refreshed.user_id, refreshed.client_id
            );
            (refreshed, true)
        }
        None => {
            let created = storage
                .create_session(NewSession {
                    user_id: req.user_id,
                    token: generate_session_token(),
                    client_id,
                    device_name: req.device_name,
                    user_agent,
                    ip_address: meta.ip_address,
                    expires_at,
                })
                .await?;
            info!(
                "Session {} opened for user {} on client {}",
                created.id, created.user_id, created.client_id
            );
            (created, false)
        }
    };

    insert_json(
        service.cache(),
        cache_key(&session.token),
        &session,
        mirror_ttl(&session, now),
    )
    .await;

    Ok(OpenSessionResponse {
        token: session.token.clone(),
        reused,
        session: SessionInfo::from(&session),
    })
}
