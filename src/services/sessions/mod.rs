pub mod issuer;
pub mod list;
pub mod open;
pub mod resolve;
pub mod revoke;

use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::config::SessionConfig;
use crate::errors::Result;
use crate::models::sessions::{
    entities::{Session, SessionInfo},
    requests::OpenSessionRequest,
    responses::OpenSessionResponse,
};
use crate::storage::Storage;

/// 设备会话服务
///
/// 数据库是会话的唯一来源，缓存中的 `session:{token}` 只是镜像，
/// 其 TTL 不超过会话剩余有效期。
pub struct SessionService {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    settings: SessionConfig,
}

/// 请求来源信息（由路由层从连接与请求头中提取）
#[derive(Debug, Clone, Default)]
pub struct ClientMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl SessionService {
    pub fn new(
        storage: Arc<dyn Storage>,
        cache: Arc<dyn ObjectCache>,
        settings: SessionConfig,
    ) -> Self {
        Self {
            storage,
            cache,
            settings,
        }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn cache(&self) -> &dyn ObjectCache {
        self.cache.as_ref()
    }

    // 校验签发方密钥
    pub fn verify_issuer(&self, presented: Option<&str>) -> Result<()> {
        issuer::check_issuer_key(&self.settings.issuer_key, presented)
    }

    // 打开会话：同一用户同一设备复用已有的有效会话
    pub async fn open(
        &self,
        req: OpenSessionRequest,
        meta: ClientMeta,
    ) -> Result<OpenSessionResponse> {
        open::open_session(self, req, meta).await
    }

    // 根据令牌解析当前会话
    pub async fn resolve(&self, token: &str) -> Result<Session> {
        resolve::resolve_session(self, token).await
    }

    pub async fn list_for_user(&self, user_id: i64, active_only: bool) -> Result<Vec<SessionInfo>> {
        list::list_sessions(self, user_id, active_only).await
    }

    // 注销当前会话
    pub async fn revoke_current(&self, current: &Session) -> Result<()> {
        revoke::revoke_current(self, current).await
    }

    // 注销当前用户的另一个会话
    pub async fn revoke_by_id(&self, current: &Session, id: i64) -> Result<()> {
        revoke::revoke_by_id(self, current, id).await
    }

    // 停用所有已过期的会话
    pub async fn sweep_expired(&self) -> Result<u64> {
        revoke::sweep_expired(self).await
    }
}

pub(crate) fn cache_key(token: &str) -> String {
    format!("session:{token}")
}

/// 镜像的 TTL：会话剩余有效期，至少 1 秒
pub(crate) fn mirror_ttl(session: &Session, now: i64) -> u64 {
    (session.expires_at.timestamp() - now).max(1) as u64
}
