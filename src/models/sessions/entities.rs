use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 设备会话（完整记录，含令牌，仅在服务端与缓存镜像中使用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub client_id: String,
    pub device_name: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub is_active: bool,
    pub last_active_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// 会话是否仍然可用（活跃且未过期）
    pub fn is_usable_at(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.is_active && self.expires_at > now
    }
}

/// 对外展示的会话信息（不含令牌）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionInfo {
    pub id: i64,
    pub user_id: i64,
    pub client_id: String,
    pub device_name: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub is_active: bool,
    pub last_active_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            client_id: session.client_id.clone(),
            device_name: session.device_name.clone(),
            user_agent: session.user_agent.clone(),
            ip_address: session.ip_address.clone(),
            is_active: session.is_active,
            last_active_at: session.last_active_at,
            expires_at: session.expires_at,
            created_at: session.created_at,
        }
    }
}
