use serde::Deserialize;
use ts_rs::TS;

/// 打开（登录）设备会话请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct OpenSessionRequest {
    pub user_id: i64,
    // 设备指纹，由客户端生成并持久保存
    pub client_id: String,
    pub device_name: Option<String>,
    // 缺省时取请求头 User-Agent
    pub user_agent: Option<String>,
}

/// 会话列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionListParams {
    pub active_only: Option<bool>,
}

// 用于存储层的新会话
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: i64,
    pub token: String,
    pub client_id: String,
    pub device_name: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub expires_at: i64,
}
