use super::entities::SessionInfo;
use serde::Serialize;
use ts_rs::TS;

// 打开会话响应，令牌只在此处返回一次
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct OpenSessionResponse {
    pub token: String,
    // 是否复用了该设备已有的活跃会话
    pub reused: bool,
    pub session: SessionInfo,
}
