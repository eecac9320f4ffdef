use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub system_name: String,
    pub version: String,
    pub environment: String,
    // 运行时长（秒）
    pub uptime_secs: i64,
}
