pub mod health;

use std::sync::Arc;

use crate::config::AppSettings;
use crate::models::{AppStartTime, system::responses::HealthResponse};
use crate::storage::Storage;

pub struct SystemService {
    storage: Arc<dyn Storage>,
    app: AppSettings,
    start_time: AppStartTime,
}

impl SystemService {
    pub fn new(storage: Arc<dyn Storage>, app: AppSettings, start_time: AppStartTime) -> Self {
        Self {
            storage,
            app,
            start_time,
        }
    }

    // 健康检查，数据库不可用时状态为 degraded
    pub async fn health(&self) -> HealthResponse {
        health::health(self).await
    }
}
