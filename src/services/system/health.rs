use tracing::warn;

use super::SystemService;
use crate::models::system::responses::HealthResponse;

pub async fn health(service: &SystemService) -> HealthResponse {
    let status = match service.storage.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!("Health check: storage unavailable: {}", e);
            "degraded"
        }
    };

    let uptime = chrono::Utc::now() - service.start_time.start_datetime;

    HealthResponse {
        status: status.to_string(),
        system_name: service.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: service.app.environment.clone(),
        uptime_secs: uptime.num_seconds().max(0),
    }
}
