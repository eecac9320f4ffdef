use actix_web::{HttpResponse, Result as ActixResult, middleware, web};

use crate::models::ApiResponse;
use crate::services::SystemService;

pub async fn health(service: web::Data<SystemService>) -> ActixResult<HttpResponse> {
    let health = service.health().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(health, "Service is running")))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health)),
    );
}
