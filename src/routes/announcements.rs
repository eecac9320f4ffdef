use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::ApiResponse;
use crate::models::announcements::requests::{
    AnnouncementFilterParams, AnnouncementListParams, CreateAnnouncementRequest,
    UpdateAnnouncementRequest,
};
use crate::services::AnnouncementService;
use crate::utils::SafeIDI64;

// HTTP处理程序
pub async fn list_announcements(
    service: web::Data<AnnouncementService>,
    query: web::Query<AnnouncementListParams>,
) -> ActixResult<HttpResponse> {
    let result = service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        result,
        "Announcement list retrieved successfully",
    )))
}

pub async fn list_active_announcements(
    service: web::Data<AnnouncementService>,
    query: web::Query<AnnouncementFilterParams>,
) -> ActixResult<HttpResponse> {
    let items = service.list_active(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        items,
        "Active announcements retrieved successfully",
    )))
}

pub async fn list_expired_announcements(
    service: web::Data<AnnouncementService>,
    query: web::Query<AnnouncementFilterParams>,
) -> ActixResult<HttpResponse> {
    let items = service.list_expired(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        items,
        "Expired announcements retrieved successfully",
    )))
}

pub async fn create_announcement(
    service: web::Data<AnnouncementService>,
    body: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    let announcement = service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        announcement,
        "Announcement created successfully",
    )))
}

pub async fn get_announcement(
    service: web::Data<AnnouncementService>,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    let announcement = service.get(id.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        announcement,
        "Announcement retrieved successfully",
    )))
}

pub async fn update_announcement(
    service: web::Data<AnnouncementService>,
    id: SafeIDI64,
    body: web::Json<UpdateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    let announcement = service.update(id.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        announcement,
        "Announcement updated successfully",
    )))
}

pub async fn delete_announcement(
    service: web::Data<AnnouncementService>,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.delete(id.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
        "Announcement deleted successfully",
    )))
}

// 配置路由，固定路径需在 /{id} 之前注册
pub fn configure_announcements_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/announcements")
            .route("", web::get().to(list_announcements))
            .route("", web::post().to(create_announcement))
            .route("/active", web::get().to(list_active_announcements))
            .route("/expired", web::get().to(list_expired_announcements))
            .route("/{id}", web::get().to(get_announcement))
            .route("/{id}", web::patch().to(update_announcement))
            .route("/{id}", web::delete().to(delete_announcement)),
    );
}
