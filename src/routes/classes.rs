use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::ApiResponse;
use crate::models::classes::requests::BulkCreateClassesRequest;
use crate::models::timetables::requests::TimetableRow;
use crate::services::ClassService;
use crate::utils::SafeClassName;

// HTTP处理程序
pub async fn list_classes(service: web::Data<ClassService>) -> ActixResult<HttpResponse> {
    let classes = service.list_classes().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        classes,
        "Class list retrieved successfully",
    )))
}

pub async fn bulk_create_classes(
    service: web::Data<ClassService>,
    body: web::Json<BulkCreateClassesRequest>,
) -> ActixResult<HttpResponse> {
    let result = service.bulk_create_classes(body.into_inner()).await?;

    if result.count == 0 {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            result,
            "All classes already exist, nothing to do",
        )));
    }
    let message = format!("{} class(es) created", result.count);
    Ok(HttpResponse::Created().json(ApiResponse::success(result, message)))
}

pub async fn get_timetable(
    service: web::Data<ClassService>,
    name: SafeClassName,
) -> ActixResult<HttpResponse> {
    let entries = service.get_timetable(&name.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        entries,
        "Timetable retrieved successfully",
    )))
}

pub async fn import_timetable(
    service: web::Data<ClassService>,
    rows: web::Json<Vec<TimetableRow>>,
) -> ActixResult<HttpResponse> {
    let result = service.import_timetable(rows.into_inner(), None).await?;
    let message = format!("Imported {} timetable entries", result.count);
    Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
}

pub async fn import_class_timetable(
    service: web::Data<ClassService>,
    name: SafeClassName,
    rows: web::Json<Vec<TimetableRow>>,
) -> ActixResult<HttpResponse> {
    let result = service
        .import_timetable(rows.into_inner(), Some(&name.0))
        .await?;
    let message = format!("Imported {} timetable entries for {}", result.count, name.0);
    Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .route("", web::get().to(list_classes))
            .route("/bulk", web::post().to(bulk_create_classes))
            .service(
                web::resource("/timetable/import").route(
                    web::post()
                        .to(import_timetable)
                        .wrap(middlewares::RateLimit::timetable_import()),
                ),
            )
            .route("/{name}/timetable", web::get().to(get_timetable))
            .service(
                web::resource("/{name}/timetable/import").route(
                    web::post()
                        .to(import_class_timetable)
                        .wrap(middlewares::RateLimit::timetable_import()),
                ),
            ),
    );
}
