use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::ApiResponse;
use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// HTTP处理程序
pub async fn list_students(
    service: web::Data<StudentService>,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    let result = service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        result,
        "Student list retrieved successfully",
    )))
}

pub async fn create_student(
    service: web::Data<StudentService>,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    let student = service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        student,
        "Student created successfully",
    )))
}

pub async fn get_student(
    service: web::Data<StudentService>,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    let student = service.get(id.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        student,
        "Student retrieved successfully",
    )))
}

pub async fn update_student(
    service: web::Data<StudentService>,
    id: SafeIDI64,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    let student = service.update(id.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        student,
        "Student updated successfully",
    )))
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.delete(id.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
        "Student deleted successfully",
    )))
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::patch().to(update_student))
            .route("/{id}", web::delete().to(delete_student)),
    );
}
