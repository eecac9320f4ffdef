use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header, web};

use crate::middlewares::{self, RequireIssuer, RequireSession};
use crate::models::ApiResponse;
use crate::models::sessions::{
    entities::SessionInfo,
    requests::{OpenSessionRequest, SessionListParams},
};
use crate::services::{ClientMeta, SessionService};
use crate::utils::SafeIDI64;

fn client_meta(req: &HttpRequest) -> ClientMeta {
    ClientMeta {
        ip_address: req
            .connection_info()
            .realip_remote_addr()
            .map(|s| s.to_string()),
        user_agent: req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
    }
}

// HTTP处理程序
pub async fn open_session(
    req: HttpRequest,
    service: web::Data<SessionService>,
    body: web::Json<OpenSessionRequest>,
) -> ActixResult<HttpResponse> {
    let result = service.open(body.into_inner(), client_meta(&req)).await?;

    if result.reused {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            result,
            "Existing session refreshed",
        )));
    }
    Ok(HttpResponse::Created().json(ApiResponse::success(result, "Session opened")))
}

pub async fn current_session(req: HttpRequest) -> ActixResult<HttpResponse> {
    let session = RequireSession::extract_session(&req)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SessionInfo::from(&session),
        "Current session retrieved successfully",
    )))
}

pub async fn list_my_sessions(
    req: HttpRequest,
    service: web::Data<SessionService>,
    query: web::Query<SessionListParams>,
) -> ActixResult<HttpResponse> {
    let session = RequireSession::extract_session(&req)?;
    let sessions = service
        .list_for_user(session.user_id, query.active_only.unwrap_or(false))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        sessions,
        "Session list retrieved successfully",
    )))
}

pub async fn revoke_current_session(
    req: HttpRequest,
    service: web::Data<SessionService>,
) -> ActixResult<HttpResponse> {
    let session = RequireSession::extract_session(&req)?;
    service.revoke_current(&session).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Logged out")))
}

pub async fn revoke_session(
    req: HttpRequest,
    service: web::Data<SessionService>,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    let session = RequireSession::extract_session(&req)?;
    service.revoke_by_id(&session, id.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Session revoked")))
}

pub async fn list_user_sessions(
    service: web::Data<SessionService>,
    user_id: web::Path<i64>,
    query: web::Query<SessionListParams>,
) -> ActixResult<HttpResponse> {
    let sessions = service
        .list_for_user(user_id.into_inner(), query.active_only.unwrap_or(false))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        sessions,
        "Session list retrieved successfully",
    )))
}

// 配置路由
pub fn configure_sessions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/sessions")
            .route(
                web::post()
                    .to(open_session)
                    .wrap(RequireIssuer)
                    .wrap(middlewares::RateLimit::session_open()),
            )
            .route(web::get().to(list_my_sessions).wrap(RequireSession)),
    )
    .service(
        web::scope("/api/v1/sessions")
            .wrap(RequireSession)
            .route("/current", web::get().to(current_session))
            .route("/current", web::delete().to(revoke_current_session))
            .route("/{id}", web::delete().to(revoke_session)),
    )
    .service(
        web::resource("/api/v1/users/{user_id}/sessions")
            .route(web::get().to(list_user_sessions).wrap(RequireIssuer)),
    );
}
