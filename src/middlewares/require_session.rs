/*!
 * 设备会话认证中间件
 *
 * 校验 `Authorization: Bearer <token>` 中的会话令牌，只有活跃且未过期的会话才能访问受保护的路由。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireSession;
 *
 * web::scope("/api/v1/sessions")
 *     .wrap(RequireSession)
 *     .route("/current", web::get().to(current_session));
 *
 * async fn current_session(req: HttpRequest) -> ActixResult<HttpResponse> {
 *     let session = RequireSession::extract_session(&req)?;
 *     // ...
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 从请求头提取令牌
 * 2. 交给 `SessionService::resolve`：缓存镜像优先，未命中查询数据库并回填
 * 3. 成功时把 `Session` 放入请求扩展，失败时按错误类型返回 401 / 500
 */

use crate::errors::EduAdminError;
use crate::models::{ApiResponse, ErrorCode, sessions::entities::Session};
use crate::services::SessionService;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse, ResponseError,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireSession;

fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    HttpResponse::build(StatusCode::NO_CONTENT)
                        .finish()
                        .map_into_right_body(),
                ));
            }

            let Some(sessions) = req.app_data::<web::Data<SessionService>>().cloned() else {
                error!("SessionService is not registered in app data");
                return Ok(req.into_response(
                    HttpResponse::InternalServerError()
                        .json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Session service unavailable",
                        ))
                        .map_into_right_body(),
                ));
            };

            let Some(token) = extract_bearer_token(&req) else {
                info!("Missing bearer token for request to {}", req.path());
                return Ok(req.into_response(
                    EduAdminError::authentication("Missing or invalid Authorization header")
                        .error_response()
                        .map_into_right_body(),
                ));
            };

            match sessions.resolve(&token).await {
                Ok(session) => {
                    debug!(
                        "Session authentication successful: session {} user {}",
                        session.id, session.user_id
                    );
                    req.extensions_mut().insert(session);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(err.error_response().map_into_right_body()))
                }
            }
        })
    }
}

impl RequireSession {
    /// 从请求扩展中取出当前会话
    /// 仅在应用了 RequireSession 的路由中可用，否则返回认证错误
    pub fn extract_session(req: &actix_web::HttpRequest) -> Result<Session, EduAdminError> {
        req.extensions()
            .get::<Session>()
            .cloned()
            .ok_or_else(|| EduAdminError::authentication("No authenticated session"))
    }

    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Session>().map(|s| s.user_id)
    }
}
