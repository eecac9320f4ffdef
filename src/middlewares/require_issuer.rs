/*!
 * 会话签发方认证中间件
 *
 * 打开会话和查询任意用户的会话只允许受信任的登录服务调用，
 * 调用方需在 `X-Session-Issuer-Key` 请求头中携带 `session.issuer_key`。
 *
 * ```rust,ignore
 * web::resource("/api/v1/sessions")
 *     .route(web::post().to(open_session).wrap(RequireIssuer));
 * ```
 */

use crate::models::{ApiResponse, ErrorCode};
use crate::services::SessionService;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse, ResponseError,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{error, info};

pub const ISSUER_KEY_HEADER: &str = "X-Session-Issuer-Key";

#[derive(Clone)]
pub struct RequireIssuer;

impl<S, B> Transform<S, ServiceRequest> for RequireIssuer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireIssuerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireIssuerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireIssuerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireIssuerMiddleware<S>
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

            let presented = req
                .headers()
                .get(ISSUER_KEY_HEADER)
                .and_then(|h| h.to_str().ok());

            if let Err(err) = sessions.verify_issuer(presented) {
                info!("Issuer check failed for request to {}: {}", req.path(), err);
                return Ok(req.into_response(err.error_response().map_into_right_body()));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}
