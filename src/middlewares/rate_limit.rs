/*!
 * 速率限制中间件
 *
 * 固定窗口计数：窗口从某个键的第一次请求开始计时，窗口结束后计数清零。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RateLimit;
 *
 * web::resource("/api/v1/sessions")
 *     .route(web::post().to(open_session).wrap(RateLimit::session_open()));
 * ```
 *
 * ## 限制规则
 *
 * - 已认证请求按会话所属用户计数，否则按客户端 IP 计数
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::Expiry;
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode, sessions::entities::Session};

#[derive(Clone, Copy)]
struct WindowCounter {
    count: u32,
    window: Duration,
}

// 窗口长度在首次写入时确定，后续计数更新不延长窗口
struct FixedWindow;

impl Expiry<String, WindowCounter> for FixedWindow {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &WindowCounter,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.window)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        _value: &WindowCounter,
        _updated_at: Instant,
        duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        duration_until_expiry
    }
}

/// 全局速率限制计数
/// 键: 前缀:用户或IP
static RATE_LIMIT_CACHE: Lazy<Cache<String, WindowCounter>> = Lazy::new(|| {
    Cache::builder()
        .expire_after(FixedWindow)
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 打开会话：10次/分钟/IP
    pub fn session_open() -> Self {
        Self::new(10, 60).with_prefix("session_open")
    }

    /// 课表导入：5次/分钟/用户或IP
    pub fn timetable_import() -> Self {
        Self::new(5, 60).with_prefix("timetable_import")
    }

    fn cache_key(&self, identifier: &str) -> String {
        if self.key_prefix.is_empty() {
            identifier.to_string()
        } else {
            format!("{}:{}", self.key_prefix, identifier)
        }
    }
}

/// 从请求中提取客户端 IP
///
/// 部署在反向代理后面时依赖代理设置的 X-Forwarded-For / X-Real-IP。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 已认证请求的用户 ID
fn extract_user_id(req: &ServiceRequest) -> Option<i64> {
    req.extensions().get::<Session>().map(|s| s.user_id)
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            config: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    config: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let config = self.config.clone();

        Box::pin(async move {
            let identifier = extract_user_id(&req)
                .map(|id| format!("user:{id}"))
                .unwrap_or_else(|| format!("ip:{}", extract_client_ip(&req)));
            let cache_key = config.cache_key(&identifier);

            let current = RATE_LIMIT_CACHE.get(&cache_key).await;
            let current_count = current.map_or(0, |c| c.count);

            if current_count >= config.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, config.max_requests
                );
                return Ok(req.into_response(
                    create_rate_limit_response(config.window_secs).map_into_right_body(),
                ));
            }

            RATE_LIMIT_CACHE
                .insert(
                    cache_key,
                    WindowCounter {
                        count: current_count + 1,
                        window: Duration::from_secs(config.window_secs),
                    },
                )
                .await;

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    #[::core::prelude::v1::test]
    fn test_rate_limit_presets() {
        let open = RateLimit::session_open();
        assert_eq!(open.max_requests, 10);
        assert_eq!(open.window_secs, 60);
        assert_eq!(open.key_prefix, "session_open");

        let import = RateLimit::timetable_import();
        assert_eq!(import.max_requests, 5);
        assert_eq!(import.cache_key("ip:1.2.3.4"), "timetable_import:ip:1.2.3.4");
    }

    #[actix_web::test]
    async fn test_rejects_after_limit() {
        let app = test::init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(2, 60).with_prefix("unit_test_limited"))
                    .route(web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        for _ in 0..2 {
            let resp = test::call_service(&app, test::TestRequest::get().uri("/limited").to_request()).await;
            assert!(resp.status().is_success());
        }

        let resp = test::call_service(&app, test::TestRequest::get().uri("/limited").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
