#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{body::MessageBody, dev::ServiceResponse, test};
use chrono::Utc;
use rust_eduadmin::cache::{ObjectCache, object_cache::MokaCacheWrapper};
use rust_eduadmin::config::{AppConfig, DatabaseConfig};
use rust_eduadmin::models::AppStartTime;
use rust_eduadmin::services::AppServices;
use rust_eduadmin::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use tempfile::TempDir;

/// 测试环境中登录服务使用的签发方密钥
pub const ISSUER_KEY: &str = "test-issuer-key";

pub fn issuer_header() -> (&'static str, &'static str) {
    ("X-Session-Issuer-Key", ISSUER_KEY)
}

/// 每个测试独立的临时 SQLite 数据库
pub struct TestContext {
    // 持有临时目录直到测试结束
    _dir: TempDir,
    pub services: AppServices,
}

pub async fn setup() -> TestContext {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("eduadmin-test.db");

    let storage = SeaOrmStorage::connect(&DatabaseConfig {
        url: db_path.to_string_lossy().into_owned(),
        pool_size: 4,
        timeout: 10,
    })
    .await
    .unwrap();
    let storage: Arc<dyn Storage> = Arc::new(storage);
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1000, 600));

    let mut config = AppConfig::load().unwrap();
    config.session.issuer_key = ISSUER_KEY.to_string();
    let services = AppServices::build(
        storage,
        cache,
        &config,
        AppStartTime {
            start_datetime: Utc::now(),
        },
    );

    TestContext {
        _dir: dir,
        services,
    }
}

/// 按生产环境的方式组装应用（服务注册 + 全部路由）
macro_rules! init_app {
    ($ctx:expr) => {{
        let services = $ctx.services.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(rust_eduadmin::utils::query_error_handler),
                )
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_eduadmin::utils::json_error_handler),
                )
                .configure(|cfg| services.register(cfg))
                .configure(rust_eduadmin::routes::configure_api_routes),
        )
        .await
    }};
}

/// 读取响应体为 JSON
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}
