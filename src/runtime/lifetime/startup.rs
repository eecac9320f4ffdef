use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::errors::{EduAdminError, Result};
use crate::models::AppStartTime;
use crate::services::AppServices;
use crate::storage::Storage;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// 过期会话的清理周期
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub services: AppServices,
}

async fn construct_cache(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name)?;
    match constructor().await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例
///
/// 配置的后端不可用或未注册时回退到内存缓存。
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = AppConfig::get().cache.cache_type.as_str();

    warn!("Attempting to create {} cache backend", cache_type);

    if get_object_cache_plugin(cache_type).is_none() {
        warn!("Cache backend '{}' not found in registry", cache_type);
    } else if let Some(cache) = construct_cache(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to memory cache");
        if let Some(cache) = construct_cache("moka").await {
            return Ok(cache);
        }
    }

    Err(EduAdminError::cache_plugin_not_found(format!(
        "No cache backend available (tried: {cache_type})"
    )))
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和各业务服务
pub async fn prepare_server_startup(start_time: AppStartTime) -> Result<StartupContext> {
    // 只有第一次安装会成功，重复调用不影响使用
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    let services = AppServices::build(storage.clone(), cache.clone(), AppConfig::get(), start_time);

    // 清理上次运行遗留的过期会话，失败不影响启动
    if let Err(e) = services.sessions.sweep_expired().await {
        warn!("Failed to sweep expired sessions: {}", e);
    }

    Ok(StartupContext {
        storage,
        cache,
        services,
    })
}

/// 后台定期停用过期会话
pub fn spawn_session_sweeper(services: &AppServices) {
    let sessions = services.sessions.clone();
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        // 第一次 tick 立即返回，启动时已经清理过
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = sessions.sweep_expired().await {
                error!("Periodic session sweep failed: {}", e);
            }
        }
    });
}
