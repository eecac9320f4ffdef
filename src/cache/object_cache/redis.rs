use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

/// Redis 缓存后端
///
/// 会话镜像也可被运维脚本直接读取，键名为 `{key_prefix}session:{token}`。
pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64, // TTL in seconds
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Self::with_settings(
            &config.cache.redis.url,
            &config.cache.redis.key_prefix,
            config.cache.default_ttl,
        )
    }

    pub fn with_settings(url: &str, key_prefix: &str, ttl: u64) -> Result<Self, String> {
        let client = redis::Client::open(url).map_err(|e| {
            error!("Invalid Redis URL '{}': {}", url, e);
            format!("Failed to create Redis client: {e}")
        })?;

        // 启动时用同步连接做一次 PING，失败则交由启动流程回退到内存缓存
        let mut conn = client.get_connection().map_err(|e| {
            error!(
                "Failed to connect to Redis server: {}. Check Redis server status and URL: {}",
                e, url
            );
            format!("Redis connection failed: {e}")
        })?;
        let pong: String = redis::cmd("PING").query(&mut conn).map_err(|e| {
            error!("Failed to ping Redis server: {}", e);
            format!("Redis ping failed: {e}")
        })?;
        debug!("Redis connection test successful: {}", pong);

        debug!(
            "RedisObjectCache created with prefix: '{}', TTL: {}s",
            key_prefix, ttl
        );

        Ok(Self {
            client,
            key_prefix: key_prefix.to_string(),
            ttl,
        })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        let result: redis::RedisResult<Option<String>> = conn.get(redis_key).await;

        match result {
            Ok(Some(data)) => {
                debug!("Successfully retrieved key: {}", key);
                CacheResult::Found(data)
            }
            Ok(None) => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let redis_key = self.make_key(&key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return;
            }
        };

        // 使用传入的 TTL，如果为 0 则使用默认 TTL
        let effective_ttl = if ttl == 0 { self.ttl } else { ttl };

        if let Err(e) = conn
            .set_ex::<String, String, ()>(redis_key, value, effective_ttl)
            .await
        {
            error!("Failed to insert key '{}' into cache: {}", key, e);
        } else {
            debug!("Inserted key into cache: {} (TTL: {}s)", key, effective_ttl);
        }
    }

    async fn remove(&self, key: &str) {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return;
            }
        };

        match conn.del::<String, i32>(redis_key).await {
            Ok(deleted) if deleted > 0 => debug!("Removed key from cache: {}", key),
            Ok(_) => debug!("Key not found in cache for removal: {}", key),
            Err(e) => error!("Failed to remove key '{}': {}", key, e),
        }
    }

    async fn invalidate_all(&self) {
        // 共享 Redis 实例上不做全量清除
        warn!("RedisObjectCache does not implement invalidate_all");
    }
}
