use crate::cache::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

// 插件名 -> 构造器
static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    let name = name.into();
    match OBJECT_CACHE_REGISTRY.write() {
        Ok(mut registry) => {
            registry.insert(name, constructor);
        }
        Err(poisoned) => {
            poisoned.into_inner().insert(name, constructor);
        }
    }
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .ok()
        .and_then(|registry| registry.get(name).cloned())
}

/// 已注册的插件名（排序后）
pub fn registered_object_cache_plugins() -> Vec<String> {
    let mut names: Vec<String> = OBJECT_CACHE_REGISTRY
        .read()
        .map(|registry| registry.keys().cloned().collect())
        .unwrap_or_default();
    names.sort();
    names
}

pub fn debug_object_cache_registry() {
    let names = registered_object_cache_plugins();
    if names.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins: {}", names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheResult;
    use async_trait::async_trait;

    struct NullCache;

    #[async_trait]
    impl ObjectCache for NullCache {
        async fn get_raw(&self, _key: &str) -> CacheResult<String> {
            CacheResult::NotFound
        }
        async fn insert_raw(&self, _key: String, _value: String, _ttl: u64) {}
        async fn remove(&self, _key: &str) {}
        async fn invalidate_all(&self) {}
    }

    #[tokio::test]
    async fn test_register_and_construct() {
        register_object_cache_plugin(
            "null-test",
            Arc::new(|| Box::pin(async { Ok(Box::new(NullCache) as Box<dyn ObjectCache>) })),
        );

        assert!(registered_object_cache_plugins().contains(&"null-test".to_string()));
        let constructor = get_object_cache_plugin("null-test").expect("plugin registered");
        let cache = constructor().await.expect("constructor succeeds");
        assert_eq!(cache.get_raw("anything").await, CacheResult::NotFound);
        assert!(get_object_cache_plugin("missing").is_none());
    }
}
