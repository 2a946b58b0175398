use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;

/// In-memory map of resource path -> already-parsed document.
///
/// Lookup is by exact path string, no normalization. Entries live until
/// explicitly removed; there is no expiry and no size bound. A fresh load
/// replaces the entry wholesale, cached values are never mutated in place.
#[derive(Default)]
pub struct ResourceCache {
    inner: RwLock<HashMap<String, Value>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, path: &str) -> Option<Value> {
        self.inner.read().await.get(path).cloned()
    }

    pub async fn insert(&self, path: &str, doc: Value) {
        self.inner.write().await.insert(path.to_string(), doc);
    }

    /// Remove one entry; returns whether it existed.
    pub async fn remove(&self, path: &str) -> bool {
        self.inner.write().await.remove(path).is_some()
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_get_remove() {
        let cache = ResourceCache::new();
        assert!(cache.is_empty().await);

        cache.insert("a.json", json!({"x": 1})).await;
        cache.insert("b.json", json!([1, 2])).await;
        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get("a.json").await, Some(json!({"x": 1})));

        // exact-key semantics, no normalization
        assert_eq!(cache.get("./a.json").await, None);

        assert!(cache.remove("a.json").await);
        assert!(!cache.remove("a.json").await);
        assert_eq!(cache.get("b.json").await, Some(json!([1, 2])));

        cache.clear().await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn insert_replaces_existing_entry() {
        let cache = ResourceCache::new();
        cache.insert("a.json", json!({"v": 1})).await;
        cache.insert("a.json", json!({"v": 2})).await;
        assert_eq!(cache.get("a.json").await, Some(json!({"v": 2})));
        assert_eq!(cache.len().await, 1);
    }
}
