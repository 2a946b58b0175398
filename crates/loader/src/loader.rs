use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ResourceCache;
use crate::errors::LoadError;
use crate::mock;
use crate::resolve::resolve_for_user;

/// Well-known resource paths, relative to the configured base URL.
pub mod paths {
    pub const CONFIG: &str = "config.json";
    pub const FORM_OPTIONS: &str = "form-options.json";
    pub const USERS: &str = "users/users.json";
    pub const NOTIFICATIONS: &str = "users/notifications.json";
    pub const DASHBOARD_STATS: &str = "dashboard/dashboard-stats.json";
    pub const ANNUAL_PERFORMANCE: &str = "dashboard/annual-performance.json";
    pub const PRODUCT_ANALYSIS: &str = "dashboard/product-analysis.json";
    pub const MARKET_ANALYSIS: &str = "dashboard/market-analysis.json";
    pub const EARNINGS_SUMMARY: &str = "earnings/earnings-summary.json";
    pub const PAYOUT_HISTORY: &str = "earnings/payout-history.json";
    pub const ORDER_TRACKING: &str = "earnings/order-tracking.json";
    pub const RESOURCE_CENTER: &str = "content/resource-center.json";
    pub const FAQ: &str = "content/faq.json";
    pub const TERMS: &str = "content/terms.json";
    pub const SUPPORT_TICKETS: &str = "support-tickets.json";
}

/// User id every loader starts out scoped to.
pub const DEFAULT_USER: &str = "USER_001";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches named JSON documents from a base URL, caching each for the
/// lifetime of the instance.
///
/// One instance is constructed per application session and shared by
/// reference; all state (cache, current user) lives on the instance, there
/// are no globals. Concurrent loads of the same uncached path may each
/// fetch; documents are immutable snapshots, so the last insert winning is
/// harmless. Loads are never deduplicated, cancelled or retried here.
pub struct DataLoader {
    http: reqwest::Client,
    base_url: String,
    offline: bool,
    cache: ResourceCache,
    current_user: ArcSwap<String>,
}

impl DataLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, false, DEFAULT_TIMEOUT)
    }

    /// `offline` skips the network entirely and serves built-in substitute
    /// documents; a `file:` base URL implies it, since no HTTP fetch can
    /// reach one.
    pub fn with_options(base_url: impl Into<String>, offline: bool, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let offline = offline || base_url.starts_with("file:");
        let http = reqwest::Client::builder()
            .user_agent(concat!("bel-portal/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .expect("reqwest client with static options");
        Self {
            http,
            base_url,
            offline,
            cache: ResourceCache::new(),
            current_user: ArcSwap::from_pointee(DEFAULT_USER.to_string()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn offline(&self) -> bool {
        self.offline
    }

    pub fn current_user(&self) -> String {
        self.current_user.load().as_ref().clone()
    }

    /// Replace the current user id. Nothing else changes; documents already
    /// cached are not re-resolved.
    pub fn set_current_user(&self, user_id: impl Into<String>) {
        self.current_user.store(Arc::new(user_id.into()));
    }

    /// Load a document by path, from cache when possible.
    ///
    /// Every successful load, substitute loads included, populates the
    /// cache under the exact path string given.
    pub async fn load(&self, path: &str) -> Result<Value, LoadError> {
        if let Some(doc) = self.cache.get(path).await {
            debug!(%path, "cache hit");
            return Ok(doc);
        }
        if self.offline {
            return Ok(self.load_substitute(path).await);
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching resource");
        let resp = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            // An unbuildable request means the URL scheme itself is
            // unfetchable (file: and friends): substitute instead of failing.
            Err(e) if e.is_builder() => {
                warn!(%path, error = %e, "fetch impossible for this url, serving substitute");
                return Ok(self.load_substitute(path).await);
            }
            Err(e) => {
                return Err(LoadError::Transport { path: path.to_string(), source: e });
            }
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Http { path: path.to_string(), status: status.as_u16() });
        }
        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::Transport { path: path.to_string(), source: e })?;
        let doc: Value = serde_json::from_str(&body)
            .map_err(|e| LoadError::Parse { path: path.to_string(), source: e })?;

        self.cache.insert(path, doc.clone()).await;
        debug!(%path, "resource loaded");
        Ok(doc)
    }

    async fn load_substitute(&self, path: &str) -> Value {
        warn!(%path, "serving built-in substitute document");
        let doc = mock::substitute(path);
        self.cache.insert(path, doc.clone()).await;
        doc
    }

    /// Drop one cached document.
    pub async fn clear_cache(&self, path: &str) {
        self.cache.remove(path).await;
    }

    /// Drop every cached document.
    pub async fn clear_cache_all(&self) {
        self.cache.clear().await;
    }

    fn user_or_current(&self, user_id: Option<&str>) -> String {
        match user_id {
            Some(id) => id.to_string(),
            None => self.current_user(),
        }
    }

    async fn load_scoped(&self, path: &str, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        let doc = self.load(path).await?;
        Ok(resolve_for_user(&doc, &self.user_or_current(user_id)))
    }

    // Per-user documents. `None` means "nothing for this user", a real
    // failure comes back as the error.

    pub async fn user_profile(&self, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        self.load_scoped(paths::USERS, user_id).await
    }

    pub async fn dashboard_stats(&self, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        self.load_scoped(paths::DASHBOARD_STATS, user_id).await
    }

    pub async fn annual_performance(&self, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        self.load_scoped(paths::ANNUAL_PERFORMANCE, user_id).await
    }

    pub async fn earnings_summary(&self, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        self.load_scoped(paths::EARNINGS_SUMMARY, user_id).await
    }

    pub async fn payout_history(&self, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        self.load_scoped(paths::PAYOUT_HISTORY, user_id).await
    }

    pub async fn order_tracking(&self, user_id: Option<&str>) -> Result<Option<Value>, LoadError> {
        self.load_scoped(paths::ORDER_TRACKING, user_id).await
    }

    // Global documents.

    pub async fn config(&self) -> Result<Value, LoadError> {
        self.load(paths::CONFIG).await
    }

    pub async fn form_options(&self) -> Result<Value, LoadError> {
        self.load(paths::FORM_OPTIONS).await
    }

    pub async fn product_analysis(&self) -> Result<Value, LoadError> {
        self.load(paths::PRODUCT_ANALYSIS).await
    }

    pub async fn market_analysis(&self) -> Result<Value, LoadError> {
        self.load(paths::MARKET_ANALYSIS).await
    }

    pub async fn resource_center(&self) -> Result<Value, LoadError> {
        self.load(paths::RESOURCE_CENTER).await
    }

    pub async fn faq(&self) -> Result<Value, LoadError> {
        self.load(paths::FAQ).await
    }

    pub async fn terms(&self) -> Result<Value, LoadError> {
        self.load(paths::TERMS).await
    }

    /// The `tickets` list of the support document; empty when the key is
    /// missing.
    pub async fn support_tickets(&self) -> Result<Vec<Value>, LoadError> {
        let doc = self.load(paths::SUPPORT_TICKETS).await?;
        Ok(doc
            .get("tickets")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Global notifications plus the user's own, newest first.
    ///
    /// Sorted descending on the `date` field parsed as a calendar date;
    /// entries without a parsable date sink to the end. The sort is stable,
    /// so equal dates keep global-before-user insertion order.
    pub async fn merged_notifications(&self, user_id: Option<&str>) -> Result<Vec<Value>, LoadError> {
        let doc = self.load(paths::NOTIFICATIONS).await?;
        let user = self.user_or_current(user_id);

        let mut merged: Vec<Value> = doc
            .get("globalNotifications")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if let Some(Value::Array(own)) = resolve_for_user(&doc, &user) {
            merged.extend(own);
        }
        merged.sort_by(|a, b| entry_date(b).cmp(&entry_date(a)));
        Ok(merged)
    }
}

fn entry_date(entry: &Value) -> NaiveDate {
    entry
        .get("date")
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or(NaiveDate::MIN)
}
