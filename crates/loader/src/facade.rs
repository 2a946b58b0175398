use std::sync::Arc;

use serde_json::Value;
use tracing::{error, warn};

use models::{Notification, SupportTicket, UserProfile};

use crate::errors::LoadError;
use crate::loader::DataLoader;

/// UI-boundary view of the loader.
///
/// Renderers never handle a [`LoadError`]: every accessor here catches it,
/// logs a diagnostic and reports absence — `None` or an empty list — which
/// the UI draws as an empty/placeholder section. Callers that need the real
/// error go through [`PortalData::loader`] instead.
#[derive(Clone)]
pub struct PortalData {
    loader: Arc<DataLoader>,
}

impl PortalData {
    pub fn new(loader: Arc<DataLoader>) -> Self {
        Self { loader }
    }

    /// The underlying loader, for callers that want errors instead of
    /// empty states.
    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    fn absorb<T>(resource: &str, res: Result<T, LoadError>) -> Option<T> {
        match res {
            Ok(v) => Some(v),
            Err(e) => {
                error!(resource, error = %e, "load failed, rendering empty state");
                None
            }
        }
    }

    /// The user's profile record, typed. Absent on load failure, unknown
    /// user, or a record that does not match the profile schema.
    pub async fn profile(&self, user_id: Option<&str>) -> Option<UserProfile> {
        let record = Self::absorb("user profile", self.loader.user_profile(user_id).await)??;
        match serde_json::from_value(record) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(error = %e, "user record does not match the profile schema");
                None
            }
        }
    }

    pub async fn dashboard_stats(&self, user_id: Option<&str>) -> Option<Value> {
        Self::absorb("dashboard stats", self.loader.dashboard_stats(user_id).await)?
    }

    pub async fn annual_performance(&self, user_id: Option<&str>) -> Option<Value> {
        Self::absorb("annual performance", self.loader.annual_performance(user_id).await)?
    }

    pub async fn earnings_summary(&self, user_id: Option<&str>) -> Option<Value> {
        Self::absorb("earnings summary", self.loader.earnings_summary(user_id).await)?
    }

    pub async fn payout_history(&self, user_id: Option<&str>) -> Option<Value> {
        Self::absorb("payout history", self.loader.payout_history(user_id).await)?
    }

    pub async fn order_tracking(&self, user_id: Option<&str>) -> Option<Value> {
        Self::absorb("order tracking", self.loader.order_tracking(user_id).await)?
    }

    pub async fn config(&self) -> Option<Value> {
        Self::absorb("portal config", self.loader.config().await)
    }

    pub async fn form_options(&self) -> Option<Value> {
        Self::absorb("form options", self.loader.form_options().await)
    }

    pub async fn product_analysis(&self) -> Option<Value> {
        Self::absorb("product analysis", self.loader.product_analysis().await)
    }

    pub async fn market_analysis(&self) -> Option<Value> {
        Self::absorb("market analysis", self.loader.market_analysis().await)
    }

    pub async fn resource_center(&self) -> Option<Value> {
        Self::absorb("resource center", self.loader.resource_center().await)
    }

    pub async fn faq(&self) -> Option<Value> {
        Self::absorb("faq", self.loader.faq().await)
    }

    pub async fn terms(&self) -> Option<Value> {
        Self::absorb("terms", self.loader.terms().await)
    }

    /// Typed support tickets; malformed entries are skipped with a warning,
    /// a failed load is an empty list.
    pub async fn support_tickets(&self) -> Vec<SupportTicket> {
        let entries =
            Self::absorb("support tickets", self.loader.support_tickets().await).unwrap_or_default();
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(ticket) => Some(ticket),
                Err(e) => {
                    warn!(error = %e, "skipping malformed support ticket");
                    None
                }
            })
            .collect()
    }

    /// Merged global + per-user notifications, newest first, typed. The
    /// loader already sorted them; deserialization keeps the order.
    pub async fn notifications(&self, user_id: Option<&str>) -> Vec<Notification> {
        let entries = Self::absorb("notifications", self.loader.merged_notifications(user_id).await)
            .unwrap_or_default();
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(notification) => Some(notification),
                Err(e) => {
                    warn!(error = %e, "skipping malformed notification");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_portal() -> PortalData {
        PortalData::new(Arc::new(DataLoader::with_options(
            "http://unreachable.invalid/data",
            true,
            std::time::Duration::from_secs(5),
        )))
    }

    #[tokio::test]
    async fn profile_is_typed_and_absent_for_unknown_users() {
        let portal = offline_portal();
        let profile = portal.profile(None).await.expect("substitute user exists");
        assert_eq!(profile.user_id, "USER_001");
        assert_eq!(profile.level.unwrap().progress.unwrap().current, 45);

        assert!(portal.profile(Some("USER_404")).await.is_none());
    }

    #[tokio::test]
    async fn notifications_come_back_typed_and_sorted() {
        let portal = offline_portal();
        let notifications = portal.notifications(None).await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].tag.as_ref().unwrap().kind, "important");
    }

    #[tokio::test]
    async fn empty_substitute_documents_render_as_present_but_empty() {
        // Offline substitutes for unlisted paths are `{}`: a per-user
        // document resolves it as global and hands it through.
        let portal = offline_portal();
        assert_eq!(portal.dashboard_stats(None).await, Some(serde_json::json!({})));
        assert!(portal.support_tickets().await.is_empty());
    }
}
