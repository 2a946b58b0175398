//! One-shot snapshot of a user's portal data, printed as JSON.
//!
//! Usage: `portal [USER_ID]`. Pulls profile, dashboard stats, merged
//! notifications and earnings summary through the UI-boundary facade, so
//! unavailable resources come out as `null`/empty exactly the way the
//! portal frontend would render them.

use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use serde_json::json;
use tracing::info;

use loader::{DataLoader, PortalData};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let cfg = configs::AppConfig::load_and_validate().unwrap_or_else(|e| {
        info!(error = %e, "no usable config file, falling back to defaults");
        let mut cfg = configs::AppConfig::default();
        cfg.portal.normalize_from_env();
        cfg
    });

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(run(cfg))
}

async fn run(cfg: configs::AppConfig) -> anyhow::Result<()> {
    let loader = DataLoader::with_options(
        cfg.portal.base_url.clone(),
        cfg.portal.offline,
        Duration::from_secs(cfg.portal.request_timeout_secs),
    );
    loader.set_current_user(cfg.portal.default_user.clone());
    if let Some(user) = std::env::args().nth(1) {
        loader.set_current_user(user);
    }
    let user = loader.current_user();
    info!(%user, base_url = loader.base_url(), offline = loader.offline(), "snapshotting portal data");

    let portal = PortalData::new(Arc::new(loader));
    let snapshot = json!({
        "user": user,
        "profile": portal.profile(None).await,
        "dashboardStats": portal.dashboard_stats(None).await,
        "notifications": portal.notifications(None).await,
        "earningsSummary": portal.earnings_summary(None).await,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
