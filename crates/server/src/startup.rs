use std::{env, net::SocketAddr};

use dotenvy::dotenv;
use tracing::{info, warn};

use common::utils::logging::init_logging_default;

use crate::routes::build_router;

/// Load host/port/fixture-dir from configs or env vars, with fallbacks.
fn load_settings() -> anyhow::Result<(SocketAddr, String)> {
    let (host, port, fixture_dir) = match configs::load_default() {
        Ok(cfg) => (cfg.server.host, cfg.server.port, cfg.server.fixture_dir),
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            let fixture_dir = env::var("FIXTURE_DIR").unwrap_or_else(|_| "data".to_string());
            (host, port, fixture_dir)
        }
    };
    Ok((format!("{}:{}", host, port).parse()?, fixture_dir))
}

async fn ensure_env(fixture_dir: &str) {
    if tokio::fs::metadata(fixture_dir).await.is_err() {
        warn!(%fixture_dir, "fixture directory not found; /data requests will 404");
    }
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let (addr, fixture_dir) = load_settings()?;
    ensure_env(&fixture_dir).await;

    let app = build_router(&fixture_dir);

    info!(%addr, %fixture_dir, "starting fixture server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
