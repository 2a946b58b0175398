use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub portal: PortalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the fixture server exposes under `/data`.
    #[serde(default = "default_fixture_dir")]
    pub fixture_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, fixture_dir: default_fixture_dir() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Base URL all resource paths are resolved against.
    pub base_url: String,
    #[serde(default = "default_user")]
    pub default_user: String,
    /// Skip the network entirely and serve built-in substitute documents.
    #[serde(default)]
    pub offline: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/data/".into(),
            default_user: default_user(),
            offline: false,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_fixture_dir() -> String { "data".into() }
fn default_user() -> String { "USER_001".into() }
fn default_request_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.portal.normalize_from_env();
        self.portal.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.fixture_dir.trim().is_empty() {
            self.fixture_dir = default_fixture_dir();
        }
        Ok(())
    }
}

impl PortalConfig {
    /// Environment variables win over the TOML file so deployments can
    /// repoint the data host without editing config.
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("PORTAL_BASE_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(user) = std::env::var("PORTAL_USER") {
            if !user.trim().is_empty() {
                self.default_user = user;
            }
        }
        // Resource paths are appended verbatim.
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!("portal.base_url is empty; set it in config.toml or PORTAL_BASE_URL"));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("file:")) {
            return Err(anyhow!("portal.base_url must start with http://, https:// or file:"));
        }
        if self.default_user.trim().is_empty() {
            return Err(anyhow!("portal.default_user must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("portal.request_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}
