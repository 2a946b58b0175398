use thiserror::Error;

/// Failure of a primitive resource load.
///
/// This is the only structured error the crate produces. The facade catches
/// it at the UI boundary and degrades to absence; tests and binaries that
/// call the loader directly see the real cause.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("http status {status} loading {path}")]
    Http { path: String, status: u16 },
    #[error("network error loading {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid json in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The resource path the failed load was for.
    pub fn path(&self) -> &str {
        match self {
            LoadError::Http { path, .. }
            | LoadError::Transport { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}
