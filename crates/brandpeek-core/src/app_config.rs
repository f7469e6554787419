#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Log filter used when neither `RUST_LOG` nor `BRANDPEEK_LOG_LEVEL` is set.
    ///
    /// Development shows per-command progress; test and production runs only
    /// report problems.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "info",
            Environment::Test | Environment::Production => "warn",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for fetching and ranking brands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Root of the brand data source; `brands.json` is resolved against it.
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Maximum number of entries in the ranked list.
    pub top_limit: usize,
}
