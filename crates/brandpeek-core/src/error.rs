use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors produced while reading a fetched brand collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The top-level JSON value was neither an object nor `null`.
    #[error("expected a JSON object of brands, found {found}")]
    NotAnObject { found: &'static str },
}
