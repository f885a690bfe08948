//! Where the product API lives.
//!
//! The base URL either comes fixed from the caller or from an environment
//! variable that is re-read on every call, so a long-lived service picks up
//! a changed variable without being rebuilt.

use crate::error::ConfigError;

/// Environment variable consulted by [`Endpoint::from_env`].
pub const DEFAULT_URL_VAR: &str = "PRODUCT_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Fixed(String),
    Env { var: String },
}

impl Endpoint {
    pub fn fixed(base_url: impl Into<String>) -> Self {
        Endpoint::Fixed(base_url.into())
    }

    /// Read `PRODUCT_API_URL` at call time, after loading `.env` if present.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }
        Endpoint::Env {
            var: DEFAULT_URL_VAR.to_string(),
        }
    }

    pub fn resolve(&self) -> Result<String, ConfigError> {
        match self {
            Endpoint::Fixed(url) => Ok(url.clone()),
            Endpoint::Env { var } => std::env::var(var)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingBaseUrl(var.clone())),
        }
    }
}
