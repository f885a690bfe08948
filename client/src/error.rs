//! Errors surfaced by [`crate::ProductService`].

use product_core::{ApiError, FormError};
use thiserror::Error;

/// The HTTP round-trip itself failed (connection refused, DNS, body read).
/// Non-2xx responses are not transport errors.
#[derive(Debug, Error)]
#[error("transport failed for {method} {url}: {message}")]
pub struct TransportError {
    pub method: &'static str,
    pub url: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base URL variable `{0}` is not set")]
    MissingBaseUrl(String),
}

/// Everything a product operation can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid form input: {0}")]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// True when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
