//! Error types for the product API client core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the product does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. Payloads that parse as JSON but do not match
//! the declared shape are `Validation` errors carrying every issue found.

use thiserror::Error;

use crate::schema::ValidationError;

/// Errors returned by `ProductClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The payload did not match the expected schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors produced while coercing raw form input into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field `{field}` is not a boolean: {value:?}")]
    InvalidBoolean { field: &'static str, value: String },
}
