//! Synchronous API client core for the product catalog service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ProductClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Untrusted input is checked on both sides: form strings are coerced by
//!   [`form`], response payloads are validated by [`schema`].
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod schema;
pub mod types;

pub use client::ProductClient;
pub use error::{ApiError, FormError};
pub use form::{parse_availability, parse_price, FormData};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use schema::{Issue, ValidationError};
pub use types::{DraftProduct, Product, ProductId};
