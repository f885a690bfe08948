//! Async host for the product catalog API.
//!
//! # Overview
//! Pairs the sans-IO `product-core` with a network [`Transport`] and exposes
//! the seven catalog operations in two shapes:
//!
//! - [`ProductService`] returns `Result` so callers decide how to react.
//! - [`LenientService`] (via [`ProductService::lenient`]) logs failures and
//!   falls back to empty results, for UI code that cannot do anything useful
//!   with an error.
//!
//! ```no_run
//! # async fn demo() -> Result<(), product_client::Error> {
//! use product_client::{Endpoint, ProductService};
//!
//! product_client::telemetry::init();
//! let service = ProductService::new(Endpoint::fixed("http://localhost:3000"));
//! let chairs = service.search_products("chair").await?;
//! let everything = service.lenient().get_products().await;
//! # let _ = (chairs, everything);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod lenient;
pub mod service;
pub mod telemetry;
pub mod transport;

pub use config::Endpoint;
pub use error::{ConfigError, Error, Result, TransportError};
pub use lenient::LenientService;
pub use service::ProductService;
pub use transport::{HttpTransport, Transport};

pub use product_core::{FormData, Product, ProductId};
