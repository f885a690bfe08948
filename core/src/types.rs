//! Domain DTOs for the product catalog API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Values
//! coming off the wire go through [`crate::schema`] before they become one of
//! these types; values coming from a form go through [`crate::form`].

use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
pub type ProductId = i64;

/// A catalog product as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Payload for creating a product. The server assigns `id` and
/// `availability`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftProduct {
    pub name: String,
    pub price: f64,
}
