//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Read endpoints wrap their payload as `{"data": ...}`; the parse methods
//! unwrap the envelope and run the payload through [`crate::schema`].

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::schema::{self, ValidationError};
use crate::types::{DraftProduct, Product, ProductId};

const PRODUCTS_PATH: &str = "/api/products";
const ENVELOPE_KEY: &str = "data";

/// Synchronous, stateless client for the product API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{PRODUCTS_PATH}", self.base_url)
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}{PRODUCTS_PATH}/{id}", self.base_url)
    }

    /// The draft is checked against the creation schema before it is sent;
    /// a non-finite price serializes as `null` and is rejected here.
    pub fn build_add_product(&self, input: &DraftProduct) -> Result<HttpRequest, ApiError> {
        let payload = serde_json::to_value(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let draft = schema::draft_product(&payload)?;
        json_request(HttpMethod::Post, self.collection_url(), &draft)
    }

    pub fn build_get_products(&self) -> HttpRequest {
        bare_request(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_product(&self, id: ProductId) -> HttpRequest {
        bare_request(HttpMethod::Get, self.item_url(id))
    }

    /// The query is form-urlencoded, so a plain word appears verbatim.
    pub fn build_search_products(&self, query: &str) -> HttpRequest {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        bare_request(
            HttpMethod::Get,
            format!("{}?search={encoded}", self.collection_url()),
        )
    }

    pub fn build_update_product(&self, product: &Product) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(product.id), product)
    }

    pub fn build_delete_product(&self, id: ProductId) -> HttpRequest {
        bare_request(HttpMethod::Delete, self.item_url(id))
    }

    pub fn build_update_availability(&self, id: ProductId) -> HttpRequest {
        bare_request(HttpMethod::Patch, self.item_url(id))
    }

    pub fn parse_add_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_get_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        let data = envelope(&response)?;
        Ok(schema::products(&data, ENVELOPE_KEY)?)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        let data = envelope(&response)?;
        Ok(schema::product(&data, ENVELOPE_KEY)?)
    }

    pub fn parse_search_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        self.parse_get_products(response)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_update_availability(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn bare_request(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_request<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status, parse the body and pull out the `data` member.
fn envelope(response: &HttpResponse) -> Result<Value, ApiError> {
    check_status(response)?;
    let mut body: Value =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    match body.get_mut(ENVELOPE_KEY) {
        Some(data) => Ok(data.take()),
        None => Err(ValidationError::single(ENVELOPE_KEY, "missing field").into()),
    }
}
