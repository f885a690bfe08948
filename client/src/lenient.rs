//! The forgiving surface for UI code that only wants "data or nothing".
//!
//! Each method runs the strict operation and, on failure, logs the error and
//! returns a safe default: an empty list, `None`, or plain completion. Not
//! found, server errors and malformed payloads all collapse to the same
//! outcome here; use [`ProductService`] directly to tell them apart.

use product_core::{FormData, FormError, Product, ProductId};

use crate::error::Error;
use crate::service::ProductService;
use crate::transport::Transport;

#[derive(Debug)]
pub struct LenientService<'a, T> {
    inner: &'a ProductService<T>,
}

impl<'a, T: Transport> LenientService<'a, T> {
    pub(crate) fn new(inner: &'a ProductService<T>) -> Self {
        Self { inner }
    }

    pub async fn add_product(&self, form: &FormData) {
        if let Err(e) = self.inner.add_product(form).await {
            tracing::error!(error = %e, "failed to add product");
        }
    }

    pub async fn get_products(&self) -> Vec<Product> {
        self.inner.get_products().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to fetch products");
            Vec::new()
        })
    }

    pub async fn get_product_by_id(&self, id: ProductId) -> Option<Product> {
        match self.inner.get_product_by_id(id).await {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::error!(id, error = %e, "failed to fetch product");
                None
            }
        }
    }

    /// Invalid form input never reaches the network. An unusable price or a
    /// missing price/availability is logged as an error; a form that is
    /// merely not a valid product is a quiet no-op.
    pub async fn update_product(&self, form: &FormData, id: ProductId) {
        match self.inner.update_product(form, id).await {
            Ok(()) => {}
            Err(Error::Form(e)) if is_quiet_update_failure(&e) => {
                tracing::debug!(id, error = %e, "update skipped")
            }
            Err(e) => tracing::error!(id, error = %e, "failed to update product"),
        }
    }

    pub async fn delete_product(&self, id: ProductId) {
        if let Err(e) = self.inner.delete_product(id).await {
            tracing::error!(id, error = %e, "failed to delete product");
        }
    }

    pub async fn update_product_availability(&self, id: ProductId) {
        if let Err(e) = self.inner.update_product_availability(id).await {
            tracing::error!(id, error = %e, "failed to update availability");
        }
    }

    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        self.inner.search_products(query).await.unwrap_or_else(|e| {
            tracing::error!(query, error = %e, "failed to search products");
            Vec::new()
        })
    }
}

fn is_quiet_update_failure(error: &FormError) -> bool {
    match error {
        FormError::InvalidNumber { .. } => false,
        FormError::MissingField(field) => !matches!(*field, "price" | "availability"),
        FormError::InvalidBoolean { .. } => true,
    }
}
