//! Async product operations over a [`Transport`].
//!
//! # Design
//! Every operation resolves the base URL, asks the core to build the
//! request, runs exactly one round-trip and hands the response back to the
//! core for parsing. Input that fails coercion never reaches the network.
//! The service holds no mutable state, so clones and concurrent calls are
//! independent.

use product_core::{DraftProduct, FormData, HttpRequest, HttpResponse, Product, ProductClient, ProductId};
use tracing::instrument;

use crate::config::Endpoint;
use crate::error::Result;
use crate::lenient::LenientService;
use crate::transport::{HttpTransport, Transport};

#[derive(Debug, Clone)]
pub struct ProductService<T = HttpTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl ProductService<HttpTransport> {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_transport(endpoint, HttpTransport::new())
    }

    /// Service against `PRODUCT_API_URL`.
    pub fn from_env() -> Self {
        Self::new(Endpoint::from_env())
    }
}

impl<T: Transport> ProductService<T> {
    pub fn with_transport(endpoint: Endpoint, transport: T) -> Self {
        Self { endpoint, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log-and-swallow view over the same operations.
    pub fn lenient(&self) -> LenientService<'_, T> {
        LenientService::new(self)
    }

    fn client(&self) -> Result<ProductClient> {
        Ok(ProductClient::new(&self.endpoint.resolve()?))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(method = %request.method, url = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "response received");
        Ok(response)
    }

    #[instrument(skip_all)]
    pub async fn add_product(&self, form: &FormData) -> Result<()> {
        let draft = DraftProduct::from_form(form)?;
        let client = self.client()?;
        let response = self.send(client.build_add_product(&draft)?).await?;
        Ok(client.parse_add_product(response)?)
    }

    #[instrument(skip_all)]
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        let client = self.client()?;
        let response = self.send(client.build_get_products()).await?;
        Ok(client.parse_get_products(response)?)
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: ProductId) -> Result<Product> {
        let client = self.client()?;
        let response = self.send(client.build_get_product(id)).await?;
        Ok(client.parse_get_product(response)?)
    }

    #[instrument(skip(self, form))]
    pub async fn update_product(&self, form: &FormData, id: ProductId) -> Result<()> {
        let product = Product::from_form(id, form)?;
        let client = self.client()?;
        let response = self.send(client.build_update_product(&product)?).await?;
        Ok(client.parse_update_product(response)?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        let client = self.client()?;
        let response = self.send(client.build_delete_product(id)).await?;
        Ok(client.parse_delete_product(response)?)
    }

    #[instrument(skip(self))]
    pub async fn update_product_availability(&self, id: ProductId) -> Result<()> {
        let client = self.client()?;
        let response = self.send(client.build_update_availability(id)).await?;
        Ok(client.parse_update_availability(response)?)
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let client = self.client()?;
        let response = self.send(client.build_search_products(query)).await?;
        Ok(client.parse_search_products(response)?)
    }
}
