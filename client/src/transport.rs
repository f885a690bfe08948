//! Executes the core's plain-data requests.
//!
//! `Transport` is the seam between the sans-IO core and the network: the
//! service hands it an `HttpRequest` and gets back an `HttpResponse`, with
//! non-2xx statuses returned as data so the core decides what they mean.
//! Tests substitute their own implementation.

use std::future::Future;

use product_core::{HttpMethod, HttpRequest, HttpResponse};
use reqwest::Method;

use crate::error::TransportError;

pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport. Cloning shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let failed = |e: reqwest::Error| TransportError {
            method: request.method.as_str(),
            url: request.path.clone(),
            message: e.to_string(),
        };

        let mut builder = self.client.request(method(request.method), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(failed)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.text().await.map_err(failed)?;

        Ok(HttpResponse { status, headers, body })
    }
}
