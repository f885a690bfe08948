//! Service behavior with a scripted transport: what goes on the wire and
//! how each failure mode surfaces on the strict and lenient surfaces.

use std::sync::{Arc, Mutex};

use product_client::{
    Endpoint, Error, FormData, Product, ProductService, Transport, TransportError,
};
use product_core::{ApiError, FormError, HttpMethod, HttpRequest, HttpResponse};

/// Records every request and answers with a fixed outcome.
#[derive(Clone)]
struct Scripted {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    outcome: Outcome,
}

#[derive(Clone)]
enum Outcome {
    Respond(u16, &'static str),
    Unreachable,
}

impl Scripted {
    fn respond(status: u16, body: &'static str) -> Self {
        Self {
            requests: Arc::default(),
            outcome: Outcome::Respond(status, body),
        }
    }

    fn unreachable() -> Self {
        Self {
            requests: Arc::default(),
            outcome: Outcome::Unreachable,
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for Scripted {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.outcome {
            Outcome::Respond(status, body) => Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }),
            Outcome::Unreachable => Err(TransportError {
                method: request.method.as_str(),
                url: request.path,
                message: "connection refused".to_string(),
            }),
        }
    }
}

fn service(transport: Scripted) -> ProductService<Scripted> {
    ProductService::with_transport(Endpoint::fixed("http://api.test"), transport)
}

fn body_of(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

const ONE_LAMP: &str = r#"{"data":[{"id":1,"name":"Lamp","price":25,"availability":true}]}"#;

#[tokio::test]
async fn add_product_posts_coerced_draft_once() {
    let transport = Scripted::respond(201, "");
    let form = FormData::new().with("name", "Lamp").with("price", "25");

    service(transport.clone()).add_product(&form).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "http://api.test/api/products");
    let body = body_of(&requests[0]);
    assert_eq!(body["name"], "Lamp");
    assert_eq!(body["price"].as_f64(), Some(25.0));
}

#[tokio::test]
async fn add_product_with_bad_price_sends_nothing() {
    let transport = Scripted::respond(201, "");
    let form = FormData::new().with("name", "Lamp").with("price", "cheap");

    let err = service(transport.clone()).add_product(&form).await.unwrap_err();

    assert!(matches!(err, Error::Form(FormError::InvalidNumber { .. })));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn get_products_returns_payload_unchanged() {
    let products = service(Scripted::respond(200, ONE_LAMP)).get_products().await.unwrap();
    assert_eq!(
        products,
        vec![Product {
            id: 1,
            name: "Lamp".to_string(),
            price: 25.0,
            availability: true,
        }]
    );
}

#[tokio::test]
async fn get_products_malformed_payload_is_validation_error() {
    let err = service(Scripted::respond(200, r#"{"data":[{"id":1}]}"#))
        .get_products()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Validation(_))));
}

#[tokio::test]
async fn get_product_by_id_not_found() {
    let err = service(Scripted::respond(404, "")).get_product_by_id(999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn search_puts_query_in_search_parameter() {
    let transport = Scripted::respond(200, r#"{"data":[]}"#);
    let found = service(transport.clone()).search_products("chair").await.unwrap();

    assert!(found.is_empty());
    assert!(transport.requests()[0].path.ends_with("/api/products?search=chair"));
}

#[tokio::test]
async fn update_product_coerces_availability() {
    for (raw, expected) in [("true", true), ("false", false)] {
        let transport = Scripted::respond(200, "");
        let form = FormData::new()
            .with("name", "Lamp")
            .with("price", "25")
            .with("availability", raw);

        service(transport.clone()).update_product(&form, 1).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].path, "http://api.test/api/products/1");
        let body = body_of(&requests[0]);
        assert_eq!(body["availability"], expected);
        assert_eq!(body["id"], 1);
    }
}

#[tokio::test]
async fn delete_and_patch_hit_item_path() {
    let transport = Scripted::respond(200, "");
    let svc = service(transport.clone());

    svc.delete_product(8).await.unwrap();
    svc.update_product_availability(8).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(requests[1].method, HttpMethod::Patch);
    assert!(requests.iter().all(|r| r.path == "http://api.test/api/products/8"));
    assert!(requests.iter().all(|r| r.body.is_none()));
}

#[tokio::test]
async fn transport_failure_surfaces_as_error() {
    let err = service(Scripted::unreachable()).delete_product(1).await.unwrap_err();
    match err {
        Error::Transport(e) => {
            assert_eq!(e.method, "DELETE");
            assert_eq!(e.url, "http://api.test/api/products/1");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_base_url_sends_nothing() {
    let transport = Scripted::respond(200, ONE_LAMP);
    let svc = ProductService::with_transport(
        Endpoint::Env {
            var: "PRODUCT_CLIENT_TEST_UNSET_URL".to_string(),
        },
        transport.clone(),
    );

    let err = svc.get_products().await.unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(transport.requests().is_empty());
}

// --- lenient surface ---

#[tokio::test]
async fn lenient_reads_fall_back_on_malformed_payload() {
    let svc = service(Scripted::respond(200, "<html>oops</html>"));
    assert!(svc.lenient().get_products().await.is_empty());
    assert!(svc.lenient().search_products("lamp").await.is_empty());
    assert_eq!(svc.lenient().get_product_by_id(1).await, None);
}

#[tokio::test]
async fn lenient_reads_fall_back_on_network_failure() {
    let svc = service(Scripted::unreachable());
    assert!(svc.lenient().get_products().await.is_empty());
    assert_eq!(svc.lenient().get_product_by_id(1).await, None);
}

#[tokio::test]
async fn lenient_get_by_id_404_is_none() {
    let svc = service(Scripted::respond(404, r#"{"error":"product not found"}"#));
    assert_eq!(svc.lenient().get_product_by_id(999).await, None);
}

#[tokio::test]
async fn lenient_get_products_passes_valid_data_through() {
    let svc = service(Scripted::respond(200, ONE_LAMP));
    let products = svc.lenient().get_products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Lamp");
}

#[tokio::test]
async fn lenient_update_with_invalid_input_is_noop() {
    let transport = Scripted::respond(200, "");
    let form = FormData::new()
        .with("name", "Lamp")
        .with("price", "25")
        .with("availability", "maybe");

    service(transport.clone()).lenient().update_product(&form, 1).await;

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn lenient_writes_swallow_server_errors() {
    let transport = Scripted::respond(500, "boom");
    let svc = service(transport.clone());
    let form = FormData::new().with("name", "Lamp").with("price", "25");

    svc.lenient().add_product(&form).await;
    svc.lenient().delete_product(1).await;
    svc.lenient().update_product_availability(1).await;

    assert_eq!(transport.requests().len(), 3);
}
