use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

#[derive(Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Successful responses are wrapped as `{"data": ...}`.
#[derive(Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl Catalog {
    pub fn insert(&mut self, name: String, price: f64, availability: bool) -> Product {
        self.next_id += 1;
        let product = Product {
            id: self.next_id,
            name,
            price,
            availability,
        };
        self.products.insert(product.id, product.clone());
        product
    }
}

pub type Db = Arc<RwLock<Catalog>>;

pub enum ApiError {
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({"error": "product not found"}))).into_response()
            }
        }
    }
}

pub fn app() -> Router {
    app_with(Catalog::default())
}

/// Router over a pre-populated catalog.
pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(RwLock::new(catalog));
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_products(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Envelope<Vec<Product>>> {
    let catalog = db.read().await;
    let needle = params.search.map(|s| s.to_lowercase());
    let data = catalog
        .products
        .values()
        .filter(|p| match &needle {
            Some(needle) => p.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(Envelope { data })
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<CreateProduct>,
) -> (StatusCode, Json<Envelope<Product>>) {
    let product = db.write().await.insert(input.name, input.price, true);
    tracing::debug!(id = product.id, "product created");
    (StatusCode::CREATED, Json(Envelope { data: product }))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let catalog = db.read().await;
    let product = catalog.products.get(&id).cloned().ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope { data: product }))
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateProduct>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let mut catalog = db.write().await;
    let product = catalog.products.get_mut(&id).ok_or(ApiError::NotFound)?;
    product.name = input.name;
    product.price = input.price;
    product.availability = input.availability;
    Ok(Json(Envelope {
        data: product.clone(),
    }))
}

async fn toggle_availability(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let mut catalog = db.write().await;
    let product = catalog.products.get_mut(&id).ok_or(ApiError::NotFound)?;
    product.availability = !product.availability;
    Ok(Json(Envelope {
        data: product.clone(),
    }))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<&'static str>>, ApiError> {
    let mut catalog = db.write().await;
    catalog.products.remove(&id).ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "product deleted");
    Ok(Json(Envelope {
        data: "product deleted",
    }))
}
