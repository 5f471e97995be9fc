mod health;
pub mod products;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{access_gate, auth_middleware},
    openapi::{OPENAPI_PATH, openapi_json},
    representation::Representation,
};

pub const PRODUCTS_PATH: &str = "/api/products";

pub fn create_router(state: AppState) -> Router<AppState> {
    let api = Router::new()
        .route(PRODUCTS_PATH, get(products::list_products))
        .route("/api/products/", post(products::create_product))
        .route("/api/products/export", post(products::export_products))
        .route("/api/products/leftovers", get(products::list_leftovers))
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route_layer(middleware::from_fn(access_gate))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(OPENAPI_PATH, get(openapi_json))
        .merge(api)
        .fallback(not_found)
}

async fn not_found() -> Representation {
    Representation::error(StatusCode::NOT_FOUND, "Resource not found")
}
