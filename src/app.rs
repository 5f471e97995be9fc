use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::cors::CorsLayer;

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    routes,
    services::{ProductExporter, XlsxExporter},
    store::{PgProductStore, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub exporter: Arc<dyn ProductExporter>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProductStore>,
        exporter: Arc<dyn ProductExporter>,
        jwt_secret: &str,
    ) -> Self {
        Self {
            store,
            exporter,
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}

/// Router with every route and the auth layers, without transport concerns.
pub fn router(state: AppState) -> Router {
    routes::create_router(state.clone()).with_state(state)
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let store = PgProductStore::new(pool, config.inventory.leftover_threshold);
    let exporter = XlsxExporter::new(&config.inventory.export_path);
    tracing::info!("Product exports are written to {}", exporter.path().display());
    let state = AppState::new(Arc::new(store), Arc::new(exporter), &config.auth.jwt_secret);

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allowed_origins);

    let app = router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors);

    Ok(app)
}
