#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use inventory_back::{
    AppError, AppState, Result, app,
    models::{Product, ProductRequest, Role},
    services::ProductExporter,
    store::ProductStore,
    utils::jwt::{Claims, generate_token},
};
use jsonwebtoken::{EncodingKey, Header};
use rust_decimal::Decimal;

pub const JWT_SECRET: &str = "test-secret";
pub const LEFTOVER_THRESHOLD: i32 = 5;

#[derive(Default)]
struct StoreState {
    products: BTreeMap<i64, Product>,
    next_id: i64,
    delete_calls: Vec<i64>,
    update_calls: Vec<Product>,
    unavailable: bool,
}

/// Product store double that records the mutating calls it receives.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for product in products {
                state.next_id = state.next_id.max(product.id);
                state.products.insert(product.id, product);
            }
        }
        store
    }

    pub fn set_unavailable(&self) {
        self.state.lock().unwrap().unavailable = true;
    }

    pub fn delete_calls(&self) -> Vec<i64> {
        self.state.lock().unwrap().delete_calls.clone()
    }

    pub fn update_calls(&self) -> Vec<Product> {
        self.state.lock().unwrap().update_calls.clone()
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.state.lock().unwrap().products.get(&id).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.state.lock().unwrap().unavailable {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self.state.lock().unwrap().products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn create(&self, product: ProductRequest) -> Result<Product> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let product = product.into_product(state.next_id);
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.update_calls.push(product.clone());
        if let Some(existing) = state.products.get_mut(&product.id) {
            *existing = product;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.delete_calls.push(id);
        state.products.remove(&id);
        Ok(())
    }

    async fn list_leftovers(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .products
            .values()
            .filter(|p| p.quantity < LEFTOVER_THRESHOLD)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        self.check()
    }
}

/// Exporter double that keeps every batch it was asked to write.
#[derive(Clone)]
pub struct RecordingExporter {
    succeed: bool,
    batches: Arc<Mutex<Vec<Vec<Product>>>>,
}

impl RecordingExporter {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            batches: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            succeed: false,
            batches: Arc::default(),
        }
    }

    pub fn batches(&self) -> Vec<Vec<Product>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductExporter for RecordingExporter {
    async fn export(&self, products: &[Product]) -> Result<()> {
        self.batches.lock().unwrap().push(products.to_vec());
        if self.succeed {
            Ok(())
        } else {
            Err(AppError::ExportError("disk full".to_string()))
        }
    }
}

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn(store: MemoryStore, exporter: RecordingExporter) -> Self {
        let state = AppState::new(Arc::new(store), Arc::new(exporter), JWT_SECRET);
        let app = app::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn token(role: Role) -> String {
    generate_token("tester", role, JWT_SECRET).unwrap()
}

/// A correctly signed token whose role is outside the known set.
pub fn token_with_role(role: &str) -> String {
    let claims = Claims {
        sub: "tester".to_string(),
        role: role.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::minutes(10)).timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode jwt")
}

pub fn product(id: i64, name: &str, quantity: i32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: Some("hardware".to_string()),
        price: Decimal::new(999, 2),
        quantity,
    }
}
