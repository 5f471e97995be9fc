//! Hypermedia response documents.
//!
//! Every response body, successful or not, is one of the [`Representation`]
//! variants rendered through [`Representation::to_entity`].

mod entity;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use http::Method;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

pub use entity::{Action, Entity, Field, Link, SIREN_MEDIA_TYPE};

use crate::{
    models::{Product, Role},
    routes::PRODUCTS_PATH,
};

/// Who is asking and for which resource, used to pick the links a caller may follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub role: Role,
    pub href: String,
}

impl RequestContext {
    pub fn new(role: Role, href: impl Into<String>) -> Self {
        Self {
            role,
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    Collection {
        name: String,
        context: RequestContext,
        items: Vec<Product>,
    },
    Single {
        product: Product,
        role: Role,
    },
    Error {
        status: StatusCode,
        message: String,
    },
    Success,
}

impl Representation {
    /// Callers check for an empty result first and answer with [`Representation::error`].
    pub fn collection(items: Vec<Product>, context: &RequestContext, name: &str) -> Self {
        Representation::Collection {
            name: name.to_string(),
            context: context.clone(),
            items,
        }
    }

    pub fn single(product: Product, role: Role) -> Self {
        Representation::Single { product, role }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Representation::Error {
            status,
            message: message.into(),
        }
    }

    pub fn success() -> Self {
        Representation::Success
    }

    /// Status carried by the document.
    pub fn status(&self) -> StatusCode {
        match self {
            Representation::Error { status, .. } => *status,
            _ => StatusCode::OK,
        }
    }

    pub fn to_entity(&self) -> Entity {
        match self {
            Representation::Collection {
                name,
                context,
                items,
            } => {
                let mut entity = Entity::with_class(name.as_str());
                entity.properties.insert("size".into(), json!(items.len()));
                entity.entities = items
                    .iter()
                    .map(|product| {
                        let mut child = product_entity(product, context.role);
                        child.rel = vec!["item".to_string()];
                        child
                    })
                    .collect();
                entity.links = vec![
                    Link::new("self", context.href.as_str()),
                    Link::new("products", PRODUCTS_PATH),
                ];
                if context.role.is_admin() {
                    entity.actions.push(
                        Action::new("create-product", Method::POST, format!("{PRODUCTS_PATH}/"))
                            .title("Create new product")
                            .json_fields(product_fields()),
                    );
                }
                entity.actions.push(
                    Action::new(
                        "export-products",
                        Method::POST,
                        format!("{PRODUCTS_PATH}/export"),
                    )
                    .title("Export products")
                    .json_fields(Vec::new()),
                );
                entity
            }
            Representation::Single { product, role } => product_entity(product, *role),
            Representation::Error { status, message } => {
                let mut entity = Entity::with_class("error");
                entity
                    .properties
                    .insert("status".into(), json!(status.as_u16()));
                entity
                    .properties
                    .insert("message".into(), Value::String(message.clone()));
                entity
            }
            Representation::Success => Entity::with_class("success"),
        }
    }
}

pub fn product_properties(product: &Product) -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("id".into(), json!(product.id));
    properties.insert("name".into(), Value::String(product.name.clone()));
    properties.insert(
        "category".into(),
        product
            .category
            .clone()
            .map(Value::String)
            .unwrap_or(Value::Null),
    );
    properties.insert("price".into(), Value::String(product.price.to_string()));
    properties.insert("quantity".into(), json!(product.quantity));
    properties
}

fn product_entity(product: &Product, role: Role) -> Entity {
    let href = format!("{PRODUCTS_PATH}/{}", product.id);
    let mut entity = Entity::with_class("product");
    entity.properties = product_properties(product);
    entity.links = vec![Link::new("self", href.as_str())];
    if role.is_admin() {
        entity.actions = vec![
            Action::new("update-product", Method::PUT, href.as_str())
                .title("Update product")
                .json_fields(product_fields()),
            Action::new("delete-product", Method::DELETE, href.as_str()).title("Delete product"),
        ];
    }
    entity
}

fn product_fields() -> Vec<Field> {
    vec![
        Field::new("name", "text"),
        Field::new("category", "text"),
        Field::new("price", "number"),
        Field::new("quantity", "number"),
    ]
}

impl Serialize for Representation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_entity().serialize(serializer)
    }
}

impl IntoResponse for Representation {
    fn into_response(self) -> Response {
        // A 204 response cannot carry a body, the tag stays inside the document.
        let status = match self.status() {
            StatusCode::NO_CONTENT => StatusCode::OK,
            status => status,
        };

        (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static(SIREN_MEDIA_TYPE),
            )],
            Json(self.to_entity()),
        )
            .into_response()
    }
}
