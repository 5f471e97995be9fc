//! Siren wire types.
//!
//! Empty members are left out of the serialized document so an error or
//! success envelope stays as small as the frontend expects.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const SIREN_MEDIA_TYPE: &str = "application/vnd.siren+json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Entity {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rel: Vec<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    #[schema(value_type = Object)]
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub entities: Vec<Entity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Entity {
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: vec![class.into()],
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Entity {
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel.iter().any(|r| r == rel))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Action {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub method: String,
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Action {
    pub fn new(name: &str, method: http::Method, href: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            method: method.as_str().to_string(),
            href: href.into(),
            content_type: None,
            fields: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn json_fields(mut self, fields: Vec<Field>) -> Self {
        self.content_type = Some("application/json".to_string());
        self.fields = fields;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
}

impl Field {
    pub fn new(name: &str, input_type: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: input_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Link {
    pub rel: Vec<String>,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: impl Into<String>) -> Self {
        Self {
            rel: vec![rel.to_string()],
            href: href.into(),
        }
    }
}
