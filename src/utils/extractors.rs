use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::{JsonRejection, PathRejection}},
    http::request::Parts,
};

use crate::{
    error::{AppError, Result},
    models::Role,
    utils::jwt::Claims,
};

/// The authenticated caller, inserted into request extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub subject: String,
    pub role: Role,
}

pub fn extract_caller(claims: &Claims) -> Result<Caller> {
    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::info!("Caller {} presented {}", claims.sub, e);
        AppError::Forbidden("Access is forbidden".to_string())
    })?;

    Ok(Caller {
        subject: claims.sub.clone(),
        role,
    })
}

/// `Json` whose rejection is rendered as an error document.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
        Ok(Self(value))
    }
}

/// Product identifier taken from the `{id}` path segment.
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| AppError::Rejected(e.status(), e.body_text()))?;
        Ok(Self(id))
    }
}
