mod access;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

pub use access::Operation;

use crate::{
    AppState,
    error::AppError,
    utils::{
        extractors::{Caller, extract_caller},
        jwt::verify_token,
    },
};

/// Resolves the caller's identity. A missing or invalid token stops the request with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Invalid token format".to_string()))?;

    let claims = verify_token(token, &state.jwt_secret)?;
    let caller = extract_caller(&claims)?;

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

/// Checks the caller's role against the role set of the matched operation
/// before any handler runs.
pub async fn access_gate(req: Request, next: Next) -> Result<Response, AppError> {
    let caller = req
        .extensions()
        .get::<Caller>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let operation = req
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| Operation::resolve(req.method(), path.as_str()));

    match operation {
        Some(operation) if operation.permits(caller.role) => Ok(next.run(req).await),
        Some(operation) => {
            tracing::info!(
                "{} denied to {} with role {}",
                operation.name(),
                caller.subject,
                caller.role
            );
            Err(AppError::Forbidden("Access is forbidden".to_string()))
        }
        None => {
            tracing::warn!("No access rule for {} {}", req.method(), req.uri().path());
            Err(AppError::Forbidden("Access is forbidden".to_string()))
        }
    }
}
