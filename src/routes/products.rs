use axum::{
    Extension,
    extract::{OriginalUri, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::Result,
    models::{Product, ProductRequest},
    representation::{Entity, Representation, RequestContext},
    utils::extractors::{Caller, JsonBody, ProductId},
};

fn not_found(id: i64) -> Representation {
    let message = format!("Product with id = [{}] not found", id);
    tracing::info!("{}", message);
    Representation::error(StatusCode::NOT_FOUND, message)
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    summary = "View all products",
    responses(
        (status = 200, description = "Successfully retrieved products", body = Entity),
        (status = 204, description = "There are no products", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    OriginalUri(uri): OriginalUri,
) -> Result<Representation> {
    tracing::info!("Getting products");
    let products = state.store.list().await?;

    if products.is_empty() {
        tracing::info!("There are no products");
        return Ok(Representation::error(
            StatusCode::NO_CONTENT,
            "There are no products",
        ));
    }

    let context = RequestContext::new(caller.role, uri.path());
    Ok(Representation::collection(products, &context, "products"))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    summary = "View one product",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Successfully retrieved product", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
        (status = 404, description = "Product not found", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ProductId(id): ProductId,
) -> Result<Representation> {
    tracing::info!("Getting product with id = [{}]", id);

    match state.store.get_by_id(id).await? {
        Some(product) => Ok(Representation::single(product, caller.role)),
        None => Ok(not_found(id)),
    }
}

#[utoipa::path(
    post,
    path = "/api/products/",
    tag = "products",
    summary = "Create a product",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Successfully created product", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<Representation> {
    tracing::info!("Saving product = [{:?}]", payload);
    let product = state.store.create(payload).await?;

    Ok(Representation::single(product, caller.role))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Replace a product",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Successfully updated product", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
        (status = 404, description = "Product not found", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<Representation> {
    tracing::info!("Updating product = [{:?}]", payload);

    if state.store.get_by_id(id).await?.is_none() {
        return Ok(not_found(id));
    }

    // Existing clients address the record through the body's id.
    let target = payload.id.unwrap_or(id);
    if target != id {
        tracing::warn!(
            "Update addressed to id = [{}] carries id = [{}] in its body",
            id,
            target
        );
        if state.store.get_by_id(target).await?.is_none() {
            return Ok(not_found(target));
        }
    }

    state.store.update(payload.into_product(target)).await?;
    Ok(Representation::success())
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Delete a product",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Successfully deleted product", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
        (status = 404, description = "Unable to delete product because it's not found", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Representation> {
    tracing::info!("Deleting product with id = [{}]", id);

    if state.store.get_by_id(id).await?.is_none() {
        let message = format!(
            "Unable to delete product with id = [{}] because it's not found",
            id
        );
        tracing::info!("{}", message);
        return Ok(Representation::error(StatusCode::NOT_FOUND, message));
    }

    state.store.delete_by_id(id).await?;
    Ok(Representation::success())
}

#[utoipa::path(
    post,
    path = "/api/products/export",
    tag = "products",
    summary = "Export products to a spreadsheet",
    request_body = Vec<Product>,
    responses(
        (status = 200, description = "Successfully exported products", body = Entity),
        (status = 204, description = "Can't export", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn export_products(
    State(state): State<AppState>,
    JsonBody(products): JsonBody<Vec<Product>>,
) -> Result<Representation> {
    tracing::info!("Exporting {} filtered products", products.len());

    if let Err(e) = state.exporter.export(&products).await {
        tracing::info!("Can't export: {}", e);
        return Ok(Representation::error(StatusCode::NO_CONTENT, "Can't export"));
    }

    Ok(Representation::success())
}

#[utoipa::path(
    get,
    path = "/api/products/leftovers",
    tag = "products",
    summary = "View low-stock products",
    responses(
        (status = 200, description = "Successfully retrieved leftovers", body = Entity),
        (status = 204, description = "There are no leftovers", body = Entity),
        (status = 401, description = "You are not authorized to view the resource", body = Entity),
        (status = 403, description = "Access is forbidden", body = Entity),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_leftovers(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    OriginalUri(uri): OriginalUri,
) -> Result<Representation> {
    tracing::info!("Getting leftovers");
    let leftovers = state.store.list_leftovers().await?;

    if leftovers.is_empty() {
        tracing::info!("There are no leftovers");
        return Ok(Representation::error(
            StatusCode::NO_CONTENT,
            "There are no leftovers",
        ));
    }

    let context = RequestContext::new(caller.role, uri.path());
    Ok(Representation::collection(leftovers, &context, "leftovers"))
}
