//! Product API endpoints

use api_types::{
    Ack,
    product::{ProductDetail, ProductNew, ProductSummary, ProductUpdate},
};
use axum::{
    Json,
    extract::{Path, State},
};
use catalog::{CatalogError, ProductChanges, ProductDraft};

use crate::{ServerError, server::ServerState};

/// Handle requests for creating a new product
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<ProductNew>,
) -> Result<Json<Ack>, ServerError> {
    state
        .catalog
        .add_product(ProductDraft {
            name: payload.name,
            price: payload.price,
            description: payload.description,
        })
        .await?;

    Ok(Json(Ack::new("Product added successfully")))
}

/// Handle requests for the full details of one product
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetail>, ServerError> {
    let product = state.catalog.product(id).await?;

    Ok(Json(ProductDetail {
        id: product.id,
        name: product.name,
        price: product.price,
        description: product.description,
    }))
}

/// Handle requests for the bulk listing (id, name, price only)
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ProductSummary>>, ServerError> {
    let products = state.catalog.list_products().await?;

    Ok(Json(
        products
            .into_iter()
            .map(|p| ProductSummary {
                id: p.id,
                name: p.name,
                price: p.price,
            })
            .collect(),
    ))
}

/// Handle requests for partially overwriting a product
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Ack>, ServerError> {
    let changes = ProductChanges {
        name: payload.name,
        price: payload.price,
        description: payload.description,
    };

    match state.catalog.update_product(id, changes).await {
        Ok(()) => Ok(Json(Ack::new("Product updated successfully"))),
        // Legacy wire contract: the update route reports a missing product
        // with HTTP 200, unlike get/delete which use 404. Clients depend on
        // it, so it stays until the API is versioned.
        Err(CatalogError::KeyNotFound(_)) => Ok(Json(Ack::new("Product not found"))),
        Err(err) => Err(err.into()),
    }
}

/// Handle requests for deleting a product
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Ack>, ServerError> {
    state.catalog.delete_product(id).await?;

    Ok(Json(Ack::new("Product deleted successfully")))
}
