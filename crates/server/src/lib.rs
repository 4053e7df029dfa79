use axum::{Json, http::StatusCode, response::IntoResponse};
use catalog::CatalogError;

use api_types::Ack;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod product;
mod server;
mod user;

pub mod types {
    pub use api_types::Ack;

    pub mod product {
        pub use api_types::product::{ProductDetail, ProductNew, ProductSummary, ProductUpdate};
    }

    pub mod user {
        pub use api_types::user::Login;
    }
}

pub enum ServerError {
    Catalog(CatalogError),
    Generic(String),
}

fn status_for_catalog_error(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// The wire messages are fixed strings the API contract promises, not the
// internal error text.
fn message_for_catalog_error(err: CatalogError) -> String {
    match err {
        CatalogError::Validation(_) => "Invalid product data".to_string(),
        CatalogError::KeyNotFound(_) => "Product not found".to_string(),
        CatalogError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Catalog(err) => {
                (status_for_catalog_error(&err), message_for_catalog_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Ack::new(message))).into_response()
    }
}

impl From<CatalogError> for ServerError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}
