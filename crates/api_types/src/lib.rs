use serde::{Deserialize, Serialize};

/// Acknowledgment body used by every mutating endpoint.
///
/// The API reports outcomes as `{"message": "..."}`, success and failure
/// alike.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub mod product {
    use super::*;

    /// Request body for `POST /api/products/add`.
    ///
    /// `name` and `price` are required, but modeled as `Option` so the
    /// catalog can report a missing field as a validation failure instead
    /// of a deserialization error.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProductNew {
        pub name: Option<String>,
        pub price: Option<f64>,
        pub description: Option<String>,
    }

    /// Request body for `PUT /api/products/update/{id}`.
    ///
    /// Every field is optional; absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ProductUpdate {
        pub name: Option<String>,
        pub price: Option<f64>,
        pub description: Option<String>,
    }

    /// Full record returned by `GET /api/products/{id}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProductDetail {
        pub id: i32,
        pub name: String,
        pub price: f64,
        pub description: String,
    }

    /// Bulk-listing entry for `GET /api/products`.
    ///
    /// The listing deliberately omits `description`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProductSummary {
        pub id: i32,
        pub name: String,
        pub price: f64,
    }
}

pub mod user {
    use super::*;

    /// Request body for `POST /login`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Login {
        pub username: String,
        pub password: Option<String>,
    }
}
