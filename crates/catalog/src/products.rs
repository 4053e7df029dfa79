//! Products table.
//!
//! A product is a flat row: integer id assigned by the database, required
//! name and price, free-text description defaulting to the empty string.
//! There is no relation to any other table.

use sea_orm::{FromQueryResult, entity::prelude::*};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Projection used by the bulk listing.
///
/// `description` is intentionally not selected.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub price: f64,
}
