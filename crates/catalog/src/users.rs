//! Users table (minimal entity).
//!
//! Rows are provisioned externally; the service only reads them during the
//! login lookup. The password column is stored in plain text like the data
//! this schema inherits from. That is a known defect to resolve before any
//! real deployment, not a behavior to rely on.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
