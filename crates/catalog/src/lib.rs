//! Service and storage layer for the product catalog.
//!
//! The [`Catalog`] owns the database connection and exposes the CRUD
//! operations the HTTP layer is built on. It is constructed explicitly via
//! [`Catalog::builder`] so tests can run against an in-memory database.

pub use error::CatalogError;
pub use ops::{Catalog, CatalogBuilder, ProductChanges, ProductDraft};

mod error;
mod ops;
pub mod products;
pub mod users;

type ResultCatalog<T> = Result<T, CatalogError>;
