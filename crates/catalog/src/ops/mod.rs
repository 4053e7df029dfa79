use sea_orm::DatabaseConnection;

mod products;
mod users;

/// Handle over the catalog storage.
///
/// Owns the database connection; every operation is a single storage
/// round-trip, so no explicit transactions are opened here.
#[derive(Debug)]
pub struct Catalog {
    database: DatabaseConnection,
}

impl Catalog {
    /// Return a builder for `Catalog`. Help to build the struct.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }
}

/// Validated-on-use input for creating a product.
///
/// `name` and `price` stay optional until [`Catalog::add_product`] checks
/// their presence, mirroring the "field missing from the payload" rule.
#[derive(Debug, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Partial overwrite for an existing product.
///
/// `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// The builder for `Catalog`
#[derive(Default)]
pub struct CatalogBuilder {
    database: DatabaseConnection,
}

impl CatalogBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> CatalogBuilder {
        self.database = db;
        self
    }

    /// Construct `Catalog`
    pub async fn build(self) -> crate::ResultCatalog<Catalog> {
        Ok(Catalog {
            database: self.database,
        })
    }
}
