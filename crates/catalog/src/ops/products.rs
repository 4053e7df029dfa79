use sea_orm::{ActiveValue, QueryOrder, QuerySelect, prelude::*};

use crate::{
    CatalogError, ResultCatalog,
    products::{self, ProductSummary},
};

use super::{Catalog, ProductChanges, ProductDraft};

impl Catalog {
    /// Create a product and return its assigned id.
    ///
    /// `name` and `price` must be present in the draft; a missing one is a
    /// validation failure and nothing is persisted. Duplicate names are
    /// allowed, and no constraint is placed on the price value.
    pub async fn add_product(&self, draft: ProductDraft) -> ResultCatalog<i32> {
        let Some(name) = draft.name else {
            return Err(CatalogError::Validation("name is required".to_string()));
        };
        let Some(price) = draft.price else {
            return Err(CatalogError::Validation("price is required".to_string()));
        };

        let product = products::ActiveModel {
            name: ActiveValue::Set(name),
            price: ActiveValue::Set(price),
            description: ActiveValue::Set(draft.description.unwrap_or_default()),
            ..Default::default()
        };
        let inserted = product.insert(&self.database).await?;

        Ok(inserted.id)
    }

    /// Return the full product row.
    pub async fn product(&self, id: i32) -> ResultCatalog<products::Model> {
        products::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| CatalogError::KeyNotFound(id.to_string()))
    }

    /// Return every product, projected to `(id, name, price)`.
    ///
    /// The description is excluded from the bulk listing on purpose.
    pub async fn list_products(&self) -> ResultCatalog<Vec<ProductSummary>> {
        let summaries = products::Entity::find()
            .select_only()
            .columns([
                products::Column::Id,
                products::Column::Name,
                products::Column::Price,
            ])
            .order_by_asc(products::Column::Id)
            .into_model::<ProductSummary>()
            .all(&self.database)
            .await?;

        Ok(summaries)
    }

    /// Overwrite the fields present in `changes`, leaving the rest as stored.
    ///
    /// Succeeds even when `changes` is entirely empty.
    pub async fn update_product(&self, id: i32, changes: ProductChanges) -> ResultCatalog<()> {
        let product = products::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| CatalogError::KeyNotFound(id.to_string()))?;

        let mut product: products::ActiveModel = product.into();
        if let Some(name) = changes.name {
            product.name = ActiveValue::Set(name);
        }
        if let Some(price) = changes.price {
            product.price = ActiveValue::Set(price);
        }
        if let Some(description) = changes.description {
            product.description = ActiveValue::Set(description);
        }
        product.update(&self.database).await?;

        Ok(())
    }

    /// Remove the product row permanently.
    pub async fn delete_product(&self, id: i32) -> ResultCatalog<()> {
        let product = products::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| CatalogError::KeyNotFound(id.to_string()))?;

        product.delete(&self.database).await?;

        Ok(())
    }
}
