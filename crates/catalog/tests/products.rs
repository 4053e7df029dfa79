use sea_orm::{ConnectionTrait, Database, Statement};

use catalog::{Catalog, CatalogError, ProductChanges, ProductDraft};
use migration::MigratorTrait;

async fn catalog_with_db() -> Catalog {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (username, password) VALUES (?, ?)",
        vec!["alice".into(), "password".into()],
    ))
    .await
    .unwrap();

    Catalog::builder().database(db).build().await.unwrap()
}

fn draft(name: &str, price: f64, description: Option<&str>) -> ProductDraft {
    ProductDraft {
        name: Some(name.to_string()),
        price: Some(price),
        description: description.map(ToString::to_string),
    }
}

#[tokio::test]
async fn add_product_persists_supplied_description() {
    let catalog = catalog_with_db().await;

    let id = catalog
        .add_product(draft("Teclado Gamer", 199.90, Some("Teclado mecânico RGB")))
        .await
        .unwrap();

    let product = catalog.product(id).await.unwrap();
    assert_eq!(product.name, "Teclado Gamer");
    assert_eq!(product.price, 199.90);
    assert_eq!(product.description, "Teclado mecânico RGB");
}

#[tokio::test]
async fn add_product_defaults_description_to_empty() {
    let catalog = catalog_with_db().await;

    let id = catalog
        .add_product(draft("Mouse", 59.0, None))
        .await
        .unwrap();

    let product = catalog.product(id).await.unwrap();
    assert_eq!(product.description, "");
}

#[tokio::test]
async fn add_product_without_name_is_rejected_and_persists_nothing() {
    let catalog = catalog_with_db().await;

    let err = catalog
        .add_product(ProductDraft {
            name: None,
            price: Some(10.0),
            description: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(catalog.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_product_without_price_is_rejected_and_persists_nothing() {
    let catalog = catalog_with_db().await;

    let err = catalog
        .add_product(ProductDraft {
            name: Some("Monitor".to_string()),
            price: None,
            description: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(catalog.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_names_are_allowed() {
    let catalog = catalog_with_db().await;

    let first = catalog.add_product(draft("Cabo HDMI", 25.0, None)).await.unwrap();
    let second = catalog.add_product(draft("Cabo HDMI", 30.0, None)).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(catalog.list_products().await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let catalog = catalog_with_db().await;

    assert_eq!(
        catalog.product(999).await.unwrap_err(),
        CatalogError::KeyNotFound("999".to_string())
    );
    assert_eq!(
        catalog.delete_product(999).await.unwrap_err(),
        CatalogError::KeyNotFound("999".to_string())
    );
    assert_eq!(
        catalog
            .update_product(999, ProductChanges::default())
            .await
            .unwrap_err(),
        CatalogError::KeyNotFound("999".to_string())
    );
}

#[tokio::test]
async fn update_overwrites_only_supplied_fields() {
    let catalog = catalog_with_db().await;
    let id = catalog
        .add_product(draft("Headset", 300.0, Some("Com fio")))
        .await
        .unwrap();

    catalog
        .update_product(
            id,
            ProductChanges {
                price: Some(249.90),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let product = catalog.product(id).await.unwrap();
    assert_eq!(product.name, "Headset");
    assert_eq!(product.price, 249.90);
    assert_eq!(product.description, "Com fio");
}

#[tokio::test]
async fn update_with_no_changes_still_succeeds() {
    let catalog = catalog_with_db().await;
    let id = catalog.add_product(draft("Webcam", 120.0, None)).await.unwrap();

    catalog
        .update_product(id, ProductChanges::default())
        .await
        .unwrap();

    let product = catalog.product(id).await.unwrap();
    assert_eq!(product.name, "Webcam");
    assert_eq!(product.price, 120.0);
}

#[tokio::test]
async fn delete_removes_the_row_permanently() {
    let catalog = catalog_with_db().await;
    let id = catalog.add_product(draft("Hub USB", 45.0, None)).await.unwrap();

    catalog.delete_product(id).await.unwrap();

    assert!(matches!(
        catalog.product(id).await.unwrap_err(),
        CatalogError::KeyNotFound(_)
    ));
    assert!(matches!(
        catalog.delete_product(id).await.unwrap_err(),
        CatalogError::KeyNotFound(_)
    ));
}

#[tokio::test]
async fn listing_projects_id_name_and_price() {
    let catalog = catalog_with_db().await;
    let first = catalog
        .add_product(draft("Teclado", 199.90, Some("RGB")))
        .await
        .unwrap();
    let second = catalog.add_product(draft("Mouse", 59.0, None)).await.unwrap();

    let summaries = catalog.list_products().await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, first);
    assert_eq!(summaries[0].name, "Teclado");
    assert_eq!(summaries[0].price, 199.90);
    assert_eq!(summaries[1].id, second);
}

#[tokio::test]
async fn user_lookup_by_username() {
    let catalog = catalog_with_db().await;

    let user = catalog.user_by_username("alice").await.unwrap();
    assert_eq!(user.unwrap().username, "alice");

    let missing = catalog.user_by_username("nobody").await.unwrap();
    assert!(missing.is_none());
}
