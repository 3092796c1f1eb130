use std::sync::Arc;

use bigdecimal::BigDecimal;

use business::application::product::repository::StoreProductRepository;
use business::application::product::service::CatalogProductService;
use business::domain::logger::Logger;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::service::ProductService;
use persistence::product::memory::ProductStoreInMemory;

struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

fn catalog() -> CatalogProductService {
    let store = Arc::new(ProductStoreInMemory::new());
    CatalogProductService {
        repository: Arc::new(StoreProductRepository { store }),
        logger: Arc::new(NullLogger),
    }
}

fn new_product(name: &str, category: &str, price: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: Some(format!("{} from the test catalog", name)),
        category: category.to_string(),
        price: BigDecimal::from(price),
    }
}

#[tokio::test]
async fn should_round_trip_created_product_through_lookup() {
    let catalog = catalog();

    let created = catalog
        .add(new_product("Olive Oil", "Groceries", 12))
        .await
        .unwrap();
    let fetched = catalog.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Olive Oil");
    assert_eq!(fetched.category, "Groceries");
    assert_eq!(fetched.price, BigDecimal::from(12));
}

#[tokio::test]
async fn should_leave_empty_catalog_after_delete_all() {
    let catalog = catalog();
    catalog.add(new_product("A", "X", 1)).await.unwrap();
    catalog.add(new_product("B", "Y", 2)).await.unwrap();

    catalog.delete_all().await.unwrap();

    assert_eq!(catalog.total_count().await.unwrap(), 0);
    assert!(catalog.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_match_categories_ignoring_case_in_both_directions() {
    let catalog = catalog();
    catalog
        .add(new_product("Keyboard", "Electronics", 50))
        .await
        .unwrap();

    let lower = catalog.get_by_category("electronics").await.unwrap();
    let upper = catalog.get_by_category("ELECTRONICS").await.unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
}

#[tokio::test]
async fn should_search_names_case_sensitively_in_both_directions() {
    let catalog = catalog();
    catalog
        .add(new_product("Keyboard", "Electronics", 50))
        .await
        .unwrap();
    catalog
        .add(new_product("keychain", "Accessories", 5))
        .await
        .unwrap();

    let upper = catalog.get_by_name("Key").await.unwrap();
    let lower = catalog.get_by_name("key").await.unwrap();

    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].name, "Keyboard");
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].name, "keychain");
}

#[tokio::test]
async fn should_sort_by_price_descending() {
    let catalog = catalog();
    catalog.add(new_product("Cheap", "X", 150)).await.unwrap();
    catalog.add(new_product("Dear", "X", 200)).await.unwrap();

    let sorted = catalog.get_sorted("price", "desc").await.unwrap();

    let prices: Vec<BigDecimal> = sorted.into_iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![BigDecimal::from(200), BigDecimal::from(150)]);
}

#[tokio::test]
async fn should_reject_unknown_sort_field() {
    let catalog = catalog();

    let result = catalog.get_sorted("bogus", "asc").await;

    assert!(matches!(
        result.unwrap_err(),
        ProductError::InvalidSortField(field) if field == "bogus"
    ));
}

#[tokio::test]
async fn should_not_create_a_record_when_updating_nonexistent_id() {
    let catalog = catalog();
    catalog.add(new_product("Only One", "X", 10)).await.unwrap();

    let updated = catalog
        .update(Product::from_store(999, new_product("Ghost", "X", 1)))
        .await
        .unwrap();

    assert_eq!(updated, false);
    assert_eq!(catalog.total_count().await.unwrap(), 1);
    assert!(catalog.get_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn should_replace_fields_but_preserve_id_on_update() {
    let catalog = catalog();
    let created = catalog
        .add(new_product("Olive Oil", "Groceries", 12))
        .await
        .unwrap();

    let updated = catalog
        .update(Product::from_store(
            created.id,
            new_product("Extra Virgin Olive Oil", "Pantry", 15),
        ))
        .await
        .unwrap();
    let fetched = catalog.get_by_id(created.id).await.unwrap().unwrap();

    assert!(updated);
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Extra Virgin Olive Oil");
    assert_eq!(fetched.category, "Pantry");
    assert_eq!(fetched.price, BigDecimal::from(15));
}

#[tokio::test]
async fn should_delete_an_id_successfully_exactly_once() {
    let catalog = catalog();
    let created = catalog.add(new_product("Fleeting", "X", 1)).await.unwrap();

    assert_eq!(catalog.delete(created.id).await.unwrap(), true);
    assert_eq!(catalog.delete(created.id).await.unwrap(), false);
}

#[tokio::test]
async fn should_handle_the_electronics_scenario() {
    let catalog = catalog();
    catalog
        .add(new_product("B Product", "Electronics", 200))
        .await
        .unwrap();
    catalog
        .add(new_product("A Product", "Electronics", 150))
        .await
        .unwrap();

    let by_name = catalog.get_sorted("name", "asc").await.unwrap();
    let names: Vec<&str> = by_name.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A Product", "B Product"]);

    let in_category = catalog.get_by_category("electronics").await.unwrap();
    assert_eq!(in_category.len(), 2);

    assert_eq!(catalog.total_count().await.unwrap(), 2);
}

#[tokio::test]
async fn should_normalize_and_validate_input_at_the_service_seam() {
    let catalog = catalog();

    let created = catalog
        .add(new_product("  Padded Name  ", "X", 3))
        .await
        .unwrap();
    assert_eq!(created.name, "Padded Name");

    let blank = catalog.add(new_product("   ", "X", 3)).await;
    assert!(matches!(blank.unwrap_err(), ProductError::NameEmpty));

    let negative = catalog.add(new_product("Valid", "X", -3)).await;
    assert!(matches!(negative.unwrap_err(), ProductError::NegativePrice));

    // Rejections must not have persisted anything extra.
    assert_eq!(catalog.total_count().await.unwrap(), 1);
}
