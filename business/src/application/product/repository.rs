use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::query::{ProductFilter, SortDirection, SortKey};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::store::ProductStore;

/// Repository backed by a `ProductStore`. Owns the query policy: which
/// filter variant a domain query maps to, and how raw sort parameters
/// are validated.
pub struct StoreProductRepository {
    pub store: Arc<dyn ProductStore>,
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn add(&self, product: NewProduct) -> Result<Product, ProductError> {
        Ok(self.store.insert(product).await?)
    }

    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.list().await?)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ProductError> {
        Ok(self.store.find_by_id(id).await?)
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, ProductError> {
        let filter = ProductFilter::NameContains(name.to_string());
        Ok(self.store.find_matching(&filter).await?)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, ProductError> {
        let filter = ProductFilter::CategoryEqualsIgnoreCase(category.to_string());
        Ok(self.store.find_matching(&filter).await?)
    }

    async fn total_count(&self) -> Result<i64, ProductError> {
        Ok(self.store.count().await?)
    }

    async fn get_sorted(
        &self,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<Vec<Product>, ProductError> {
        let key = sort_by
            .parse::<SortKey>()
            .map_err(|_| ProductError::InvalidSortField(sort_by.to_string()))?;
        let direction = SortDirection::parse_lenient(sort_order);
        Ok(self.store.list_sorted(key, direction).await?)
    }

    async fn update(&self, product: Product) -> Result<bool, ProductError> {
        Ok(self.store.update(&product).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ProductError> {
        Ok(self.store.remove(id).await?)
    }

    async fn delete_all(&self) -> Result<(), ProductError> {
        Ok(self.store.remove_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Store {}

        #[async_trait]
        impl ProductStore for Store {
            async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;
            async fn list(&self) -> Result<Vec<Product>, StoreError>;
            async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError>;
            async fn find_matching(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;
            async fn list_sorted(&self, key: SortKey, direction: SortDirection) -> Result<Vec<Product>, StoreError>;
            async fn count(&self) -> Result<i64, StoreError>;
            async fn update(&self, product: &Product) -> Result<bool, StoreError>;
            async fn remove(&self, id: i32) -> Result<bool, StoreError>;
            async fn remove_all(&self) -> Result<(), StoreError>;
        }
    }

    fn repository(store: MockStore) -> StoreProductRepository {
        StoreProductRepository {
            store: Arc::new(store),
        }
    }

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            name: "Olive Oil".to_string(),
            description: None,
            category: "Groceries".to_string(),
            price: BigDecimal::from(12),
        }
    }

    #[tokio::test]
    async fn should_translate_name_search_into_case_sensitive_filter() {
        let mut store = MockStore::new();
        store
            .expect_find_matching()
            .with(eq(ProductFilter::NameContains("Olive".to_string())))
            .returning(|_| Ok(vec![]));

        let result = repository(store).get_by_name("Olive").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_translate_category_lookup_into_ignore_case_filter() {
        let mut store = MockStore::new();
        store
            .expect_find_matching()
            .with(eq(ProductFilter::CategoryEqualsIgnoreCase(
                "groceries".to_string(),
            )))
            .returning(|_| Ok(vec![]));

        let result = repository(store).get_by_category("groceries").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_sort_descending_when_order_token_is_desc() {
        let mut store = MockStore::new();
        store
            .expect_list_sorted()
            .with(eq(SortKey::Price), eq(SortDirection::Desc))
            .returning(|_, _| Ok(vec![]));

        let result = repository(store).get_sorted("price", "desc").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_sort_ascending_for_unrecognized_order_token() {
        let mut store = MockStore::new();
        store
            .expect_list_sorted()
            .with(eq(SortKey::Name), eq(SortDirection::Asc))
            .returning(|_, _| Ok(vec![]));

        let result = repository(store).get_sorted("name", "downwards").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_unknown_sort_field_without_touching_the_store() {
        let mut store = MockStore::new();
        store.expect_list_sorted().never();

        let result = repository(store).get_sorted("bogus", "asc").await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidSortField(field) if field == "bogus"
        ));
    }

    #[tokio::test]
    async fn should_report_false_when_update_target_is_missing() {
        let mut store = MockStore::new();
        store.expect_update().returning(|_| Ok(false));

        let result = repository(store).update(sample_product(42)).await;

        assert_eq!(result.unwrap(), false);
    }

    #[tokio::test]
    async fn should_surface_store_failure_as_storage_error() {
        let mut store = MockStore::new();
        store.expect_list().returning(|| Err(StoreError::Backend));

        let result = repository(store).get_all().await;

        assert!(matches!(result.unwrap_err(), ProductError::Storage(_)));
    }

    #[tokio::test]
    async fn should_return_record_from_store_on_lookup() {
        let mut store = MockStore::new();
        store
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(Some(sample_product(7))));

        let result = repository(store).get_by_id(7).await;

        assert_eq!(result.unwrap(), Some(sample_product(7)));
    }
}
