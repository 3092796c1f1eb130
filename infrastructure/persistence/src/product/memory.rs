use std::sync::Mutex;

use async_trait::async_trait;

use business::domain::errors::StoreError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::query::{ProductFilter, SortDirection, SortKey};
use business::domain::product::store::ProductStore;

/// In-memory `ProductStore`. Every operation runs inside one critical
/// section, so update and remove are atomic update-if-exists /
/// delete-if-exists just like the Postgres adapter.
#[derive(Default)]
pub struct ProductStoreInMemory {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    products: Vec<Product>,
}

impl ProductStoreInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    match filter {
        ProductFilter::NameContains(term) => product.name.contains(term),
        ProductFilter::CategoryEqualsIgnoreCase(term) => {
            product.category.to_lowercase() == term.to_lowercase()
        }
    }
}

#[async_trait]
impl ProductStore for ProductStoreInMemory {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        inner.next_id += 1;
        let record = Product::from_store(inner.next_id, product);
        inner.products.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        Ok(inner.products.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_matching(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        Ok(inner
            .products
            .iter()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect())
    }

    async fn list_sorted(
        &self,
        key: SortKey,
        direction: SortDirection,
    ) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        let mut products = inner.products.clone();
        // Stable sort over insertion order, so ties between equal keys
        // keep ascending id in both directions.
        products.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Category => a.category.cmp(&b.category),
                SortKey::Price => a.price.cmp(&b.price),
            };
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        Ok(products)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        Ok(inner.products.len() as i64)
    }

    async fn update(&self, product: &Product) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        match inner.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: i32) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        Ok(inner.products.len() < before)
    }

    async fn remove_all(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Backend)?;
        inner.products.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn new_product(name: &str, category: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            price: BigDecimal::from(price),
        }
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_insert() {
        let store = ProductStoreInMemory::new();

        let first = store.insert(new_product("Keyboard", "Electronics", 50)).await.unwrap();
        let second = store.insert(new_product("Mouse", "Electronics", 25)).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_match_category_ignoring_case() {
        let store = ProductStoreInMemory::new();
        store.insert(new_product("Keyboard", "Electronics", 50)).await.unwrap();

        let filter = ProductFilter::CategoryEqualsIgnoreCase("ELECTRONICS".to_string());
        let found = store.find_matching(&filter).await.unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn should_match_name_substring_case_sensitively() {
        let store = ProductStoreInMemory::new();
        store.insert(new_product("Keyboard", "Electronics", 50)).await.unwrap();

        let exact = ProductFilter::NameContains("Key".to_string());
        let wrong_case = ProductFilter::NameContains("key".to_string());

        assert_eq!(store.find_matching(&exact).await.unwrap().len(), 1);
        assert!(store.find_matching(&wrong_case).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_break_sort_ties_by_insertion_order() {
        let store = ProductStoreInMemory::new();
        store.insert(new_product("Keyboard", "Electronics", 50)).await.unwrap();
        store.insert(new_product("Mouse", "Electronics", 50)).await.unwrap();

        let sorted = store
            .list_sorted(SortKey::Price, SortDirection::Desc)
            .await
            .unwrap();

        assert_eq!(sorted[0].name, "Keyboard");
        assert_eq!(sorted[1].name, "Mouse");
    }

    #[tokio::test]
    async fn should_report_removal_of_missing_id_as_false() {
        let store = ProductStoreInMemory::new();

        assert_eq!(store.remove(1).await.unwrap(), false);
    }
}
