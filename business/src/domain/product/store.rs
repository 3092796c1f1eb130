use async_trait::async_trait;

use crate::domain::errors::StoreError;

use super::model::{NewProduct, Product};
use super::query::{ProductFilter, SortDirection, SortKey};

/// Narrow persistence capability for product records. Any backend
/// (Postgres, in-memory) can satisfy it; the repository depends on
/// nothing else.
///
/// Contract:
/// - absence is `Ok(None)` / `Ok(false)`, never an error;
/// - `update` and `remove` are atomic update-if-exists /
///   delete-if-exists: implementations report whether the record
///   existed without a separate lookup;
/// - sorted listings break ties between equal keys by ascending id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError>;
    async fn find_matching(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;
    async fn list_sorted(
        &self,
        key: SortKey,
        direction: SortDirection,
    ) -> Result<Vec<Product>, StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
    async fn update(&self, product: &Product) -> Result<bool, StoreError>;
    async fn remove(&self, id: i32) -> Result<bool, StoreError>;
    async fn remove_all(&self) -> Result<(), StoreError>;
}
