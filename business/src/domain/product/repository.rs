use async_trait::async_trait;

use super::errors::ProductError;
use super::model::{NewProduct, Product};

/// Domain queries over the product catalog. Each operation costs one
/// store round trip; comparison and sort-validation policy lives here,
/// not in the store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, product: NewProduct) -> Result<Product, ProductError>;
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;
    /// `None` when no record has the id; a normal outcome, not an error.
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ProductError>;
    /// Case-sensitive substring match on `name`.
    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, ProductError>;
    /// Case-insensitive exact match on `category`.
    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, ProductError>;
    async fn total_count(&self) -> Result<i64, ProductError>;
    /// Fails with `InvalidSortField` unless `sort_by` is one of
    /// name/category/price; any `sort_order` other than "desc" sorts
    /// ascending.
    async fn get_sorted(
        &self,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<Vec<Product>, ProductError>;
    /// Full-field replace keyed by `product.id`; false when no record
    /// has that id.
    async fn update(&self, product: Product) -> Result<bool, ProductError>;
    /// False when no record has the id.
    async fn delete(&self, id: i32) -> Result<bool, ProductError>;
    async fn delete_all(&self) -> Result<(), ProductError>;
}
