use async_trait::async_trait;

use super::errors::ProductError;
use super::model::{NewProduct, Product};

/// Orchestration seam between the transport layer and the repository.
/// Mirrors the repository operation set; cross-cutting policy (input
/// normalization, logging) belongs here so the repository stays a pure
/// translation layer.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn add(&self, product: NewProduct) -> Result<Product, ProductError>;
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ProductError>;
    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, ProductError>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, ProductError>;
    async fn total_count(&self) -> Result<i64, ProductError>;
    async fn get_sorted(
        &self,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<Vec<Product>, ProductError>;
    async fn update(&self, product: Product) -> Result<bool, ProductError>;
    async fn delete(&self, id: i32) -> Result<bool, ProductError>;
    async fn delete_all(&self) -> Result<(), ProductError>;
}
