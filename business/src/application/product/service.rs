use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::service::ProductService;

/// Forwards every operation to the repository. Input normalization for
/// mutations lives here: names are trimmed and must be non-empty,
/// prices must be non-negative. Query outcomes (not-found, invalid
/// sort field, storage failure) pass through unchanged.
pub struct CatalogProductService {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CatalogProductService {
    fn normalized_name(&self, name: &str) -> Result<String, ProductError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProductError::NameEmpty);
        }
        Ok(trimmed.to_string())
    }

    fn check_price(&self, price: &BigDecimal) -> Result<(), ProductError> {
        if *price < BigDecimal::from(0) {
            return Err(ProductError::NegativePrice);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductService for CatalogProductService {
    async fn add(&self, product: NewProduct) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", product.name));

        let name = self.normalized_name(&product.name)?;
        self.check_price(&product.price)?;

        let created = self
            .repository
            .add(NewProduct { name, ..product })
            .await?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }

    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ProductError> {
        self.repository.get_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Product>, ProductError> {
        self.repository.get_by_name(name).await
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, ProductError> {
        self.repository.get_by_category(category).await
    }

    async fn total_count(&self) -> Result<i64, ProductError> {
        self.repository.total_count().await
    }

    async fn get_sorted(
        &self,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<Vec<Product>, ProductError> {
        self.repository.get_sorted(sort_by, sort_order).await
    }

    async fn update(&self, product: Product) -> Result<bool, ProductError> {
        let id = product.id;
        self.logger.info(&format!("Updating product: {}", id));

        let name = self.normalized_name(&product.name)?;
        self.check_price(&product.price)?;

        let updated = self
            .repository
            .update(Product { name, ..product })
            .await?;

        if !updated {
            self.logger
                .warn(&format!("Product not found for update: {}", id));
        }
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, ProductError> {
        self.logger.info(&format!("Deleting product: {}", id));
        self.repository.delete(id).await
    }

    async fn delete_all(&self) -> Result<(), ProductError> {
        self.logger.info("Deleting all products");
        self.repository.delete_all().await
    }
}
