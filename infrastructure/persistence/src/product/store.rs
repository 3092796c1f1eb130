use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::StoreError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::query::{ProductFilter, SortDirection, SortKey};
use business::domain::product::store::ProductStore;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, name, description, category, price";

pub struct ProductStorePostgres {
    pool: PgPool,
}

impl ProductStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    tracing::error!(target: "catalog", "products store failure: {}", err);
    StoreError::Backend
}

#[async_trait]
impl ProductStore for ProductStorePostgres {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, description, category, price)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, description, category, price",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        Ok(entity.into_domain())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_matching(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        // position() keeps the substring match literal; no LIKE wildcard
        // escaping needed.
        let (sql, term) = match filter {
            ProductFilter::NameContains(term) => (
                format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE position($1 in name) > 0 ORDER BY id"
                ),
                term,
            ),
            ProductFilter::CategoryEqualsIgnoreCase(term) => (
                format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE lower(category) = lower($1) ORDER BY id"
                ),
                term,
            ),
        };

        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(term)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn list_sorted(
        &self,
        key: SortKey,
        direction: SortDirection,
    ) -> Result<Vec<Product>, StoreError> {
        let column = match key {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Price => "price",
        };
        let order = match direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };

        // Identifiers cannot be bound; both fragments come from closed
        // enums. Ties between equal keys break by ascending id.
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY {column} {order}, id ASC"
        );

        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(backend)
    }

    async fn update(&self, product: &Product) -> Result<bool, StoreError> {
        // Single-statement update-if-exists; no find-then-mutate race.
        let result = sqlx::query(
            "UPDATE products SET name = $2, description = $3, category = $4, price = $5
             WHERE id = $1",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.price)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(())
    }
}
