use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
        }
    }
}
