use bigdecimal::{BigDecimal, ToPrimitive};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be blank)
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Category, matched exact and case-insensitively by filters
    pub category: String,
    /// Non-negative price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be blank)
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Category, matched exact and case-insensitively by filters
    pub category: String,
    /// Non-negative price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Store-assigned unique identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Category
    pub category: String,
    /// Price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            category: product.category,
            price: product.price.to_f64().unwrap_or_default(),
        }
    }
}

/// Converts a wire price into the decimal the domain carries.
/// `None` for values with no decimal representation (NaN, infinities).
pub fn decimal_price(value: f64) -> Option<BigDecimal> {
    BigDecimal::try_from(value).ok()
}
