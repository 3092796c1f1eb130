use bigdecimal::BigDecimal;

/// A catalog product as persisted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: BigDecimal,
}

/// A product that has not been persisted yet. The store assigns the id
/// on insert; callers never supply one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: BigDecimal,
}

impl Product {
    /// Constructor for a record the store has assigned an id to.
    pub fn from_store(id: i32, fields: NewProduct) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            category: fields.category,
            price: fields.price,
        }
    }
}
