#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    NegativePrice,
    #[error("product.invalid_sort_field: {0}")]
    InvalidSortField(String),
    #[error("store.backend")]
    Storage(#[from] crate::domain::errors::StoreError),
}
