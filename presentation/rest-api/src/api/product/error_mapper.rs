use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty".to_string(),
            ),
            ProductError::NegativePrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative".to_string(),
            ),
            ProductError::InvalidSortField(field) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                format!("product.invalid_sort_field: {}", field),
            ),
            // Storage detail stays in the server logs; callers get a
            // generic message.
            ProductError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "store.backend".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
