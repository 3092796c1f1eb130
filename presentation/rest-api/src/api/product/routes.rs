use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::model::{NewProduct, Product};
use business::domain::product::service::ProductService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, UpdateProductRequest, decimal_price,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    service: Arc<dyn ProductService>,
}

impl ProductApi {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

fn validation_error(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

fn not_found(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "NotFound".to_string(),
        message: message.to_string(),
    })
}

/// Product catalog API
///
/// Endpoints for creating, querying, updating, and deleting catalog
/// products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The store assigns the id; any id supplied by the caller is ignored.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let price = match decimal_price(body.0.price) {
            Some(price) => price,
            None => {
                return CreateProductResponse::BadRequest(validation_error(
                    "product.price_invalid",
                ));
            }
        };

        let params = NewProduct {
            name: body.0.name,
            description: body.0.description,
            category: body.0.category,
            price,
        };

        match self.service.add(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every product in store order; the list may be empty.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.service.get_all().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i32>) -> GetProductByIdResponse {
        match self.service.get_by_id(id.0).await {
            Ok(Some(product)) => GetProductByIdResponse::Ok(Json(product.into())),
            Ok(None) => GetProductByIdResponse::NotFound(not_found("product.not_found")),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductByIdResponse::InternalError(json)
            }
        }
    }

    /// Search products by name
    ///
    /// Case-sensitive substring match. An empty search term is a caller
    /// error and never reaches the service.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, name: Query<Option<String>>) -> SearchProductsResponse {
        let term = match name.0 {
            Some(term) if !term.trim().is_empty() => term,
            _ => {
                return SearchProductsResponse::BadRequest(validation_error(
                    "product.search_term_required",
                ));
            }
        };

        match self.service.get_by_name(&term).await {
            Ok(products) if products.is_empty() => {
                SearchProductsResponse::NotFound(not_found("product.not_found"))
            }
            Ok(products) => SearchProductsResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchProductsResponse::InternalError(json)
            }
        }
    }

    /// Total number of products
    #[oai(
        path = "/products/total-count",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_total_count(&self) -> TotalCountResponse {
        match self.service.total_count().await {
            Ok(count) => TotalCountResponse::Ok(Json(count)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                TotalCountResponse::InternalError(json)
            }
        }
    }

    /// List products in a category
    ///
    /// Exact, case-insensitive category match. Zero matches map to
    /// not-found by handler policy.
    #[oai(
        path = "/products/category/:category",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_category(
        &self,
        category: Path<String>,
    ) -> ProductsByCategoryResponse {
        match self.service.get_by_category(&category.0).await {
            Ok(products) if products.is_empty() => {
                ProductsByCategoryResponse::NotFound(not_found("product.not_found"))
            }
            Ok(products) => ProductsByCategoryResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductsByCategoryResponse::InternalError(json)
            }
        }
    }

    /// List products sorted by a field
    ///
    /// `sortBy` must be one of name, category, or price; any `sortOrder`
    /// other than "desc" sorts ascending.
    #[oai(path = "/products/sort", method = "get", tag = "ApiTags::Products")]
    async fn get_sorted_products(
        &self,
        #[oai(name = "sortBy")] sort_by: Query<Option<String>>,
        #[oai(name = "sortOrder")] sort_order: Query<Option<String>>,
    ) -> SortedProductsResponse {
        let sort_by = sort_by.0.unwrap_or_else(|| "name".to_string());
        let sort_order = sort_order.0.unwrap_or_else(|| "asc".to_string());

        match self.service.get_sorted(&sort_by, &sort_order).await {
            Ok(products) => SortedProductsResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SortedProductsResponse::BadRequest(json),
                    _ => SortedProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Full-field replace; the path id identifies the target and never
    /// changes.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i32>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let price = match decimal_price(body.0.price) {
            Some(price) => price,
            None => {
                return UpdateProductResponse::BadRequest(validation_error(
                    "product.price_invalid",
                ));
            }
        };

        let product = Product {
            id: id.0,
            name: body.0.name,
            description: body.0.description,
            category: body.0.category,
            price,
        };

        match self.service.update(product).await {
            Ok(true) => UpdateProductResponse::NoContent,
            Ok(false) => UpdateProductResponse::NotFound(not_found("product.not_found")),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i32>) -> DeleteProductResponse {
        match self.service.delete(id.0).await {
            Ok(true) => DeleteProductResponse::NoContent,
            Ok(false) => DeleteProductResponse::NotFound(not_found("product.not_found")),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }

    /// Delete all products
    #[oai(path = "/products", method = "delete", tag = "ApiTags::Products")]
    async fn delete_all_products(&self) -> DeleteAllProductsResponse {
        match self.service.delete_all().await {
            Ok(()) => DeleteAllProductsResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteAllProductsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum TotalCountResponse {
    #[oai(status = 200)]
    Ok(Json<i64>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductsByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SortedProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteAllProductsResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
