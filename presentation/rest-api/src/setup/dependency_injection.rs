use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::store::ProductStorePostgres;

use business::application::product::repository::StoreProductRepository;
use business::application::product::service::CatalogProductService;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapter
        let store = Arc::new(ProductStorePostgres::new(pool));

        // Core: repository over the store, service over the repository
        let repository = Arc::new(StoreProductRepository { store });
        let service = Arc::new(CatalogProductService { repository, logger });

        let product_api = crate::api::product::routes::ProductApi::new(service);

        Self {
            health_api,
            product_api,
        }
    }
}
