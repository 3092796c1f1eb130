pub mod application {
    pub mod product {
        pub mod repository;
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod service;
        pub mod store;
    }
}
