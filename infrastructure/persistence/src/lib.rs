pub mod db;
pub mod product {
    pub mod entity;
    pub mod memory;
    pub mod store;
}
