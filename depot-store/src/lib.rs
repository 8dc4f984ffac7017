pub mod app_config;
pub mod database;
pub mod memory;
pub mod pg_repo;
pub mod repository;
pub mod seed;

pub use database::DbClient;
pub use memory::InMemoryCatalog;
pub use pg_repo::PgCatalogRepository;
pub use repository::{CatalogRepository, StoreError};
