use async_trait::async_trait;
use depot_catalog::{NewProduct, Product, ProductError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid product: {0}")]
    Invalid(#[from] ProductError),

    #[error("Title has already been taken: {0}")]
    DuplicateTitle(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Repository trait for catalog data access
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All products, ordered by title bytes (case-sensitive, uppercase first)
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    async fn count_products(&self) -> Result<usize, StoreError>;
}
