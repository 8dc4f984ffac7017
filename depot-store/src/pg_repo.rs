use async_trait::async_trait;
use chrono::{DateTime, Utc};
use depot_catalog::{Money, NewProduct, Product};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{CatalogRepository, StoreError};

pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    title: String,
    description: String,
    image_url: String,
    price_cents: i64,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            price: Money::from_cents(row.price_cents),
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, title, description, image_url, price_cents, updated_at FROM products ORDER BY title COLLATE \"C\"",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = product.into_product()?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (id, title, description, image_url, price_cents, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.price.cents())
        .bind(product.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(product),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateTitle(product.title))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn count_products(&self) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        let count = usize::try_from(count).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(count)
    }
}
