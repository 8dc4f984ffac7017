use depot_catalog::{Money, NewProduct};
use tracing::{debug, info};

use crate::repository::{CatalogRepository, StoreError};

/// The books an empty store starts with
pub fn seed_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            title: "CoffeeScript".to_string(),
            description: "CoffeeScript is JavaScript done right. It provides all of JavaScript's \
                functionality wrapped in a cleaner, more succinct syntax."
                .to_string(),
            image_url: "cs.jpg".to_string(),
            price: Money::from_cents(3600),
        },
        NewProduct {
            title: "Programming Ruby 1.9".to_string(),
            description: "Ruby is the fastest growing and most exciting dynamic language out \
                there. If you need to get working programs delivered fast, you should add Ruby \
                to your toolbox."
                .to_string(),
            image_url: "ruby.jpg".to_string(),
            price: Money::from_cents(4950),
        },
        NewProduct {
            title: "Rails Test Prescriptions".to_string(),
            description: "Rails Test Prescriptions is a comprehensive guide to testing Rails \
                applications, covering Test-Driven Development from both a theoretical \
                perspective and a practical one."
                .to_string(),
            image_url: "rtp.jpg".to_string(),
            price: Money::from_cents(3495),
        },
    ]
}

/// Insert the seed books if the repository holds nothing yet.
/// Returns the number of products inserted.
///
/// Concurrent seeders may both observe an empty catalog; a title another
/// seeder already inserted is skipped.
pub async fn seed_if_empty(repo: &dyn CatalogRepository) -> Result<usize, StoreError> {
    if repo.count_products().await? > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for product in seed_products() {
        match repo.create_product(product).await {
            Ok(_) => inserted += 1,
            Err(StoreError::DuplicateTitle(title)) => {
                debug!("Seed product {} already present, skipping", title);
            }
            Err(e) => return Err(e),
        }
    }

    info!("Seeded catalog with {} products", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalog;
    use async_trait::async_trait;
    use depot_catalog::Product;

    #[test]
    fn test_seed_products_are_valid() {
        for product in seed_products() {
            assert!(product.validate().is_ok(), "{} failed validation", product.title);
        }
    }

    /// Reports an empty catalog regardless of contents, as a second seeder
    /// racing the first would see it
    struct StaleCount(InMemoryCatalog);

    #[async_trait]
    impl CatalogRepository for StaleCount {
        async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
            self.0.list_products().await
        }

        async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
            self.0.create_product(product).await
        }

        async fn count_products(&self) -> Result<usize, StoreError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_concurrent_seeders_skip_existing_titles() {
        let repo = StaleCount(InMemoryCatalog::new());

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 3);
        assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);
        assert_eq!(repo.0.count_products().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_seed_if_empty_only_once() {
        let catalog = InMemoryCatalog::new();

        assert_eq!(seed_if_empty(&catalog).await.unwrap(), 3);
        assert_eq!(seed_if_empty(&catalog).await.unwrap(), 0);
        assert_eq!(catalog.count_products().await.unwrap(), 3);
    }
}
