use async_trait::async_trait;
use depot_catalog::{NewProduct, Product};
use tokio::sync::RwLock;

use crate::repository::{CatalogRepository, StoreError};
use crate::seed::seed_products;

/// In-memory catalog, used for development and tests
#[derive(Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-loaded with the seed books
    pub fn seeded() -> Result<Self, StoreError> {
        let products = seed_products()
            .into_iter()
            .map(NewProduct::into_product)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            products: RwLock::new(products),
        })
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut products = self.products.read().await.clone();
        products.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(products)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = product.into_product()?;

        let mut products = self.products.write().await;
        if products.iter().any(|p| p.title == product.title) {
            return Err(StoreError::DuplicateTitle(product.title));
        }
        products.push(product.clone());

        Ok(product)
    }

    async fn count_products(&self) -> Result<usize, StoreError> {
        Ok(self.products.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_catalog::{Money, ProductError};

    fn new_product(title: &str, cents: i64) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: "A book.".to_string(),
            image_url: "book.png".to_string(),
            price: Money::from_cents(cents),
        }
    }

    #[tokio::test]
    async fn test_seeded_catalog_lists_by_title() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let titles: Vec<String> = catalog
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(
            titles,
            vec!["CoffeeScript", "Programming Ruby 1.9", "Rails Test Prescriptions"]
        );
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let catalog = InMemoryCatalog::new();
        assert_eq!(catalog.count_products().await.unwrap(), 0);

        catalog.create_product(new_product("Zebra", 100)).await.unwrap();
        catalog.create_product(new_product("Aardvark", 200)).await.unwrap();

        let products = catalog.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Aardvark");
        assert_eq!(products[1].price, Money::from_cents(100));
    }

    #[tokio::test]
    async fn test_mixed_case_titles_sort_by_bytes() {
        let catalog = InMemoryCatalog::new();
        for title in ["apple Pie", "Zebra", "Apple", "zebra"] {
            catalog.create_product(new_product(title, 100)).await.unwrap();
        }

        let titles: Vec<String> = catalog
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["Apple", "Zebra", "apple Pie", "zebra"]);
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected() {
        let catalog = InMemoryCatalog::new();
        catalog.create_product(new_product("Dup", 100)).await.unwrap();

        let err = catalog.create_product(new_product("Dup", 300)).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTitle(ref t) if t == "Dup"));
        assert_eq!(catalog.count_products().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_product_not_stored() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.create_product(new_product("Free", 0)).await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Invalid(ProductError::PriceTooLow { .. })
        ));
        assert_eq!(catalog.count_products().await.unwrap(), 0);
    }
}
