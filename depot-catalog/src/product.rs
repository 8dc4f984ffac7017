use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// Smallest price a product may be listed at
pub const MIN_PRICE: Money = Money::from_cents(1);

const IMAGE_EXTENSIONS: [&str; 3] = [".gif", ".jpg", ".png"];

/// Item listed in the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: Money,
    pub updated_at: DateTime<Utc>,
}

/// Product data as submitted, before it has an identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: Money,
}

/// Product-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("{0} can't be blank")]
    Blank(&'static str),

    #[error("Price must be greater than or equal to {min}, got {actual}")]
    PriceTooLow { min: Money, actual: Money },

    #[error("Image URL must be a GIF, JPG or PNG image: {0}")]
    UnsupportedImage(String),
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.title.trim().is_empty() {
            return Err(ProductError::Blank("Title"));
        }
        if self.description.trim().is_empty() {
            return Err(ProductError::Blank("Description"));
        }
        if self.image_url.trim().is_empty() {
            return Err(ProductError::Blank("Image URL"));
        }

        if self.price < MIN_PRICE {
            return Err(ProductError::PriceTooLow {
                min: MIN_PRICE,
                actual: self.price,
            });
        }

        let lowered = self.image_url.to_ascii_lowercase();
        if !IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            return Err(ProductError::UnsupportedImage(self.image_url.clone()));
        }

        Ok(())
    }

    /// Validate and stamp with a fresh id
    pub fn into_product(self) -> Result<Product, ProductError> {
        self.validate()?;

        Ok(Product {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            updated_at: Utc::now(),
        })
    }
}

impl Product {
    /// Heading text shown in the store listing, e.g. `CoffeeScript: $36.00`
    pub fn listing_heading(&self) -> String {
        format!("{}: {}", self.title, self.price)
    }
}
