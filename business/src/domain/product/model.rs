use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ProductError;

/// A catalog product. Image locators reference objects in the remote
/// storage provider and are immutable once set; replacing them means
/// replacing the whole product.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category: String,
    pub brand: String,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category: String,
    pub brand: String,
    pub image_urls: Vec<String>,
}

pub struct ProductUpdateProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category: String,
    pub brand: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate(&props.name, &props.price, props.stock)?;

        if props.image_urls.is_empty() {
            return Err(ProductError::ImagesEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            stock: props.stock,
            category: props.category,
            brand: props.brand,
            image_urls: props.image_urls,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the mutable fields, leaving id and image locators intact.
    pub fn apply_update(&mut self, props: ProductUpdateProps) -> Result<(), ProductError> {
        Self::validate(&props.name, &props.price, props.stock)?;

        self.name = props.name;
        self.description = props.description;
        self.price = props.price;
        self.stock = props.stock;
        self.category = props.category;
        self.brand = props.brand;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate(name: &str, price: &BigDecimal, stock: i32) -> Result<(), ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if price < &BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }
        if stock < 0 {
            return Err(ProductError::StockNegative);
        }
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        stock: i32,
        category: String,
        brand: String,
        image_urls: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            category,
            brand,
            image_urls,
            created_at,
            updated_at,
        }
    }
}
