use chrono::{DateTime, Utc};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::CatalogPage;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Units in stock
    pub stock: i32,
    /// Category label
    pub category: String,
    /// Brand label
    pub brand: String,
    /// Image locators in display order
    pub image_urls: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            stock: product.stock,
            category: product.category,
            brand: product.brand,
            image_urls: product.image_urls,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of the catalog.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    /// Number of products matching the filter across all pages
    pub total: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

impl From<CatalogPage> for ProductListResponse {
    fn from(page: CatalogPage) -> Self {
        Self {
            products: page.items.into_iter().map(|p| p.into()).collect(),
            total: page.total,
            current_page: page.current_page,
            total_pages: page.total_pages,
        }
    }
}

/// Multipart form for creating a product together with its images.
#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    pub description: Option<String>,
    /// Unit price as a decimal string
    pub price: String,
    /// Units in stock
    pub stock: i32,
    /// Category label
    pub category: String,
    /// Brand label
    pub brand: String,
    /// Image files (at least one required)
    pub images: Vec<Upload>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    pub description: Option<String>,
    /// Unit price as a decimal string
    pub price: String,
    /// Units in stock
    pub stock: i32,
    /// Category label
    pub category: String,
    /// Brand label
    pub brand: String,
}
