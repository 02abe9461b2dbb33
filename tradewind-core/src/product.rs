use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Product record as reported by the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetails {
    pub product_name: String,
    pub product_id: i64,
    pub quantity: i64,
    pub price: i64,
}

#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Decrement available stock for a product
    async fn reduce_quantity(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Fetch product details by id
    async fn get_product(
        &self,
        product_id: i64,
    ) -> Result<ProductDetails, Box<dyn std::error::Error + Send + Sync>>;
}
