use async_trait::async_trait;
use tracing::debug;

use tradewind_core::product::{ProductDetails, ProductGateway};

/// HTTP client for the product catalog service
pub struct HttpProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProductGateway for HttpProductClient {
    async fn reduce_quantity(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/product/reduceQuantity/{}", self.base_url, product_id);
        debug!("PUT {} quantity={}", url, quantity);

        self.http
            .put(&url)
            .query(&[("quantity", quantity)])
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn get_product(
        &self,
        product_id: i64,
    ) -> Result<ProductDetails, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/product/{}", self.base_url, product_id);
        debug!("GET {}", url);

        let details = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ProductDetails>()
            .await?;

        Ok(details)
    }
}
