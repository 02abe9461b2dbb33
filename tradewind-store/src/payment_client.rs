use async_trait::async_trait;
use tracing::debug;

use tradewind_core::payment::{PaymentDetails, PaymentGateway, PaymentRequest};

/// HTTP client for the payment processor service
pub struct HttpPaymentClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPaymentClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentClient {
    async fn do_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/payment", self.base_url);
        debug!("POST {} for order {}", url, request.order_id);

        self.http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn get_payment_by_order_id(
        &self,
        order_id: i64,
    ) -> Result<PaymentDetails, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/payment/order/{}", self.base_url, order_id);
        debug!("GET {}", url);

        let details = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<PaymentDetails>()
            .await?;

        Ok(details)
    }
}
