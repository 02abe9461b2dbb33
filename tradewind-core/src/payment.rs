use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    Card,
    Paypal,
    ApplePay,
}

/// Instruction sent to the payment processor for one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub order_id: i64,
    pub amount: i64,
    pub payment_mode: PaymentMode,
}

/// Payment record as reported by the payment processor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDetails {
    pub payment_id: i64,
    pub status: String,
    pub payment_mode: PaymentMode,
    pub amount: i64,
    pub payment_date: DateTime<Utc>,
    pub order_id: i64,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Execute a payment for an order
    async fn do_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Retrieve the payment recorded for an order
    async fn get_payment_by_order_id(
        &self,
        order_id: i64,
    ) -> Result<PaymentDetails, Box<dyn std::error::Error + Send + Sync>>;
}
