use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradewind_core::order::OrderStatus;
use tradewind_core::payment::{PaymentDetails, PaymentMode};
use tradewind_core::product::ProductDetails;

/// Inbound request to place an order
///
/// Quantity and amount are assumed positive; the caller enforces that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub total_amount: i64,
    pub payment_mode: PaymentMode,
}

/// Read-only composite assembled for one details lookup; never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order_id: i64,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatus,
    pub amount: i64,
    pub product_details: ProductDetails,
    pub payment_details: PaymentDetails,
}
