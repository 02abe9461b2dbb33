use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    PaymentSuccess,
    PaymentFailed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::PaymentSuccess => "PAYMENT_SUCCESS",
            OrderStatus::PaymentFailed => "PAYMENT_FAILED",
        }
    }

    /// Parse the stored wire form back into a status
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATED" => Some(OrderStatus::Created),
            "PAYMENT_SUCCESS" => Some(OrderStatus::PaymentSuccess),
            "PAYMENT_FAILED" => Some(OrderStatus::PaymentFailed),
            _ => None,
        }
    }
}

/// A persisted record of a purchase attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub amount: i64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Build an unsaved order; the store assigns the real id on first save
    pub fn new(product_id: i64, quantity: i64, amount: i64) -> Self {
        Self {
            id: 0,
            product_id,
            quantity,
            amount,
            status: OrderStatus::Created,
            order_date: Utc::now(),
        }
    }

    /// Update order status
    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(10, 2, 500);

        assert_eq!(order.id, 0);
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.product_id, 10);
        assert_eq!(order.quantity, 2);
        assert_eq!(order.amount, 500);
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(OrderStatus::PaymentSuccess.as_str(), "PAYMENT_SUCCESS");
        assert_eq!(OrderStatus::parse("PAYMENT_FAILED"), Some(OrderStatus::PaymentFailed));
        assert_eq!(OrderStatus::parse("REFUNDED"), None);

        let json = serde_json::to_string(&OrderStatus::Created).unwrap();
        assert_eq!(json, "\"CREATED\"");
    }
}
