use async_trait::async_trait;

use crate::order::Order;

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist the order; assigns an id on first save and returns the stored row
    async fn save(
        &self,
        order: &Order,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;
}
