use std::sync::Arc;

use tracing::{error, info};

use tradewind_core::order::{Order, OrderStatus};
use tradewind_core::payment::{PaymentGateway, PaymentRequest};
use tradewind_core::product::ProductGateway;
use tradewind_core::repository::OrderRepository;

use crate::models::{OrderDetails, OrderRequest};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("{message}")]
    NotFound {
        message: String,
        code: &'static str,
    },

    #[error("downstream call failed: {0}")]
    Downstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("order store failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Sequences the order store and the two collaborators for the order workflows
pub struct OrderOrchestrator {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductGateway>,
    payments: Arc<dyn PaymentGateway>,
}

impl OrderOrchestrator {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductGateway>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            orders,
            products,
            payments,
        }
    }

    /// Place an order: reduce stock, persist, attempt payment, record the outcome.
    ///
    /// Returns the assigned order id even when the payment attempt fails; the
    /// failure is recorded as the persisted PAYMENT_FAILED status instead.
    /// Stock is not restored on payment failure.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<i64, OrderError> {
        info!(
            "Placing order for product {} x{}",
            request.product_id, request.quantity
        );

        // Fail fast: if stock cannot be reduced, no order is created.
        self.products
            .reduce_quantity(request.product_id, request.quantity)
            .await
            .map_err(OrderError::Downstream)?;

        info!("Stock reduced - creating order with status CREATED");

        let order = Order::new(request.product_id, request.quantity, request.total_amount);
        let mut order = self.orders.save(&order).await.map_err(OrderError::Storage)?;

        let payment_request = PaymentRequest {
            order_id: order.id,
            amount: request.total_amount,
            payment_mode: request.payment_mode,
        };

        // The payment outcome decides the terminal status. A failure is
        // recorded, never re-raised to the caller.
        let status = match self.payments.do_payment(&payment_request).await {
            Ok(()) => {
                info!("Payment done for order {}", order.id);
                OrderStatus::PaymentSuccess
            }
            Err(e) => {
                error!("Payment failed for order {}: {}", order.id, e);
                OrderStatus::PaymentFailed
            }
        };

        order.update_status(status);
        let order = self.orders.save(&order).await.map_err(OrderError::Storage)?;

        info!(
            "Order {} placed with status {}",
            order.id,
            order.status.as_str()
        );

        Ok(order.id)
    }

    /// Assemble the composite view of an order from the store and both collaborators.
    ///
    /// Unlike the write path, nothing is caught here: an unknown id is a
    /// NotFound, and any collaborator read failure propagates to the caller.
    pub async fn get_order_details(&self, order_id: i64) -> Result<OrderDetails, OrderError> {
        info!("Get order details for order id {}", order_id);

        let order = self
            .orders
            .find_by_id(order_id)
            .await
            .map_err(OrderError::Storage)?
            .ok_or_else(|| OrderError::NotFound {
                message: format!("Order not found with the given id {}", order_id),
                code: "NOT_FOUND",
            })?;

        let product_details = self
            .products
            .get_product(order.product_id)
            .await
            .map_err(OrderError::Downstream)?;

        let payment_details = self
            .payments
            .get_payment_by_order_id(order.id)
            .await
            .map_err(OrderError::Downstream)?;

        Ok(OrderDetails {
            order_id: order.id,
            order_date: order.order_date,
            order_status: order.status,
            amount: order.amount,
            product_details,
            payment_details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use tradewind_core::payment::{PaymentDetails, PaymentMode};
    use tradewind_core::product::ProductDetails;

    struct InMemoryOrders {
        orders: Mutex<HashMap<i64, Order>>,
        next_id: AtomicI64,
    }

    impl InMemoryOrders {
        fn new() -> Self {
            Self {
                orders: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }

        fn stored(&self, id: i64) -> Option<Order> {
            self.orders.lock().unwrap().get(&id).cloned()
        }
    }

    #[async_trait]
    impl OrderRepository for InMemoryOrders {
        async fn save(
            &self,
            order: &Order,
        ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
            let mut stored = order.clone();
            if stored.id == 0 {
                stored.id = self.next_id.fetch_add(1, Ordering::SeqCst);
            }
            self.orders.lock().unwrap().insert(stored.id, stored.clone());
            Ok(stored)
        }

        async fn find_by_id(
            &self,
            id: i64,
        ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.orders.lock().unwrap().get(&id).cloned())
        }
    }

    struct FakeCatalog {
        fail_reduce: bool,
        reductions: Mutex<Vec<(i64, i64)>>,
        details: ProductDetails,
    }

    impl FakeCatalog {
        fn new() -> Self {
            Self {
                fail_reduce: false,
                reductions: Mutex::new(Vec::new()),
                details: ProductDetails {
                    product_name: "Widget".to_string(),
                    product_id: 10,
                    quantity: 98,
                    price: 250,
                },
            }
        }
    }

    #[async_trait]
    impl ProductGateway for FakeCatalog {
        async fn reduce_quantity(
            &self,
            product_id: i64,
            quantity: i64,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            if self.fail_reduce {
                return Err("product service unavailable".into());
            }
            self.reductions.lock().unwrap().push((product_id, quantity));
            Ok(())
        }

        async fn get_product(
            &self,
            _product_id: i64,
        ) -> Result<ProductDetails, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.details.clone())
        }
    }

    struct FakePayments {
        fail_payment: bool,
        requests: Mutex<Vec<PaymentRequest>>,
    }

    impl FakePayments {
        fn new(fail_payment: bool) -> Self {
            Self {
                fail_payment,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for FakePayments {
        async fn do_payment(
            &self,
            request: &PaymentRequest,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail_payment {
                return Err("payment gateway rejected the charge".into());
            }
            Ok(())
        }

        async fn get_payment_by_order_id(
            &self,
            order_id: i64,
        ) -> Result<PaymentDetails, Box<dyn std::error::Error + Send + Sync>> {
            Ok(PaymentDetails {
                payment_id: 77,
                status: "SUCCESS".to_string(),
                payment_mode: PaymentMode::Card,
                amount: 500,
                payment_date: Utc::now(),
                order_id,
            })
        }
    }

    fn request() -> OrderRequest {
        OrderRequest {
            product_id: 10,
            quantity: 2,
            total_amount: 500,
            payment_mode: PaymentMode::Card,
        }
    }

    #[tokio::test]
    async fn test_place_order_success() {
        let orders = Arc::new(InMemoryOrders::new());
        let catalog = Arc::new(FakeCatalog::new());
        let payments = Arc::new(FakePayments::new(false));
        let orchestrator =
            OrderOrchestrator::new(orders.clone(), catalog.clone(), payments.clone());

        let order_id = orchestrator.place_order(&request()).await.unwrap();

        assert!(order_id > 0);
        // Stock was reduced exactly once, by the requested quantity
        assert_eq!(*catalog.reductions.lock().unwrap(), vec![(10, 2)]);

        let stored = orders.stored(order_id).unwrap();
        assert_eq!(stored.status, OrderStatus::PaymentSuccess);
        assert_eq!(stored.amount, 500);

        // The payment call carried the assigned id and the request amount
        let requests = payments.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].order_id, order_id);
        assert_eq!(requests[0].amount, 500);
    }

    #[tokio::test]
    async fn test_payment_failure_is_recorded_not_raised() {
        let orders = Arc::new(InMemoryOrders::new());
        let catalog = Arc::new(FakeCatalog::new());
        let payments = Arc::new(FakePayments::new(true));
        let orchestrator =
            OrderOrchestrator::new(orders.clone(), catalog.clone(), payments.clone());

        let order_id = orchestrator.place_order(&request()).await.unwrap();

        // The id is returned even though the charge failed
        let stored = orders.stored(order_id).unwrap();
        assert_eq!(stored.status, OrderStatus::PaymentFailed);

        // Known gap: stock stays decremented, no rollback
        assert_eq!(*catalog.reductions.lock().unwrap(), vec![(10, 2)]);
    }

    #[tokio::test]
    async fn test_stock_failure_aborts_before_any_order() {
        let orders = Arc::new(InMemoryOrders::new());
        let mut catalog = FakeCatalog::new();
        catalog.fail_reduce = true;
        let payments = Arc::new(FakePayments::new(false));
        let orchestrator =
            OrderOrchestrator::new(orders.clone(), Arc::new(catalog), payments.clone());

        let result = orchestrator.place_order(&request()).await;

        assert!(matches!(result, Err(OrderError::Downstream(_))));
        // No partial order, no payment attempt
        assert!(orders.orders.lock().unwrap().is_empty());
        assert!(payments.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_order_details_unknown_id() {
        let orchestrator = OrderOrchestrator::new(
            Arc::new(InMemoryOrders::new()),
            Arc::new(FakeCatalog::new()),
            Arc::new(FakePayments::new(false)),
        );

        let err = orchestrator.get_order_details(42).await.unwrap_err();

        match err {
            OrderError::NotFound { code, .. } => assert_eq!(code, "NOT_FOUND"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_order_details_mirrors_collaborators() {
        let orders = Arc::new(InMemoryOrders::new());
        let catalog = Arc::new(FakeCatalog::new());
        let payments = Arc::new(FakePayments::new(false));
        let orchestrator =
            OrderOrchestrator::new(orders.clone(), catalog.clone(), payments.clone());

        let order_id = orchestrator.place_order(&request()).await.unwrap();
        let details = orchestrator.get_order_details(order_id).await.unwrap();

        assert_eq!(details.order_id, order_id);
        assert_eq!(details.order_status, OrderStatus::PaymentSuccess);
        assert_eq!(details.amount, 500);

        // Nested structures mirror the collaborator responses field for field
        assert_eq!(details.product_details, catalog.details);
        assert_eq!(details.payment_details.payment_id, 77);
        assert_eq!(details.payment_details.order_id, order_id);
        assert_eq!(details.payment_details.payment_mode, PaymentMode::Card);
    }
}
