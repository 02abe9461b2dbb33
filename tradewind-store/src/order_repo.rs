use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tradewind_core::order::{Order, OrderStatus};
use tradewind_core::repository::OrderRepository;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    product_id: i64,
    quantity: i64,
    amount: i64,
    status: String,
    order_date: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown order status in store: {}", self.status))?;

        Ok(Order {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            amount: self.amount,
            status,
            order_date: self.order_date,
        })
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn save(
        &self,
        order: &Order,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        // id 0 marks an unsaved order; the BIGSERIAL column assigns the real id
        let row = if order.id == 0 {
            sqlx::query_as::<_, OrderRow>(
                r#"
                INSERT INTO orders (product_id, quantity, amount, status, order_date)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, product_id, quantity, amount, status, order_date
                "#,
            )
            .bind(order.product_id)
            .bind(order.quantity)
            .bind(order.amount)
            .bind(order.status.as_str())
            .bind(order.order_date)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, OrderRow>(
                r#"
                UPDATE orders
                SET product_id = $2, quantity = $3, amount = $4, status = $5, order_date = $6
                WHERE id = $1
                RETURNING id, product_id, quantity, amount, status, order_date
                "#,
            )
            .bind(order.id)
            .bind(order.product_id)
            .bind(order.quantity)
            .bind(order.amount)
            .bind(order.status.as_str())
            .bind(order.order_date)
            .fetch_one(&self.pool)
            .await?
        };

        row.into_order()
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, product_id, quantity, amount, status, order_date FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }
}
