pub mod app_config;
pub mod database;
pub mod order_repo;
pub mod payment_client;
pub mod product_client;

pub use database::DbClient;
pub use order_repo::PgOrderRepository;
pub use payment_client::HttpPaymentClient;
pub use product_client::HttpProductClient;
