pub mod order;
pub mod payment;
pub mod product;
pub mod repository;

pub use order::{Order, OrderStatus};
pub use payment::{PaymentDetails, PaymentGateway, PaymentMode, PaymentRequest};
pub use product::{ProductDetails, ProductGateway};
pub use repository::OrderRepository;
