pub mod models;
pub mod orchestrator;

pub use models::{OrderDetails, OrderRequest};
pub use orchestrator::{OrderError, OrderOrchestrator};
