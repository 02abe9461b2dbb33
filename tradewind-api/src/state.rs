use std::sync::Arc;

use tradewind_order::OrderOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<OrderOrchestrator>,
}
