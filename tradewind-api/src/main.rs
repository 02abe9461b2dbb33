use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradewind_api::{app, AppState};
use tradewind_order::OrderOrchestrator;
use tradewind_store::app_config::Config;
use tradewind_store::{DbClient, HttpPaymentClient, HttpProductClient, PgOrderRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradewind_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Tradewind API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url).await?;
    db.migrate().await?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.request_timeout_seconds))
        .build()?;

    // Explicit composition: the store and collaborator clients are built once
    // and handed to the orchestrator as trait objects.
    let orders = Arc::new(PgOrderRepository::new(db.pool.clone()));
    let products = Arc::new(HttpProductClient::new(
        http.clone(),
        config.product_service.base_url.clone(),
    ));
    let payments = Arc::new(HttpPaymentClient::new(
        http,
        config.payment_service.base_url.clone(),
    ));

    let orchestrator = OrderOrchestrator::new(orders, products, payments);

    let app_state = AppState {
        orchestrator: Arc::new(orchestrator),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
