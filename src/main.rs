use cosmos_tx_gas::config::Config;
use cosmos_tx_gas::services::metrics::MetricsRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmos_tx_gas=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");
    let addr = config.bind_addr().expect("Invalid bind address");

    let metrics = MetricsRegistry::new().expect("Failed to initialize metrics registry");

    let app = cosmos_tx_gas::create_app(&config, metrics);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
