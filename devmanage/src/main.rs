// DevManage - business dashboard backend
// Entry point: initializes state and prints the current dashboard

use devmanage::analytics::format_currency;
use devmanage::app::AppState;
use devmanage::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devmanage=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting DevManage");

    let config = AppConfig::from_env();
    let state = AppState::initialize(config).await?;

    let settings = state.settings.load().await?;
    let snapshot = state.dashboard.snapshot().await?;
    let metrics = &snapshot.metrics;
    let symbol = settings.currency_symbol.as_str();

    tracing::info!(
        "Earnings {} ({} this month), outstanding {}",
        format_currency(metrics.total_earnings, symbol),
        format_currency(metrics.monthly_revenue, symbol),
        format_currency(metrics.outstanding_balance, symbol)
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
