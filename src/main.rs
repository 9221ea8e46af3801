use notification_router::config::AppConfig;
use notification_router::domain::stats::StatsCatalog;
use notification_router::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let catalog = StatsCatalog::load(&cfg.event_stats_path, &cfg.sample_events_path);
    let state = AppState::build(&cfg, catalog);
    let app = notification_router::app(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(
        "listening on {} final_fallback={}",
        cfg.bind_addr,
        cfg.final_fallback_channel
    );
    axum::serve(listener, app).await?;
    Ok(())
}
