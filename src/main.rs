use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use neontix_recs::{
    api::{create_router, AppState},
    config::Config,
    embed::RemoteEmbedder,
    store::InMemoryEventStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(InMemoryEventStore::new());
    let embedder = Arc::new(RemoteEmbedder::new(config.model_server_url.clone()));

    let state = AppState::new(store, embedder)
        .with_limits(config.popular_limit, config.candidate_limit);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "recommendation service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
