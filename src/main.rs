use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use review_text_service::config::{models::ModelSettings, server::ServerSettings};
use review_text_service::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("review_text_service=info,tower_http=info")),
        )
        .init();

    let server = ServerSettings::from_env()?;
    let models = ModelSettings::from_env();

    tracing::info!(
        english = %models.english_model,
        spanish = %models.spanish_model,
        base_url = %models.base_url,
        "loading generators"
    );

    let state = AppState {
        generators: Arc::new(models.connect()),
        device: server.device.clone(),
    };

    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    let address = listener.local_addr()?;
    tracing::info!(%address, device = %server.device, "review text service listening");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
