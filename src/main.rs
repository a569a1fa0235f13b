mod config;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `.env` may set RUST_LOG, so it is read before the subscriber starts.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env()?;
    let proxy = proxy::ApiProxy::new(&config)?;
    let app = routes::app(proxy)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(port = config.port, api_url = %config.api_url, "mentora listening");
    axum::serve(listener, app).await?;
    Ok(())
}
