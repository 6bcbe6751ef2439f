use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use ume_backend::{build_router, SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ume_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = SiteConfig::from_env().context("invalid site configuration")?;
    tracing::debug!(?config, "loaded configuration");
    if config.is_development() {
        tracing::info!("running in development mode");
    }

    let app = build_router(&config);
    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    tracing::info!("Serving {} on port {}", config.site_dir.display(), config.port);
    axum::serve(listener, app.into_make_service())
        .await
        .context("server stopped unexpectedly")?;
    Ok(())
}
