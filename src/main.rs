//! rankboard - support-ticket ranking dashboard backend.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use rankboard::config::{Cli, Config};
use rankboard::store::{connect_readonly, Store};
use rankboard::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting rankboard v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    let store = if config.offline {
        info!("Offline mode: serving fixture data, no database connection");
        Store::fixture()
    } else {
        let pool = connect_readonly(&config.database_url).await?;
        info!("Connected read-only to {}", config.database_url);
        Store::live(pool)
    };

    let state = AppState::new(store, &config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("rankboard listening on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
