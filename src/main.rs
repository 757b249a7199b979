use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tarefas::config::Config;
use tarefas::state::AppState;
use tarefas::{db, routes};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let state = AppState {
        db: db::connect(&config),
    };

    let app = routes::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    info!("listening on http://{}", config.addr());

    axum::serve(listener, app).await?;

    Ok(())
}
