mod app;
mod auth;
mod config;
mod db;
mod error;
mod spending;
mod state;
mod summary;

use std::net::SocketAddr;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "spendwise=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;
    tracing::info!("successfully connected to the database");

    // Schema setup is all-or-nothing: a DDL failure aborts startup.
    db::init_schema(&state.db).await?;

    let addr: SocketAddr = state.config.bind_address().parse()?;
    let app = app::build_app(state)?;
    app::serve(app, addr).await
}
