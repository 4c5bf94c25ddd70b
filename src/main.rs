use tracing_subscriber::EnvFilter;

use caresense::api::server::start_server;
use caresense::config;
use caresense::db::sqlite::open_database;
use caresense::inference::{InferenceEngine, SymptomVocabulary};
use caresense::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    std::fs::create_dir_all(config::app_data_dir())?;
    let conn = open_database(&config::database_path())?;

    // A missing model degrades to unavailable mode; the server still runs
    // and records every request.
    let engine = InferenceEngine::load(SymptomVocabulary::default(), &config::models_dir());
    let state = AppState::new(conn, engine);

    let mut server = start_server(state, config::bind_addr()).await?;
    tracing::info!(addr = %server.local_addr, "listening");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    server.shutdown();

    Ok(())
}
