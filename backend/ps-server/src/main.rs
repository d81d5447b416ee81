use ps_auth::CredentialStore;
use ps_gateway::PolicyAnalysisGateway;
use ps_server::{AppState, SessionRegistry, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real env vars win either way
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ps_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ps_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ps-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool and migrations
    let database_url = config.database.normalized_url();
    info!("Connecting to database: {database_url}");
    let pool = ps_db::connect(&database_url).await?;
    ps_db::migrate(&pool).await?;
    info!("Database ready");

    // Analysis gateway (the API key is required at startup, not first use)
    let api_key = config.analysis.require_api_key()?;
    let gateway = PolicyAnalysisGateway::new(&config.analysis.base_url, api_key, &config.analysis.model);

    let state = AppState {
        pool: pool.clone(),
        sessions: SessionRegistry::new(),
        credentials: Arc::new(CredentialStore::new(pool)),
        gateway: Arc::new(gateway),
        max_upload_bytes: config.analysis.max_upload_bytes,
    };

    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {actual_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {e}"),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
