//! floor-server entry point

use std::sync::Arc;

use floor_server::core::{Config, ServerState, serve};
use floor_server::store::RedbStore;
use floor_server::utils::logger::{init_logger, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    if config.is_production() {
        let log_dir = std::path::Path::new(&config.work_dir).join("logs");
        std::fs::create_dir_all(&log_dir)?;
        init_logger_with_file(&config.log_level, log_dir.to_str());
    } else {
        init_logger(&config.log_level);
    }

    tracing::info!(
        work_dir = %config.work_dir,
        port = config.http_port,
        timezone = %config.timezone,
        "starting floor-server"
    );

    let db_path = std::path::Path::new(&config.work_dir).join("floor.redb");
    let store = Arc::new(RedbStore::open(db_path)?);

    let state = ServerState::new(config, store);
    serve(state).await
}
