use std::env;

use chrono::Local;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use office_attendance::api::{AppState, create_router};
use office_attendance::config::ConfigLoader;
use office_attendance::models::MonthScope;
use office_attendance::store::AttendanceStore;

const CONFIG_DIR_VAR: &str = "OFFICE_ATTENDANCE_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/england";
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(log_filter(env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let settings = config.settings().clone();
    info!(
        config_dir = %config_dir,
        region = %settings.region,
        min_rate = settings.min_rate,
        holidays = config.holidays().len(),
        "Loaded configuration"
    );

    let this_month = MonthScope::containing(Local::now().date_naive());
    let store = AttendanceStore::load(&settings.store_path, this_month)?;

    let state = AppState::new(config, store).with_store_path(&settings.store_path);
    let app = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind(&settings.bind_address).await?;
    info!("Listening on http://{}", settings.bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match state.save().await {
        Ok(Some(path)) => info!(path = %path.display(), "Attendance store saved on shutdown"),
        Ok(None) => {}
        Err(err) => {
            warn!(error = %err, "Failed to save attendance store on shutdown");
            return Err(err.into());
        }
    }

    Ok(())
}

/// `RUST_LOG` directives when set and valid, otherwise `info`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
