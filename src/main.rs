//! RTU Dashboard - Main Entry Point
//!
//! Animated replay of a day of building load under uncoordinated and coordinated
//! rooftop-unit control, with EV charging and storage.

use std::path::PathBuf;

use rtu_dashboard::app::application::run_app;
use rtu_dashboard::constants::LOG_FILE_PREFIX;
use rtu_dashboard::helpers::get_or_create_data_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Console plus daily log file in the data directory. Keep the guard alive.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_dir = get_or_create_data_dir();

    let (file_layer, guard) = match &log_dir {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Err(e) = log_dir {
        tracing::warn!(error = %e, "File logging disabled");
    }
    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting RTU Dashboard...");

    // First argument overrides the configured data file
    let data_override = std::env::args_os().nth(1).map(PathBuf::from);

    run_app(data_override);
}
