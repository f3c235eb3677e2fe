use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming a log file; overrides `[logging] file`.
pub const LOG_ENV: &str = "PINCODE_LOG";

/// Initialize tracing with file output.
///
/// Logging stays off unless a file is configured: anything written to the
/// terminal would corrupt the TUI. The file name gets a `.{timestamp}.{pid}`
/// suffix so concurrent instances do not clobber each other.
pub fn init_tracing(config: &LoggingConfig) {
    let log_path = std::env::var(LOG_ENV)
        .ok()
        .or_else(|| config.file.as_ref().map(|p| p.display().to_string()));
    let Some(log_path) = log_path else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    if let Some(parent) = Path::new(&unique_path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
