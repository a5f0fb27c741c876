//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::config::{APP_NAME, Config};

/// Installs the global subscriber writing to `<data_dir>/movie_search/movie_search.log`.
///
/// Logging is optional: if the directory or file cannot be created the app
/// runs without it.
pub fn init(config: &Config) {
    let Some(log_dir) = Config::log_dir() else {
        return;
    };
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(format!("{}.log", APP_NAME)))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(log_file)),
        )
        .try_init();
}
