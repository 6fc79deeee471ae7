// src/log.rs
//
// Debug log sink. The logf!/logd!/loge! macros are thin wrappers over
// `tracing`; `init` wires a subscriber that appends to `.store/debug.log`
// with an uptime clock, and optionally echoes warnings to stderr (CLI).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self, time::Uptime},
    prelude::*,
};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE, STORE_DIR};

pub use tracing;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once. Later calls are no-ops.
pub fn init(echo_stderr: bool) {
    INIT.get_or_init(|| {
        let file_layer = open_log_file().map(|file| {
            fmt::layer()
                .with_ansi(false)
                .with_timer(Uptime::default())
                .with_target(false)
                .with_writer(Mutex::new(file))
        });

        let stderr_layer = echo_stderr.then(|| {
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::WARN)
        });

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new(DEFAULT_LOG_FILTER))
            .with(file_layer)
            .with(stderr_layer)
            .try_init();
    });
}

fn open_log_file() -> Option<fs::File> {
    let dir = Path::new(STORE_DIR);
    if !dir.exists() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
