//! Log file setup.
//!
//! The terminal is owned by the TUI while the animation runs, so log output
//! goes to `byeol.log` in the platform data directory instead of stderr. The
//! level is taken from `RUST_LOG`, defaulting to `info`. When no platform
//! directory exists or the file cannot be created, logging stays disabled
//! and the application runs on without it.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Install the file-backed tracing subscriber, if a log file can be opened.
pub fn init() {
    let Some(dirs) = ProjectDirs::from("", "", "byeol") else {
        return;
    };
    let Some(file) = log_file(dirs.data_dir()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

/// Open `byeol.log` inside `dir`, creating the directory as needed.
///
/// Any IO failure yields `None`, which disables logging for the run.
fn log_file(dir: &Path) -> Option<File> {
    fs::create_dir_all(dir).ok()?;
    File::create(dir.join("byeol.log")).ok()
}
