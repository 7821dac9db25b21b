//! Output formatting and logging utilities

use color_eyre::eyre::{Result, WrapErr};
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime as StdSystemTime;
use tracing::{info, warn};
use tracing_subscriber::{
    filter::LevelFilter, fmt::format::Writer, fmt::layer, fmt::time::FormatTime,
    layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let total_seconds = StdSystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        // HH:MM:SS of the current UTC day
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup logging to a file or stdout
pub fn setup_output(log_path: Option<&String>, verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    match log_path {
        Some(path) => {
            if let Ok(log) = File::create(path) {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false)
                    .with_filter(level);
                Registry::default().with(file_layer).init();
                info!("Log will be written to: {}", path);
            } else {
                eprintln!("Could not create log file: {}", path);
            }
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true)
                .with_filter(level);
            Registry::default().with(stdout_layer).init();
        }
    }
}

/// File-system friendly basis set name: lower case, "/" becomes "I" and
/// blanks become underscores.
pub fn normalise_name(name: &str) -> String {
    name.to_lowercase().replace('/', "I").replace(' ', "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

/// Write converted text to `<destination>/<normalised name>.<extension>`.
///
/// An existing file is left alone unless `overwrite` is set.
pub fn write_converted(
    destination: &Path,
    name: &str,
    extension: &str,
    text: &str,
    overwrite: bool,
) -> Result<WriteOutcome> {
    let path = destination.join(format!("{}.{}", normalise_name(name), extension));
    if path.exists() && !overwrite {
        warn!(
            "Skipping {} since the file already exists, use --overwrite to replace it",
            path.display()
        );
        return Ok(WriteOutcome::Skipped(path));
    }

    fs::create_dir_all(destination)
        .wrap_err_with(|| format!("Unable to create directory {}", destination.display()))?;
    fs::write(&path, text).wrap_err_with(|| format!("Unable to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(WriteOutcome::Written(path))
}
