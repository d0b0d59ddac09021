use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits the configured log location into directory and file name.
///
/// `--log-file` wins over the config file; without either, logs go to the
/// platform log directory.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    match args.log_file.as_ref().or(config.log_file_path.as_ref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Target of the final error logged when a run fails. It only goes to the
/// log file; `main` prints the same message to stderr itself.
pub const EXIT_LOG_TARGET: &str = "sumo_scrape::exit";

fn parse_directive(directive: &str) -> Result<Directive, AppError> {
    directive
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))
}

fn crate_directive(debug: bool) -> Result<Directive, AppError> {
    let level = if debug { "debug" } else { "info" };
    parse_directive(&format!("{}={level}", env!("CARGO_PKG_NAME")))
}

/// Filters for the stderr and file layers, in that order.
fn build_filters(debug: bool) -> Result<(EnvFilter, EnvFilter), AppError> {
    let directive = crate_directive(debug)?;
    let stderr_filter = EnvFilter::from_default_env()
        .add_directive(directive.clone())
        .add_directive(parse_directive(&format!("{EXIT_LOG_TARGET}=off"))?);
    let file_filter = EnvFilter::from_default_env().add_directive(directive);
    Ok((stderr_filter, file_filter))
}

/// Sets up logging for the run.
///
/// - Logs go to a daily rolling file and, unless `--quiet`, to stderr
/// - `--debug` raises the crate's level from info to debug
/// - `RUST_LOG` directives are honored on top of that
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let (stderr_filter, file_filter) = build_filters(args.debug)?;

    let stderr_layer = (!args.quiet).then(|| {
        fmt::Layer::new()
            .with_writer(stderr)
            .with_ansi(true)
            .with_filter(stderr_filter)
    });

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
