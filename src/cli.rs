use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::error::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether the invocation only reads or edits configuration.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_base_url.is_some()
        || args.new_output_dir.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Checks flag combinations clap cannot express on its own.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.skip_leaderboard && args.leaderboard_only {
        return Err(AppError::config_error(
            "--skip-leaderboard and --leaderboard-only cannot be used together",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "--set-log-file and --clear-log-file cannot be used together",
        ));
    }
    Ok(())
}

/// Sumo results scraper
///
/// Fetches the top-division (makuuchi) results for one day of a basho and
/// the current yusho arasoi, and writes them as JSON files.
///
/// Without --banzuke and --day the basho and day are worked out from
/// today's date in Japan. Explicit values may also come from the BANZUKE
/// and DAY environment variables; arguments win over the environment.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Basho to fetch as YYYYMM, e.g. 202509. Month must be a basho month.
    #[arg(long = "banzuke", short = 'b', value_name = "YYYYMM", help_heading = "Schedule")]
    pub banzuke: Option<String>,

    /// Day of the basho to fetch. Values outside 1-15 are clamped.
    #[arg(long = "day", short = 'd', value_name = "DAY", help_heading = "Schedule")]
    pub day: Option<String>,

    /// Read bouts from the plain-text results export instead of the HTML page.
    #[arg(long = "text-export", help_heading = "Schedule")]
    pub text_export: bool,

    /// Directory for bouts.json and leaderboard.json for this run.
    #[arg(long = "output-dir", short = 'o', help_heading = "Output")]
    pub output_dir: Option<String>,

    /// Only write bouts.json.
    #[arg(long = "skip-leaderboard", help_heading = "Output")]
    pub skip_leaderboard: bool,

    /// Only write leaderboard.json.
    #[arg(long = "leaderboard-only", help_heading = "Output")]
    pub leaderboard_only: bool,

    /// Update the results site base URL in config.
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub new_base_url: Option<String>,

    /// Update the default output directory in config.
    #[arg(long = "set-output-dir", value_name = "DIR", help_heading = "Configuration")]
    pub new_output_dir: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log at debug level, including every skipped table row.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Log only to the log file, not to stderr.
    #[arg(long = "quiet", short = 'q', help_heading = "Debug")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
