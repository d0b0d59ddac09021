use crate::cli::Args;
use crate::config::Config;
use crate::constants::env_vars;
use crate::data_fetcher::api::{
    create_http_client, fetch_bouts, fetch_leaderboard, fetch_text_export_bouts, resolve_schedule,
};
use crate::data_fetcher::models::TournamentSchedule;
use crate::error::AppError;
use crate::output::{write_bouts, write_leaderboard};
use chrono::NaiveDate;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies --set-base-url, --set-output-dir, --set-log-file and
/// --clear-log-file to `config`.
pub fn apply_config_updates(args: &Args, config: &mut Config) {
    if let Some(base_url) = &args.new_base_url {
        config.base_url = base_url.clone();
    }

    if let Some(output_dir) = &args.new_output_dir {
        config.output_dir = output_dir.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }
}

/// Handles configuration update commands.
///
/// Starts from the stored file (not the environment), so a one-off
/// `SUMO_*` override never gets persisted.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(args, &mut config);
    config.validate()?;
    config.save().await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");
    Ok(())
}

/// Banzuke and day from the command line, falling back to `BANZUKE`/`DAY`.
pub fn schedule_inputs(args: &Args) -> (Option<String>, Option<String>) {
    let from_env = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
    (
        args.banzuke.clone().or_else(|| from_env(env_vars::BANZUKE)),
        args.day.clone().or_else(|| from_env(env_vars::DAY)),
    )
}

/// Output directory for this run: --output-dir, else the configured one.
pub fn output_dir(args: &Args, config: &Config) -> PathBuf {
    PathBuf::from(args.output_dir.as_deref().unwrap_or(&config.output_dir))
}

/// Fetches, parses and writes the bouts for `schedule`, from the text
/// export when `text_export` is set.
pub async fn run_bouts_pipeline(
    client: &Client,
    config: &Config,
    schedule: &TournamentSchedule,
    output_dir: &Path,
    text_export: bool,
) -> Result<PathBuf, AppError> {
    let bouts = if text_export {
        fetch_text_export_bouts(client, config, schedule).await?
    } else {
        fetch_bouts(client, config, schedule).await?
    };
    write_bouts(output_dir, &bouts).await
}

/// Fetches, parses and writes the current leaderboard.
pub async fn run_leaderboard_pipeline(
    client: &Client,
    config: &Config,
    output_dir: &Path,
) -> Result<PathBuf, AppError> {
    let leaderboard = fetch_leaderboard(client, config).await?;
    write_leaderboard(output_dir, &leaderboard).await
}

/// Runs the scrape: schedule resolution, then the selected pipelines in order.
///
/// `today` is the civil date in Japan. Any failure ends the run; a pipeline
/// that already wrote its file keeps it.
pub async fn handle_scrape_command(
    args: &Args,
    config: &Config,
    today: NaiveDate,
) -> Result<Vec<PathBuf>, AppError> {
    let output_dir = output_dir(args, config);
    let client = create_http_client(config)?;
    let mut written = Vec::new();

    if !args.leaderboard_only {
        let (banzuke, day) = schedule_inputs(args);
        let schedule = resolve_schedule(banzuke.as_deref(), day.as_deref(), today)?;
        let path =
            run_bouts_pipeline(&client, config, &schedule, &output_dir, args.text_export).await?;
        written.push(path);
    }

    if !args.skip_leaderboard {
        written.push(run_leaderboard_pipeline(&client, config, &output_dir).await?);
    }

    info!("Run complete, {} file(s) written", written.len());
    Ok(written)
}
