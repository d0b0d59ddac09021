// src/main.rs
use chrono::Utc;
use clap::Parser;
use std::process::ExitCode;
use sumo_scrape::cli::{Args, is_config_command, validate_args};
use sumo_scrape::commands::{
    handle_config_update_command, handle_list_config_command, handle_scrape_command,
};
use sumo_scrape::data_fetcher::api::today_in_japan;
use sumo_scrape::logging::{EXIT_LOG_TARGET, setup_logging};
use sumo_scrape::{AppError, Config};
use tracing::{debug, error, info};

async fn run(args: Args) -> Result<(), AppError> {
    validate_args(&args)?;

    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    debug!("Logging to {log_file_path}");

    // Logged while the guard is alive; stderr gets the message from main
    dispatch(&args, &config)
        .await
        .inspect_err(|e| error!(target: EXIT_LOG_TARGET, "{e}"))
}

async fn dispatch(args: &Args, config: &Config) -> Result<(), AppError> {
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(args) {
        return handle_config_update_command(args).await;
    }

    let today = today_in_japan(Utc::now());
    info!("Today in Japan: {today}");

    let written = handle_scrape_command(args, config, today).await?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
