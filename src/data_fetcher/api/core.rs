use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_page;
use super::urls::{build_leaderboard_url, build_results_text_url, build_schedule_results_url};
use crate::config::Config;
use crate::data_fetcher::models::{BoutRecord, Leaderboard, TournamentSchedule};
use crate::data_fetcher::parsers::{extract_bouts, extract_bouts_from_text, extract_leaderboard};
use crate::error::AppError;

/// Fetches the results page for `schedule` and extracts its top-division bouts.
#[instrument(skip(client, config, schedule), fields(schedule = %schedule))]
pub async fn fetch_bouts(
    client: &Client,
    config: &Config,
    schedule: &TournamentSchedule,
) -> Result<Vec<BoutRecord>, AppError> {
    let url = build_schedule_results_url(&config.base_url, schedule);
    let markup = fetch_page(client, &url).await?;
    let bouts = extract_bouts(&markup)?;
    Ok(stamp_day(bouts, schedule))
}

/// Same as [`fetch_bouts`], reading the plain-text results export instead.
#[instrument(skip(client, config, schedule), fields(schedule = %schedule))]
pub async fn fetch_text_export_bouts(
    client: &Client,
    config: &Config,
    schedule: &TournamentSchedule,
) -> Result<Vec<BoutRecord>, AppError> {
    let url = build_results_text_url(&config.base_url, schedule);
    let text = fetch_page(client, &url).await?;
    let bouts = extract_bouts_from_text(&text)?;
    Ok(stamp_day(bouts, schedule))
}

fn stamp_day(bouts: Vec<BoutRecord>, schedule: &TournamentSchedule) -> Vec<BoutRecord> {
    let bouts: Vec<BoutRecord> = bouts
        .into_iter()
        .map(|bout| bout.with_day(schedule.day()))
        .collect();

    let decided = bouts.iter().filter(|b| b.is_decided()).count();
    info!(
        "Basho {} day {}: {} bouts, {} decided",
        schedule.code(),
        schedule.day(),
        bouts.len(),
        decided
    );
    bouts
}

/// Fetches the current banzuke page and extracts the yusho arasoi.
#[instrument(skip(client, config))]
pub async fn fetch_leaderboard(client: &Client, config: &Config) -> Result<Leaderboard, AppError> {
    let url = build_leaderboard_url(&config.base_url);
    let markup = fetch_page(client, &url).await?;
    let leaderboard = extract_leaderboard(&markup)?;

    if let Some(wins) = leaderboard.leader_wins() {
        info!("Leaders are on {wins} wins");
    }
    Ok(leaderboard)
}
