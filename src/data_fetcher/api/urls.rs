//! URL building utilities for the results site

use crate::constants::endpoints::{BANZUKE_PATH, RESULTS_PATH, RESULTS_TEXT_PATH};
use crate::data_fetcher::models::TournamentSchedule;

/// Builds the per-day results URL for a basho.
///
/// # Example
/// ```
/// use sumo_scrape::data_fetcher::api::build_results_url;
///
/// let url = build_results_url("https://sumodb.sumogames.de", "202509", 2);
/// assert_eq!(url, "https://sumodb.sumogames.de/Results.aspx?b=202509&d=2");
/// ```
pub fn build_results_url(base_url: &str, banzuke: &str, day: u32) -> String {
    format!(
        "{}{RESULTS_PATH}?b={banzuke}&d={day}",
        base_url.trim_end_matches('/')
    )
}

/// Builds the results URL for a resolved schedule.
pub fn build_schedule_results_url(base_url: &str, schedule: &TournamentSchedule) -> String {
    build_results_url(base_url, &schedule.code(), schedule.day())
}

/// Builds the plain-text results export URL for a resolved schedule.
///
/// # Example
/// ```
/// use sumo_scrape::data_fetcher::api::build_results_text_url;
/// use sumo_scrape::TournamentSchedule;
///
/// let schedule = TournamentSchedule::from_code("202509", 2).unwrap();
/// let url = build_results_text_url("https://sumodb.sumogames.de", &schedule);
/// assert_eq!(url, "https://sumodb.sumogames.de/Results_text.aspx?b=202509&d=2");
/// ```
pub fn build_results_text_url(base_url: &str, schedule: &TournamentSchedule) -> String {
    format!(
        "{}{RESULTS_TEXT_PATH}?b={}&d={}",
        base_url.trim_end_matches('/'),
        schedule.code(),
        schedule.day()
    )
}

/// Builds the current banzuke URL, which carries the yusho arasoi table.
///
/// # Example
/// ```
/// use sumo_scrape::data_fetcher::api::build_leaderboard_url;
///
/// let url = build_leaderboard_url("https://sumodb.sumogames.de/");
/// assert_eq!(url, "https://sumodb.sumogames.de/Banzuke.aspx");
/// ```
pub fn build_leaderboard_url(base_url: &str) -> String {
    format!("{}{BANZUKE_PATH}", base_url.trim_end_matches('/'))
}
