//! Yusho arasoi (leaderboard) extraction from the banzuke page

use scraper::{ElementRef, Html};
use tracing::{debug, info};

use super::html_utils::{
    HEADING, competitor_from_cell, contains_marker, element_text, next_table_after, row_cells,
    table_rows,
};
use crate::constants::markers::LEADERBOARD_HEADING;
use crate::data_fetcher::models::{Leaderboard, LeaderboardEntry};
use crate::error::AppError;

/// Win count from a `wins-losses` record, read from the part before the first `-`.
///
/// Records such as `8-6-1` (with absences) still yield the win count.
pub fn parse_win_count(record: &str) -> Option<u32> {
    let wins = record.split('-').next()?.trim();
    wins.parse().ok()
}

fn read_row(index: usize, row: ElementRef) -> Option<(u32, LeaderboardEntry)> {
    let cells = row_cells(row);
    if cells.len() < 3 {
        debug!("Skipping leaderboard row {index}: {} cells", cells.len());
        return None;
    }

    let name = competitor_from_cell(cells[1]).name;
    let record = element_text(cells[2]);
    let Some(wins) = parse_win_count(&record) else {
        debug!("Skipping leaderboard row {index}: unparseable record {record:?}");
        return None;
    };

    Some((wins, LeaderboardEntry { name, record }))
}

/// Extracts the leaderboard from a parsed banzuke page.
pub fn parse_leaderboard(html: &Html) -> Result<Leaderboard, AppError> {
    let heading = html
        .select(&HEADING)
        .find(|h| contains_marker(&element_text(*h), LEADERBOARD_HEADING))
        .ok_or_else(|| {
            AppError::page_structure(format!("no '{LEADERBOARD_HEADING}' heading found"))
        })?;

    let table = next_table_after(heading).ok_or_else(|| {
        AppError::page_structure(format!("no table follows the '{LEADERBOARD_HEADING}' heading"))
    })?;

    let leaderboard = Leaderboard::from_entries(
        table_rows(table)
            .into_iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, row)| read_row(index, row)),
    );

    info!(
        "Extracted leaderboard: {} wrestlers in {} groups",
        leaderboard.len(),
        leaderboard.groups().len()
    );
    Ok(leaderboard)
}

/// Parses raw markup and extracts the leaderboard.
pub fn extract_leaderboard(markup: &str) -> Result<Leaderboard, AppError> {
    parse_leaderboard(&Html::parse_document(markup))
}
