//! Top-division bouts from the plain-text results export
//!
//! The export lists each division under a line starting with its name. Bout
//! lines sit between the `Makuuchi` line and the `Juryo` line, with columns
//! separated by two or more spaces:
//!
//! ```text
//! Makuuchi
//! Y1e Hoshoryu*    yorikiri    O1w Kotozakura
//! S1e Onosato      -           K1w Wakamotoharu
//! Juryo
//! ```
//!
//! A `*` marks the winner. Names carry no profile links, so ids are `None`.

use tracing::{debug, info};

use crate::constants::markers::{
    LOWER_DIVISION, TECHNIQUE_PLACEHOLDERS, TEXT_WINNER_MARK, TOP_DIVISION,
};
use crate::data_fetcher::models::{BoutRecord, CompetitorRef, Side};
use crate::error::AppError;

/// Splits a line into columns on runs of two or more whitespace characters.
pub fn split_columns(line: &str) -> Vec<&str> {
    let mut columns = Vec::new();
    let mut start = 0;
    let mut run_start: Option<usize> = None;
    let mut run_len = 0;

    for (index, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(index);
            }
            run_len += 1;
            continue;
        }
        if let Some(run) = run_start.take() {
            if run_len >= 2 {
                columns.push(&line[start..run]);
                start = index;
            }
            run_len = 0;
        }
    }
    columns.push(&line[start..]);

    columns
        .into_iter()
        .map(str::trim)
        .filter(|column| !column.is_empty())
        .collect()
}

fn competitor(column: &str) -> CompetitorRef {
    CompetitorRef::new(column.replace(TEXT_WINNER_MARK, "").trim(), None)
}

fn technique(columns: &[&str]) -> Option<String> {
    let text = columns.join(" ");
    if text.is_empty() || TECHNIQUE_PLACEHOLDERS.contains(&text.as_str()) {
        None
    } else {
        Some(text)
    }
}

/// Reads one bout line, `None` when it has fewer than two columns.
fn read_line(line: &str) -> Option<BoutRecord> {
    let columns = split_columns(line);
    let (east, west) = match columns.as_slice() {
        [east, .., west] => (*east, *west),
        _ => return None,
    };
    let kimarite = technique(&columns[1..columns.len() - 1]);

    let winner = match (east.contains(TEXT_WINNER_MARK), west.contains(TEXT_WINNER_MARK)) {
        (true, false) => Some(Side::East),
        (false, true) => Some(Side::West),
        _ => None,
    };

    Some(BoutRecord::new(
        competitor(east),
        competitor(west),
        kimarite,
        winner,
    ))
}

/// Extracts top-division bouts from the text export, in line order.
pub fn extract_bouts_from_text(text: &str) -> Result<Vec<BoutRecord>, AppError> {
    let mut lines = text.lines().map(str::trim_end).filter(|l| !l.trim().is_empty());

    if !lines.by_ref().any(|line| line.trim_start().starts_with(TOP_DIVISION)) {
        return Err(AppError::page_structure(format!(
            "no {TOP_DIVISION} section in text export"
        )));
    }

    let mut bouts: Vec<BoutRecord> = Vec::new();
    for line in lines.take_while(|line| !line.trim_start().starts_with(LOWER_DIVISION)) {
        match read_line(line) {
            Some(bout) => {
                let number = bouts.len() as u32 + 1;
                bouts.push(bout.with_bout(number));
            }
            None => debug!("Skipping text line: {line}"),
        }
    }

    info!("Extracted {} bouts from text export", bouts.len());
    Ok(bouts)
}
