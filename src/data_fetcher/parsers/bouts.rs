//! Top-division bout extraction from a results page
//!
//! The results site has used two row layouts over time:
//!
//! - **marker image**: five cells, `result | east | technique | west | result`,
//!   where each result cell holds a white (win) or black (loss) star image.
//! - **styled**: three cells, `east | technique | west`, where the winner's
//!   name cell carries a `background-color` style.
//!
//! Rows are classified one at a time, so a table mixing spacer rows with bout
//! rows of either layout still yields every bout in page order.

use scraper::{ElementRef, Html};
use tracing::{debug, info, warn};

use super::html_utils::{
    IMAGE, TABLE, competitor_from_cell, contains_marker, element_text, is_heading, own_caption,
    row_cells, table_rows,
};
use crate::constants::markers::{
    LOSS_IMAGE, RESULTS_TABLE_CLASS, TECHNIQUE_PLACEHOLDERS, TOP_DIVISION, WIN_IMAGE, WINNER_STYLE,
};
use crate::data_fetcher::models::{BoutRecord, Side};
use crate::error::AppError;

/// Row layouts seen on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// `result | east | technique | west | result`
    MarkerImage,
    /// `east | technique | west`
    Styled,
}

impl RowLayout {
    /// Picks the layout a row's cells fit, or `None` for non-bout rows.
    pub fn detect(cells: &[ElementRef]) -> Option<Self> {
        match cells.len() {
            n if n >= 5 => Some(RowLayout::MarkerImage),
            n if n >= 3 => Some(RowLayout::Styled),
            _ => None,
        }
    }

    fn extract(self, cells: &[ElementRef]) -> BoutRecord {
        let (east_cell, technique_cell, west_cell) = match self {
            RowLayout::MarkerImage => (cells[1], cells[2], cells[3]),
            RowLayout::Styled => (cells[0], cells[1], cells[2]),
        };

        let winner = match self {
            RowLayout::MarkerImage => {
                match (result_marker(cells[0]), result_marker(cells[4])) {
                    (Some(Marker::Win), Some(Marker::Loss)) => Some(Side::East),
                    (Some(Marker::Loss), Some(Marker::Win)) => Some(Side::West),
                    _ => None,
                }
            }
            RowLayout::Styled => match (has_winner_style(east_cell), has_winner_style(west_cell)) {
                (true, false) => Some(Side::East),
                (false, true) => Some(Side::West),
                _ => None,
            },
        };

        BoutRecord::new(
            competitor_from_cell(east_cell),
            competitor_from_cell(west_cell),
            read_technique(technique_cell),
            winner,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Win,
    Loss,
}

/// Win/loss star inside a result cell.
fn result_marker(cell: ElementRef) -> Option<Marker> {
    cell.select(&IMAGE)
        .filter_map(|img| img.value().attr("src"))
        .find_map(|src| {
            let src = src.to_lowercase();
            if src.contains(WIN_IMAGE) {
                Some(Marker::Win)
            } else if src.contains(LOSS_IMAGE) {
                Some(Marker::Loss)
            } else {
                None
            }
        })
}

fn has_winner_style(cell: ElementRef) -> bool {
    cell.value()
        .attr("style")
        .is_some_and(|style| style.to_lowercase().contains(WINNER_STYLE))
}

/// Technique text, `None` when the bout has not been decided.
fn read_technique(cell: ElementRef) -> Option<String> {
    let text = element_text(cell);
    if text.is_empty() || TECHNIQUE_PLACEHOLDERS.contains(&text.as_str()) {
        None
    } else {
        Some(text)
    }
}

/// Whether `table` is explicitly labeled as the top-division table.
///
/// A label is the table's own caption or a directly preceding heading containing the
/// marker, or a first row reading exactly the marker (the division header
/// row the site puts on top of each table).
fn is_top_division_table(table: ElementRef) -> bool {
    let caption_matches = own_caption(table)
        .is_some_and(|caption| contains_marker(&element_text(caption), TOP_DIVISION));
    if caption_matches {
        return true;
    }

    let heading_matches = table
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .is_some_and(|prev| is_heading(prev) && contains_marker(&element_text(prev), TOP_DIVISION));
    if heading_matches {
        return true;
    }

    table_rows(table)
        .first()
        .is_some_and(|row| element_text(*row).eq_ignore_ascii_case(TOP_DIVISION))
}

fn has_results_class(table: ElementRef) -> bool {
    table
        .value()
        .classes()
        .any(|class| class == RESULTS_TABLE_CLASS)
}

/// Finds the top-division table: a labeled table first, else the first
/// table with the results class.
pub fn find_results_table(html: &Html) -> Result<ElementRef<'_>, AppError> {
    if let Some(table) = html.select(&TABLE).find(|t| is_top_division_table(*t)) {
        debug!("Found labeled {TOP_DIVISION} table");
        return Ok(table);
    }

    if let Some(table) = html.select(&TABLE).find(|t| has_results_class(*t)) {
        warn!("No labeled {TOP_DIVISION} table, using first table.{RESULTS_TABLE_CLASS}");
        return Ok(table);
    }

    Err(AppError::page_structure(format!(
        "no {TOP_DIVISION} results table found (no labeled table and no table.{RESULTS_TABLE_CLASS})"
    )))
}

/// Extracts bouts from a parsed results page, in row order.
pub fn parse_bouts(html: &Html) -> Result<Vec<BoutRecord>, AppError> {
    let table = find_results_table(html)?;

    let mut bouts: Vec<BoutRecord> = Vec::new();
    for (index, row) in table_rows(table).into_iter().enumerate().skip(1) {
        let cells = row_cells(row);
        match RowLayout::detect(&cells) {
            Some(layout) => {
                let number = bouts.len() as u32 + 1;
                bouts.push(layout.extract(&cells).with_bout(number));
            }
            None => debug!("Skipping row {index}: {} cells", cells.len()),
        }
    }

    info!("Extracted {} bouts", bouts.len());
    Ok(bouts)
}

/// Parses raw markup and extracts bouts.
pub fn extract_bouts(markup: &str) -> Result<Vec<BoutRecord>, AppError> {
    parse_bouts(&Html::parse_document(markup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{BoutRow, ResultsPageBuilder};

    #[test]
    fn test_marker_image_layout() {
        let page = ResultsPageBuilder::new()
            .row(BoutRow::decided("Hoshoryu", "Kotozakura", "yorikiri", Side::East))
            .row(BoutRow::decided("Onosato", "Wakamotoharu", "oshidashi", Side::West))
            .marker_image_page();

        let bouts = extract_bouts(&page).unwrap();
        assert_eq!(bouts.len(), 2);

        assert_eq!(bouts[0].east.name, "Hoshoryu");
        assert!(bouts[0].east.id.is_some());
        assert_eq!(bouts[0].west.name, "Kotozakura");
        assert_eq!(bouts[0].kimarite.as_deref(), Some("yorikiri"));
        assert_eq!(bouts[0].winner, Some(Side::East));

        assert_eq!(bouts[1].winner, Some(Side::West));
        assert_eq!(bouts[1].winner_name(), Some("Wakamotoharu"));
    }

    #[test]
    fn test_styled_layout() {
        let page = ResultsPageBuilder::new()
            .row(BoutRow::decided("Kirishima", "Abi", "hatakikomi", Side::West))
            .row(BoutRow::decided("Daieisho", "Tobizaru", "tsukidashi", Side::East))
            .styled_page();

        let bouts = extract_bouts(&page).unwrap();
        assert_eq!(bouts.len(), 2);
        assert_eq!(bouts[0].winner, Some(Side::West));
        assert_eq!(bouts[1].winner, Some(Side::East));
        assert_eq!(bouts[1].kimarite.as_deref(), Some("tsukidashi"));
    }

    #[test]
    fn test_styled_both_sides_is_ambiguous() {
        let page = r#"<html><body>
            <table class="tk_table">
              <tr><td colspan="3">Makuuchi</td></tr>
              <tr>
                <td style="background-color: #cfc">Abi</td>
                <td>oshidashi</td>
                <td style="background-color: #cfc">Ura</td>
              </tr>
              <tr><td>Meisei</td><td>yorikiri</td><td>Takayasu</td></tr>
            </table></body></html>"#;

        let bouts = extract_bouts(page).unwrap();
        assert_eq!(bouts.len(), 2);
        assert_eq!(bouts[0].kimarite.as_deref(), Some("oshidashi"));
        assert_eq!(bouts[0].winner, None);
        assert_eq!(bouts[1].winner, None);
    }

    #[test]
    fn test_marker_combinations_other_than_win_loss_have_no_winner() {
        let page = r#"<html><body>
            <table class="tk_table">
              <tr><td colspan="5">Makuuchi</td></tr>
              <tr>
                <td><img src="img/hoshi_shiro.gif"></td>
                <td>Abi</td><td>oshidashi</td><td>Ura</td>
                <td><img src="img/hoshi_shiro.gif"></td>
              </tr>
              <tr>
                <td></td>
                <td>Meisei</td><td>yorikiri</td><td>Takayasu</td>
                <td><img src="img/hoshi_kuro.gif"></td>
              </tr>
            </table></body></html>"#;

        let bouts = extract_bouts(page).unwrap();
        assert_eq!(bouts.len(), 2);
        assert_eq!(bouts[0].winner, None);
        assert_eq!(bouts[1].winner, None);
        assert!(bouts.iter().all(|b| b.kimarite.is_some()));
    }

    #[test]
    fn test_undecided_bout_ignores_markers() {
        let page = ResultsPageBuilder::new()
            .row(BoutRow::decided("Hoshoryu", "Kotozakura", "", Side::East))
            .row(BoutRow::decided("Onosato", "Wakamotoharu", "-", Side::West))
            .row(BoutRow::pending("Kirishima", "Abi"))
            .marker_image_page();

        let bouts = extract_bouts(&page).unwrap();
        assert_eq!(bouts.len(), 3);
        for bout in &bouts {
            assert_eq!(bout.kimarite, None);
            assert_eq!(bout.winner, None);
        }
    }

    #[test]
    fn test_undecided_bout_ignores_styling() {
        let page = ResultsPageBuilder::new()
            .row(BoutRow::decided("Kirishima", "Abi", "", Side::East))
            .styled_page();

        let bouts = extract_bouts(&page).unwrap();
        assert_eq!(bouts[0].kimarite, None);
        assert_eq!(bouts[0].winner, None);
    }

    #[test]
    fn test_malformed_rows_are_skipped_in_any_position() {
        let names = ["Hoshoryu", "Onosato", "Kotozakura", "Kirishima"];
        for malformed_at in 0..=names.len() {
            let mut builder = ResultsPageBuilder::new();
            for (i, name) in names.iter().enumerate() {
                if i == malformed_at {
                    builder = builder.raw_row("<tr><td>spacer</td></tr>");
                }
                builder = builder.row(BoutRow::decided(name, "Opponent", "yorikiri", Side::East));
            }
            if malformed_at == names.len() {
                builder = builder.raw_row("<tr><td>a</td><td>b</td></tr>");
            }

            let bouts = extract_bouts(&builder.marker_image_page()).unwrap();
            let east: Vec<&str> = bouts.iter().map(|b| b.east.name.as_str()).collect();
            assert_eq!(east, names, "malformed row at {malformed_at}");
        }
    }

    #[test]
    fn test_labeled_table_preferred_over_class_fallback() {
        let page = r#"<html><body>
            <table class="tk_table">
              <tr><td colspan="3">Juryo</td></tr>
              <tr><td>Tomokaze</td><td>yorikiri</td><td>Shimanoumi</td></tr>
            </table>
            <h3>Makuuchi</h3>
            <table>
              <tr><th>East</th><th>Kimarite</th><th>West</th></tr>
              <tr><td>Onosato</td><td>oshidashi</td><td>Hoshoryu</td></tr>
            </table></body></html>"#;

        let bouts = extract_bouts(page).unwrap();
        assert_eq!(bouts.len(), 1);
        assert_eq!(bouts[0].east.name, "Onosato");
    }

    #[test]
    fn test_caption_label() {
        let page = r#"<html><body>
            <table><caption>Makuuchi results</caption>
              <tr><th>East</th><th>Kimarite</th><th>West</th></tr>
              <tr><td>Onosato</td><td>oshidashi</td><td>Hoshoryu</td></tr>
            </table></body></html>"#;

        let bouts = extract_bouts(page).unwrap();
        assert_eq!(bouts.len(), 1);
    }

    #[test]
    fn test_nested_captioned_table_inside_layout_table() {
        let page = r#"<html><body>
            <table class="layout"><tr><td>
              <table><caption>Makuuchi</caption>
                <tr><th>East</th><th>Kimarite</th><th>West</th></tr>
                <tr><td>Onosato</td><td>oshidashi</td><td>Hoshoryu</td></tr>
              </table>
            </td></tr></table></body></html>"#;

        let bouts = extract_bouts(page).unwrap();
        assert_eq!(bouts.len(), 1);
        assert_eq!(bouts[0].east.name, "Onosato");
        assert_eq!(bouts[0].winner, None);
    }

    #[test]
    fn test_bouts_numbered_in_page_order() {
        let page = ResultsPageBuilder::new()
            .row(BoutRow::decided("Hoshoryu", "Kotozakura", "yorikiri", Side::East))
            .raw_row("<tr><td>spacer</td></tr>")
            .row(BoutRow::pending("Onosato", "Wakamotoharu"))
            .marker_image_page();

        let bouts = extract_bouts(&page).unwrap();
        let numbers: Vec<u32> = bouts.iter().map(|b| b.bout).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(bouts.iter().all(|b| b.day.is_none()));
    }

    #[test]
    fn test_class_fallback_when_unlabeled() {
        let page = r#"<html><body>
            <table><tr><td>layout</td></tr></table>
            <table class="tk_table">
              <tr><th>East</th><th>Kimarite</th><th>West</th></tr>
              <tr><td>Onosato</td><td>oshidashi</td><td>Hoshoryu</td></tr>
            </table></body></html>"#;

        let bouts = extract_bouts(page).unwrap();
        assert_eq!(bouts.len(), 1);
        assert_eq!(bouts[0].west.name, "Hoshoryu");
    }

    #[test]
    fn test_missing_table_is_structure_error() {
        let page = "<html><body><p>Results will be published soon.</p></body></html>";
        let result = extract_bouts(page);
        assert!(matches!(result, Err(AppError::PageStructure { .. })));
    }

    #[test]
    fn test_header_only_table_is_genuinely_empty() {
        let page = ResultsPageBuilder::new().marker_image_page();
        let bouts = extract_bouts(&page).unwrap();
        assert!(bouts.is_empty());
    }

    #[test]
    fn test_detect_layout() {
        let html = Html::parse_document(
            "<table><tr><td>1</td><td>2</td></tr><tr><td>1</td><td>2</td><td>3</td></tr>\
             <tr><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td></tr></table>",
        );
        let table = html.select(&TABLE).next().unwrap();
        let layouts: Vec<Option<RowLayout>> = table_rows(table)
            .into_iter()
            .map(|row| RowLayout::detect(&row_cells(row)))
            .collect();
        assert_eq!(
            layouts,
            vec![None, Some(RowLayout::Styled), Some(RowLayout::MarkerImage)]
        );
    }
}
