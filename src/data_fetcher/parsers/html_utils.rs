//! Markup helpers shared by the bout and leaderboard parsers

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

use crate::data_fetcher::models::CompetitorRef;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

pub static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
pub static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
pub static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
pub static HEADING: LazyLock<Selector> =
    LazyLock::new(|| selector("h1, h2, h3, h4, h5, h6"));

/// Joins all text under `element` with runs of whitespace collapsed to one space.
pub fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring test.
pub fn contains_marker(text: &str, marker: &str) -> bool {
    text.to_lowercase().contains(&marker.to_lowercase())
}

pub fn is_heading(element: ElementRef) -> bool {
    matches!(
        element.value().name(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// Rows belonging to `table` itself, skipping rows of nested tables.
pub fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table
        .select(&ROW)
        .filter(|row| {
            row.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|ancestor| ancestor.value().name() == "table")
                .is_some_and(|owner| owner.id() == table.id())
        })
        .collect()
}

/// The table's own `<caption>`, ignoring captions of nested tables.
pub fn own_caption(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    table
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "caption")
}

/// Direct `td`/`th` children of a row.
pub fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .collect()
}

/// Identifier carried by a profile link: the text after the last `=`.
pub fn link_identifier(href: &str) -> Option<String> {
    href.rsplit_once('=')
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Reads a wrestler from a cell: link text and link id when a link is
/// present, plain cell text and no id otherwise.
pub fn competitor_from_cell(cell: ElementRef) -> CompetitorRef {
    if let Some(link) = cell.select(&LINK).next() {
        let name = element_text(link);
        let id = link.value().attr("href").and_then(link_identifier);
        if !name.is_empty() {
            return CompetitorRef::new(name, id);
        }
        return CompetitorRef::new(element_text(cell), id);
    }
    CompetitorRef::new(element_text(cell), None)
}

/// First `<table>` after `element` in document order, outside `element` itself.
///
/// `None` when another heading comes first.
pub fn next_table_after<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    std::iter::once(*element)
        .chain(element.ancestors())
        .flat_map(|node| node.next_siblings())
        .flat_map(|sibling| sibling.descendants())
        .filter_map(ElementRef::wrap)
        .find(|candidate| candidate.value().name() == "table" || is_heading(*candidate))
        .filter(|found| found.value().name() == "table")
}
