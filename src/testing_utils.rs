//! Markup fixture builders for parser and pipeline tests

use crate::data_fetcher::models::Side;

/// One bout row in a fixture page.
#[derive(Debug, Clone)]
pub struct BoutRow {
    pub east: String,
    pub west: String,
    pub kimarite: String,
    pub winner: Option<Side>,
    pub linked: bool,
}

impl BoutRow {
    /// A row whose winner side is marked, with `kimarite` as given (may be empty or `-`).
    pub fn decided(east: &str, west: &str, kimarite: &str, winner: Side) -> Self {
        Self {
            east: east.to_string(),
            west: west.to_string(),
            kimarite: kimarite.to_string(),
            winner: Some(winner),
            linked: true,
        }
    }

    /// A row not yet fought: no technique and no winner marks.
    pub fn pending(east: &str, west: &str) -> Self {
        Self {
            east: east.to_string(),
            west: west.to_string(),
            kimarite: String::new(),
            winner: None,
            linked: true,
        }
    }

    /// Renders names as plain text instead of profile links.
    pub fn without_links(mut self) -> Self {
        self.linked = false;
        self
    }
}

enum FixtureRow {
    Bout(BoutRow),
    Raw(String),
}

fn name_cell_content(name: &str, id: usize, linked: bool) -> String {
    if linked {
        format!(r#"<a href="Rikishi.aspx?r={id}">{name}</a>"#)
    } else {
        name.to_string()
    }
}

fn star(won: Option<bool>) -> &'static str {
    match won {
        Some(true) => r#"<img src="img/hoshi_shiro.gif" alt="win">"#,
        Some(false) => r#"<img src="img/hoshi_kuro.gif" alt="loss">"#,
        None => "",
    }
}

fn styled_attr(won: bool) -> &'static str {
    if won {
        r#" style="background-color: #cceecc""#
    } else {
        ""
    }
}

/// Builds a results page with a single labeled top-division table.
///
/// Profile links get sequential ids starting at 10001 in row order,
/// east before west.
#[derive(Default)]
pub struct ResultsPageBuilder {
    rows: Vec<FixtureRow>,
}

impl ResultsPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, row: BoutRow) -> Self {
        self.rows.push(FixtureRow::Bout(row));
        self
    }

    /// Appends markup as-is, for spacer or malformed rows.
    pub fn raw_row(mut self, markup: &str) -> Self {
        self.rows.push(FixtureRow::Raw(markup.to_string()));
        self
    }

    /// Five-cell layout with win/loss star images.
    pub fn marker_image_page(&self) -> String {
        self.render(5, |row, east_id, west_id| {
            let east_won = row.winner.map(|w| w == Side::East);
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                star(east_won),
                name_cell_content(&row.east, east_id, row.linked),
                row.kimarite,
                name_cell_content(&row.west, west_id, row.linked),
                star(east_won.map(|won| !won)),
            )
        })
    }

    /// Three-cell layout with the winner's cell background-colored.
    pub fn styled_page(&self) -> String {
        self.render(3, |row, east_id, west_id| {
            format!(
                "<tr><td{}>{}</td><td>{}</td><td{}>{}</td></tr>",
                styled_attr(row.winner == Some(Side::East)),
                name_cell_content(&row.east, east_id, row.linked),
                row.kimarite,
                styled_attr(row.winner == Some(Side::West)),
                name_cell_content(&row.west, west_id, row.linked),
            )
        })
    }

    fn render(&self, columns: usize, bout_row: impl Fn(&BoutRow, usize, usize) -> String) -> String {
        let mut next_id = 10001;
        let body: String = self
            .rows
            .iter()
            .map(|row| match row {
                FixtureRow::Bout(bout) => {
                    let markup = bout_row(bout, next_id, next_id + 1);
                    next_id += 2;
                    markup
                }
                FixtureRow::Raw(markup) => markup.clone(),
            })
            .collect();

        format!(
            r#"<html><head><title>Results</title></head><body>
<table class="layout"><tr><td>
<table class="tk_table">
<tr><td colspan="{columns}">Makuuchi</td></tr>
{body}
</table>
<table class="tk_table">
<tr><td colspan="{columns}">Juryo</td></tr>
</table>
</td></tr></table>
</body></html>"#
        )
    }
}

/// Builds a banzuke page carrying a yusho arasoi table.
#[derive(Default)]
pub struct LeaderboardPageBuilder {
    rows: Vec<String>,
}

impl LeaderboardPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `rank | name | record` row.
    pub fn entry(mut self, rank: &str, name: &str, record: &str) -> Self {
        let id = 20001 + self.rows.len();
        self.rows.push(format!(
            r#"<tr><td>{rank}</td><td><a href="Rikishi.aspx?r={id}">{name}</a></td><td>{record}</td></tr>"#
        ));
        self
    }

    pub fn raw_row(mut self, markup: &str) -> Self {
        self.rows.push(markup.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            r#"<html><body>
<h1>Banzuke</h1>
<table class="banzuke"><tr><th>Rank</th><th>Shikona</th></tr></table>
<div class="arasoi"><h2>Yusho Arasoi</h2>
<table>
<tr><th>Rank</th><th>Shikona</th><th>Record</th></tr>
{}
</table></div>
</body></html>"#,
            self.rows.concat()
        )
    }
}
