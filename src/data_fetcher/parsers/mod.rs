pub mod bouts;
pub mod html_utils;
pub mod leaderboard;
pub mod text_export;

pub use bouts::{RowLayout, extract_bouts, find_results_table, parse_bouts};
pub use leaderboard::{extract_leaderboard, parse_leaderboard, parse_win_count};
pub use text_export::extract_bouts_from_text;
