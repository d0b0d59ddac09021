pub mod api;
pub mod models;
pub mod parsers;

pub use api::{fetch_bouts, fetch_leaderboard, resolve_schedule};
pub use models::{BoutRecord, Leaderboard, TournamentSchedule};
