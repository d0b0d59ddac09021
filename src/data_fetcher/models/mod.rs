pub mod bouts;
pub mod leaderboard;
pub mod schedule;

pub use bouts::{BoutRecord, CompetitorRef, Side};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardGroup};
pub use schedule::TournamentSchedule;
