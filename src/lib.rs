//! Sumo results scraper library
//!
//! This library fetches top-division bout results and the yusho arasoi
//! (leaderboard) from a sumo results site and writes them as JSON files
//! for a static site to consume.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use std::path::Path;
//! use sumo_scrape::data_fetcher::api::{
//!     create_http_client, fetch_bouts, resolve_schedule, today_in_japan,
//! };
//! use sumo_scrape::output::write_bouts;
//! use sumo_scrape::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client(&config)?;
//!
//!     // Work out which basho and day to fetch from today's date in Japan
//!     let schedule = resolve_schedule(None, None, today_in_japan(Utc::now()))?;
//!
//!     let bouts = fetch_bouts(&client, &config, &schedule).await?;
//!     for bout in &bouts {
//!         println!(
//!             "{} vs {}: {}",
//!             bout.east.name,
//!             bout.west.name,
//!             bout.kimarite.as_deref().unwrap_or("-")
//!         );
//!     }
//!
//!     write_bouts(Path::new("data"), &bouts).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{
    fetch_bouts, fetch_leaderboard, fetch_text_export_bouts, resolve_schedule,
};
pub use data_fetcher::models::{
    BoutRecord, CompetitorRef, Leaderboard, LeaderboardEntry, Side, TournamentSchedule,
};
pub use data_fetcher::parsers::{extract_bouts, extract_bouts_from_text, extract_leaderboard};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
