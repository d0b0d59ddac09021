//! Basho and day determination

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use tracing::{debug, info};

use crate::constants::tournament::{BASHO_MONTHS, JST_OFFSET_SECONDS, START_SUNDAY_ORDINAL};
use crate::data_fetcher::models::TournamentSchedule;
use crate::data_fetcher::models::schedule::parse_banzuke_code;
use crate::error::AppError;

/// Returns the current civil date in Japan Standard Time.
pub fn today_in_japan(now_utc: DateTime<Utc>) -> NaiveDate {
    // JST has no DST, a fixed shift is exact
    (now_utc + TimeDelta::seconds(i64::from(JST_OFFSET_SECONDS))).date_naive()
}

/// Day 1 of the basho held in `year`/`month`: the second Sunday of the month.
pub fn tournament_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, START_SUNDAY_ORDINAL)
}

/// Day number of `today` within the basho starting on `start`, unclamped.
pub fn day_of_tournament(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days() + 1
}

/// Picks the basho and day for `today`.
///
/// The basho is the latest tournament month not after `today`'s month. A
/// January date before January's day 1 belongs to the previous November.
/// Days before day 1 resolve to day 1 and days after the basho to day 15.
pub fn resolve_schedule_for_date(today: NaiveDate) -> Result<TournamentSchedule, AppError> {
    let january_start = start_or_err(today.year(), 1)?;

    let (year, month) = if today < january_start {
        (today.year() - 1, 11)
    } else {
        let month = BASHO_MONTHS
            .iter()
            .copied()
            .filter(|m| *m <= today.month())
            .max()
            .unwrap_or(1);
        (today.year(), month)
    };

    let start = start_or_err(year, month)?;
    let schedule = TournamentSchedule::new(year, month, day_of_tournament(start, today))?;
    debug!("Resolved {today} to {schedule} (day 1 on {start})");
    Ok(schedule)
}

/// Combines explicit values with the date-derived schedule.
///
/// `banzuke` and `day` are already merged from arguments and environment.
/// An explicit banzuke without a day gets the day `today` falls on in that
/// basho; an explicit day without a banzuke uses the date-derived basho.
pub fn resolve_schedule(
    banzuke: Option<&str>,
    day: Option<&str>,
    today: NaiveDate,
) -> Result<TournamentSchedule, AppError> {
    let explicit_day = day.map(parse_day).transpose()?;

    let schedule = match banzuke {
        Some(code) => {
            let (year, month) = parse_banzuke_code(code)?;
            let day = match explicit_day {
                Some(day) => day,
                None => day_of_tournament(start_or_err(year, month)?, today),
            };
            TournamentSchedule::new(year, month, day)?
        }
        None => {
            let computed = resolve_schedule_for_date(today)?;
            match explicit_day {
                Some(day) => computed.with_day(day),
                None => computed,
            }
        }
    };

    info!("Using banzuke {} day {}", schedule.code(), schedule.day());
    Ok(schedule)
}

/// Coerces a day value to an integer. Clamping happens in `TournamentSchedule`.
pub fn parse_day(value: &str) -> Result<i64, AppError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_day(value))
}

fn start_or_err(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    tournament_start(year, month).ok_or_else(|| {
        AppError::invalid_banzuke(
            format!("{year:04}{month:02}"),
            "no calendar date for the second Sunday",
        )
    })
}
