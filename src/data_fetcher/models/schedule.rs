use crate::constants::tournament::{BASHO_MONTHS, TOURNAMENT_DAYS};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A basho and the day of it to fetch.
///
/// Construction goes through [`TournamentSchedule::new`] or
/// [`TournamentSchedule::from_code`], which keep the month inside the six
/// tournament months and the day inside `1..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentSchedule {
    year: i32,
    month: u32,
    day: u32,
}

impl TournamentSchedule {
    /// Builds a schedule, clamping `day` into the tournament window.
    pub fn new(year: i32, month: u32, day: i64) -> Result<Self, AppError> {
        if !BASHO_MONTHS.contains(&month) {
            return Err(AppError::invalid_banzuke(
                format!("{year:04}{month:02}"),
                format!("month {month} is not a basho month"),
            ));
        }
        Ok(Self {
            year,
            month,
            day: clamp_day(day),
        })
    }

    /// Parses a `YYYYMM` banzuke code and pairs it with `day`.
    pub fn from_code(code: &str, day: i64) -> Result<Self, AppError> {
        let (year, month) = parse_banzuke_code(code)?;
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Banzuke code in `YYYYMM` form, as used by the results site.
    pub fn code(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    /// Same basho, different day (clamped).
    pub fn with_day(self, day: i64) -> Self {
        Self {
            day: clamp_day(day),
            ..self
        }
    }
}

impl fmt::Display for TournamentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.code(), self.day)
    }
}

/// Clamps a day number into `1..=TOURNAMENT_DAYS`.
pub fn clamp_day(day: i64) -> u32 {
    day.clamp(1, i64::from(TOURNAMENT_DAYS)) as u32
}

/// Splits a `YYYYMM` code into year and month, rejecting anything else.
pub fn parse_banzuke_code(code: &str) -> Result<(i32, u32), AppError> {
    let code = code.trim();
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_banzuke(code, "expected six digits (YYYYMM)"));
    }

    let year = code[..4]
        .parse::<i32>()
        .map_err(|e| AppError::invalid_banzuke(code, e.to_string()))?;
    let month = code[4..]
        .parse::<u32>()
        .map_err(|e| AppError::invalid_banzuke(code, e.to_string()))?;

    if !BASHO_MONTHS.contains(&month) {
        return Err(AppError::invalid_banzuke(
            code,
            format!("month {month} is not a basho month"),
        ));
    }

    Ok((year, month))
}
