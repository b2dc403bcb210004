// ABOUTME: ISO-8601 week identifiers for streak bookkeeping
// ABOUTME: Wraps chrono's week-numbering; canonical "YYYY-Www" form at the persistence boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! ISO week identifiers.
//!
//! Streak evaluation runs on ISO-8601 week numbering: weeks start Monday, and
//! week 1 of a year is the week containing that year's first Thursday. The
//! week-numbering year deviates from the calendar year around January 1, so a
//! [`WeekId`] carries the ISO year — identifiers compare by equality only,
//! since lexical ordering across a year boundary is meaningless (week 1 of
//! one year chronologically follows week 52 or 53 of the previous one).

use crate::errors::ProgressionError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Identifier of one ISO-8601 week, rendered as e.g. `2026-W09`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekId {
    year: i32,
    week: u32,
}

impl WeekId {
    /// Identifier of the ISO week containing `date`
    ///
    /// The returned year is the ISO week-numbering year, which near January 1
    /// or December 31 may differ from the date's calendar year.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// ISO week-numbering year
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Week number within the ISO year, 1 through 53
    #[must_use]
    pub const fn week(self) -> u32 {
        self.week
    }

    /// Identifier of the week immediately before this one
    ///
    /// Stepping back from week 1 lands in the last week of the previous ISO
    /// year, which resolves to 52 or 53 as that year requires.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::from_date(self.monday() - Duration::days(7))
    }

    /// Monday of the identified week
    ///
    /// Identifiers built by this module always denote a real week; a stored
    /// value that stopped doing so clamps to week 1 instead of panicking.
    fn monday(self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon).unwrap_or_else(|| {
            warn!(
                year = self.year,
                week = self.week,
                "week id does not denote a calendar week, clamping to week 1"
            );
            NaiveDate::from_isoywd_opt(self.year, 1, Weekday::Mon).unwrap_or_default()
        })
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = ProgressionError;

    /// Parse the canonical `YYYY-Www` form
    ///
    /// Accepts exactly what [`fmt::Display`] produces: four year digits, the
    /// literal `-W`, two week digits, and a `(year, week)` pair that denotes
    /// a real ISO week of that year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_part, week_part) = s
            .split_once("-W")
            .ok_or_else(|| ProgressionError::invalid_week_id(s))?;
        if year_part.len() != 4
            || week_part.len() != 2
            || !year_part.bytes().all(|b| b.is_ascii_digit())
            || !week_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ProgressionError::invalid_week_id(s));
        }
        let year: i32 = year_part
            .parse()
            .map_err(|_| ProgressionError::invalid_week_id(s))?;
        let week: u32 = week_part
            .parse()
            .map_err(|_| ProgressionError::invalid_week_id(s))?;
        if NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).is_none() {
            return Err(ProgressionError::invalid_week_id(s));
        }
        Ok(Self { year, week })
    }
}

impl TryFrom<String> for WeekId {
    type Error = ProgressionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekId> for String {
    fn from(id: WeekId) -> Self {
        id.to_string()
    }
}
