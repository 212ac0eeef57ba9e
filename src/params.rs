//! The request parameter model.
//!
//! A [`Params`] value is assembled once by the configuration layer,
//! validated, and never mutated afterwards; every plan a repository
//! produces is a pure function of it.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;
use crate::region::Region;

/// Which NOMADS file server a request is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RepositoryType {
    #[serde(rename = "NCEP")]
    Ncep,
    #[serde(rename = "NCDC")]
    Ncdc,
}

/// Horizontal grid spacing of the GFS output.
///
/// The token appears verbatim in both the endpoint URL and the remote
/// file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Resolution {
    /// 1.0 degree of longitudinal resolution
    #[serde(rename = "1p00")]
    OneDegree,
    /// 0.5 degrees
    #[serde(rename = "0p50")]
    HalfDegree,
    /// 0.25 degrees
    #[serde(rename = "0p25")]
    QuarterDegree,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::OneDegree => "1p00",
            Resolution::HalfDegree => "0p50",
            Resolution::QuarterDegree => "0p25",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model run hour a forecast originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    T00,
    T06,
    T12,
    T18,
}

impl Cycle {
    /// The four daily GFS runs, in run-hour order.
    pub const ALL: [Cycle; 4] = [Cycle::T00, Cycle::T06, Cycle::T12, Cycle::T18];

    /// Two-digit run hour as it appears in file names and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Cycle::T00 => "00",
            Cycle::T06 => "06",
            Cycle::T12 => "12",
            Cycle::T18 => "18",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested forecast cycles: one specific run hour, or all four.
///
/// `All` only ever reaches a repository expanded into discrete [`Cycle`]s;
/// it has no query-string rendering of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "00")]
    T00,
    #[serde(rename = "06")]
    T06,
    #[serde(rename = "12")]
    T12,
    #[serde(rename = "18")]
    T18,
    #[serde(rename = "ALL")]
    All,
}

impl TimeFrame {
    /// The discrete cycles this frame stands for, in run-hour order.
    pub fn cycles(self) -> &'static [Cycle] {
        match self {
            TimeFrame::T00 => &[Cycle::T00],
            TimeFrame::T06 => &[Cycle::T06],
            TimeFrame::T12 => &[Cycle::T12],
            TimeFrame::T18 => &[Cycle::T18],
            TimeFrame::All => &Cycle::ALL,
        }
    }
}

/// Inclusive calendar span to retrieve, at day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parses two `YYYY-MM-DD` strings into a range.
    pub fn from_strings(start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;
        Ok(Self { start, end })
    }

    /// Number of days to enumerate.
    ///
    /// A degenerate same-day range still counts as one day. A reversed
    /// range is rejected by the configuration layer before this is used.
    pub fn number_of_days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }

    /// The days of the range, ascending from `start`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.number_of_days() as usize)
    }
}

/// Vertical-level sub-selection entry.
///
/// Populating these is a declared extension point; the current grammar
/// only renders the whole-category wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub uri_key: String,
    pub is_included: bool,
}

/// Climate-variable sub-selection entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateVariable {
    pub uri_key: String,
    pub is_included: bool,
}

/// Complete, validated request configuration for one retrieval run.
#[derive(Debug, Clone)]
pub struct Params {
    pub repository_type: RepositoryType,
    pub resolution: Resolution,
    pub date_range: DateRange,
    pub time_frame: TimeFrame,
    pub is_additional_precipitation_included: bool,
    pub region: Region,
    /// Empty means the `all_lev=on` wildcard.
    pub levels: Vec<Level>,
    /// Empty means the `all_var=on` wildcard.
    pub climate_variables: Vec<ClimateVariable>,
}
