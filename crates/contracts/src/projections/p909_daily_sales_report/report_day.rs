use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeZone, Utc,
};
use std::fmt;

use super::dto::DailySalesQuery;

/// Date format of `<input type="date">` values and of the report day in URLs
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar day a report is built for. Carries no time or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportDay(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDayError {
    Empty,
    Invalid(String),
}

impl fmt::Display for ReportDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDayError::Empty => write!(f, "date is empty"),
            ReportDayError::Invalid(value) => write!(f, "'{}' is not a valid YYYY-MM-DD date", value),
        }
    }
}

impl std::error::Error for ReportDayError {}

impl ReportDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Current day in the local timezone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a `YYYY-MM-DD` value as produced by a date input
    pub fn parse(value: &str) -> Result<Self, ReportDayError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ReportDayError::Empty);
        }
        NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ReportDayError::Invalid(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Following calendar day (saturates at the last representable date)
    pub fn next(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }

    /// `YYYY-MM-DD`, the value a date input expects
    pub fn as_input_value(&self) -> String {
        self.0.format(INPUT_DATE_FORMAT).to_string()
    }

    /// Long form for report headers, e.g. "October 16, 2026"
    pub fn display_long(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }

    /// `[midnight(day), midnight(day + 1))` in the given timezone, as UTC instants
    pub fn interval_in<Tz: TimeZone>(&self, tz: &Tz) -> DayInterval {
        DayInterval {
            start: start_of_day(tz, self.0),
            end: start_of_day(tz, self.next().0),
        }
    }

    /// Day interval bounded by the browser's (or server's) local midnights
    pub fn local_interval(&self) -> DayInterval {
        self.interval_in(&Local)
    }
}

impl fmt::Display for ReportDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_input_value())
    }
}

/// First instant of `date` in `tz`.
///
/// When midnight falls into a DST gap the first valid local minute after it is
/// used; when it is ambiguous the earlier instant wins.
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => first_valid_after_gap(tz, midnight),
    }
}

fn first_valid_after_gap<Tz: TimeZone>(tz: &Tz, midnight: NaiveDateTime) -> DateTime<Utc> {
    (1..=24 * 60)
        .find_map(|minutes| {
            tz.from_local_datetime(&(midnight + Duration::minutes(minutes)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Half-open UTC interval `[start, end)` covering one report day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayInterval {
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant < self.end
    }

    /// Query parameters for the sales endpoint
    pub fn to_query(&self) -> DailySalesQuery {
        DailySalesQuery {
            from: to_storage_timestamp(&self.start),
            to: to_storage_timestamp(&self.end),
        }
    }
}

/// Canonical text form of a sale timestamp: UTC, fixed microsecond precision.
///
/// Every value has the same width, so lexical order equals chronological order.
pub fn to_storage_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses RFC 3339 (`2026-10-16T08:30:00Z`) and Postgres style
/// (`2026-10-16 08:30:00+00`) timestamps
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z"))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
