/// Utilities for date and time formatting
///
/// Sale timestamps travel as UTC; everything shown to the user is local time.
use chrono::{DateTime, Local, TimeZone};
use contracts::projections::p909_daily_sales_report::report_day::parse_timestamp;
use std::fmt::Display;

/// Hour and minute of a sale, e.g. "09:05 AM". Empty for unparsable input.
pub fn format_time_of_day(sale_date: &str) -> String {
    format_time_of_day_in(sale_date, &Local)
}

pub fn format_time_of_day_in<Tz: TimeZone>(sale_date: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    parse_timestamp(sale_date)
        .map(|instant| instant.with_timezone(tz).format("%I:%M %p").to_string())
        .unwrap_or_default()
}

/// Timestamp printed in the report footer, e.g. "10/16/2026, 02:30:05 PM"
pub fn format_generated_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%m/%d/%Y, %I:%M:%S %p").to_string()
}

/// Current local time for the report footer
pub fn generated_now() -> String {
    format_generated_at(&Local::now())
}
