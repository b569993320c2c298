//! P909 Daily Sales Report: sales rows of a single calendar day and their totals.

pub mod dto;
pub mod report_day;
pub mod totals;

pub use dto::{DailySalesQuery, DailySalesResponse, ErrorResponse, SaleRecordDto, TestDataResponse};
pub use report_day::{DayInterval, ReportDay, ReportDayError};
pub use totals::SalesTotals;
