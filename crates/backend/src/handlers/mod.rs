pub mod error;
pub mod p909_daily_sales_report;
