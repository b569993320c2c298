use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::report_day::parse_timestamp;
use crate::shared::lenient::{lenient_f64, lenient_i64, optional_string, string_or_empty};

/// Shown in place of an empty optional cell
pub const PLACEHOLDER: &str = "—";

/// Order source of rows that do not name one
pub const DEFAULT_ORDER_SOURCE: &str = "web";

/// Number of characters of the order id shown in the report
pub const ORDER_ID_DISPLAY_LEN: usize = 8;

/// DTO для строки продажи (P909)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecordDto {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    /// Sale instant, RFC 3339
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sale_date: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub order_id: Option<String>,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub product_name: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub variant: Option<String>,

    // Sums
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub subtotal: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub layout_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_amount: Option<f64>,

    // Info fields
    #[serde(default, deserialize_with = "optional_string")]
    pub order_source: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub employee_email: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl SaleRecordDto {
    /// Parsed sale instant; `None` if the timestamp is missing or malformed
    pub fn sale_instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.sale_date)
    }

    /// First 8 characters of the order id, or the placeholder
    pub fn order_id_short(&self) -> String {
        match non_empty(&self.order_id) {
            Some(order_id) => order_id.chars().take(ORDER_ID_DISPLAY_LEN).collect(),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn variant_display(&self) -> &str {
        non_empty(&self.variant).unwrap_or(PLACEHOLDER)
    }

    pub fn order_source_display(&self) -> &str {
        non_empty(&self.order_source).unwrap_or(DEFAULT_ORDER_SOURCE)
    }

    /// Employee name, else the local part of the employee email, else the placeholder
    pub fn employee_display(&self) -> &str {
        if let Some(name) = non_empty(&self.employee_name) {
            return name;
        }
        non_empty(&self.employee_email)
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    /// Quantity as stored; blank when it is missing
    pub fn quantity_display(&self) -> String {
        self.quantity.map(|q| q.to_string()).unwrap_or_default()
    }
}

/// Запрос списка продаж: `from <= sale_date < to`, обе границы в RFC 3339
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalesQuery {
    pub from: String,
    pub to: String,
}

/// Ответ со списком продаж за день, по возрастанию `sale_date`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySalesResponse {
    pub items: Vec<SaleRecordDto>,
    pub total_count: usize,
}

/// Error body returned by the backend for non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Result of the test data seeding endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestDataResponse {
    pub inserted: usize,
    pub from: String,
    pub to: String,
}
