use serde::{Deserialize, Serialize};

use super::dto::SaleRecordDto;

/// Sums over the rows of a report day. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub total_qty: i64,
    pub subtotal: f64,
    pub layout: f64,
    pub grand: f64,
}

impl SalesTotals {
    /// Elementwise sums; missing or non-numeric fields count as zero
    pub fn from_rows(rows: &[SaleRecordDto]) -> Self {
        Self {
            total_qty: rows
                .iter()
                .fold(0i64, |acc, r| acc.saturating_add(r.quantity.unwrap_or(0))),
            subtotal: rows.iter().map(|r| r.subtotal.unwrap_or(0.0)).sum(),
            layout: rows.iter().map(|r| r.layout_fee.unwrap_or(0.0)).sum(),
            grand: rows.iter().map(|r| r.total_amount.unwrap_or(0.0)).sum(),
        }
    }
}
