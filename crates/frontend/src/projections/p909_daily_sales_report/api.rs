use contracts::projections::p909_daily_sales_report::{
    DailySalesQuery, DailySalesResponse, DayInterval, ErrorResponse, SaleRecordDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::build_url;

const SALES_PATH: &str = "/api/p909/sales";

/// Клиент API дневного отчёта по продажам
#[derive(Clone, Debug)]
pub struct SalesApi {
    base: String,
}

impl SalesApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// URL запроса всех продаж с `from <= sale_date < to`
    pub fn sales_url(&self, interval: &DayInterval) -> String {
        let DailySalesQuery { from, to } = interval.to_query();
        build_url(&self.base, SALES_PATH, &[("from", &from), ("to", &to)])
    }

    /// Получить продажи за один день отчёта, упорядоченные по времени
    pub async fn fetch_day(&self, interval: &DayInterval) -> Result<Vec<SaleRecordDto>, String> {
        let url = self.sales_url(interval);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| response.status_text());
            return Err(format!("HTTP {}: {}", status, message));
        }

        let data: DailySalesResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(data.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use contracts::projections::p909_daily_sales_report::ReportDay;

    #[test]
    fn test_sales_url_uses_day_bounds() {
        let manila = FixedOffset::east_opt(8 * 3600).unwrap();
        let interval = ReportDay::parse("2026-10-16")
            .unwrap()
            .interval_in(&manila);
        let api = SalesApi::new("http://localhost:3000");

        assert_eq!(
            api.sales_url(&interval),
            "http://localhost:3000/api/p909/sales?from=2026-10-15T16%3A00%3A00.000000Z&to=2026-10-16T16%3A00%3A00.000000Z"
        );
    }
}
