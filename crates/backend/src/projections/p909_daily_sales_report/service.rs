use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use contracts::projections::p909_daily_sales_report::report_day::{
    parse_timestamp, to_storage_timestamp,
};
use contracts::projections::p909_daily_sales_report::{
    DailySalesQuery, DailySalesResponse, DayInterval, ReportDay,
};
use rand::Rng;
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::repository::{self, Model};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    #[error("query parameter '{0}' is required")]
    Missing(&'static str),
    #[error("query parameter '{field}' is not an RFC 3339 timestamp: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("'from' must be earlier than 'to'")]
    EmptyRange,
}

/// Проверяет границы из запроса и строит из них интервал
pub fn parse_bounds(from: Option<&str>, to: Option<&str>) -> Result<DayInterval, BoundsError> {
    let start = parse_bound("from", from)?;
    let end = parse_bound("to", to)?;
    if start >= end {
        return Err(BoundsError::EmptyRange);
    }
    Ok(DayInterval { start, end })
}

fn parse_bound(field: &'static str, value: Option<&str>) -> Result<DateTime<Utc>, BoundsError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(BoundsError::Missing(field))?;
    parse_timestamp(value).ok_or_else(|| BoundsError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}

/// Все продажи внутри интервала, по возрастанию времени
pub async fn list_for_interval(
    db: &DatabaseConnection,
    interval: &DayInterval,
) -> Result<DailySalesResponse> {
    let DailySalesQuery { from, to } = interval.to_query();
    let rows = repository::list_in_interval(db, &from, &to).await?;
    tracing::info!("P909: {} sales between {} and {}", rows.len(), from, to);

    let items: Vec<_> = rows.into_iter().map(Model::into_dto).collect();
    Ok(DailySalesResponse {
        total_count: items.len(),
        items,
    })
}

const SAMPLE_CUSTOMERS: &[&str] = &[
    "Maria Santos",
    "Juan dela Cruz",
    "Ana Reyes",
    "Kusina ni Lola",
    "CDO Runners Club",
];

/// (товар, вариант, цена за единицу)
const SAMPLE_PRODUCTS: &[(&str, Option<&str>, f64)] = &[
    ("Tarpaulin 3x6", Some("Matte"), 270.0),
    ("Tarpaulin 2x4", None, 120.0),
    ("Calling Cards (100 pcs)", Some("Glossy"), 350.0),
    ("Vinyl Stickers", Some("Die-cut"), 45.0),
    ("Sintra Board Signage", None, 850.0),
    ("T-shirt Print", Some("Large"), 220.0),
];

const SAMPLE_SOURCES: &[&str] = &["web", "walk-in", "messenger"];

const SAMPLE_EMPLOYEES: &[(Option<&str>, Option<&str>)] = &[
    (Some("Rhea Balbuena"), Some("rhea@nvaprinting.ph")),
    (None, Some("jomar@nvaprinting.ph")),
    (None, None),
];

/// Случайные, но правдоподобные продажи внутри интервала
pub fn build_sample_rows<R: Rng>(
    interval: &DayInterval,
    count: usize,
    rng: &mut R,
) -> Vec<Model> {
    let span_seconds = (interval.end - interval.start).num_seconds().max(1);

    (0..count)
        .map(|_| {
            let sale_date = interval.start + Duration::seconds(rng.gen_range(0..span_seconds));
            let (product, variant, unit_price) =
                SAMPLE_PRODUCTS[rng.gen_range(0..SAMPLE_PRODUCTS.len())];
            let (employee_name, employee_email) =
                SAMPLE_EMPLOYEES[rng.gen_range(0..SAMPLE_EMPLOYEES.len())];
            let quantity: i64 = rng.gen_range(1..=5);
            let subtotal = unit_price * quantity as f64;
            let layout_fee = if rng.gen_bool(0.3) { 50.0 } else { 0.0 };

            Model {
                id: uuid::Uuid::new_v4().to_string(),
                sale_date: to_storage_timestamp(&sale_date),
                order_id: rng
                    .gen_bool(0.7)
                    .then(|| uuid::Uuid::new_v4().to_string()),
                customer_name: SAMPLE_CUSTOMERS[rng.gen_range(0..SAMPLE_CUSTOMERS.len())]
                    .to_string(),
                product_name: product.to_string(),
                variant: variant.map(str::to_string),
                quantity: Some(quantity),
                unit_price: Some(unit_price),
                subtotal: Some(subtotal),
                layout_fee: Some(layout_fee),
                total_amount: Some(subtotal + layout_fee),
                order_source: SAMPLE_SOURCES[rng.gen_range(0..SAMPLE_SOURCES.len())].to_string(),
                employee_name: employee_name.map(str::to_string),
                employee_email: employee_email.map(str::to_string),
            }
        })
        .collect()
}

/// Вставляет тестовые продажи за текущий день сервера.
/// Возвращает использованный интервал и количество вставленных строк.
pub async fn insert_test_data(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(DayInterval, usize)> {
    let interval = ReportDay::today().local_interval();
    let rows = build_sample_rows(&interval, count, &mut rand::thread_rng());

    for row in &rows {
        repository::insert_entry(db, row).await?;
    }
    tracing::info!("P909: inserted {} test sales", rows.len());

    Ok((interval, rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::projections::p909_daily_sales_report::SalesTotals;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn interval(from: &str, to: &str) -> DayInterval {
        parse_bounds(Some(from), Some(to)).unwrap()
    }

    #[test]
    fn test_parse_bounds() {
        let parsed = interval("2026-10-15T16:00:00Z", "2026-10-16T16:00:00Z");
        assert_eq!(
            to_storage_timestamp(&parsed.start),
            "2026-10-15T16:00:00.000000Z"
        );

        assert_eq!(
            parse_bounds(None, Some("2026-10-16T16:00:00Z")),
            Err(BoundsError::Missing("from"))
        );
        assert_eq!(
            parse_bounds(Some("2026-10-15T16:00:00Z"), Some("  ")),
            Err(BoundsError::Missing("to"))
        );
        assert!(matches!(
            parse_bounds(Some("today"), Some("2026-10-16T16:00:00Z")),
            Err(BoundsError::InvalidTimestamp { field: "from", .. })
        ));
        assert_eq!(
            parse_bounds(Some("2026-10-16T16:00:00Z"), Some("2026-10-16T16:00:00Z")),
            Err(BoundsError::EmptyRange)
        );
    }

    #[test]
    fn test_offset_bounds_are_normalized() {
        let parsed = interval("2026-10-16T00:00:00+08:00", "2026-10-17T00:00:00+08:00");
        assert_eq!(parsed.to_query().from, "2026-10-15T16:00:00.000000Z");
        assert_eq!(parsed.to_query().to, "2026-10-16T16:00:00.000000Z");
    }

    #[test]
    fn test_sample_rows_stay_inside_interval() {
        let day = interval("2026-10-15T16:00:00Z", "2026-10-16T16:00:00Z");
        let mut rng = StdRng::seed_from_u64(7);
        let rows = build_sample_rows(&day, 50, &mut rng);

        assert_eq!(rows.len(), 50);
        for row in &rows {
            let ts = parse_timestamp(&row.sale_date).unwrap();
            assert!(day.contains(&ts), "{} outside of day", row.sale_date);
            assert_eq!(
                row.total_amount,
                Some(row.subtotal.unwrap() + row.layout_fee.unwrap())
            );
        }
    }

    #[tokio::test]
    async fn test_list_for_interval_excludes_adjacent_days() {
        let db = connect_in_memory().await;
        let mut rng = StdRng::seed_from_u64(42);

        let yesterday = interval("2026-10-14T16:00:00Z", "2026-10-15T16:00:00Z");
        let today = interval("2026-10-15T16:00:00Z", "2026-10-16T16:00:00Z");
        let tomorrow = interval("2026-10-16T16:00:00Z", "2026-10-17T16:00:00Z");

        for day in [&yesterday, &today, &tomorrow] {
            for row in build_sample_rows(day, 5, &mut rng) {
                repository::insert_entry(&db, &row).await.unwrap();
            }
        }

        let response = list_for_interval(&db, &today).await.unwrap();
        assert_eq!(response.total_count, 5);
        assert_eq!(response.items.len(), 5);

        let instants: Vec<_> = response
            .items
            .iter()
            .map(|r| r.sale_instant().unwrap())
            .collect();
        assert!(instants.iter().all(|ts| today.contains(ts)));
        assert!(instants.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_repeated_query_is_idempotent() {
        let db = connect_in_memory().await;
        let today = interval("2026-10-15T16:00:00Z", "2026-10-16T16:00:00Z");
        let mut rng = StdRng::seed_from_u64(1);
        for row in build_sample_rows(&today, 8, &mut rng) {
            repository::insert_entry(&db, &row).await.unwrap();
        }

        let first = list_for_interval(&db, &today).await.unwrap();
        let second = list_for_interval(&db, &today).await.unwrap();
        assert_eq!(first.items, second.items);
        assert_eq!(
            SalesTotals::from_rows(&first.items),
            SalesTotals::from_rows(&second.items)
        );
    }

    #[tokio::test]
    async fn test_insert_test_data() {
        let db = connect_in_memory().await;
        let (day, inserted) = insert_test_data(&db, 6).await.unwrap();
        assert_eq!(inserted, 6);

        let response = list_for_interval(&db, &day).await.unwrap();
        assert_eq!(response.total_count, 6);
    }
}
