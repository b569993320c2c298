use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::projections::p909_daily_sales_report::report_day::to_storage_timestamp;
use contracts::projections::p909_daily_sales_report::{DailySalesResponse, TestDataResponse};
use serde::Deserialize;

use super::error::ApiError;
use crate::projections::p909_daily_sales_report::service;
use crate::routes::AppState;

/// Number of rows created by one call of the test data endpoint
const TEST_DATA_ROWS: usize = 8;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /api/p909/sales?from=..&to=..
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<DailySalesResponse>, ApiError> {
    let interval = service::parse_bounds(params.from.as_deref(), params.to.as_deref())?;
    let response = service::list_for_interval(&state.db, &interval).await?;
    Ok(Json(response))
}

/// POST /api/p909/sales/testdata
pub async fn insert_test_data(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<TestDataResponse>), ApiError> {
    let (interval, inserted) = service::insert_test_data(&state.db, TEST_DATA_ROWS).await?;
    Ok((
        StatusCode::CREATED,
        Json(TestDataResponse {
            inserted,
            from: to_storage_timestamp(&interval.start),
            to: to_storage_timestamp(&interval.end),
        }),
    ))
}
