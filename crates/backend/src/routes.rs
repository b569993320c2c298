use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// Shared handler state; the connection is created once in `main` and cloned per request
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Configuration of all application routes
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // P909 DAILY SALES REPORT
        // ========================================
        .route(
            "/api/p909/sales",
            get(handlers::p909_daily_sales_report::list),
        )
        .route(
            "/api/p909/sales/testdata",
            post(handlers::p909_daily_sales_report::insert_test_data),
        )
        .with_state(state)
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::projections::p909_daily_sales_report::{
        DailySalesResponse, ErrorResponse, TestDataResponse,
    };
    use tower::ServiceExt;

    async fn app() -> Router {
        configure_routes(AppState {
            db: connect_in_memory().await,
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app().await, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_list_requires_bounds() {
        let (status, body) = send(app().await, get_request("/api/p909/sales")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("from"));
    }

    #[tokio::test]
    async fn test_list_rejects_empty_range() {
        let uri = "/api/p909/sales?from=2026-10-16T00:00:00Z&to=2026-10-15T00:00:00Z";
        let (status, _) = send(app().await, get_request(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_seed_then_list() {
        let app = app().await;

        let seed = Request::builder()
            .method(Method::POST)
            .uri("/api/p909/sales/testdata")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app.clone(), seed).await;
        assert_eq!(status, StatusCode::CREATED);
        let seeded: TestDataResponse = serde_json::from_slice(&body).unwrap();
        assert!(seeded.inserted > 0);

        // `+` in offsets must survive the query string, hence Z-suffixed bounds
        let uri = format!("/api/p909/sales?from={}&to={}", seeded.from, seeded.to);
        let (status, body) = send(app, get_request(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        let listed: DailySalesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed.total_count, seeded.inserted);
        assert_eq!(listed.items.len(), seeded.inserted);
    }
}
