use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use drivehub_api::config::ServerConfig;
use drivehub_api::router::build_app_router;
use drivehub_api::state::AppState;
use drivehub_core::rate_limit::FixedWindowLimiter;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_base_url: "https://media.example.com/cars".to_string(),
        rate_limit_max_requests: 5,
        rate_limit_window: Duration::from_secs(900),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the router construction in `main.rs` so
/// integration tests exercise the same middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let rate_limiter = Arc::new(FixedWindowLimiter::new(
        config.rate_limit_max_requests,
        config.rate_limit_window,
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        rate_limiter,
    };

    build_app_router(state, &config)
}

/// Fire a GET request at the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Fire a JSON POST at the app and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_json_from(app, uri, body, "203.0.113.1").await
}

/// Fire a JSON POST with an explicit `x-forwarded-for` client address.
pub async fn post_json_from(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    client_ip: &str,
) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .header("x-forwarded-for", client_ip)
            .body(Body::from(body.to_string()))
            .expect("valid request"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Insert a row into a lookup table, returning its id.
#[allow(dead_code)]
pub async fn seed_lookup(pool: &PgPool, table: &str, name: &str) -> i64 {
    let query = format!("INSERT INTO {table} (name) VALUES ($1) RETURNING id");
    sqlx::query_scalar(&query)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert a minimal available subscription car, returning its raw id.
#[allow(dead_code)]
pub async fn seed_subscription_car(pool: &PgPool, reg: &str, p3: i64, p6: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO subscription_cars
            (registration_number, year, status, price_3_months, price_6_months, price_9_months)
         VALUES ($1, 2021, 'available', $2, $3, $4) RETURNING id",
    )
    .bind(reg)
    .bind(p3)
    .bind(p6)
    .bind(p3 * 3)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a minimal available second-hand car, returning its raw id.
#[allow(dead_code)]
pub async fn seed_second_hand_car(pool: &PgPool, reg: &str, price: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO second_hand_cars (registration_number, year, status, price)
         VALUES ($1, 2019, 'available', $2) RETURNING id",
    )
    .bind(reg)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}
