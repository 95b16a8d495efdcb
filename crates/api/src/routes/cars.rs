//! Route definitions for the catalog resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Routes mounted at `/cars`. The static `/cars/db` segment is registered
/// alongside the `{id}` capture; axum prefers the literal match, so a
/// synthetic id can never shadow a raw-id lookup.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(cars::list_cars))
        .route("/cars/db/{db_id}", get(cars::get_car_by_db_id))
        .route("/cars/{id}", get(cars::get_car_by_id))
        .route("/cars/{id}/features", get(cars::list_features))
        .route(
            "/cars/{id}/subscription-plans",
            get(cars::list_subscription_plans),
        )
}
