pub mod cars;
pub mod forms;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                          service + database health
///
/// /cars                            list with optional filters and sort
/// /cars/db/{dbId}                  lookup by raw id (+ optional carType hint)
/// /cars/{id}                       lookup by synthetic catalog id
/// /cars/{id}/features              static sample data
/// /cars/{id}/subscription-plans    static sample data
///
/// /contact                         contact form intake
/// /enquiry                         general enquiry intake
/// /car-enquiry                     car-specific enquiry intake
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(cars::router())
        .merge(forms::router())
}
