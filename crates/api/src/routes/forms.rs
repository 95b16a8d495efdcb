//! Route definitions for the form-intake endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(forms::submit_contact))
        .route("/enquiry", post(forms::submit_enquiry))
        .route("/car-enquiry", post(forms::submit_car_enquiry))
}
