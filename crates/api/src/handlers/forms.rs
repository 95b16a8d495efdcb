//! Handlers for the form-intake endpoints.
//!
//! Each endpoint is rate-limited per client IP, validates against its fixed
//! schema, sanitizes every free-text field, and logs the submission. Nothing
//! is persisted; intake is deliberately an external-collaborator boundary.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use drivehub_core::enquiry::{field_errors, CarEnquiryForm, ContactForm, EnquiryForm};

use crate::error::{AppError, AppResult};
use crate::middleware::client_ip::ClientIp;
use crate::response::SubmissionResponse;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit_contact(
    ip: ClientIp,
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<SubmissionResponse>> {
    state.rate_limiter.try_acquire(&ip.0)?;

    form.validate()
        .map_err(|errs| AppError::Validation(field_errors(&errs)))?;

    let clean = form.sanitized();
    tracing::info!(
        client_ip = %ip.0,
        name = %clean.name,
        email = %clean.email,
        subject = %clean.subject,
        "contact form received"
    );

    Ok(Json(SubmissionResponse::accepted(
        "Thanks for getting in touch. We'll get back to you shortly.",
    )))
}

/// POST /api/enquiry
pub async fn submit_enquiry(
    ip: ClientIp,
    State(state): State<AppState>,
    Json(form): Json<EnquiryForm>,
) -> AppResult<Json<SubmissionResponse>> {
    state.rate_limiter.try_acquire(&ip.0)?;

    form.validate()
        .map_err(|errs| AppError::Validation(field_errors(&errs)))?;

    let clean = form.sanitized();
    tracing::info!(
        client_ip = %ip.0,
        name = %clean.name,
        email = %clean.email,
        enquiry_type = %clean.enquiry_type,
        "enquiry form received"
    );

    Ok(Json(SubmissionResponse::accepted(
        "Thanks for your enquiry. Our team will be in touch.",
    )))
}

/// POST /api/car-enquiry
pub async fn submit_car_enquiry(
    ip: ClientIp,
    State(state): State<AppState>,
    Json(form): Json<CarEnquiryForm>,
) -> AppResult<Json<SubmissionResponse>> {
    state.rate_limiter.try_acquire(&ip.0)?;

    form.validate()
        .map_err(|errs| AppError::Validation(field_errors(&errs)))?;

    let clean = form.sanitized();
    tracing::info!(
        client_ip = %ip.0,
        name = %clean.name,
        email = %clean.email,
        car_id = %clean.car_id,
        preferred_contact = %clean.preferred_contact,
        "car enquiry received"
    );

    Ok(Json(SubmissionResponse::accepted(
        "Thanks for your interest. We'll be in touch about this car.",
    )))
}
