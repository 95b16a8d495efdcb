//! Domain logic for the DriveHub vehicle catalog.
//!
//! Pure types and rules shared by the database and API crates: the unified
//! [`car::Car`] view-model, closed display vocabularies, the two pricing
//! policies, enquiry form validation and sanitization, and the fixed-window
//! rate limiter. Nothing in this crate touches the network or the database.

pub mod car;
pub mod enquiry;
pub mod error;
pub mod pricing;
pub mod rate_limit;
pub mod types;
pub mod vocab;
