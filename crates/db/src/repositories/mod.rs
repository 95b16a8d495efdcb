//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod second_hand_car_repo;
pub mod subscription_car_repo;

pub use second_hand_car_repo::SecondHandCarRepo;
pub use subscription_car_repo::SubscriptionCarRepo;
