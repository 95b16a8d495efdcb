pub mod car_rows;

pub use car_rows::{SecondHandCarRow, SubscriptionCarRow};
