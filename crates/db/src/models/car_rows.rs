//! Joined vehicle rows, the storage-boundary side of catalog normalization.
//!
//! The two sources stay a tagged pair here (subscription vs second-hand) and
//! are resolved into the unified `Car` shape by the catalog service. Lookup
//! names arrive pre-joined via LEFT JOIN, so each is `Option<String>`; the
//! normalizer owns every fallback.

use drivehub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A `subscription_cars` row joined against its lookup tables.
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionCarRow {
    pub id: DbId,
    pub registration_number: String,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub price_3_months: Option<i64>,
    pub price_6_months: Option<i64>,
    pub price_9_months: Option<i64>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub image_5: Option<String>,
    pub make_name: Option<String>,
    pub model_name: Option<String>,
    pub category_name: Option<String>,
    pub fuel_type_name: Option<String>,
    pub location_name: Option<String>,
    pub created_at: Timestamp,
}

impl SubscriptionCarRow {
    /// First populated image reference, in column order.
    pub fn first_image(&self) -> Option<&str> {
        [
            &self.image_1,
            &self.image_2,
            &self.image_3,
            &self.image_4,
            &self.image_5,
        ]
        .into_iter()
        .find_map(|img| img.as_deref())
    }
}

/// A `second_hand_cars` row joined against its lookup tables.
#[derive(Debug, Clone, FromRow)]
pub struct SecondHandCarRow {
    pub id: DbId,
    pub registration_number: String,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub image_5: Option<String>,
    pub make_name: Option<String>,
    pub model_name: Option<String>,
    pub category_name: Option<String>,
    pub fuel_type_name: Option<String>,
    pub location_name: Option<String>,
    pub created_at: Timestamp,
}

impl SecondHandCarRow {
    /// First populated image reference, in column order.
    pub fn first_image(&self) -> Option<&str> {
        [
            &self.image_1,
            &self.image_2,
            &self.image_3,
            &self.image_4,
            &self.image_5,
        ]
        .into_iter()
        .find_map(|img| img.as_deref())
    }
}
