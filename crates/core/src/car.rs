//! The unified `Car` view-model served by every catalog endpoint.
//!
//! Both raw sources (subscription stock and second-hand stock) normalize into
//! this one shape. The synthetic `id` and the raw `db_id` are deliberately
//! distinct fields: `id` is the catalog-facing token, `db_id` always resolves
//! back to the row that produced the value.

use serde::{Deserialize, Serialize};

use crate::types::DbId;
use crate::vocab::{BodyType, FuelType};

/// Synthetic catalog id shared by EVERY subscription car.
///
/// This is a known identifier collision carried over from the original data
/// model: the detail page disambiguates via `db_id`, not `id`. Looking up a
/// car by this token resolves to the first subscription record in catalog
/// order. Do not "fix" the collision; it is pinned by tests.
pub const SUBSCRIPTION_CATALOG_ID: &str = "example";

/// Prefix for second-hand synthetic ids: `secondhand-{db_id}`.
pub const SECOND_HAND_ID_PREFIX: &str = "secondhand-";

/// Seat count placeholder; not sourced from any raw column.
pub const PLACEHOLDER_SEATS: i32 = 5;

/// Drive type placeholder; not sourced from any raw column.
pub const PLACEHOLDER_DRIVE_TYPE: &str = "FWD";

/// Make fallback when the make lookup join produced no name.
pub const DEFAULT_MAKE: &str = "DriveHub";

/// Which raw source a normalized car came from. The catalog is always
/// partitioned by this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarCategory {
    Subscription,
    Secondhand,
}

impl CarCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subscription => "subscription",
            Self::Secondhand => "secondhand",
        }
    }

    /// Parse a query-parameter value (`category=` or `carType=`).
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "subscription" => Some(Self::Subscription),
            "secondhand" => Some(Self::Secondhand),
            _ => None,
        }
    }
}

/// Three-tier subscription pricing, surfaced on detail lookups only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlans {
    pub three_month: i64,
    pub six_month: i64,
    pub nine_month: i64,
}

/// The catalog view-model every consumer depends on.
///
/// Built fresh per request; never cached, never mutated. The optional fields
/// at the bottom are populated only by the detail (lookup-by-db-id) path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Synthetic catalog id (see [`SUBSCRIPTION_CATALOG_ID`]).
    pub id: String,
    /// Raw database id; the real disambiguator between vehicles.
    pub db_id: DbId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: FuelType,
    pub body_type: BodyType,
    pub seats: i32,
    pub drive_type: String,
    pub weekly_price: i64,
    pub available: bool,
    pub status: String,
    pub is_great_value: bool,
    pub category: CarCategory,
    pub location: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_plans: Option<SubscriptionPlans>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
}

impl Car {
    /// Build the synthetic id for a second-hand car.
    pub fn second_hand_id(db_id: DbId) -> String {
        format!("{SECOND_HAND_ID_PREFIX}{db_id}")
    }
}
