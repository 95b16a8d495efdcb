//! Repository for the `subscription_cars` table.

use drivehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::SubscriptionCarRow;

/// Column list shared across queries to avoid repetition. Lookup names are
/// LEFT JOINed so vehicles with missing references still surface.
const COLUMNS: &str = "c.id, c.registration_number, c.year, c.mileage, c.status, \
    c.description, c.price_3_months, c.price_6_months, c.price_9_months, \
    c.image_1, c.image_2, c.image_3, c.image_4, c.image_5, \
    mk.name AS make_name, md.name AS model_name, ct.name AS category_name, \
    ft.name AS fuel_type_name, lc.name AS location_name, c.created_at";

const JOINS: &str = "FROM subscription_cars c
    LEFT JOIN makes mk ON mk.id = c.make_id
    LEFT JOIN car_models md ON md.id = c.model_id
    LEFT JOIN categories ct ON ct.id = c.category_id
    LEFT JOIN fuel_types ft ON ft.id = c.fuel_type_id
    LEFT JOIN locations lc ON lc.id = c.location_id";

/// Read-side queries for subscription stock.
pub struct SubscriptionCarRepo;

impl SubscriptionCarRepo {
    /// List every subscription car with its lookup names, in insertion order.
    /// The catalog's concatenation contract depends on this ordering.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SubscriptionCarRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} ORDER BY c.id ASC");
        sqlx::query_as::<_, SubscriptionCarRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one subscription car by raw database id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubscriptionCarRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE c.id = $1");
        sqlx::query_as::<_, SubscriptionCarRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
