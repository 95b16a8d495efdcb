//! Repository for the `second_hand_cars` table.

use drivehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::SecondHandCarRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "c.id, c.registration_number, c.year, c.mileage, c.status, \
    c.description, c.price, \
    c.image_1, c.image_2, c.image_3, c.image_4, c.image_5, \
    mk.name AS make_name, md.name AS model_name, ct.name AS category_name, \
    ft.name AS fuel_type_name, lc.name AS location_name, c.created_at";

const JOINS: &str = "FROM second_hand_cars c
    LEFT JOIN makes mk ON mk.id = c.make_id
    LEFT JOIN car_models md ON md.id = c.model_id
    LEFT JOIN categories ct ON ct.id = c.category_id
    LEFT JOIN fuel_types ft ON ft.id = c.fuel_type_id
    LEFT JOIN locations lc ON lc.id = c.location_id";

/// Read-side queries for second-hand stock.
pub struct SecondHandCarRepo;

impl SecondHandCarRepo {
    /// List every second-hand car with its lookup names, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SecondHandCarRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} ORDER BY c.id ASC");
        sqlx::query_as::<_, SecondHandCarRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one second-hand car by raw database id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SecondHandCarRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE c.id = $1");
        sqlx::query_as::<_, SecondHandCarRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
