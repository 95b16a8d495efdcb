//! Integration tests for the catalog repositories: join resolution,
//! ordering, and nullable lookup handling.

use drivehub_db::repositories::{SecondHandCarRepo, SubscriptionCarRepo};
use sqlx::PgPool;

/// Insert one row into a lookup table and return its id.
async fn insert_lookup(pool: &PgPool, table: &str, name: &str) -> i64 {
    let query = format!("INSERT INTO {table} (name) VALUES ($1) RETURNING id");
    sqlx::query_scalar(&query)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn subscription_rows_resolve_lookup_names(pool: PgPool) {
    let make_id = insert_lookup(&pool, "makes", "Toyota").await;
    let model_id = insert_lookup(&pool, "car_models", "Corolla").await;
    let fuel_id = insert_lookup(&pool, "fuel_types", "hybrid").await;

    sqlx::query(
        "INSERT INTO subscription_cars
            (registration_number, year, status, price_3_months, price_6_months,
             price_9_months, make_id, model_id, fuel_type_id)
         VALUES ('ABC123', 2021, 'available', 3000, 5200, 7200, $1, $2, $3)",
    )
    .bind(make_id)
    .bind(model_id)
    .bind(fuel_id)
    .execute(&pool)
    .await
    .unwrap();

    let rows = SubscriptionCarRepo::list_all(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.registration_number, "ABC123");
    assert_eq!(row.make_name.as_deref(), Some("Toyota"));
    assert_eq!(row.model_name.as_deref(), Some("Corolla"));
    assert_eq!(row.fuel_type_name.as_deref(), Some("hybrid"));
    // No category or location was linked; LEFT JOIN must yield None.
    assert_eq!(row.category_name, None);
    assert_eq!(row.location_name, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_all_returns_rows_in_insertion_order(pool: PgPool) {
    for reg in ["FIRST1", "SECOND2", "THIRD3"] {
        sqlx::query("INSERT INTO subscription_cars (registration_number) VALUES ($1)")
            .bind(reg)
            .execute(&pool)
            .await
            .unwrap();
    }

    let rows = SubscriptionCarRepo::list_all(&pool).await.unwrap();
    let regs: Vec<&str> = rows
        .iter()
        .map(|r| r.registration_number.as_str())
        .collect();
    assert_eq!(regs, ["FIRST1", "SECOND2", "THIRD3"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_hand_find_by_id_returns_none_for_missing_row(pool: PgPool) {
    let found = SecondHandCarRepo::find_by_id(&pool, 9999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn second_hand_row_carries_price_and_images(pool: PgPool) {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO second_hand_cars (registration_number, price, image_2)
         VALUES ('XYZ789', 14000, 'cars/xyz789.jpg') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let row = SecondHandCarRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(row.price, Some(14000));
    // image_1 is null, so the first populated reference is image_2.
    assert_eq!(row.first_image(), Some("cars/xyz789.jpg"));
}
