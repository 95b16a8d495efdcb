//! Handlers for the `/cars` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use drivehub_core::car::{Car, CarCategory};
use drivehub_core::types::DbId;

use crate::catalog::filter::{CarFilter, CarSort, SeatsFilter};
use crate::catalog::CatalogService;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /cars`. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub seats: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters for `GET /cars/db/{db_id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarTypeQuery {
    pub car_type: Option<String>,
}

/// A feature line shown on the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: &'static str,
    pub icon: &'static str,
}

/// A subscription plan tier shown on the detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: &'static str,
    pub duration_months: u32,
    pub km_per_week: u32,
    pub bond: u32,
}

// ---------------------------------------------------------------------------
// Catalog list
// ---------------------------------------------------------------------------

/// GET /api/cars
///
/// Full combined catalog with optional AND-combined filters. Fails open to
/// an empty array when the underlying fetch errors.
pub async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<CarListQuery>,
) -> Json<Vec<Car>> {
    // An unrecognized category can match nothing: the catalog only ever
    // contains the two known partitions.
    let category = match params.category.as_deref() {
        None => None,
        Some(raw) => match CarCategory::from_param(raw) {
            Some(category) => Some(category),
            None => return Json(Vec::new()),
        },
    };

    let filter = CarFilter {
        category,
        location: params.location,
        body_type: params.body_type,
        fuel_type: params.fuel_type,
        seats: params.seats.as_deref().and_then(SeatsFilter::parse),
    };
    let sort = params.sort.as_deref().and_then(CarSort::from_param);

    let cars = CatalogService::from_state(&state).list(&filter, sort).await;
    Json(cars)
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// GET /api/cars/{id}
///
/// Resolve by synthetic catalog id. The shared `"example"` subscription id
/// resolves to the first subscription car in catalog order.
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Car>> {
    CatalogService::from_state(&state)
        .find_by_catalog_id(&id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Car not found"))
}

/// GET /api/cars/db/{db_id}?carType=subscription|secondhand
///
/// Resolve by raw database id. A `carType` hint is a hard partition; an
/// unrecognized hint value is ignored.
pub async fn get_car_by_db_id(
    State(state): State<AppState>,
    Path(db_id): Path<DbId>,
    Query(params): Query<CarTypeQuery>,
) -> AppResult<Json<Car>> {
    let hint = params.car_type.as_deref().and_then(CarCategory::from_param);

    CatalogService::from_state(&state)
        .find_by_db_id(db_id, hint)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Car not found"))
}

// ---------------------------------------------------------------------------
// Static detail-page data
// ---------------------------------------------------------------------------

/// GET /api/cars/{id}/features -- sample data, identical for every car.
pub async fn list_features(Path(_id): Path<String>) -> Json<Vec<Feature>> {
    Json(vec![
        Feature { name: "Bluetooth", icon: "bluetooth" },
        Feature { name: "Reverse Camera", icon: "camera" },
        Feature { name: "Cruise Control", icon: "cruise" },
        Feature { name: "Air Conditioning", icon: "snowflake" },
        Feature { name: "Apple CarPlay / Android Auto", icon: "smartphone" },
        Feature { name: "ABS Brakes", icon: "shield" },
    ])
}

/// GET /api/cars/{id}/subscription-plans -- sample data, identical for
/// every car.
pub async fn list_subscription_plans(Path(_id): Path<String>) -> Json<Vec<SubscriptionPlan>> {
    Json(vec![
        SubscriptionPlan { name: "3 Months", duration_months: 3, km_per_week: 385, bond: 500 },
        SubscriptionPlan { name: "6 Months", duration_months: 6, km_per_week: 385, bond: 500 },
        SubscriptionPlan { name: "9 Months", duration_months: 9, km_per_week: 385, bond: 500 },
    ])
}
