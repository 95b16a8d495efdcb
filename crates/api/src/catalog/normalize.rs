//! Row-to-`Car` normalization.
//!
//! Two raw sources, two query paths, four explicit mapping functions. Every
//! nullable input has a defined fallback, so mapping never fails; the same
//! row and the same `current_year` always produce the same `Car`. The list
//! and detail paths intentionally disagree on the subscription weekly price,
//! the great-value threshold, and the default location (see
//! `drivehub_core::pricing`).

use drivehub_core::car::{
    Car, CarCategory, SubscriptionPlans, DEFAULT_MAKE, PLACEHOLDER_DRIVE_TYPE, PLACEHOLDER_SEATS,
    SUBSCRIPTION_CATALOG_ID,
};
use drivehub_core::pricing::{
    second_hand_is_great_value, second_hand_weekly, status_is_active, DetailPricing, ListPricing,
    PricingPolicy, DEFAULT_LOCATION_LIST,
};
use drivehub_core::vocab::{BodyType, FuelType};
use drivehub_db::models::{SecondHandCarRow, SubscriptionCarRow};

/// Image path served when a row has no image references at all.
pub const PLACEHOLDER_IMAGE: &str = "/images/car-placeholder.jpg";

/// Per-request inputs the mapping depends on besides the row itself.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    /// Fallback for rows with a null model year. Passed in (not read from
    /// the clock here) so mapping stays deterministic under test.
    pub current_year: i32,
    /// Blob-storage base URL image references resolve against.
    pub media_base_url: &'a str,
    /// Caller-supplied location override, applied when the lookup join
    /// produced no name.
    pub location_override: Option<&'a str>,
}

/// Map a subscription row for the catalog list. The synthetic id is the
/// shared [`SUBSCRIPTION_CATALOG_ID`] token for every subscription car.
pub fn subscription_to_list_car(row: &SubscriptionCarRow, ctx: &NormalizeContext) -> Car {
    subscription_car(row, ctx, &ListPricing, false)
}

/// Map a subscription row for a detail lookup: alternate pricing policy,
/// availability forced true, and the extended fields populated.
pub fn subscription_to_detail_car(row: &SubscriptionCarRow, ctx: &NormalizeContext) -> Car {
    subscription_car(row, ctx, &DetailPricing, true)
}

/// Map a second-hand row for the catalog list.
pub fn second_hand_to_list_car(row: &SecondHandCarRow, ctx: &NormalizeContext) -> Car {
    second_hand_car(row, ctx, &ListPricing, false)
}

/// Map a second-hand row for a detail lookup.
pub fn second_hand_to_detail_car(row: &SecondHandCarRow, ctx: &NormalizeContext) -> Car {
    second_hand_car(row, ctx, &DetailPricing, true)
}

fn subscription_car(
    row: &SubscriptionCarRow,
    ctx: &NormalizeContext,
    policy: &impl PricingPolicy,
    detail: bool,
) -> Car {
    let plans = SubscriptionPlans {
        three_month: row.price_3_months.unwrap_or(0),
        six_month: row.price_6_months.unwrap_or(0),
        nine_month: row.price_9_months.unwrap_or(0),
    };

    let weekly_price = policy.subscription_weekly(&plans);
    let location = resolve_location(
        row.location_name.as_deref(),
        ctx,
        policy.subscription_default_location(),
    );

    tracing::debug!(
        db_id = row.id,
        weekly_price,
        detail,
        "normalized subscription row"
    );

    Car {
        id: SUBSCRIPTION_CATALOG_ID.to_string(),
        db_id: row.id,
        make: resolve_make(row.make_name.as_deref()),
        model: resolve_model(row.model_name.as_deref(), &row.registration_number),
        year: row.year.unwrap_or(ctx.current_year),
        fuel_type: FuelType::from_source(row.fuel_type_name.as_deref()),
        body_type: BodyType::from_source(row.category_name.as_deref()),
        seats: PLACEHOLDER_SEATS,
        drive_type: PLACEHOLDER_DRIVE_TYPE.to_string(),
        weekly_price,
        available: policy.subscription_available(row.status.as_deref()),
        status: policy.echo_status(row.status.as_deref()),
        is_great_value: policy.subscription_is_great_value(&plans),
        category: CarCategory::Subscription,
        location,
        image: resolve_image(row.first_image(), ctx.media_base_url),
        description: detail.then(|| row.description.clone()).flatten(),
        mileage: detail.then_some(row.mileage).flatten(),
        subscription_plans: detail.then_some(plans),
        registration_number: detail.then(|| row.registration_number.clone()),
    }
}

fn second_hand_car(
    row: &SecondHandCarRow,
    ctx: &NormalizeContext,
    policy: &impl PricingPolicy,
    detail: bool,
) -> Car {
    let price = row.price.unwrap_or(0);
    let weekly_price = second_hand_weekly(price);
    let location = resolve_location(row.location_name.as_deref(), ctx, DEFAULT_LOCATION_LIST);

    tracing::debug!(
        db_id = row.id,
        weekly_price,
        detail,
        "normalized second-hand row"
    );

    Car {
        id: Car::second_hand_id(row.id),
        db_id: row.id,
        make: resolve_make(row.make_name.as_deref()),
        model: resolve_model(row.model_name.as_deref(), &row.registration_number),
        year: row.year.unwrap_or(ctx.current_year),
        fuel_type: FuelType::from_source(row.fuel_type_name.as_deref()),
        body_type: BodyType::from_source(row.category_name.as_deref()),
        seats: PLACEHOLDER_SEATS,
        drive_type: PLACEHOLDER_DRIVE_TYPE.to_string(),
        weekly_price,
        available: status_is_active(row.status.as_deref()),
        status: policy.echo_status(row.status.as_deref()),
        is_great_value: second_hand_is_great_value(price),
        category: CarCategory::Secondhand,
        location,
        image: resolve_image(row.first_image(), ctx.media_base_url),
        description: detail.then(|| row.description.clone()).flatten(),
        mileage: detail.then_some(row.mileage).flatten(),
        subscription_plans: None,
        registration_number: detail.then(|| row.registration_number.clone()),
    }
}

fn resolve_make(make_name: Option<&str>) -> String {
    make_name.unwrap_or(DEFAULT_MAKE).to_string()
}

fn resolve_model(model_name: Option<&str>, registration: &str) -> String {
    match model_name {
        Some(name) => name.to_string(),
        None => format!("Vehicle {registration}"),
    }
}

/// Resolved lookup name wins, then the caller override, then the per-path
/// hardcoded default.
fn resolve_location(location_name: Option<&str>, ctx: &NormalizeContext, default: &str) -> String {
    location_name
        .or(ctx.location_override)
        .unwrap_or(default)
        .to_string()
}

fn resolve_image(first_image: Option<&str>, media_base_url: &str) -> String {
    match first_image {
        Some(path) => format!("{}/{}", media_base_url.trim_end_matches('/'), path),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}
