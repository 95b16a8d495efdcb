//! Pricing rules for the two catalog query paths.
//!
//! The list path and the detail (lookup-by-db-id) path compute `weeklyPrice`,
//! `isGreatValue`, and the default location DIFFERENTLY for subscription
//! cars. Whether that divergence is business logic or an unreconciled bug in
//! the upstream data model is an open question; both computations are kept as
//! named policies behind one trait and must never be silently unified.
//! Second-hand pricing is identical on every path.

use crate::car::SubscriptionPlans;

/// Months in the 3-month term; list-path weekly divisor.
const LIST_TERM_MONTHS: f64 = 3.0;

/// Weeks in the 6-month term; detail-path weekly divisor.
const DETAIL_TERM_WEEKS: f64 = 26.0;

/// Second-hand sale-price divisor for the weekly figure.
const SECOND_HAND_DIVISOR: f64 = 12.0;

/// List path: a subscription car is "great value" below this weekly figure.
const LIST_GREAT_VALUE_WEEKLY: i64 = 300;

/// Detail path: a subscription car is "great value" below this 3-month total.
const DETAIL_GREAT_VALUE_3_MONTH: i64 = 30_000;

/// A second-hand car is "great value" below this sale price (every path).
const SECOND_HAND_GREAT_VALUE_PRICE: i64 = 15_000;

/// Default location for list queries and second-hand cars.
pub const DEFAULT_LOCATION_LIST: &str = "Melbourne";

/// Default location for subscription detail lookups.
pub const DEFAULT_LOCATION_DETAIL: &str = "Brisbane";

/// Lifecycle status fallback when the raw column is null.
pub const DEFAULT_STATUS: &str = "available";

/// Per-path pricing and presentation rules for subscription cars.
pub trait PricingPolicy {
    /// Derived weekly price from the three term totals.
    fn subscription_weekly(&self, plans: &SubscriptionPlans) -> i64;

    /// Marketing "great value" flag.
    fn subscription_is_great_value(&self, plans: &SubscriptionPlans) -> bool;

    /// Location fallback when the lookup join produced no name and the
    /// caller supplied no override.
    fn subscription_default_location(&self) -> &'static str;

    /// Availability derived from the raw lifecycle status.
    fn subscription_available(&self, status: Option<&str>) -> bool;

    /// How the raw status text is echoed into the view-model.
    fn echo_status(&self, status: Option<&str>) -> String;
}

/// Pricing rules applied by the catalog list query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPricing;

/// Pricing rules applied by the lookup-by-db-id detail path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailPricing;

impl PricingPolicy for ListPricing {
    fn subscription_weekly(&self, plans: &SubscriptionPlans) -> i64 {
        (plans.three_month as f64 / LIST_TERM_MONTHS).round() as i64
    }

    fn subscription_is_great_value(&self, plans: &SubscriptionPlans) -> bool {
        self.subscription_weekly(plans) < LIST_GREAT_VALUE_WEEKLY
    }

    fn subscription_default_location(&self) -> &'static str {
        DEFAULT_LOCATION_LIST
    }

    fn subscription_available(&self, status: Option<&str>) -> bool {
        status_is_active(status)
    }

    fn echo_status(&self, status: Option<&str>) -> String {
        status.unwrap_or(DEFAULT_STATUS).to_lowercase()
    }
}

impl PricingPolicy for DetailPricing {
    fn subscription_weekly(&self, plans: &SubscriptionPlans) -> i64 {
        (plans.six_month as f64 / DETAIL_TERM_WEEKS).round() as i64
    }

    fn subscription_is_great_value(&self, plans: &SubscriptionPlans) -> bool {
        plans.three_month < DETAIL_GREAT_VALUE_3_MONTH
    }

    fn subscription_default_location(&self) -> &'static str {
        DEFAULT_LOCATION_DETAIL
    }

    /// Subscription cars surfaced through the detail path are always
    /// presented as available, regardless of raw status.
    fn subscription_available(&self, _status: Option<&str>) -> bool {
        true
    }

    fn echo_status(&self, status: Option<&str>) -> String {
        capitalize_first(status.unwrap_or(DEFAULT_STATUS))
    }
}

/// Second-hand weekly figure: `round(price / 12)` on every path.
pub fn second_hand_weekly(price: i64) -> i64 {
    (price as f64 / SECOND_HAND_DIVISOR).round() as i64
}

/// Second-hand "great value" flag: sale price under the fixed threshold.
pub fn second_hand_is_great_value(price: i64) -> bool {
    price < SECOND_HAND_GREAT_VALUE_PRICE
}

/// A car is available when its lifecycle status is `available` or `active`
/// (case-insensitive). Null status means unavailable.
pub fn status_is_active(status: Option<&str>) -> bool {
    matches!(
        status.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("available") | Some("active")
    )
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
