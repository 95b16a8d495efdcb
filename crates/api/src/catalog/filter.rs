//! Catalog filter predicates and sorting.
//!
//! Filters are AND-combined exact matches applied after normalization, so
//! they always compare against the closed display vocabularies, never raw
//! source text. String comparisons are case-sensitive per the contract.

use drivehub_core::car::{Car, CarCategory};

/// Seats filter: an exact count, or the `"7+"` sentinel meaning `seats >= 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatsFilter {
    Exact(i32),
    SevenPlus,
}

impl SeatsFilter {
    /// Parse the `seats` query parameter. Unparseable values yield `None`
    /// and the filter is skipped.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "7+" {
            return Some(Self::SevenPlus);
        }
        raw.parse::<i32>().ok().map(Self::Exact)
    }

    pub fn matches(self, seats: i32) -> bool {
        match self {
            Self::Exact(n) => seats == n,
            Self::SevenPlus => seats >= 7,
        }
    }
}

/// AND-combined catalog filters; absent fields match everything.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    pub category: Option<CarCategory>,
    pub location: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub seats: Option<SeatsFilter>,
}

impl CarFilter {
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(category) = self.category {
            if car.category != category {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if car.location != *location {
                return false;
            }
        }
        if let Some(body_type) = &self.body_type {
            if car.body_type.as_str() != body_type {
                return false;
            }
        }
        if let Some(fuel_type) = &self.fuel_type {
            if car.fuel_type.as_str() != fuel_type {
                return false;
            }
        }
        if let Some(seats) = self.seats {
            if !seats.matches(car.seats) {
                return false;
            }
        }
        true
    }
}

/// Catalog sort orders. Ties keep input order (stable sort), which preserves
/// the subscription-then-second-hand concatenation for equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarSort {
    PriceAsc,
    PriceDesc,
    Newest,
}

impl CarSort {
    /// Parse the `sort` query parameter. Unknown values yield `None` and
    /// the catalog keeps its natural order.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }

    pub fn apply(self, cars: &mut [Car]) {
        match self {
            Self::PriceAsc => cars.sort_by_key(|c| c.weekly_price),
            Self::PriceDesc => cars.sort_by_key(|c| std::cmp::Reverse(c.weekly_price)),
            Self::Newest => cars.sort_by_key(|c| std::cmp::Reverse(c.year)),
        }
    }
}
