//! Closed display vocabularies for normalized catalog fields.
//!
//! Raw rows carry free-text lookup names; the catalog only ever surfaces the
//! fixed sets below. Unrecognized or missing source values collapse onto a
//! default rather than leaking raw text into the view-model.

use serde::{Deserialize, Serialize};

/// Fuel type display vocabulary. Unknown source values map to [`FuelType::Petrol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    /// Map a raw fuel-type lookup name (case-insensitive) onto the closed
    /// vocabulary. `None` and unrecognized strings both default to Petrol.
    pub fn from_source(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("diesel") => Self::Diesel,
            Some("hybrid") => Self::Hybrid,
            Some("electric") => Self::Electric,
            Some("petrol") => Self::Petrol,
            _ => Self::Petrol,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
        }
    }
}

/// Body type display vocabulary. Unknown source categories map to [`BodyType::Suv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Hatchback,
    Wagon,
    Ute,
    Van,
    Coupe,
}

impl BodyType {
    /// Map a raw category lookup name (case-insensitive) onto the closed
    /// vocabulary. `None` and unrecognized strings both default to SUV.
    pub fn from_source(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("sedan") => Self::Sedan,
            Some("hatchback") => Self::Hatchback,
            Some("wagon") => Self::Wagon,
            Some("ute") => Self::Ute,
            Some("van") => Self::Van,
            Some("coupe") => Self::Coupe,
            Some("suv") => Self::Suv,
            _ => Self::Suv,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
            Self::Hatchback => "Hatchback",
            Self::Wagon => "Wagon",
            Self::Ute => "Ute",
            Self::Van => "Van",
            Self::Coupe => "Coupe",
        }
    }
}
