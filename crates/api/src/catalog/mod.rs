//! The catalog service: fetch, normalize, filter, and look up cars.
//!
//! `fetch_catalog` keeps the underlying `Result` visible so tests can tell
//! "no rows" apart from "fetch failed"; the public `list`/lookup methods
//! flatten infrastructure errors fail-open (empty list / `None`) per the
//! HTTP contract. No retries anywhere.

pub mod filter;
pub mod normalize;

use chrono::Datelike;

use drivehub_core::car::{Car, CarCategory};
use drivehub_core::types::DbId;
use drivehub_db::repositories::{SecondHandCarRepo, SubscriptionCarRepo};
use drivehub_db::DbPool;

use crate::state::AppState;
use filter::{CarFilter, CarSort};
use normalize::{
    second_hand_to_detail_car, second_hand_to_list_car, subscription_to_detail_car,
    subscription_to_list_car, NormalizeContext,
};

/// Per-request catalog access. Construction is cheap (pool handle clone);
/// every call re-queries both sources, there is no cache.
pub struct CatalogService {
    pool: DbPool,
    media_base_url: String,
}

impl CatalogService {
    pub fn new(pool: DbPool, media_base_url: String) -> Self {
        Self {
            pool,
            media_base_url,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.pool.clone(), state.config.media_base_url.clone())
    }

    fn ctx<'a>(&'a self, location_override: Option<&'a str>) -> NormalizeContext<'a> {
        NormalizeContext {
            current_year: chrono::Utc::now().year(),
            media_base_url: &self.media_base_url,
            location_override,
        }
    }

    /// Fetch and normalize the full combined catalog: every subscription car
    /// (source order) followed by every second-hand car (source order).
    /// The concatenation order is part of the observable contract.
    pub async fn fetch_catalog(&self) -> Result<Vec<Car>, sqlx::Error> {
        self.fetch_catalog_with(None).await
    }

    /// Catalog fetch with a caller-supplied location override, applied to
    /// rows whose location join produced no name.
    async fn fetch_catalog_with(
        &self,
        location_override: Option<&str>,
    ) -> Result<Vec<Car>, sqlx::Error> {
        let ctx = self.ctx(location_override);

        let subscriptions = SubscriptionCarRepo::list_all(&self.pool).await?;
        let second_hand = SecondHandCarRepo::list_all(&self.pool).await?;

        let mut cars: Vec<Car> = subscriptions
            .iter()
            .map(|row| subscription_to_list_car(row, &ctx))
            .collect();
        cars.extend(
            second_hand
                .iter()
                .map(|row| second_hand_to_list_car(row, &ctx)),
        );
        Ok(cars)
    }

    /// List the catalog with filters and an optional sort, failing open to
    /// an empty list when the underlying fetch errors. Callers cannot
    /// distinguish "no matches" from "fetch failed" here; that is intended.
    ///
    /// The requested location doubles as the normalize override: a row with
    /// no resolved location name takes the requested one before the filter
    /// applies, so such rows match rather than falling back to the default
    /// and being filtered out.
    pub async fn list(&self, filter: &CarFilter, sort: Option<CarSort>) -> Vec<Car> {
        let mut cars = match self.fetch_catalog_with(filter.location.as_deref()).await {
            Ok(cars) => cars,
            Err(err) => {
                tracing::error!(error = %err, "catalog fetch failed; returning empty list");
                return Vec::new();
            }
        };

        cars.retain(|car| filter.matches(car));
        if let Some(sort) = sort {
            sort.apply(&mut cars);
        }
        cars
    }

    /// Resolve a car by its synthetic catalog id via a linear scan of the
    /// full catalog. Because every subscription car shares the `"example"`
    /// id, that token always resolves to the FIRST subscription car in
    /// catalog order. Fail-open: `None` on fetch error as well as on a miss.
    pub async fn find_by_catalog_id(&self, id: &str) -> Option<Car> {
        match self.fetch_catalog().await {
            Ok(cars) => cars.into_iter().find(|car| car.id == id),
            Err(err) => {
                tracing::error!(error = %err, "catalog fetch failed during id lookup");
                None
            }
        }
    }

    /// Resolve a car by raw database id with an optional category hint.
    ///
    /// A hint is a hard partition: `carType=secondhand` never falls back to
    /// a subscription match and vice versa. Without a hint, the subscription
    /// source is tried first. Detail pricing applies on this path.
    pub async fn find_by_db_id(&self, db_id: DbId, hint: Option<CarCategory>) -> Option<Car> {
        let ctx = self.ctx(None);

        if hint != Some(CarCategory::Secondhand) {
            match SubscriptionCarRepo::find_by_id(&self.pool, db_id).await {
                Ok(Some(row)) => return Some(subscription_to_detail_car(&row, &ctx)),
                Ok(None) => {
                    if hint == Some(CarCategory::Subscription) {
                        return None;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, db_id, "subscription lookup failed");
                    return None;
                }
            }
        }

        match SecondHandCarRepo::find_by_id(&self.pool, db_id).await {
            Ok(Some(row)) => Some(second_hand_to_detail_car(&row, &ctx)),
            Ok(None) => None,
            Err(err) => {
                tracing::error!(error = %err, db_id, "second-hand lookup failed");
                None
            }
        }
    }
}
