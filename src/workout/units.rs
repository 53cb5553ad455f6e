// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Distance and speed conversions for device-facing workout goals

use crate::constants::units::{MILES_PER_KM, PACE_TO_KMH_FACTOR, PACE_TO_MPH_FACTOR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    MilesPerHour,
    KilometersPerHour,
}

/// Unit system the target device expects goals in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Miles and mph
    #[default]
    Imperial,
    /// Kilometers and km/h, no conversion applied
    Metric,
}

impl UnitSystem {
    pub fn distance_unit(&self) -> DistanceUnit {
        match self {
            UnitSystem::Imperial => DistanceUnit::Miles,
            UnitSystem::Metric => DistanceUnit::Kilometers,
        }
    }

    pub fn speed_unit(&self) -> SpeedUnit {
        match self {
            UnitSystem::Imperial => SpeedUnit::MilesPerHour,
            UnitSystem::Metric => SpeedUnit::KilometersPerHour,
        }
    }

    /// Express a kilometer distance in this system's distance unit
    pub fn distance_from_km(&self, km: f64) -> f64 {
        match self {
            UnitSystem::Imperial => km_to_miles(km),
            UnitSystem::Metric => km,
        }
    }

    /// Speed for an average pace in min/km, in this system's speed unit
    pub fn speed_for_pace(&self, pace_min_per_km: f64) -> f64 {
        match self {
            UnitSystem::Imperial => pace_to_mph(pace_min_per_km),
            UnitSystem::Metric => pace_to_kmh(pace_min_per_km),
        }
    }
}

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles / MILES_PER_KM
}

/// Approximate mph for a pace in min/km, see [`PACE_TO_MPH_FACTOR`]
pub fn pace_to_mph(pace_min_per_km: f64) -> f64 {
    PACE_TO_MPH_FACTOR / pace_min_per_km
}

pub fn pace_to_kmh(pace_min_per_km: f64) -> f64 {
    PACE_TO_KMH_FACTOR / pace_min_per_km
}
