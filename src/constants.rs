// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Training constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

/// Unit conversion constants used by the interval compiler
pub mod units {
    /// Miles in one kilometer
    pub const MILES_PER_KM: f64 = 0.621371;

    /// Converts an average pace in min/km into miles per hour: `mph = 37.28 / pace`.
    ///
    /// Approximates `60 / 1.609` (minutes per hour over km per mile). Kept at
    /// its historical value; the exact quotient is 37.2902...
    pub const PACE_TO_MPH_FACTOR: f64 = 37.28;

    /// Converts an average pace in min/km into km/h
    pub const PACE_TO_KMH_FACTOR: f64 = 60.0;

    pub const METERS_PER_KM: f64 = 1000.0;
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Fitness-level baselines
pub mod fitness {
    pub const BEGINNER_DISTANCE_KM: f64 = 2.0;
    pub const INTERMEDIATE_DISTANCE_KM: f64 = 5.0;
    pub const ADVANCED_DISTANCE_KM: f64 = 10.0;

    pub const BEGINNER_PACE_SECONDS_PER_KM: f64 = 420.0;
    pub const INTERMEDIATE_PACE_SECONDS_PER_KM: f64 = 360.0;
    pub const ADVANCED_PACE_SECONDS_PER_KM: f64 = 300.0;
}

/// Rule table multipliers and fixed workouts
pub mod rules {
    /// Long runs are 50% longer than a base session
    pub const LONG_RUN_FACTOR: f64 = 1.5;
    pub const DEVELOPMENT_FACTOR: f64 = 1.2;
    pub const PEAK_FACTOR: f64 = 1.3;

    pub const RACE_FOUNDATION_MULTIPLIER: f64 = 0.6;
    pub const RACE_DEVELOPMENT_MULTIPLIER: f64 = 0.8;
    pub const RACE_PEAK_MULTIPLIER: f64 = 1.0;

    pub const SPEED_SESSION_DURATION_SECONDS: f64 = 45.0 * 60.0;
    pub const SPEED_SESSION_DISTANCE_KM: f64 = 5.0;
}

/// Couch-to-5K progression, one entry per two-week bucket.
/// `(run minutes, walk minutes, total minutes)`; weeks past the table reuse the last entry.
pub mod couch_to_5k {
    pub const WEEKS_PER_BUCKET: u32 = 2;

    pub const PROGRESSION: [(u32, u32, u32); 5] = [
        (1, 2, 30),
        (2, 2, 30),
        (3, 1, 35),
        (5, 1, 35),
        (8, 1, 40),
    ];
}

/// Structured workout defaults
pub mod compiler {
    pub const DEFAULT_WARMUP_MINUTES: f64 = 5.0;
    pub const DEFAULT_COOLDOWN_MINUTES: f64 = 5.0;
    /// Flat speed tolerance on either side of the target speed
    pub const SPEED_TOLERANCE: f64 = 1.0;
    pub const SIMPLE_RUN_PACE_HALF_WIDTH: f64 = 0.5;
    pub const PROGRESSIVE_PACE_INCREMENT: f64 = 0.5;
    pub const PROGRESSIVE_PACE_HALF_WIDTH: f64 = 0.25;

    /// Repeats used when a planned interval session is sent to a device
    pub const DEFAULT_INTERVAL_REPEATS: u32 = 8;
    pub const DEFAULT_INTERVAL_WORK_METERS: f64 = 400.0;
    pub const DEFAULT_INTERVAL_RECOVERY_SECONDS: f64 = 60.0;
}

/// Device scheduling defaults
pub mod scheduling {
    pub const MORNING_START_HOUR: u32 = 7;
    pub const AFTERNOON_START_HOUR: u32 = 12;
    pub const EVENING_START_HOUR: u32 = 18;
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    /// Get database URL from environment or default
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/plans.db".to_string())
    }

    /// Get engine config file path from environment
    pub fn engine_config_path() -> Option<String> {
        env::var("STRIDE_CONFIG").ok()
    }

    /// Get the signed-in user id from environment
    pub fn user_id() -> Option<String> {
        env::var("STRIDE_USER_ID").ok().filter(|id| !id.is_empty())
    }

    /// Get log level from environment or default
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    }

    /// Get event bus channel capacity from environment or default
    pub fn event_channel_capacity() -> usize {
        env::var("EVENT_CHANNEL_CAPACITY")
            .unwrap_or_else(|_| "64".to_string())
            .parse()
            .unwrap_or(64)
    }
}
