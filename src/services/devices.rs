// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Device scheduling contract for structured workouts

use crate::models::Weekday;
use crate::workout::StructuredWorkout;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Permission state of the device scheduling service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Denied,
    Restricted,
}

impl AuthorizationStatus {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationStatus::Authorized)
    }
}

/// A structured workout as handed to a device, with its start time and the
/// weekday in the platform calendar numbering (Sunday=1 .. Saturday=7)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceWorkout {
    pub start: NaiveDateTime,
    pub calendar_weekday: u32,
    pub workout: StructuredWorkout,
}

impl DeviceWorkout {
    pub fn new(start: NaiveDateTime, workout: StructuredWorkout) -> Self {
        Self {
            start,
            calendar_weekday: Weekday::of_date(start.date()).calendar_api_ordinal(),
            workout,
        }
    }
}

/// External service that places structured workouts on a wearable's calendar
#[async_trait]
pub trait DeviceScheduler: Send + Sync {
    async fn authorization_status(&self) -> AuthorizationStatus;

    /// Prompt for permission; returns the resulting status
    async fn request_authorization(&self) -> AuthorizationStatus;

    /// Only called once the status is [`AuthorizationStatus::Authorized`]
    async fn schedule(&self, workout: &DeviceWorkout) -> Result<()>;

    fn device_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_calendar_weekday_uses_sunday_first_numbering() {
        let workout = StructuredWorkout {
            display_name: "Easy Run".to_string(),
            warmup: None,
            blocks: Vec::new(),
            cooldown: None,
        };

        // 2025-01-05 is a Sunday, 2025-01-06 a Monday, 2025-01-11 a Saturday
        assert_eq!(DeviceWorkout::new(at(5), workout.clone()).calendar_weekday, 1);
        assert_eq!(DeviceWorkout::new(at(6), workout.clone()).calendar_weekday, 2);
        assert_eq!(DeviceWorkout::new(at(11), workout).calendar_weekday, 7);
    }
}
