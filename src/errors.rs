// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for plan generation and its downstream collaborators

use crate::services::devices::AuthorizationStatus;
use chrono::NaiveDate;

/// Errors surfaced by the planning engine and the plan service.
///
/// Validation variants are raised before any workout is generated. The
/// downstream variants are reported to the caller as-is and never retried here.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Plan must span at least one week, got {0}")]
    InvalidWeekCount(i64),

    #[error("At least one workout day must be selected")]
    EmptyWeekdaySet,

    #[error("End date {end} must be after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid workout interval: {0}")]
    InvalidInterval(String),

    #[error("No signed-in user available to own the plan")]
    MissingUser,

    #[error("Device scheduling is not authorized (status: {0:?})")]
    AuthorizationRequired(AuthorizationStatus),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Plan {0} not found")]
    PlanNotFound(uuid::Uuid),

    #[error("Device rejected workout scheduled for {date}: {reason}")]
    SchedulingFailure { date: NaiveDate, reason: String },
}

pub type PlanResult<T> = Result<T, PlanError>;
