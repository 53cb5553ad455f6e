// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Training Module
//!
//! Deterministic training-plan generation.
//!
//! This module includes:
//! - Phase planning (Foundation / Development / Peak per week)
//! - The goal x phase x weekday x fitness-level workout rule table
//! - Calendar expansion into dated workouts and the display schedule
//! - Plan generation tying the three together
//!
//! Everything here is synchronous and side-effect free apart from logging.

pub mod generator;
pub mod phase;
pub mod rules;
pub mod scheduler;

pub use generator::{generate_plan, generate_workouts, validate};
pub use phase::{phase_for_week, phase_summary, PhaseSummary};
pub use rules::{workout_intent, RuleInput};
pub use scheduler::{expand_slots, CalendarItem, CalendarSchedule, ScheduledSlot};
