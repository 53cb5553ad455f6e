// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Stride Planner
//!
//! A deterministic running training-plan engine. Given a goal, a fitness
//! level, a date range and the weekdays a runner is available, it produces a
//! dated list of workouts, a calendar view of them, and structured
//! interval workouts that can be handed to a watch or phone scheduler.
//!
//! ## Features
//!
//! - **Phase planning**: Foundation, Development and Peak blocks per week
//! - **Rule table**: goal x phase x weekday x fitness-level workout selection
//! - **Calendar**: per-day display items with merge support
//! - **Interval compiler**: pace ranges to speed alerts in miles or kilometres
//! - **Plan lifecycle**: SQLite persistence, change events and device scheduling
//!
//! ## Architecture
//!
//! - **Models**: Goals, fitness levels, specifications and plans
//! - **Training**: The pure generation engine
//! - **Workout**: Structured workout compilation and unit conversion
//! - **Services**: Identity, persistence, events and device contracts plus [`services::PlanService`]
//! - **Database**: SQLite implementation of [`services::PlanStore`]
//! - **Config**: TOML engine settings and environment service settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use stride_planner::models::{FitnessLevel, PlanSpecification, RunningGoal, Weekday};
//! use stride_planner::training::{generate_plan, CalendarSchedule};
//!
//! fn main() -> anyhow::Result<()> {
//!     let spec = PlanSpecification::new(
//!         RunningGoal::BeginnerFitness,
//!         FitnessLevel::Beginner,
//!         NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
//!         [Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
//!     );
//!
//!     let plan = generate_plan(&spec, "runner-1")?;
//!     let calendar = CalendarSchedule::for_plan(&plan);
//!     println!("{}: {} workouts on {} days", plan.name, plan.workouts.len(), calendar.len());
//!
//!     Ok(())
//! }
//! ```

/// Common data models for plans and workouts
pub mod models;

/// Error types for plan generation and lifecycle operations
pub mod errors;

/// Application constants and configuration values
pub mod constants;

/// Configuration management
pub mod config;

/// Structured logging setup
pub mod logging;

/// Plan generation engine
pub mod training;

/// Structured workout compilation
pub mod workout;

/// SQLite plan storage
pub mod database;

/// External collaborators and plan lifecycle
pub mod services;
