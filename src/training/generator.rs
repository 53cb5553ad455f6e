// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Full plan generation: validation, phase resolution, rule lookup and dating

use super::phase::phase_for_week;
use super::rules::{workout_intent, RuleInput};
use super::scheduler::expand_slots;
use crate::errors::{PlanError, PlanResult};
use crate::models::{PlanSpecification, PlannedWorkout, TrainingPlan};
use tracing::{debug, info};

/// Check a specification and return its week count.
///
/// Runs before any workout is produced, so a failing specification never
/// yields a partial plan.
pub fn validate(spec: &PlanSpecification) -> PlanResult<u32> {
    if spec.end_date <= spec.start_date {
        return Err(PlanError::InvalidDateRange {
            start: spec.start_date,
            end: spec.end_date,
        });
    }
    if spec.workout_days.is_empty() {
        return Err(PlanError::EmptyWeekdaySet);
    }

    let total_weeks = spec.total_weeks();
    if total_weeks < 1 {
        return Err(PlanError::InvalidWeekCount(total_weeks));
    }
    u32::try_from(total_weeks).map_err(|_| PlanError::InvalidWeekCount(total_weeks))
}

/// Generate the dated workout list for a specification.
///
/// Pure and deterministic: identical specifications give identical lists.
pub fn generate_workouts(spec: &PlanSpecification) -> PlanResult<Vec<PlannedWorkout>> {
    let total_weeks = validate(spec)?;

    let namespace = spec.workout_namespace();

    let workouts: Vec<PlannedWorkout> = expand_slots(spec.start_date, &spec.workout_days, total_weeks)
        .into_iter()
        .map(|slot| {
            let phase = phase_for_week(total_weeks, slot.week_index);
            let intent = workout_intent(&RuleInput {
                goal: spec.goal,
                fitness_level: spec.fitness_level,
                phase,
                weekday: slot.weekday,
                week_index: slot.week_index,
            });
            debug!(
                week = slot.week_index,
                weekday = %slot.weekday,
                phase = %phase,
                workout_type = ?intent.workout_type,
                "Resolved workout slot"
            );
            PlannedWorkout::new(&namespace, slot.date, slot.week_index, phase, intent)
        })
        .collect();

    info!(
        goal = ?spec.goal,
        fitness_level = ?spec.fitness_level,
        total_weeks,
        workout_count = workouts.len(),
        "Generated training plan workouts"
    );

    Ok(workouts)
}

/// Generate a complete plan owned by `user_id`
pub fn generate_plan(spec: &PlanSpecification, user_id: &str) -> PlanResult<TrainingPlan> {
    let workouts = generate_workouts(spec)?;
    Ok(TrainingPlan::new(spec, user_id.to_string(), workouts))
}
