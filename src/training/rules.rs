// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout rule table: (goal, phase, weekday, fitness level) to workout intent.
//!
//! Each goal owns one pure rule function and [`rule_for`] selects it with an
//! exhaustive `match`, so adding a goal without a rule fails to compile.

use crate::constants::{couch_to_5k, rules, units};
use crate::models::{
    FitnessLevel, RunWalkPattern, RunningGoal, TrainingPhase, Weekday, WorkoutIntensity,
    WorkoutIntent, WorkoutType,
};

/// Everything a rule may look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInput {
    pub goal: RunningGoal,
    pub fitness_level: FitnessLevel,
    pub phase: TrainingPhase,
    pub weekday: Weekday,
    /// 0-based week of the plan; only run/walk progressions depend on it
    pub week_index: u32,
}

pub type Rule = fn(&RuleInput) -> WorkoutIntent;

/// Select the rule function for a goal
pub fn rule_for(goal: RunningGoal) -> Rule {
    match goal {
        RunningGoal::BeginnerFitness => beginner_fitness,
        RunningGoal::CouchTo5K => couch_to_5k,
        RunningGoal::RaceTraining => race_training,
        RunningGoal::ImprovePace => improve_pace,
    }
}

/// Look up the workout for one (week, weekday) slot
pub fn workout_intent(input: &RuleInput) -> WorkoutIntent {
    rule_for(input.goal)(input)
}

fn intent(
    workout_type: WorkoutType,
    duration_seconds: f64,
    distance_km: Option<f64>,
    intensity: WorkoutIntensity,
    description: &str,
) -> WorkoutIntent {
    WorkoutIntent {
        workout_type,
        duration_seconds,
        distance_km,
        intensity,
        description: description.to_string(),
        run_walk: None,
    }
}

/// Base session scaled by `factor` in both distance and duration
fn scaled_base(
    fitness_level: FitnessLevel,
    factor: f64,
    workout_type: WorkoutType,
    intensity: WorkoutIntensity,
    description: &str,
) -> WorkoutIntent {
    intent(
        workout_type,
        fitness_level.recommended_duration_seconds() * factor,
        Some(fitness_level.recommended_distance_km() * factor),
        intensity,
        description,
    )
}

fn long_easy_run(fitness_level: FitnessLevel) -> WorkoutIntent {
    scaled_base(
        fitness_level,
        rules::LONG_RUN_FACTOR,
        WorkoutType::LongRun,
        WorkoutIntensity::Low,
        "Long Easy Run",
    )
}

fn beginner_fitness(input: &RuleInput) -> WorkoutIntent {
    if input.weekday.is_weekend() {
        return long_easy_run(input.fitness_level);
    }

    match input.phase {
        TrainingPhase::Foundation => scaled_base(
            input.fitness_level,
            1.0,
            WorkoutType::Easy,
            WorkoutIntensity::Low,
            "Base Building Run",
        ),
        TrainingPhase::Development => scaled_base(
            input.fitness_level,
            rules::DEVELOPMENT_FACTOR,
            WorkoutType::Tempo,
            WorkoutIntensity::Moderate,
            "Steady Tempo Run",
        ),
        TrainingPhase::Peak => scaled_base(
            input.fitness_level,
            rules::PEAK_FACTOR,
            WorkoutType::Intervals,
            WorkoutIntensity::High,
            "Speed Intervals",
        ),
    }
}

/// Run/walk bucket for a week; weeks beyond the table stay on the last bucket
pub fn couch_to_5k_bucket(week_index: u32) -> (RunWalkPattern, f64) {
    let last = couch_to_5k::PROGRESSION.len() - 1;
    let bucket = ((week_index / couch_to_5k::WEEKS_PER_BUCKET) as usize).min(last);
    let (run_minutes, walk_minutes, total_minutes) = couch_to_5k::PROGRESSION[bucket];

    (
        RunWalkPattern {
            run_minutes,
            walk_minutes,
        },
        f64::from(total_minutes) * units::SECONDS_PER_MINUTE,
    )
}

fn couch_to_5k(input: &RuleInput) -> WorkoutIntent {
    let (pattern, duration_seconds) = couch_to_5k_bucket(input.week_index);
    let description = format!(
        "Run {} min / Walk {} min",
        pattern.run_minutes, pattern.walk_minutes
    );

    WorkoutIntent {
        workout_type: WorkoutType::Intervals,
        duration_seconds,
        distance_km: None,
        intensity: WorkoutIntensity::Moderate,
        description,
        run_walk: Some(pattern),
    }
}

fn race_training(input: &RuleInput) -> WorkoutIntent {
    let (multiplier, phase_intensity) = match input.phase {
        TrainingPhase::Foundation => (rules::RACE_FOUNDATION_MULTIPLIER, WorkoutIntensity::Low),
        TrainingPhase::Development => (
            rules::RACE_DEVELOPMENT_MULTIPLIER,
            WorkoutIntensity::Moderate,
        ),
        TrainingPhase::Peak => (rules::RACE_PEAK_MULTIPLIER, WorkoutIntensity::High),
    };
    let distance_km = multiplier * input.fitness_level.recommended_distance_km();
    let duration_seconds = distance_km * input.fitness_level.recommended_pace_seconds_per_km();

    let (workout_type, intensity, description) = match (input.weekday, input.phase) {
        (day, _) if day.is_weekend() => {
            (WorkoutType::LongRun, WorkoutIntensity::Low, "Long Easy Run")
        }
        (Weekday::Wednesday, TrainingPhase::Peak) => {
            (WorkoutType::Intervals, phase_intensity, "Race Pace Intervals")
        }
        (Weekday::Wednesday, TrainingPhase::Development) => {
            (WorkoutType::Tempo, phase_intensity, "Race Pace Tempo")
        }
        _ => (WorkoutType::Easy, phase_intensity, "Aerobic Base Run"),
    };

    intent(
        workout_type,
        duration_seconds,
        Some(distance_km),
        intensity,
        description,
    )
}

fn improve_pace(input: &RuleInput) -> WorkoutIntent {
    match (input.weekday, input.phase) {
        (Weekday::Saturday, _) => long_easy_run(input.fitness_level),
        (Weekday::Wednesday, TrainingPhase::Peak) => intent(
            WorkoutType::Intervals,
            rules::SPEED_SESSION_DURATION_SECONDS,
            Some(rules::SPEED_SESSION_DISTANCE_KM),
            WorkoutIntensity::High,
            "Speed Intervals",
        ),
        _ => scaled_base(
            input.fitness_level,
            1.0,
            WorkoutType::Tempo,
            WorkoutIntensity::Moderate,
            "Tempo Run",
        ),
    }
}
