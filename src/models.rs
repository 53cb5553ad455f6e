// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures shared by the plan generation engine, the interval
//! compiler and the persistence/device collaborators.
//!
//! ## Core Models
//!
//! - [`PlanSpecification`]: caller-supplied request for a new plan
//! - [`WorkoutIntent`]: an unscheduled description of a single workout
//! - [`PlannedWorkout`]: a workout intent pinned to a calendar date
//! - [`TrainingPlan`]: the persisted result of one generation pass
//!
//! Persisted field names are snake_case and dates are ISO-8601, matching the
//! `training_plans` record layout used by the persistence client.

use crate::constants::fitness;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// What the runner wants to achieve with the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunningGoal {
    /// Build general fitness through running
    #[serde(rename = "beginner_fitness")]
    BeginnerFitness,
    /// Train to run a first 5K with run/walk intervals
    #[serde(rename = "couch_to_5k")]
    CouchTo5K,
    /// Prepare for a specific race
    #[serde(rename = "race_training")]
    RaceTraining,
    /// Get faster at the current distance
    #[serde(rename = "improve_pace")]
    ImprovePace,
}

impl RunningGoal {
    /// All goals, in display order
    pub const ALL: [RunningGoal; 4] = [
        RunningGoal::BeginnerFitness,
        RunningGoal::CouchTo5K,
        RunningGoal::RaceTraining,
        RunningGoal::ImprovePace,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            RunningGoal::BeginnerFitness => "General Fitness",
            RunningGoal::CouchTo5K => "Couch to 5K",
            RunningGoal::RaceTraining => "Race Training",
            RunningGoal::ImprovePace => "Improve Pace",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RunningGoal::BeginnerFitness => "Build general fitness through running",
            RunningGoal::CouchTo5K => "Train to run your first 5K",
            RunningGoal::RaceTraining => "Prepare for a specific race",
            RunningGoal::ImprovePace => "Get faster at your current distance",
        }
    }
}

/// Self-reported running experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to running
    Beginner,
    /// Runs occasionally
    Intermediate,
    /// Regular runner
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    /// Baseline session distance in kilometers
    pub fn recommended_distance_km(&self) -> f64 {
        match self {
            FitnessLevel::Beginner => fitness::BEGINNER_DISTANCE_KM,
            FitnessLevel::Intermediate => fitness::INTERMEDIATE_DISTANCE_KM,
            FitnessLevel::Advanced => fitness::ADVANCED_DISTANCE_KM,
        }
    }

    /// Baseline pace in seconds per kilometer
    pub fn recommended_pace_seconds_per_km(&self) -> f64 {
        match self {
            FitnessLevel::Beginner => fitness::BEGINNER_PACE_SECONDS_PER_KM,
            FitnessLevel::Intermediate => fitness::INTERMEDIATE_PACE_SECONDS_PER_KM,
            FitnessLevel::Advanced => fitness::ADVANCED_PACE_SECONDS_PER_KM,
        }
    }

    /// Baseline session duration in seconds (distance x pace)
    pub fn recommended_duration_seconds(&self) -> f64 {
        self.recommended_distance_km() * self.recommended_pace_seconds_per_km()
    }

    /// Workout days suggested when the runner has not picked any
    pub fn recommended_workout_days(&self) -> BTreeSet<Weekday> {
        let days: &[Weekday] = match self {
            FitnessLevel::Beginner => &[Weekday::Monday, Weekday::Wednesday, Weekday::Saturday],
            FitnessLevel::Intermediate => &[
                Weekday::Monday,
                Weekday::Wednesday,
                Weekday::Friday,
                Weekday::Sunday,
            ],
            FitnessLevel::Advanced => &[
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Sunday,
            ],
        };
        days.iter().copied().collect()
    }

    pub fn title(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "New to Running",
            FitnessLevel::Intermediate => "Run Occasionally",
            FitnessLevel::Advanced => "Regular Runner",
        }
    }
}

/// Day of the week, ordered Monday first.
///
/// Internal date arithmetic uses [`Weekday::ordinal`] exclusively (Monday=0 ..
/// Sunday=6). Device calendar APIs that count Sunday=1 .. Saturday=7 go through
/// [`Weekday::calendar_api_ordinal`] and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based ordinal, Monday=0 .. Sunday=6
    pub fn ordinal(&self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Sunday=1 .. Saturday=7 numbering used by platform calendar APIs
    pub fn calendar_api_ordinal(&self) -> u32 {
        (self.ordinal() + 1) % 7 + 1
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn of_date(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// Preferred time of day for workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// Training stage a week belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPhase {
    /// Build endurance and consistency
    Foundation,
    /// Increase distance and intensity
    Development,
    /// Fine-tune and prepare for the goal
    Peak,
}

impl TrainingPhase {
    pub fn focus(&self) -> &'static str {
        match self {
            TrainingPhase::Foundation => "Build endurance and consistency",
            TrainingPhase::Development => "Increase distance and intensity",
            TrainingPhase::Peak => "Fine-tune and prepare for goal",
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrainingPhase::Foundation => "Foundation",
            TrainingPhase::Development => "Development",
            TrainingPhase::Peak => "Peak",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Easy,
    LongRun,
    Tempo,
    Intervals,
    Recovery,
}

impl WorkoutType {
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "Easy Run",
            WorkoutType::LongRun => "Long Run",
            WorkoutType::Tempo => "Tempo Run",
            WorkoutType::Intervals => "Interval Training",
            WorkoutType::Recovery => "Recovery Run",
        }
    }

    /// Icon identifier used by calendar display collaborators
    pub fn icon_name(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "figure.run",
            WorkoutType::LongRun => "arrow.right.circle",
            WorkoutType::Tempo => "speedometer",
            WorkoutType::Intervals => "timer",
            WorkoutType::Recovery => "heart.circle",
        }
    }
}

/// Coarse three-level effort classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutIntensity {
    Low,
    Moderate,
    High,
}

impl WorkoutIntensity {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutIntensity::Low => "Easy",
            WorkoutIntensity::Moderate => "Moderate",
            WorkoutIntensity::High => "Hard",
        }
    }
}

/// Alternating run/walk minutes for run/walk interval sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunWalkPattern {
    pub run_minutes: u32,
    pub walk_minutes: u32,
}

/// Abstract, unscheduled description of a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutIntent {
    pub workout_type: WorkoutType,
    /// Planned duration in seconds
    pub duration_seconds: f64,
    /// Planned distance in kilometers; `None` when the distance depends on pace
    pub distance_km: Option<f64>,
    pub intensity: WorkoutIntensity,
    /// Display-only label
    pub description: String,
    /// Present for run/walk sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_walk: Option<RunWalkPattern>,
}

/// A workout intent pinned to a calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    /// Derived from the date and slot, so regeneration reproduces it
    pub id: Uuid,
    pub date: NaiveDate,
    pub week_index: u32,
    pub phase: TrainingPhase,
    #[serde(flatten)]
    pub intent: WorkoutIntent,
}

impl PlannedWorkout {
    /// `namespace` scopes the id to one plan; see [`PlanSpecification::workout_namespace`]
    pub fn new(
        namespace: &Uuid,
        date: NaiveDate,
        week_index: u32,
        phase: TrainingPhase,
        intent: WorkoutIntent,
    ) -> Self {
        let id = Uuid::new_v5(namespace, date.to_string().as_bytes());
        Self {
            id,
            date,
            week_index,
            phase,
            intent,
        }
    }

    pub fn title(&self) -> &'static str {
        self.intent.workout_type.title()
    }

    /// Short summary line, e.g. "30:00 • Easy"
    pub fn details(&self) -> String {
        format!(
            "{} \u{2022} {}",
            format_time(self.intent.duration_seconds),
            self.intent.intensity.label()
        )
    }
}

/// Caller-supplied request for a training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSpecification {
    pub goal: RunningGoal,
    pub fitness_level: FitnessLevel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub workout_days: BTreeSet<Weekday>,
    pub preferred_time: TimeOfDay,
    /// Current 5K time in seconds
    #[serde(default)]
    pub current_5k_time: Option<f64>,
    /// Target race distance in kilometers
    #[serde(default)]
    pub target_race_distance: Option<f64>,
    /// Target race time in seconds
    #[serde(default)]
    pub target_race_time: Option<f64>,
}

impl PlanSpecification {
    pub fn new(
        goal: RunningGoal,
        fitness_level: FitnessLevel,
        start_date: NaiveDate,
        end_date: NaiveDate,
        workout_days: impl IntoIterator<Item = Weekday>,
    ) -> Self {
        Self {
            goal,
            fitness_level,
            start_date,
            end_date,
            workout_days: workout_days.into_iter().collect(),
            preferred_time: TimeOfDay::Morning,
            current_5k_time: None,
            target_race_distance: None,
            target_race_time: None,
        }
    }

    pub fn with_preferred_time(mut self, preferred_time: TimeOfDay) -> Self {
        self.preferred_time = preferred_time;
        self
    }

    pub fn with_race(mut self, distance_km: f64, target_time_seconds: f64) -> Self {
        self.target_race_distance = Some(distance_km);
        self.target_race_time = Some(target_time_seconds);
        self
    }

    pub fn with_current_5k_time(mut self, seconds: f64) -> Self {
        self.current_5k_time = Some(seconds);
        self
    }

    /// Whole weeks between start and end date
    pub fn total_weeks(&self) -> i64 {
        (self.end_date - self.start_date).num_days().div_euclid(7)
    }

    /// Id namespace for this specification's workouts.
    ///
    /// Derived from goal, level, date range and weekdays, so regenerating the
    /// same specification reproduces the ids while other plans get their own.
    pub fn workout_namespace(&self) -> Uuid {
        let days: Vec<String> = self.workout_days.iter().map(|d| d.ordinal().to_string()).collect();
        let name = format!(
            "{:?}|{:?}|{}|{}|{}",
            self.goal,
            self.fitness_level,
            self.start_date,
            self.end_date,
            days.join(",")
        );
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
    }

    /// Human readable plan name derived from the goal
    pub fn plan_name(&self) -> String {
        match self.goal {
            RunningGoal::BeginnerFitness => "Beginner Fitness Plan".to_string(),
            RunningGoal::CouchTo5K => "Couch to 5K Plan".to_string(),
            RunningGoal::RaceTraining => match self.target_race_distance {
                Some(distance) => format!("{} Race Plan", format_race_distance(distance)),
                None => "Race Plan".to_string(),
            },
            RunningGoal::ImprovePace => "Speed Improvement Plan".to_string(),
        }
    }
}

/// Persisted result of one generation pass.
///
/// Never partially mutated: edits go through [`TrainingPlan::with_workouts`],
/// which yields a new value carrying a whole replacement workout list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub goal: RunningGoal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub fitness_level: FitnessLevel,
    pub workout_days: BTreeSet<Weekday>,
    pub preferred_time: TimeOfDay,
    pub workouts: Vec<PlannedWorkout>,
    pub current_5k_time: Option<f64>,
    pub target_race_distance: Option<f64>,
    pub target_race_time: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingPlan {
    /// Stamp identity and timestamps onto a generated workout list
    pub fn new(spec: &PlanSpecification, user_id: String, workouts: Vec<PlannedWorkout>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: spec.plan_name(),
            goal: spec.goal,
            start_date: spec.start_date,
            end_date: spec.end_date,
            fitness_level: spec.fitness_level,
            workout_days: spec.workout_days.clone(),
            preferred_time: spec.preferred_time,
            workouts,
            current_5k_time: spec.current_5k_time,
            target_race_distance: spec.target_race_distance,
            target_race_time: spec.target_race_time,
            created_at: now,
            updated_at: now,
        }
    }

    /// The specification this plan was generated from
    pub fn specification(&self) -> PlanSpecification {
        PlanSpecification {
            goal: self.goal,
            fitness_level: self.fitness_level,
            start_date: self.start_date,
            end_date: self.end_date,
            workout_days: self.workout_days.clone(),
            preferred_time: self.preferred_time,
            current_5k_time: self.current_5k_time,
            target_race_distance: self.target_race_distance,
            target_race_time: self.target_race_time,
        }
    }

    /// Copy of this plan with the workout list replaced wholesale
    pub fn with_workouts(&self, workouts: Vec<PlannedWorkout>) -> Self {
        Self {
            workouts,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    pub fn duration_in_weeks(&self) -> i64 {
        (self.end_date - self.start_date).num_days().div_euclid(7)
    }
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Race distances get their common names, everything else whole kilometres as "10K"
pub fn format_race_distance(distance_km: f64) -> String {
    if (distance_km - 21.1).abs() < f64::EPSILON {
        "Half Marathon".to_string()
    } else if (distance_km - 42.2).abs() < f64::EPSILON {
        "Marathon".to_string()
    } else {
        format!("{}K", distance_km.trunc() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_ordinals() {
        assert_eq!(Weekday::Monday.ordinal(), 0);
        assert_eq!(Weekday::Sunday.ordinal(), 6);
        assert_eq!(Weekday::Sunday.calendar_api_ordinal(), 1);
        assert_eq!(Weekday::Monday.calendar_api_ordinal(), 2);
        assert_eq!(Weekday::Saturday.calendar_api_ordinal(), 7);
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_ordinal(day.ordinal()), Some(day));
        }
        assert_eq!(Weekday::from_ordinal(7), None);
    }

    #[test]
    fn test_weekday_of_date() {
        // 2024-01-01 was a Monday
        assert_eq!(Weekday::of_date(date(2024, 1, 1)), Weekday::Monday);
        assert_eq!(Weekday::of_date(date(2024, 1, 7)), Weekday::Sunday);
    }

    #[test]
    fn test_fitness_baselines() {
        assert_eq!(FitnessLevel::Beginner.recommended_distance_km(), 2.0);
        assert_eq!(FitnessLevel::Intermediate.recommended_duration_seconds(), 1800.0);
        assert_eq!(FitnessLevel::Advanced.recommended_pace_seconds_per_km(), 300.0);
        assert_eq!(FitnessLevel::Beginner.recommended_workout_days().len(), 3);
        assert_eq!(FitnessLevel::Advanced.recommended_workout_days().len(), 5);
    }

    #[test]
    fn test_workout_ids_are_scoped_to_plan() {
        let intent = WorkoutIntent {
            workout_type: WorkoutType::Easy,
            duration_seconds: 840.0,
            distance_km: Some(2.0),
            intensity: WorkoutIntensity::Low,
            description: "Base Building Run".to_string(),
            run_walk: None,
        };
        let spec = PlanSpecification::new(
            RunningGoal::BeginnerFitness,
            FitnessLevel::Beginner,
            date(2024, 1, 1),
            date(2024, 2, 26),
            [Weekday::Monday],
        );
        let other = PlanSpecification {
            goal: RunningGoal::ImprovePace,
            ..spec.clone()
        };

        let day = date(2024, 1, 8);
        let first = PlannedWorkout::new(&spec.workout_namespace(), day, 1, TrainingPhase::Foundation, intent.clone());
        let again = PlannedWorkout::new(&spec.workout_namespace(), day, 1, TrainingPhase::Foundation, intent.clone());
        let elsewhere = PlannedWorkout::new(&other.workout_namespace(), day, 1, TrainingPhase::Foundation, intent);

        assert_eq!(first.id, again.id);
        assert_ne!(first.id, elsewhere.id);
    }

    #[test]
    fn test_plan_names() {
        let start = date(2024, 1, 1);
        let end = date(2024, 3, 1);
        let spec = PlanSpecification::new(
            RunningGoal::RaceTraining,
            FitnessLevel::Intermediate,
            start,
            end,
            [Weekday::Monday],
        );
        assert_eq!(spec.plan_name(), "Race Plan");
        assert_eq!(spec.clone().with_race(21.1, 7200.0).plan_name(), "Half Marathon Race Plan");
        assert_eq!(spec.clone().with_race(10.0, 3000.0).plan_name(), "10K Race Plan");
        assert_eq!(spec.clone().with_race(5.5, 1800.0).plan_name(), "5K Race Plan");

        let c25k = PlanSpecification { goal: RunningGoal::CouchTo5K, ..spec };
        assert_eq!(c25k.plan_name(), "Couch to 5K Plan");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1800.0), "30:00");
        assert_eq!(format_time(65.4), "1:05");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn test_plan_serialization_uses_record_field_names() {
        let spec = PlanSpecification::new(
            RunningGoal::CouchTo5K,
            FitnessLevel::Beginner,
            date(2024, 1, 1),
            date(2024, 2, 26),
            [Weekday::Monday, Weekday::Thursday],
        );
        let plan = TrainingPlan::new(&spec, "user-1".to_string(), vec![]);
        let json = serde_json::to_value(&plan).unwrap();

        for field in [
            "id",
            "user_id",
            "name",
            "goal",
            "start_date",
            "end_date",
            "fitness_level",
            "workout_days",
            "preferred_time",
            "workouts",
            "current_5k_time",
            "target_race_distance",
            "target_race_time",
            "created_at",
            "updated_at",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["goal"], "couch_to_5k");
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(json["workout_days"], serde_json::json!(["monday", "thursday"]));
    }

    #[test]
    fn test_with_workouts_replaces_whole_list() {
        let spec = PlanSpecification::new(
            RunningGoal::BeginnerFitness,
            FitnessLevel::Beginner,
            date(2024, 1, 1),
            date(2024, 1, 29),
            [Weekday::Monday],
        );
        let intent = WorkoutIntent {
            workout_type: WorkoutType::Easy,
            duration_seconds: 840.0,
            distance_km: Some(2.0),
            intensity: WorkoutIntensity::Low,
            description: "Base Building Run".to_string(),
            run_walk: None,
        };
        let before = TrainingPlan::new(
            &spec,
            "user-1".to_string(),
            vec![PlannedWorkout::new(&spec.workout_namespace(), date(2024, 1, 1), 0, TrainingPhase::Peak, intent.clone())],
        );
        let edited = before.with_workouts(vec![]);

        assert_eq!(before.workouts.len(), 1);
        assert!(edited.workouts.is_empty());
        assert_eq!(edited.id, before.id);
        assert_eq!(edited.created_at, before.created_at);
        assert_eq!(edited.specification(), spec);
    }
}
