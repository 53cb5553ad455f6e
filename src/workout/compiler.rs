// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compilation of interval lists and planned workouts into device-schedulable
//! structured workouts

use super::units::{DistanceUnit, SpeedUnit};
use crate::config::engine_config::CompilerSettings;
use crate::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use crate::errors::{PlanError, PlanResult};
use crate::models::{PlannedWorkout, WorkoutType};
use serde::{Deserialize, Serialize};

/// Display name used when the caller gives none
pub const DEFAULT_WORKOUT_NAME: &str = "Planned Run";

/// Closed pace interval in min/km; `fastest <= slowest`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    pub fastest: f64,
    pub slowest: f64,
}

impl PaceRange {
    pub fn new(fastest: f64, slowest: f64) -> PlanResult<Self> {
        if !(fastest > 0.0 && fastest <= slowest && slowest.is_finite()) {
            return Err(PlanError::InvalidInterval(format!(
                "pace range {fastest}..={slowest} min/km is not a positive closed interval"
            )));
        }
        Ok(Self { fastest, slowest })
    }

    /// `center ± half_width`
    pub fn around(center: f64, half_width: f64) -> PlanResult<Self> {
        Self::new(center - half_width, center + half_width)
    }

    pub fn average(&self) -> f64 {
        (self.fastest + self.slowest) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPurpose {
    Work,
    Recovery,
}

/// One caller-specified interval: a distance at a target pace, repeated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInterval {
    pub purpose: StepPurpose,
    pub distance_km: f64,
    pub target_pace: PaceRange,
    pub iterations: u32,
}

impl WorkoutInterval {
    pub fn new(purpose: StepPurpose, distance_km: f64, target_pace: PaceRange, iterations: u32) -> Self {
        Self {
            purpose,
            distance_km,
            target_pace,
            iterations,
        }
    }

    fn validate(&self) -> PlanResult<()> {
        if !(self.distance_km > 0.0 && self.distance_km.is_finite()) {
            return Err(PlanError::InvalidInterval(format!(
                "distance must be positive, got {} km",
                self.distance_km
            )));
        }
        if self.iterations == 0 {
            return Err(PlanError::InvalidInterval(
                "iteration count must be at least 1".to_string(),
            ));
        }
        // Re-check in case the range was built as a struct literal
        PaceRange::new(self.target_pace.fastest, self.target_pace.slowest).map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutGoal {
    Distance { value: f64, unit: DistanceUnit },
    Time { seconds: f64 },
}

/// Speed band the device alerts on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedAlert {
    pub min: f64,
    pub max: f64,
    pub unit: SpeedUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStep {
    pub goal: WorkoutGoal,
    pub alert: Option<SpeedAlert>,
}

impl WorkoutStep {
    pub fn timed(seconds: f64) -> Self {
        Self {
            goal: WorkoutGoal::Time { seconds },
            alert: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalStep {
    pub purpose: StepPurpose,
    pub step: WorkoutStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBlock {
    pub steps: Vec<IntervalStep>,
    pub iterations: u32,
}

/// Device-schedulable decomposition of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredWorkout {
    pub display_name: String,
    pub warmup: Option<WorkoutStep>,
    pub blocks: Vec<IntervalBlock>,
    pub cooldown: Option<WorkoutStep>,
}

/// Warmup/cooldown selection for a compiled workout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Segment {
    /// Use the configured duration
    #[default]
    Default,
    Minutes(f64),
    Omit,
}

/// Builds [`StructuredWorkout`]s in the unit system of the target device
#[derive(Debug, Clone, Default)]
pub struct IntervalCompiler {
    settings: CompilerSettings,
}

impl IntervalCompiler {
    pub fn new(settings: CompilerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Speed band for a pace range: average pace converted to speed, ± the flat tolerance
    pub fn speed_alert(&self, pace: &PaceRange) -> SpeedAlert {
        let units = self.settings.unit_system;
        let speed = units.speed_for_pace(pace.average());
        SpeedAlert {
            min: speed - self.settings.speed_tolerance,
            max: speed + self.settings.speed_tolerance,
            unit: units.speed_unit(),
        }
    }

    /// One block per interval with a single distance-goal step
    pub fn compile_block(&self, interval: &WorkoutInterval) -> IntervalBlock {
        let units = self.settings.unit_system;
        let step = WorkoutStep {
            goal: WorkoutGoal::Distance {
                value: units.distance_from_km(interval.distance_km),
                unit: units.distance_unit(),
            },
            alert: Some(self.speed_alert(&interval.target_pace)),
        };

        IntervalBlock {
            steps: vec![IntervalStep {
                purpose: interval.purpose,
                step,
            }],
            iterations: interval.iterations,
        }
    }

    /// Compile an ordered interval list with optional warmup and cooldown
    pub fn compile(
        &self,
        name: &str,
        intervals: &[WorkoutInterval],
        warmup: Segment,
        cooldown: Segment,
    ) -> PlanResult<StructuredWorkout> {
        if intervals.is_empty() {
            return Err(PlanError::InvalidInterval(
                "a workout needs at least one interval".to_string(),
            ));
        }
        for interval in intervals {
            interval.validate()?;
        }

        Ok(StructuredWorkout {
            display_name: display_name(name),
            warmup: self.segment_step(warmup, self.settings.warmup_minutes)?,
            blocks: intervals.iter().map(|i| self.compile_block(i)).collect(),
            cooldown: self.segment_step(cooldown, self.settings.cooldown_minutes)?,
        })
    }

    /// Single interval at `target_pace` ± the simple-run half width
    pub fn simple_run(&self, name: &str, distance_km: f64, target_pace: f64) -> PlanResult<StructuredWorkout> {
        let interval = WorkoutInterval::new(
            StepPurpose::Work,
            distance_km,
            PaceRange::around(target_pace, self.settings.simple_run_pace_half_width)?,
            1,
        );
        self.compile(name, &[interval], Segment::Default, Segment::Default)
    }

    /// Work block followed by a recovery block, each with its own repeat count
    pub fn interval_training(
        &self,
        name: &str,
        work: WorkoutInterval,
        recovery: WorkoutInterval,
    ) -> PlanResult<StructuredWorkout> {
        self.compile(name, &[work, recovery], Segment::Default, Segment::Default)
    }

    /// `progressions` single-repeat segments, each `pace_increase` min/km faster than the last
    pub fn progressive_run(
        &self,
        name: &str,
        segment_distance_km: f64,
        base_pace: f64,
        progressions: u32,
        pace_increase: Option<f64>,
    ) -> PlanResult<StructuredWorkout> {
        let increase = pace_increase.unwrap_or(self.settings.progressive_pace_increment);
        let half_width = self.settings.progressive_pace_half_width;

        let intervals = (0..progressions)
            .map(|i| {
                let pace = base_pace - f64::from(i) * increase;
                PaceRange::around(pace, half_width).map(|range| {
                    WorkoutInterval::new(StepPurpose::Work, segment_distance_km, range, 1)
                })
            })
            .collect::<PlanResult<Vec<_>>>()?;

        self.compile(name, &intervals, Segment::Default, Segment::Default)
    }

    /// Device workout for a generated plan entry.
    ///
    /// Run/walk sessions alternate timed run and walk steps to fill the
    /// duration; other interval sessions use the configured repeat structure;
    /// everything else is one work step on distance, or on time when the
    /// distance is pace dependent.
    pub fn compile_planned(&self, workout: &PlannedWorkout) -> StructuredWorkout {
        let intent = &workout.intent;
        let units = self.settings.unit_system;

        let block = match (intent.workout_type, intent.run_walk) {
            (_, Some(pattern)) => {
                let cycle_minutes = pattern.run_minutes + pattern.walk_minutes;
                let cycles = (intent.duration_seconds / SECONDS_PER_MINUTE) as u32 / cycle_minutes.max(1);
                IntervalBlock {
                    steps: vec![
                        IntervalStep {
                            purpose: StepPurpose::Work,
                            step: WorkoutStep::timed(f64::from(pattern.run_minutes) * SECONDS_PER_MINUTE),
                        },
                        IntervalStep {
                            purpose: StepPurpose::Recovery,
                            step: WorkoutStep::timed(f64::from(pattern.walk_minutes) * SECONDS_PER_MINUTE),
                        },
                    ],
                    iterations: cycles.max(1),
                }
            }
            (WorkoutType::Intervals, None) => {
                let repeat = &self.settings.default_interval;
                IntervalBlock {
                    steps: vec![
                        IntervalStep {
                            purpose: StepPurpose::Work,
                            step: WorkoutStep {
                                goal: WorkoutGoal::Distance {
                                    value: units.distance_from_km(repeat.work_meters / METERS_PER_KM),
                                    unit: units.distance_unit(),
                                },
                                alert: None,
                            },
                        },
                        IntervalStep {
                            purpose: StepPurpose::Recovery,
                            step: WorkoutStep::timed(repeat.recovery_seconds),
                        },
                    ],
                    iterations: repeat.repeats,
                }
            }
            _ => {
                let goal = match intent.distance_km {
                    Some(km) => WorkoutGoal::Distance {
                        value: units.distance_from_km(km),
                        unit: units.distance_unit(),
                    },
                    None => WorkoutGoal::Time {
                        seconds: intent.duration_seconds,
                    },
                };
                IntervalBlock {
                    steps: vec![IntervalStep {
                        purpose: StepPurpose::Work,
                        step: WorkoutStep { goal, alert: None },
                    }],
                    iterations: 1,
                }
            }
        };

        StructuredWorkout {
            display_name: workout.title().to_string(),
            warmup: None,
            blocks: vec![block],
            cooldown: None,
        }
    }

    fn segment_step(&self, segment: Segment, default_minutes: f64) -> PlanResult<Option<WorkoutStep>> {
        let minutes = match segment {
            Segment::Omit => return Ok(None),
            Segment::Default => default_minutes,
            Segment::Minutes(minutes) => minutes,
        };
        if !(minutes >= 0.0 && minutes.is_finite()) {
            return Err(PlanError::InvalidInterval(format!(
                "segment duration must be non-negative, got {minutes} min"
            )));
        }
        Ok(Some(WorkoutStep::timed(minutes * SECONDS_PER_MINUTE)))
    }
}

fn display_name(name: &str) -> String {
    if name.trim().is_empty() {
        DEFAULT_WORKOUT_NAME.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RunWalkPattern, TrainingPhase, WorkoutIntensity, WorkoutIntent};
    use crate::workout::units::UnitSystem;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn distance_of(step: &WorkoutStep) -> f64 {
        match step.goal {
            WorkoutGoal::Distance { value, .. } => value,
            WorkoutGoal::Time { .. } => panic!("expected a distance goal"),
        }
    }

    fn seconds_of(step: &WorkoutStep) -> f64 {
        match step.goal {
            WorkoutGoal::Time { seconds } => seconds,
            WorkoutGoal::Distance { .. } => panic!("expected a time goal"),
        }
    }

    fn planned(workout_type: WorkoutType, distance_km: Option<f64>, run_walk: Option<RunWalkPattern>) -> PlannedWorkout {
        PlannedWorkout::new(
            &Uuid::NAMESPACE_OID,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            0,
            TrainingPhase::Foundation,
            WorkoutIntent {
                workout_type,
                duration_seconds: 1800.0,
                distance_km,
                intensity: WorkoutIntensity::Moderate,
                description: "test".to_string(),
                run_walk,
            },
        )
    }

    #[test]
    fn test_simple_run() {
        let compiler = IntervalCompiler::default();
        let workout = compiler.simple_run("5K Run", 5.0, 5.0).unwrap();

        assert_eq!(workout.display_name, "5K Run");
        assert_eq!(workout.blocks.len(), 1);
        assert_eq!(workout.blocks[0].iterations, 1);

        let step = &workout.blocks[0].steps[0];
        assert_eq!(step.purpose, StepPurpose::Work);
        assert!(close(distance_of(&step.step), 5.0 * 0.621371));

        let alert = step.step.alert.unwrap();
        let speed = 37.28 / 5.0;
        assert!(close(alert.min, speed - 1.0));
        assert!(close(alert.max, speed + 1.0));
        assert_eq!(alert.unit, SpeedUnit::MilesPerHour);

        assert!(close(seconds_of(&workout.warmup.unwrap()), 300.0));
        assert!(close(seconds_of(&workout.cooldown.unwrap()), 300.0));
    }

    #[test]
    fn test_interval_training_keeps_iteration_counts() {
        let compiler = IntervalCompiler::default();
        let work = WorkoutInterval::new(StepPurpose::Work, 0.4, PaceRange::new(4.0, 4.5).unwrap(), 8);
        let recovery =
            WorkoutInterval::new(StepPurpose::Recovery, 0.4, PaceRange::new(6.0, 6.5).unwrap(), 8);

        let workout = compiler.interval_training("8x400m", work, recovery).unwrap();
        assert_eq!(workout.blocks.len(), 2);
        assert_eq!(workout.blocks[0].iterations, 8);
        assert_eq!(workout.blocks[1].iterations, 8);
        assert_eq!(workout.blocks[1].steps[0].purpose, StepPurpose::Recovery);

        let work_alert = workout.blocks[0].steps[0].step.alert.unwrap();
        assert!(close(work_alert.max - work_alert.min, 2.0));
        assert!(close(work_alert.min, 37.28 / 4.25 - 1.0));
    }

    #[test]
    fn test_progressive_run_gets_faster() {
        let compiler = IntervalCompiler::default();
        let workout = compiler
            .progressive_run("Progressive 5K", 1.0, 5.5, 5, None)
            .unwrap();

        assert_eq!(workout.blocks.len(), 5);
        let speeds: Vec<f64> = workout
            .blocks
            .iter()
            .map(|block| {
                assert_eq!(block.iterations, 1);
                let alert = block.steps[0].step.alert.unwrap();
                (alert.min + alert.max) / 2.0
            })
            .collect();
        assert!(speeds.windows(2).all(|pair| pair[1] > pair[0]));
        assert!(close(speeds[0], 37.28 / 5.5));
        assert!(close(speeds[4], 37.28 / 3.5));
    }

    #[test]
    fn test_progressive_run_rejects_non_positive_pace() {
        let compiler = IntervalCompiler::default();
        let result = compiler.progressive_run("Too fast", 1.0, 2.0, 5, Some(0.5));
        assert!(matches!(result, Err(PlanError::InvalidInterval(_))));
    }

    #[test]
    fn test_compile_validation() {
        let compiler = IntervalCompiler::default();
        assert!(compiler.compile("", &[], Segment::Default, Segment::Default).is_err());

        let zero_reps = WorkoutInterval::new(StepPurpose::Work, 1.0, PaceRange::new(5.0, 5.5).unwrap(), 0);
        assert!(compiler
            .compile("", &[zero_reps], Segment::Default, Segment::Default)
            .is_err());

        assert!(PaceRange::new(6.0, 5.0).is_err());
    }

    #[test]
    fn test_segments_can_be_overridden_or_omitted() {
        let compiler = IntervalCompiler::default();
        let interval = WorkoutInterval::new(StepPurpose::Work, 3.0, PaceRange::new(5.0, 6.0).unwrap(), 1);
        let workout = compiler
            .compile("", &[interval], Segment::Minutes(10.0), Segment::Omit)
            .unwrap();

        assert_eq!(workout.display_name, DEFAULT_WORKOUT_NAME);
        assert!(close(seconds_of(&workout.warmup.unwrap()), 600.0));
        assert!(workout.cooldown.is_none());
    }

    #[test]
    fn test_metric_device_skips_conversion() {
        let compiler = IntervalCompiler::new(CompilerSettings {
            unit_system: UnitSystem::Metric,
            ..CompilerSettings::default()
        });
        let workout = compiler.simple_run("", 5.0, 6.0).unwrap();
        let step = &workout.blocks[0].steps[0].step;

        assert!(close(distance_of(step), 5.0));
        let alert = step.alert.unwrap();
        assert!(close(alert.min, 9.0));
        assert!(close(alert.max, 11.0));
        assert_eq!(alert.unit, SpeedUnit::KilometersPerHour);
    }

    #[test]
    fn test_compile_planned_workouts() {
        let compiler = IntervalCompiler::default();

        let easy = compiler.compile_planned(&planned(WorkoutType::Easy, Some(5.0), None));
        assert_eq!(easy.display_name, "Easy Run");
        assert!(close(distance_of(&easy.blocks[0].steps[0].step), 5.0 * 0.621371));
        assert!(easy.warmup.is_none());

        let timed = compiler.compile_planned(&planned(WorkoutType::Tempo, None, None));
        assert!(close(seconds_of(&timed.blocks[0].steps[0].step), 1800.0));

        let repeats = compiler.compile_planned(&planned(WorkoutType::Intervals, Some(5.0), None));
        let block = &repeats.blocks[0];
        assert_eq!(block.iterations, 8);
        assert!(close(distance_of(&block.steps[0].step), 0.4 * 0.621371));
        assert!(close(seconds_of(&block.steps[1].step), 60.0));

        let run_walk = compiler.compile_planned(&planned(
            WorkoutType::Intervals,
            None,
            Some(RunWalkPattern {
                run_minutes: 1,
                walk_minutes: 2,
            }),
        ));
        let block = &run_walk.blocks[0];
        assert_eq!(block.iterations, 10);
        assert!(close(seconds_of(&block.steps[0].step), 60.0));
        assert!(close(seconds_of(&block.steps[1].step), 120.0));
    }
}
