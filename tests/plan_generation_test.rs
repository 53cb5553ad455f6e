// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end properties of generated plans and their calendar view

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use stride_planner::errors::PlanError;
use stride_planner::models::{
    FitnessLevel, PlanSpecification, RunningGoal, TrainingPhase, Weekday, WorkoutType,
};
use stride_planner::training::{generate_plan, generate_workouts, CalendarSchedule};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn eight_week_spec(goal: RunningGoal) -> PlanSpecification {
    PlanSpecification::new(
        goal,
        FitnessLevel::Beginner,
        start(),
        start() + Duration::days(56),
        [Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
    )
}

#[test]
fn test_eight_week_three_day_plan() -> Result<()> {
    let spec = eight_week_spec(RunningGoal::BeginnerFitness);
    let plan = generate_plan(&spec, "runner-1")?;

    assert_eq!(plan.workouts.len(), 24);
    assert_eq!(plan.name, "Beginner Fitness Plan");
    assert_eq!(plan.duration_in_weeks(), 8);

    for workout in &plan.workouts {
        assert!(spec.workout_days.contains(&Weekday::of_date(workout.date)));
        assert!(workout.date >= spec.start_date && workout.date < spec.end_date);
    }
    assert!(plan.workouts.windows(2).all(|pair| pair[0].date < pair[1].date));

    // 8 / 3 = 2 weeks per phase, Peak takes the remaining 4
    let phases: Vec<TrainingPhase> = plan.workouts.iter().map(|w| w.phase).collect();
    assert!(phases[..6].iter().all(|p| *p == TrainingPhase::Foundation));
    assert!(phases[6..12].iter().all(|p| *p == TrainingPhase::Development));
    assert!(phases[12..].iter().all(|p| *p == TrainingPhase::Peak));

    Ok(())
}

#[test]
fn test_generation_is_deterministic() -> Result<()> {
    for goal in RunningGoal::ALL {
        let spec = eight_week_spec(goal);
        let first = serde_json::to_string(&generate_workouts(&spec)?)?;
        let second = serde_json::to_string(&generate_workouts(&spec)?)?;
        assert_eq!(first, second, "{goal:?} produced different workouts");
    }
    Ok(())
}

#[test]
fn test_weekday_order_in_input_does_not_matter() -> Result<()> {
    let forward = eight_week_spec(RunningGoal::RaceTraining);
    let mut backward = forward.clone();
    backward.workout_days = [Weekday::Friday, Weekday::Wednesday, Weekday::Monday]
        .into_iter()
        .collect();

    assert_eq!(generate_workouts(&forward)?, generate_workouts(&backward)?);
    Ok(())
}

#[test]
fn test_plan_starting_midweek_keeps_weekdays() -> Result<()> {
    // Thursday start
    let thursday = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    let spec = PlanSpecification::new(
        RunningGoal::ImprovePace,
        FitnessLevel::Advanced,
        thursday,
        thursday + Duration::days(28),
        [Weekday::Monday, Weekday::Saturday],
    );

    let workouts = generate_workouts(&spec)?;
    assert_eq!(workouts.len(), 8);
    assert_eq!(workouts[0].date, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
    assert_eq!(workouts[0].intent.workout_type, WorkoutType::LongRun);
    assert_eq!(Weekday::of_date(workouts[1].date), Weekday::Monday);
    Ok(())
}

#[test]
fn test_invalid_specifications_produce_no_plan() {
    let mut empty_days = eight_week_spec(RunningGoal::CouchTo5K);
    empty_days.workout_days.clear();
    assert!(matches!(
        generate_plan(&empty_days, "runner-1"),
        Err(PlanError::EmptyWeekdaySet)
    ));

    let mut too_short = eight_week_spec(RunningGoal::CouchTo5K);
    too_short.end_date = too_short.start_date + Duration::days(3);
    assert!(matches!(
        generate_plan(&too_short, "runner-1"),
        Err(PlanError::InvalidWeekCount(0))
    ));
}

#[test]
fn test_couch_to_5k_progresses() -> Result<()> {
    let workouts = generate_workouts(&eight_week_spec(RunningGoal::CouchTo5K))?;

    let first = workouts.first().and_then(|w| w.intent.run_walk).unwrap();
    let last = workouts.last().and_then(|w| w.intent.run_walk).unwrap();
    assert_eq!((first.run_minutes, first.walk_minutes), (1, 2));
    assert_eq!((last.run_minutes, last.walk_minutes), (5, 1));
    assert!(workouts.iter().all(|w| w.intent.workout_type == WorkoutType::Intervals));
    Ok(())
}

#[test]
fn test_calendar_for_plan() -> Result<()> {
    let spec = eight_week_spec(RunningGoal::BeginnerFitness);
    let plan = generate_plan(&spec, "runner-1")?;

    let workout_days = CalendarSchedule::from_workouts(Some(plan.id), &plan.workouts);
    assert_eq!(workout_days.len(), 24);
    assert_eq!(workout_days.item_count(), 24);

    let first_day = workout_days.items_on(start()).unwrap();
    assert_eq!(first_day[0].title, "Easy Run");
    assert_eq!(first_day[0].details, "14:00 \u{2022} Easy");
    assert_eq!(first_day[0].plan_id, Some(plan.id));

    // Placeholders for the whole inclusive range, workouts merged on top
    let full = CalendarSchedule::for_plan(&plan);
    assert_eq!(full.len(), 57);
    assert_eq!(full.item_count(), 24);
    assert!(!full.has_workout_on(start() + Duration::days(1)));
    assert!(full.has_workout_on(start() + Duration::days(2)));

    // A second plan on the same dates is shown alongside the first
    let other = generate_plan(&spec, "runner-1")?;
    let both = full.merge(CalendarSchedule::for_plan(&other));
    assert_eq!(both.items_on(start()).map(|items| items.len()), Some(2));
    Ok(())
}
