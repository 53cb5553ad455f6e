// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Calendar expansion of weekly workout slots and the date-keyed display schedule

use crate::models::{PlannedWorkout, TrainingPlan, Weekday, WorkoutIntensity, WorkoutType};
use crate::services::events::PlanEvent;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// One (week, weekday) slot resolved to an absolute date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledSlot {
    pub week_index: u32,
    pub weekday: Weekday,
    pub date: NaiveDate,
}

/// Days from `start_date` to the first occurrence of `weekday` on or after it
pub fn weekday_offset(start_date: NaiveDate, weekday: Weekday) -> i64 {
    let start = Weekday::of_date(start_date).ordinal() as i64;
    (weekday.ordinal() as i64 - start).rem_euclid(7)
}

/// Expand the selected weekdays across `total_weeks` weeks starting at `start_date`.
///
/// Week `n` covers `start_date + 7n .. start_date + 7n + 6`, so every slot lands
/// on its own weekday whatever day the plan starts on. Slots come back in date order.
pub fn expand_slots(
    start_date: NaiveDate,
    workout_days: &BTreeSet<Weekday>,
    total_weeks: u32,
) -> Vec<ScheduledSlot> {
    let mut slots: Vec<ScheduledSlot> = (0..total_weeks)
        .flat_map(|week_index| {
            workout_days.iter().map(move |&weekday| ScheduledSlot {
                week_index,
                weekday,
                date: start_date
                    + Duration::days(i64::from(week_index) * 7 + weekday_offset(start_date, weekday)),
            })
        })
        .collect();
    slots.sort_by_key(|slot| slot.date);
    slots
}

/// Display item shown on a calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarItem {
    /// Owning plan, when the item came from a stored plan
    pub plan_id: Option<Uuid>,
    pub workout_id: Uuid,
    pub title: String,
    pub details: String,
    pub icon_name: String,
    pub workout_type: WorkoutType,
    pub intensity: WorkoutIntensity,
}

impl CalendarItem {
    pub fn from_workout(plan_id: Option<Uuid>, workout: &PlannedWorkout) -> Self {
        Self {
            plan_id,
            workout_id: workout.id,
            title: workout.title().to_string(),
            details: workout.details(),
            icon_name: workout.intent.workout_type.icon_name().to_string(),
            workout_type: workout.intent.workout_type,
            intensity: workout.intent.intensity,
        }
    }
}

/// Collision rule for two item lists on the same date: concatenate, existing first
pub fn merge_day_items(mut current: Vec<CalendarItem>, new: Vec<CalendarItem>) -> Vec<CalendarItem> {
    current.extend(new);
    current
}

/// Date-keyed display schedule.
///
/// A date mapped to an empty list is a rest day inside a plan's range; a date
/// missing from the map is outside every known plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarSchedule {
    days: BTreeMap<NaiveDate, Vec<CalendarItem>>,
}

impl CalendarSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every date in `[start, end]` with an empty placeholder list
    pub fn empty_range(start: NaiveDate, end: NaiveDate) -> Self {
        let days = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| (date, Vec::new()))
            .collect();
        Self { days }
    }

    /// Group workouts by date without placeholders
    pub fn from_workouts(plan_id: Option<Uuid>, workouts: &[PlannedWorkout]) -> Self {
        workouts.iter().fold(Self::new(), |schedule, workout| {
            schedule.with_items(workout.date, vec![CalendarItem::from_workout(plan_id, workout)])
        })
    }

    /// Placeholders for the whole plan range overlaid with its workouts
    pub fn for_plan(plan: &TrainingPlan) -> Self {
        Self::empty_range(plan.start_date, plan.end_date)
            .merge(Self::from_workouts(Some(plan.id), &plan.workouts))
    }

    /// Add items on one date, concatenating with whatever is already there
    pub fn with_items(mut self, date: NaiveDate, items: Vec<CalendarItem>) -> Self {
        let current = self.days.remove(&date).unwrap_or_default();
        self.days.insert(date, merge_day_items(current, items));
        self
    }

    /// Union of two schedules; colliding dates keep both item lists
    pub fn merge(self, other: Self) -> Self {
        other
            .days
            .into_iter()
            .fold(self, |schedule, (date, items)| schedule.with_items(date, items))
    }

    /// Drop every item belonging to `plan_id`, keeping the dates as placeholders
    pub fn without_plan(self, plan_id: Uuid) -> Self {
        let days = self
            .days
            .into_iter()
            .map(|(date, items)| {
                let kept = items
                    .into_iter()
                    .filter(|item| item.plan_id != Some(plan_id))
                    .collect();
                (date, kept)
            })
            .collect();
        Self { days }
    }

    /// Fold a plan lifecycle notification into the schedule
    pub fn apply_event(self, event: &PlanEvent) -> Self {
        match event {
            PlanEvent::Created(plan) => self.merge(Self::for_plan(plan)),
            PlanEvent::Updated(plan) => self.without_plan(plan.id).merge(Self::for_plan(plan)),
            PlanEvent::Deleted { plan_id } => self.without_plan(*plan_id),
        }
    }

    pub fn items_on(&self, date: NaiveDate) -> Option<&[CalendarItem]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    pub fn has_workout_on(&self, date: NaiveDate) -> bool {
        self.days.get(&date).is_some_and(|items| !items.is_empty())
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<CalendarItem>)> {
        self.days.iter()
    }

    /// Number of dates present, placeholders included
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
