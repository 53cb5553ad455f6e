// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plan lifecycle orchestration around the pure generation engine.
//!
//! The service is an ordinary value built once and passed by reference to its
//! callers. Each downstream step (persist, publish, device scheduling) can be
//! retried on its own with the already generated [`TrainingPlan`]; nothing
//! here regenerates a plan implicitly.

use super::devices::{AuthorizationStatus, DeviceScheduler, DeviceWorkout};
use super::events::{EventBus, PlanEvent};
use super::identity::IdentityProvider;
use super::store::PlanStore;
use crate::config::engine_config::{EngineConfig, SchedulingSettings};
use crate::errors::{PlanError, PlanResult};
use crate::logging::AppLogger;
use crate::models::{PlanSpecification, PlannedWorkout, TrainingPlan};
use crate::training;
use crate::workout::IntervalCompiler;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

pub struct PlanService {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn PlanStore>,
    events: EventBus,
    compiler: IntervalCompiler,
    scheduling: SchedulingSettings,
}

impl PlanService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn PlanStore>,
        events: EventBus,
        config: &EngineConfig,
    ) -> Self {
        Self {
            identity,
            store,
            events,
            compiler: IntervalCompiler::new(config.compiler.clone()),
            scheduling: config.scheduling.clone(),
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn compiler(&self) -> &IntervalCompiler {
        &self.compiler
    }

    async fn require_user(&self) -> PlanResult<String> {
        self.identity
            .current_user_id()
            .await
            .ok_or(PlanError::MissingUser)
    }

    /// Current user, provided they own `plan`. Plans of other users are reported as missing.
    async fn require_owner(&self, plan: &TrainingPlan) -> PlanResult<String> {
        let user_id = self.require_user().await?;
        if plan.user_id != user_id {
            warn!(plan.id = %plan.id, user.id = %user_id, "Plan belongs to another user");
            return Err(PlanError::PlanNotFound(plan.id));
        }
        Ok(user_id)
    }

    /// Validate, resolve the owner and generate a plan without persisting it
    pub async fn prepare_plan(&self, spec: &PlanSpecification) -> PlanResult<TrainingPlan> {
        training::validate(spec)?;
        let user_id = self.require_user().await?;
        let plan = training::generate_plan(spec, &user_id)?;

        AppLogger::log_plan_generated(&user_id, &plan.id.to_string(), plan.workouts.len());
        Ok(plan)
    }

    /// Persist a generated plan and announce it. Safe to call again with the same plan after a failure.
    pub async fn save_plan(&self, plan: &TrainingPlan) -> PlanResult<()> {
        self.require_owner(plan).await?;
        self.store.save_plan(plan).await.map_err(|e| {
            AppLogger::log_persistence_event(&plan.user_id, &plan.id.to_string(), "save", false);
            PlanError::PersistenceFailure(e.to_string())
        })?;

        AppLogger::log_persistence_event(&plan.user_id, &plan.id.to_string(), "save", true);
        self.events.publish(PlanEvent::Created(plan.clone()));
        Ok(())
    }

    /// Generate and persist in one call
    pub async fn create_plan(&self, spec: &PlanSpecification) -> PlanResult<TrainingPlan> {
        let plan = self.prepare_plan(spec).await?;
        self.save_plan(&plan).await?;
        Ok(plan)
    }

    pub async fn get_plan(&self, plan_id: Uuid) -> PlanResult<TrainingPlan> {
        let user_id = self.require_user().await?;
        self.store
            .get_plan(plan_id, &user_id)
            .await
            .map_err(|e| PlanError::PersistenceFailure(e.to_string()))?
            .ok_or(PlanError::PlanNotFound(plan_id))
    }

    pub async fn plans_for_current_user(&self) -> PlanResult<Vec<TrainingPlan>> {
        let user_id = self.require_user().await?;
        self.store
            .list_plans(&user_id)
            .await
            .map_err(|e| PlanError::PersistenceFailure(e.to_string()))
    }

    /// Store `plan` with its whole workout list replaced
    pub async fn replace_workouts(
        &self,
        plan: &TrainingPlan,
        workouts: Vec<PlannedWorkout>,
    ) -> PlanResult<TrainingPlan> {
        self.require_owner(plan).await?;
        let updated = plan.with_workouts(workouts);
        let found = self
            .store
            .replace_plan(&updated)
            .await
            .map_err(|e| PlanError::PersistenceFailure(e.to_string()))?;
        if !found {
            return Err(PlanError::PlanNotFound(plan.id));
        }

        AppLogger::log_persistence_event(&updated.user_id, &updated.id.to_string(), "replace", true);
        self.events.publish(PlanEvent::Updated(updated.clone()));
        Ok(updated)
    }

    /// Rebuild the workouts from the plan's own specification, in full
    pub async fn regenerate(&self, plan: &TrainingPlan) -> PlanResult<TrainingPlan> {
        self.require_owner(plan).await?;
        let workouts = training::generate_workouts(&plan.specification())?;
        self.replace_workouts(plan, workouts).await
    }

    pub async fn delete_plan(&self, plan_id: Uuid) -> PlanResult<()> {
        let user_id = self.require_user().await?;
        let removed = self
            .store
            .delete_plan(plan_id, &user_id)
            .await
            .map_err(|e| PlanError::PersistenceFailure(e.to_string()))?;
        if !removed {
            return Err(PlanError::PlanNotFound(plan_id));
        }

        AppLogger::log_persistence_event(&user_id, &plan_id.to_string(), "delete", true);
        self.events.publish(PlanEvent::Deleted { plan_id });
        Ok(())
    }

    /// Start time for a workout from the plan's preferred time of day
    pub fn start_time(&self, plan: &TrainingPlan, workout: &PlannedWorkout) -> PlanResult<NaiveDateTime> {
        let hour = self.scheduling.start_hour(plan.preferred_time);
        workout
            .date
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| PlanError::SchedulingFailure {
                date: workout.date,
                reason: format!("configured start hour {hour} is not a valid time"),
            })
    }

    /// Device payload for one plan entry
    pub fn device_workout(&self, plan: &TrainingPlan, workout: &PlannedWorkout) -> PlanResult<DeviceWorkout> {
        Ok(DeviceWorkout::new(
            self.start_time(plan, workout)?,
            self.compiler.compile_planned(workout),
        ))
    }

    /// Device payloads for every plan entry
    pub fn compile_plan(&self, plan: &TrainingPlan) -> PlanResult<Vec<DeviceWorkout>> {
        plan.workouts
            .iter()
            .map(|workout| self.device_workout(plan, workout))
            .collect()
    }

    /// Make sure the device allows scheduling, prompting once if undecided
    pub async fn ensure_authorized(&self, device: &dyn DeviceScheduler) -> PlanResult<()> {
        let mut status = device.authorization_status().await;
        if status == AuthorizationStatus::NotDetermined {
            status = device.request_authorization().await;
        }
        AppLogger::log_authorization_event(device.device_name(), &format!("{status:?}"));

        if status.is_authorized() {
            Ok(())
        } else {
            Err(PlanError::AuthorizationRequired(status))
        }
    }

    /// Schedule one plan entry; the retry unit for device failures
    pub async fn schedule_workout(
        &self,
        plan: &TrainingPlan,
        workout: &PlannedWorkout,
        device: &dyn DeviceScheduler,
    ) -> PlanResult<()> {
        let payload = self.device_workout(plan, workout)?;

        device.schedule(&payload).await.map_err(|e| {
            warn!(plan.id = %plan.id, date = %workout.date, error = %e, "Device rejected workout");
            PlanError::SchedulingFailure {
                date: workout.date,
                reason: e.to_string(),
            }
        })?;

        AppLogger::log_workout_scheduled(&plan.id.to_string(), device.device_name(), &payload.start.to_string());
        Ok(())
    }

    /// Schedule every workout of a plan, stopping at the first device rejection.
    ///
    /// Returns the number of workouts scheduled.
    pub async fn schedule_plan(&self, plan: &TrainingPlan, device: &dyn DeviceScheduler) -> PlanResult<usize> {
        self.ensure_authorized(device).await?;

        for workout in &plan.workouts {
            self.schedule_workout(plan, workout, device).await?;
        }
        Ok(plan.workouts.len())
    }
}
