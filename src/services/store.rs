// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Persistence contract for training plans

use crate::models::TrainingPlan;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Stores plans keyed by plan id and owner id
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn save_plan(&self, plan: &TrainingPlan) -> Result<()>;

    async fn get_plan(&self, plan_id: Uuid, user_id: &str) -> Result<Option<TrainingPlan>>;

    async fn list_plans(&self, user_id: &str) -> Result<Vec<TrainingPlan>>;

    /// Overwrite the stored record with `plan`, workouts included
    async fn replace_plan(&self, plan: &TrainingPlan) -> Result<bool>;

    /// Returns whether a plan was removed
    async fn delete_plan(&self, plan_id: Uuid, user_id: &str) -> Result<bool>;
}
