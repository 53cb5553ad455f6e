// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plan lifecycle notifications for calendar display collaborators

use crate::models::TrainingPlan;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum PlanEvent {
    Created(TrainingPlan),
    Updated(TrainingPlan),
    Deleted { plan_id: Uuid },
}

impl PlanEvent {
    pub fn plan_id(&self) -> Uuid {
        match self {
            PlanEvent::Created(plan) | PlanEvent::Updated(plan) => plan.id,
            PlanEvent::Deleted { plan_id } => *plan_id,
        }
    }
}

/// Fan-out bus; every subscriber sees every event published after it subscribed
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PlanEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlanEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached. Publishing with no subscribers is not an error.
    pub fn publish(&self, event: PlanEvent) -> usize {
        let plan_id = event.plan_id();
        let delivered = self.sender.send(event).unwrap_or(0);
        debug!(plan.id = %plan_id, subscribers = delivered, "Published plan event");
        delivered
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(crate::constants::env_config::event_channel_capacity())
    }
}
