// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! External collaborator contracts and the plan lifecycle service

pub mod devices;
pub mod events;
pub mod identity;
pub mod plan_service;
pub mod store;

pub use devices::{AuthorizationStatus, DeviceScheduler, DeviceWorkout};
pub use events::{EventBus, PlanEvent};
pub use identity::{IdentityProvider, StaticIdentity};
pub use plan_service::PlanService;
pub use store::PlanStore;
