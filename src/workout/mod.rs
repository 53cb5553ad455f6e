// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structured workouts for external devices

pub mod compiler;
pub mod units;

pub use compiler::{
    IntervalBlock, IntervalCompiler, IntervalStep, PaceRange, Segment, SpeedAlert, StepPurpose,
    StructuredWorkout, WorkoutGoal, WorkoutInterval, WorkoutStep,
};
pub use units::{DistanceUnit, SpeedUnit, UnitSystem};
