// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Week index to training phase mapping

use crate::models::TrainingPhase;
use serde::{Deserialize, Serialize};

/// Resolve the phase of `week_index` (0-based) in a plan of `total_weeks`.
///
/// Each phase covers `total_weeks / 3` weeks and Peak absorbs the remainder.
/// Plans shorter than three weeks have empty Foundation and Development
/// ranges, so every week resolves to Peak.
pub fn phase_for_week(total_weeks: u32, week_index: u32) -> TrainingPhase {
    let phase_length = total_weeks / 3;

    if week_index < phase_length {
        TrainingPhase::Foundation
    } else if week_index < 2 * phase_length {
        TrainingPhase::Development
    } else {
        TrainingPhase::Peak
    }
}

/// Contiguous block of weeks sharing a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub phase: TrainingPhase,
    pub first_week: u32,
    pub weeks: u32,
    pub focus: String,
}

/// Collapse the per-week phases of a plan into display blocks. Empty phases are omitted.
pub fn phase_summary(total_weeks: u32) -> Vec<PhaseSummary> {
    (0..total_weeks).fold(Vec::new(), |mut blocks: Vec<PhaseSummary>, week| {
        let phase = phase_for_week(total_weeks, week);
        match blocks.last_mut() {
            Some(block) if block.phase == phase => block.weeks += 1,
            _ => blocks.push(PhaseSummary {
                phase,
                first_week: week,
                weeks: 1,
                focus: phase.focus().to_string(),
            }),
        }
        blocks
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_ranges_are_contiguous_and_exhaustive() {
        for total in 3..=52 {
            let phases: Vec<_> = (0..total).map(|week| phase_for_week(total, week)).collect();
            let length = (total / 3) as usize;

            assert!(phases[..length].iter().all(|p| *p == TrainingPhase::Foundation));
            assert!(phases[length..2 * length]
                .iter()
                .all(|p| *p == TrainingPhase::Development));
            assert!(phases[2 * length..].iter().all(|p| *p == TrainingPhase::Peak));
        }
    }

    #[test]
    fn test_short_plans_are_all_peak() {
        assert!((0..2).all(|week| phase_for_week(2, week) == TrainingPhase::Peak));
        assert_eq!(phase_for_week(1, 0), TrainingPhase::Peak);
    }

    #[test]
    fn test_twelve_week_plan() {
        assert_eq!(phase_for_week(12, 0), TrainingPhase::Foundation);
        assert_eq!(phase_for_week(12, 3), TrainingPhase::Foundation);
        assert_eq!(phase_for_week(12, 4), TrainingPhase::Development);
        assert_eq!(phase_for_week(12, 7), TrainingPhase::Development);
        assert_eq!(phase_for_week(12, 8), TrainingPhase::Peak);
        assert_eq!(phase_for_week(12, 11), TrainingPhase::Peak);
    }

    #[test]
    fn test_phase_summary() {
        let summary = phase_summary(10);
        let weeks: Vec<_> = summary.iter().map(|block| (block.phase, block.weeks)).collect();
        assert_eq!(
            weeks,
            vec![
                (TrainingPhase::Foundation, 3),
                (TrainingPhase::Development, 3),
                (TrainingPhase::Peak, 4),
            ]
        );
        assert_eq!(summary[2].first_week, 6);

        let short = phase_summary(2);
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].phase, TrainingPhase::Peak);
    }
}
