//! Free-elective backfill.
//!
//! Electives are free-standing: they skip the offering and prerequisite checks
//! of the greedy fill and go into the earliest horizon term with a free slot.

use std::collections::BTreeSet;

use crate::config::PlannerConfig;
use crate::inputs::PlanningInputs;
use crate::models::CourseEntry;
use crate::term::Horizon;
use crate::{log_changes, log_checks};

use super::PlanError;
use super::state::AllocationState;

/// Required courses that count as free electives, in code order, capped at the quota.
///
/// The quota is spent on this set whether or not the greedy fill already
/// placed a chosen course.
pub(crate) fn choose_electives(required: &BTreeSet<String>, config: &PlannerConfig) -> Vec<String> {
    required
        .iter()
        .filter(|code| config.is_elective(code) && !config.is_capstone(code))
        .take(config.free_electives)
        .cloned()
        .collect()
}

/// Place the chosen electives that are still unscheduled. Returns how many were placed.
///
/// An elective that finds every horizon term full stays unscheduled.
pub(crate) fn backfill_electives(
    state: &mut AllocationState,
    inputs: &PlanningInputs,
    config: &PlannerConfig,
    horizon: &Horizon,
    required: &BTreeSet<String>,
) -> Result<usize, PlanError> {
    let mut placed = 0;
    for code in choose_electives(required, config) {
        if !state.is_unscheduled(&code) {
            log_checks!(config.verbosity, "Elective {} already placed", code);
            continue;
        }
        let Some(&term) = horizon
            .terms()
            .iter()
            .find(|&&term| state.plan.load(term) < config.capacity)
        else {
            log_changes!(config.verbosity, "No free slot left for elective {}", code);
            continue;
        };

        let title = inputs.title(&code)?.to_string();
        log_changes!(config.verbosity, "Elective {} added to {}", code, term);
        state.place(term, CourseEntry::new(code, title));
        placed += 1;
    }
    Ok(placed)
}
