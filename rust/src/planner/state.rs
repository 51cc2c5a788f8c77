//! Mutable state of one allocation run.

use rustc_hash::FxHashSet;

use crate::models::{CourseEntry, Plan};
use crate::term::Term;

/// The plan under construction plus the courses still waiting for a term.
///
/// Created fresh for every run and consumed by [`AllocationState::into_plan`].
#[derive(Debug, Default)]
pub struct AllocationState {
    pub plan: Plan,
    /// Required course codes not yet placed.
    pub unscheduled: FxHashSet<String>,
    /// Latest term that received a course during the greedy fill.
    pub final_term: Option<Term>,
}

impl AllocationState {
    pub fn new(required: impl IntoIterator<Item = String>) -> Self {
        Self {
            plan: Plan::default(),
            unscheduled: required.into_iter().collect(),
            final_term: None,
        }
    }

    pub fn is_unscheduled(&self, code: &str) -> bool {
        self.unscheduled.contains(code)
    }

    /// Append a course to `term` and mark it scheduled.
    pub fn place(&mut self, term: Term, entry: CourseEntry) {
        self.unscheduled.remove(&entry.code);
        self.plan.term_mut(term).courses.push(entry);
    }

    /// Unscheduled codes in code order.
    pub fn remaining(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.unscheduled.iter().cloned().collect();
        codes.sort();
        codes
    }

    pub fn into_plan(self) -> Plan {
        let unscheduled = self.remaining();
        Plan {
            unscheduled,
            ..self.plan
        }
    }
}
