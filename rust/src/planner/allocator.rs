//! Greedy term allocation and its fix-up passes.

use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::config::PlannerConfig;
use crate::graph::CourseGraph;
use crate::inputs::PlanningInputs;
use crate::models::{CourseEntry, Plan};
use crate::sequencing::{sequence, SequenceError};
use crate::term::{Horizon, TermError};
use crate::{log_changes, log_checks, log_debug};

use super::electives::backfill_electives;
use super::padding::pad_to_academic_years;
use super::state::AllocationState;

/// Errors that can occur while planning.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid term label: {0}")]
    InvalidTerm(#[from] TermError),
    #[error("No title found for course {0}")]
    MissingTitle(String),
    #[error("Unknown status {status:?} for course {code}")]
    UnknownStatus { code: String, status: String },
    #[error("Cyclic prerequisite graph: unable to order {0:?}")]
    CyclicPrerequisites(Vec<String>),
    #[error("Capstone {0} cannot be placed: no term received any course")]
    UnschedulableCapstone(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Course plans must be in academic years of three terms, got {0} terms")]
    IncompleteAcademicYear(usize),
}

impl From<SequenceError> for PlanError {
    fn from(err: SequenceError) -> Self {
        match err {
            SequenceError::Cycle(codes) => PlanError::CyclicPrerequisites(codes),
        }
    }
}

/// Assigns a student's remaining courses to terms.
///
/// Construction derives the required set and the dependency graph once;
/// [`CoursePlanner::plan`] can then be called any number of times and always
/// builds a fresh plan.
pub struct CoursePlanner<'a> {
    inputs: &'a PlanningInputs,
    config: PlannerConfig,
    horizon: Horizon,
    required: BTreeSet<String>,
    graph: CourseGraph,
}

impl<'a> CoursePlanner<'a> {
    /// Create a planner, validating the configuration.
    pub fn new(inputs: &'a PlanningInputs, config: PlannerConfig) -> Result<Self, PlanError> {
        let horizon = config.validate()?;
        let required = inputs.required_courses();
        log_changes!(config.verbosity, "Remaining courses: {:?}", required);

        let graph = CourseGraph::build(required.iter().cloned(), &inputs.prerequisites);
        log_debug!(
            config.verbosity,
            "Built course graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        log_debug!(config.verbosity, "In-degrees: {:?}", graph.in_degrees());

        Ok(Self {
            inputs,
            config,
            horizon,
            required,
            graph,
        })
    }

    pub fn required_courses(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn graph(&self) -> &CourseGraph {
        &self.graph
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    /// Course order for the greedy fill.
    ///
    /// With `fail_on_cycle` a cycle is an error; otherwise the courses on it are
    /// left out and end up unscheduled.
    pub fn sequence(&self) -> Result<Vec<String>, PlanError> {
        let result = sequence(&self.graph, self.config.verbosity);
        if !result.unordered.is_empty() {
            if self.config.fail_on_cycle {
                return Err(SequenceError::Cycle(result.unordered).into());
            }
            log_changes!(
                self.config.verbosity,
                "Cyclic prerequisites, leaving unordered: {:?}",
                result.unordered
            );
        }
        Ok(result.order)
    }

    /// Build the plan.
    ///
    /// Stages: greedy fill, capstone placement, elective backfill, academic-year
    /// padding. Courses that could not be placed are reported in
    /// `Plan::unscheduled` rather than failing the run.
    ///
    /// # Errors
    /// * `PlanError::CyclicPrerequisites` if `fail_on_cycle` is set and the graph has a cycle
    /// * `PlanError::MissingTitle` if a placed course has no title
    /// * `PlanError::UnschedulableCapstone` if the capstone is required but no term was populated
    pub fn plan(&self) -> Result<Plan, PlanError> {
        let order = self.sequence()?;
        let mut state = AllocationState::new(self.required.iter().cloned());

        self.fill_terms(&order, &mut state)?;

        let unplaced: Vec<String> = state
            .remaining()
            .into_iter()
            .filter(|code| !self.config.is_capstone(code))
            .collect();
        if !unplaced.is_empty() {
            log_changes!(
                self.config.verbosity,
                "Unable to place all required courses in the horizon. Remaining: {:?}",
                unplaced
            );
        }

        self.place_capstone(&mut state)?;
        backfill_electives(
            &mut state,
            self.inputs,
            &self.config,
            &self.horizon,
            &self.required,
        )?;
        pad_to_academic_years(&mut state.plan, self.config.verbosity)?;

        let plan = state.into_plan();
        if !plan.unscheduled.is_empty() {
            log_changes!(
                self.config.verbosity,
                "Incomplete schedule, unscheduled courses: {:?}",
                plan.unscheduled
            );
        }
        plan.log_summary(self.config.verbosity);
        Ok(plan)
    }

    /// Walk the horizon and fill each term from the sequence.
    fn fill_terms(&self, order: &[String], state: &mut AllocationState) -> Result<(), PlanError> {
        let verbosity = self.config.verbosity;

        for &term in self.horizon.terms() {
            if state
                .unscheduled
                .iter()
                .all(|code| self.config.is_capstone(code))
            {
                break;
            }

            let available: FxHashSet<&str> = state
                .unscheduled
                .iter()
                .map(String::as_str)
                .filter(|code| {
                    !self.config.is_capstone(code) && self.inputs.offerings.is_offered(code, term)
                })
                .collect();
            log_checks!(verbosity, "Available courses in {}: {:?}", term, available);

            let mut selected: Vec<&str> = Vec::new();
            for code in order {
                if !available.contains(code.as_str()) {
                    continue;
                }
                if selected.len() >= self.config.capacity {
                    log_checks!(verbosity, "  {} is full, skipping {}", term, code);
                    break;
                }
                selected.push(code);
            }

            if selected.is_empty() {
                continue;
            }
            for code in selected {
                let title = self.inputs.title(code)?.to_string();
                log_changes!(verbosity, "  Placed {} in {}", code, term);
                state.place(term, CourseEntry::new(code.to_string(), title));
            }
            state.final_term = Some(term);
        }
        Ok(())
    }

    /// Append the capstone to the last populated term, ignoring capacity.
    fn place_capstone(&self, state: &mut AllocationState) -> Result<(), PlanError> {
        let Some(capstone) = self.config.capstone.as_deref() else {
            return Ok(());
        };
        if !state.is_unscheduled(capstone) {
            log_checks!(
                self.config.verbosity,
                "Capstone {} is not outstanding, nothing to place",
                capstone
            );
            return Ok(());
        }
        let Some(term) = state.final_term else {
            return Err(PlanError::UnschedulableCapstone(capstone.to_string()));
        };

        let title = self.inputs.title(capstone)?.to_string();
        state.place(term, CourseEntry::new(capstone.to_string(), title));
        log_changes!(
            self.config.verbosity,
            "{} added to final term: {}",
            capstone,
            term
        );
        Ok(())
    }
}

/// Plan a student's remaining courses in one call.
pub fn plan_courses(inputs: &PlanningInputs, config: PlannerConfig) -> Result<Plan, PlanError> {
    CoursePlanner::new(inputs, config)?.plan()
}
