//! Rust implementation of the class planning engine.
//!
//! Assigns a student's remaining required courses to future academic terms,
//! respecting prerequisite order, term availability, a per-term capacity, a
//! capstone course deferred to the final term and a free-elective quota.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use std::collections::HashMap;

mod config;
pub mod graph;
mod inputs;
pub mod logging;
mod models;
pub mod planner;
pub mod sequencing;
pub mod term;

pub use config::{PlannerConfig, DEFAULT_CAPSTONE};
pub use graph::CourseGraph;
pub use inputs::{OfferingCalendar, PlanningInputs, PrerequisiteMap};
pub use models::{CourseEntry, CourseRecord, CourseStatus, Plan, TermPlan};
pub use planner::{plan_courses, CoursePlanner, PlanError};
pub use sequencing::{sequence, topological_order, Sequence, SequenceError};
pub use term::{Horizon, Season, Term, TermError};

fn to_py_err(err: PlanError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Build a multi-term course plan.
///
/// # Arguments
/// * `course_progress` - Dict mapping course code to {"status": ..., "term": ...}
/// * `offerings` - Dict mapping course code to the term labels it is offered in
/// * `prerequisites` - Dict mapping course code to a list of alternative-groups
/// * `titles` - Dict mapping course code to its title
/// * `config` - Planner configuration (defaults if omitted)
/// * `start_term` - Optional cutoff label; offerings before it are ignored
///
/// # Returns
/// * Plan with terms in chronological order and any unscheduled courses
///
/// # Raises
/// * ValueError on malformed term labels, unknown statuses, missing titles,
///   cyclic prerequisites or an unplaceable capstone
#[pyfunction]
#[pyo3(signature = (course_progress, offerings, prerequisites, titles, config=None, start_term=None))]
fn find_best_schedule(
    course_progress: HashMap<String, HashMap<String, String>>,
    offerings: HashMap<String, Vec<String>>,
    prerequisites: HashMap<String, Vec<Vec<String>>>,
    titles: HashMap<String, String>,
    config: Option<PlannerConfig>,
    start_term: Option<String>,
) -> PyResult<Plan> {
    let mut inputs =
        PlanningInputs::from_raw(&course_progress, &offerings, prerequisites, titles)
            .map_err(to_py_err)?;
    if let Some(label) = start_term {
        let cutoff: Term = label.parse().map_err(|e: TermError| to_py_err(e.into()))?;
        inputs.offerings = inputs.offerings.since(cutoff);
    }
    plan_courses(&inputs, config.unwrap_or_default()).map_err(to_py_err)
}

/// Order courses so every prerequisite precedes its dependents.
///
/// Ties are broken by course code. Raises ValueError on a cycle.
#[pyfunction]
#[pyo3(name = "topological_order", signature = (prerequisites, required, verbosity=0))]
fn py_topological_order(
    prerequisites: HashMap<String, Vec<Vec<String>>>,
    required: Vec<String>,
    verbosity: u8,
) -> PyResult<Vec<String>> {
    let prerequisites: PrerequisiteMap = prerequisites.into_iter().collect();
    let graph = CourseGraph::build(required, &prerequisites);
    topological_order(&graph, verbosity).map_err(|e| to_py_err(e.into()))
}

/// The class_planner.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<CourseEntry>()?;
    m.add_class::<TermPlan>()?;
    m.add_class::<Plan>()?;

    // Config types
    m.add_class::<PlannerConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(find_best_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_topological_order, m)?)?;

    Ok(())
}
