//! Topological sequencing of the course graph.

use std::collections::VecDeque;

use crate::graph::CourseGraph;
use crate::{log_checks, log_debug};

/// Error types for sequencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Required courses that sit on or behind a prerequisite cycle.
    Cycle(Vec<String>),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::Cycle(codes) => {
                write!(
                    f,
                    "Cyclic prerequisite graph: unable to order {}",
                    codes.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Result of a sequencing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    /// Graph nodes in precedence order, external prerequisites included.
    pub order: Vec<String>,
    /// Required courses that never reached zero in-degree.
    pub unordered: Vec<String>,
}

/// Kahn's algorithm over the course graph.
///
/// The queue is seeded with zero in-degree nodes in code order and dependents
/// are released in code order, so identical graphs always give identical
/// sequences. Nodes on a cycle never reach zero and are left out of `order`.
pub fn sequence(graph: &CourseGraph, verbosity: u8) -> Sequence {
    let mut in_degree = graph.in_degrees();

    let mut queue: VecDeque<&str> = graph
        .nodes()
        .filter(|code| in_degree.get(code) == Some(&0))
        .collect();

    log_debug!(verbosity, "Initial zero in-degree courses: {:?}", queue);

    let mut order: Vec<String> = Vec::with_capacity(graph.node_count());

    while let Some(code) = queue.pop_front() {
        log_checks!(verbosity, "  Sequencing course {}", code);
        order.push(code.to_string());

        for dependent in graph.dependents(code) {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    let unordered: Vec<String> = graph
        .required()
        .iter()
        .filter(|code| in_degree.get(code.as_str()).is_some_and(|&d| d > 0))
        .cloned()
        .collect();

    log_debug!(verbosity, "Course sequence: {:?}", order);

    Sequence { order, unordered }
}

/// Sequence the graph, failing if any required course cannot be ordered.
///
/// # Returns
/// * `Ok(order)` with every node in precedence order
/// * `Err(SequenceError::Cycle)` naming the required courses left unordered
pub fn topological_order(graph: &CourseGraph, verbosity: u8) -> Result<Vec<String>, SequenceError> {
    let result = sequence(graph, verbosity);
    if !result.unordered.is_empty() {
        return Err(SequenceError::Cycle(result.unordered));
    }
    Ok(result.order)
}
