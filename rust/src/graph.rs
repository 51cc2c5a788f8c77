//! Prerequisite dependency graph.
//!
//! Edges point from a prerequisite to each course that lists it, meaning "must
//! precede". Every code inside an alternative-group becomes its own edge, so a
//! course's in-degree counts all listed alternatives rather than "at least one
//! of". That over-constrains disjunctive prerequisites and can push a course
//! later than necessary, but any order it produces is still a valid precedence.
//!
//! Nodes come in two kinds: required courses, which the planner schedules, and
//! external prerequisite codes (completed courses or courses the student does
//! not need) that only contribute edges.

use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

use crate::inputs::PrerequisiteMap;

/// Directed "must-precede" graph scoped to a student's required courses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseGraph {
    /// prerequisite -> dependents. Every node is a key; sorted for deterministic traversal.
    edges: BTreeMap<String, BTreeSet<String>>,
    required: BTreeSet<String>,
}

impl CourseGraph {
    /// Build the graph for `required` from the prerequisite map.
    ///
    /// Every required course is a node even with no edges. Repeated edges
    /// (a code listed in several groups of one course) are collapsed.
    pub fn build<I, S>(required: I, prerequisites: &PrerequisiteMap) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required: BTreeSet<String> = required.into_iter().map(Into::into).collect();
        let mut edges: BTreeMap<String, BTreeSet<String>> = required
            .iter()
            .map(|code| (code.clone(), BTreeSet::new()))
            .collect();

        for (course, groups) in prerequisites {
            for prereq in groups.iter().flatten() {
                edges
                    .entry(prereq.clone())
                    .or_default()
                    .insert(course.clone());
                edges.entry(course.clone()).or_default();
            }
        }

        Self { edges, required }
    }

    /// All nodes in code order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.edges.contains_key(code)
    }

    /// Courses that list `code` as a prerequisite, in code order.
    pub fn dependents(&self, code: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(code)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// All (prerequisite, dependent) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .flat_map(|(from, to)| to.iter().map(move |t| (from.as_str(), t.as_str())))
    }

    pub fn is_required(&self, code: &str) -> bool {
        self.required.contains(code)
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Nodes that appear only through prerequisite references.
    pub fn external_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes().filter(move |code| !self.is_required(code))
    }

    /// Incoming edge count for every node.
    ///
    /// Built fresh on each call; the sequencer consumes its copy.
    pub fn in_degrees(&self) -> FxHashMap<&str, usize> {
        let mut in_degree: FxHashMap<&str, usize> = self.nodes().map(|code| (code, 0)).collect();
        for (_, dependent) in self.edges() {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree += 1;
            }
        }
        in_degree
    }
}
