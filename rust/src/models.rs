//! Core data types for course planning.

use pyo3::prelude::*;
use std::collections::BTreeMap;

use crate::log_changes;
use crate::planner::PlanError;
use crate::term::Term;

/// Completion status of a course on the student's transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Complete,
    Current,
    Incomplete,
}

impl CourseStatus {
    /// Parse a status string. `in_progress` is accepted as an alias for `current`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "complete" => Some(Self::Complete),
            "current" | "in_progress" => Some(Self::Current),
            "incomplete" => Some(Self::Incomplete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Current => "current",
            Self::Incomplete => "incomplete",
        }
    }

    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

/// A course from the student's progress map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub status: CourseStatus,
    /// Term the course was completed or is being taken in, if any.
    pub term: Option<Term>,
}

/// A course placed into a term.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseEntry {
    #[pyo3(get, set)]
    pub code: String,
    #[pyo3(get, set)]
    pub title: String,
}

#[pymethods]
impl CourseEntry {
    #[new]
    pub fn new(code: String, title: String) -> Self {
        Self { code, title }
    }

    fn __repr__(&self) -> String {
        format!("CourseEntry(code={:?}, title={:?})", self.code, self.title)
    }
}

/// The courses planned for one term.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermPlan {
    pub term: Term,
    #[pyo3(get)]
    pub courses: Vec<CourseEntry>,
}

impl TermPlan {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            courses: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }
}

#[pymethods]
impl TermPlan {
    #[getter(term)]
    fn label(&self) -> String {
        self.term.to_string()
    }

    fn __len__(&self) -> usize {
        self.courses.len()
    }

    fn __repr__(&self) -> String {
        format!("TermPlan(term={}, courses={:?})", self.term, self.codes())
    }
}

/// A multi-term course plan.
///
/// Terms are kept in chronological order. Courses that could not be placed
/// are listed in `unscheduled`.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    #[pyo3(get)]
    pub terms: Vec<TermPlan>,
    #[pyo3(get)]
    pub unscheduled: Vec<String>,
}

impl Plan {
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn get(&self, term: Term) -> Option<&TermPlan> {
        self.terms.iter().find(|t| t.term == term)
    }

    /// Number of courses in `term`, zero if the term is not in the plan.
    pub fn load(&self, term: Term) -> usize {
        self.get(term).map_or(0, TermPlan::len)
    }

    pub fn last_term(&self) -> Option<Term> {
        self.terms.last().map(|t| t.term)
    }

    pub fn course_count(&self) -> usize {
        self.terms.iter().map(TermPlan::len).sum()
    }

    /// The term a course was placed in.
    pub fn term_of(&self, code: &str) -> Option<Term> {
        self.terms
            .iter()
            .find(|t| t.courses.iter().any(|c| c.code == code))
            .map(|t| t.term)
    }

    /// Term -> course codes, in chronological order.
    pub fn to_map(&self) -> BTreeMap<Term, Vec<String>> {
        self.terms
            .iter()
            .map(|t| (t.term, t.courses.iter().map(|c| c.code.clone()).collect()))
            .collect()
    }

    /// The plan in three-term academic-year blocks, as the plan writer lays it out.
    pub fn academic_years(&self) -> impl Iterator<Item = &[TermPlan]> {
        self.terms.chunks(3)
    }

    /// Reject a plan whose term count is not a whole number of academic years.
    pub fn check_blocks(&self) -> Result<(), PlanError> {
        if self.terms.len() % 3 != 0 {
            return Err(PlanError::IncompleteAcademicYear(self.terms.len()));
        }
        Ok(())
    }

    /// Log each term as `TERM: code, code`.
    pub fn log_summary(&self, verbosity: u8) {
        for term in &self.terms {
            log_changes!(verbosity, "{}: {}", term.term, term.codes().join(", "));
        }
    }

    /// Mutable access to a term, inserting it at its chronological position if absent.
    pub(crate) fn term_mut(&mut self, term: Term) -> &mut TermPlan {
        let idx = match self.terms.binary_search_by(|t| t.term.cmp(&term)) {
            Ok(idx) => idx,
            Err(idx) => {
                self.terms.insert(idx, TermPlan::new(term));
                idx
            }
        };
        &mut self.terms[idx]
    }
}

#[pymethods]
impl Plan {
    #[pyo3(name = "check_blocks")]
    fn py_check_blocks(&self) -> PyResult<()> {
        self.check_blocks()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// Term label -> course codes.
    #[pyo3(name = "to_dict")]
    fn py_to_dict(&self) -> Vec<(String, Vec<String>)> {
        self.to_map()
            .into_iter()
            .map(|(term, codes)| (term.to_string(), codes))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.terms.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Plan(terms={}, courses={}, unscheduled={})",
            self.terms.len(),
            self.course_count(),
            self.unscheduled.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(label: &str) -> Term {
        label.parse().unwrap()
    }

    fn entry(code: &str) -> CourseEntry {
        CourseEntry::new(code.to_string(), format!("{code} title"))
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(CourseStatus::parse("complete"), Some(CourseStatus::Complete));
        assert_eq!(CourseStatus::parse("Current"), Some(CourseStatus::Current));
        assert_eq!(CourseStatus::parse("in_progress"), Some(CourseStatus::Current));
        assert_eq!(CourseStatus::parse("incomplete"), Some(CourseStatus::Incomplete));
        assert_eq!(CourseStatus::parse("dropped"), None);
        assert!(CourseStatus::Complete.is_complete());
        assert!(!CourseStatus::Current.is_complete());
    }

    #[test]
    fn test_term_mut_keeps_chronological_order() {
        let mut plan = Plan::default();
        plan.term_mut(t("FA25")).courses.push(entry("B"));
        plan.term_mut(t("SP25")).courses.push(entry("A"));
        plan.term_mut(t("FA25")).courses.push(entry("C"));

        let terms: Vec<Term> = plan.terms.iter().map(|tp| tp.term).collect();
        assert_eq!(terms, vec![t("SP25"), t("FA25")]);
        assert_eq!(plan.load(t("FA25")), 2);
        assert_eq!(plan.load(t("SU25")), 0);
        assert_eq!(plan.course_count(), 3);
        assert_eq!(plan.term_of("C"), Some(t("FA25")));
        assert_eq!(plan.term_of("Z"), None);
        assert_eq!(plan.last_term(), Some(t("FA25")));
    }

    #[test]
    fn test_check_blocks() {
        let mut plan = Plan::default();
        assert!(plan.check_blocks().is_ok());

        plan.term_mut(t("SP25"));
        assert!(matches!(
            plan.check_blocks(),
            Err(PlanError::IncompleteAcademicYear(1))
        ));

        plan.term_mut(t("SU25"));
        plan.term_mut(t("FA25"));
        assert!(plan.check_blocks().is_ok());
        assert_eq!(plan.academic_years().count(), 1);
    }

    #[test]
    fn test_to_map() {
        let mut plan = Plan::default();
        plan.term_mut(t("SP26")).courses.push(entry("B"));
        plan.term_mut(t("FA25")).courses.push(entry("A"));

        let map = plan.to_map();
        let keys: Vec<String> = map.keys().map(Term::to_string).collect();
        assert_eq!(keys, vec!["FA25", "SP26"]);
        assert_eq!(map[&t("SP26")], vec!["B".to_string()]);
    }
}
