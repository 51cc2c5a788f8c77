//! Caller-supplied planning inputs.
//!
//! These maps are produced by collaborators outside the engine (transcript,
//! offering spreadsheet, catalog). They are parsed and validated once here; the
//! planner only reads them.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeSet, HashMap};

use crate::models::{CourseRecord, CourseStatus};
use crate::planner::PlanError;
use crate::term::{Term, TermError};

// Note: raw maps use std HashMap for PyO3 interface compatibility

/// Course code -> alternative-groups. Groups are conjunctive, codes within a
/// group are alternatives.
pub type PrerequisiteMap = FxHashMap<String, Vec<Vec<String>>>;

/// Terms in which each course is offered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferingCalendar {
    offerings: FxHashMap<String, FxHashSet<Term>>,
}

impl OfferingCalendar {
    /// Parse a code -> term-label map, rejecting malformed labels.
    pub fn from_raw(raw: &HashMap<String, Vec<String>>) -> Result<Self, TermError> {
        let mut calendar = Self::default();
        for (code, labels) in raw {
            let terms = labels
                .iter()
                .map(|label| label.parse())
                .collect::<Result<Vec<Term>, _>>()?;
            calendar.insert(code.clone(), terms);
        }
        Ok(calendar)
    }

    pub fn insert(&mut self, code: String, terms: impl IntoIterator<Item = Term>) {
        self.offerings.entry(code).or_default().extend(terms);
    }

    pub fn is_offered(&self, code: &str, term: Term) -> bool {
        self.offerings
            .get(code)
            .is_some_and(|terms| terms.contains(&term))
    }

    /// Offering terms for a course, chronologically.
    pub fn terms_for(&self, code: &str) -> Vec<Term> {
        let mut terms: Vec<Term> = self
            .offerings
            .get(code)
            .map(|t| t.iter().copied().collect())
            .unwrap_or_default();
        terms.sort();
        terms
    }

    /// A copy with every offering earlier than `cutoff` dropped.
    pub fn since(&self, cutoff: Term) -> Self {
        let offerings = self
            .offerings
            .iter()
            .map(|(code, terms)| {
                let kept = terms.iter().copied().filter(|t| *t >= cutoff).collect();
                (code.clone(), kept)
            })
            .collect();
        Self { offerings }
    }
}

/// Everything the planner reads about one student.
#[derive(Clone, Debug, Default)]
pub struct PlanningInputs {
    pub progress: FxHashMap<String, CourseRecord>,
    pub offerings: OfferingCalendar,
    pub prerequisites: PrerequisiteMap,
    pub titles: FxHashMap<String, String>,
}

impl PlanningInputs {
    /// Build inputs from the raw map shapes produced by the extractors.
    ///
    /// `progress` maps a code to `{"status": ..., "term": ...}`; an empty or
    /// missing term means the course has not been taken.
    ///
    /// # Errors
    /// * `PlanError::UnknownStatus` for a status other than complete/current/incomplete
    /// * `PlanError::InvalidTerm` for any malformed term label
    pub fn from_raw(
        progress: &HashMap<String, HashMap<String, String>>,
        offerings: &HashMap<String, Vec<String>>,
        prerequisites: HashMap<String, Vec<Vec<String>>>,
        titles: HashMap<String, String>,
    ) -> Result<Self, PlanError> {
        let mut records = FxHashMap::default();
        for (code, fields) in progress {
            let raw_status = fields.get("status").map(String::as_str).unwrap_or("");
            let status =
                CourseStatus::parse(raw_status).ok_or_else(|| PlanError::UnknownStatus {
                    code: code.clone(),
                    status: raw_status.to_string(),
                })?;
            let term = match fields.get("term").map(|t| t.trim()) {
                Some(label) if !label.is_empty() => Some(label.parse::<Term>()?),
                _ => None,
            };
            records.insert(code.clone(), CourseRecord { status, term });
        }

        Ok(Self {
            progress: records,
            offerings: OfferingCalendar::from_raw(offerings)?,
            prerequisites: prerequisites.into_iter().collect(),
            titles: titles.into_iter().collect(),
        })
    }

    /// Courses whose status is not complete, sorted by code.
    pub fn required_courses(&self) -> BTreeSet<String> {
        self.progress
            .iter()
            .filter(|(_, record)| !record.status.is_complete())
            .map(|(code, _)| code.clone())
            .collect()
    }

    pub fn title(&self, code: &str) -> Result<&str, PlanError> {
        self.titles
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| PlanError::MissingTitle(code.to_string()))
    }
}
