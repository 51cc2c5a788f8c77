//! Configuration for the course planner.

use pyo3::prelude::*;

use crate::planner::PlanError;
use crate::term::Horizon;

/// Default capstone course, deferred to the last populated term.
pub const DEFAULT_CAPSTONE: &str = "CPSC 6000";

/// Catalog numbers that look like free electives but do not count as one.
pub const DEFAULT_EXCLUDED_ELECTIVES: [&str; 3] = ["6103", "6105", "6106"];

/// Configuration for term allocation.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Maximum courses per term (the capstone may exceed it)
    #[pyo3(get, set)]
    pub capacity: usize,
    /// Capstone course code; None disables capstone deferral
    #[pyo3(get, set)]
    pub capstone: Option<String>,
    /// Number of free-elective slots to backfill
    #[pyo3(get, set)]
    pub free_electives: usize,
    /// Leading catalog-number characters that mark an elective candidate
    #[pyo3(get, set)]
    pub elective_prefix: String,
    /// Codes or catalog numbers never used as free electives
    #[pyo3(get, set)]
    pub excluded_electives: Vec<String>,
    /// Term labels the planner may schedule into, in chronological order
    #[pyo3(get, set)]
    pub horizon: Vec<String>,
    /// Fail on cyclic prerequisites instead of leaving the cycle unscheduled
    #[pyo3(get, set)]
    pub fail_on_cycle: bool,
    /// Logging verbosity (0-3), see `logging`
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            capacity: 4,
            capstone: Some(DEFAULT_CAPSTONE.to_string()),
            free_electives: 0,
            elective_prefix: "6".to_string(),
            excluded_electives: DEFAULT_EXCLUDED_ELECTIVES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            horizon: Horizon::default().labels(),
            fail_on_cycle: true,
            verbosity: 0,
        }
    }
}

impl PlannerConfig {
    /// Check the configuration and parse its horizon.
    ///
    /// # Errors
    /// * `PlanError::InvalidConfig` for zero capacity or an empty, unordered or repeating horizon
    /// * `PlanError::InvalidTerm` for a malformed horizon label
    pub fn validate(&self) -> Result<Horizon, PlanError> {
        if self.capacity == 0 {
            return Err(PlanError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        let horizon = Horizon::parse(&self.horizon)?;
        if horizon.is_empty() {
            return Err(PlanError::InvalidConfig("horizon is empty".to_string()));
        }
        if !horizon.is_chronological() {
            return Err(PlanError::InvalidConfig(format!(
                "horizon must list distinct terms in chronological order: {:?}",
                self.horizon
            )));
        }
        Ok(horizon)
    }

    pub fn is_capstone(&self, code: &str) -> bool {
        self.capstone.as_deref() == Some(code)
    }

    /// Whether a course code follows the elective numbering convention.
    ///
    /// The catalog number is the last whitespace-separated token of the code
    /// (`"CPSC 6127"` -> `"6127"`).
    pub fn is_elective(&self, code: &str) -> bool {
        let number = code.split_whitespace().last().unwrap_or(code);
        if self.elective_prefix.is_empty() || !number.starts_with(self.elective_prefix.as_str()) {
            return false;
        }
        !self
            .excluded_electives
            .iter()
            .any(|excluded| excluded == code || excluded == number)
    }
}

#[pymethods]
impl PlannerConfig {
    #[new]
    #[pyo3(signature = (
        capacity=None,
        capstone=Some(DEFAULT_CAPSTONE.to_string()),
        free_electives=None,
        elective_prefix=None,
        excluded_electives=None,
        horizon=None,
        fail_on_cycle=None,
        verbosity=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        capacity: Option<usize>,
        capstone: Option<String>,
        free_electives: Option<usize>,
        elective_prefix: Option<String>,
        excluded_electives: Option<Vec<String>>,
        horizon: Option<Vec<String>>,
        fail_on_cycle: Option<bool>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            capacity: capacity.unwrap_or(defaults.capacity),
            capstone,
            free_electives: free_electives.unwrap_or(defaults.free_electives),
            elective_prefix: elective_prefix.unwrap_or(defaults.elective_prefix),
            excluded_electives: excluded_electives.unwrap_or(defaults.excluded_electives),
            horizon: horizon.unwrap_or(defaults.horizon),
            fail_on_cycle: fail_on_cycle.unwrap_or(defaults.fail_on_cycle),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PlannerConfig(capacity={}, capstone={:?}, free_electives={}, horizon={})",
            self.capacity,
            self.capstone,
            self.free_electives,
            self.horizon.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.capacity, 4);
        assert!(config.is_capstone("CPSC 6000"));
        assert_eq!(config.horizon.len(), 16);
        assert_eq!(config.horizon.first().map(String::as_str), Some("FA24"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = PlannerConfig {
            capacity: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PlanError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_horizons() {
        for horizon in [vec![], labels(&["FA25", "SP25"]), labels(&["SP25", "SP25"])] {
            let config = PlannerConfig {
                horizon,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(PlanError::InvalidConfig(_))));
        }

        let config = PlannerConfig {
            horizon: labels(&["SP25", "Fall 25"]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PlanError::InvalidTerm(_))));
    }

    #[test]
    fn test_elective_convention() {
        let config = PlannerConfig::default();
        assert!(config.is_elective("CPSC 6127"));
        assert!(config.is_elective("6127"));
        assert!(!config.is_elective("CPSC 5127"));
        assert!(!config.is_elective("CPSC 6103"));
        assert!(!config.is_elective("6105"));

        let none = PlannerConfig {
            elective_prefix: String::new(),
            ..Default::default()
        };
        assert!(!none.is_elective("CPSC 6127"));
    }
}
