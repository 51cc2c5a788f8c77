//! Academic term labels and planning horizons.
//!
//! A term label is a season code (`SP`, `SU`, `FA`) followed by a two-digit year,
//! e.g. `FA24`. Labels do not sort chronologically as strings (`FA24` < `SP24`),
//! so they are parsed into [`Term`], whose ordering is by year and then season.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or advancing term labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("Unexpected term format {0:?} - should be SP, SU or FA followed by a two digit year")]
    Format(String),
    #[error("No term follows {0}")]
    YearOverflow(String),
}

/// Season of an academic term, in chronological order within a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Two-letter code used in term labels.
    pub fn code(self) -> &'static str {
        match self {
            Self::Spring => "SP",
            Self::Summer => "SU",
            Self::Fall => "FA",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "SP" => Some(Self::Spring),
            "SU" => Some(Self::Summer),
            "FA" => Some(Self::Fall),
            _ => None,
        }
    }

    /// Jan-Apr is spring, May-Aug summer, Sep-Dec fall.
    fn from_month(month: u32) -> Self {
        match month {
            1..=4 => Self::Spring,
            5..=8 => Self::Summer,
            _ => Self::Fall,
        }
    }
}

/// A single academic term such as `SP25`.
///
/// Field order matters: the derived `Ord` compares year first, then season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    year: u8,
    season: Season,
}

impl Term {
    /// Create a term from a season and a two-digit year (0-99).
    pub fn new(season: Season, year: u8) -> Result<Self, TermError> {
        if year > 99 {
            return Err(TermError::Format(format!("{}{}", season.code(), year)));
        }
        Ok(Self { year, season })
    }

    pub fn season(self) -> Season {
        self.season
    }

    pub fn year(self) -> u8 {
        self.year
    }

    /// The term immediately after this one (`FA25` -> `SP26`).
    pub fn next(self) -> Result<Self, TermError> {
        match self.season {
            Season::Spring => Ok(Self {
                season: Season::Summer,
                ..self
            }),
            Season::Summer => Ok(Self {
                season: Season::Fall,
                ..self
            }),
            Season::Fall if self.year < 99 => Ok(Self {
                year: self.year + 1,
                season: Season::Spring,
            }),
            Season::Fall => Err(TermError::YearOverflow(self.to_string())),
        }
    }

    /// The term a calendar date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year().rem_euclid(100) as u8,
            season: Season::from_month(date.month()),
        }
    }
}

impl FromStr for Term {
    type Err = TermError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || TermError::Format(label.to_string());
        if label.len() != 4 || !label.is_ascii() {
            return Err(invalid());
        }
        let season = Season::from_code(&label[..2]).ok_or_else(invalid)?;
        let digits = &label[2..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: u8 = digits.parse().map_err(|_| invalid())?;
        Ok(Self { year, season })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.season.code(), self.year)
    }
}

/// Ordered window of terms the planner may schedule into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Horizon {
    terms: Vec<Term>,
}

impl Horizon {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Parse a caller-supplied list of labels, keeping their order.
    pub fn parse<I, S>(labels: I) -> Result<Self, TermError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = labels
            .into_iter()
            .map(|label| label.as_ref().parse())
            .collect::<Result<Vec<Term>, _>>()?;
        Ok(Self { terms })
    }

    /// `count` consecutive terms beginning at `start`.
    pub fn consecutive(start: Term, count: usize) -> Result<Self, TermError> {
        let mut terms = Vec::with_capacity(count);
        let mut current = start;
        for i in 0..count {
            if i > 0 {
                current = current.next()?;
            }
            terms.push(current);
        }
        Ok(Self { terms })
    }

    /// `count` consecutive terms beginning with the term after the one containing `date`.
    pub fn from_date(date: NaiveDate, count: usize) -> Result<Self, TermError> {
        Self::consecutive(Term::containing(date).next()?, count)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when every term is strictly later than the one before it.
    pub fn is_chronological(&self) -> bool {
        self.terms.windows(2).all(|pair| pair[0] < pair[1])
    }

    pub fn labels(&self) -> Vec<String> {
        self.terms.iter().map(Term::to_string).collect()
    }
}

impl Default for Horizon {
    /// Sixteen terms, `FA24` through `FA29`.
    fn default() -> Self {
        let mut terms = vec![Term {
            year: 24,
            season: Season::Fall,
        }];
        for year in 25..=29 {
            for season in [Season::Spring, Season::Summer, Season::Fall] {
                terms.push(Term { year, season });
            }
        }
        Self { terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(label: &str) -> Term {
        label.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let term = t("FA24");
        assert_eq!(term.season(), Season::Fall);
        assert_eq!(term.year(), 24);
        assert_eq!(term.to_string(), "FA24");
        assert_eq!(t("SP05").to_string(), "SP05");
    }

    #[test]
    fn test_new_checks_year() {
        assert_eq!(Term::new(Season::Summer, 25), Ok(t("SU25")));
        assert_eq!(
            Term::new(Season::Fall, 100),
            Err(TermError::Format("FA100".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_labels() {
        for label in ["", "FA2", "FA245", "WI24", "fa24", "FAxy", "FA-1", "SPé4", "FA 4"] {
            assert_eq!(
                label.parse::<Term>(),
                Err(TermError::Format(label.to_string())),
                "{label:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_names_offending_token() {
        let err = "XX99".parse::<Term>().unwrap_err();
        assert!(err.to_string().contains("XX99"));
    }

    #[test]
    fn test_chronological_ordering() {
        // Lexically "FA24" < "SP24", chronologically the reverse.
        assert!(t("SP24") < t("SU24"));
        assert!(t("SU24") < t("FA24"));
        assert!(t("FA24") < t("SP25"));
    }

    #[test]
    fn test_next_wraps_year() {
        assert_eq!(t("SP25").next().unwrap(), t("SU25"));
        assert_eq!(t("SU25").next().unwrap(), t("FA25"));
        assert_eq!(t("FA25").next().unwrap(), t("SP26"));
        assert!(matches!(t("FA99").next(), Err(TermError::YearOverflow(_))));
    }

    #[test]
    fn test_containing_date() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(Term::containing(d(2025, 2, 1)), t("SP25"));
        assert_eq!(Term::containing(d(2025, 6, 15)), t("SU25"));
        assert_eq!(Term::containing(d(2025, 10, 1)), t("FA25"));
        assert_eq!(Term::containing(d(2100, 1, 1)), t("SP00"));
    }

    #[test]
    fn test_default_horizon() {
        let horizon = Horizon::default();
        assert_eq!(horizon.len(), 16);
        assert_eq!(horizon.terms()[0], t("FA24"));
        assert_eq!(horizon.terms()[15], t("FA29"));
        assert!(horizon.is_chronological());
        assert_eq!(horizon, Horizon::consecutive(t("FA24"), 16).unwrap());
    }

    #[test]
    fn test_from_date_starts_after_current_term() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let horizon = Horizon::from_date(date, 3).unwrap();
        assert_eq!(horizon.labels(), vec!["SP27", "SU27", "FA27"]);
    }

    #[test]
    fn test_parse_horizon() {
        let horizon = Horizon::parse(["SP25", "FA25"]).unwrap();
        assert_eq!(horizon.len(), 2);
        assert!(horizon.is_chronological());
        assert!(Horizon::parse(["SP25", "bogus"]).is_err());
        assert!(!Horizon::parse(["FA25", "SP25"]).unwrap().is_chronological());
        assert!(!Horizon::parse(["SP25", "SP25"]).unwrap().is_chronological());
    }
}
