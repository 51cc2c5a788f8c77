//! Academic-year padding.
//!
//! The plan writer lays terms out in blocks of three (spring, summer, fall) and
//! rejects plans whose term count is not a multiple of three. Padding appends
//! the summer and fall terms of the last term's year. A target that is not
//! after the current last term would overwrite an existing entry, so it is
//! replaced by that term's successor instead.

use crate::log_changes;
use crate::models::Plan;
use crate::term::{Season, Term};

use super::PlanError;

/// Append empty terms until the term count is a multiple of three.
/// Returns how many terms were added.
pub(crate) fn pad_to_academic_years(plan: &mut Plan, verbosity: u8) -> Result<usize, PlanError> {
    let remainder = plan.term_count() % 3;
    let Some(mut last) = plan.last_term() else {
        return Ok(0);
    };
    let seasons: &[Season] = match remainder {
        1 => &[Season::Summer, Season::Fall],
        2 => &[Season::Fall],
        _ => return Ok(0),
    };

    for &season in seasons {
        let target = Term::new(season, last.year())?;
        last = if target > last { target } else { last.next()? };
        log_changes!(verbosity, "Padding plan with empty term {}", last);
        plan.term_mut(last);
    }
    Ok(seasons.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseEntry;

    fn t(label: &str) -> Term {
        label.parse().unwrap()
    }

    fn plan_with(terms: &[&str]) -> Plan {
        let mut plan = Plan::default();
        for label in terms {
            plan.term_mut(t(label))
                .courses
                .push(CourseEntry::new(format!("C-{label}"), "Course".to_string()));
        }
        plan
    }

    fn labels(plan: &Plan) -> Vec<String> {
        plan.terms.iter().map(|tp| tp.term.to_string()).collect()
    }

    #[test]
    fn test_already_aligned_or_empty() {
        let mut empty = Plan::default();
        assert_eq!(pad_to_academic_years(&mut empty, 0).unwrap(), 0);
        assert_eq!(empty.term_count(), 0);

        let mut full = plan_with(&["SP25", "SU25", "FA25"]);
        assert_eq!(pad_to_academic_years(&mut full, 0).unwrap(), 0);
        assert_eq!(full.term_count(), 3);
    }

    #[test]
    fn test_pads_within_same_year() {
        let mut plan = plan_with(&["SP25"]);
        assert_eq!(pad_to_academic_years(&mut plan, 0).unwrap(), 2);
        assert_eq!(labels(&plan), vec!["SP25", "SU25", "FA25"]);

        let mut plan = plan_with(&["FA24", "SU25"]);
        assert_eq!(pad_to_academic_years(&mut plan, 0).unwrap(), 1);
        assert_eq!(labels(&plan), vec!["FA24", "SU25", "FA25"]);
    }

    #[test]
    fn test_spring_pair_pads_with_fall() {
        // Summer of the last year is skipped, matching the writer's year layout.
        let mut plan = plan_with(&["FA24", "SP25"]);
        assert_eq!(pad_to_academic_years(&mut plan, 0).unwrap(), 1);
        assert_eq!(labels(&plan), vec!["FA24", "SP25", "FA25"]);
    }

    #[test]
    fn test_summer_last_term_moves_past_collision() {
        let mut plan = plan_with(&["SU25"]);
        assert_eq!(pad_to_academic_years(&mut plan, 0).unwrap(), 2);
        assert_eq!(labels(&plan), vec!["SU25", "FA25", "SP26"]);
        assert_eq!(plan.load(t("SU25")), 1);
    }

    #[test]
    fn test_fall_last_term_is_not_overwritten() {
        // A plan ending in fall pads into the next year and keeps the fall courses.
        let mut plan = plan_with(&["FA25"]);
        pad_to_academic_years(&mut plan, 0).unwrap();

        assert_eq!(labels(&plan), vec!["FA25", "SP26", "SU26"]);
        assert_eq!(plan.load(t("FA25")), 1);
        assert!(plan.get(t("SP26")).unwrap().is_empty());

        let mut plan = plan_with(&["SU25", "FA25"]);
        pad_to_academic_years(&mut plan, 0).unwrap();
        assert_eq!(labels(&plan), vec!["SU25", "FA25", "SP26"]);
        assert_eq!(plan.load(t("FA25")), 1);
    }

    #[test]
    fn test_overflow_past_year_99() {
        let mut plan = plan_with(&["FA99"]);
        assert!(matches!(
            pad_to_academic_years(&mut plan, 0),
            Err(PlanError::InvalidTerm(_))
        ));
    }
}
