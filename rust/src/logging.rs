//! Logging macros for the planner with verbosity level control.
//!
//! Output goes to stderr and costs nothing when disabled (verbosity=0).
//! - 0: SILENT
//! - 1: CHANGES (course placements, capstone, electives, padding, residual warnings)
//! - 2: CHECKS (per-term availability, skipped courses)
//! - 3: DEBUG (graph, in-degrees, full sequence)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at CHANGES level (verbosity >= 1).
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_CHANGES);
        assert!(VERBOSITY_CHANGES < VERBOSITY_CHECKS);
        assert!(VERBOSITY_CHECKS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_silent_macros_do_not_panic() {
        let verbosity = VERBOSITY_SILENT;
        log_changes!(verbosity, "placed {} in {}", "CPSC 6127", "FA25");
        log_checks!(verbosity, "available in {}: {:?}", "FA25", ["CPSC 6127"]);
        log_debug!(verbosity, "graph nodes: {}", 3);
    }
}
