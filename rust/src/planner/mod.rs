//! Term allocation for a student's remaining courses.
//!
//! The planner sequences the required courses topologically, fills the horizon
//! term by term up to capacity, then runs three fix-up passes: capstone
//! placement, free-elective backfill and academic-year padding.

mod allocator;
mod electives;
mod padding;
mod state;

pub use allocator::{plan_courses, CoursePlanner, PlanError};
