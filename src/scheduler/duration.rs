//! Effective study duration calculation
//!
//! Every duration flowing into the allocator passes through here:
//! proficiency multiplier first, then semi-active doubling, with a
//! 10-minute floor so the allocator can never spin on zero-cost tasks.

use crate::plan::models::{Goal, GoalType};
use crate::progress::models::ProficiencyLevel;

/// Minimum effective duration in minutes
pub const MIN_DURATION_MINUTES: u32 = 10;

/// Fraction of the full duration a spaced review of a non-review goal
/// costs
const REVIEW_FRACTION: f64 = 0.2;

/// Effective time cost of `base_minutes` of study.
///
/// The proficiency multiplier is applied first and the result rounded up
/// to a whole minute; semi-active mode then doubles it, so toggling
/// semi-active exactly doubles any cost. Values of zero or less floor to
/// [`MIN_DURATION_MINUTES`].
pub fn effective_duration(base_minutes: u32, level: ProficiencyLevel, semi_active: bool) -> u32 {
    let mut minutes = (f64::from(base_minutes) * level.multiplier()).ceil() as i64;
    if semi_active {
        minutes *= 2;
    }
    if minutes <= 0 {
        MIN_DURATION_MINUTES
    } else {
        minutes as u32
    }
}

/// Effective duration of a whole goal: sub-lesson durations summed for a
/// split lesson, the manual duration otherwise
pub fn goal_full_duration(goal: &Goal, level: ProficiencyLevel, semi_active: bool) -> u32 {
    effective_duration(goal.base_minutes(), level, semi_active)
}

/// Cost of one spaced review of a goal. Reviewing a review-type goal
/// repeats the full duration; anything else costs a fifth of it, with the
/// usual floor.
pub fn review_duration(goal: &Goal, level: ProficiencyLevel, semi_active: bool) -> u32 {
    let full = goal_full_duration(goal, level, semi_active);
    if goal.goal_type == GoalType::Review {
        full
    } else {
        ((f64::from(full) * REVIEW_FRACTION).ceil() as u32).max(MIN_DURATION_MINUTES)
    }
}
