//! Spaced review queue maintenance
//!
//! Completing a review-eligible goal enqueues one [`ScheduledReview`] per
//! configured offset. Offsets chain: each entry is due its offset in days
//! after the previous entry, starting from the completion day.
//! Un-completing the goal removes the whole chain.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::plan::models::Goal;

use super::models::{completion_key, LearnerProgress, ScheduledReview};

/// Parse a comma-separated offset list ("1,7,30"). Tokens that are not
/// positive integers are skipped.
pub fn parse_offsets(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .collect()
}

/// Build the chained review entries for a goal completed on `completed_on`.
///
/// Returns an empty list when the goal has reviews disabled or no valid
/// offsets.
pub fn review_chain_for_goal(goal: &Goal, completed_on: NaiveDate) -> Vec<ScheduledReview> {
    if !goal.wants_reviews() {
        return Vec::new();
    }
    let offsets = parse_offsets(goal.review_offsets.as_deref().unwrap_or(""));

    let mut due = completed_on;
    offsets
        .into_iter()
        .map(|offset| {
            due += Duration::days(i64::from(offset));
            ScheduledReview {
                id: Uuid::new_v4(),
                goal_id: goal.id,
                due_date: due,
                interval_days: offset,
                completed: false,
            }
        })
        .collect()
}

/// Drop every queued review generated from the given goal
pub fn remove_reviews_for_goal(progress: &mut LearnerProgress, goal_id: Uuid) {
    progress.reviews.retain(|r| r.goal_id != goal_id);
}

/// Toggle a completion key and keep the review queue consistent.
///
/// When the toggle makes the whole goal complete and the goal is
/// review-eligible, its chain is (re)built from `today`; when the toggle
/// un-completes the goal, the chain is removed en masse.
pub fn apply_completion_toggle(
    progress: &mut LearnerProgress,
    goal: &Goal,
    sub_lesson_id: Option<Uuid>,
    done: bool,
    today: NaiveDate,
) {
    let key = completion_key(goal.id, sub_lesson_id);
    let was_complete = progress.is_goal_complete(goal);

    if done {
        progress.completed.insert(key);
    } else {
        progress.completed.remove(&key);
    }

    let now_complete = progress.is_goal_complete(goal);
    if !was_complete && now_complete && goal.wants_reviews() {
        remove_reviews_for_goal(progress, goal.id);
        let chain = review_chain_for_goal(goal, today);
        log::debug!("Queued {} reviews for goal '{}'", chain.len(), goal.title);
        progress.reviews.extend(chain);
    } else if was_complete && !now_complete {
        remove_reviews_for_goal(progress, goal.id);
    }

    progress.updated_at = Utc::now();
}
