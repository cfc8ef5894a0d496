//! Spaced review placement
//!
//! Seeds the schedule map with one item per review-queue entry before the
//! day-by-day allocation runs. Reviews are pinned to their due date and
//! never moved by the allocator; they only shrink the budget left for
//! fresh content that day.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::plan::models::StudyPlan;
use crate::progress::models::LearnerProgress;

use super::duration::review_duration;
use super::models::{Schedule, ScheduledItem};

/// Place every queued review into its due-date bucket. Reviews whose
/// source goal has left the curriculum are skipped.
pub fn place_reviews(schedule: &mut Schedule, plan: &StudyPlan, progress: &LearnerProgress) {
    // 1-based position of each review within its goal's chain, by due date
    let mut chains: HashMap<Uuid, Vec<(NaiveDate, Uuid)>> = HashMap::new();
    for review in &progress.reviews {
        chains
            .entry(review.goal_id)
            .or_default()
            .push((review.due_date, review.id));
    }
    for chain in chains.values_mut() {
        chain.sort();
    }
    let chain_index = |goal_id: Uuid, review_id: Uuid| -> u32 {
        chains
            .get(&goal_id)
            .and_then(|chain| chain.iter().position(|(_, id)| *id == review_id))
            .map_or(1, |pos| pos as u32 + 1)
    };

    for review in &progress.reviews {
        let Some((discipline, subject, goal)) = plan.find_goal(review.goal_id) else {
            log::debug!(
                "Skipping review {}: goal {} not in curriculum",
                review.id,
                review.goal_id
            );
            continue;
        };

        let item = ScheduledItem {
            id: review.id,
            date: review.due_date,
            goal_id: Some(goal.id),
            sub_lesson_id: None,
            goal_type: Some(goal.goal_type),
            title: format!("Review: {}", goal.title),
            discipline: Some(discipline.name.clone()),
            subject: Some(subject.name.clone()),
            duration_minutes: review_duration(goal, progress.level, progress.semi_active),
            is_review: true,
            review_index: Some(chain_index(goal.id, review.id)),
            completed: review.completed,
            goal: Some(goal.clone()),
            exam: None,
        };
        schedule.entry(review.due_date).or_default().push(item);
    }
}
