//! Presentation grouping
//!
//! Collapses a day's flat item list back into one entry per logical goal:
//! a split lesson's sub-lesson items merge into a single card, while
//! reviews and exams each stand alone.

use std::collections::HashMap;

use uuid::Uuid;

use super::models::{GroupedItem, ScheduledItem};

/// Group items for display, preserving first-seen order.
///
/// Reviews group under their own item id so they are never merged;
/// everything else groups under its source goal id (exam items, having
/// none, also stand alone). A group is completed only when every member
/// is, and its duration is the sum of member durations.
pub fn group_items(items: &[ScheduledItem]) -> Vec<GroupedItem> {
    let mut groups: Vec<GroupedItem> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for item in items {
        let key = if item.is_review {
            item.id
        } else {
            item.goal_id.unwrap_or(item.id)
        };

        match index.get(&key) {
            Some(&at) => {
                let group = &mut groups[at];
                group.duration_minutes += item.duration_minutes;
                group.completed = group.completed && item.completed;
                group.items.push(item.clone());
            }
            None => {
                // Merged lesson cards read the goal title, not the first
                // sub-lesson's
                let title = match (&item.goal, item.is_review) {
                    (Some(goal), false) => goal.title.clone(),
                    _ => item.title.clone(),
                };
                index.insert(key, groups.len());
                groups.push(GroupedItem {
                    key,
                    title,
                    goal_type: item.goal_type,
                    discipline: item.discipline.clone(),
                    subject: item.subject.clone(),
                    duration_minutes: item.duration_minutes,
                    completed: item.completed,
                    items: vec![item.clone()],
                });
            }
        }
    }

    groups
}
