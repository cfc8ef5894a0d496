//! Per-discipline task flattening
//!
//! Expands a discipline's curriculum into the flat ordered list of atomic
//! units the allocator walks: one entry per sub-lesson for split lessons,
//! one entry for everything else.

use uuid::Uuid;

use crate::plan::models::{Discipline, Goal, GoalType};
use crate::progress::models::ProficiencyLevel;

use super::duration::{effective_duration, goal_full_duration};

/// The smallest schedulable piece of work
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub goal_id: Uuid,
    /// Set when this entry is a single sub-lesson of a split lesson
    pub sub_lesson_id: Option<Uuid>,
    pub goal_type: GoalType,
    /// Sub-lesson title for atomic entries, goal title otherwise
    pub title: String,
    pub discipline_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    /// Effective minutes, already adjusted for level and study mode
    pub duration_minutes: u32,
    /// True for sub-lesson entries
    pub atomic: bool,
    /// Source goal, embedded for the presentation layer
    pub goal: Goal,
}

/// Flatten one discipline's goals into allocation order.
///
/// Subjects are visited by ordering key, goals by ordering key within
/// each subject. Computed once per generation run.
pub fn flatten_discipline_tasks(
    discipline: &Discipline,
    level: ProficiencyLevel,
    semi_active: bool,
) -> Vec<TaskEntry> {
    let mut entries = Vec::new();

    for subject in discipline.subjects_in_order() {
        for goal in subject.goals_in_order() {
            if goal.goal_type == GoalType::Lesson && !goal.sub_lessons.is_empty() {
                for sub in &goal.sub_lessons {
                    entries.push(TaskEntry {
                        goal_id: goal.id,
                        sub_lesson_id: Some(sub.id),
                        goal_type: goal.goal_type,
                        title: sub.title.clone(),
                        discipline_name: discipline.name.clone(),
                        subject_id: subject.id,
                        subject_name: subject.name.clone(),
                        duration_minutes: effective_duration(
                            sub.duration_minutes,
                            level,
                            semi_active,
                        ),
                        atomic: true,
                        goal: goal.clone(),
                    });
                }
            } else {
                entries.push(TaskEntry {
                    goal_id: goal.id,
                    sub_lesson_id: None,
                    goal_type: goal.goal_type,
                    title: goal.title.clone(),
                    discipline_name: discipline.name.clone(),
                    subject_id: subject.id,
                    subject_name: subject.name.clone(),
                    duration_minutes: goal_full_duration(goal, level, semi_active),
                    atomic: false,
                    goal: goal.clone(),
                });
            }
        }
    }

    entries
}
