//! Learner progress and weekly routine data models

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::models::Goal;

/// Proficiency level, a global multiplier on computed durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    /// Duration multiplier applied to every base duration
    pub fn multiplier(self) -> f64 {
        match self {
            ProficiencyLevel::Beginner => 1.0,
            ProficiencyLevel::Intermediate => 0.75,
            ProficiencyLevel::Advanced => 0.5,
        }
    }
}

/// One pending spaced-repetition entry, created when a review-eligible
/// goal is completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReview {
    pub id: Uuid,
    /// Goal this review was generated from
    pub goal_id: Uuid,
    pub due_date: NaiveDate,
    /// The configured offset that produced this entry, in days
    pub interval_days: u32,
    #[serde(default)]
    pub completed: bool,
}

/// Minutes available per weekday; 0 means no study that day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRoutine {
    #[serde(default)]
    pub sunday: u32,
    #[serde(default)]
    pub monday: u32,
    #[serde(default)]
    pub tuesday: u32,
    #[serde(default)]
    pub wednesday: u32,
    #[serde(default)]
    pub thursday: u32,
    #[serde(default)]
    pub friday: u32,
    #[serde(default)]
    pub saturday: u32,
}

impl WeeklyRoutine {
    /// Same minutes every day of the week
    pub fn uniform(minutes: u32) -> Self {
        Self {
            sunday: minutes,
            monday: minutes,
            tuesday: minutes,
            wednesday: minutes,
            thursday: minutes,
            friday: minutes,
            saturday: minutes,
        }
    }

    /// Minutes available on the given weekday. A typed match, so the
    /// routine key and the walked date can never disagree on which day
    /// is which.
    pub fn minutes_for(&self, weekday: Weekday) -> u32 {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }
}

/// Completed-unit key: the bare goal id for a whole goal, or
/// `goalId:subLessonId` for a single sub-lesson
pub fn completion_key(goal_id: Uuid, sub_lesson_id: Option<Uuid>) -> String {
    match sub_lesson_id {
        Some(sub) => format!("{}:{}", goal_id, sub),
        None => goal_id.to_string(),
    }
}

/// Everything the learner owns: completion history, review queue,
/// proficiency and weekly routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProgress {
    pub learner_id: Uuid,
    /// Completed-unit keys, ordered so serialization is canonical
    #[serde(default)]
    pub completed: BTreeSet<String>,
    #[serde(default)]
    pub level: ProficiencyLevel,
    /// Semi-active mode doubles computed durations to leave room for
    /// pausing and note-taking
    #[serde(default)]
    pub semi_active: bool,
    #[serde(default)]
    pub reviews: Vec<ScheduledReview>,
    #[serde(default)]
    pub routine: WeeklyRoutine,
    /// Capability flag read by the host's admin surface, never by the
    /// scheduler
    #[serde(default)]
    pub can_manage_plans: bool,
    pub updated_at: DateTime<Utc>,
}

impl LearnerProgress {
    pub fn new(learner_id: Uuid) -> Self {
        Self {
            learner_id,
            completed: BTreeSet::new(),
            level: ProficiencyLevel::default(),
            semi_active: false,
            reviews: Vec::new(),
            routine: WeeklyRoutine::default(),
            can_manage_plans: false,
            updated_at: Utc::now(),
        }
    }

    /// Whether a single schedulable unit is done. A whole-goal key also
    /// covers each of its sub-lessons.
    pub fn is_unit_complete(&self, goal_id: Uuid, sub_lesson_id: Option<Uuid>) -> bool {
        if self.completed.contains(&completion_key(goal_id, sub_lesson_id)) {
            return true;
        }
        sub_lesson_id.is_some() && self.completed.contains(&completion_key(goal_id, None))
    }

    /// Whether the whole goal is done: its bare key is present, or every
    /// one of its sub-lessons is individually complete.
    pub fn is_goal_complete(&self, goal: &Goal) -> bool {
        if self.completed.contains(&completion_key(goal.id, None)) {
            return true;
        }
        !goal.sub_lessons.is_empty()
            && goal
                .sub_lessons
                .iter()
                .all(|s| self.completed.contains(&completion_key(goal.id, Some(s.id))))
    }
}
