//! Study plan and curriculum tree data models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cycle::models::StudyCycle;

/// Kind of external resource attached to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Link,
    File,
}

/// External resource attached to a goal (supporting PDF, video link, etc.)
///
/// Only the presentation layer reads these; the scheduler ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub name: String,
    pub url: String,
}

/// Type of study goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalType {
    /// Video lesson, optionally split into sub-lessons
    Lesson,
    /// Reading material (book chapter, handout)
    Material,
    /// Practice question block
    PracticeQuestions,
    /// Statute / legal text reading
    StatuteReading,
    /// Written summary
    Summary,
    /// Standalone review session
    Review,
}

/// One atomic video/lesson unit inside a Lesson goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubLesson {
    pub id: Uuid,
    pub title: String,
    pub duration_minutes: u32,
}

impl SubLesson {
    pub fn new(title: String, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            duration_minutes,
        }
    }
}

/// One curriculum item: a lesson, a reading assignment, a question block...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Ordering key, unique within the subject, not necessarily contiguous
    pub position: i32,
    /// Manually set base duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Page or article count, shown by the UI next to reading goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Whether completing this goal enqueues spaced reviews
    #[serde(default)]
    pub auto_review: bool,
    /// Comma-separated day offsets for spaced reviews, e.g. "1,7,30"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_offsets: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_lessons: Vec<SubLesson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceRef>,
}

impl Goal {
    pub fn new(title: String, goal_type: GoalType, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            goal_type,
            position,
            duration_minutes: None,
            page_count: None,
            auto_review: false,
            review_offsets: None,
            sub_lessons: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Builder method to set the manual duration
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Builder method to enable spaced reviews with the given offsets
    pub fn with_reviews(mut self, offsets: &str) -> Self {
        self.auto_review = true;
        self.review_offsets = Some(offsets.to_string());
        self
    }

    /// Base minutes before any proficiency adjustment: the sum of
    /// sub-lesson durations for a split lesson, the manual duration
    /// otherwise. Absent durations count as zero.
    pub fn base_minutes(&self) -> u32 {
        if self.goal_type == GoalType::Lesson && !self.sub_lessons.is_empty() {
            self.sub_lessons.iter().map(|s| s.duration_minutes).sum()
        } else {
            self.duration_minutes.unwrap_or(0)
        }
    }

    /// True when completing this goal should enqueue spaced reviews
    pub fn wants_reviews(&self) -> bool {
        self.auto_review
            && self
                .review_offsets
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }
}

/// A subject groups goals inside a discipline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    /// Ordering key, unique within the discipline
    pub position: i32,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Subject {
    pub fn new(name: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            position,
            goals: Vec::new(),
        }
    }

    /// Goals in allocation order
    pub fn goals_in_order(&self) -> Vec<&Goal> {
        let mut goals: Vec<&Goal> = self.goals.iter().collect();
        goals.sort_by_key(|g| g.position);
        goals
    }
}

/// A named folder grouping disciplines for cycle slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineFolder {
    pub id: Uuid,
    pub name: String,
    pub position: i32,
}

/// A top-level curriculum area (e.g. "Constitutional Law")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: Uuid,
    pub name: String,
    /// Ordering key, unique within the plan
    pub position: i32,
    /// Folder membership, used when a cycle slot references a folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Uuid>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Discipline {
    pub fn new(name: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            position,
            folder_id: None,
            subjects: Vec::new(),
        }
    }

    /// Subjects in allocation order
    pub fn subjects_in_order(&self) -> Vec<&Subject> {
        let mut subjects: Vec<&Subject> = self.subjects.iter().collect();
        subjects.sort_by_key(|s| s.position);
        subjects
    }
}

/// Per-plan scheduling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    /// First date the generator produces
    pub start_date: NaiveDate,
    /// A paused plan stops generating days from today onward
    #[serde(default)]
    pub paused: bool,
}

/// A complete study plan: curriculum tree, cycles and configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<DisciplineFolder>,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
    /// Study cycles; the generator uses the first one
    #[serde(default)]
    pub cycles: Vec<StudyCycle>,
    pub config: PlanConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudyPlan {
    pub fn new(name: String, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            folders: Vec::new(),
            disciplines: Vec::new(),
            cycles: Vec::new(),
            config: PlanConfig {
                start_date,
                paused: false,
            },
            created_at: now,
            updated_at: now,
        }
    }

    /// Disciplines in allocation order
    pub fn disciplines_in_order(&self) -> Vec<&Discipline> {
        let mut disciplines: Vec<&Discipline> = self.disciplines.iter().collect();
        disciplines.sort_by_key(|d| d.position);
        disciplines
    }

    /// The cycle the generator runs, if any
    pub fn active_cycle(&self) -> Option<&StudyCycle> {
        self.cycles.first()
    }

    /// Locate a goal anywhere in the curriculum tree
    pub fn find_goal(&self, goal_id: Uuid) -> Option<(&Discipline, &Subject, &Goal)> {
        for discipline in &self.disciplines {
            for subject in &discipline.subjects {
                for goal in &subject.goals {
                    if goal.id == goal_id {
                        return Some((discipline, subject, goal));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_minutes_sums_sub_lessons() {
        let mut goal = Goal::new("TCP/IP".to_string(), GoalType::Lesson, 1);
        goal.sub_lessons.push(SubLesson::new("Part 1".to_string(), 30));
        goal.sub_lessons.push(SubLesson::new("Part 2".to_string(), 45));
        // Manual duration is ignored once sub-lessons exist
        goal.duration_minutes = Some(5);

        assert_eq!(goal.base_minutes(), 75);
    }

    #[test]
    fn test_base_minutes_manual_duration() {
        let goal = Goal::new("Chapter 3".to_string(), GoalType::Material, 1).with_duration(40);
        assert_eq!(goal.base_minutes(), 40);
    }

    #[test]
    fn test_base_minutes_absent_is_zero() {
        let goal = Goal::new("Untimed".to_string(), GoalType::Summary, 1);
        assert_eq!(goal.base_minutes(), 0);

        let lesson = Goal::new("Empty lesson".to_string(), GoalType::Lesson, 2);
        assert_eq!(lesson.base_minutes(), 0);
    }

    #[test]
    fn test_wants_reviews() {
        let plain = Goal::new("No reviews".to_string(), GoalType::Material, 1);
        assert!(!plain.wants_reviews());

        let with = Goal::new("Reviewed".to_string(), GoalType::Material, 2).with_reviews("1,7,30");
        assert!(with.wants_reviews());

        let mut blank = Goal::new("Blank offsets".to_string(), GoalType::Material, 3);
        blank.auto_review = true;
        blank.review_offsets = Some("  ".to_string());
        assert!(!blank.wants_reviews());
    }

    #[test]
    fn test_ordering_keys_need_not_be_contiguous() {
        let mut subject = Subject::new("Networking".to_string(), 1);
        subject.goals.push(Goal::new("B".to_string(), GoalType::Material, 30));
        subject.goals.push(Goal::new("A".to_string(), GoalType::Material, 7));
        subject.goals.push(Goal::new("C".to_string(), GoalType::Material, 100));

        let titles: Vec<&str> = subject
            .goals_in_order()
            .iter()
            .map(|g| g.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_find_goal() {
        let mut plan = StudyPlan::new(
            "Exam prep".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let mut discipline = Discipline::new("Law".to_string(), 1);
        let mut subject = Subject::new("Contracts".to_string(), 1);
        let goal = Goal::new("Formation".to_string(), GoalType::Lesson, 1);
        let goal_id = goal.id;
        subject.goals.push(goal);
        discipline.subjects.push(subject);
        plan.disciplines.push(discipline);

        let (d, s, g) = plan.find_goal(goal_id).unwrap();
        assert_eq!(d.name, "Law");
        assert_eq!(s.name, "Contracts");
        assert_eq!(g.title, "Formation");

        assert!(plan.find_goal(Uuid::new_v4()).is_none());
    }
}
