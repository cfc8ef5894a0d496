//! Mock exam data models
//!
//! The exam subsystem (authoring, grading, ranking) lives outside this
//! crate; the scheduler only needs enough to place an exam slot and tell
//! whether the learner has attempted it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minutes budgeted per exam question
const MINUTES_PER_QUESTION: u32 = 3;

/// A simulated exam referenced by cycle slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockExam {
    pub id: Uuid,
    pub title: String,
    pub total_questions: u32,
}

impl MockExam {
    pub fn new(title: String, total_questions: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            total_questions,
        }
    }

    /// Scheduled cost of sitting this exam
    pub fn duration_minutes(&self) -> u32 {
        self.total_questions * MINUTES_PER_QUESTION
    }
}

/// One recorded exam attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAttempt {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub learner_id: Uuid,
}

/// Whether any attempt references the given exam
pub fn has_attempted(attempts: &[ExamAttempt], exam_id: Uuid) -> bool {
    attempts.iter().any(|a| a.exam_id == exam_id)
}
