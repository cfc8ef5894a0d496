//! Derived schedule data models
//!
//! Everything in here is ephemeral: the schedule map is discarded and
//! regenerated from scratch on every relevant input change.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exams::models::MockExam;
use crate::plan::models::{Goal, GoalType};

/// The generated agenda, keyed by calendar date.
///
/// An ordered map, so two runs over identical inputs serialize
/// identically.
pub type Schedule = BTreeMap<NaiveDate, Vec<ScheduledItem>>;

/// Snapshot of the live study session, supplied by the host's timer
/// subsystem. `today` is an explicit input so the engine never reads the
/// wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub today: NaiveDate,
    /// Pull tomorrow's content into today once today's plan is done
    #[serde(default)]
    pub advance_mode: bool,
    /// Elapsed seconds of the current live session
    #[serde(default)]
    pub today_session_seconds: i64,
}

impl SessionSnapshot {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            advance_mode: false,
            today_session_seconds: 0,
        }
    }

    /// Whether the advance-mode budget rules apply to the given date
    pub(crate) fn advancing_on(&self, date: NaiveDate) -> bool {
        self.advance_mode && date == self.today
    }
}

/// One piece of work placed on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Source goal; absent for exam items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_lesson_id: Option<Uuid>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub is_review: bool,
    /// 1-based position in the source goal's review chain, for display
    /// ("Review 2, 7 days")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_index: Option<u32>,
    /// Derived from the learner's progress snapshot
    #[serde(default)]
    pub completed: bool,
    /// Source goal back-reference for the presentation layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    /// Embedded exam data when this item is an exam slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam: Option<MockExam>,
}

/// Items collapsed to one entry per logical goal for display and
/// completion tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedItem {
    /// Goal id for merged items, the item's own id for reviews and exams
    pub key: Uuid,
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub duration_minutes: u32,
    pub completed: bool,
    pub items: Vec<ScheduledItem>,
}

/// Deterministic id for a derived item. Seeded from the date, the item's
/// position within the day and its source, so regeneration over identical
/// inputs reproduces identical ids.
pub(crate) fn derived_item_id(date: NaiveDate, sequence: usize, source: &str) -> Uuid {
    let seed = format!("{}:{}:{}", date, sequence, source);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_item_id_is_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = derived_item_id(date, 0, "source");
        let b = derived_item_id(date, 0, "source");
        assert_eq!(a, b);

        assert_ne!(a, derived_item_id(date, 1, "source"));
        assert_ne!(a, derived_item_id(date.succ_opt().unwrap(), 0, "source"));
    }
}
