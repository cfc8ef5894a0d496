//! Study cycle data models
//!
//! A cycle is the rotation order in which disciplines (or mock exams) are
//! visited day over day. Slots may reference whole folders of disciplines;
//! those expand at flatten time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One slot in a study cycle rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CycleSlot {
    /// Expands to one slot per member discipline when the cycle is flattened
    Folder {
        #[serde(rename = "folderId")]
        folder_id: Uuid,
        #[serde(rename = "advanceCount")]
        advance_count: u32,
    },
    /// Visit one discipline, advancing up to `advance_count` subjects
    Discipline {
        #[serde(rename = "disciplineId")]
        discipline_id: Uuid,
        #[serde(rename = "advanceCount")]
        advance_count: u32,
    },
    /// A whole-slot mock exam; advances no subjects
    Exam {
        #[serde(rename = "examId")]
        exam_id: Uuid,
    },
}

/// An ordered study rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyCycle {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slots: Vec<CycleSlot>,
}

impl StudyCycle {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slots: Vec::new(),
        }
    }
}

/// A cycle slot after folder expansion. Folder references never survive
/// flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlatSlot {
    Discipline {
        discipline_id: Uuid,
        advance_count: u32,
    },
    Exam {
        exam_id: Uuid,
    },
}
