//! Cycle flattening
//!
//! Expands a cycle's slot list into a flat ordered sequence of concrete
//! slots: folder references become one slot per member discipline in
//! discipline order, inheriting the folder slot's advance count.

use crate::plan::models::Discipline;

use super::models::{CycleSlot, FlatSlot, StudyCycle};

/// Flatten a cycle against the plan's discipline list.
///
/// No deduplication: a discipline referenced by several slots appears once
/// per reference.
pub fn flatten_cycle(cycle: &StudyCycle, disciplines: &[Discipline]) -> Vec<FlatSlot> {
    let mut flat = Vec::new();

    for slot in &cycle.slots {
        match slot {
            CycleSlot::Folder {
                folder_id,
                advance_count,
            } => {
                let mut members: Vec<&Discipline> = disciplines
                    .iter()
                    .filter(|d| d.folder_id == Some(*folder_id))
                    .collect();
                members.sort_by_key(|d| d.position);
                for discipline in members {
                    flat.push(FlatSlot::Discipline {
                        discipline_id: discipline.id,
                        advance_count: *advance_count,
                    });
                }
            }
            CycleSlot::Discipline {
                discipline_id,
                advance_count,
            } => flat.push(FlatSlot::Discipline {
                discipline_id: *discipline_id,
                advance_count: *advance_count,
            }),
            CycleSlot::Exam { exam_id } => flat.push(FlatSlot::Exam { exam_id: *exam_id }),
        }
    }

    log::debug!(
        "Flattened cycle '{}' into {} slots",
        cycle.name,
        flat.len()
    );
    flat
}
