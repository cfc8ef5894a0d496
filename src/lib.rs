//! lectio: the scheduling core of a personal study-plan manager.
//!
//! Administrators build a curriculum tree (disciplines, subjects, goals,
//! optional sub-lessons) and a study cycle describing rotation order. The
//! [`scheduler`] module turns those, together with a learner's weekly
//! routine and completion history, into a day-by-day agenda with spaced
//! review injection, mock-exam slots and pause/advance semantics.
//!
//! Schedule generation is a pure function over immutable snapshots: it
//! never mutates its inputs or reads the wall clock, and it is re-run in
//! full whenever any input changes. The host application owns all mutable
//! state and persists it through the storage types in [`plan`] and
//! [`progress`].

pub mod cycle;
pub mod exams;
pub mod plan;
pub mod progress;
pub mod scheduler;
