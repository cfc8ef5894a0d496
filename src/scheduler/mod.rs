//! Schedule generation engine
//!
//! A deterministic greedy allocator with no objective function and no
//! I/O. The host re-invokes it (usually via [`ScheduleCache`]) whenever
//! the curriculum, cycle, routine, completion set, review queue or
//! advance flag changes.

pub mod allocator;
pub mod duration;
pub mod grouping;
pub mod memo;
pub mod models;
pub mod revisions;
pub mod tasks;

pub use allocator::{generate_schedule, AllocatorState};
pub use duration::{effective_duration, goal_full_duration, review_duration};
pub use grouping::group_items;
pub use memo::ScheduleCache;
pub use models::{GroupedItem, Schedule, ScheduledItem, SessionSnapshot};
pub use tasks::{flatten_discipline_tasks, TaskEntry};
