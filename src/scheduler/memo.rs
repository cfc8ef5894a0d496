//! Input-keyed schedule memoization
//!
//! The engine is re-run on every state change of the host application.
//! The host keeps one [`ScheduleCache`] per learner and lets it skip the
//! recompute when nothing relevant changed; the cache key is a hash of
//! the canonical serialization of every engine input, so the core stays a
//! stateless function.

use sha2::{Digest, Sha256};

use crate::exams::models::{ExamAttempt, MockExam};
use crate::plan::models::StudyPlan;
use crate::progress::models::LearnerProgress;

use super::allocator::generate_schedule;
use super::models::{Schedule, SessionSnapshot};

/// Memoized wrapper around [`generate_schedule`]
#[derive(Debug, Default)]
pub struct ScheduleCache {
    fingerprint: Option<String>,
    schedule: Schedule,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schedule for the given inputs, recomputed only when they
    /// differ from the previous call
    pub fn get_or_generate(
        &mut self,
        plan: &StudyPlan,
        progress: &LearnerProgress,
        exams: &[MockExam],
        attempts: &[ExamAttempt],
        session: &SessionSnapshot,
    ) -> &Schedule {
        let fingerprint = input_fingerprint(plan, progress, exams, attempts, session);
        if self.fingerprint.as_deref() != Some(fingerprint.as_str()) {
            log::debug!("Schedule cache miss, regenerating");
            self.schedule = generate_schedule(plan, progress, exams, attempts, session);
            self.fingerprint = Some(fingerprint);
        }
        &self.schedule
    }

    /// Force the next call to regenerate
    pub fn invalidate(&mut self) {
        self.fingerprint = None;
    }
}

/// Hash of the canonical JSON of every engine input
fn input_fingerprint(
    plan: &StudyPlan,
    progress: &LearnerProgress,
    exams: &[MockExam],
    attempts: &[ExamAttempt],
    session: &SessionSnapshot,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(plan).unwrap_or_default());
    hasher.update(serde_json::to_vec(progress).unwrap_or_default());
    hasher.update(serde_json::to_vec(exams).unwrap_or_default());
    hasher.update(serde_json::to_vec(attempts).unwrap_or_default());
    hasher.update(serde_json::to_vec(session).unwrap_or_default());
    hex::encode(hasher.finalize())
}
