//! Learner progress storage operations
//!
//! Handles persistence of learner progress records, stored in progress.json

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use super::models::LearnerProgress;

/// Error type for progress storage operations
#[derive(Debug, thiserror::Error)]
pub enum ProgressStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Progress record not found for learner: {0}")]
    NotFound(Uuid),
}

/// Storage for learner progress records
pub struct ProgressStorage {
    base_path: PathBuf,
}

impl ProgressStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Path to progress.json
    fn progress_file(&self) -> PathBuf {
        self.base_path.join("progress.json")
    }

    /// List all progress records
    pub fn list_records(&self) -> Result<Vec<LearnerProgress>, ProgressStorageError> {
        let file = self.progress_file();
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&file)?;
        let records: Vec<LearnerProgress> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Get one learner's record
    pub fn get_record(&self, learner_id: Uuid) -> Result<LearnerProgress, ProgressStorageError> {
        self.list_records()?
            .into_iter()
            .find(|r| r.learner_id == learner_id)
            .ok_or(ProgressStorageError::NotFound(learner_id))
    }

    /// Get one learner's record, creating a fresh one on first access
    pub fn load_or_create(
        &self,
        learner_id: Uuid,
    ) -> Result<LearnerProgress, ProgressStorageError> {
        match self.get_record(learner_id) {
            Ok(record) => Ok(record),
            Err(ProgressStorageError::NotFound(_)) => {
                let record = LearnerProgress::new(learner_id);
                self.save_record(&record)?;
                log::info!("Created progress record for learner {}", learner_id);
                Ok(record)
            }
            Err(e) => Err(e),
        }
    }

    /// Insert or update a learner's record
    pub fn save_record(&self, record: &LearnerProgress) -> Result<(), ProgressStorageError> {
        let mut records = self.list_records()?;
        match records.iter_mut().find(|r| r.learner_id == record.learner_id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }

        fs::create_dir_all(&self.base_path)?;
        let content = serde_json::to_string_pretty(&records)?;
        fs::write(self.progress_file(), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::models::completion_key;

    #[test]
    fn test_load_or_create_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());
        let learner = Uuid::new_v4();

        let mut record = storage.load_or_create(learner).unwrap();
        assert!(record.completed.is_empty());

        record
            .completed
            .insert(completion_key(Uuid::new_v4(), None));
        record.semi_active = true;
        storage.save_record(&record).unwrap();

        let reloaded = storage.get_record(learner).unwrap();
        assert_eq!(reloaded, record);
    }

    #[test]
    fn test_get_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());

        assert!(matches!(
            storage.get_record(Uuid::new_v4()),
            Err(ProgressStorageError::NotFound(_))
        ));
    }
}
