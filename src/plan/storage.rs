//! Study plan storage operations
//!
//! Handles CRUD for study plans, stored in plans.json

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use super::models::StudyPlan;

/// Error type for plan storage operations
#[derive(Debug, thiserror::Error)]
pub enum PlanStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plan not found: {0}")]
    NotFound(Uuid),
}

/// Default base path for app data (e.g. ~/.local/share/lectio)
pub fn default_base_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lectio"))
}

/// Storage for study plans
pub struct PlanStorage {
    base_path: PathBuf,
}

impl PlanStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Path to plans.json
    fn plans_file(&self) -> PathBuf {
        self.base_path.join("plans.json")
    }

    /// List all plans
    pub fn list_plans(&self) -> Result<Vec<StudyPlan>, PlanStorageError> {
        let file = self.plans_file();
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&file)?;
        let plans: Vec<StudyPlan> = serde_json::from_str(&content)?;
        Ok(plans)
    }

    /// Get a plan by ID
    pub fn get_plan(&self, id: Uuid) -> Result<StudyPlan, PlanStorageError> {
        self.list_plans()?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or(PlanStorageError::NotFound(id))
    }

    /// Insert or update a plan
    pub fn save_plan(&self, plan: &StudyPlan) -> Result<(), PlanStorageError> {
        let mut plans = self.list_plans()?;
        match plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => *existing = plan.clone(),
            None => {
                log::info!("Creating plan '{}'", plan.name);
                plans.push(plan.clone());
            }
        }
        self.write_plans(&plans)
    }

    /// Delete a plan by ID
    pub fn delete_plan(&self, id: Uuid) -> Result<(), PlanStorageError> {
        let mut plans = self.list_plans()?;
        let before = plans.len();
        plans.retain(|p| p.id != id);
        if plans.len() == before {
            return Err(PlanStorageError::NotFound(id));
        }
        self.write_plans(&plans)
    }

    fn write_plans(&self, plans: &[StudyPlan]) -> Result<(), PlanStorageError> {
        fs::create_dir_all(&self.base_path)?;
        let content = serde_json::to_string_pretty(plans)?;
        fs::write(self.plans_file(), content)?;
        Ok(())
    }
}
