//! JSON file hand-off of planning data
//!
//! Stands in for the wizard backend: every completed step, cleared step and
//! save rewrites `<dir>/<id>.json` with the current planning model under the
//! `click_quote_data` key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use siteplan_core::{PersistenceError, PlanningData, PlanningSink, PlanningUpdate, StepKind};
use uuid::Uuid;

/// On-disk document shape
#[derive(Debug, Default, Serialize, Deserialize)]
struct WizardDocument {
    #[serde(default)]
    click_quote_data: PlanningData,
}

/// [`PlanningSink`] writing the planning model to a JSON file
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
    mirror: PlanningData,
}

impl JsonFileSink {
    /// New document with a fresh id under `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(format!("{}.json", Uuid::new_v4()));
        Self {
            path,
            mirror: PlanningData::default(),
        }
    }

    /// Continue an existing document, returning its planning data
    pub fn resume(path: impl Into<PathBuf>) -> Result<(Self, PlanningData), PersistenceError> {
        let path = path.into();
        let content =
            std::fs::read_to_string(&path).map_err(|e| PersistenceError::Io(e.to_string()))?;
        let document: WizardDocument = serde_json::from_str(&content)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        tracing::info!("Resuming plan from {:?}", path);
        let data = document.click_quote_data;
        Ok((
            Self {
                path,
                mirror: data.clone(),
            },
            data,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Planning data as last written
    pub fn mirror(&self) -> &PlanningData {
        &self.mirror
    }

    fn write(&self) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PersistenceError::Io(e.to_string()))?;
        }
        let document = WizardDocument {
            click_quote_data: self.mirror.clone(),
        };
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| PersistenceError::Io(e.to_string()))?;

        tracing::debug!("Wrote planning data to {:?}", self.path);
        Ok(())
    }

    /// Incremental writes are best effort
    fn write_logged(&self) {
        if let Err(e) = self.write() {
            tracing::warn!("Failed to persist planning data to {:?}: {}", self.path, e);
        }
    }
}

impl PlanningSink for JsonFileSink {
    fn on_step_completed(&mut self, _step: StepKind, update: &PlanningUpdate) {
        self.mirror.apply(update.clone());
        self.write_logged();
    }

    fn on_geometry_cleared(&mut self, _step: StepKind, data: &PlanningData) {
        self.mirror = data.clone();
        self.write_logged();
    }

    fn on_save_requested(&mut self, data: &PlanningData) -> Result<(), PersistenceError> {
        self.mirror = data.clone();
        self.write()
    }
}
