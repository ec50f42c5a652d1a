//! Persistence collaborator interface
//!
//! The planner hands geometry upward through a [`PlanningSink`]; it never
//! persists anything itself. Calls are fire-and-forget from the planner's
//! point of view: a failed save is logged and local state is kept.

use crate::error::PersistenceError;
use crate::plan::{PlanningData, PlanningUpdate};
use crate::step::StepKind;

/// Receives planning results for the surrounding wizard state
pub trait PlanningSink {
    /// A drawing step completed with `update` as its geometry
    fn on_step_completed(&mut self, step: StepKind, update: &PlanningUpdate);

    /// Undo removed the geometry of `step`; `data` is the remaining model
    fn on_geometry_cleared(&mut self, _step: StepKind, _data: &PlanningData) {}

    /// The user asked to save the full planning model
    fn on_save_requested(&mut self, data: &PlanningData) -> Result<(), PersistenceError>;
}

/// A sink call captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    StepCompleted(StepKind, PlanningUpdate),
    GeometryCleared(StepKind, PlanningData),
    SaveRequested(PlanningData),
}

/// Sink that records every call, used by headless hosts and tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
    /// Reject saves with this message
    pub fail_saves: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn completions(&self) -> impl Iterator<Item = (StepKind, &PlanningUpdate)> {
        self.events.iter().filter_map(|e| match e {
            SinkEvent::StepCompleted(step, update) => Some((*step, update)),
            _ => None,
        })
    }

    pub fn saves(&self) -> impl Iterator<Item = &PlanningData> {
        self.events.iter().filter_map(|e| match e {
            SinkEvent::SaveRequested(data) => Some(data),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PlanningSink for RecordingSink {
    fn on_step_completed(&mut self, step: StepKind, update: &PlanningUpdate) {
        self.events
            .push(SinkEvent::StepCompleted(step, update.clone()));
    }

    fn on_geometry_cleared(&mut self, step: StepKind, data: &PlanningData) {
        self.events
            .push(SinkEvent::GeometryCleared(step, data.clone()));
    }

    fn on_save_requested(&mut self, data: &PlanningData) -> Result<(), PersistenceError> {
        self.events.push(SinkEvent::SaveRequested(data.clone()));
        match &self.fail_saves {
            Some(reason) => Err(PersistenceError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}
