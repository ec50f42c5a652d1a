//! Planning steps and their sequencing
//!
//! The planner walks through four steps: site boundary, substation premise,
//! cable route and save. Completing a step auto-advances to the next one.
//! Users may also jump to any step, undo (which clears the current step's
//! geometry and regresses) and redo (which only moves forward).

use crate::error::{PlanError, PlanResult};
use crate::plan::{PlanningData, PlanningUpdate};

/// The four planning steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepKind {
    /// Draw the site boundary polygon
    Boundary,
    /// Place the substation premise
    Substation,
    /// Draw the cable route polyline
    Route,
    /// Save the drawing
    Save,
}

/// Geometry-producing modes a drawing session can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawingKind {
    Boundary,
    Substation,
    Route,
}

impl StepKind {
    pub const ALL: [StepKind; 4] = [
        StepKind::Boundary,
        StepKind::Substation,
        StepKind::Route,
        StepKind::Save,
    ];

    /// One-based step number shown to users
    pub fn id(self) -> u8 {
        match self {
            StepKind::Boundary => 1,
            StepKind::Substation => 2,
            StepKind::Route => 3,
            StepKind::Save => 4,
        }
    }

    /// Look up a step by its one-based number
    pub fn from_id(id: u8) -> PlanResult<Self> {
        match id {
            1 => Ok(StepKind::Boundary),
            2 => Ok(StepKind::Substation),
            3 => Ok(StepKind::Route),
            4 => Ok(StepKind::Save),
            other => Err(PlanError::InvalidStep(other)),
        }
    }

    pub fn next(self) -> Option<StepKind> {
        match self {
            StepKind::Boundary => Some(StepKind::Substation),
            StepKind::Substation => Some(StepKind::Route),
            StepKind::Route => Some(StepKind::Save),
            StepKind::Save => None,
        }
    }

    pub fn previous(self) -> Option<StepKind> {
        match self {
            StepKind::Boundary => None,
            StepKind::Substation => Some(StepKind::Boundary),
            StepKind::Route => Some(StepKind::Substation),
            StepKind::Save => Some(StepKind::Route),
        }
    }

    /// The drawing mode for this step, `None` for save
    pub fn drawing_kind(self) -> Option<DrawingKind> {
        match self {
            StepKind::Boundary => Some(DrawingKind::Boundary),
            StepKind::Substation => Some(DrawingKind::Substation),
            StepKind::Route => Some(DrawingKind::Route),
            StepKind::Save => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StepKind::Boundary => "Draw site boundary",
            StepKind::Substation => "Plot substation premise",
            StepKind::Route => "Draw cable route",
            StepKind::Save => "Save",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StepKind::Boundary => "Define the area where the connection will be made",
            StepKind::Substation => {
                "Standard size (5m x 4m) - Place substation premise (and the point of supply)"
            }
            StepKind::Route => "(between the point of supply and the existing network)",
            StepKind::Save => "Save the drawing and proceed to next step",
        }
    }

    /// Short label for step buttons
    pub fn icon(self) -> &'static str {
        match self {
            StepKind::Boundary => "📐",
            StepKind::Substation => "🏠",
            StepKind::Route => "⚡",
            StepKind::Save => "💾",
        }
    }

    /// Name used in completion notices
    pub fn display_name(self) -> &'static str {
        match self {
            StepKind::Boundary => "Site Boundary",
            StepKind::Substation => "Substation Premise",
            StepKind::Route => "Cable Route",
            StepKind::Save => "Save",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.id(), self.display_name())
    }
}

/// Completion and activity flags for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub completed: bool,
    pub active: bool,
}

impl Step {
    fn new(kind: StepKind) -> Self {
        Self {
            kind,
            completed: false,
            active: false,
        }
    }

    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    /// Progress counter shown on the substation step (`0/1`, `1/1`)
    pub fn count(&self) -> Option<&'static str> {
        match self.kind {
            StepKind::Substation if self.completed => Some("1/1"),
            StepKind::Substation => Some("0/1"),
            _ => None,
        }
    }
}

/// Result of an undo transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoOutcome {
    /// Step whose committed geometry was removed, if it had any
    pub cleared: Option<StepKind>,
    /// Step active after the undo
    pub active: StepKind,
}

/// Owns the four-step sequence and the committed planning data
#[derive(Debug, Clone)]
pub struct StepOrchestrator {
    steps: [Step; 4],
    data: PlanningData,
}

impl Default for StepOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl StepOrchestrator {
    /// Fresh sequence with the boundary step active
    pub fn new() -> Self {
        let mut steps = StepKind::ALL.map(Step::new);
        steps[0].active = true;
        Self {
            steps,
            data: PlanningData::default(),
        }
    }

    /// Sequence resumed from previously saved geometry.
    ///
    /// Drawing steps with geometry are marked completed and the first step
    /// without it becomes active (save, when all three are present).
    pub fn restored(data: PlanningData) -> Self {
        let mut steps = StepKind::ALL.map(Step::new);
        for step in steps.iter_mut() {
            step.completed = data.has_geometry(step.kind);
        }
        let first_open = steps
            .iter()
            .position(|s| !s.completed)
            .unwrap_or(steps.len() - 1);
        steps[first_open].active = true;
        Self { steps, data }
    }

    pub fn steps(&self) -> &[Step; 4] {
        &self.steps
    }

    pub fn step(&self, kind: StepKind) -> &Step {
        &self.steps[Self::index(kind)]
    }

    pub fn data(&self) -> &PlanningData {
        &self.data
    }

    /// The active step, `None` once everything is done
    pub fn active(&self) -> Option<StepKind> {
        self.steps.iter().find(|s| s.active).map(|s| s.kind)
    }

    pub fn is_finished(&self) -> bool {
        self.active().is_none()
    }

    /// Mark `kind` completed, merge its geometry and auto-advance.
    ///
    /// Returns the newly active step, or `None` when the save step completed.
    pub fn complete_step(
        &mut self,
        kind: StepKind,
        update: Option<PlanningUpdate>,
    ) -> Option<StepKind> {
        if let Some(update) = update {
            self.data.apply(update);
        }

        let next = kind.next();
        for step in self.steps.iter_mut() {
            if step.kind == kind {
                step.completed = true;
            }
            step.active = Some(step.kind) == next;
        }
        tracing::debug!("Completed {}, next: {:?}", kind, next);
        next
    }

    /// Activate `kind` regardless of completion order
    pub fn jump_to_step(&mut self, kind: StepKind) {
        self.set_active(kind);
    }

    /// Clear the current step's geometry and move back one step.
    ///
    /// On the boundary step the boundary is cleared and the step stays active.
    /// Once finished, undo behaves as if the save step were active.
    pub fn undo(&mut self) -> UndoOutcome {
        let current = self.active().unwrap_or(StepKind::Save);
        let cleared = self.data.clear_step(current).then_some(current);

        for step in self.steps.iter_mut() {
            if step.kind >= current {
                step.completed = false;
            }
        }

        let active = current.previous().unwrap_or(StepKind::Boundary);
        self.set_active(active);
        tracing::debug!("Undo from {} to {} (cleared: {:?})", current, active, cleared);
        UndoOutcome { cleared, active }
    }

    /// Move forward one step without restoring any geometry.
    ///
    /// Returns the active step when it changed.
    pub fn redo(&mut self) -> Option<StepKind> {
        let next = self.active()?.next()?;
        self.set_active(next);
        Some(next)
    }

    fn set_active(&mut self, kind: StepKind) {
        for step in self.steps.iter_mut() {
            step.active = step.kind == kind;
        }
    }

    fn index(kind: StepKind) -> usize {
        usize::from(kind.id() - 1)
    }
}
