//! Input mode derived from the active planning step

use std::time::{Duration, Instant};

use siteplan_core::{DrawingKind, DrawingSession, IgnoreReason, PlanError, PlanResult, StepKind};
use siteplan_renderer::{CursorStyle, LayerId, MapRenderer, ModeOverlay, RenderSurface};

use super::PanSuspension;

/// How map input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// No active step
    #[default]
    Idle,
    BoundaryDraw,
    SubstationPlace,
    RouteDraw,
    /// Save step: the map is only browsed
    Save,
}

impl InputMode {
    pub fn for_step(step: Option<StepKind>) -> Self {
        match step {
            None => InputMode::Idle,
            Some(StepKind::Boundary) => InputMode::BoundaryDraw,
            Some(StepKind::Substation) => InputMode::SubstationPlace,
            Some(StepKind::Route) => InputMode::RouteDraw,
            Some(StepKind::Save) => InputMode::Save,
        }
    }

    pub fn drawing_kind(self) -> Option<DrawingKind> {
        match self {
            InputMode::BoundaryDraw => Some(DrawingKind::Boundary),
            InputMode::SubstationPlace => Some(DrawingKind::Substation),
            InputMode::RouteDraw => Some(DrawingKind::Route),
            InputMode::Idle | InputMode::Save => None,
        }
    }

    pub fn is_drawing(self) -> bool {
        self.drawing_kind().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            InputMode::Idle => "Idle",
            InputMode::BoundaryDraw => "Boundary",
            InputMode::SubstationPlace => "Substation",
            InputMode::RouteDraw => "Route",
            InputMode::Save => "Save",
        }
    }
}

/// Maps the active step onto input handling and renderer affordances
#[derive(Debug, Default)]
pub struct ModeController {
    mode: InputMode,
    pan: PanSuspension,
    /// Affordances were not applied because the surface was not ready
    needs_sync: bool,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_pan_suspended(&self) -> bool {
        self.pan.is_suspended()
    }

    pub fn needs_sync(&self) -> bool {
        self.needs_sync
    }

    /// Switch to the mode for `step`.
    ///
    /// Any in-progress points are discarded, never committed. Drag panning is
    /// disabled for drawing steps and enabled for save or idle. When the map
    /// surface is not ready the affordances are left for [`sync`](Self::sync).
    pub fn set_active_step<R: MapRenderer>(
        &mut self,
        step: Option<StepKind>,
        session: &mut DrawingSession,
        surface: &mut RenderSurface<R>,
    ) {
        self.pan.cancel();
        self.mode = InputMode::for_step(step);
        session.begin(self.mode.drawing_kind());
        tracing::debug!("Input mode: {}", self.mode.name());

        if !surface.is_ready() {
            tracing::debug!("Map surface not ready; deferring {} mode", self.mode.name());
            self.needs_sync = true;
            return;
        }

        self.needs_sync = false;
        let _ = surface.draw(|r| {
            r.clear_layer(LayerId::DrawingPoints);
            r.clear_layer(LayerId::DistanceLabels);
        });
        self.apply_affordances(surface);
    }

    /// Apply deferred affordances once the surface is ready.
    ///
    /// Returns true if anything was applied.
    pub fn sync<R: MapRenderer>(&mut self, surface: &mut RenderSurface<R>) -> bool {
        if !self.needs_sync || !surface.is_ready() {
            return false;
        }
        self.needs_sync = false;
        self.apply_affordances(surface);
        true
    }

    /// Suspend drawing so the map can be panned, resuming after `delay`.
    ///
    /// Only meaningful in a drawing mode; returns false otherwise.
    pub fn handle_secondary_action<R: MapRenderer>(
        &mut self,
        now: Instant,
        delay: Duration,
        surface: &mut RenderSurface<R>,
    ) -> bool {
        if !self.mode.is_drawing() {
            return false;
        }
        if !surface.is_ready() {
            tracing::debug!("Secondary action ignored: map surface not ready");
            return false;
        }

        self.pan.suspend(now, delay);
        let _ = surface.draw(|r| {
            r.set_pannable(true);
            r.set_cursor(CursorStyle::Grab);
            r.show_overlay(None);
        });
        true
    }

    /// Restore the drawing mode when a suspension is due.
    ///
    /// Returns true if drawing input was resumed.
    pub fn tick<R: MapRenderer>(&mut self, now: Instant, surface: &mut RenderSurface<R>) -> bool {
        if self.pan.poll(now).is_none() {
            return false;
        }
        tracing::debug!("Resuming {} mode after pan", self.mode.name());
        self.apply_affordances(surface);
        true
    }

    /// Time until a suspended mode resumes
    pub fn resume_in(&self, now: Instant) -> Option<Duration> {
        self.pan.remaining(now)
    }

    /// The drawing kind that should receive a click, or why there is none
    pub fn accepting(&self) -> PlanResult<DrawingKind> {
        let kind = match self.mode {
            InputMode::Idle => return Err(PlanError::InputIgnored(IgnoreReason::NoActiveStep)),
            InputMode::Save => {
                return Err(PlanError::InputIgnored(IgnoreReason::NotADrawingStep));
            }
            mode => mode.drawing_kind(),
        };
        if self.pan.is_suspended() {
            return Err(PlanError::InputIgnored(IgnoreReason::PanSuspended));
        }
        kind.ok_or(PlanError::InputIgnored(IgnoreReason::NoActiveStep))
    }

    fn apply_affordances<R: MapRenderer>(&self, surface: &mut RenderSurface<R>) {
        let drawing = self.mode.drawing_kind();
        let overlay = drawing.map(ModeOverlay::for_kind);
        let _ = surface.draw(|r| {
            r.set_pannable(drawing.is_none());
            r.set_cursor(if drawing.is_some() {
                CursorStyle::Crosshair
            } else {
                CursorStyle::Default
            });
            r.show_overlay(overlay.as_ref());
        });
    }
}
