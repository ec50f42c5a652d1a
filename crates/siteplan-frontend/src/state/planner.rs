//! Event layer tying steps, drawing, mode and renderer together
//!
//! [`SitePlanner`] receives the host's input events, routes them through the
//! [`ModeController`] and [`DrawingSession`], advances the
//! [`StepOrchestrator`] and issues render instructions. All handlers run
//! synchronously; persistence goes out through a [`PlanningSink`].

use std::time::{Duration, Instant};

use siteplan_core::{
    DistanceMarker, DrawProgress, DrawingKind, DrawingSession, GeoPoint, IgnoreReason,
    PersistenceError, PlanError, PlanResult, PlanningData, PlanningSink, PlanningUpdate,
    SUBSTATION_HEIGHT_METERS, SUBSTATION_WIDTH_METERS, StepKind, StepOrchestrator,
    segment_markers,
};
use siteplan_renderer::{LayerId, MapRenderer, RenderSurface};
use uuid::Uuid;

use super::{InputMode, ModeController};

/// Marker label for the substation premise
const SUBSTATION_LABEL: &str = "⚡";

/// Runtime knobs for the planner
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    /// How long drawing stays suspended after a secondary click
    pub pan_resume_delay: Duration,
    /// Draw segment length labels while drawing
    pub show_distance_labels: bool,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            pan_resume_delay: Duration::from_millis(100),
            show_distance_labels: true,
        }
    }
}

/// What a map click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A point was added; the shape needs more
    Accumulated { step: StepKind, count: usize },
    /// The click completed `step`; `next` is now active
    Completed {
        step: StepKind,
        next: Option<StepKind>,
    },
}

/// Interactive site planner over a map renderer and a persistence sink
pub struct SitePlanner<R: MapRenderer, S: PlanningSink> {
    session_id: Uuid,
    steps: StepOrchestrator,
    drawing: DrawingSession,
    mode: ModeController,
    surface: RenderSurface<R>,
    sink: S,
    settings: PlannerSettings,
}

impl<R: MapRenderer, S: PlanningSink> SitePlanner<R, S> {
    /// New planner with the boundary step active
    pub fn new(renderer: R, sink: S, settings: PlannerSettings) -> Self {
        Self::with_steps(StepOrchestrator::new(), renderer, sink, settings)
    }

    /// Planner resumed from geometry the wizard already holds
    pub fn restore(data: PlanningData, renderer: R, sink: S, settings: PlannerSettings) -> Self {
        tracing::info!("Restoring planner: {}", data.summary().to_string().replace('\n', ", "));
        Self::with_steps(StepOrchestrator::restored(data), renderer, sink, settings)
    }

    fn with_steps(
        steps: StepOrchestrator,
        renderer: R,
        sink: S,
        settings: PlannerSettings,
    ) -> Self {
        let mut planner = Self {
            session_id: Uuid::new_v4(),
            steps,
            drawing: DrawingSession::new(),
            mode: ModeController::new(),
            surface: RenderSurface::new(renderer),
            sink,
            settings,
        };
        planner.render_planning_data();
        planner.apply_active_step();
        planner
    }

    // ============== Accessors ==============

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn steps(&self) -> &StepOrchestrator {
        &self.steps
    }

    pub fn data(&self) -> &PlanningData {
        self.steps.data()
    }

    pub fn drawing(&self) -> &DrawingSession {
        &self.drawing
    }

    pub fn mode(&self) -> InputMode {
        self.mode.mode()
    }

    pub fn renderer(&self) -> &R {
        self.surface.renderer()
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        self.surface.renderer_mut()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: PlannerSettings) {
        self.settings = settings;
    }

    // ============== Inbound events ==============

    /// The map surface finished initializing.
    ///
    /// Re-applies deferred mode affordances and redraws committed geometry,
    /// since instructions issued before this point were dropped.
    pub fn on_surface_ready(&mut self) {
        if !self.surface.is_ready() {
            return;
        }
        tracing::debug!("Map surface ready");
        self.mode.sync(&mut self.surface);
        self.render_planning_data();
    }

    /// Primary click on the map at `point`
    pub fn on_map_click(&mut self, point: GeoPoint) -> PlanResult<ClickOutcome> {
        if !self.surface.is_ready() {
            return Self::ignored(IgnoreReason::SurfaceNotReady);
        }
        let kind = match self.mode.accepting() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::debug!("Map click at {} ignored: {}", point, err);
                return Err(err);
            }
        };

        match kind {
            DrawingKind::Substation => {
                self.place_substation(point);
                let next = self.finish_step(PlanningUpdate::SubstationPremise(point));
                Ok(ClickOutcome::Completed {
                    step: StepKind::Substation,
                    next,
                })
            }
            DrawingKind::Boundary | DrawingKind::Route => {
                let progress = self.drawing.add_point(point).inspect_err(|err| {
                    tracing::debug!("Map click at {} ignored: {}", point, err);
                })?;
                self.render_session();
                match progress {
                    DrawProgress::Accumulating { count } => Ok(ClickOutcome::Accumulated {
                        step: kind.step(),
                        count,
                    }),
                    DrawProgress::Completed(update) => {
                        self.render_completed_shape(kind);
                        let next = self.finish_step(update);
                        Ok(ClickOutcome::Completed {
                            step: kind.step(),
                            next,
                        })
                    }
                }
            }
        }
    }

    /// Secondary click: suspend drawing briefly so the map can be panned
    pub fn on_secondary_click(&mut self, now: Instant) -> bool {
        self.mode
            .handle_secondary_action(now, self.settings.pan_resume_delay, &mut self.surface)
    }

    /// Advance timed transitions. Returns true if drawing input resumed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.mode.tick(now, &mut self.surface)
    }

    /// Time until the next timed transition, for scheduling repaints
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.mode.resume_in(now)
    }

    /// The user picked a step by number
    pub fn on_step_selected(&mut self, step_id: u8) -> PlanResult<()> {
        let step = StepKind::from_id(step_id)?;
        tracing::debug!("Jumping to {}", step);
        self.steps.jump_to_step(step);
        self.apply_active_step();
        Ok(())
    }

    /// Clear the current step's geometry and go back one step
    pub fn on_undo(&mut self) {
        let outcome = self.steps.undo();
        if let Some(step) = outcome.cleared {
            self.sink.on_geometry_cleared(step, self.steps.data());
            self.render_committed(step);
        }
        self.apply_active_step();
    }

    /// Move forward one step; cleared geometry is not restored
    pub fn on_redo(&mut self) {
        if self.steps.redo().is_some() {
            self.apply_active_step();
        }
    }

    /// Hand the full planning model to persistence and finish planning.
    ///
    /// Local state moves on regardless of the outcome; the error is returned
    /// so the host can surface it.
    pub fn on_save(&mut self) -> Result<(), PersistenceError> {
        let result = self.sink.on_save_requested(self.steps.data());
        match &result {
            Ok(()) => {
                tracing::info!(session = %self.session_id, "Planning data saved");
                self.notice("Drawing saved");
            }
            Err(err) => {
                tracing::warn!(session = %self.session_id, "Save failed, keeping local state: {}", err);
            }
        }

        self.steps.complete_step(StepKind::Save, None);
        self.apply_active_step();
        result
    }

    /// Center the map on the site and mark it
    pub fn focus_location(&mut self, center: GeoPoint, zoom: f64, label: &str) {
        let _ = self.surface.draw(|r| {
            r.set_view(center, zoom);
            r.clear_layer(LayerId::Location);
            r.place_marker(LayerId::Location, center, label);
        });
    }

    // ============== Transitions ==============

    fn ignored<T>(reason: IgnoreReason) -> PlanResult<T> {
        tracing::debug!("Input ignored: {}", reason);
        Err(PlanError::InputIgnored(reason))
    }

    /// Commit `update`, notify the wizard and auto-advance
    fn finish_step(&mut self, update: PlanningUpdate) -> Option<StepKind> {
        let step = update.step();
        self.notice(&Self::completion_notice(&update));
        self.sink.on_step_completed(step, &update);

        let next = self.steps.complete_step(step, Some(update));
        tracing::info!(session = %self.session_id, "Completed {}", step);
        if next == Some(StepKind::Save) && self.drawing_steps_completed() {
            self.notice("All drawing steps completed! Ready to save.");
        }

        self.apply_active_step();
        next
    }

    fn drawing_steps_completed(&self) -> bool {
        [StepKind::Boundary, StepKind::Substation, StepKind::Route]
            .into_iter()
            .all(|step| self.steps.step(step).completed)
    }

    /// Point the mode controller at the orchestrator's active step.
    ///
    /// Uncommitted points of the step being left are abandoned and its
    /// committed geometry redrawn in place of the preview.
    fn apply_active_step(&mut self) {
        let abandoned = self
            .drawing
            .is_drawing()
            .then(|| self.drawing.kind())
            .flatten();

        self.mode
            .set_active_step(self.steps.active(), &mut self.drawing, &mut self.surface);

        if let Some(kind) = abandoned {
            tracing::debug!("Discarded {} uncommitted point(s)", kind.point_label());
            self.render_committed(kind.step());
        }
    }

    fn completion_notice(update: &PlanningUpdate) -> String {
        match update {
            PlanningUpdate::SiteBoundary(points) => {
                format!("Site boundary completed! ({} points)", points.len())
            }
            PlanningUpdate::SubstationPremise(_) => "Substation premise placed! (5m x 4m)".into(),
            PlanningUpdate::CableRoute(points) => {
                format!("Cable route completed! ({} points)", points.len())
            }
        }
    }

    // ============== Rendering ==============

    fn notice(&mut self, text: &str) {
        let _ = self.surface.draw(|r| r.show_notice(text));
    }

    /// Redraw the in-progress shape, its point markers and distance labels
    fn render_session(&mut self) {
        let Some(kind) = self.drawing.kind() else {
            return;
        };
        let points = self.drawing.points().to_vec();
        let markers = self.labels(self.drawing.distance_markers());

        let _ = self.surface.draw(|r| {
            r.clear_layer(LayerId::DrawingPoints);
            r.clear_layer(LayerId::DistanceLabels);

            for (i, point) in points.iter().enumerate() {
                r.place_marker(LayerId::DrawingPoints, *point, &(i + 1).to_string());
            }

            if points.len() >= siteplan_core::PREVIEW_MIN_POINTS {
                match kind {
                    DrawingKind::Boundary => {
                        r.clear_layer(LayerId::SiteBoundary);
                        r.draw_preview_polygon(LayerId::SiteBoundary, &points);
                    }
                    DrawingKind::Route => {
                        r.clear_layer(LayerId::CableRoute);
                        r.draw_polyline(LayerId::CableRoute, &points);
                    }
                    DrawingKind::Substation => {}
                }
            }

            for marker in &markers {
                r.place_distance_label(LayerId::DistanceLabels, marker.midpoint, &marker.label());
            }
        });
    }

    /// Distance markers to draw under the current settings
    fn labels(&self, markers: Vec<DistanceMarker>) -> Vec<DistanceMarker> {
        if self.settings.show_distance_labels {
            markers
        } else {
            Vec::new()
        }
    }

    /// Replace the preview with the finished shape.
    ///
    /// Segment labels, the closing one included, move onto the step's own
    /// layer so they outlive the session and clear with its geometry.
    fn render_completed_shape(&mut self, kind: DrawingKind) {
        let path = self.drawing.render_path();
        let markers = self.labels(self.drawing.distance_markers());
        let _ = self
            .surface
            .draw(|r| draw_committed_path(r, kind, &path, &markers));
    }

    fn place_substation(&mut self, center: GeoPoint) {
        let _ = self.surface.draw(|r| {
            r.clear_layer(LayerId::Substation);
            r.draw_rectangle(
                LayerId::Substation,
                center,
                SUBSTATION_WIDTH_METERS,
                SUBSTATION_HEIGHT_METERS,
            );
            r.place_marker(LayerId::Substation, center, SUBSTATION_LABEL);
        });
    }

    /// Redraw the committed geometry of one step from the planning data
    fn render_committed(&mut self, step: StepKind) {
        let Some(layer) = LayerId::for_step(step) else {
            return;
        };
        let data = self.steps.data();
        let path = match step {
            StepKind::Boundary if data.site_boundary.len() >= 3 => {
                let mut closed = data.site_boundary.clone();
                closed.push(data.site_boundary[0]);
                closed
            }
            StepKind::Route if data.cable_route.len() >= 2 => data.cable_route.clone(),
            _ => Vec::new(),
        };
        let markers = self.labels(segment_markers(&path));
        let substation = data.substation_premise;

        let _ = self.surface.draw(|r| match step.drawing_kind() {
            Some(kind @ (DrawingKind::Boundary | DrawingKind::Route)) if !path.is_empty() => {
                draw_committed_path(r, kind, &path, &markers);
            }
            Some(DrawingKind::Substation) => {
                r.clear_layer(layer);
                if let Some(center) = substation {
                    r.draw_rectangle(
                        layer,
                        center,
                        SUBSTATION_WIDTH_METERS,
                        SUBSTATION_HEIGHT_METERS,
                    );
                    r.place_marker(layer, center, SUBSTATION_LABEL);
                }
            }
            _ => r.clear_layer(layer),
        });
    }

    /// Redraw every committed layer
    pub fn render_planning_data(&mut self) {
        for step in [StepKind::Boundary, StepKind::Substation, StepKind::Route] {
            self.render_committed(step);
        }
    }
}

/// Finished boundary or route, with its segment labels, on the step's layer
fn draw_committed_path<R: MapRenderer>(
    r: &mut R,
    kind: DrawingKind,
    path: &[GeoPoint],
    markers: &[DistanceMarker],
) {
    let Some(layer) = LayerId::for_step(kind.step()) else {
        return;
    };
    r.clear_layer(layer);
    match kind {
        DrawingKind::Boundary => r.draw_final_polygon(layer, path),
        DrawingKind::Route => r.draw_polyline(layer, path),
        DrawingKind::Substation => return,
    }
    for marker in markers {
        r.place_distance_label(layer, marker.midpoint, &marker.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteplan_core::{RecordingSink, SinkEvent};
    use siteplan_renderer::{RecordingRenderer, RenderCommand};

    type TestPlanner = SitePlanner<RecordingRenderer, RecordingSink>;

    fn planner() -> TestPlanner {
        SitePlanner::new(
            RecordingRenderer::new(),
            RecordingSink::new(),
            PlannerSettings::default(),
        )
    }

    fn square() -> [GeoPoint; 4] {
        [
            GeoPoint::new(51.50, -0.13),
            GeoPoint::new(51.501, -0.13),
            GeoPoint::new(51.501, -0.131),
            GeoPoint::new(51.50, -0.131),
        ]
    }

    #[test]
    fn test_starts_in_boundary_mode() {
        let planner = planner();
        assert_eq!(planner.mode(), InputMode::BoundaryDraw);
        assert_eq!(planner.steps().active(), Some(StepKind::Boundary));
        assert!(!planner.renderer().is_pannable());
    }

    #[test]
    fn test_preview_appears_from_second_point() {
        let mut planner = planner();
        let points = square();

        planner.on_map_click(points[0]).unwrap();
        assert!(planner.renderer().layer(LayerId::SiteBoundary).is_empty());
        assert_eq!(planner.renderer().layer(LayerId::DrawingPoints).len(), 1);

        planner.on_map_click(points[1]).unwrap();
        assert!(matches!(
            planner.renderer().layer(LayerId::SiteBoundary),
            [RenderCommand::PreviewPolygon(_, pts)] if pts.len() == 2
        ));
        assert_eq!(planner.renderer().layer(LayerId::DistanceLabels).len(), 1);
        assert_eq!(
            planner.renderer().layer(LayerId::DrawingPoints)[1],
            RenderCommand::Marker(LayerId::DrawingPoints, points[1], "2".into())
        );
    }

    #[test]
    fn test_boundary_completion_renders_closed_polygon() {
        let mut planner = planner();
        let points = square();
        for p in &points[..3] {
            planner.on_map_click(*p).unwrap();
        }
        let outcome = planner.on_map_click(points[3]).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Completed {
                step: StepKind::Boundary,
                next: Some(StepKind::Substation)
            }
        );

        match planner.renderer().layer(LayerId::SiteBoundary) {
            [RenderCommand::FinalPolygon(_, path), labels @ ..] => {
                assert_eq!(path.len(), 5);
                assert_eq!(path[4], points[0]);
                assert_eq!(labels.len(), 4);
            }
            other => panic!("unexpected boundary layer: {:?}", other),
        }
        // The session is discarded on completion
        assert!(planner.renderer().layer(LayerId::DrawingPoints).is_empty());
        assert!(planner.drawing().points().is_empty());
        assert_eq!(planner.mode(), InputMode::SubstationPlace);
        assert_eq!(
            planner.renderer().notices()[0],
            "Site boundary completed! (4 points)"
        );
    }

    #[test]
    fn test_boundary_labels_stay_after_completion() {
        let mut planner = planner();
        let points = square();
        for p in points {
            planner.on_map_click(p).unwrap();
        }

        let closing = DistanceMarker::between(points[3], points[0]);
        let labels: Vec<_> = planner
            .renderer()
            .layer(LayerId::SiteBoundary)
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DistanceLabel(_, at, text) => Some((*at, text.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[3], (closing.midpoint, closing.label()));
        // Session labels are gone with the session
        assert!(planner.renderer().layer(LayerId::DistanceLabels).is_empty());

        // Undoing the boundary takes its labels along
        planner.on_step_selected(1).unwrap();
        planner.on_undo();
        assert!(planner.renderer().layer(LayerId::SiteBoundary).is_empty());
    }

    #[test]
    fn test_route_alone_does_not_announce_all_steps_done() {
        let mut planner = planner();
        planner.on_step_selected(3).unwrap();
        for p in &square()[..3] {
            planner.on_map_click(*p).unwrap();
        }

        assert_eq!(planner.steps().active(), Some(StepKind::Save));
        assert_eq!(
            planner.renderer().notices(),
            &["Cable route completed! (3 points)".to_string()]
        );
        assert!(matches!(
            planner.renderer().layer(LayerId::CableRoute),
            [RenderCommand::Polyline(_, pts), labels @ ..] if pts.len() == 3 && labels.len() == 2
        ));
    }

    #[test]
    fn test_distance_labels_can_be_disabled() {
        let mut planner = SitePlanner::new(
            RecordingRenderer::new(),
            RecordingSink::new(),
            PlannerSettings {
                show_distance_labels: false,
                ..Default::default()
            },
        );
        for p in square() {
            planner.on_map_click(p).unwrap();
        }
        assert!(
            !planner
                .renderer()
                .commands()
                .iter()
                .any(|c| matches!(c, RenderCommand::DistanceLabel(..)))
        );
    }

    #[test]
    fn test_click_ignored_on_save_step() {
        let mut planner = planner();
        planner.on_step_selected(4).unwrap();
        assert_eq!(
            planner.on_map_click(GeoPoint::new(51.5, -0.13)),
            Err(PlanError::InputIgnored(IgnoreReason::NotADrawingStep))
        );
        assert!(planner.sink().events().is_empty());
    }

    #[test]
    fn test_click_ignored_before_surface_ready() {
        let mut planner = SitePlanner::new(
            RecordingRenderer::not_ready(),
            RecordingSink::new(),
            PlannerSettings::default(),
        );
        assert_eq!(
            planner.on_map_click(GeoPoint::new(51.5, -0.13)),
            Err(PlanError::InputIgnored(IgnoreReason::SurfaceNotReady))
        );
        assert!(planner.drawing().points().is_empty());

        planner.renderer_mut().set_ready(true);
        planner.on_surface_ready();
        assert!(!planner.renderer().is_pannable());
        assert!(planner.on_map_click(GeoPoint::new(51.5, -0.13)).is_ok());
    }

    #[test]
    fn test_click_ignored_while_panning() {
        let mut planner = planner();
        let t0 = Instant::now();
        assert!(planner.on_secondary_click(t0));
        assert_eq!(
            planner.on_map_click(GeoPoint::new(51.5, -0.13)),
            Err(PlanError::InputIgnored(IgnoreReason::PanSuspended))
        );
        assert!(planner.drawing().points().is_empty());

        assert!(planner.tick(t0 + Duration::from_millis(100)));
        assert!(planner.on_map_click(GeoPoint::new(51.5, -0.13)).is_ok());
    }

    #[test]
    fn test_invalid_step_selection() {
        let mut planner = planner();
        assert_eq!(planner.on_step_selected(7), Err(PlanError::InvalidStep(7)));
        assert_eq!(planner.steps().active(), Some(StepKind::Boundary));
    }

    #[test]
    fn test_jump_abandons_preview_and_restores_committed() {
        let mut planner = planner();
        for p in square() {
            planner.on_map_click(p).unwrap();
        }
        planner.on_step_selected(1).unwrap();
        planner.on_map_click(GeoPoint::new(51.502, -0.132)).unwrap();
        planner.on_map_click(GeoPoint::new(51.503, -0.132)).unwrap();
        assert!(matches!(
            planner.renderer().layer(LayerId::SiteBoundary),
            [RenderCommand::PreviewPolygon(..)]
        ));

        planner.on_step_selected(3).unwrap();
        assert!(matches!(
            planner.renderer().layer(LayerId::SiteBoundary),
            [RenderCommand::FinalPolygon(_, path), labels @ ..] if path.len() == 5 && labels.len() == 4
        ));
        assert_eq!(planner.data().site_boundary.len(), 4);
    }

    #[test]
    fn test_undo_notifies_wizard_and_clears_layer() {
        let mut planner = planner();
        for p in square() {
            planner.on_map_click(p).unwrap();
        }
        planner
            .on_map_click(GeoPoint::new(51.4995, -0.1295))
            .unwrap();
        planner.on_step_selected(2).unwrap();

        planner.on_undo();
        assert_eq!(planner.steps().active(), Some(StepKind::Boundary));
        assert!(planner.data().substation_premise.is_none());
        assert!(planner.renderer().layer(LayerId::Substation).is_empty());
        assert!(matches!(
            planner.sink().events().last(),
            Some(SinkEvent::GeometryCleared(StepKind::Substation, data)) if data.site_boundary.len() == 4
        ));
    }

    #[test]
    fn test_save_failure_keeps_local_state() {
        let mut sink = RecordingSink::new();
        sink.fail_saves = Some("backend offline".into());
        let mut planner = SitePlanner::new(RecordingRenderer::new(), sink, PlannerSettings::default());
        for p in square() {
            planner.on_map_click(p).unwrap();
        }

        assert!(planner.on_save().is_err());
        assert_eq!(planner.data().site_boundary.len(), 4);
        assert!(planner.steps().is_finished());
        assert!(planner.steps().step(StepKind::Save).completed);
        assert_eq!(planner.mode(), InputMode::Idle);
        assert!(planner.renderer().is_pannable());
    }

    #[test]
    fn test_focus_location() {
        let mut planner = planner();
        let center = GeoPoint::new(51.4676, -0.3613);
        planner.focus_location(center, 16.0, "TW3 1AA");
        assert_eq!(
            planner.renderer().layer(LayerId::Location),
            &[RenderCommand::Marker(LayerId::Location, center, "TW3 1AA".into())]
        );
        assert!(
            planner
                .renderer()
                .commands()
                .contains(&RenderCommand::SetView(center, 16.0))
        );
    }

    #[test]
    fn test_restore_renders_saved_geometry() {
        let mut data = PlanningData::default();
        data.apply(PlanningUpdate::SiteBoundary(square().to_vec()));
        data.apply(PlanningUpdate::SubstationPremise(GeoPoint::new(51.4995, -0.1295)));

        let planner = SitePlanner::restore(
            data,
            RecordingRenderer::new(),
            RecordingSink::new(),
            PlannerSettings::default(),
        );
        assert_eq!(planner.steps().active(), Some(StepKind::Route));
        assert_eq!(planner.mode(), InputMode::RouteDraw);
        // Polygon plus one label per side
        assert_eq!(planner.renderer().layer(LayerId::SiteBoundary).len(), 5);
        assert_eq!(planner.renderer().layer(LayerId::Substation).len(), 2);
        assert!(planner.renderer().layer(LayerId::CableRoute).is_empty());
    }
}
