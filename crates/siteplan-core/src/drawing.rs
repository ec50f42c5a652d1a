//! In-progress drawing sessions
//!
//! A session accumulates clicked points for the boundary or route step and
//! reports when the shape reaches its completion threshold. Substation
//! placement never accumulates: a single click commits it directly.

use crate::error::{IgnoreReason, PlanError, PlanResult};
use crate::geometry::{GeoPoint, distance_meters, format_distance, midpoint};
use crate::plan::PlanningUpdate;
use crate::step::{DrawingKind, StepKind};

/// Points needed before a boundary polygon closes
pub const BOUNDARY_MIN_POINTS: usize = 4;

/// Points needed before a cable route is complete
pub const ROUTE_MIN_POINTS: usize = 3;

/// Points needed before a preview shape is drawn
pub const PREVIEW_MIN_POINTS: usize = 2;

impl DrawingKind {
    /// The step this mode belongs to
    pub fn step(self) -> StepKind {
        match self {
            DrawingKind::Boundary => StepKind::Boundary,
            DrawingKind::Substation => StepKind::Substation,
            DrawingKind::Route => StepKind::Route,
        }
    }

    /// Number of points at which the session completes
    pub fn completion_threshold(self) -> usize {
        match self {
            DrawingKind::Boundary => BOUNDARY_MIN_POINTS,
            DrawingKind::Substation => 1,
            DrawingKind::Route => ROUTE_MIN_POINTS,
        }
    }

    /// Label prefix for numbered point markers
    pub fn point_label(self) -> &'static str {
        match self {
            DrawingKind::Boundary => "Boundary Point",
            DrawingKind::Substation => "Substation Premise",
            DrawingKind::Route => "Route Point",
        }
    }
}

/// Segment length label placed at the middle of a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMarker {
    pub midpoint: GeoPoint,
    pub distance_meters: f64,
}

impl DistanceMarker {
    pub fn between(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            midpoint: midpoint(a, b),
            distance_meters: distance_meters(a, b),
        }
    }

    pub fn label(&self) -> String {
        format_distance(self.distance_meters)
    }
}

/// One marker per consecutive pair of `path` vertices
pub fn segment_markers(path: &[GeoPoint]) -> Vec<DistanceMarker> {
    path.windows(2)
        .map(|pair| DistanceMarker::between(pair[0], pair[1]))
        .collect()
}

/// Outcome of adding a point to a session
#[derive(Debug, Clone, PartialEq)]
pub enum DrawProgress {
    /// More points are needed
    Accumulating { count: usize },
    /// The threshold was reached; the geometry is ready to commit
    Completed(PlanningUpdate),
}

/// Points being drawn for the active step
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    kind: Option<DrawingKind>,
    points: Vec<GeoPoint>,
    is_drawing: bool,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any points and start drawing `kind` (or nothing)
    pub fn begin(&mut self, kind: Option<DrawingKind>) {
        self.reset();
        self.kind = kind;
    }

    /// Clear points and drawing flag, keeping the mode
    pub fn reset(&mut self) {
        self.points.clear();
        self.is_drawing = false;
    }

    pub fn kind(&self) -> Option<DrawingKind> {
        self.kind
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// The session reached its threshold and awaits a reset
    pub fn is_complete(&self) -> bool {
        !self.is_drawing && !self.points.is_empty()
    }

    /// Append a point to a boundary or route
    pub fn add_point(&mut self, point: GeoPoint) -> PlanResult<DrawProgress> {
        let Some(kind) = self.kind else {
            return Err(PlanError::InputIgnored(IgnoreReason::NoActiveStep));
        };
        let commit: fn(Vec<GeoPoint>) -> PlanningUpdate = match kind {
            DrawingKind::Boundary => PlanningUpdate::SiteBoundary,
            DrawingKind::Route => PlanningUpdate::CableRoute,
            DrawingKind::Substation => {
                return Err(PlanError::InputIgnored(IgnoreReason::NotAccumulating));
            }
        };
        if self.is_complete() {
            return Err(PlanError::InputIgnored(IgnoreReason::SessionComplete));
        }

        self.points.push(point);
        self.is_drawing = true;

        if self.points.len() < kind.completion_threshold() {
            return Ok(DrawProgress::Accumulating {
                count: self.points.len(),
            });
        }

        self.is_drawing = false;
        Ok(DrawProgress::Completed(commit(self.points.clone())))
    }

    /// One marker per segment, including the closing segment once a
    /// boundary is complete
    pub fn distance_markers(&self) -> Vec<DistanceMarker> {
        segment_markers(&self.render_path())
    }

    /// Vertices for rendering, with the first point re-appended once a
    /// boundary is complete
    pub fn render_path(&self) -> Vec<GeoPoint> {
        let mut path = self.points.clone();
        if self.kind == Some(DrawingKind::Boundary)
            && self.is_complete()
            && let Some(&first) = self.points.first()
        {
            path.push(first);
        }
        path
    }
}
