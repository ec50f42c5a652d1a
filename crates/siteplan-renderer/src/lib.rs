//! Map rendering boundary for the site planner
//!
//! The planner does not draw anything itself. It drives a map widget through
//! the [`MapRenderer`] capability trait; concrete widgets (the egui map canvas
//! in the frontend, the [`RecordingRenderer`] in tests) are adapters.

mod overlay;
mod recording;
mod surface;

pub use overlay::{CursorStyle, ModeOverlay};
pub use recording::{RecordingRenderer, RenderCommand};
pub use surface::RenderSurface;

use siteplan_core::{GeoPoint, StepKind};

/// Independently clearable groups of map shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerId {
    /// Committed or preview site boundary polygon, with committed side lengths
    SiteBoundary,
    /// Substation footprint and its marker
    Substation,
    /// Committed or preview cable route polyline, with committed segment lengths
    CableRoute,
    /// Numbered markers for the points of the active drawing
    DrawingPoints,
    /// Segment length labels for the in-progress drawing
    DistanceLabels,
    /// Site location marker
    Location,
}

impl LayerId {
    /// Layers in back-to-front paint order
    pub const ALL: [LayerId; 6] = [
        LayerId::SiteBoundary,
        LayerId::Substation,
        LayerId::CableRoute,
        LayerId::Location,
        LayerId::DistanceLabels,
        LayerId::DrawingPoints,
    ];

    /// Layer holding the geometry committed by `step`
    pub fn for_step(step: StepKind) -> Option<LayerId> {
        match step {
            StepKind::Boundary => Some(LayerId::SiteBoundary),
            StepKind::Substation => Some(LayerId::Substation),
            StepKind::Route => Some(LayerId::CableRoute),
            StepKind::Save => None,
        }
    }
}

/// Capability interface over an interactive map widget.
///
/// Shape calls append to a layer; callers clear a layer before redrawing it.
/// Click events flow the other way: the host translates widget clicks into
/// [`GeoPoint`]s and hands them to the planner.
pub trait MapRenderer {
    /// Whether the underlying map surface is initialized.
    ///
    /// Instructions issued while this is false are dropped, not queued.
    fn is_ready(&self) -> bool {
        true
    }

    /// Dashed, lightly filled polygon for a boundary still being drawn
    fn draw_preview_polygon(&mut self, layer: LayerId, points: &[GeoPoint]);

    /// Closed polygon; `points` already include the closing vertex
    fn draw_final_polygon(&mut self, layer: LayerId, points: &[GeoPoint]);

    /// Rectangle of the given size in meters centered on `center`
    fn draw_rectangle(
        &mut self,
        layer: LayerId,
        center: GeoPoint,
        width_meters: f64,
        height_meters: f64,
    );

    fn draw_polyline(&mut self, layer: LayerId, points: &[GeoPoint]);

    fn place_marker(&mut self, layer: LayerId, point: GeoPoint, label: &str);

    fn place_distance_label(&mut self, layer: LayerId, point: GeoPoint, text: &str);

    fn clear_layer(&mut self, layer: LayerId);

    /// Allow or forbid pointer-drag panning
    fn set_pannable(&mut self, pannable: bool);

    fn set_cursor(&mut self, cursor: CursorStyle);

    /// Show the drawing-mode overlay, or hide it with `None`
    fn show_overlay(&mut self, overlay: Option<&ModeOverlay>);

    /// Transient message, e.g. after a step completes
    fn show_notice(&mut self, text: &str);

    /// Move the viewport
    fn set_view(&mut self, center: GeoPoint, zoom: f64);
}
