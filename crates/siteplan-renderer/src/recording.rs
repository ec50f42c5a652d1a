//! Renderer that records instructions instead of drawing them

use std::collections::BTreeMap;

use siteplan_core::GeoPoint;

use crate::{CursorStyle, LayerId, MapRenderer, ModeOverlay};

/// A single instruction received by [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    PreviewPolygon(LayerId, Vec<GeoPoint>),
    FinalPolygon(LayerId, Vec<GeoPoint>),
    Rectangle {
        layer: LayerId,
        center: GeoPoint,
        width_meters: f64,
        height_meters: f64,
    },
    Polyline(LayerId, Vec<GeoPoint>),
    Marker(LayerId, GeoPoint, String),
    DistanceLabel(LayerId, GeoPoint, String),
    ClearLayer(LayerId),
    SetPannable(bool),
    SetCursor(CursorStyle),
    ShowOverlay(Option<ModeOverlay>),
    ShowNotice(String),
    SetView(GeoPoint, f64),
}

impl RenderCommand {
    /// Layer a shape command draws into
    pub fn layer(&self) -> Option<LayerId> {
        match self {
            RenderCommand::PreviewPolygon(layer, _)
            | RenderCommand::FinalPolygon(layer, _)
            | RenderCommand::Polyline(layer, _)
            | RenderCommand::Marker(layer, _, _)
            | RenderCommand::DistanceLabel(layer, _, _) => Some(*layer),
            RenderCommand::Rectangle { layer, .. } => Some(*layer),
            _ => None,
        }
    }
}

/// Headless renderer keeping a command log and the resulting layer contents
#[derive(Debug)]
pub struct RecordingRenderer {
    ready: bool,
    commands: Vec<RenderCommand>,
    layers: BTreeMap<LayerId, Vec<RenderCommand>>,
    pannable: bool,
    cursor: CursorStyle,
    overlay: Option<ModeOverlay>,
    notices: Vec<String>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            ready: true,
            commands: Vec::new(),
            layers: BTreeMap::new(),
            pannable: true,
            cursor: CursorStyle::Default,
            overlay: None,
            notices: Vec::new(),
        }
    }

    /// Renderer whose surface is not initialized yet
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Forget the command log, keeping layer contents
    pub fn clear_log(&mut self) {
        self.commands.clear();
    }

    /// Shapes currently on `layer`
    pub fn layer(&self, layer: LayerId) -> &[RenderCommand] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_pannable(&self) -> bool {
        self.pannable
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn overlay(&self) -> Option<&ModeOverlay> {
        self.overlay.as_ref()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    fn record(&mut self, command: RenderCommand) {
        if let Some(layer) = command.layer() {
            self.layers.entry(layer).or_default().push(command.clone());
        }
        self.commands.push(command);
    }
}

impl MapRenderer for RecordingRenderer {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn draw_preview_polygon(&mut self, layer: LayerId, points: &[GeoPoint]) {
        self.record(RenderCommand::PreviewPolygon(layer, points.to_vec()));
    }

    fn draw_final_polygon(&mut self, layer: LayerId, points: &[GeoPoint]) {
        self.record(RenderCommand::FinalPolygon(layer, points.to_vec()));
    }

    fn draw_rectangle(
        &mut self,
        layer: LayerId,
        center: GeoPoint,
        width_meters: f64,
        height_meters: f64,
    ) {
        self.record(RenderCommand::Rectangle {
            layer,
            center,
            width_meters,
            height_meters,
        });
    }

    fn draw_polyline(&mut self, layer: LayerId, points: &[GeoPoint]) {
        self.record(RenderCommand::Polyline(layer, points.to_vec()));
    }

    fn place_marker(&mut self, layer: LayerId, point: GeoPoint, label: &str) {
        self.record(RenderCommand::Marker(layer, point, label.to_string()));
    }

    fn place_distance_label(&mut self, layer: LayerId, point: GeoPoint, text: &str) {
        self.record(RenderCommand::DistanceLabel(layer, point, text.to_string()));
    }

    fn clear_layer(&mut self, layer: LayerId) {
        self.layers.remove(&layer);
        self.record(RenderCommand::ClearLayer(layer));
    }

    fn set_pannable(&mut self, pannable: bool) {
        self.pannable = pannable;
        self.record(RenderCommand::SetPannable(pannable));
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
        self.record(RenderCommand::SetCursor(cursor));
    }

    fn show_overlay(&mut self, overlay: Option<&ModeOverlay>) {
        self.overlay = overlay.cloned();
        self.record(RenderCommand::ShowOverlay(overlay.cloned()));
    }

    fn show_notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
        self.record(RenderCommand::ShowNotice(text.to_string()));
    }

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        self.record(RenderCommand::SetView(center, zoom));
    }
}
