//! egui map widget implementing [`MapRenderer`]

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use glam::DVec2;
use siteplan_core::{GeoBounds, GeoPoint};
use siteplan_renderer::{CursorStyle, LayerId, MapRenderer, ModeOverlay};

use super::projection::{MapView, project};

/// Colors for map layers
pub mod layer_colors {
    use egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(236, 238, 232);
    pub const GRID: Color32 = Color32::from_rgb(220, 222, 215);
    pub const BOUNDARY: Color32 = Color32::from_rgb(59, 130, 246); // Blue
    pub const BOUNDARY_FILL: Color32 = Color32::from_rgba_premultiplied(15, 33, 62, 64);
    pub const SUBSTATION: Color32 = Color32::from_rgb(220, 38, 38); // Red
    pub const SUBSTATION_FILL: Color32 = Color32::from_rgba_premultiplied(88, 15, 15, 102);
    pub const ROUTE: Color32 = Color32::from_rgb(16, 185, 129); // Green
    pub const POINT: Color32 = Color32::from_rgb(37, 99, 235);
    pub const LOCATION: Color32 = Color32::from_rgb(234, 88, 12); // Orange
    pub const LABEL_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 170);
}

/// One shape on a map layer, in geographic coordinates
#[derive(Debug, Clone)]
enum MapShape {
    Polygon { points: Vec<GeoPoint>, preview: bool },
    Rectangle(GeoBounds),
    Polyline(Vec<GeoPoint>),
    Marker { point: GeoPoint, label: String },
    Label { point: GeoPoint, text: String },
}

/// Input gathered from one frame of the map widget
#[derive(Debug, Clone, Copy, Default)]
pub struct MapResponse {
    /// Primary click location
    pub clicked: Option<GeoPoint>,
    pub secondary_clicked: bool,
    /// Map is being dragged with the secondary button
    pub secondary_dragging: bool,
    /// Pointer location while hovering
    pub hover: Option<GeoPoint>,
}

/// Slippy-map style canvas holding retained layers
pub struct MapCanvas {
    view: MapView,
    ready: bool,
    layers: BTreeMap<LayerId, Vec<MapShape>>,
    pannable: bool,
    cursor: CursorStyle,
    overlay: Option<ModeOverlay>,
    notice: Option<(String, Instant)>,
    notice_duration: Duration,
}

impl MapCanvas {
    /// The canvas reports ready only after its first frame has been laid out
    pub fn new(view: MapView, notice_duration: Duration) -> Self {
        Self {
            view,
            ready: false,
            layers: BTreeMap::new(),
            pannable: true,
            cursor: CursorStyle::Default,
            overlay: None,
            notice: None,
            notice_duration,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Time until the current notice disappears
    pub fn notice_remaining(&self, now: Instant) -> Option<Duration> {
        self.notice
            .as_ref()
            .map(|(_, shown)| (*shown + self.notice_duration).saturating_duration_since(now))
    }

    fn push(&mut self, layer: LayerId, shape: MapShape) {
        self.layers.entry(layer).or_default().push(shape);
    }

    /// Draw the map and collect this frame's input
    pub fn show(&mut self, ui: &mut egui::Ui) -> MapResponse {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let size = DVec2::new(rect.width() as f64, rect.height() as f64);
        let to_local = |pos: Pos2| DVec2::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);

        if !self.ready {
            tracing::debug!("Map canvas ready ({:.0}x{:.0})", rect.width(), rect.height());
            self.ready = true;
        }

        if self.pannable && response.dragged() {
            let delta = response.drag_delta();
            self.view.pan_by(DVec2::new(delta.x as f64, delta.y as f64));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0
                && let Some(pos) = response.hover_pos()
            {
                self.view.zoom_by(scroll as f64 / 200.0, to_local(pos), size);
            }
            ui.ctx().set_cursor_icon(match self.cursor {
                CursorStyle::Default => CursorIcon::Default,
                CursorStyle::Crosshair => CursorIcon::Crosshair,
                CursorStyle::Grab if response.dragged() => CursorIcon::Grabbing,
                CursorStyle::Grab => CursorIcon::Grab,
            });
        }

        let view = self.view;
        let to_screen = |p: GeoPoint| {
            let s = view.to_screen(p, size);
            Pos2::new(rect.min.x + s.x as f32, rect.min.y + s.y as f32)
        };

        painter.rect_filled(rect, 0.0, layer_colors::BACKGROUND);
        self.paint_grid(&painter, rect);
        for layer in LayerId::ALL {
            if let Some(shapes) = self.layers.get(&layer) {
                for shape in shapes {
                    paint_shape(&painter, layer, shape, &to_screen);
                }
            }
        }

        if let Some(overlay) = &self.overlay {
            paint_overlay(&painter, rect, overlay);
        }

        let now = Instant::now();
        if self
            .notice
            .as_ref()
            .is_some_and(|(_, shown)| now.duration_since(*shown) >= self.notice_duration)
        {
            self.notice = None;
        }
        if let Some((text, _)) = &self.notice {
            paint_notice(&painter, rect, text);
        }

        let hover = response.hover_pos().map(|pos| view.from_screen(to_local(pos), size));
        if let Some(point) = hover {
            painter.text(
                rect.left_bottom() + Vec2::new(8.0, -8.0),
                Align2::LEFT_BOTTOM,
                point.to_string(),
                FontId::monospace(11.0),
                Color32::DARK_GRAY,
            );
        }

        let clicked = if response.clicked() {
            response
                .interact_pointer_pos()
                .map(|pos| view.from_screen(to_local(pos), size))
        } else {
            None
        };

        MapResponse {
            clicked,
            secondary_clicked: response.secondary_clicked(),
            secondary_dragging: response.dragged_by(egui::PointerButton::Secondary),
            hover,
        }
    }

    /// Light graticule spaced at a round number of meters
    fn paint_grid(&self, painter: &egui::Painter, rect: Rect) {
        let meters_per_pixel = self.view.meters_per_pixel();
        let spacing_m = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 5000.0]
            .into_iter()
            .find(|m| m / meters_per_pixel >= 60.0)
            .unwrap_or(10_000.0);
        let spacing = (spacing_m / meters_per_pixel) as f32;
        if spacing < 4.0 {
            return;
        }
        let stroke = Stroke::new(1.0, layer_colors::GRID);

        // Anchor lines to world pixels so the grid follows panning
        let world = project(self.view.center, self.view.zoom);
        let mut x = rect.min.x + (rect.width() / 2.0 - world.x as f32).rem_euclid(spacing);
        while x < rect.max.x {
            painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
            x += spacing;
        }
        let mut y = rect.min.y + (rect.height() / 2.0 - world.y as f32).rem_euclid(spacing);
        while y < rect.max.y {
            painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
            y += spacing;
        }

        painter.text(
            rect.right_bottom() + Vec2::new(-8.0, -8.0),
            Align2::RIGHT_BOTTOM,
            format!("grid {}m", spacing_m),
            FontId::proportional(11.0),
            Color32::GRAY,
        );
    }
}

fn layer_color(layer: LayerId) -> Color32 {
    match layer {
        LayerId::SiteBoundary => layer_colors::BOUNDARY,
        LayerId::Substation => layer_colors::SUBSTATION,
        LayerId::CableRoute => layer_colors::ROUTE,
        LayerId::DrawingPoints | LayerId::DistanceLabels => layer_colors::POINT,
        LayerId::Location => layer_colors::LOCATION,
    }
}

fn paint_shape(
    painter: &egui::Painter,
    layer: LayerId,
    shape: &MapShape,
    to_screen: &impl Fn(GeoPoint) -> Pos2,
) {
    let color = layer_color(layer);
    match shape {
        MapShape::Polygon { points, preview } => {
            let screen: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();
            // Fill assumes a roughly convex outline
            if screen.len() >= 3 {
                painter.add(Shape::convex_polygon(
                    screen.clone(),
                    layer_colors::BOUNDARY_FILL,
                    Stroke::NONE,
                ));
            }
            if *preview {
                let mut closed = screen;
                if let Some(&first) = closed.first() {
                    closed.push(first);
                }
                painter.extend(Shape::dashed_line(&closed, Stroke::new(2.0, color), 10.0, 10.0));
            } else {
                painter.add(Shape::line(screen, Stroke::new(3.0, color)));
            }
        }
        MapShape::Rectangle(bounds) => {
            let corners: Vec<Pos2> = bounds.corners().iter().map(|p| to_screen(*p)).collect();
            painter.add(Shape::convex_polygon(
                corners.clone(),
                layer_colors::SUBSTATION_FILL,
                Stroke::NONE,
            ));
            painter.add(Shape::closed_line(corners, Stroke::new(2.0, color)));
        }
        MapShape::Polyline(points) => {
            let screen: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();
            painter.add(Shape::line(screen.clone(), Stroke::new(4.0, color)));
            for pos in screen {
                painter.circle_filled(pos, 3.0, color);
            }
        }
        MapShape::Marker { point, label } => {
            let pos = to_screen(*point);
            painter.circle_filled(pos, 9.0, color);
            painter.circle_stroke(pos, 9.0, Stroke::new(1.5, Color32::WHITE));
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(11.0),
                Color32::WHITE,
            );
        }
        MapShape::Label { point, text } => {
            let pos = to_screen(*point);
            let galley =
                painter.layout_no_wrap(text.clone(), FontId::proportional(11.0), Color32::WHITE);
            let label_rect = Align2::CENTER_CENTER.anchor_size(pos, galley.size());
            painter.rect_filled(label_rect.expand(3.0), 3.0, layer_colors::LABEL_BG);
            painter.galley(label_rect.min, galley, Color32::WHITE);
        }
    }
}

fn paint_overlay(painter: &egui::Painter, rect: Rect, overlay: &ModeOverlay) {
    let origin = rect.left_top() + Vec2::new(12.0, 12.0);
    let lines = [
        (format!("{} {}", overlay.icon, overlay.title), FontId::proportional(14.0)),
        (overlay.description.to_string(), FontId::proportional(12.0)),
        (overlay.instructions.to_string(), FontId::proportional(11.0)),
    ];

    let galleys: Vec<_> = lines
        .into_iter()
        .map(|(text, font)| painter.layout_no_wrap(text, font, Color32::WHITE))
        .collect();
    let width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max);
    let height: f32 = galleys.iter().map(|g| g.size().y + 4.0).sum();

    let panel = Rect::from_min_size(origin, Vec2::new(width + 20.0, height + 12.0));
    painter.rect_filled(panel, 6.0, Color32::from_rgba_premultiplied(17, 24, 39, 220));

    let mut cursor = origin + Vec2::new(10.0, 6.0);
    for galley in galleys {
        let advance = galley.size().y + 4.0;
        painter.galley(cursor, galley, Color32::WHITE);
        cursor.y += advance;
    }
}

fn paint_notice(painter: &egui::Painter, rect: Rect, text: &str) {
    let galley = painter.layout_no_wrap(text.to_string(), FontId::proportional(14.0), Color32::WHITE);
    let anchor = rect.center_bottom() - Vec2::new(0.0, 40.0);
    let notice_rect = Align2::CENTER_BOTTOM.anchor_size(anchor, galley.size());
    painter.rect_filled(
        notice_rect.expand2(Vec2::new(14.0, 8.0)),
        8.0,
        Color32::from_rgb(22, 163, 74),
    );
    painter.galley(notice_rect.min, galley, Color32::WHITE);
}

impl MapRenderer for MapCanvas {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn draw_preview_polygon(&mut self, layer: LayerId, points: &[GeoPoint]) {
        self.push(
            layer,
            MapShape::Polygon {
                points: points.to_vec(),
                preview: true,
            },
        );
    }

    fn draw_final_polygon(&mut self, layer: LayerId, points: &[GeoPoint]) {
        self.push(
            layer,
            MapShape::Polygon {
                points: points.to_vec(),
                preview: false,
            },
        );
    }

    fn draw_rectangle(
        &mut self,
        layer: LayerId,
        center: GeoPoint,
        width_meters: f64,
        height_meters: f64,
    ) {
        let bounds = GeoBounds::centered(center, width_meters, height_meters);
        self.push(layer, MapShape::Rectangle(bounds));
    }

    fn draw_polyline(&mut self, layer: LayerId, points: &[GeoPoint]) {
        self.push(layer, MapShape::Polyline(points.to_vec()));
    }

    fn place_marker(&mut self, layer: LayerId, point: GeoPoint, label: &str) {
        self.push(
            layer,
            MapShape::Marker {
                point,
                label: label.to_string(),
            },
        );
    }

    fn place_distance_label(&mut self, layer: LayerId, point: GeoPoint, text: &str) {
        self.push(
            layer,
            MapShape::Label {
                point,
                text: text.to_string(),
            },
        );
    }

    fn clear_layer(&mut self, layer: LayerId) {
        self.layers.remove(&layer);
    }

    fn set_pannable(&mut self, pannable: bool) {
        self.pannable = pannable;
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    fn show_overlay(&mut self, overlay: Option<&ModeOverlay>) {
        self.overlay = overlay.cloned();
    }

    fn show_notice(&mut self, text: &str) {
        tracing::info!("{}", text);
        self.notice = Some((text.to_string(), Instant::now()));
    }

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        self.view = MapView::new(center, zoom);
    }
}
