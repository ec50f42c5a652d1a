//! Web Mercator viewport math

use glam::DVec2;
use siteplan_core::GeoPoint;

/// Tile edge in pixels at zoom 0
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Mercator world
pub const MAX_LATITUDE: f64 = 85.051_128_78;

pub const MIN_ZOOM: f64 = 2.0;
pub const MAX_ZOOM: f64 = 21.0;

/// Project to world pixel coordinates at `zoom` (y grows southwards)
pub fn project(point: GeoPoint, zoom: f64) -> DVec2 {
    let size = TILE_SIZE * zoom.exp2();
    let lat = point
        .latitude
        .clamp(-MAX_LATITUDE, MAX_LATITUDE)
        .to_radians();
    let x = (point.longitude + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
    DVec2::new(x, y) * size
}

/// Inverse of [`project`]
pub fn unproject(world: DVec2, zoom: f64) -> GeoPoint {
    let size = TILE_SIZE * zoom.exp2();
    let n = world / size;
    let longitude = n.x * 360.0 - 180.0;
    let latitude = (std::f64::consts::PI * (1.0 - 2.0 * n.y))
        .sinh()
        .atan()
        .to_degrees();
    GeoPoint::new(latitude, longitude)
}

/// What part of the world the map widget shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl MapView {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Screen position of `point` for a viewport of `size` whose origin is
    /// its top-left corner
    pub fn to_screen(&self, point: GeoPoint, size: DVec2) -> DVec2 {
        project(point, self.zoom) - project(self.center, self.zoom) + size * 0.5
    }

    pub fn from_screen(&self, screen: DVec2, size: DVec2) -> GeoPoint {
        unproject(
            project(self.center, self.zoom) + screen - size * 0.5,
            self.zoom,
        )
    }

    /// Move the view by a screen drag of `delta` pixels
    pub fn pan_by(&mut self, delta: DVec2) {
        let world = project(self.center, self.zoom) - delta;
        self.center = unproject(world, self.zoom);
    }

    /// Change zoom by `steps`, keeping the point under `anchor` fixed
    pub fn zoom_by(&mut self, steps: f64, anchor: DVec2, size: DVec2) {
        let fixed = self.from_screen(anchor, size);
        self.zoom = (self.zoom + steps).clamp(MIN_ZOOM, MAX_ZOOM);
        let drift = self.to_screen(fixed, size) - anchor;
        self.pan_by(-drift);
    }

    /// Ground meters covered by one screen pixel at the view center
    pub fn meters_per_pixel(&self) -> f64 {
        let circumference = 2.0 * std::f64::consts::PI * siteplan_core::EARTH_RADIUS_METERS;
        circumference * self.center.latitude.to_radians().cos() / (TILE_SIZE * self.zoom.exp2())
    }
}
