//! Geographic points and the small amount of spherical math the planner needs

use geo::{Distance, HaversineMeasure, Point};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Mean equatorial radius used by web map widgets for spherical distances
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Length of one degree of latitude on the sphere
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Longitude on x, latitude on y
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.y, v.x)
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Great-circle surface distance in meters (haversine)
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_METERS).distance(a.to_point(), b.to_point())
}

/// Arithmetic mean of latitude and longitude.
///
/// Not the spherical midpoint; the error is negligible at site scale.
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    GeoPoint::from_dvec2((a.to_dvec2() + b.to_dvec2()) * 0.5)
}

/// Format a distance the way map labels show it (`12.3m`)
pub fn format_distance(meters: f64) -> String {
    format!("{:.1}m", meters)
}

/// Axis-aligned latitude/longitude box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Box of `width_meters` east-west by `height_meters` north-south around `center`
    pub fn centered(center: GeoPoint, width_meters: f64, height_meters: f64) -> Self {
        let half_lat = height_meters / 2.0 / METERS_PER_DEGREE;
        let meters_per_lng_degree = METERS_PER_DEGREE * center.latitude.to_radians().cos();
        let half_lng = width_meters / 2.0 / meters_per_lng_degree;
        Self {
            north: center.latitude + half_lat,
            south: center.latitude - half_lat,
            east: center.longitude + half_lng,
            west: center.longitude - half_lng,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Corners in drawing order: north-west, north-east, south-east, south-west
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            GeoPoint::new(self.north, self.west),
            GeoPoint::new(self.north, self.east),
            GeoPoint::new(self.south, self.east),
            GeoPoint::new(self.south, self.west),
        ]
    }

    /// East-west extent measured along the center latitude
    pub fn width_meters(&self) -> f64 {
        let lat = (self.north + self.south) / 2.0;
        distance_meters(GeoPoint::new(lat, self.west), GeoPoint::new(lat, self.east))
    }

    /// North-south extent
    pub fn height_meters(&self) -> f64 {
        let lng = (self.east + self.west) / 2.0;
        distance_meters(GeoPoint::new(self.south, lng), GeoPoint::new(self.north, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (GeoPoint::new(51.50, -0.13), GeoPoint::new(51.501, -0.131)),
            (GeoPoint::new(-33.86, 151.21), GeoPoint::new(-33.87, 151.20)),
            (GeoPoint::new(0.0, 179.9999), GeoPoint::new(0.0, -179.9999)),
        ];
        for (a, b) in pairs {
            assert_abs_diff_eq!(distance_meters(a, b), distance_meters(b, a), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(51.4995, -0.1295);
        assert_eq!(distance_meters(p, p), 0.0);
    }

    #[test]
    fn test_distance_one_millidegree_latitude() {
        let a = GeoPoint::new(51.50, -0.13);
        let b = GeoPoint::new(51.501, -0.13);
        // One thousandth of a degree along a meridian
        assert_abs_diff_eq!(distance_meters(a, b), METERS_PER_DEGREE / 1000.0, epsilon = 1e-6);
        assert_eq!(format_distance(distance_meters(a, b)), "111.3m");
    }

    #[test]
    fn test_distance_across_antimeridian() {
        let a = GeoPoint::new(0.0, 179.9999);
        let b = GeoPoint::new(0.0, -179.9999);
        assert_abs_diff_eq!(distance_meters(a, b), METERS_PER_DEGREE * 0.0002, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint_is_linear_average() {
        let m = midpoint(GeoPoint::new(51.50, -0.13), GeoPoint::new(51.501, -0.131));
        assert_abs_diff_eq!(m.latitude, 51.5005, epsilon = 1e-12);
        assert_abs_diff_eq!(m.longitude, -0.1305, epsilon = 1e-12);
    }

    #[test]
    fn test_centered_bounds_footprint() {
        let center = GeoPoint::new(51.4995, -0.1295);
        let bounds = GeoBounds::centered(center, 5.0, 4.0);

        assert_abs_diff_eq!(bounds.width_meters(), 5.0, epsilon = 1e-3);
        assert_abs_diff_eq!(bounds.height_meters(), 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.center().latitude, center.latitude, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.center().longitude, center.longitude, epsilon = 1e-12);
    }

    #[test]
    fn test_geopoint_serializes_as_lat_lng() {
        let json = serde_json::to_string(&GeoPoint::new(51.5, -0.13)).unwrap();
        assert_eq!(json, r#"{"lat":51.5,"lng":-0.13}"#);
    }
}
