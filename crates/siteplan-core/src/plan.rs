//! The planning result handed to the surrounding wizard

use serde::{Deserialize, Serialize};

use crate::geometry::{GeoBounds, GeoPoint};
use crate::step::StepKind;

/// Standard substation premise width (east-west) in meters
pub const SUBSTATION_WIDTH_METERS: f64 = 5.0;

/// Standard substation premise height (north-south) in meters
pub const SUBSTATION_HEIGHT_METERS: f64 = 4.0;

/// Footprint of a substation premise placed at `center`
pub fn substation_footprint(center: GeoPoint) -> GeoBounds {
    GeoBounds::centered(center, SUBSTATION_WIDTH_METERS, SUBSTATION_HEIGHT_METERS)
}

/// Geometry produced by the planning steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningData {
    /// Site boundary vertices, without the closing vertex
    #[serde(default)]
    pub site_boundary: Vec<GeoPoint>,
    /// Substation premise center
    #[serde(default)]
    pub substation_premise: Option<GeoPoint>,
    /// Cable route vertices
    #[serde(default)]
    pub cable_route: Vec<GeoPoint>,
}

/// Geometry committed by a single completed step
#[derive(Debug, Clone, PartialEq)]
pub enum PlanningUpdate {
    SiteBoundary(Vec<GeoPoint>),
    SubstationPremise(GeoPoint),
    CableRoute(Vec<GeoPoint>),
}

impl PlanningUpdate {
    /// The step that produces this update
    pub fn step(&self) -> StepKind {
        match self {
            PlanningUpdate::SiteBoundary(_) => StepKind::Boundary,
            PlanningUpdate::SubstationPremise(_) => StepKind::Substation,
            PlanningUpdate::CableRoute(_) => StepKind::Route,
        }
    }

    /// Number of committed points
    pub fn point_count(&self) -> usize {
        match self {
            PlanningUpdate::SiteBoundary(points) | PlanningUpdate::CableRoute(points) => {
                points.len()
            }
            PlanningUpdate::SubstationPremise(_) => 1,
        }
    }
}

impl PlanningData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a step's geometry, replacing whatever that step held before
    pub fn apply(&mut self, update: PlanningUpdate) {
        match update {
            PlanningUpdate::SiteBoundary(points) => self.site_boundary = points,
            PlanningUpdate::SubstationPremise(point) => self.substation_premise = Some(point),
            PlanningUpdate::CableRoute(points) => self.cable_route = points,
        }
    }

    /// Remove the geometry owned by `step`.
    ///
    /// Returns true if anything was removed. The save step owns no geometry.
    pub fn clear_step(&mut self, step: StepKind) -> bool {
        match step {
            StepKind::Boundary => {
                let had = !self.site_boundary.is_empty();
                self.site_boundary.clear();
                had
            }
            StepKind::Substation => self.substation_premise.take().is_some(),
            StepKind::Route => {
                let had = !self.cable_route.is_empty();
                self.cable_route.clear();
                had
            }
            StepKind::Save => false,
        }
    }

    /// Whether `step` has committed geometry
    pub fn has_geometry(&self, step: StepKind) -> bool {
        match step {
            StepKind::Boundary => !self.site_boundary.is_empty(),
            StepKind::Substation => self.substation_premise.is_some(),
            StepKind::Route => !self.cable_route.is_empty(),
            StepKind::Save => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.site_boundary.is_empty()
            && self.substation_premise.is_none()
            && self.cable_route.is_empty()
    }

    /// Footprint of the placed substation, if any
    pub fn substation_bounds(&self) -> Option<GeoBounds> {
        self.substation_premise.map(substation_footprint)
    }

    /// Short human-readable summary, one line per geometry
    pub fn summary(&self) -> PlanningSummary<'_> {
        PlanningSummary(self)
    }
}

/// Display adapter for [`PlanningData::summary`]
pub struct PlanningSummary<'a>(&'a PlanningData);

impl std::fmt::Display for PlanningSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0;
        writeln!(f, "Site Boundary: {} points", data.site_boundary.len())?;
        writeln!(
            f,
            "Substation: {}",
            if data.substation_premise.is_some() {
                "Placed"
            } else {
                "Not placed"
            }
        )?;
        write!(f, "Cable Route: {} points", data.cable_route.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(51.50, -0.13),
            GeoPoint::new(51.501, -0.13),
            GeoPoint::new(51.501, -0.131),
            GeoPoint::new(51.50, -0.131),
        ]
    }

    #[test]
    fn test_apply_and_clear() {
        let mut data = PlanningData::new();
        data.apply(PlanningUpdate::SiteBoundary(square()));
        data.apply(PlanningUpdate::SubstationPremise(GeoPoint::new(51.4995, -0.1295)));
        assert_eq!(data.site_boundary.len(), 4);
        assert!(data.has_geometry(StepKind::Substation));

        assert!(data.clear_step(StepKind::Substation));
        assert!(!data.clear_step(StepKind::Substation));
        assert!(!data.clear_step(StepKind::Save));
        assert_eq!(data.site_boundary.len(), 4);
        assert!(data.substation_premise.is_none());
    }

    #[test]
    fn test_apply_replaces_previous_geometry() {
        let mut data = PlanningData::new();
        data.apply(PlanningUpdate::CableRoute(square()));
        data.apply(PlanningUpdate::CableRoute(square()[..3].to_vec()));
        assert_eq!(data.cable_route.len(), 3);
    }

    #[test]
    fn test_summary() {
        let mut data = PlanningData::new();
        data.apply(PlanningUpdate::SiteBoundary(square()));
        assert_eq!(
            data.summary().to_string(),
            "Site Boundary: 4 points\nSubstation: Not placed\nCable Route: 0 points"
        );
    }

    #[test]
    fn test_wizard_json_shape() {
        let mut data = PlanningData::new();
        data.apply(PlanningUpdate::SubstationPremise(GeoPoint::new(51.4995, -0.1295)));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["siteBoundary"], serde_json::json!([]));
        assert_eq!(json["substationPremise"]["lat"], 51.4995);
        assert_eq!(json["cableRoute"], serde_json::json!([]));

        let back: PlanningData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_update_step_mapping() {
        assert_eq!(PlanningUpdate::SiteBoundary(square()).step(), StepKind::Boundary);
        assert_eq!(PlanningUpdate::CableRoute(vec![]).step(), StepKind::Route);
        assert_eq!(
            PlanningUpdate::SubstationPremise(GeoPoint::new(0.0, 0.0)).point_count(),
            1
        );
    }
}
