//! Visual affordances of the drawing modes

use siteplan_core::DrawingKind;

/// Pointer cursor shown over the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
    Grab,
}

/// Instruction panel shown while a drawing mode is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeOverlay {
    pub kind: DrawingKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub instructions: &'static str,
    pub description: &'static str,
}

impl ModeOverlay {
    pub fn for_kind(kind: DrawingKind) -> Self {
        let (icon, instructions, description) = match kind {
            DrawingKind::Boundary => (
                "🎯",
                "Left-click to add points • Right-click to move map • Click 4+ points to complete",
                "Click points to define the boundary area",
            ),
            DrawingKind::Substation => (
                "🏠",
                "Left-click to place substation • Right-click to move map • Single click to complete",
                "Click to place the substation premise (5m x 4m)",
            ),
            DrawingKind::Route => (
                "⚡",
                "Left-click to add route points • Right-click to move map • Connect to existing network",
                "Click points to draw the cable route",
            ),
        };
        Self {
            kind,
            icon,
            title: "Drawing Mode Active",
            instructions,
            description,
        }
    }
}
