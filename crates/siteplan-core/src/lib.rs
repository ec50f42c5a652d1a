//! Site Planning Core
//!
//! This crate contains the state and geometry behind map-based site planning:
//! - GeoPoint: geographic coordinates with distance and midpoint math
//! - PlanningData: boundary, substation premise and cable route handed to the wizard
//! - StepOrchestrator: the four-step sequence with auto-advance, jump, undo and redo
//! - DrawingSession: point accumulation and completion thresholds
//! - PlanningSink: the persistence collaborator interface

pub mod drawing;
pub mod error;
pub mod geometry;
pub mod plan;
pub mod sink;
pub mod step;

pub use drawing::*;
pub use error::*;
pub use geometry::*;
pub use plan::*;
pub use sink::*;
pub use step::*;
