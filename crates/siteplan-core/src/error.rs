//! Error types for the planning core

use thiserror::Error;

/// Why a piece of input was dropped without changing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No step is active (planning finished or idle)
    NoActiveStep,
    /// The active step does not accept map clicks (save)
    NotADrawingStep,
    /// The map surface has not been initialized yet
    SurfaceNotReady,
    /// Drawing input is suspended while the map is being panned
    PanSuspended,
    /// The session already reached its completion threshold
    SessionComplete,
    /// The active mode commits single points and does not accumulate
    NotAccumulating,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::NoActiveStep => "no active step",
            IgnoreReason::NotADrawingStep => "active step is not a drawing step",
            IgnoreReason::SurfaceNotReady => "map surface not ready",
            IgnoreReason::PanSuspended => "drawing suspended for panning",
            IgnoreReason::SessionComplete => "drawing session already complete",
            IgnoreReason::NotAccumulating => "mode does not accumulate points",
        };
        f.write_str(text)
    }
}

/// Planning-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Input ignored: {0}")]
    InputIgnored(IgnoreReason),

    #[error("Rendering unavailable")]
    RenderingUnavailable,

    #[error("Invalid step id: {0}")]
    InvalidStep(u8),
}

/// Result type for planning operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors reported by a persistence collaborator
///
/// The core logs these and keeps its local state; it never retries.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Save rejected: {0}")]
    Rejected(String),
}
