//! Planner state machine

mod mode;
mod pan;
mod planner;

pub use mode::{InputMode, ModeController};
pub use pan::{CancellationToken, PanSuspension};
pub use planner::{ClickOutcome, PlannerSettings, SitePlanner};
