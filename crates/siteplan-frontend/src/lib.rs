//! Site Planner Frontend
//!
//! egui application hosting the map-based site planning steps.

mod app;
pub mod config;
pub mod map;
pub mod persistence;
pub mod state;

pub use app::SitePlannerApp;
