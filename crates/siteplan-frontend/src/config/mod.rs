//! Application configuration
//!
//! Map defaults, planner behaviour and UI preferences, persisted as RON in
//! the OS config directory.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use siteplan_core::GeoPoint;

use crate::state::PlannerSettings;

/// Initial map view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Where the map opens when no site location is known
    pub center: GeoPoint,
    /// Web Mercator zoom level
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(51.5074, -0.1278),
            zoom: 16.0,
        }
    }
}

/// Drawing behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Delay before drawing resumes after a secondary click
    pub pan_resume_delay_ms: u64,
    /// Show segment length labels while drawing
    pub show_distance_labels: bool,
    /// How long completion notices stay on screen
    pub notice_seconds: f32,
    /// Where saved plans go; defaults to the data directory
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            pan_resume_delay_ms: 100,
            show_distance_labels: true,
            notice_seconds: 4.0,
            save_dir: None,
        }
    }
}

impl PlannerConfig {
    pub fn to_settings(&self) -> PlannerSettings {
        PlannerSettings {
            pan_resume_delay: Duration::from_millis(self.pan_resume_delay_ms),
            show_distance_labels: self.show_distance_labels,
        }
    }

    /// Notice lifetime; out-of-range values fall back to the default
    pub fn notice_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.notice_seconds.max(0.0)).unwrap_or_else(|e| {
            let fallback = Self::default().notice_seconds;
            tracing::warn!(
                "Invalid notice_seconds {}: {}; using {}s",
                self.notice_seconds,
                e,
                fallback
            );
            Duration::from_secs_f32(fallback)
        })
    }

    /// Directory saved plans are written to
    pub fn resolved_save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("siteplan")
                .join("plans")
        })
    }
}

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Light,
    Dark,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: UiTheme,
    /// Font size multiplier
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Light,
            font_size: 1.0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
