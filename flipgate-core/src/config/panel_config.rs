//! Read-side panel settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
    HEADROOM_WARN_PCT, PANEL_EVENT_WINDOW_DAYS, PLANNED_MILESTONES,
};

/// Settings for the truth/money/motion panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Trailing window, in days, for event scans.
    pub event_window_days: i64,
    /// Planned milestone count for the motion panel.
    pub planned_milestones: usize,
    /// Exposure headroom percent below which the truth panel recommends
    /// renegotiating scope or price.
    pub headroom_warn_pct: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            event_window_days: PANEL_EVENT_WINDOW_DAYS,
            planned_milestones: PLANNED_MILESTONES,
            headroom_warn_pct: HEADROOM_WARN_PCT,
        }
    }
}
