use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Camera, TickItem, ViewBounds, Viewport};

/// Rendered state of one tick scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickScaleSnapshot {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub should_render: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub items: Vec<TickItem>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub viewport: Viewport,
    pub camera: Camera,
    pub day_width: f64,
    pub view_bounds: ViewBounds,
    pub center_date: DateTime<Utc>,
    /// Keyed by scale id, in registration order.
    pub tick_scales: IndexMap<String, TickScaleSnapshot>,
}
