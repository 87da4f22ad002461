use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::ReconcileStats;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub zoom_level: f64,
    pub view_center: f64,
    pub day_width: f64,
    pub center_date: DateTime<Utc>,
    pub tick_scale_count: usize,
}

/// Event stream exposed to plugins.
///
/// Events of one frame are delivered after the frame's reconciliation has
/// finished, in the order the changes happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    ViewBoundsChanged {
        view_box: String,
    },
    TickScaleVisibilityChanged {
        scale_id: String,
        should_render: bool,
    },
    TicksRendered {
        scale_id: String,
        stats: ReconcileStats,
        rendered: usize,
    },
    TicksUnrendered {
        scale_id: String,
        destroyed: usize,
    },
    TickScaleFailed {
        scale_id: String,
        reason: String,
    },
    Rendered,
}

/// Observer hook for timeline state changes.
///
/// Plugins observe events and read engine context without mutating engine
/// internals.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
