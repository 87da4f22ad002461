use crate::error::{TimelineError, TimelineResult};
use crate::render::ViewHost;

use super::{TickScaleSnapshot, TimelineEngine, TimelineSnapshot};

impl<H: ViewHost> TimelineEngine<H> {
    /// Builds a deterministic snapshot of the camera and every scale's
    /// rendered ticks as of the last pass.
    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        let tick_scales = self
            .core
            .scales
            .iter()
            .map(|(scale_id, slot)| {
                (
                    scale_id.clone(),
                    TickScaleSnapshot {
                        min_zoom: slot.scale.min_zoom(),
                        max_zoom: slot.scale.max_zoom(),
                        should_render: slot.should_render,
                        error: slot.last_error.clone(),
                        items: slot.recycler.items().cloned().collect(),
                    },
                )
            })
            .collect();

        TimelineSnapshot {
            viewport: self.core.config.viewport,
            camera: self.core.camera,
            day_width: self.day_width(),
            view_bounds: self.view_bounds(),
            center_date: self.center_date(),
            tick_scales,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
