use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TickLabel;

/// One tick of a scale, recomputed on every virtualization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickItem {
    /// Contiguous per-scale index; consecutive ticks differ by one.
    pub index: i64,
    /// Timeline position (pixels from year zero) of the tick start.
    pub position: f64,
    pub value: DateTime<Utc>,
    /// Pixels this tick occupies.
    pub width: f64,
    pub label: TickLabel,
}

impl TickItem {
    #[must_use]
    pub fn end_position(&self) -> f64 {
        self.position + self.width
    }
}
