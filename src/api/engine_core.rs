use indexmap::IndexMap;

use crate::core::{Camera, TickScale, ViewBounds};
use crate::extensions::TimelinePlugin;
use crate::interaction::InteractionState;
use crate::render::{ReconcileStats, TickRecycler};

use super::{InvalidationMask, TimelineEngineConfig};

/// Per-scale runtime state: configuration, visibility and rendered views.
///
/// The recycler is the only owner of the scale's rendered views.
pub(super) struct TickScaleSlot<Hd> {
    pub(super) scale: TickScale,
    pub(super) should_render: bool,
    pub(super) recycler: TickRecycler<Hd>,
    pub(super) last_error: Option<String>,
    pub(super) last_stats: ReconcileStats,
}

impl<Hd> TickScaleSlot<Hd> {
    pub(super) fn new(scale: TickScale) -> Self {
        Self {
            scale,
            should_render: false,
            recycler: TickRecycler::default(),
            last_error: None,
            last_stats: ReconcileStats::default(),
        }
    }

    /// Hidden, without views, and still outside its zoom range: a camera-only
    /// pass leaves such a scale untouched.
    pub(super) fn is_parked(&self, zoom: f64) -> bool {
        !self.should_render && self.recycler.is_empty() && !self.scale.matches_zoom(zoom)
    }
}

/// Internal engine core state used by the public facade (`TimelineEngine`).
pub(super) struct EngineCore<Hd> {
    pub(super) config: TimelineEngineConfig,
    pub(super) camera: Camera,
    pub(super) scales: IndexMap<String, TickScaleSlot<Hd>>,
    pub(super) interaction: InteractionState,
    pub(super) pending: InvalidationMask,
    pub(super) plugins: Vec<Box<dyn TimelinePlugin>>,
    pub(super) last_bounds: Option<ViewBounds>,
}
