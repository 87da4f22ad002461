#[cfg(feature = "parallel-virtualization")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::{TickRenderDirective, TickScale, ViewBounds, virtualize};
use crate::error::TimelineResult;
use crate::extensions::PluginEvent;
use crate::render::{ReconcileStats, ViewHost};

use super::engine_core::TickScaleSlot;
use super::{InvalidationLevel, TimelineEngine};

/// Camera-derived inputs shared by every scale of one pass.
#[derive(Debug, Clone, Copy)]
pub(super) struct PassInputs {
    pub(super) bounds: ViewBounds,
    pub(super) zoom: f64,
    pub(super) day_width: f64,
    pub(super) buffer: f64,
}

impl PassInputs {
    pub(super) fn capture<H: ViewHost>(engine: &TimelineEngine<H>) -> Self {
        Self {
            bounds: engine.view_bounds(),
            zoom: engine.zoom_level(),
            day_width: engine.day_width(),
            buffer: engine.core.config.virtualization_buffer,
        }
    }

    pub(super) fn virtualize(self, scale: &TickScale) -> TimelineResult<TickRenderDirective> {
        virtualize(scale, self.zoom, self.day_width, self.bounds, self.buffer)
    }
}

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// One frame: virtualize every scale, then reconcile them in registration
    /// order. A failing scale is reported and skipped; the others still render.
    ///
    /// A light (camera-only) pass skips parked scales. Every other pass
    /// evaluates every scale.
    pub(super) fn render<H: ViewHost>(engine: &mut TimelineEngine<H>) -> TimelineResult<()> {
        let mask = engine.take_pending_invalidation();
        let inputs = PassInputs::capture(engine);
        let light = mask.level() == InvalidationLevel::Light;
        let directives = compute_directives(
            engine
                .core
                .scales
                .values()
                .map(|slot| (!(light && slot.is_parked(inputs.zoom))).then_some(&slot.scale))
                .collect(),
            inputs,
        );

        let mut events = Vec::new();
        if engine.core.last_bounds != Some(inputs.bounds) {
            engine.core.last_bounds = Some(inputs.bounds);
            events.push(PluginEvent::ViewBoundsChanged {
                view_box: inputs.bounds.to_svg_view_box(),
            });
        }

        let (mut failed, mut skipped) = (0_usize, 0_usize);
        for ((scale_id, slot), directive) in engine.core.scales.iter_mut().zip(directives) {
            let Some(directive) = directive else {
                skipped += 1;
                continue;
            };
            if apply_directive(&mut engine.host, scale_id, slot, directive, &mut events).is_err() {
                failed += 1;
            }
        }

        debug!(
            level = ?mask.level(),
            scales = engine.core.scales.len(),
            skipped,
            failed,
            zoom_level = inputs.zoom,
            day_width = inputs.day_width,
            "timeline frame reconciled"
        );

        events.push(PluginEvent::Rendered);
        for event in events {
            engine.emit_plugin_event(event);
        }
        Ok(())
    }
}

type Directive = Option<TimelineResult<TickRenderDirective>>;

// Scales share no state, so their item lists can be computed independently.
// `None` scales are skipped this pass.
#[cfg(feature = "parallel-virtualization")]
fn compute_directives(scales: Vec<Option<&TickScale>>, inputs: PassInputs) -> Vec<Directive> {
    scales
        .par_iter()
        .map(|&scale| scale.map(|scale| inputs.virtualize(scale)))
        .collect()
}

#[cfg(not(feature = "parallel-virtualization"))]
fn compute_directives(scales: Vec<Option<&TickScale>>, inputs: PassInputs) -> Vec<Directive> {
    scales
        .into_iter()
        .map(|scale| scale.map(|scale| inputs.virtualize(scale)))
        .collect()
}

/// Applies one scale's virtualization outcome to its rendered views and
/// records the events it produced.
pub(super) fn apply_directive<H: ViewHost>(
    host: &mut H,
    scale_id: &str,
    slot: &mut TickScaleSlot<H::Handle>,
    directive: TimelineResult<TickRenderDirective>,
    events: &mut Vec<PluginEvent>,
) -> TimelineResult<()> {
    let directive = match directive {
        Ok(directive) => directive,
        Err(err) => {
            warn!(scale_id, error = %err, "tick scale virtualization failed");
            slot.last_error = Some(err.to_string());
            events.push(PluginEvent::TickScaleFailed {
                scale_id: scale_id.to_owned(),
                reason: err.to_string(),
            });
            return Err(err);
        }
    };
    slot.last_error = None;

    match directive {
        TickRenderDirective::NotReady => {}
        TickRenderDirective::Unrender => {
            set_visibility(scale_id, slot, false, events);
            if !slot.recycler.is_empty() {
                let destroyed = slot.recycler.unrender(host, scale_id);
                slot.last_stats = ReconcileStats {
                    destroyed,
                    ..Default::default()
                };
                events.push(PluginEvent::TicksUnrendered {
                    scale_id: scale_id.to_owned(),
                    destroyed,
                });
            }
        }
        TickRenderDirective::Render(items) => {
            set_visibility(scale_id, slot, true, events);
            let stats = slot.recycler.reconcile(host, scale_id, items);
            slot.last_stats = stats;
            events.push(PluginEvent::TicksRendered {
                scale_id: scale_id.to_owned(),
                stats,
                rendered: slot.recycler.len(),
            });
        }
    }
    Ok(())
}

fn set_visibility<Hd>(
    scale_id: &str,
    slot: &mut TickScaleSlot<Hd>,
    should_render: bool,
    events: &mut Vec<PluginEvent>,
) {
    if slot.should_render == should_render {
        return;
    }
    debug!(scale_id, should_render, "tick scale visibility changed");
    slot.should_render = should_render;
    events.push(PluginEvent::TickScaleVisibilityChanged {
        scale_id: scale_id.to_owned(),
        should_render,
    });
}
