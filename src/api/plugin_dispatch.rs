use crate::extensions::{PluginContext, PluginEvent};
use crate::render::ViewHost;

use super::TimelineEngine;

impl<H: ViewHost> TimelineEngine<H> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.core.config.viewport,
            zoom_level: self.core.camera.zoom_level(),
            view_center: self.core.camera.view_center(),
            day_width: self.day_width(),
            center_date: self.center_date(),
            tick_scale_count: self.core.scales.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.plugins {
            plugin.on_event(&event, context);
        }
    }
}
