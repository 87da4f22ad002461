use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{PluginEvent, TimelinePlugin};
use crate::render::ViewHost;

use super::TimelineEngine;

impl<H: ViewHost> TimelineEngine<H> {
    /// Registers a plugin with unique identifier.
    ///
    /// A plugin registered after the first frame is caught up on the rendered
    /// state: the last view box, then every scale currently shown.
    pub fn register_plugin(&mut self, mut plugin: Box<dyn TimelinePlugin>) -> TimelineResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(TimelineError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(TimelineError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }

        let replay = self.rendered_state_events();
        debug!(plugin_id = %plugin_id, replayed = replay.len(), "plugin registered");
        let context = self.plugin_context();
        for event in &replay {
            plugin.on_event(event, context);
        }
        self.core.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .core
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.core.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    fn rendered_state_events(&self) -> Vec<PluginEvent> {
        let Some(bounds) = self.core.last_bounds else {
            return Vec::new();
        };
        let shown = self
            .core
            .scales
            .iter()
            .filter(|(_, slot)| slot.should_render)
            .map(|(scale_id, _)| PluginEvent::TickScaleVisibilityChanged {
                scale_id: scale_id.clone(),
                should_render: true,
            });
        std::iter::once(PluginEvent::ViewBoundsChanged {
            view_box: bounds.to_svg_view_box(),
        })
        .chain(shown)
        .collect()
    }
}
