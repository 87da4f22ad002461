//! Observer hooks for hosts that react to timeline changes.

pub mod plugins;

pub use plugins::{PluginContext, PluginEvent, TimelinePlugin};
