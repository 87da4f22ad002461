//! Engine facade. `TimelineEngine` is split into per-concern `impl` blocks:
//! camera, configuration, input, tick scales, frame passes and plugins.

mod behavior;
mod camera_controller;
mod camera_motion_resolver;
mod config_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod interaction_validation;
mod invalidation;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod snapshot_controller;
mod tick_scale_controller;
mod validation;

pub use behavior::{InputSource, InteractionInputBehavior};
pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::{TickScaleSnapshot, TimelineSnapshot};
pub use invalidation::{InvalidationLevel, InvalidationMask, InvalidationTopic, InvalidationTopics};

pub use crate::extensions::{PluginContext, PluginEvent, TimelinePlugin};
