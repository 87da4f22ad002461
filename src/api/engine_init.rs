use indexmap::IndexMap;
use tracing::debug;

use crate::core::Camera;
use crate::error::TimelineResult;
use crate::interaction::InteractionState;
use crate::render::ViewHost;

use super::validation::validate_engine_config;
use super::{InvalidationMask, TimelineEngine, TimelineEngineConfig, engine_core::EngineCore};

impl<H: ViewHost> TimelineEngine<H> {
    /// Creates an engine with no tick scales.
    ///
    /// A zero-sized viewport is accepted: nothing renders until the host
    /// reports a real size through [`TimelineEngine::set_viewport`].
    pub fn new(host: H, config: TimelineEngineConfig) -> TimelineResult<Self> {
        validate_engine_config(config)?;
        let camera = Camera::new(config.zoom_level, config.view_center)?;

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            zoom_level = config.zoom_level,
            view_center = config.view_center,
            "timeline engine created"
        );

        Ok(Self {
            host,
            core: EngineCore {
                config,
                camera,
                scales: IndexMap::new(),
                interaction: InteractionState::default(),
                pending: InvalidationMask::full(),
                plugins: Vec::new(),
                last_bounds: None,
            },
        })
    }
}
