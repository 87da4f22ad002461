use crate::error::TimelineResult;
use crate::render::ViewHost;

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the camera, the registered tick scales with their
/// rendered views, input gating, and plugin dispatch. The host supplies a
/// [`ViewHost`] that creates, updates and destroys the actual tick views.
pub struct TimelineEngine<H: ViewHost> {
    pub(super) host: H,
    pub(super) core: EngineCore<H::Handle>,
}

impl<H: ViewHost> TimelineEngine<H> {
    /// Runs one virtualization and reconciliation pass over every scale and
    /// clears pending invalidation.
    pub fn render(&mut self) -> TimelineResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access for host-side bookkeeping.
    ///
    /// Views owned by the engine must not be destroyed through this handle.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
