//! timeline-rs: an infinitely zoomable one-dimensional date timeline.
//!
//! The crate owns the math and state of the timeline: mapping dates to
//! positions, a pan/zoom camera, virtualization of tick scales (years, months,
//! days, ...) to the visible window, and recycling of rendered tick views
//! across frames. Painting is left to the host through [`render::ViewHost`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
