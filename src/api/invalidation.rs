use serde::{Deserialize, Serialize};

use crate::error::TimelineResult;
use crate::render::ViewHost;

use super::TimelineEngine;

/// Ordered invalidation levels.
///
/// `Light` covers camera motion that only moves ticks; `Full` covers changes
/// that may alter every scale's item list (viewport, scale set, config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Light,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Source of a pending recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Camera,
    Viewport,
    Config,
    TickScale,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Camera => 1 << 0,
            Self::Viewport => 1 << 1,
            Self::Config => 1 << 2,
            Self::TickScale => 1 << 3,
        }
    }
}

/// Bitmask of invalidation topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Camera.bit()
        | InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Config.bit()
        | InvalidationTopic::TickScale.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Coalesced recomputation request consumed once per paint frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationMask {
    level: InvalidationLevel,
    #[serde(default)]
    topics: InvalidationTopics,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::none(),
        }
    }

    #[must_use]
    pub const fn light(topic: InvalidationTopic) -> Self {
        Self {
            level: InvalidationLevel::Light,
            topics: InvalidationTopics::from_topic(topic),
        }
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            level: InvalidationLevel::Full,
            topics: InvalidationTopics::all(),
        }
    }

    #[must_use]
    pub const fn with_level_and_topics(
        level: InvalidationLevel,
        topics: InvalidationTopics,
    ) -> Self {
        Self { level, topics }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        self.level
    }

    #[must_use]
    pub const fn topics(self) -> InvalidationTopics {
        self.topics
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        self.topics.contains_topic(topic)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.level, InvalidationLevel::None)
    }

    pub fn merge(&mut self, other: Self) {
        self.level = self.level.max(other.level);
        self.topics = self.topics.union(other.topics);
    }
}

impl<H: ViewHost> TimelineEngine<H> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.core.pending
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.core.pending.is_none()
    }

    #[must_use]
    pub fn has_pending_invalidation_topic(&self, topic: InvalidationTopic) -> bool {
        self.core.pending.has_topic(topic)
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.core.pending = InvalidationMask::none();
    }

    #[must_use]
    pub fn take_pending_invalidation(&mut self) -> InvalidationMask {
        std::mem::take(&mut self.core.pending)
    }

    /// Runs one virtualization pass when anything changed since the last one.
    ///
    /// Hosts call this once per paint frame. Returns whether a pass ran.
    pub fn render_if_invalidated(&mut self) -> TimelineResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel, topic: InvalidationTopic) {
        self.core
            .pending
            .merge(InvalidationMask::with_level_and_topics(
                level,
                InvalidationTopics::from_topic(topic),
            ));
    }

    pub(super) fn invalidate_camera(&mut self) {
        self.invalidate(InvalidationLevel::Light, InvalidationTopic::Camera);
    }

    pub(super) fn invalidate_full(&mut self, topic: InvalidationTopic) {
        self.invalidate(InvalidationLevel::Full, topic);
    }
}
