use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::core::{DayFactor, TickLabel, TickScale};
use crate::error::{TimelineError, TimelineResult};
use crate::render::ViewHost;

use super::engine_core::TickScaleSlot;
use super::render_coordinator::{PassInputs, apply_directive};
use super::{InvalidationTopic, TimelineEngine};

impl<H: ViewHost> TimelineEngine<H> {
    /// Registers a tick scale. Its ticks appear on the next frame pass.
    pub fn add_tick_scale(&mut self, scale: TickScale) -> TimelineResult<()> {
        scale.validate()?;
        let scale_id = scale.id().to_owned();
        if self.core.scales.contains_key(&scale_id) {
            return Err(TimelineError::InvalidData(format!(
                "tick scale with id `{scale_id}` is already registered"
            )));
        }

        debug!(
            scale_id = %scale_id,
            min_zoom = scale.min_zoom(),
            max_zoom = scale.max_zoom(),
            "tick scale added"
        );
        self.core.scales.insert(scale_id, TickScaleSlot::new(scale));
        self.invalidate_full(InvalidationTopic::TickScale);
        Ok(())
    }

    /// Removes a tick scale and destroys its views. Returns how many views
    /// were destroyed.
    pub fn remove_tick_scale(&mut self, scale_id: &str) -> TimelineResult<usize> {
        let Some(mut slot) = self.core.scales.shift_remove(scale_id) else {
            return Err(TimelineError::UnknownTickScale(scale_id.to_owned()));
        };
        let destroyed = slot.recycler.unrender(&mut self.host, scale_id);
        debug!(scale_id, destroyed, "tick scale removed");
        Ok(destroyed)
    }

    pub fn set_tick_scale_zoom_range(
        &mut self,
        scale_id: &str,
        min_zoom: f64,
        max_zoom: f64,
    ) -> TimelineResult<()> {
        self.reconfigure_tick_scale(scale_id, |scale| {
            scale.set_zoom_range(min_zoom, max_zoom);
        })
    }

    pub fn set_tick_scale_day_factor(
        &mut self,
        scale_id: &str,
        day_factor: DayFactor,
    ) -> TimelineResult<()> {
        self.reconfigure_tick_scale(scale_id, |scale| scale.set_day_factor(day_factor))
    }

    pub fn set_tick_scale_dates_between<F>(
        &mut self,
        scale_id: &str,
        dates_between: F,
    ) -> TimelineResult<()>
    where
        F: Fn(DateTime<Utc>, DateTime<Utc>) -> Vec<DateTime<Utc>> + Send + Sync + 'static,
    {
        self.reconfigure_tick_scale(scale_id, |scale| {
            scale.set_dates_between(Arc::new(dates_between));
        })
    }

    pub fn set_tick_scale_label<F>(&mut self, scale_id: &str, label: F) -> TimelineResult<()>
    where
        F: Fn(DateTime<Utc>) -> TickLabel + Send + Sync + 'static,
    {
        self.reconfigure_tick_scale(scale_id, |scale| scale.set_label(Arc::new(label)))
    }

    pub fn set_tick_scale_indexer<F>(&mut self, scale_id: &str, indexer: F) -> TimelineResult<()>
    where
        F: Fn(DateTime<Utc>) -> i64 + Send + Sync + 'static,
    {
        self.reconfigure_tick_scale(scale_id, |scale| scale.set_indexer(Arc::new(indexer)))
    }

    /// Recomputes one scale's ticks right away, outside the frame batch.
    ///
    /// Configuration errors are recorded on the scale and returned.
    pub fn refresh_tick_scale(&mut self, scale_id: &str) -> TimelineResult<()> {
        let inputs = PassInputs::capture(self);
        let Some(slot) = self.core.scales.get_mut(scale_id) else {
            return Err(TimelineError::UnknownTickScale(scale_id.to_owned()));
        };

        let directive = inputs.virtualize(&slot.scale);
        let mut events = Vec::new();
        let result = apply_directive(&mut self.host, scale_id, slot, directive, &mut events);
        for event in events {
            self.emit_plugin_event(event);
        }
        result
    }

    /// Applies `change` to a copy of the scale, validates it, commits it and
    /// refreshes the scale immediately.
    fn reconfigure_tick_scale<F>(&mut self, scale_id: &str, change: F) -> TimelineResult<()>
    where
        F: FnOnce(&mut TickScale),
    {
        let Some(slot) = self.core.scales.get_mut(scale_id) else {
            return Err(TimelineError::UnknownTickScale(scale_id.to_owned()));
        };

        let mut scale = slot.scale.clone();
        change(&mut scale);
        scale.validate()?;
        slot.scale = scale;

        debug!(scale_id, "tick scale reconfigured");
        self.refresh_tick_scale(scale_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{TimelineEngine, TimelineEngineConfig};
    use crate::core::{TickScale, Viewport};
    use crate::error::TimelineError;
    use crate::render::NullViewHost;

    fn build_engine() -> TimelineEngine<NullViewHost> {
        TimelineEngine::new(
            NullViewHost::default(),
            TimelineEngineConfig::new(Viewport::new(800, 100)),
        )
        .expect("engine init")
    }

    #[test]
    fn duplicate_scale_ids_are_rejected() {
        let mut engine = build_engine();
        engine.add_tick_scale(TickScale::days()).expect("first");
        let err = engine.add_tick_scale(TickScale::days()).expect_err("duplicate");
        assert!(err.to_string().contains("already registered"));
        assert_eq!(engine.tick_scale_count(), 1);
    }

    #[test]
    fn unknown_scale_operations_fail() {
        let mut engine = build_engine();
        assert!(matches!(
            engine.remove_tick_scale("weeks"),
            Err(TimelineError::UnknownTickScale(_))
        ));
        assert!(matches!(
            engine.refresh_tick_scale("weeks"),
            Err(TimelineError::UnknownTickScale(_))
        ));
    }

    #[test]
    fn invalid_zoom_range_keeps_previous_configuration() {
        let mut engine = build_engine();
        engine
            .add_tick_scale(TickScale::days().with_zoom_range(10.0, 20.0))
            .expect("add");
        assert!(engine.set_tick_scale_zoom_range("days", 30.0, 5.0).is_err());

        let scale = engine.tick_scale("days").expect("registered");
        assert_eq!((scale.min_zoom(), scale.max_zoom()), (10.0, 20.0));
    }

    #[test]
    fn scale_ids_keep_registration_order() {
        let mut engine = build_engine();
        engine.add_tick_scale(TickScale::years()).expect("years");
        engine.add_tick_scale(TickScale::months()).expect("months");
        engine.add_tick_scale(TickScale::days()).expect("days");
        engine.remove_tick_scale("months").expect("remove");
        assert_eq!(engine.tick_scale_ids(), vec!["years", "days"]);
    }
}
