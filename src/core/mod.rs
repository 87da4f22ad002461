pub mod camera;
pub mod location;
pub mod primitives;
pub mod tick_item;
pub mod tick_scale;
pub mod tick_unit;
pub mod types;
pub mod windowing;

pub use camera::{Camera, day_width, zoom_factor};
pub use location::{date_to_position, position_to_date, screen_to_position, to_screen_position};
pub use primitives::{civil_date, civil_datetime, days_since_year_zero};
pub use tick_item::TickItem;
pub use tick_scale::{
    DateEnumerator, DayFactor, DayFactorFn, TickIndexer, TickLabel, TickLabeler, TickScale,
};
pub use tick_unit::TickUnit;
pub use types::{ViewBounds, Viewport};
pub use windowing::{
    MAX_TICKS_PER_SCALE, TickRenderDirective, TickWindow, ticks_on_screen, virtualize,
};
