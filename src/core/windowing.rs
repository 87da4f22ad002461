use crate::core::location::{date_to_position, position_to_date};
use crate::core::{TickItem, TickScale, ViewBounds};
use crate::error::{TimelineError, TimelineResult};

/// Upper bound on the ticks one scale may produce for a single window.
pub const MAX_TICKS_PER_SCALE: usize = 10_000;

/// Timeline positions covered by virtualization: the view bounds widened by a
/// buffer on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickWindow {
    pub start_position: f64,
    pub end_position: f64,
}

impl TickWindow {
    /// Widens `bounds` by `buffer_ratio` viewport widths on each side.
    #[must_use]
    pub fn buffered(bounds: ViewBounds, buffer_ratio: f64) -> Self {
        let buffer_width = bounds.width * buffer_ratio;
        Self {
            start_position: bounds.left - buffer_width,
            end_position: bounds.right + buffer_width,
        }
    }
}

/// Outcome of a virtualization pass for one scale.
#[derive(Debug, Clone, PartialEq)]
pub enum TickRenderDirective {
    /// Viewport or day width is degenerate; nothing downstream should run.
    NotReady,
    /// The zoom level left the scale's range; every view must be destroyed.
    Unrender,
    /// Ticks intersecting the buffered window, ascending by index.
    Render(Vec<TickItem>),
}

/// Computes the ticks of `scale` covering `window`.
///
/// A non-positive or non-finite day width yields no ticks. The scale is
/// reported as misconfigured when the window would hold more than
/// [`MAX_TICKS_PER_SCALE`] ticks or when its indices are not contiguous.
pub fn ticks_on_screen(
    scale: &TickScale,
    day_width: f64,
    window: TickWindow,
) -> TimelineResult<Vec<TickItem>> {
    if !is_usable_day_width(day_width) {
        return Ok(Vec::new());
    }

    let start = position_to_date(day_width, window.start_position);
    let end = position_to_date(day_width, window.end_position);

    let tick_width = scale.day_factor().days_at(start) * day_width;
    let estimate = (window.end_position - window.start_position) / tick_width;
    if tick_width > 0.0 && estimate > MAX_TICKS_PER_SCALE as f64 {
        return Err(too_many_ticks(scale, estimate));
    }

    let dates = scale.dates_between(start, end)?;
    if dates.len() > MAX_TICKS_PER_SCALE {
        return Err(too_many_ticks(scale, dates.len() as f64));
    }

    let mut items = dates
        .into_iter()
        .map(|date| {
            Ok(TickItem {
                index: scale.index_of(date)?,
                position: date_to_position(day_width, date),
                value: date,
                width: scale.day_factor().days_at(date) * day_width,
                label: scale.label_for(date),
            })
        })
        .collect::<TimelineResult<Vec<_>>>()?;

    items.sort_by_key(|item| item.index);
    if let Some(pair) = items
        .windows(2)
        .find(|pair| pair[0].index.checked_add(1) != Some(pair[1].index))
    {
        return Err(scale.misconfigured(format!(
            "tick indices must be contiguous; {} is followed by {} ({} and {})",
            pair[0].index, pair[1].index, pair[0].value, pair[1].value
        )));
    }
    Ok(items)
}

fn too_many_ticks(scale: &TickScale, count: f64) -> TimelineError {
    scale.misconfigured(format!(
        "about {count:.0} ticks in view exceeds the limit of {MAX_TICKS_PER_SCALE}; \
         narrow the zoom range"
    ))
}

/// Runs visibility gating and virtualization for one scale.
pub fn virtualize(
    scale: &TickScale,
    zoom: f64,
    day_width: f64,
    bounds: ViewBounds,
    buffer_ratio: f64,
) -> TimelineResult<TickRenderDirective> {
    if !bounds.is_ready() || !is_usable_day_width(day_width) {
        return Ok(TickRenderDirective::NotReady);
    }
    if !scale.matches_zoom(zoom) {
        return Ok(TickRenderDirective::Unrender);
    }
    if !buffer_ratio.is_finite() || buffer_ratio < 0.0 {
        return Err(TimelineError::InvalidData(
            "virtualization buffer must be finite and >= 0".to_owned(),
        ));
    }

    let window = TickWindow::buffered(bounds, buffer_ratio);
    ticks_on_screen(scale, day_width, window).map(TickRenderDirective::Render)
}

fn is_usable_day_width(day_width: f64) -> bool {
    day_width.is_finite() && day_width > 0.0
}
