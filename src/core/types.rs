use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-sized viewport has not been laid out yet.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Visible window of the timeline drawing, derived from the viewport size and
/// the camera center.
///
/// `left = view_center - width / 2` and `right = left + width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub view_center: f64,
}

impl ViewBounds {
    #[must_use]
    pub fn new(viewport: Viewport, zoom: f64, view_center: f64) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let top = 0.0;
        let left = view_center - width / 2.0;

        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
            zoom,
            view_center,
        }
    }

    /// Bounds of an unlaid-out viewport must not drive virtualization.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.left.is_finite()
            && self.right.is_finite()
    }

    /// SVG `viewBox` attribute value: `"left top width height"`.
    #[must_use]
    pub fn to_svg_view_box(self) -> String {
        format!("{} {} {} {}", self.left, self.top, self.width, self.height)
    }
}
