//! Geometry for the floating title and underline decorations.
//!
//! Everything in this module is a pure function of its inputs: the same bounds
//! and metric always produce the same rectangle. Coordinates are expressed in
//! the host's length units, relative to the control's own origin, so a
//! negative `y` lies above the control's top edge.
//!
//! ### Example
//! ```rust
//! use bubbletea_floatfield::layout::{title_rect, underline_rect, Rect};
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 40.0);
//!
//! let line = underline_rect(bounds, 0.5);
//! assert_eq!(line, Rect::new(0.0, 39.5, 200.0, 0.5));
//!
//! let title = title_rect(bounds, 15.0);
//! assert_eq!(title, Rect::new(0.0, -15.0, 200.0, 15.0));
//! ```

/// Title height used while no title font is available.
pub const TITLE_FALLBACK_HEIGHT: f64 = 15.0;

/// An axis-aligned rectangle in the control's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge. Negative values are above the control.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its origin and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge (`y + height`).
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Linear interpolation between `self` (at `t == 0`) and `other` (at `t == 1`).
    ///
    /// `t` is not clamped, so eased values that overshoot stay faithful to the curve.
    pub fn lerp(&self, other: &Rect, t: f64) -> Rect {
        Rect {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }
}

/// Frame of the floating title for the given control bounds.
///
/// The title sits directly above the control's top edge, spans the full width
/// and is exactly one line tall. It never overlaps the control itself.
pub fn title_rect(bounds: Rect, line_height: f64) -> Rect {
    Rect::new(0.0, -line_height, bounds.width, line_height)
}

/// Frame of the underline for the given control bounds.
///
/// The underline is flush with the bottom edge of the control. Negative
/// thickness is treated as zero.
pub fn underline_rect(bounds: Rect, thickness: f64) -> Rect {
    let thickness = thickness.max(0.0);
    Rect::new(0.0, bounds.height - thickness, bounds.width, thickness)
}
