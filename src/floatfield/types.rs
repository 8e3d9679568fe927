//! Value types and construction options for the floating-label field.

use super::model::Model;
use crate::easing::Curve;
use crate::layout::Rect;
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Ratio between a font's point size and its line height.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// A terminal font description.
///
/// Terminals render a single face, so a font here contributes its weight and
/// slant to the lipgloss style and its size to the layout metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Nominal point size, used for line metrics.
    pub size: f64,
    /// Render bold.
    pub bold: bool,
    /// Render italic.
    pub italic: bool,
}

impl Font {
    /// Regular system font at `size`.
    pub const fn system(size: f64) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
        }
    }

    /// Bold system font at `size`.
    pub const fn bold_system(size: f64) -> Self {
        Self {
            size,
            bold: true,
            italic: false,
        }
    }

    /// Returns a copy rendered in italics.
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Height of one line of text set in this font.
    pub fn line_height(&self) -> f64 {
        self.size * LINE_HEIGHT_RATIO
    }

    /// The lipgloss style carrying this font's weight and slant.
    pub fn style(&self) -> Style {
        Style::new().bold(self.bold).italic(self.italic)
    }
}

/// A glyph shown beside the field, e.g. `"✉"` or `"🔍"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    /// Wraps a glyph.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// The glyph text.
    pub fn glyph(&self) -> &str {
        &self.0
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Icon {
    fn from(glyph: &str) -> Self {
        Icon::new(glyph)
    }
}

/// When a side icon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Never drawn.
    #[default]
    Never,
    /// Drawn only while the field is focused.
    WhileEditing,
    /// Drawn only while the field is not focused.
    UnlessEditing,
    /// Always drawn.
    Always,
}

impl ViewMode {
    /// Whether a view in this mode is drawn given the field's focus state.
    pub fn shows(&self, editing: bool) -> bool {
        match self {
            ViewMode::Never => false,
            ViewMode::WhileEditing => editing,
            ViewMode::UnlessEditing => !editing,
            ViewMode::Always => true,
        }
    }
}

/// Configuration options applied by [`new`](super::new).
#[derive(Debug, Clone)]
pub enum FieldOption {
    /// Sets the floating title text.
    TitleText(String),
    /// Sets the title color.
    TitleColor(String),
    /// Sets the title font.
    TitleFont(Font),
    /// Sets the underline color.
    LineColor(String),
    /// Sets the underline thickness.
    LineHeight(f64),
    /// Sets the placeholder text.
    Placeholder(String),
    /// Sets the placeholder color.
    PlaceholderColor(String),
    /// Sets the placeholder font.
    PlaceholderFont(Font),
    /// Sets the field's own font.
    Font(Font),
    /// Sets the bounding box.
    Bounds(Rect),
    /// Sets the fade-in and fade-out durations.
    FadeDurations(Duration, Duration),
    /// Sets the timing curve for title transitions.
    TitleCurve(Curve),
    /// Sets the leading icon.
    LeftIcon(Icon),
    /// Sets the trailing icon.
    RightIcon(Icon),
    /// Sets the color the title fades toward.
    Background(String),
}

impl FieldOption {
    pub(super) fn apply(&self, m: &mut Model) {
        match self {
            FieldOption::TitleText(text) => m.set_title_text(Some(text.clone())),
            FieldOption::TitleColor(color) => m.set_title_color(color),
            FieldOption::TitleFont(font) => m.set_title_font(*font),
            FieldOption::LineColor(color) => m.set_line_color(color),
            FieldOption::LineHeight(height) => m.set_line_height(*height),
            FieldOption::Placeholder(text) => m.set_placeholder(text),
            FieldOption::PlaceholderColor(color) => m.set_placeholder_color(color),
            FieldOption::PlaceholderFont(font) => m.set_placeholder_font(Some(*font)),
            FieldOption::Font(font) => m.set_font(*font),
            FieldOption::Bounds(bounds) => m.set_bounds(*bounds),
            FieldOption::FadeDurations(fade_in, fade_out) => {
                m.title_fade_in_duration = *fade_in;
                m.title_fade_out_duration = *fade_out;
            }
            FieldOption::TitleCurve(curve) => m.set_title_curve(*curve),
            FieldOption::LeftIcon(icon) => m.set_left_icon(Some(icon.clone())),
            FieldOption::RightIcon(icon) => m.set_right_icon(Some(icon.clone())),
            FieldOption::Background(color) => m.background_color = color.clone(),
        }
    }
}

/// Sets the floating title text.
pub fn with_title(text: &str) -> FieldOption {
    FieldOption::TitleText(text.to_string())
}

/// Sets the title color (hex code or ANSI color number).
pub fn with_title_color(color: &str) -> FieldOption {
    FieldOption::TitleColor(color.to_string())
}

/// Sets the title font.
pub fn with_title_font(font: Font) -> FieldOption {
    FieldOption::TitleFont(font)
}

/// Sets the underline color.
pub fn with_line_color(color: &str) -> FieldOption {
    FieldOption::LineColor(color.to_string())
}

/// Sets the underline thickness.
pub fn with_line_height(height: f64) -> FieldOption {
    FieldOption::LineHeight(height)
}

/// Sets the placeholder shown while the field is empty.
pub fn with_placeholder(text: &str) -> FieldOption {
    FieldOption::Placeholder(text.to_string())
}

/// Sets the placeholder color.
pub fn with_placeholder_color(color: &str) -> FieldOption {
    FieldOption::PlaceholderColor(color.to_string())
}

/// Sets the placeholder font.
pub fn with_placeholder_font(font: Font) -> FieldOption {
    FieldOption::PlaceholderFont(font)
}

/// Sets the font of the entered text.
pub fn with_font(font: Font) -> FieldOption {
    FieldOption::Font(font)
}

/// Sets the field's bounding box.
pub fn with_bounds(bounds: Rect) -> FieldOption {
    FieldOption::Bounds(bounds)
}

/// Sets how long the title takes to fade in and out.
pub fn with_fade_durations(fade_in: Duration, fade_out: Duration) -> FieldOption {
    FieldOption::FadeDurations(fade_in, fade_out)
}

/// Sets the timing curve of title transitions.
pub fn with_title_curve(curve: Curve) -> FieldOption {
    FieldOption::TitleCurve(curve)
}

/// Sets the leading icon.
pub fn with_left_icon(icon: impl Into<Icon>) -> FieldOption {
    FieldOption::LeftIcon(icon.into())
}

/// Sets the trailing icon.
pub fn with_right_icon(icon: impl Into<Icon>) -> FieldOption {
    FieldOption::RightIcon(icon.into())
}

/// Sets the background color the title blends into while fading.
pub fn with_background(color: &str) -> FieldOption {
    FieldOption::Background(color.to_string())
}
