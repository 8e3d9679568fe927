//! Child decorations and the setters that keep them styled.
//!
//! Title and underline are created by the first [`Model::layout`] pass and live
//! as long as the field. Every setter stores its value first and only then
//! touches the decoration if it exists, so configuring a field before it is
//! laid out is always safe.

use super::model::Model;
use super::types::{Font, Icon, ViewMode};
use crate::layout::{self, Rect, TITLE_FALLBACK_HEIGHT};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// The floating title label.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLabel {
    /// Text of the label, if any.
    pub text: Option<String>,
    /// Text color.
    pub color: String,
    /// Font the label is set in.
    pub font: Font,
    /// Opacity from 0.0 (hidden) to 1.0 (opaque).
    pub alpha: f64,
    /// Position relative to the field.
    pub frame: Rect,
    /// Visibility most recently requested by the visibility controller.
    pub(super) shown: bool,
}

/// The underline drawn along the bottom edge of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    /// Fill color.
    pub color: String,
    /// Position relative to the field; its height is the line thickness.
    pub frame: Rect,
}

/// An icon shown to the left or right of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct IconView {
    /// The glyph drawn.
    pub icon: Icon,
    /// When the icon is drawn.
    pub mode: ViewMode,
}

impl IconView {
    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.icon.glyph().width()
    }
}

impl Model {
    /// Performs a layout pass.
    ///
    /// The first pass creates the title label and underline using the current
    /// configuration; later passes only re-apply their frames. Calling this any
    /// number of times leaves exactly one title and one underline.
    pub fn layout(&mut self) {
        let created = self.title.is_none();
        self.create_title_label();
        self.create_line_view();

        self.update_line_view();
        self.apply_title_frame();

        // Text assigned before the title existed would otherwise stay hidden
        // until the next edit.
        if created && self.is_title_visible() {
            std::mem::drop(self.set_title_visibility(false, None));
        }
    }

    fn create_title_label(&mut self) {
        if self.title.is_some() {
            return;
        }

        let frame = self.title_rect();
        self.title = Some(TitleLabel {
            text: self.title_text.clone(),
            color: self.title_color.clone(),
            font: self.title_font,
            alpha: 0.0,
            frame,
            shown: false,
        });
    }

    fn create_line_view(&mut self) {
        if self.line.is_some() {
            return;
        }

        self.line = Some(LineView {
            color: self.line_color.clone(),
            frame: layout::underline_rect(self.bounds, self.line_height),
        });
    }

    fn update_line_view(&mut self) {
        let frame = layout::underline_rect(self.bounds, self.line_height);
        if let Some(line) = self.line.as_mut() {
            line.frame = frame;
        }
    }

    /// Height of the title: its font's line height once the label exists,
    /// [`TITLE_FALLBACK_HEIGHT`] before that.
    pub fn title_height(&self) -> f64 {
        match &self.title {
            Some(title) => title.font.line_height(),
            None => TITLE_FALLBACK_HEIGHT,
        }
    }

    /// Where the title is placed for the current bounds.
    pub fn title_rect(&self) -> Rect {
        layout::title_rect(self.bounds, self.title_height())
    }

    /// Where the underline is placed for the current bounds.
    pub fn underline_rect(&self) -> Rect {
        layout::underline_rect(self.bounds, self.line_height)
    }

    /// The title label, once created.
    pub fn title_label(&self) -> Option<&TitleLabel> {
        self.title.as_ref()
    }

    /// The underline, once created.
    pub fn line_view(&self) -> Option<&LineView> {
        self.line.as_ref()
    }

    /// The leading icon view, once an icon has been assigned.
    pub fn left_view(&self) -> Option<&IconView> {
        self.left_view.as_ref()
    }

    /// The trailing icon view, once an icon has been assigned.
    pub fn right_view(&self) -> Option<&IconView> {
        self.right_view.as_ref()
    }

    /// Handles a change of the field's bounding box.
    ///
    /// The underline is moved immediately. The title is moved too, unless a
    /// transition is running, in which case the transition is retargeted.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.sync_input_width();
        self.update_line_view();
        self.apply_title_frame();
    }

    /// Moves the title to its computed rect, or retargets a running transition.
    fn apply_title_frame(&mut self) {
        let frame = self.title_rect();
        if let Some(transition) = self.transition.as_mut() {
            transition.retarget_frame(frame);
        } else if let Some(title) = self.title.as_mut() {
            title.frame = frame;
        }
    }

    /// Title color.
    pub fn title_color(&self) -> &str {
        &self.title_color
    }

    /// Sets the title color (hex code or ANSI color number).
    pub fn set_title_color(&mut self, color: &str) {
        self.title_color = color.to_string();
        if let Some(title) = self.title.as_mut() {
            title.color = self.title_color.clone();
        }
    }

    /// Title text.
    pub fn title_text(&self) -> Option<&str> {
        self.title_text.as_deref()
    }

    /// Sets the title text.
    pub fn set_title_text(&mut self, text: Option<String>) {
        self.title_text = text;
        if let Some(title) = self.title.as_mut() {
            title.text = self.title_text.clone();
        }
    }

    /// Title font.
    pub fn title_font(&self) -> Font {
        self.title_font
    }

    /// Sets the title font. The title frame follows on the next layout pass or
    /// visibility change.
    pub fn set_title_font(&mut self, font: Font) {
        self.title_font = font;
        if let Some(title) = self.title.as_mut() {
            title.font = font;
        }
    }

    /// Underline color.
    pub fn line_color(&self) -> &str {
        &self.line_color
    }

    /// Sets the underline color.
    pub fn set_line_color(&mut self, color: &str) {
        self.line_color = color.to_string();
        if let Some(line) = self.line.as_mut() {
            line.color = self.line_color.clone();
        }
    }

    /// Underline thickness.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Sets the underline thickness and re-lays out the underline at once.
    pub fn set_line_height(&mut self, height: f64) {
        self.line_height = height;
        self.update_line_view();
    }

    /// Placeholder color.
    pub fn placeholder_color(&self) -> &str {
        &self.placeholder_color
    }

    /// Sets the placeholder color.
    pub fn set_placeholder_color(&mut self, color: &str) {
        self.placeholder_color = color.to_string();
        self.update_placeholder();
    }

    /// Explicit placeholder font, if any.
    pub fn placeholder_font(&self) -> Option<Font> {
        self.placeholder_font
    }

    /// Sets the placeholder font. `None` falls back to the field's font.
    pub fn set_placeholder_font(&mut self, font: Option<Font>) {
        self.placeholder_font = font;
        self.update_placeholder();
    }

    /// Sets the placeholder text and restyles it.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.input.set_placeholder(placeholder);
        self.update_placeholder();
    }

    /// Sets the font of the entered text. The placeholder follows it unless a
    /// placeholder font is set.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.input.text_style = font.style();
        self.update_placeholder();
    }

    fn update_placeholder(&mut self) {
        if self.input.placeholder.is_empty() {
            return;
        }
        let font = self.placeholder_font.unwrap_or(self.font);
        self.input.placeholder_style = font
            .style()
            .foreground(Color::from(self.placeholder_color.as_str()));
    }

    /// Leading icon property.
    pub fn left_icon(&self) -> Option<&Icon> {
        self.left_icon.as_ref()
    }

    /// Sets the leading icon.
    ///
    /// A non-empty icon creates or replaces the leading view and shows it
    /// always. `None` only clears the property; an existing view keeps
    /// showing the previous icon.
    pub fn set_left_icon(&mut self, icon: Option<Icon>) {
        self.left_icon = icon;
        if let Some(view) = Self::icon_view(&self.left_icon) {
            self.left_view = Some(view);
            self.sync_input_width();
        }
    }

    /// Trailing icon property.
    pub fn right_icon(&self) -> Option<&Icon> {
        self.right_icon.as_ref()
    }

    /// Sets the trailing icon. Same rules as [`set_left_icon`](Model::set_left_icon).
    pub fn set_right_icon(&mut self, icon: Option<Icon>) {
        self.right_icon = icon;
        if let Some(view) = Self::icon_view(&self.right_icon) {
            self.right_view = Some(view);
            self.sync_input_width();
        }
    }

    fn icon_view(icon: &Option<Icon>) -> Option<IconView> {
        let icon = icon.as_ref().filter(|icon| !icon.is_empty())?;
        Some(IconView {
            icon: icon.clone(),
            mode: ViewMode::Always,
        })
    }

    /// Changes when the leading view is drawn. No-op without a leading view.
    pub fn set_left_view_mode(&mut self, mode: ViewMode) {
        if let Some(view) = self.left_view.as_mut() {
            view.mode = mode;
        }
    }

    /// Changes when the trailing view is drawn. No-op without a trailing view.
    pub fn set_right_view_mode(&mut self, mode: ViewMode) {
        if let Some(view) = self.right_view.as_mut() {
            view.mode = mode;
        }
    }
}
