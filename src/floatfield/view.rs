//! Terminal rendering for the floating-label field.

use super::decorations::{IconView, LineView, TitleLabel};
use super::model::Model;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Number of shades between the background and the title color.
const FADE_STEPS: usize = 16;

// Lower block elements, one per eighth of a row.
const LINE_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

impl Model {
    /// Renders the field.
    ///
    /// Once laid out the output has three rows: the title (blank while
    /// hidden), the input with its icons, and the underline. Before the first
    /// layout pass only the input row is rendered.
    pub fn view(&self) -> String {
        let width = self.bounds.width.max(0.0).round() as usize;
        let mut rows = Vec::with_capacity(3);

        if let Some(title) = &self.title {
            rows.push(self.title_view(title, width));
        }
        rows.push(self.field_view());
        if let Some(line) = &self.line {
            rows.push(line_view(line, width));
        }

        rows.join("\n")
    }

    fn title_view(&self, title: &TitleLabel, width: usize) -> String {
        let text = fit(title.text.as_deref().unwrap_or(""), width);
        if title.alpha <= 0.0 {
            return " ".repeat(text.width());
        }

        let color = faded(&title.color, &self.background_color, title.alpha);
        title.font.style().foreground(color).render(&text)
    }

    fn field_view(&self) -> String {
        let editing = self.input.focused();
        let icon = |view: &Option<IconView>| -> Option<String> {
            view.as_ref()
                .filter(|view| view.mode.shows(editing))
                .map(|view| view.icon.glyph().to_string())
        };

        let mut parts = Vec::with_capacity(3);
        parts.extend(icon(&self.left_view));
        parts.push(self.input.view());
        parts.extend(icon(&self.right_view));
        parts.join(" ")
    }
}

fn line_view(line: &LineView, width: usize) -> String {
    let Some(glyph) = line_glyph(line.frame.height) else {
        return String::new();
    };
    Style::new()
        .foreground(Color::from(line.color.as_str()))
        .render(&glyph.to_string().repeat(width))
}

/// Block glyph for an underline `thickness` rows thick, `None` when too thin to draw.
pub(super) fn line_glyph(thickness: f64) -> Option<char> {
    if thickness <= 0.0 {
        return None;
    }
    let eighths = (thickness.min(1.0) * 8.0).ceil() as usize;
    Some(LINE_GLYPHS[eighths.clamp(1, 8) - 1])
}

/// `color` blended toward `background` by `alpha`.
pub(super) fn faded(color: &str, background: &str, alpha: f64) -> Color {
    if alpha >= 1.0 {
        return Color::from(color);
    }
    let ramp = lipgloss::blending::blend_1d(
        FADE_STEPS,
        vec![Color::from(background), Color::from(color)],
    );
    let idx = (alpha.clamp(0.0, 1.0) * (FADE_STEPS - 1) as f64).round() as usize;
    ramp[idx.min(ramp.len().saturating_sub(1))].clone()
}

/// Truncates or pads `text` to exactly `width` cells.
pub(super) fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
