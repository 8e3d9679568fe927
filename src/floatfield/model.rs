//! Core model for the floating-label field.

use super::decorations::{IconView, LineView, TitleLabel};
use super::types::{FieldOption, Font, Icon};
use crate::easing::Curve;
use crate::layout::Rect;
use crate::transition::Transition;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use bubbletea_widgets::textinput::{self, Model as TextInput};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Used to route frame messages back to the field that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Default bounding box: one input row plus one underline row, 40 cells wide.
pub const DEFAULT_BOUNDS: Rect = Rect::new(0.0, 0.0, 40.0, 2.0);
/// Default title and underline color (blue).
pub const DEFAULT_ACCENT_COLOR: &str = "#0000FF";
/// Default placeholder color (light gray).
pub const DEFAULT_PLACEHOLDER_COLOR: &str = "#AAAAAA";
/// Default color the title fades into.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";
/// Default underline thickness.
pub const DEFAULT_LINE_HEIGHT: f64 = 0.5;
/// Default title fade in/out duration.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(200);
/// Default title font.
pub const DEFAULT_TITLE_FONT: Font = Font::system(12.0);
/// Default font of the entered text.
pub const DEFAULT_FONT: Font = Font::system(17.0);

/// A text field with a floating title, an underline and optional side icons.
///
/// The field wraps a [`bubbletea_widgets::textinput::Model`] for the actual
/// editing and adds decorations around it:
///
/// - a title label drawn above the field that fades in once the field holds
///   text and fades out when it is emptied again,
/// - an underline flush with the bottom of the field,
/// - a leading and a trailing icon.
///
/// The title and underline are created by the first [`layout`](Model::layout)
/// pass. Styling set before that is remembered and applied on creation.
///
/// # Examples
///
/// ```rust
/// use bubbletea_floatfield::floatfield::{new, with_placeholder, with_title};
///
/// let mut field = new(&[with_title("Email"), with_placeholder("Email")]);
/// field.layout();
/// assert!(!field.is_title_visible());
///
/// let _ = field.set_value("me@example.com");
/// assert!(field.is_title_visible());
/// ```
pub struct Model {
    /// The wrapped text input.
    pub input: TextInput,

    /// Duration of the title fade-in.
    pub title_fade_in_duration: Duration,
    /// Duration of the title fade-out.
    pub title_fade_out_duration: Duration,
    /// Timing curve of title transitions.
    pub title_curve: Curve,
    /// Color the title is blended into while partially transparent.
    pub background_color: String,

    pub(super) id: usize,
    pub(super) tag: usize,
    pub(super) bounds: Rect,
    pub(super) font: Font,

    pub(super) placeholder_color: String,
    pub(super) placeholder_font: Option<Font>,
    pub(super) title_color: String,
    pub(super) title_text: Option<String>,
    pub(super) title_font: Font,
    pub(super) line_color: String,
    pub(super) line_height: f64,
    pub(super) left_icon: Option<Icon>,
    pub(super) right_icon: Option<Icon>,

    pub(super) title: Option<TitleLabel>,
    pub(super) line: Option<LineView>,
    pub(super) left_view: Option<IconView>,
    pub(super) right_view: Option<IconView>,
    pub(super) transition: Option<Transition>,
}

/// Creates a new field with the given options applied.
///
/// Without options the field has no title text, a blue title and underline,
/// a 0.5 thick underline, a light-gray placeholder and 200ms fades.
///
/// ```rust
/// use bubbletea_floatfield::floatfield::{new, with_line_height, with_title_color};
///
/// let field = new(&[with_title_color("#FF5F87"), with_line_height(1.0)]);
/// assert_eq!(field.title_color(), "#FF5F87");
/// assert_eq!(field.line_height(), 1.0);
/// ```
pub fn new(opts: &[FieldOption]) -> Model {
    let mut input = textinput::new();
    // Borderless: the title and underline replace the prompt.
    input.prompt = String::new();

    let mut m = Model {
        input,
        title_fade_in_duration: DEFAULT_FADE_DURATION,
        title_fade_out_duration: DEFAULT_FADE_DURATION,
        title_curve: Curve::EaseOut,
        background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        id: next_id(),
        tag: 0,
        bounds: DEFAULT_BOUNDS,
        font: DEFAULT_FONT,
        placeholder_color: DEFAULT_PLACEHOLDER_COLOR.to_string(),
        placeholder_font: None,
        title_color: DEFAULT_ACCENT_COLOR.to_string(),
        title_text: None,
        title_font: DEFAULT_TITLE_FONT,
        line_color: DEFAULT_ACCENT_COLOR.to_string(),
        line_height: DEFAULT_LINE_HEIGHT,
        left_icon: None,
        right_icon: None,
        title: None,
        line: None,
        left_view: None,
        right_view: None,
        transition: None,
    };
    m.input.text_style = m.font.style();
    m.sync_input_width();

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl Model {
    /// Identifier carried by this field's frame messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// The field's bounding box.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The field's own font.
    pub fn font(&self) -> Font {
        self.font
    }

    /// Focuses the wrapped input so it receives key events.
    pub fn focus(&mut self) -> Cmd {
        self.input.focus()
    }

    /// Removes focus from the wrapped input.
    pub fn blur(&mut self) {
        self.input.blur()
    }

    /// Whether the wrapped input is focused. Focus counts as "editing" for icon
    /// view modes.
    pub fn focused(&self) -> bool {
        self.input.focused()
    }

    /// Routes a message to the field.
    ///
    /// Frame messages addressed to this field advance the title transition.
    /// Everything else goes to the wrapped text input; if that changes the
    /// text, the title visibility is re-evaluated.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<super::FrameMsg>() {
            if frame.id != self.id || frame.tag != self.tag {
                return None;
            }
            return self.advance_title_transition();
        }

        let before = self.input.value();
        let input_cmd = self.input.update(msg);
        if self.input.value() == before {
            return input_cmd;
        }

        let title_cmd = self.on_content_changed();
        match (input_cmd, title_cmd) {
            (Some(a), Some(b)) => Some(bubbletea_rs::batch(vec![a, b])),
            (a, b) => a.or(b),
        }
    }

    pub(super) fn sync_input_width(&mut self) {
        let mut cells = self.bounds.width.max(0.0).round() as i32;
        for view in [&self.left_view, &self.right_view].into_iter().flatten() {
            cells -= view.width() as i32 + 1;
        }
        // The input draws its cursor one cell past the configured width.
        self.input.set_width((cells - 1).max(0));
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(&[]);
        model.layout();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl bubbletea_widgets::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Some(Model::focus(self))
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
