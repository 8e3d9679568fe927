#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-floatfield/")]

//! # bubbletea-floatfield
//!
//! A floating-label text field for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, built on the text input from
//! [bubbletea-widgets](https://crates.io/crates/bubbletea-widgets).
//!
//! ## Overview
//!
//! The field shows its placeholder while empty. As soon as it holds text a
//! title fades in above it, so the purpose of the field stays visible. An
//! underline marks the bottom edge and optional icons sit on either side.
//!
//! Like the other bubbletea components it follows the Elm Architecture:
//! forward messages to `update()`, return the commands it gives you, and call
//! `view()` to render.
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_floatfield::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     email: FloatField,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut email = floatfield_new(&[
//!             with_title("Email"),
//!             with_placeholder("Email"),
//!             with_left_icon("✉"),
//!         ]);
//!         email.layout();
//!         let focus_cmd = email.focus();
//!         (Self { email }, Some(focus_cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.email.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n\nPress Ctrl+C to quit", self.email.view())
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `floatfield` | The field model, its decorations, setters and view |
//! | `layout` | Pure title/underline geometry |
//! | `transition` | Frame-driven alpha/frame transitions |
//! | `easing` | Timing curves |

pub mod easing;
pub mod floatfield;
pub mod layout;
pub mod transition;

pub use easing::Curve;
pub use floatfield::{
    new as floatfield_new, FieldOption, Font, FrameMsg, Icon, Model as FloatField, ViewMode,
};
pub use layout::{title_rect, underline_rect, Rect};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_floatfield::prelude::*;
///
/// let field = floatfield_new(&[with_title("Name")]);
/// assert_eq!(field.title_text(), Some("Name"));
/// ```
pub mod prelude {
    pub use crate::easing::Curve;
    pub use crate::floatfield::{
        new as floatfield_new, with_background, with_bounds, with_fade_durations, with_font,
        with_left_icon, with_line_color, with_line_height, with_placeholder,
        with_placeholder_color, with_placeholder_font, with_right_icon, with_title,
        with_title_color, with_title_curve, with_title_font, CompletionFunc, FieldOption, Font,
        FrameMsg, Icon, Model as FloatField, ViewMode,
    };
    pub use crate::layout::Rect;
    pub use bubbletea_widgets::Component;
}
