//! Floating-label text field for Bubble Tea applications.
//!
//! The field wraps the `bubbletea-widgets` text input and decorates it with a
//! title that floats above the input while it holds text, an underline along
//! its bottom edge, and optional icons on either side.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_floatfield::floatfield::{new, with_placeholder, with_right_icon, with_title};
//!
//! let mut field = new(&[
//!     with_title("Username"),
//!     with_placeholder("Username"),
//!     with_right_icon("✓"),
//! ]);
//! field.layout();
//!
//! // Typing (or set_value) fades the title in; return the command from your
//! // update so the animation receives its frames.
//! let _cmd = field.set_value("gopher");
//! assert!(field.is_title_visible());
//! ```
//!
//! # Animation
//!
//! Show and hide transitions are driven by [`FrameMsg`]s scheduled with
//! `bubbletea_rs::tick`. Forward every message to [`Model::update`]; frames
//! meant for other fields, or for a transition that has since been replaced,
//! are ignored.

pub mod decorations;
pub mod model;
pub mod types;
pub mod view;
pub mod visibility;


pub use crate::transition::{CompletionFunc, FrameMsg};
pub use decorations::{IconView, LineView, TitleLabel};
pub use model::{new, Model};
pub use types::{
    with_background, with_bounds, with_fade_durations, with_font, with_left_icon,
    with_line_color, with_line_height, with_placeholder, with_placeholder_color,
    with_placeholder_font, with_right_icon, with_title, with_title_color, with_title_curve,
    with_title_font, FieldOption, Font, Icon, ViewMode,
};
