//! Title visibility: the show/hide state machine and its transitions.
//!
//! The title has two states, hidden (alpha 0) and shown (alpha 1), both placed
//! above the field. Which one applies is derived from the text: shown iff the
//! field is non-empty. The most recent request always wins; a running
//! transition toward a stale target is cancelled and the new one starts from
//! whatever alpha is on screen, so rapid edits never flicker.

use super::model::Model;
use crate::easing::Curve;
use crate::transition::{next_frame, CompletionFunc, Transition};
use bubbletea_rs::Cmd;
use log::{debug, trace};

impl Model {
    /// Whether the title should be shown for the current text.
    pub fn is_title_visible(&self) -> bool {
        !self.input.value().is_empty()
    }

    /// Current title opacity, or `None` before the first layout pass.
    pub fn title_alpha(&self) -> Option<f64> {
        self.title.as_ref().map(|title| title.alpha)
    }

    /// Whether a title transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Sets the timing curve used by later transitions.
    pub fn set_title_curve(&mut self, curve: Curve) {
        self.title_curve = curve;
    }

    /// Sets the text and animates the title accordingly.
    ///
    /// Return the command from your `update` so the transition gets its frames.
    pub fn set_value(&mut self, value: &str) -> Option<Cmd> {
        let before = self.input.value();
        self.input.set_value(value);
        if self.input.value() == before {
            return None;
        }
        self.on_content_changed()
    }

    /// Clears the text and animates the title out.
    pub fn reset(&mut self) -> Option<Cmd> {
        self.set_value("")
    }

    /// Re-evaluates the title after the text changed.
    ///
    /// Called by [`update`](Model::update) and [`set_value`](Model::set_value);
    /// call it yourself if you edit [`input`](Model::input) directly.
    pub fn on_content_changed(&mut self) -> Option<Cmd> {
        self.set_title_visibility(true, None)
    }

    /// Brings the title in line with the text.
    ///
    /// With `animated` the title fades over the fade-in or fade-out duration
    /// and a frame command is returned. Without it the change is applied now.
    ///
    /// `completion` receives `true` once the title has reached its target, or
    /// `false` if a later call superseded the transition first. Requesting the
    /// target a running transition already heads for leaves it running; the
    /// completion then fires when it finishes.
    pub fn set_title_visibility(
        &mut self,
        animated: bool,
        completion: Option<CompletionFunc>,
    ) -> Option<Cmd> {
        let visible = self.is_title_visible();
        let alpha = if visible { 1.0 } else { 0.0 };
        let frame = self.title_rect();

        let Some(title) = self.title.as_mut() else {
            if let Some(completion) = completion {
                completion(true);
            }
            return None;
        };
        let current = (title.alpha, title.frame);
        let same_target = title.shown == visible;
        title.shown = visible;

        if same_target {
            match self.transition.as_mut() {
                Some(transition) if animated => {
                    transition.on_complete(completion);
                    return None;
                }
                None => {
                    if let Some(completion) = completion {
                        completion(true);
                    }
                    return None;
                }
                Some(_) => {}
            }
        }

        if let Some(stale) = self.transition.take() {
            debug!(
                "floatfield {}: superseding title transition toward alpha {}",
                self.id,
                stale.target_alpha()
            );
            stale.finish(false);
        }
        // Invalidate frames already scheduled for the old transition.
        self.tag = self.tag.wrapping_add(1);

        if !animated {
            if let Some(title) = self.title.as_mut() {
                title.alpha = alpha;
                title.frame = frame;
            }
            if let Some(completion) = completion {
                completion(true);
            }
            return None;
        }

        let duration = if visible {
            self.title_fade_in_duration
        } else {
            self.title_fade_out_duration
        };
        debug!(
            "floatfield {}: title {} over {:?}",
            self.id,
            if visible { "fading in" } else { "fading out" },
            duration
        );
        let mut transition = Transition::new(current, (alpha, frame), duration, self.title_curve);
        transition.on_complete(completion);
        self.transition = Some(transition);

        Some(next_frame(self.id, self.tag))
    }

    pub(super) fn advance_title_transition(&mut self) -> Option<Cmd> {
        let transition = self.transition.as_mut()?;
        let (alpha, frame) = transition.advance();
        let finished = transition.is_finished();
        trace!("floatfield {}: title alpha {:.3}", self.id, alpha);

        if let Some(title) = self.title.as_mut() {
            title.alpha = alpha;
            title.frame = frame;
        }

        if !finished {
            return Some(next_frame(self.id, self.tag));
        }
        if let Some(transition) = self.transition.take() {
            transition.finish(true);
        }
        None
    }
}
