//! Frame-driven opacity/frame transitions.
//!
//! A [`Transition`] interpolates an alpha value and a [`Rect`] from where they
//! currently are to a target over a fixed duration. It owns no timer: the
//! owning component schedules [`FrameMsg`]s with `bubbletea_rs::tick` and calls
//! [`Transition::advance`] once per accepted frame. Each frame advances the
//! clock by exactly [`frame_interval`], which keeps the animation deterministic
//! regardless of how late the runtime delivers the tick.
//!
//! Completion callbacks fire exactly once: with `true` when the transition
//! reaches its end, with `false` when it is cancelled before that.

use crate::easing::Curve;
use crate::layout::Rect;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::fmt;
use std::time::Duration;

/// Frames per second used for title transitions.
pub const FPS: u32 = 60;

/// Callback invoked when a transition finishes or is cancelled.
///
/// The argument is `true` if the transition ran to completion and `false` if it
/// was superseded by a later change. `Send` keeps the owning model usable as a
/// `bubbletea_rs::Model`.
pub type CompletionFunc = Box<dyn FnOnce(bool) + Send>;

/// Message that advances an in-flight transition by one frame.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// Identifier of the component that scheduled the frame.
    pub id: usize,
    /// Transition sequence tag; frames with an outdated tag are ignored.
    pub tag: usize,
}

impl From<FrameMsg> for Msg {
    fn from(msg: FrameMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Time covered by a single frame.
pub fn frame_interval() -> Duration {
    Duration::from_nanos((1_000_000_000 + FPS as u64 / 2) / FPS as u64)
}

/// Schedules the next frame for component `id` at transition `tag`.
pub fn next_frame(id: usize, tag: usize) -> Cmd {
    bubbletea_tick(frame_interval(), move |_| Box::new(FrameMsg { id, tag }) as Msg)
}

/// Runtime state of one alpha/frame transition.
pub struct Transition {
    from_alpha: f64,
    to_alpha: f64,
    from_frame: Rect,
    to_frame: Rect,
    duration: Duration,
    elapsed: Duration,
    curve: Curve,
    completions: Vec<CompletionFunc>,
}

impl Transition {
    /// Starts a transition from the currently displayed values toward a target.
    pub fn new(
        (from_alpha, from_frame): (f64, Rect),
        (to_alpha, to_frame): (f64, Rect),
        duration: Duration,
        curve: Curve,
    ) -> Self {
        Self {
            from_alpha,
            to_alpha,
            from_frame,
            to_frame,
            duration,
            elapsed: Duration::ZERO,
            curve,
            completions: Vec::new(),
        }
    }

    /// Queues a callback to run when this transition ends.
    pub fn on_complete(&mut self, completion: Option<CompletionFunc>) {
        if let Some(completion) = completion {
            self.completions.push(completion);
        }
    }

    /// The alpha this transition is heading toward.
    pub fn target_alpha(&self) -> f64 {
        self.to_alpha
    }

    /// The frame this transition is heading toward.
    pub fn target_frame(&self) -> Rect {
        self.to_frame
    }

    /// Moves the end frame, keeping progress. Used when the bounds change mid-flight.
    pub fn retarget_frame(&mut self, frame: Rect) {
        self.to_frame = frame;
    }

    /// Linear progress in `0.0..=1.0`. Zero-length transitions are always complete.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the transition has reached its end.
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Alpha and frame at the current point in time.
    ///
    /// The end values are returned exactly once the transition has finished so
    /// that floating point error never leaves the title at 0.9999.
    pub fn sample(&self) -> (f64, Rect) {
        if self.is_finished() {
            return (self.to_alpha, self.to_frame);
        }
        let eased = self.curve.evaluate(self.progress());
        let alpha = self.from_alpha + (self.to_alpha - self.from_alpha) * eased;
        (alpha.clamp(0.0, 1.0), self.from_frame.lerp(&self.to_frame, eased))
    }

    /// Advances the clock by one frame and returns the new sample.
    pub fn advance(&mut self) -> (f64, Rect) {
        self.elapsed = (self.elapsed + frame_interval()).min(self.duration);
        self.sample()
    }

    /// Consumes the transition, firing every queued completion with `finished`.
    pub fn finish(self, finished: bool) {
        for completion in self.completions {
            completion(finished);
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from_alpha", &self.from_alpha)
            .field("to_alpha", &self.to_alpha)
            .field("to_frame", &self.to_frame)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("curve", &self.curve)
            .field("completions", &self.completions.len())
            .finish()
    }
}
