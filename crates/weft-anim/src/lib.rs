#![forbid(unsafe_code)]

//! Animation: easing, tweens, and the field transition state machine.
//!
//! # Role in weft
//! `weft-anim` turns discrete state changes into continuously-sampled
//! output values. Everything here is frame-driven and deterministic: the
//! caller ticks with an elapsed [`Duration`] and samples; nothing reads a
//! clock or spawns a thread.
//!
//! # Primary responsibilities
//! - **Animation**: the tick/value contract every driver implements.
//! - **Tween**: fixed-duration eased progress.
//! - **FieldTransition**: the focused/unfocused input-field state machine
//!   driving label and indicator channels.
//!
//! # How it fits in the system
//! Widget code derives an [`field::InputPhase`] from focus and content
//! state each evaluation, hands it to a [`field::FieldTransition`], and
//! paints from the sampled values every frame.

use std::time::Duration;

pub mod easing;
pub mod field;
pub mod lerp;
pub mod tween;

pub use easing::{EasingFn, ease_in, ease_in_out, ease_out, linear};
pub use field::{
    DefinitionCache, FieldColors, FieldSample, FieldTransition, InputPhase, TransitionDefinition,
};
pub use lerp::Lerp;
pub use tween::Tween;

/// A tick-driven animation producing a normalized progress value.
///
/// Implementations advance only through [`tick`](Animation::tick); calling
/// it with an unchanged accumulated time is the caller's responsibility to
/// avoid. `value()` is always safe to call, including before the first
/// tick and after completion.
pub trait Animation {
    /// Advance by `dt` of animation time.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Current output value, typically in [0.0, 1.0].
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Time advanced past completion, for chaining into a follow-up
    /// animation. Zero while running.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}
