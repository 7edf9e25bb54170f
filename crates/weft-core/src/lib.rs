#![forbid(unsafe_code)]

//! Core: geometry, content scaling, and input tracking for weft.
//!
//! # Role in weft
//! `weft-core` is the measurement and input layer. It owns the value types
//! layout code measures with, the fit policies that map a source rectangle
//! into a destination, and the stateful trackers that turn raw pointer
//! input into semantic drag events.
//!
//! # Primary responsibilities
//! - **Size / Point**: real-valued measurement primitives.
//! - **ContentScale**: the closed set of source-into-destination fit rules.
//! - **DragTracker**: orientation-locked drag distance tracking.
//! - **Observable**: explicit change notification for widget state.
//!
//! # How it fits in the system
//! The animation crate (`weft-anim`) drives per-frame values that paint
//! code samples; `weft-core` is the deterministic substrate both sit on.
//! Nothing in this crate touches a clock, a thread, or an error path:
//! callers supply ticks and well-formed inputs.

pub mod content_scale;
pub mod drag;
pub mod geometry;
pub mod observe;

pub use content_scale::ContentScale;
pub use drag::{DragConfig, DragEvent, DragTracker, Orientation};
pub use geometry::{Point, Size};
pub use observe::{Observable, Subscription};
