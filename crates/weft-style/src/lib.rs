#![forbid(unsafe_code)]

//! Color and theme primitives for weft.
//!
//! # Role in weft
//! `weft-style` is the shared vocabulary for color. The animation crate
//! interpolates these values; widget code resolves them from a theme
//! context that is passed down explicitly rather than read from ambient
//! globals.
//!
//! # This crate provides
//! - [`Rgba`] packed color with channel access and interpolation.
//! - [`FieldTheme`] semantic color slots for input fields, with the
//!   derived inactive-label and inactive-indicator tints.

/// Packed RGBA color.
pub mod color;
/// Theme context with semantic color slots.
pub mod theme;

pub use color::Rgba;
pub use theme::FieldTheme;
