#![forbid(unsafe_code)]

//! Theme context with semantic color slots.
//!
//! The theme is an explicit value passed down through widget parameters,
//! not an ambient global. Widget code resolves its colors from the theme
//! it was handed; swapping the theme object swaps every derived color.

use tracing::trace;

use crate::color::Rgba;

/// Alpha applied to the inactive color when tinting the indicator line.
const INDICATOR_INACTIVE_ALPHA: f32 = 0.42;

/// Alpha applied to the inactive color when tinting labels and icons.
const LABEL_INACTIVE_ALPHA: f32 = 0.54;

/// Semantic color slots for input fields.
///
/// `active` is the accent color shown while a field is focused;
/// `inactive` is the content color it falls back to when unfocused, with
/// the standard tint fractions applied per surface (see
/// [`label_inactive`](FieldTheme::label_inactive) and
/// [`indicator_inactive`](FieldTheme::indicator_inactive)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldTheme {
    /// Accent color for focused fields.
    pub active: Rgba,
    /// Content color for unfocused fields, before tinting.
    pub inactive: Rgba,
    /// Color for fields in an error state.
    pub error: Rgba,
    /// Background the field sits on.
    pub surface: Rgba,
}

impl FieldTheme {
    /// The default light theme.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            active: Rgba::rgb(98, 0, 238),
            inactive: Rgba::rgb(0, 0, 0),
            error: Rgba::rgb(176, 0, 32),
            surface: Rgba::WHITE,
        }
    }

    /// The default dark theme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            active: Rgba::rgb(187, 134, 252),
            inactive: Rgba::rgb(255, 255, 255),
            error: Rgba::rgb(207, 102, 121),
            surface: Rgba::rgb(18, 18, 18),
        }
    }

    /// Replace the accent color.
    #[must_use]
    pub const fn with_active(mut self, color: Rgba) -> Self {
        self.active = color;
        self
    }

    /// Replace the inactive content color.
    #[must_use]
    pub const fn with_inactive(mut self, color: Rgba) -> Self {
        self.inactive = color;
        self
    }

    /// Replace the error color.
    #[must_use]
    pub const fn with_error(mut self, color: Rgba) -> Self {
        self.error = color;
        self
    }

    /// Replace the surface color.
    #[must_use]
    pub const fn with_surface(mut self, color: Rgba) -> Self {
        self.surface = color;
        self
    }

    /// The inactive color tinted for label text.
    #[must_use]
    pub fn label_inactive(&self) -> Rgba {
        self.inactive.with_alpha_f32(LABEL_INACTIVE_ALPHA)
    }

    /// The inactive color tinted for the indicator line.
    #[must_use]
    pub fn indicator_inactive(&self) -> Rgba {
        trace!(target: "weft::theme", inactive = ?self.inactive, "deriving indicator tint");
        self.inactive.with_alpha_f32(INDICATOR_INACTIVE_ALPHA)
    }
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self::light()
    }
}
