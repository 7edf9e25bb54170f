#![forbid(unsafe_code)]

//! Packed RGBA color.

/// An 8-bit-per-channel RGBA color.
///
/// Cheap to copy, `Eq`/`Hash` by exact channel values, which makes it
/// usable as a memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create an opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// This color with the alpha channel replaced.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// This color with the alpha channel set from a [0, 1] fraction
    /// (clamped, round-to-nearest).
    #[must_use]
    pub fn with_alpha_f32(self, a: f32) -> Self {
        self.with_alpha((a.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Linear interpolation toward `to` by `t` (clamped to [0, 1]),
    /// per channel, round-to-nearest.
    #[must_use]
    pub fn lerp(self, to: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
        };
        Rgba {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
            a: mix(self.a, to.a),
        }
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgba;

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let color = Rgba::rgb(10, 20, 30).with_alpha(40);
        assert_eq!(color, Rgba::rgba(10, 20, 30, 40));
    }

    #[test]
    fn with_alpha_f32_rounds_and_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha_f32(0.42).a, 107);
        assert_eq!(Rgba::WHITE.with_alpha_f32(-1.0).a, 0);
        assert_eq!(Rgba::WHITE.with_alpha_f32(2.0).a, 255);
    }

    #[test]
    fn lerp_endpoints() {
        let from = Rgba::rgb(0, 0, 0);
        let to = Rgba::rgb(200, 100, 50);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn lerp_midpoint() {
        let from = Rgba::rgba(0, 0, 0, 0);
        let to = Rgba::rgba(200, 100, 50, 255);
        let mid = from.lerp(to, 0.5);
        assert_eq!(mid, Rgba::rgba(100, 50, 25, 128));
    }

    #[test]
    fn lerp_clamps_t() {
        let from = Rgba::BLACK;
        let to = Rgba::WHITE;
        assert_eq!(from.lerp(to, -0.5), from);
        assert_eq!(from.lerp(to, 1.5), to);
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Rgba::from((1, 2, 3)), Rgba::rgb(1, 2, 3));
        assert_eq!(Rgba::from((1, 2, 3, 4)), Rgba::rgba(1, 2, 3, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let color = Rgba::rgba(9, 8, 7, 6);
        let json = serde_json::to_string(&color).unwrap();
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(color, back);
    }
}
