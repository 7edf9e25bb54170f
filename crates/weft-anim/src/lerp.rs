#![forbid(unsafe_code)]

//! Linear interpolation over animatable value types.

use weft_style::Rgba;

/// Linear interpolation between two values of the same type.
///
/// `t` is eased progress; implementations treat 0.0 as `self` and 1.0 as
/// `to`, clamping outside that range.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t.clamp(0.0, 1.0)
    }
}

impl Lerp for Rgba {
    fn lerp(self, to: Self, t: f32) -> Self {
        Rgba::lerp(self, to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::Lerp;
    use weft_style::Rgba;

    #[test]
    fn f32_endpoints_and_midpoint() {
        assert_eq!(1.0f32.lerp(2.0, 0.0), 1.0);
        assert_eq!(1.0f32.lerp(2.0, 1.0), 2.0);
        assert_eq!(1.0f32.lerp(2.0, 0.5), 1.5);
    }

    #[test]
    fn f32_clamps_t() {
        assert_eq!(1.0f32.lerp(2.0, -1.0), 1.0);
        assert_eq!(1.0f32.lerp(2.0, 3.0), 2.0);
    }

    #[test]
    fn f32_decreasing_range() {
        assert_eq!(2.0f32.lerp(1.0, 0.5), 1.5);
    }

    #[test]
    fn rgba_delegates_to_color_lerp() {
        let from = Rgba::BLACK;
        let to = Rgba::rgb(200, 100, 50);
        assert_eq!(Lerp::lerp(from, to, 0.5), from.lerp(to, 0.5));
    }
}
