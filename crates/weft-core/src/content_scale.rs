#![forbid(unsafe_code)]

//! Fit policies: how a source rectangle's scale is computed relative to a
//! destination rectangle.
//!
//! [`ContentScale`] is a closed set of named strategies, each a pure
//! function from `(src, dst)` to a single uniform scale factor applied to
//! both dimensions. The exact tie-breaks matter at exact-fit boundaries:
//! [`Crop`](ContentScale::Crop) takes the max of the per-axis fill scales,
//! [`Fit`](ContentScale::Fit) the min, and
//! [`Inside`](ContentScale::Inside) checks containment with an inclusive
//! comparison so an exactly-fitting source is left unscaled.
//!
//! # Invariants
//!
//! 1. The result is `> 0` whenever both `src` dimensions are positive and
//!    both `dst` dimensions are positive (`Fixed(v)` requires `v > 0`).
//! 2. `Crop(src, dst) == max(FillWidth, FillHeight)` and
//!    `Fit(src, dst) == min(FillWidth, FillHeight)` for all positive sizes.
//! 3. `Inside` never upscales: its result is `min(1.0, Fit)` in effect.
//!
//! # Failure Modes
//!
//! A degenerate `src` (zero, negative, or non-finite dimension) is a caller
//! contract violation: debug builds assert, release builds return whatever
//! the IEEE division produces (infinity or NaN). Callers must guard.

use crate::geometry::Size;

/// The scale used when no scaling applies.
const ORIGINAL_SCALE: f32 = 1.0;

/// A rule for scaling a source rectangle to be inscribed into a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentScale {
    /// Scale uniformly so both dimensions are equal to or larger than the
    /// destination's. One dimension may overflow.
    Crop,
    /// Scale uniformly so both dimensions are equal to or less than the
    /// destination's. One dimension may underflow.
    Fit,
    /// Scale so the source height matches the destination height. The width
    /// may overflow or underflow.
    FillHeight,
    /// Scale so the source width matches the destination width. The height
    /// may overflow or underflow.
    FillWidth,
    /// Behave as [`Fit`](ContentScale::Fit) when the source is larger than
    /// the destination in either dimension; otherwise leave the source
    /// unscaled. Never upscales a small source.
    Inside,
    /// Always scale by the given fixed factor, ignoring both sizes.
    Fixed(f32),
}

impl ContentScale {
    /// No scaling: a fixed factor of 1.0.
    pub const NONE: ContentScale = ContentScale::Fixed(ORIGINAL_SCALE);

    /// Compute the scale factor to apply to both dimensions in order to fit
    /// the source appropriately within the given destination size.
    #[must_use]
    pub fn scale(&self, src: Size, dst: Size) -> f32 {
        debug_assert!(
            matches!(self, ContentScale::Fixed(_)) || !src.is_degenerate(),
            "ContentScale::scale called with degenerate src {src:?}"
        );
        match *self {
            ContentScale::Crop => fill_width(src, dst).max(fill_height(src, dst)),
            ContentScale::Fit => fill_min_dimension(src, dst),
            ContentScale::FillHeight => fill_height(src, dst),
            ContentScale::FillWidth => fill_width(src, dst),
            ContentScale::Inside => {
                if src.fits_within(&dst) {
                    ORIGINAL_SCALE
                } else {
                    fill_min_dimension(src, dst)
                }
            }
            ContentScale::Fixed(value) => value,
        }
    }
}

#[inline]
fn fill_width(src: Size, dst: Size) -> f32 {
    dst.width / src.width
}

#[inline]
fn fill_height(src: Size, dst: Size) -> f32 {
    dst.height / src.height
}

#[inline]
fn fill_min_dimension(src: Size, dst: Size) -> f32 {
    fill_width(src, dst).min(fill_height(src, dst))
}

#[cfg(test)]
mod tests {
    use super::ContentScale;
    use crate::geometry::Size;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn fill_axes() {
        let src = Size::new(100.0, 50.0);
        let dst = Size::new(200.0, 200.0);
        assert!(close(ContentScale::FillWidth.scale(src, dst), 2.0));
        assert!(close(ContentScale::FillHeight.scale(src, dst), 4.0));
    }

    #[test]
    fn crop_takes_max_fit_takes_min() {
        let src = Size::new(100.0, 50.0);
        let dst = Size::new(200.0, 200.0);
        assert!(close(ContentScale::Crop.scale(src, dst), 4.0));
        assert!(close(ContentScale::Fit.scale(src, dst), 2.0));
    }

    #[test]
    fn inside_shrinks_oversized_source() {
        // 300 > 150, so Inside behaves as Fit: min(0.5, 1.5) = 0.5.
        let src = Size::new(300.0, 100.0);
        let dst = Size::new(150.0, 150.0);
        assert!(close(ContentScale::Inside.scale(src, dst), 0.5));
        assert!(close(
            ContentScale::Inside.scale(src, dst),
            ContentScale::Fit.scale(src, dst)
        ));
    }

    #[test]
    fn inside_never_upscales() {
        let src = Size::new(10.0, 10.0);
        let dst = Size::new(100.0, 100.0);
        assert!(close(ContentScale::Inside.scale(src, dst), 1.0));
        // Fit would have upscaled.
        assert!(close(ContentScale::Fit.scale(src, dst), 10.0));
    }

    #[test]
    fn inside_exact_fit_boundary_is_inclusive() {
        let src = Size::new(100.0, 50.0);
        let dst = Size::new(100.0, 50.0);
        assert!(close(ContentScale::Inside.scale(src, dst), 1.0));
    }

    #[test]
    fn inside_one_axis_overflow_triggers_fit() {
        let src = Size::new(100.0, 60.0);
        let dst = Size::new(100.0, 50.0);
        // Height overflows, so Fit applies: min(1.0, 50/60).
        assert!(close(ContentScale::Inside.scale(src, dst), 50.0 / 60.0));
    }

    #[test]
    fn fixed_ignores_sizes() {
        let policy = ContentScale::Fixed(0.7);
        assert!(close(policy.scale(Size::new(1.0, 1.0), Size::new(9.0, 9.0)), 0.7));
        assert!(close(policy.scale(Size::new(500.0, 2.0), Size::ZERO), 0.7));
    }

    #[test]
    fn none_is_fixed_one() {
        assert_eq!(ContentScale::NONE, ContentScale::Fixed(1.0));
        assert!(close(
            ContentScale::NONE.scale(Size::new(3.0, 3.0), Size::new(7.0, 7.0)),
            1.0
        ));
    }

    #[test]
    fn tall_destination_portrait_source() {
        let src = Size::new(50.0, 200.0);
        let dst = Size::new(100.0, 100.0);
        assert!(close(ContentScale::Crop.scale(src, dst), 2.0));
        assert!(close(ContentScale::Fit.scale(src, dst), 0.5));
        assert!(close(ContentScale::FillWidth.scale(src, dst), 2.0));
        assert!(close(ContentScale::FillHeight.scale(src, dst), 0.5));
    }

    #[test]
    fn scaled_size_under_fit_is_contained() {
        let src = Size::new(417.0, 233.0);
        let dst = Size::new(180.0, 320.0);
        let scaled = src.scaled(ContentScale::Fit.scale(src, dst));
        assert!(scaled.width <= dst.width + 1e-3);
        assert!(scaled.height <= dst.height + 1e-3);
    }

    #[test]
    fn scaled_size_under_crop_covers() {
        let src = Size::new(417.0, 233.0);
        let dst = Size::new(180.0, 320.0);
        let scaled = src.scaled(ContentScale::Crop.scale(src, dst));
        assert!(scaled.width >= dst.width - 1e-3);
        assert!(scaled.height >= dst.height - 1e-3);
    }
}
