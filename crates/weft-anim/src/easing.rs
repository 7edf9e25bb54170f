#![forbid(unsafe_code)]

//! Easing functions.
//!
//! Each function maps normalized time `t` in [0, 1] to eased progress in
//! [0, 1], with `f(0) == 0`, `f(1) == 1`, and monotonic non-decreasing
//! output in between. Inputs are expected pre-clamped by the caller
//! (tweens clamp before easing).

/// An easing function over normalized time.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic acceleration from zero velocity.
#[inline]
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic deceleration to zero velocity.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Acceleration until halfway, then deceleration. The default curve for
/// UI transitions.
#[inline]
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, EasingFn); 4] = [
        ("linear", linear),
        ("ease_in", ease_in),
        ("ease_out", ease_out),
        ("ease_in_out", ease_in_out),
    ];

    #[test]
    fn fixed_endpoints() {
        for (name, easing) in ALL {
            assert!(easing(0.0).abs() < 1e-6, "{name}(0) should be 0");
            assert!((easing(1.0) - 1.0).abs() < 1e-6, "{name}(1) should be 1");
        }
    }

    #[test]
    fn monotonic_on_unit_interval() {
        for (name, easing) in ALL {
            let mut prev = 0.0f32;
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let v = easing(t);
                assert!(v >= prev - 1e-4, "{name} should be monotonic at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn output_stays_in_unit_interval() {
        for (name, easing) in ALL {
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let v = easing(t);
                assert!((0.0..=1.0).contains(&v), "{name}({t}) = {v} out of range");
            }
        }
    }

    #[test]
    fn ease_in_out_symmetric_around_midpoint() {
        for i in 0..=50 {
            let t = i as f32 / 100.0;
            let a = ease_in_out(t);
            let b = ease_in_out(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-4, "asymmetry at t={t}");
        }
    }

    #[test]
    fn ease_in_slower_than_linear_early() {
        assert!(ease_in(0.25) < 0.25);
        assert!(ease_out(0.25) > 0.25);
    }
}
