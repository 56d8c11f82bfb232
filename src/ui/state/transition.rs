// SPDX-License-Identifier: MPL-2.0
//! Timed transitions and easing curves.
//!
//! Curves follow the CSS timing functions of the same name, expressed as
//! cubic Bézier curves through (0, 0) and (1, 1).

use std::time::Duration;

/// Easing curve applied to a linear progress value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// CSS `ease`: `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    #[default]
    Ease,
    /// CSS `ease-in-out`: `cubic-bezier(0.42, 0.0, 0.58, 1.0)`.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `[0, 1]`) onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluates the Bézier timing curve with control points `(x1, y1)` and
/// `(x2, y2)` at horizontal position `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton-Raphson on x(s) = x, falling back to bisection on flat slopes.
    let mut s = x;
    for _ in 0..8 {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < 1e-5 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - error / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

/// A transition started at a scheduler time, lasting `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(started_at: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`. A zero duration completes immediately.
    #[must_use]
    pub fn linear_progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        self.easing.apply(self.linear_progress(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}

/// Linear interpolation between `from` and `to`.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn curves_hit_their_endpoints() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < EPSILON, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < EPSILON, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let early = Easing::EaseInOut.apply(0.25);
        let late = Easing::EaseInOut.apply(0.75);
        assert!((early + late - 1.0).abs() < EPSILON);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn ease_front_loads_progress() {
        assert!(Easing::Ease.apply(0.5) > 0.75);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Ease, Easing::EaseInOut] {
            let mut previous = 0.0;
            for step in 1..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value + EPSILON >= previous, "{easing:?} decreased at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn transition_progress_is_clamped() {
        let transition = Transition::new(ms(1000), ms(600), Easing::Linear);
        assert_eq!(transition.linear_progress(ms(500)), 0.0);
        assert!((transition.linear_progress(ms(1300)) - 0.5).abs() < EPSILON);
        assert_eq!(transition.linear_progress(ms(5000)), 1.0);
        assert!(!transition.is_finished(ms(1599)));
        assert!(transition.is_finished(ms(1600)));
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let transition = Transition::new(ms(10), Duration::ZERO, Easing::Ease);
        assert_eq!(transition.progress(ms(10)), 1.0);
        assert!(transition.is_finished(ms(10)));
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(20.0, 0.0, 0.0), 20.0);
        assert_eq!(lerp(20.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(20.0, 0.0, 0.5), 10.0);
    }
}
