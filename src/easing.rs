//! Timing curves for title transitions.
//!
//! The named curves are the CSS cubic-bezier presets. `evaluate` maps linear
//! progress in `0.0..=1.0` to eased progress.

/// Timing function applied to a transition's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// No easing.
    Linear,
    /// Slow start, accelerating. `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Fast start, decelerating. `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,
    /// Slow start and end. `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
}

impl Curve {
    /// Evaluates the curve at `t`, clamped to `0.0..=1.0`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Curve::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Curve::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_axis(y1, y2, t)
}

// Newton-Raphson on x(t) = progress.
fn solve_bezier_x(x1: f64, x2: f64, target_x: f64) -> f64 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_axis(x1, x2, t) - target_x;
        if x.abs() < 1e-7 {
            break;
        }

        let dx = bezier_axis_derivative(x1, x2, t);
        if dx.abs() < 1e-7 {
            break;
        }

        t = (t - x / dx).clamp(0.0, 1.0);
    }

    t
}

/// `3(1-t)²t·p1 + 3(1-t)t²·p2 + t³` with the end points fixed at 0 and 1.
#[inline]
fn bezier_axis(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_axis_derivative(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Curve; 4] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
    ];

    #[test]
    fn test_endpoints() {
        for curve in ALL {
            assert_eq!(curve.evaluate(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.evaluate(1.0), 1.0, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for curve in ALL {
            assert_eq!(curve.evaluate(-0.5), 0.0);
            assert_eq!(curve.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(Curve::EaseOut.evaluate(t) > t, "ease-out should lead at {t}");
            assert!(Curve::EaseIn.evaluate(t) < t, "ease-in should lag at {t}");
        }
    }

    #[test]
    fn test_monotonic() {
        for curve in ALL {
            let mut last = 0.0;
            for i in 0..=100 {
                let v = curve.evaluate(i as f64 / 100.0);
                assert!(v >= last - 1e-9, "{curve:?} went backwards at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric_at_midpoint() {
        assert!((Curve::EaseInOut.evaluate(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_default_is_ease_out() {
        assert_eq!(Curve::default(), Curve::EaseOut);
    }
}
