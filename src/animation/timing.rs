//! Easing curves for timed runs.
//!
//! The named curves use the same control points as the CSS keywords
//! `ease-in`, `ease-out` and `ease-in-out`, so a HUD fades the way a
//! platform transition would.

use std::rc::Rc;

/// Control points of a CSS `cubic-bezier(x1, y1, x2, y2)` curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const EASE_IN: CubicBezier = CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    pub const EASE_OUT: CubicBezier = CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    pub const EASE_IN_OUT: CubicBezier = CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// `x1` and `x2` are clamped to `0.0..=1.0` so the curve stays a function of time.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Output value for the time fraction `x`.
    pub fn solve(&self, x: f32) -> f32 {
        let t = self.parameter_for(x);
        component(t, self.y1, self.y2)
    }

    fn parameter_for(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-5;

        // Newton first; it converges in a few steps for well-behaved curves
        let mut t = x;
        for _ in 0..8 {
            let error = component(t, self.x1, self.x2) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = derivative(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        // Flat spots: fall back to bisection
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = component(t, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

/// One axis of a bezier with fixed end points 0 and 1.
fn component(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// How a timed run maps elapsed time to progress.
#[derive(Clone)]
pub enum TimingFunction {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(CubicBezier),
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl TimingFunction {
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        TimingFunction::CubicBezier(CubicBezier::new(x1, y1, x2, y2))
    }

    pub fn custom(f: impl Fn(f32) -> f32 + 'static) -> Self {
        TimingFunction::Custom(Rc::new(f))
    }

    /// Progress at time fraction `t`. `t` is clamped first; the result can
    /// still leave `0.0..=1.0` for overshooting curves.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => CubicBezier::EASE_IN.solve(t),
            TimingFunction::EaseOut => CubicBezier::EASE_OUT.solve(t),
            TimingFunction::EaseInOut => CubicBezier::EASE_IN_OUT.solve(t),
            TimingFunction::CubicBezier(curve) => curve.solve(t),
            TimingFunction::Custom(f) => f(t),
        }
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => f.write_str("Linear"),
            TimingFunction::EaseIn => f.write_str("EaseIn"),
            TimingFunction::EaseOut => f.write_str("EaseOut"),
            TimingFunction::EaseInOut => f.write_str("EaseInOut"),
            TimingFunction::CubicBezier(curve) => f.debug_tuple("CubicBezier").field(curve).finish(),
            TimingFunction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
