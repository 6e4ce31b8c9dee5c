use crate::point::Point2;
use crate::NativeFloat;

/// A 2d quadratic Bezier curve defined by three points: the starting point,
/// one control point and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct QuadraticBezier {
    pub(crate) start: Point2,
    pub(crate) ctrl: Point2,
    pub(crate) end: Point2,
}

impl QuadraticBezier {
    pub fn new(start: Point2, ctrl: Point2, end: Point2) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn ctrl(&self) -> Point2 {
        self.ctrl
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial.
    /// t is clamped to [0, 1]; the curve is never extrapolated.
    pub fn eval(&self, t: NativeFloat) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.start * one_t2 + self.ctrl * (2.0 * one_t * t) + self.end * t2
    }

    /// Sample the curve's derivative at t (clamped to [0, 1]).
    /// The derivative of a quadratic is the line between the scaled control
    /// point differences; the result is a direction vector, not normalized.
    pub fn tangent(&self, t: NativeFloat) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        (self.ctrl - self.start) * (2.0 * (1.0 - t)) + (self.end - self.ctrl) * (2.0 * t)
    }

    /// The angle of the tangent at t, in radians.
    pub fn tangent_angle(&self, t: NativeFloat) -> NativeFloat {
        self.tangent(t).angle()
    }
}
