use crate::point::Point2;
use crate::NativeFloat;

/// A 2d cubic Bezier curve defined by four points: the starting point, two
/// successive control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * (1 - t) * t² * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CubicBezier {
    pub(crate) start: Point2,
    pub(crate) ctrl1: Point2,
    pub(crate) ctrl2: Point2,
    pub(crate) end: Point2,
}

impl CubicBezier {
    pub fn new(start: Point2, ctrl1: Point2, ctrl2: Point2, end: Point2) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn ctrl1(&self) -> Point2 {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> Point2 {
        self.ctrl2
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial.
    /// t is clamped to [0, 1]; the curve is never extrapolated.
    pub fn eval(&self, t: NativeFloat) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.start * one_t3
            + self.ctrl1 * (3.0 * one_t2 * t)
            + self.ctrl2 * (3.0 * one_t * t2)
            + self.end * t3
    }

    /// Sample the curve's derivative at t (clamped to [0, 1]).
    /// The derivative is the quadratic over the scaled control point
    /// differences; the result is a direction vector, not normalized.
    pub fn tangent(&self, t: NativeFloat) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        (self.ctrl1 - self.start) * (3.0 * one_t2)
            + (self.ctrl2 - self.ctrl1) * (6.0 * one_t * t)
            + (self.end - self.ctrl2) * (3.0 * t2)
    }

    /// The angle of the tangent at t, in radians.
    pub fn tangent_angle(&self, t: NativeFloat) -> NativeFloat {
        self.tangent(t).angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn eval_hits_endpoints() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        );
        assert!((curve.eval(0.0) - curve.start).norm() < EPSILON);
        assert!((curve.eval(1.0) - curve.end).norm() < EPSILON);
    }

    #[test]
    fn circle_approximation_error() {
        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let quadrant = CubicBezier::new(
            Point2::new(0.0, 1.0),
            Point2::new(c, 1.0),
            Point2::new(1.0, c),
            Point2::new(1.0, 0.0),
        );
        let nsteps = 1000;
        for i in 0..=nsteps {
            let t = i as NativeFloat / nsteps as NativeFloat;
            let p = quadrant.eval(t);
            let contour = p.norm() - 1.0;
            assert!(contour.abs() <= max_error);
        }
    }

    #[test]
    fn tangent_matches_finite_difference() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        );
        let h = 1e-6;
        for i in 1..10 {
            let t = i as NativeFloat / 10.0;
            let approx = (curve.eval(t + h) - curve.eval(t - h)) * (1.0 / (2.0 * h));
            let exact = curve.tangent(t);
            assert!((approx - exact).norm() < 1e-3);
        }
    }

    #[test]
    fn tangent_at_endpoints_points_along_control_polygon() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(3.0, 0.0),
        );
        // B'(0) = 3 * (ctrl1 - start), B'(1) = 3 * (end - ctrl2)
        assert!((curve.tangent(0.0) - Point2::new(3.0, 3.0)).norm() < EPSILON);
        assert!((curve.tangent(1.0) - Point2::new(3.0, -3.0)).norm() < EPSILON);
        assert!(
            (curve.tangent_angle(0.0) - core::f64::consts::FRAC_PI_4).abs() < EPSILON
        );
    }
}
