//! Sum type for the supported Bezier degrees, and the arc-length-measured
//! segment built on top of it.

use alloc::vec::Vec;

use crate::arc_length::ArcLengthTable;
use crate::cubic_bezier::CubicBezier;
use crate::point::Point2;
use crate::quadratic_bezier::QuadraticBezier;
use crate::{Error, NativeFloat, EPSILON};

/// Sum type for quadratic/cubic Bezier curves.
///
/// The degree is fixed at construction; queries dispatch on the variant so
/// callers never inspect the degree themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Curve {
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl Curve {
    /// Evaluate the curve at `t` in `[0, 1]` (clamped).
    pub fn eval(&self, t: NativeFloat) -> Point2 {
        match self {
            Curve::Quadratic(curve) => curve.eval(t),
            Curve::Cubic(curve) => curve.eval(t),
        }
    }

    /// Sample the curve's derivative at `t` (clamped). Not normalized.
    pub fn tangent(&self, t: NativeFloat) -> Point2 {
        match self {
            Curve::Quadratic(curve) => curve.tangent(t),
            Curve::Cubic(curve) => curve.tangent(t),
        }
    }

    /// The angle of the tangent at `t`, in radians.
    pub fn tangent_angle(&self, t: NativeFloat) -> NativeFloat {
        self.tangent(t).angle()
    }

    /// Return the curve's start point.
    pub fn start(&self) -> Point2 {
        match self {
            Curve::Quadratic(curve) => curve.start(),
            Curve::Cubic(curve) => curve.start(),
        }
    }

    /// Return the curve's end point.
    pub fn end(&self) -> Point2 {
        match self {
            Curve::Quadratic(curve) => curve.end(),
            Curve::Cubic(curve) => curve.end(),
        }
    }
}

impl From<QuadraticBezier> for Curve {
    fn from(curve: QuadraticBezier) -> Self {
        Curve::Quadratic(curve)
    }
}

impl From<CubicBezier> for Curve {
    fn from(curve: CubicBezier) -> Self {
        Curve::Cubic(curve)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Quadratic(QuadraticBezier::default())
    }
}

/// A Bezier curve measured for arc length at construction.
///
/// Building a segment samples the curve at `resolution + 1` evenly spaced
/// parameter values and accumulates the chord lengths between consecutive
/// samples into an [`ArcLengthTable`]. The summed chords slightly
/// undercount the true arc length at low resolutions; that is the intended
/// accuracy/cost trade, tuned via `resolution`.
///
/// Every query exists in two flavors: by the raw curve parameter `t`
/// (uneven speed) and by the arc-length-mapped parameter `u` (even speed),
/// with [`BezierSegment::map`] converting `u` to `t` through the table.
///
/// Segments are immutable; changing a control point means building a new
/// segment so the cached length and table can never go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSegment {
    curve: Curve,
    resolution: usize,
    length: NativeFloat,
    arc_lengths: ArcLengthTable,
}

impl BezierSegment {
    /// Measure a curve with `resolution` sampling steps.
    ///
    /// Fails with [`Error::InvalidResolution`] when `resolution < 1`; a
    /// malformed segment is never constructed.
    pub fn new(curve: impl Into<Curve>, resolution: usize) -> Result<Self, Error> {
        if resolution < 1 {
            return Err(Error::InvalidResolution);
        }
        Ok(Self::measured(curve.into(), resolution))
    }

    /// Shorthand for measuring a quadratic curve.
    pub fn quadratic(
        start: Point2,
        ctrl: Point2,
        end: Point2,
        resolution: usize,
    ) -> Result<Self, Error> {
        Self::new(QuadraticBezier::new(start, ctrl, end), resolution)
    }

    /// Shorthand for measuring a cubic curve.
    pub fn cubic(
        start: Point2,
        ctrl1: Point2,
        ctrl2: Point2,
        end: Point2,
        resolution: usize,
    ) -> Result<Self, Error> {
        Self::new(CubicBezier::new(start, ctrl1, ctrl2, end), resolution)
    }

    // resolution must already be validated (>= 1)
    pub(crate) fn measured(curve: Curve, resolution: usize) -> Self {
        let mut samples = Vec::with_capacity(resolution + 1);
        let mut total = 0.0;
        samples.push(total);
        let mut prev = curve.eval(0.0);
        for i in 1..=resolution {
            let t = i as NativeFloat / resolution as NativeFloat;
            let p = curve.eval(t);
            total += prev.distance(p);
            samples.push(total);
            prev = p;
        }

        BezierSegment {
            curve,
            resolution,
            length: total,
            arc_lengths: ArcLengthTable::from_samples(samples),
        }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Estimated length of the curve (summed sample chords).
    pub fn length(&self) -> NativeFloat {
        self.length
    }

    pub fn arc_lengths(&self) -> &ArcLengthTable {
        &self.arc_lengths
    }

    pub fn start(&self) -> Point2 {
        self.curve.start()
    }

    pub fn end(&self) -> Point2 {
        self.curve.end()
    }

    /// Position on the curve at the raw parameter `t`.
    pub fn position(&self, t: NativeFloat) -> Point2 {
        self.curve.eval(t)
    }

    /// Tangent vector at the raw parameter `t`. Not normalized.
    pub fn tangent(&self, t: NativeFloat) -> Point2 {
        self.curve.tangent(t)
    }

    /// Tangent angle in radians at the raw parameter `t`.
    pub fn tangent_angle(&self, t: NativeFloat) -> NativeFloat {
        self.curve.tangent_angle(t)
    }

    /// Map an even-speed parameter `u` in `[0, 1]` to the raw parameter
    /// `t` covering the same fraction of the segment's arc length.
    ///
    /// The target length `u * length` is located in the table by binary
    /// search, then refined by linear interpolation between the two
    /// enclosing samples. A zero-length segment passes `u` through
    /// unchanged (there is no geometry to remap over).
    pub fn map(&self, u: NativeFloat) -> NativeFloat {
        let u = u.clamp(0.0, 1.0);
        if self.length <= EPSILON {
            return u;
        }
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }

        let target = u * self.length;
        let index = self.arc_lengths.locate(target).unwrap_or(0);
        if index >= self.resolution {
            return 1.0;
        }
        let below = self.arc_lengths.sample(index);
        let above = self.arc_lengths.sample(index + 1);
        // equal samples would divide zero by zero; stay at the left sample
        let fraction = if above - below <= EPSILON {
            0.0
        } else {
            (target - below) / (above - below)
        };

        (index as NativeFloat + fraction) / self.resolution as NativeFloat
    }

    /// Position at `u`, spaced evenly by arc length.
    pub fn mapped_position(&self, u: NativeFloat) -> Point2 {
        self.position(self.map(u))
    }

    /// Tangent vector at `u`, spaced evenly by arc length. Not normalized.
    pub fn mapped_tangent(&self, u: NativeFloat) -> Point2 {
        self.tangent(self.map(u))
    }

    /// Tangent angle in radians at `u`, spaced evenly by arc length.
    pub fn mapped_tangent_angle(&self, u: NativeFloat) -> NativeFloat {
        self.tangent_angle(self.map(u))
    }
}

/// Degenerate zero-length segment; exists so segments can live in
/// `tinyvec` containers, which require `Default` items.
impl Default for BezierSegment {
    fn default() -> Self {
        BezierSegment::measured(Curve::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_RESOLUTION;

    fn curvy_cubic() -> CubicBezier {
        CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 0.0),
        )
    }

    // uneven control spacing on a straight line: raw t crawls near the
    // start, while arc-length mapping should traverse evenly
    fn uneven_line() -> CubicBezier {
        CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.2, 0.0),
            Point2::new(10.0, 0.0),
        )
    }

    #[test]
    fn rejects_zero_resolution() {
        let result = BezierSegment::new(curvy_cubic(), 0);
        assert_eq!(result, Err(Error::InvalidResolution));
    }

    #[test]
    fn table_invariants() {
        let segment = BezierSegment::new(curvy_cubic(), DEFAULT_RESOLUTION).unwrap();
        let table = segment.arc_lengths();
        assert_eq!(table.len(), DEFAULT_RESOLUTION + 1);
        assert_eq!(table.sample(0), 0.0);
        assert_eq!(table.sample(DEFAULT_RESOLUTION), segment.length());
        for i in 1..table.len() {
            assert!(table.sample(i) >= table.sample(i - 1));
        }
        assert!(segment.length() > 0.0);
    }

    #[test]
    fn map_endpoints_are_exact() {
        let segment = BezierSegment::new(curvy_cubic(), 50).unwrap();
        assert_eq!(segment.map(0.0), 0.0);
        assert_eq!(segment.map(1.0), 1.0);
        // out of range clamps rather than extrapolating
        assert_eq!(segment.map(-0.3), 0.0);
        assert_eq!(segment.map(1.7), 1.0);
    }

    #[test]
    fn mapped_position_travels_evenly() {
        let segment = BezierSegment::new(uneven_line(), DEFAULT_RESOLUTION).unwrap();
        // on a straight line arc length equals the x coordinate
        assert!((segment.length() - 10.0).abs() < 1e-9);
        for i in 0..=10 {
            let u = i as NativeFloat / 10.0;
            let p = segment.mapped_position(u);
            assert!((p.x - u * 10.0).abs() < 0.05);
        }
        // while the raw parameter does not
        assert!((segment.position(0.5).x - 5.0).abs() > 3.0);
    }

    #[test]
    fn map_is_monotonic() {
        let segment = BezierSegment::new(curvy_cubic(), 40).unwrap();
        let mut last = segment.map(0.0);
        for i in 1..=100 {
            let t = segment.map(i as NativeFloat / 100.0);
            assert!(t >= last);
            last = t;
        }
    }

    // worst-case unevenness of mapped sampling, as the max deviation of
    // the accumulated chord fraction from u itself
    fn evenness_error(segment: &BezierSegment) -> NativeFloat {
        let steps = 50;
        let mut points = std::vec::Vec::new();
        for i in 0..=steps {
            points.push(segment.mapped_position(i as NativeFloat / steps as NativeFloat));
        }
        let mut cumulative = std::vec![0.0];
        for pair in points.windows(2) {
            let last = *cumulative.last().unwrap();
            cumulative.push(last + pair[0].distance(pair[1]));
        }
        let total = *cumulative.last().unwrap();
        let mut worst: NativeFloat = 0.0;
        for (i, c) in cumulative.iter().enumerate() {
            let u = i as NativeFloat / steps as NativeFloat;
            worst = worst.max((c / total - u).abs());
        }
        worst
    }

    #[test]
    fn higher_resolution_reduces_mapping_error() {
        let coarse = BezierSegment::new(curvy_cubic(), 4).unwrap();
        let fine = BezierSegment::new(curvy_cubic(), 128).unwrap();
        let coarse_err = evenness_error(&coarse);
        let fine_err = evenness_error(&fine);
        assert!(fine_err < coarse_err);
        assert!(fine_err < 0.01);
    }

    #[test]
    fn zero_length_segment_is_harmless() {
        let p = Point2::new(2.0, -1.0);
        let segment = BezierSegment::quadratic(p, p, p, 10).unwrap();
        // the chord sum picks up last-bit rounding from the Bernstein
        // weights, so the length is only zero up to the guard tolerance
        assert!(segment.length() <= EPSILON);
        // map degenerates to the identity, queries stay put
        assert_eq!(segment.map(0.25), 0.25);
        assert!((segment.mapped_position(0.7) - p).norm() <= EPSILON);
    }

    #[test]
    fn quadratic_segments_share_the_machinery() {
        let segment = BezierSegment::quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
            60,
        )
        .unwrap();
        assert_eq!(segment.mapped_position(0.0), segment.start());
        assert_eq!(segment.mapped_position(1.0), segment.end());
        // symmetric arch: halfway by arc length is the apex
        let apex = segment.mapped_position(0.5);
        assert!((apex.x - 1.0).abs() < 0.01);
    }
}
