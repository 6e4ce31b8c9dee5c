use alloc::vec::Vec;
use core::slice;

use num_traits::Float;
use tinyvec::TinyVec;

use crate::bezier_segment::{BezierSegment, Curve};
use crate::cubic_bezier::CubicBezier;
use crate::point::Point2;
use crate::quadratic_bezier::QuadraticBezier;
use crate::{Error, NativeFloat, DEFAULT_RESOLUTION, EPSILON};

/// A path composed of quadratic/cubic Bezier segments, traversed in
/// insertion order.
///
/// The path is append-only: segments are added through the path (which
/// measures them at the path's current resolution) and never removed or
/// reordered. The total length is kept in step with every append, so
/// arc-length queries never see a stale sum.
///
/// Path queries come in the same two flavors as segment queries:
/// [`BezierPath::eval`] and friends take a raw parameter `t` split
/// uniformly across segments (each segment owns an equal share of `t`,
/// regardless of its length), while [`BezierPath::position`] and friends
/// take an even-speed parameter `u` weighted by segment arc lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierPath {
    segments: TinyVec<[BezierSegment; 2]>,
    resolution: usize,
    length: NativeFloat,
}

impl Default for BezierPath {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierPath {
    /// Create an empty path using [`DEFAULT_RESOLUTION`] for its segments.
    pub fn new() -> Self {
        BezierPath {
            segments: TinyVec::default(),
            resolution: DEFAULT_RESOLUTION,
            length: 0.0,
        }
    }

    /// Create an empty path with a custom arc-length resolution.
    pub fn with_resolution(resolution: usize) -> Result<Self, Error> {
        if resolution < 1 {
            return Err(Error::InvalidResolution);
        }
        Ok(BezierPath {
            segments: TinyVec::default(),
            resolution,
            length: 0.0,
        })
    }

    /// The resolution applied to segments added from now on.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Change the resolution for future appends. Existing segments keep
    /// the table they were built with.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), Error> {
        if resolution < 1 {
            return Err(Error::InvalidResolution);
        }
        self.resolution = resolution;
        Ok(())
    }

    /// Append a quadratic segment from its control points.
    pub fn add_quadratic(&mut self, a: Point2, b: Point2, c: Point2) {
        self.push_curve(Curve::Quadratic(QuadraticBezier::new(a, b, c)));
    }

    /// Append a cubic segment from its control points.
    pub fn add_cubic(&mut self, a: Point2, b: Point2, c: Point2, d: Point2) {
        self.push_curve(Curve::Cubic(CubicBezier::new(a, b, c, d)));
    }

    /// Append any curve, measuring it at the path's resolution.
    pub fn add_curve(&mut self, curve: impl Into<Curve>) {
        self.push_curve(curve.into());
    }

    fn push_curve(&mut self, curve: Curve) {
        // the path's resolution is validated at construction
        let segment = BezierSegment::measured(curve, self.resolution);
        self.length += segment.length();
        self.segments.push(segment);
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> slice::Iter<'_, BezierSegment> {
        self.segments.iter()
    }

    /// Borrow the segment at `index`, failing when it is out of range.
    pub fn segment_at(&self, index: usize) -> Result<&BezierSegment, Error> {
        self.segments.get(index).ok_or(Error::SegmentIndexOutOfRange {
            index,
            count: self.segments.len(),
        })
    }

    /// Total path length: the sum of all segment length estimates.
    pub fn length(&self) -> NativeFloat {
        self.length
    }

    /// Position at the even-speed parameter `u` in `[0, 1]` (clamped),
    /// weighted by arc length across the whole path.
    pub fn position(&self, u: NativeFloat) -> Result<Point2, Error> {
        let (index, local) = self.locate(u)?;
        Ok(self.segments[index].mapped_position(local))
    }

    /// Tangent vector at the even-speed parameter `u`. Not normalized.
    pub fn mapped_tangent(&self, u: NativeFloat) -> Result<Point2, Error> {
        let (index, local) = self.locate(u)?;
        Ok(self.segments[index].mapped_tangent(local))
    }

    /// Tangent angle in radians at the even-speed parameter `u`.
    pub fn mapped_tangent_angle(&self, u: NativeFloat) -> Result<NativeFloat, Error> {
        let (index, local) = self.locate(u)?;
        Ok(self.segments[index].mapped_tangent_angle(local))
    }

    /// Position at the raw parameter `t` in `[0, 1]` (clamped), split
    /// uniformly across segments with no arc-length correction.
    pub fn eval(&self, t: NativeFloat) -> Result<Point2, Error> {
        let (index, local) = self.segment_parameter(t)?;
        Ok(self.segments[index].position(local))
    }

    /// Tangent vector at the raw parameter `t`. Not normalized.
    pub fn tangent(&self, t: NativeFloat) -> Result<Point2, Error> {
        let (index, local) = self.segment_parameter(t)?;
        Ok(self.segments[index].tangent(local))
    }

    /// Tangent angle in radians at the raw parameter `t`.
    pub fn tangent_angle(&self, t: NativeFloat) -> Result<NativeFloat, Error> {
        let (index, local) = self.segment_parameter(t)?;
        Ok(self.segments[index].tangent_angle(local))
    }

    /// Flatten the path into a polyline with `steps` raw-parameter samples
    /// per segment, e.g. for debug drawing.
    pub fn polyline(&self, steps: usize) -> Vec<Point2> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(self.segments.len() * steps + 1);
        for (i, segment) in self.segments.iter().enumerate() {
            let from = if i == 0 { 0 } else { 1 };
            for s in from..=steps {
                points.push(segment.position(s as NativeFloat / steps as NativeFloat));
            }
        }
        points
    }

    /// Find the segment owning the path-relative arc-length parameter `u`
    /// and rescale `u` into that segment's local `[0, 1]`.
    fn locate(&self, u: NativeFloat) -> Result<(usize, NativeFloat), Error> {
        let count = self.segments.len();
        if count == 0 {
            return Err(Error::EmptyPath);
        }
        // a path of only zero-length segments has nowhere to travel;
        // collapse every query onto the first segment's start
        if self.length <= EPSILON {
            return Ok((0, 0.0));
        }

        let u = u.clamp(0.0, 1.0);
        let target = u * self.length;
        let mut prefix = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            let len = segment.length();
            // the last segment's range is closed above so u = 1 lands on it
            if index + 1 == count || target < prefix + len {
                let local = if len <= EPSILON {
                    0.0
                } else {
                    ((target - prefix) / len).clamp(0.0, 1.0)
                };
                return Ok((index, local));
            }
            prefix += len;
        }
        unreachable!("segment walk always terminates at the last index")
    }

    /// Split the raw parameter `t` uniformly across segments: segment `i`
    /// of `n` owns `[i/n, (i+1)/n)`.
    fn segment_parameter(&self, t: NativeFloat) -> Result<(usize, NativeFloat), Error> {
        let count = self.segments.len();
        if count == 0 {
            return Err(Error::EmptyPath);
        }

        let t = t.clamp(0.0, 1.0);
        let scaled = t * count as NativeFloat;
        if scaled >= count as NativeFloat {
            return Ok((count - 1, 1.0));
        }

        let index = Float::floor(scaled) as usize;
        Ok((index, scaled - index as NativeFloat))
    }
}
