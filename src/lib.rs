#![no_std]
#![forbid(unsafe_code)]

//! Arc-length-normalized evaluation of quadratic and cubic Bézier curves,
//! composed into multi-segment paths and driven over time by a tween.
//!
//! The native Bézier parameter `t` moves unevenly along a curve: slow near
//! sharp curvature, fast on flat runs. Every [`BezierSegment`] therefore
//! samples its curve at a fixed resolution when it is built and keeps a
//! cumulative arc-length table, so queries can also take an even-speed
//! parameter `u` where `u = 0.5` means "halfway along the curve by
//! distance". A [`BezierPath`] stitches segments together and answers the
//! same queries relative to the whole path, and [`PathTween`] turns elapsed
//! time into a `u` for a frame loop to sample.
//!
//! All geometry is immutable once constructed; paths are append-only.
//! The crate is `no_std` (with `alloc`), using `num_traits::Float` for the
//! float math.

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod arc_length;
pub mod bezier_segment;
pub mod cubic_bezier;
pub mod path;
pub mod point;
pub mod quadratic_bezier;
pub mod tween;

pub use arc_length::{index_not_greater_than, ArcLengthTable};
pub use bezier_segment::{BezierSegment, Curve};
pub use cubic_bezier::CubicBezier;
pub use path::BezierPath;
pub use point::Point2;
pub use quadratic_bezier::QuadraticBezier;
pub use tween::{Frame, LoopMode, PathTween, Progress, Transition};

use thiserror::Error;

/// The floating point type used for all coordinates and parameters.
pub type NativeFloat = f64;

/// Tolerance for comparisons against zero (squared distances, chord
/// lengths, table sample deltas).
pub const EPSILON: NativeFloat = 1e-12;

/// Default number of samples used for a segment's arc-length estimation.
///
/// If a tween along the path visibly skips or jumps, raise the resolution
/// a bit; accuracy of the `u`-to-`t` mapping trades directly against it.
pub const DEFAULT_RESOLUTION: usize = 100;

/// Errors reported by segment/path construction and path queries.
///
/// Numeric edge cases (zero-length segments, equal table samples) are not
/// errors; they resolve to defined fallback values so a frame loop never
/// stalls on a math guard.
#[non_exhaustive]
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Arc-length estimation needs at least one sampling step.
    #[error("arc-length resolution must be at least 1")]
    InvalidResolution,
    /// Segment index out of range for the path.
    #[error("segment index {index} out of range for path with {count} segments")]
    SegmentIndexOutOfRange { index: usize, count: usize },
    /// Arc-length queries are undefined on a path with no segments.
    #[error("cannot evaluate an empty path")]
    EmptyPath,
    /// A tween must run for a strictly positive duration.
    #[error("tween duration must be strictly positive")]
    InvalidDuration,
}
