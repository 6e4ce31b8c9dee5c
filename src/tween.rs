//! Time-driven traversal of a path.
//!
//! [`PathTween`] is a plain state record advanced by an external scheduler:
//! each tick the caller feeds it the frame delta, reads back the eased
//! even-speed parameter `u`, and samples the path. It owns no timer, no
//! event dispatch and no registry; dropping it cancels it.

use num_traits::Float;

use crate::path::BezierPath;
use crate::point::Point2;
use crate::{Error, NativeFloat};

/// Easing applied to the normalized elapsed-time ratio before it becomes
/// the path parameter `u`. The cubic in/out family.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Transition {
    /// Map a linear ratio in `[0, 1]` (clamped) to the eased ratio.
    /// Every transition is anchored: `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(self, ratio: NativeFloat) -> NativeFloat {
        let r = ratio.clamp(0.0, 1.0);
        match self {
            Transition::Linear => r,
            Transition::EaseIn => r * r * r,
            Transition::EaseOut => {
                let inv = r - 1.0;
                inv * inv * inv + 1.0
            }
            Transition::EaseInOut => {
                if r < 0.5 {
                    4.0 * r * r * r
                } else {
                    let inv = 2.0 * r - 2.0;
                    inv * inv * inv / 2.0 + 1.0
                }
            }
        }
    }
}

/// What happens when the tween reaches the end of a cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// Run once, then report done and hold the end.
    #[default]
    None,
    /// Jump back to the start every cycle; never done.
    Repeat,
    /// Ping-pong between the ends every other cycle; never done.
    Reverse,
}

/// Snapshot returned by [`PathTween::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    /// Eased even-speed parameter for the current tick, in `[0, 1]`.
    pub u: NativeFloat,
    /// True once a non-looping tween has played out its duration.
    pub done: bool,
}

/// One sampled animation frame, ready to be written onto a target's
/// transform by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub position: Point2,
    /// Tangent angle plus the configured offset, in radians; `None` unless
    /// angle updates were enabled.
    pub angle: Option<NativeFloat>,
}

/// Tween state for moving a target along a [`BezierPath`] over time.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTween {
    path: BezierPath,
    duration: NativeFloat,
    delay: NativeFloat,
    elapsed: NativeFloat,
    transition: Transition,
    loop_mode: LoopMode,
    update_angle: bool,
    angle_offset: NativeFloat,
}

impl PathTween {
    /// Create a tween that traverses `path` in `duration` seconds with a
    /// linear transition and no looping.
    ///
    /// Fails with [`Error::InvalidDuration`] unless `duration` is a
    /// strictly positive finite number.
    pub fn new(path: BezierPath, duration: NativeFloat) -> Result<Self, Error> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(Error::InvalidDuration);
        }
        Ok(PathTween {
            path,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            transition: Transition::default(),
            loop_mode: LoopMode::default(),
            update_angle: false,
            angle_offset: 0.0,
        })
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Wait `delay` seconds (clamped to zero) before progress starts.
    pub fn with_delay(mut self, delay: NativeFloat) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Also rotate the target along the path tangent, with `offset` added
    /// to the sampled tangent angle (radians).
    pub fn with_angle_update(mut self, offset: NativeFloat) -> Self {
        self.update_angle = true;
        self.angle_offset = offset;
        self
    }

    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    pub fn duration(&self) -> NativeFloat {
        self.duration
    }

    /// Time fed to the tween so far, including any delay still running.
    pub fn elapsed(&self) -> NativeFloat {
        self.elapsed
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// True once a non-looping tween has consumed delay plus duration.
    pub fn is_done(&self) -> bool {
        self.loop_mode == LoopMode::None && self.active_time() >= self.duration
    }

    /// Advance the tween clock by `dt` seconds and report the resulting
    /// progress. Time never runs backwards; a negative `dt` is ignored.
    pub fn advance(&mut self, dt: NativeFloat) -> Progress {
        self.elapsed += dt.max(0.0);
        self.progress()
    }

    /// The progress at the current clock, without advancing it.
    pub fn progress(&self) -> Progress {
        Progress {
            u: self.transition.apply(self.ratio()),
            done: self.is_done(),
        }
    }

    /// Sample the path at the current progress.
    ///
    /// Fails with [`Error::EmptyPath`] when the tween's path has no
    /// segments; a tween over an empty path has nowhere to put a target.
    pub fn frame(&self) -> Result<Frame, Error> {
        let u = self.transition.apply(self.ratio());
        let position = self.path.position(u)?;
        let angle = if self.update_angle {
            Some(self.path.mapped_tangent_angle(u)? + self.angle_offset)
        } else {
            None
        };
        Ok(Frame { position, angle })
    }

    fn active_time(&self) -> NativeFloat {
        (self.elapsed - self.delay).max(0.0)
    }

    /// Linear (pre-easing) cycle ratio for the current clock.
    fn ratio(&self) -> NativeFloat {
        let cycles = self.active_time() / self.duration;
        match self.loop_mode {
            LoopMode::None => cycles.clamp(0.0, 1.0),
            LoopMode::Repeat => cycles - Float::floor(cycles),
            LoopMode::Reverse => {
                let cycle_index = Float::floor(cycles);
                let fraction = cycles - cycle_index;
                if cycle_index as u64 % 2 == 1 {
                    1.0 - fraction
                } else {
                    fraction
                }
            }
        }
    }
}
