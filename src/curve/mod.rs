//! Interactive Bézier curve editing.
//!
//! A [`CurveEditor`] owns the control polygon, a queue of pending edits and the cached curve samples. Hosts queue
//! [`Command`]s from their input handlers at any time and call [`CurveEditor::frame`] once per frame; the edits are
//! applied together at that point, so evaluation never observes a half-applied batch of input.

pub mod bernstein;
pub mod casteljau;
pub mod control;

pub use self::{
    bernstein::Bernstein,
    casteljau::{handle_quad, Construction, HANDLE_INDICES},
    control::{Command, ControlPoints},
};

use crate::{config::Config, Error};
use alloc::{collections::VecDeque, vec::Vec};
use log::debug;
use vek::Vec2;

/// Maps elapsed time onto a curve parameter that sweeps repeatedly from 0 to 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    period: f32,
}

impl Animation {
    /// The period, in seconds, must be finite and positive.
    pub fn new(period: f32) -> Result<Self, Error> {
        if period.is_finite() && period > 0.0 {
            Ok(Self { period })
        } else {
            Err(Error::InvalidPeriod(period))
        }
    }

    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    /// The parameter at `seconds` into the animation, always in `[0, 1)`.
    pub fn parameter(&self, seconds: f32) -> f32 {
        let cycles = seconds / self.period;
        let t = cycles - cycles.floor();
        // Rounding can land exactly on 1 for tiny negative inputs
        if t >= 1.0 {
            0.0
        } else {
            t
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            period: Config::DEFAULT_ANIMATION_PERIOD,
        }
    }
}

/// Everything a host needs to draw one frame of the editor.
#[derive(Clone, Debug)]
pub struct CurveFrame<'a> {
    /// The sampled curve, a fixed number of points (or none, for fewer than two control points).
    pub curve: &'a [Vec2<f32>],
    /// The de Casteljau construction at the current animation parameter.
    pub construction: Construction,
    /// Half the side length of each handle in [`CurveFrame::handles`].
    pub handle_size: f32,
}

impl<'a> CurveFrame<'a> {
    #[inline]
    pub fn t(&self) -> f32 {
        self.construction.t()
    }

    pub fn handles(&self) -> impl Iterator<Item = [Vec2<f32>; 4]> + '_ {
        self.construction.handles(self.handle_size)
    }
}

/// The state behind an interactive curve: its control polygon, pending edits and cached samples.
#[derive(Clone, Debug)]
pub struct CurveEditor {
    controls: ControlPoints,
    pending: VecDeque<Command>,
    samples: Vec<Vec2<f32>>,
    sample_count: usize,
    animation: Animation,
    handle_size: f32,
}

impl CurveEditor {
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            controls: ControlPoints::new(),
            pending: VecDeque::new(),
            samples: Vec::with_capacity(config.curve_samples),
            sample_count: config.curve_samples,
            animation: Animation::new(config.animation_period)?,
            handle_size: config.handle_size,
        })
    }

    /// Queue an edit to be applied at the start of the next frame.
    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn controls(&self) -> &ControlPoints {
        &self.controls
    }

    /// Apply every queued edit, in order. Returns the number applied.
    pub fn apply_pending(&mut self) -> usize {
        let count = self.pending.len();
        self.pending
            .drain(..)
            .for_each(|command| self.controls.apply(command));
        if count > 0 {
            debug!(
                "applied {} curve edit(s), {} control point(s)",
                count,
                self.controls.len()
            );
        }
        count
    }

    /// The sampled curve, resampled first if the control polygon changed since the last call.
    pub fn samples(&mut self) -> &[Vec2<f32>] {
        if self.controls.take_dirty() {
            self.samples.clear();
            if let Some(mut curve) = Bernstein::new(self.controls.as_slice()) {
                curve.sample_into(self.sample_count, &mut self.samples);
            }
            debug!(
                "resampled curve: {} control point(s), {} sample(s)",
                self.controls.len(),
                self.samples.len()
            );
        }
        &self.samples
    }

    /// Advance to a new frame: apply queued edits, refresh the samples if needed and build the construction at the
    /// parameter `seconds` into the animation.
    pub fn frame(&mut self, seconds: f32) -> CurveFrame<'_> {
        self.apply_pending();
        let t = self.animation.parameter(seconds);
        let construction = Construction::new(self.controls.as_slice(), t);
        let handle_size = self.handle_size;
        CurveFrame {
            curve: self.samples(),
            construction,
            handle_size,
        }
    }
}

impl Default for CurveEditor {
    fn default() -> Self {
        Self {
            controls: ControlPoints::new(),
            pending: VecDeque::new(),
            samples: Vec::new(),
            sample_count: Config::DEFAULT_CURVE_SAMPLES,
            animation: Animation::default(),
            handle_size: Config::DEFAULT_HANDLE_SIZE,
        }
    }
}
