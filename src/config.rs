use crate::{math::DEFAULT_SCALE, viewport::Viewport, Error};

/// Session-wide parameters shared by the rasterizers and the curve editor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Lattice units per unit of device space.
    pub scale: f32,
    /// Number of points in a sampled curve.
    pub curve_samples: usize,
    /// Seconds taken by the subdivision animation to sweep `t` from 0 to 1.
    pub animation_period: f32,
    /// Half the side length of a control point handle, in device units.
    pub handle_size: f32,
    pub viewport: Viewport,
}

impl Config {
    pub const DEFAULT_CURVE_SAMPLES: usize = 1000;
    pub const DEFAULT_ANIMATION_PERIOD: f32 = 5.0;
    pub const DEFAULT_HANDLE_SIZE: f32 = 0.01;

    /// Check that every parameter lies in its valid domain.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(Error::InvalidScale(self.scale));
        }
        if self.curve_samples == 0 {
            return Err(Error::NoSamples);
        }
        if !self.animation_period.is_finite() || self.animation_period <= 0.0 {
            return Err(Error::InvalidPeriod(self.animation_period));
        }
        self.viewport.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            curve_samples: Self::DEFAULT_CURVE_SAMPLES,
            animation_period: Self::DEFAULT_ANIMATION_PERIOD,
            handle_size: Self::DEFAULT_HANDLE_SIZE,
            viewport: Viewport::default(),
        }
    }
}
