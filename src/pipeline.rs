use crate::{
    buffer::PointBuffer,
    config::Config,
    math::Normalizer,
    primitives::{Circle, Triangle},
    rasterizer::{Fill, Rasterizer},
    Error,
};
use log::trace;
use vek::Vec2;

/// The live parameters a host reads from its controls once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInput {
    /// Triangle vertices in lattice coordinates.
    pub vertices: [Vec2<i32>; 3],
    /// Circle centre in lattice coordinates. Defaults to the origin.
    pub center: Vec2<i32>,
    pub radius: u32,
    /// Whether the interior of the triangle is filled.
    pub fill: bool,
}

impl FrameInput {
    pub fn triangle(&self) -> Triangle {
        Triangle {
            vertices: self.vertices,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle {
            center: self.center,
            radius: self.radius,
        }
    }
}

/// Assembles the output of every rasterizer for one frame into a single point buffer.
///
/// The pipeline owns its buffer across frames so that the allocation is reused; its contents are rebuilt from scratch
/// by every call to [`RasterPipeline::assemble`].
#[derive(Clone, Debug, Default)]
pub struct RasterPipeline {
    buffer: PointBuffer,
}

impl RasterPipeline {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            buffer: PointBuffer::new(normalizer),
        }
    }

    pub fn with_config(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::new(Normalizer::new(config.scale)?))
    }

    /// Rasterize the triangle outline, the circle and, if requested, the triangle fill. Returns the number of points
    /// to draw.
    pub fn assemble(&mut self, input: &FrameInput) -> usize {
        self.buffer.clear();

        let triangle = input.triangle();
        triangle.rasterize(&mut self.buffer);
        let outline = self.buffer.len();

        input.circle().rasterize(&mut self.buffer);
        let circle = self.buffer.len() - outline;

        if input.fill {
            Fill(triangle).rasterize(&mut self.buffer);
        }

        trace!(
            "assembled frame: {} outline, {} circle, {} fill points",
            outline,
            circle,
            self.buffer.len() - outline - circle,
        );
        self.buffer.len()
    }

    /// The points produced by the last call to [`RasterPipeline::assemble`].
    #[inline]
    pub fn points(&self) -> &PointBuffer {
        &self.buffer
    }
}
