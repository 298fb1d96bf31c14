//! Lattice rasterization and Bézier curve evaluation.
//!
//! `gridline` turns simple geometric input into lists of points in normalized device coordinates, ready to be handed
//! to whatever renderer the host uses. It never talks to a graphics API itself.
//!
//! - [`Segment`], [`Circle`] and [`Fill`] implement [`Rasterizer`] using Bresenham lines, Bresenham circles and
//!   edge-function triangle filling respectively.
//! - [`RasterPipeline`] collects a whole frame of rasterizer output into one [`PointBuffer`].
//! - [`CurveEditor`] maintains an editable control polygon, its sampled Bézier curve and the animated de Casteljau
//!   construction.

extern crate alloc;

pub mod buffer;
pub mod config;
pub mod curve;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod primitives;
pub mod rasterizer;
pub mod texture;
pub mod viewport;

// Reexports
pub use crate::{
    buffer::{Buffer2d, PointBuffer},
    config::Config,
    curve::{Animation, Bernstein, Command, Construction, ControlPoints, CurveEditor, CurveFrame},
    error::Error,
    math::{Normalizer, WeightedSum},
    pipeline::{FrameInput, RasterPipeline},
    primitives::{Circle, EdgeFunction, Segment, Triangle},
    rasterizer::{Blitter, Fill, Rasterizer},
    texture::{plot, Target},
    viewport::Viewport,
};
