//! Frame pipeline for evaluating a field function over a lattice and writing
//! per-point alphas.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod runner;
pub mod sink;

/// Threshold a [`FrameConfig`](crate::frame::runner::FrameConfig) starts with.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// How a frame pass writes field values into point alphas.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Alpha is the raw field value, unclamped.
    #[default]
    Continuous,
    /// Alpha is 1.0 where the field value reaches the threshold, else 0.0.
    Thresholded,
}
