//! High-level runner for advancing a lattice frame by frame.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::FieldFunction;
use crate::frame::sink::FrameSink;
use crate::frame::{DisplayMode, DEFAULT_THRESHOLD};
use crate::lattice::{Lattice, SamplePoint, RESOLUTION_DEFAULT, RESOLUTION_MAX, RESOLUTION_MIN};

/// Configuration for a frame pass.
///
/// Hosts mutate this freely between frames; the engine reads it and never
/// writes it back. The frame path accepts any value here (out-of-range
/// resolutions are sanitized with a warning); [`FrameConfig::validate`] is
/// the strict tier for hosts that prefer failing up front.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Requested lattice resolution in samples per axis.
    pub resolution: u32,
    /// Field function evaluated at every point.
    pub function: FieldFunction,
    /// Alpha-writing policy.
    pub mode: DisplayMode,
    /// Cutoff for [`DisplayMode::Thresholded`]; the comparison is an
    /// inclusive lower bound.
    pub threshold: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            resolution: RESOLUTION_DEFAULT,
            function: FieldFunction::default(),
            mode: DisplayMode::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FrameConfig {
    /// Creates a new [`FrameConfig`] for the given function.
    pub fn new(function: FieldFunction) -> Self {
        Self {
            function,
            ..Default::default()
        }
    }

    /// Sets the requested resolution.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the field function.
    pub fn with_function(mut self, function: FieldFunction) -> Self {
        self.function = function;
        self
    }

    /// Sets the alpha-writing policy.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the threshold cutoff.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(RESOLUTION_MIN..=RESOLUTION_MAX).contains(&self.resolution) {
            return Err(Error::InvalidConfig(format!(
                "resolution must be within {RESOLUTION_MIN}..={RESOLUTION_MAX}"
            )));
        }
        if !self.threshold.is_finite() {
            return Err(Error::InvalidConfig("threshold must be finite".into()));
        }

        Ok(())
    }
}

/// Result of a single frame pass.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    /// Whether this pass rebuilt the lattice before evaluating.
    pub rebuilt: bool,
    /// Number of points evaluated.
    pub points_evaluated: usize,
}

/// Advances `lattice` to `time` under `config`.
///
/// Rebuilds the buffer first when the requested resolution changed, then
/// evaluates the configured function at every point and writes the result
/// into the point's alpha channel: the raw value in
/// [`DisplayMode::Continuous`], or 1.0/0.0 against the threshold in
/// [`DisplayMode::Thresholded`]. Positions and tints stay untouched, and
/// steady-state frames allocate nothing.
pub fn step(lattice: &mut Lattice, config: &FrameConfig, time: f32) -> StepReport {
    let rebuilt = lattice.is_stale(config.resolution);
    if rebuilt {
        lattice.rebuild(config.resolution);
    }

    let f = config.function.eval_fn();
    match config.mode {
        DisplayMode::Continuous => {
            for point in lattice.points_mut() {
                point.color.w = f(point.position, time);
            }
        }
        DisplayMode::Thresholded => {
            for point in lattice.points_mut() {
                point.color.w = if f(point.position, time) >= config.threshold {
                    1.0
                } else {
                    0.0
                };
            }
        }
    }

    StepReport {
        rebuilt,
        points_evaluated: lattice.len(),
    }
}

/// Like [`step`], additionally handing the finished buffer to `sink` exactly
/// once.
pub fn step_with_sink(
    lattice: &mut Lattice,
    config: &FrameConfig,
    time: f32,
    sink: &mut dyn FrameSink,
) -> StepReport {
    let report = step(lattice, config, time);
    sink.submit(lattice.points());
    report
}

/// Owns a [`Lattice`] and drives it frame by frame.
///
/// Thin wrapper around the free [`step`] functions for hosts that want the
/// lattice lifecycle managed in one place. The configuration is a plain
/// public field; mutate it between frames and the next step picks the change
/// up.
#[derive(Debug, Clone, Default)]
pub struct FrameRunner {
    /// Frame configuration applied on each step.
    pub config: FrameConfig,
    lattice: Lattice,
}

impl FrameRunner {
    /// Creates a runner with the given configuration. Any configuration is
    /// accepted; the frame path sanitizes out-of-range resolutions on use.
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            lattice: Lattice::new(),
        }
    }

    /// Creates a runner, rejecting configurations that fail
    /// [`FrameConfig::validate`].
    pub fn try_new(config: FrameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Advances the owned lattice to `time`.
    pub fn step(&mut self, time: f32) -> StepReport {
        step(&mut self.lattice, &self.config, time)
    }

    /// Advances the owned lattice to `time` and submits the buffer to `sink`.
    pub fn step_with_sink(&mut self, time: f32, sink: &mut dyn FrameSink) -> StepReport {
        step_with_sink(&mut self.lattice, &self.config, time, sink)
    }

    /// The owned lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The current point buffer; empty before the first step.
    pub fn points(&self) -> &[SamplePoint] {
        self.lattice.points()
    }
}
