#![forbid(unsafe_code)]
//! field_cloud: Real-time scalar field visualization core.
//!
//! Modules:
//! - field: the closed set of animated scalar field functions
//! - lattice: cubic sample lattices over the unit cube with index tints
//! - frame: per-frame evaluation, configuration, runner, and renderer sinks
//! - clock: stock seconds-since-start time source
//!
//! For examples and docs, see README and docs.rs.
pub mod clock;
pub mod error;
pub mod field;
pub mod frame;
pub mod lattice;

/// Convenient re-exports for common types. Import with `use field_cloud::prelude::*;`.
pub mod prelude {
    pub use crate::clock::FrameClock;
    pub use crate::error::{Error, Result};
    pub use crate::field::{exponential, linear, parabola, ripple, sine, FieldFn, FieldFunction};
    pub use crate::frame::runner::{step, step_with_sink, FrameConfig, FrameRunner, StepReport};
    pub use crate::frame::sink::{FnSink, FrameSink, MultiSink, VecSink};
    pub use crate::frame::{DisplayMode, DEFAULT_THRESHOLD};
    pub use crate::lattice::{
        Lattice, SamplePoint, POINT_SIZE, RESOLUTION_DEFAULT, RESOLUTION_MAX, RESOLUTION_MIN,
        RESOLUTION_UI_HINT,
    };
}
