//! Sinks carrying finished frames to renderers.
//!
//! This module defines [`FrameSink`], the consumed renderer-adapter boundary:
//! after an evaluation pass the engine submits the full point buffer exactly
//! once per frame via [`crate::frame::runner::step_with_sink`] or
//! [`crate::frame::runner::FrameRunner::step_with_sink`].
use crate::lattice::SamplePoint;

/// A generic sink that accepts finished frame buffers.
///
/// The slice borrow is only valid for the duration of [`FrameSink::submit`];
/// the engine rewrites alphas in place on the next pass, so sinks that keep
/// frames around must copy what they need.
pub trait FrameSink {
    fn submit(&mut self, points: &[SamplePoint]);
}

/// A no-op frame sink.
impl FrameSink for () {
    #[inline]
    fn submit(&mut self, _points: &[SamplePoint]) {}
}

/// A frame sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(&[SamplePoint]),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(&[SamplePoint]),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> FrameSink for FnSink<F>
where
    F: FnMut(&[SamplePoint]),
{
    #[inline]
    fn submit(&mut self, points: &[SamplePoint]) {
        (self.f)(points);
    }
}

/// A frame sink that clones every submitted buffer into a `Vec`.
///
/// Each frame is a full copy of the buffer, so this is meant for tests and
/// short capture sessions, not steady-state rendering.
#[derive(Default)]
pub struct VecSink {
    frames: Vec<Vec<SamplePoint>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            frames: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<Vec<SamplePoint>> {
        self.frames
    }

    pub fn as_slice(&self) -> &[Vec<SamplePoint>] {
        &self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSink for VecSink {
    #[inline]
    fn submit(&mut self, points: &[SamplePoint]) {
        self.frames.push(points.to_vec());
    }
}

/// Fan-out sink that forwards each frame to all contained sinks.
pub struct MultiSink<S: FrameSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: FrameSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: FrameSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FrameSink> FrameSink for MultiSink<S> {
    fn submit(&mut self, points: &[SamplePoint]) {
        for sink in &mut self.sinks {
            sink.submit(points);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;

    fn sample_frame() -> Vec<SamplePoint> {
        vec![
            SamplePoint {
                position: Vec3::ZERO,
                color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            },
            SamplePoint {
                position: Vec3::ONE,
                color: Vec4::new(1.0, 1.0, 1.0, 0.0),
            },
        ]
    }

    #[test]
    fn vec_sink_copies_submitted_frames() {
        let frame = sample_frame();
        let mut sink = VecSink::with_capacity(1);
        assert!(sink.is_empty());
        sink.submit(&frame);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.as_slice()[0], frame);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let frame = sample_frame();
        let mut seen = 0;
        let mut sink = FnSink::new(|points: &[SamplePoint]| {
            seen += points.len();
        });
        sink.submit(&frame);
        assert_eq!(seen, 2);
    }

    #[test]
    fn multi_sink_fans_out_frames() {
        let frame = sample_frame();
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.submit(&frame);
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
    }
}
