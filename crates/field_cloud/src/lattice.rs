//! Cubic sample lattices over the unit cube.
//!
//! This module defines [`SamplePoint`] and [`Lattice`]: a resolution^3 point
//! buffer spanning [0,1]^3, rebuilt wholesale whenever the requested
//! resolution changes. Point tints encode the integer grid index per axis,
//! deliberately unnormalized; the alpha channel is the only part of a point
//! that frame evaluation rewrites.
use glam::{Vec3, Vec4};
use tracing::{debug, warn};

/// Inclusive lower bound for a valid lattice resolution.
pub const RESOLUTION_MIN: u32 = 10;
/// Inclusive upper bound for a valid lattice resolution.
pub const RESOLUTION_MAX: u32 = 100;
/// Substituted when a requested resolution falls outside the valid range.
pub const RESOLUTION_DEFAULT: u32 = 30;
/// Advisory range for host resolution sliders. Narrower than the validated
/// [`RESOLUTION_MIN`]..=[`RESOLUTION_MAX`] range, which stays authoritative.
pub const RESOLUTION_UI_HINT: (u32, u32) = (10, 30);
/// Fixed display size renderers draw every point with.
pub const POINT_SIZE: f32 = 0.1;

/// One lattice sample: a fixed position and an RGBA attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// Position inside the unit cube.
    pub position: Vec3,
    /// RGBA attribute. The xyz channels carry the raw integer grid index of
    /// the point as floats (above 1.0 for most points; interpretation is the
    /// renderer's choice), the w channel is the frame-written alpha.
    pub color: Vec4,
}

impl SamplePoint {
    /// Alpha channel, rewritten by every frame pass.
    pub fn alpha(&self) -> f32 {
        self.color.w
    }

    /// Index tint: the raw grid index triple this point was built from.
    pub fn tint(&self) -> Vec3 {
        self.color.truncate()
    }

    /// Position as a mint type, for consumers not using glam.
    pub fn position_mint(&self) -> mint::Point3<f32> {
        self.position.into()
    }

    /// RGBA attribute as a mint type, for consumers not using glam.
    pub fn color_mint(&self) -> mint::Vector4<f32> {
        self.color.into()
    }
}

/// Cubic grid of [`SamplePoint`]s covering the unit cube.
///
/// The buffer is created lazily: a fresh lattice is empty until the first
/// [`Lattice::rebuild`]. Staleness is tracked against the raw requested
/// resolution, so holding an out-of-range request rebuilds (and warns) once,
/// not every frame.
#[derive(Clone, Debug, Default)]
pub struct Lattice {
    points: Vec<SamplePoint>,
    resolution: u32,
    requested: Option<u32>,
}

impl Lattice {
    /// Creates an empty lattice; the buffer is allocated on first rebuild.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the buffer does not reflect `resolution` yet: either nothing
    /// has been built, or the raw requested value changed since the last
    /// [`Lattice::rebuild`].
    pub fn is_stale(&self, resolution: u32) -> bool {
        self.requested != Some(resolution)
    }

    /// Rebuilds the point buffer for `resolution` from scratch.
    ///
    /// Requests outside [`RESOLUTION_MIN`]..=[`RESOLUTION_MAX`] log a single
    /// warning and fall back to [`RESOLUTION_DEFAULT`]. Points are laid out
    /// x-outermost, then z, then y innermost; positions step by
    /// `1 / (resolution - 1)` per axis so the lattice spans the full unit
    /// cube. Tints are the raw index triple and alpha starts fully opaque.
    pub fn rebuild(&mut self, resolution: u32) {
        let applied = sanitize_resolution(resolution);
        if applied != resolution {
            warn!(
                "Lattice resolution {} out of bounds [{}, {}]; using {}.",
                resolution, RESOLUTION_MIN, RESOLUTION_MAX, RESOLUTION_DEFAULT
            );
        }
        self.requested = Some(resolution);
        self.resolution = applied;

        let side = applied as usize;
        let step = 1.0 / (applied - 1) as f32;
        self.points.clear();
        self.points.reserve_exact(side * side * side);
        for x in 0..side {
            for z in 0..side {
                for y in 0..side {
                    let index = Vec3::new(x as f32, y as f32, z as f32);
                    self.points.push(SamplePoint {
                        position: index * step,
                        color: index.extend(1.0),
                    });
                }
            }
        }
        debug!(
            "Rebuilt lattice at resolution {} ({} points).",
            applied,
            self.points.len()
        );
    }

    /// Applied resolution of the current buffer; 0 until the first rebuild.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Raw resolution value passed to the most recent rebuild.
    pub fn requested_resolution(&self) -> Option<u32> {
        self.requested
    }

    /// The point buffer in lattice order.
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Mutable access to the point buffer, for attribute passes.
    pub fn points_mut(&mut self) -> &mut [SamplePoint] {
        &mut self.points
    }

    /// Number of points in the buffer.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True before the first rebuild.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Clamp policy for requested resolutions: in-range values pass through,
/// anything else falls back to [`RESOLUTION_DEFAULT`].
fn sanitize_resolution(resolution: u32) -> u32 {
    if (RESOLUTION_MIN..=RESOLUTION_MAX).contains(&resolution) {
        resolution
    } else {
        RESOLUTION_DEFAULT
    }
}
