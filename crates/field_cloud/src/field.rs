//! Animated scalar field functions over unit-cube positions.
//!
//! This module defines the closed set of built-in functions behind
//! [`FieldFunction`]. Every function is a pure mapping from (position, time)
//! to a scalar: deterministic, stateless, radians throughout. Positions are
//! expected in [0,1] per axis but no function checks or clamps its input.
use std::f32::consts::{PI, TAU};

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signature shared by all field functions: scalar value at `p` for the
/// animation time `t` in seconds.
pub type FieldFn = fn(Vec3, f32) -> f32;

/// Planar gradient `1 - x - y - z`, oscillating by `0.5 * sin(t)`.
pub fn linear(p: Vec3, t: f32) -> f32 {
    1.0 - p.x - p.y - p.z + 0.5 * t.sin()
}

/// Quadratic falloff `1 - x^2 - y^2 - z^2`, oscillating by `0.5 * sin(t)`.
pub fn exponential(p: Vec3, t: f32) -> f32 {
    1.0 - p.x * p.x - p.y * p.y - p.z * p.z + 0.5 * t.sin()
}

/// Downward paraboloid over the xz-plane, recentered so the apex sits at
/// x = z = 0.5. Constant along y.
pub fn parabola(p: Vec3, t: f32) -> f32 {
    let x = 2.0 * p.x - 1.0;
    let z = 2.0 * p.z - 1.0;
    1.0 - x * x - z * z + 0.5 * t.sin()
}

/// Product of squared sines per axis; the z phase advances with `t` in the
/// upper half of the cube (y > 0.5) and regresses below it. Always in [0,1].
pub fn sine(p: Vec3, t: f32) -> f32 {
    let sx = (TAU * p.x).sin();
    let sy = (TAU * p.y).sin();
    let sz = (TAU * p.z + if p.y > 0.5 { t } else { -t }).sin();
    sx * sx * sy * sy * sz * sz
}

/// Spherical wave radiating from the cube center: `sin(4pi * r^2 - 2t)` for
/// the squared distance `r^2` to (0.5, 0.5, 0.5). Always in [-1,1].
pub fn ripple(p: Vec3, t: f32) -> f32 {
    let q = p - Vec3::splat(0.5);
    let square_radius = q.length_squared();
    (4.0 * PI * square_radius - 2.0 * t).sin()
}

/// Identifies one of the built-in field functions.
///
/// The set is closed and the variant order is stable, so hosts can drive
/// selection widgets from [`FieldFunction::ALL`] and persist a choice through
/// [`FieldFunction::index`] / [`FieldFunction::from_index`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldFunction {
    #[default]
    Linear,
    Exponential,
    Parabola,
    Sine,
    Ripple,
}

impl FieldFunction {
    /// All variants in stable ordinal order.
    pub const ALL: [FieldFunction; 5] = [
        FieldFunction::Linear,
        FieldFunction::Exponential,
        FieldFunction::Parabola,
        FieldFunction::Sine,
        FieldFunction::Ripple,
    ];

    /// Evaluates this function at `p` for time `t`.
    pub fn sample(self, p: Vec3, t: f32) -> f32 {
        match self {
            FieldFunction::Linear => linear(p, t),
            FieldFunction::Exponential => exponential(p, t),
            FieldFunction::Parabola => parabola(p, t),
            FieldFunction::Sine => sine(p, t),
            FieldFunction::Ripple => ripple(p, t),
        }
    }

    /// Returns the plain function pointer behind this variant, for hosts
    /// that resolve the function once per frame instead of per point.
    pub fn eval_fn(self) -> FieldFn {
        match self {
            FieldFunction::Linear => linear,
            FieldFunction::Exponential => exponential,
            FieldFunction::Parabola => parabola,
            FieldFunction::Sine => sine,
            FieldFunction::Ripple => ripple,
        }
    }

    /// Ordinal of this variant within [`FieldFunction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a variant up by ordinal; `None` when out of range.
    pub fn from_index(index: usize) -> Option<FieldFunction> {
        FieldFunction::ALL.get(index).copied()
    }

    /// Human-readable name for pickers and logs.
    pub fn label(self) -> &'static str {
        match self {
            FieldFunction::Linear => "Linear",
            FieldFunction::Exponential => "Exponential",
            FieldFunction::Parabola => "Parabola",
            FieldFunction::Sine => "Sine",
            FieldFunction::Ripple => "Ripple",
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng as RngCore, SeedableRng};

    use super::*;

    fn rand01(rng: &mut dyn RngCore) -> f32 {
        (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
    }

    fn random_point(rng: &mut dyn RngCore) -> Vec3 {
        Vec3::new(rand01(rng), rand01(rng), rand01(rng))
    }

    #[test]
    fn linear_at_origin_and_time_zero_is_one() {
        assert_eq!(linear(Vec3::ZERO, 0.0), 1.0);
    }

    #[test]
    fn parabola_is_constant_along_y() {
        let lo = parabola(Vec3::new(0.3, 0.1, 0.7), 1.25);
        let hi = parabola(Vec3::new(0.3, 0.9, 0.7), 1.25);
        assert_eq!(lo, hi);
    }

    #[test]
    fn sine_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = random_point(&mut rng);
            let t = rand01(&mut rng) * 20.0 - 10.0;
            let v = sine(p, t);
            assert!((0.0..=1.0).contains(&v), "sine({p:?}, {t}) = {v}");
        }
    }

    #[test]
    fn sine_time_direction_flips_across_half_height() {
        let above = Vec3::new(0.25, 0.75, 0.125);
        let below = Vec3::new(0.25, 0.25, 0.125);
        assert!((sine(above, 1.0) - sine(below, -1.0)).abs() < 1e-6);
        assert!((sine(above, 1.0) - sine(below, 1.0)).abs() > 1e-3);
    }

    #[test]
    fn ripple_stays_in_signed_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = random_point(&mut rng);
            let t = rand01(&mut rng) * 20.0 - 10.0;
            let v = ripple(p, t);
            assert!((-1.0..=1.0).contains(&v), "ripple({p:?}, {t}) = {v}");
        }
    }

    #[test]
    fn ripple_at_cube_center_tracks_negated_sine() {
        let center = Vec3::splat(0.5);
        for t in [0.0f32, 0.5, 1.0, 2.0, -3.25] {
            let expected = -(2.0 * t).sin();
            assert!((ripple(center, t) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn sample_matches_free_functions() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let p = random_point(&mut rng);
            let t = rand01(&mut rng) * 10.0;
            for function in FieldFunction::ALL {
                let direct = function.sample(p, t);
                let via_pointer = (function.eval_fn())(p, t);
                assert_eq!(direct, via_pointer, "{}", function.label());
            }
        }
    }

    #[test]
    fn ordinals_round_trip() {
        for (i, function) in FieldFunction::ALL.into_iter().enumerate() {
            assert_eq!(function.index(), i);
            assert_eq!(FieldFunction::from_index(i), Some(function));
        }
        assert_eq!(FieldFunction::from_index(FieldFunction::ALL.len()), None);
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(FieldFunction::default(), FieldFunction::Linear);
    }
}
