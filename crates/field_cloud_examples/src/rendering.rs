//! Shared helpers for the example binaries: tracing setup and a minimal
//! orthographic splat renderer writing point buffers to PNG.
use std::path::Path;

use field_cloud::lattice::{SamplePoint, POINT_SIZE};
use glam::Vec3;
use image::{Rgb, RgbImage};

/// Initializes a fmt tracing subscriber honoring `RUST_LOG`, defaulting to
/// `info`. Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Axis the renderer looks along; the remaining two axes span the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// Side view: z maps to image x, y to image y (flipped).
    X,
    /// Top view: x maps to image x, z to image y (flipped).
    Y,
    /// Front view: x maps to image x, y to image y (flipped).
    #[default]
    Z,
}

impl Axis {
    fn project(self, p: Vec3) -> (f32, f32) {
        match self {
            Axis::X => (p.z, 1.0 - p.y),
            Axis::Y => (p.x, 1.0 - p.z),
            Axis::Z => (p.x, 1.0 - p.y),
        }
    }
}

/// Configuration for [`render_points_to_png`].
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Background color.
    pub background: [u8; 3],
    /// Axis the camera looks along.
    pub axis: Axis,
    /// Splat radius in pixels. Defaults to the point display size scaled to
    /// the image, which overlaps heavily on dense lattices; override for
    /// crisper output.
    pub point_radius: Option<u32>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [12, 12, 16],
            axis: Axis::default(),
            point_radius: None,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_point_radius(mut self, radius: u32) -> Self {
        self.point_radius = Some(radius);
        self
    }

    fn splat_radius(&self) -> u32 {
        self.point_radius.unwrap_or_else(|| {
            let extent = self.image_size.0.min(self.image_size.1) as f32;
            (POINT_SIZE * 0.5 * extent).round() as u32
        })
    }
}

/// Renders a point buffer to a PNG by orthographic projection.
///
/// Splats every point with non-zero alpha additively, averages the index
/// tints (normalized by the largest tint channel in the buffer) and
/// normalizes brightness against the densest pixel.
pub fn render_points_to_png(
    points: &[SamplePoint],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    anyhow::ensure!(width > 0 && height > 0, "image size must be non-zero");

    let mut weight = vec![0.0f32; (width * height) as usize];
    let mut tint_sum = vec![Vec3::ZERO; (width * height) as usize];

    let tint_max = points
        .iter()
        .map(|p| p.tint().max_element())
        .fold(1.0f32, f32::max);
    let radius = config.splat_radius() as i64;

    for point in points {
        let alpha = point.alpha().clamp(0.0, 1.0);
        if alpha <= 0.0 {
            continue;
        }
        let (u, v) = config.axis.project(point.position);
        let cx = (u * (width - 1) as f32).round() as i64;
        let cy = (v * (height - 1) as f32).round() as i64;
        let tint = point.tint() / tint_max;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                    continue;
                }
                let idx = (y as u32 * width + x as u32) as usize;
                weight[idx] += alpha;
                tint_sum[idx] += tint * alpha;
            }
        }
    }

    let max_weight = weight.iter().fold(0.0f32, |m, &w| m.max(w));
    let background = Vec3::new(
        config.background[0] as f32,
        config.background[1] as f32,
        config.background[2] as f32,
    ) / 255.0;

    let mut img = RgbImage::new(width, height);
    for (idx, pixel) in img.pixels_mut().enumerate() {
        let w = weight[idx];
        let rgb = if w > 0.0 && max_weight > 0.0 {
            let tint = tint_sum[idx] / w;
            let brightness = (w / max_weight).sqrt();
            background.lerp(tint, brightness)
        } else {
            background
        };
        *pixel = Rgb([
            (rgb.x.clamp(0.0, 1.0) * 255.0) as u8,
            (rgb.y.clamp(0.0, 1.0) * 255.0) as u8,
            (rgb.z.clamp(0.0, 1.0) * 255.0) as u8,
        ]);
    }

    img.save(path)?;
    Ok(())
}
