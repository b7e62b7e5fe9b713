use field_cloud::prelude::*;
use field_cloud_examples::{init_tracing, render_points_to_png, Axis, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Expanding spherical shells: thresholded ripple seen from above, one
    // image per time step across half a period.
    let config = FrameConfig::new(FieldFunction::Ripple)
        .with_resolution(48)
        .with_mode(DisplayMode::Thresholded)
        .with_threshold(0.7);
    let mut runner = FrameRunner::try_new(config)?;

    let rc = RenderConfig::new((512, 512))
        .with_axis(Axis::Y)
        .with_point_radius(2);

    let clock = FrameClock::new();
    let frames = 8;
    for frame in 0..frames {
        let time = frame as f32 * (std::f32::consts::PI / 8.0);
        runner.step(time);
        render_points_to_png(runner.points(), &rc, format!("ripple-frame-{frame:02}.png"))?;
    }
    println!(
        "rendered {frames} frames in {:.2}s",
        clock.elapsed_seconds()
    );

    Ok(())
}
