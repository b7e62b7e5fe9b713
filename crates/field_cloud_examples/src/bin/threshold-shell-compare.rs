use field_cloud::prelude::*;
use field_cloud_examples::{init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The exponential field forms nested shells around the origin; raising
    // the threshold shrinks the visible set. The sink counts what survives.
    let mut runner = FrameRunner::new(
        FrameConfig::new(FieldFunction::Exponential)
            .with_resolution(64)
            .with_mode(DisplayMode::Thresholded),
    );
    let rc = RenderConfig::new((512, 512)).with_point_radius(1);

    for threshold in [0.25, 0.5, 0.75] {
        runner.config.threshold = threshold;

        let mut visible = 0usize;
        let mut sink = FnSink::new(|points: &[SamplePoint]| {
            visible = points.iter().filter(|p| p.alpha() == 1.0).count();
        });
        runner.step_with_sink(0.0, &mut sink);
        drop(sink);

        println!(
            "threshold {threshold}: {visible} of {} points visible",
            runner.points().len()
        );
        render_points_to_png(runner.points(), &rc, format!("shell-threshold-{threshold}.png"))?;
    }

    Ok(())
}
