use field_cloud::prelude::*;
use field_cloud_examples::{init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One continuous-mode snapshot per built-in function, all at the same
    // animation time so the images are comparable.
    let mut runner = FrameRunner::new(FrameConfig::default().with_resolution(40));
    let rc = RenderConfig::new((640, 640)).with_point_radius(3);
    let time = 1.0;

    for function in FieldFunction::ALL {
        runner.config.function = function;
        runner.step(time);

        let out = format!("field-{}.png", function.label().to_lowercase());
        render_points_to_png(runner.points(), &rc, &out)?;
        println!("wrote {out}");
    }

    Ok(())
}
