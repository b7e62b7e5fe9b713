use field_cloud::prelude::*;
use field_cloud_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // An out-of-range resolution request is sanitized once with a warning
    // (visible through the tracing output), then frames run steadily.
    let mut runner = FrameRunner::new(FrameConfig::default().with_resolution(300));

    let report = runner.step(0.0);
    println!(
        "requested 300, applied {} ({} points, rebuilt: {})",
        runner.lattice().resolution(),
        report.points_evaluated,
        report.rebuilt
    );

    let report = runner.step(0.5);
    println!("second frame rebuilt: {}", report.rebuilt);

    Ok(())
}
