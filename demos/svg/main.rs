//! Renders a small pseudo-3D chart to SVG on stdout.
//!
//! Usage:
//! ```text
//! cargo run --example svg                 # columns and a pie
//! cargo run --example svg -- columns      # columns only
//! cargo run --example svg -- pie          # pie only
//! cargo run --example svg -- pie --grow   # pie after a grow-in animation
//! ```

use std::f64::consts::TAU;
use std::time::Duration;

use facet3d::geometry::{CuboidSpec, WedgePatch, WedgeSpec};
use facet3d::presentation::{Attrs, Color, ElementId, Scene, ShapeFactory, ShapeHandle};
use facet3d::projection::Camera;
use facet3d::Result;

const PALETTE: [&str; 5] = ["#7cb5ec", "#434348", "#90ed7d", "#f7a35c", "#8085e9"];
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for facet3d.
    // Override with RUST_LOG env var (e.g. RUST_LOG=facet3d=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("facet3d=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pattern = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map_or("all", String::as_str);
    let grow = args.iter().any(|a| a == "--grow");

    let camera = Camera::new(15.0, 20.0, 600.0, 400.0)?;
    let mut scene = Scene::new();

    if matches!(pattern, "all" | "columns") {
        columns(&mut scene, camera)?;
    }
    if matches!(pattern, "all" | "pie") {
        pie(&mut scene, camera, grow)?;
    }

    println!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        camera.plot_width, camera.plot_height
    );
    print!("{}", scene.to_svg());
    println!("</svg>");
    Ok(())
}

fn columns(scene: &mut Scene, camera: Camera) -> Result<()> {
    let factory = ShapeFactory::new(camera);
    let values = [120.0, 80.0, 160.0, 60.0, 100.0];
    let mut x = 40.0;
    for (value, hex) in values.into_iter().zip(PALETTE) {
        let spec = CuboidSpec::new(x, 380.0 - value, 0.0, 30.0, value, 30.0);
        let mut column = factory.cuboid(scene, spec)?;
        column.set_fill(scene, Color::from_hex(hex)?)?;
        x += 50.0;
    }
    Ok(())
}

fn pie(scene: &mut Scene, camera: Camera, grow: bool) -> Result<()> {
    let factory = ShapeFactory::new(camera);
    let shares = [0.35, 0.25, 0.2, 0.12, 0.08];
    let mut start = 0.0;
    let mut slices = Vec::new();
    for (share, hex) in shares.into_iter().zip(PALETTE) {
        let end = start + share * TAU;
        let spec = WedgeSpec {
            x: 420.0,
            y: 200.0,
            r: if grow { 0.0 } else { 120.0 },
            inner_r: if grow { 0.0 } else { 40.0 },
            start,
            end,
            depth: 25.0,
            alpha: camera.alpha_rad(),
            beta: camera.beta_rad(),
        };
        let mut slice = factory.wedge(scene, spec)?;
        slice.set_fill(scene, Color::from_hex(hex)?)?;
        slices.push(slice);
        start = end;
    }

    if grow {
        for slice in &mut slices {
            let target = WedgePatch {
                r: Some(120.0),
                inner_r: Some(40.0),
                ..WedgePatch::default()
            };
            slice.animate(scene, Attrs::geometry(target), Duration::from_millis(500), None)?;
        }
        run_to_completion(scene, &mut slices)?;
    }
    Ok(())
}

fn run_to_completion(
    scene: &mut Scene,
    shapes: &mut [ShapeHandle<ElementId, Camera>],
) -> Result<()> {
    let mut running = true;
    while running {
        running = false;
        for shape in shapes.iter_mut() {
            running |= shape.advance(scene, FRAME)?;
        }
    }
    Ok(())
}
