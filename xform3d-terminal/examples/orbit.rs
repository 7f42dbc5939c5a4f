/// Example: orbit a camera around its target and print each view-projection
///
/// Usage: cargo run --example orbit -- [camera.json]

use anyhow::{Context, Result};
use nalgebra::Point3;
use std::env;
use std::fs;
use std::io::stdout;
use xform3d_core::{rotate_point_about_axis, Camera};
use xform3d_terminal::MatrixPrinter;

fn main() -> Result<()> {
    let mut camera = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
            Camera::from_json(&text)?
        }
        None => Camera::default(),
    };

    let printer = MatrixPrinter::new(3);
    let offset = Point3::from(camera.eye - camera.target);
    for step in 0..4 {
        let degrees = step as f32 * 30.0;
        camera.eye = camera.target + rotate_point_about_axis(&offset, &camera.up, degrees).coords;
        let title = format!("orbit {degrees}°");
        printer.write_matrix(&mut stdout(), &title, &camera.view_projection())?;
    }
    Ok(())
}
