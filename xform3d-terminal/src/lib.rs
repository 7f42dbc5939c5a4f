/// Terminal front end: build one transform from the command line and print it
use anyhow::{Context, Result};
use nalgebra::{Matrix4, Point3};
use std::io::Write;
use xform3d_core::{
    build_frame, ensure_finite_matrix, euler_rotation, look_at, perspective, perspective_divide,
    rotate_point_about_axis, rotate_point_about_axis_with, rotate_vector_euler,
    rotation_about_axis, rotation_about_axis_with, scale_point, scaling, translate_point,
    translation, Camera, EulerAngles,
};

pub mod args;
pub mod printer;

pub use args::{Args, Command};
pub use printer::MatrixPrinter;

/// Where a point ended up after the command's transform
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Transformed(Point3<f32>),
    /// Normalized device coordinates after the perspective divide
    Ndc(Point3<f32>),
    /// Viewport coordinates `(x, y, depth)`; `None` when clipped
    Screen(Option<(f32, f32, f32)>),
}

/// Result of evaluating one command
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub title: &'static str,
    pub matrix: Matrix4<f32>,
    pub placement: Option<Placement>,
}

impl Evaluation {
    fn new(title: &'static str, matrix: Matrix4<f32>) -> Self {
        Self {
            title,
            matrix,
            placement: None,
        }
    }

    fn with_placement(mut self, placement: Option<Placement>) -> Self {
        self.placement = placement;
        self
    }
}

fn load_camera(command_config: Option<&std::path::Path>) -> Result<Camera> {
    let Some(path) = command_config else {
        return Ok(Camera::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read camera config {}", path.display()))?;
    Camera::from_json(&text)
        .with_context(|| format!("failed to parse camera config {}", path.display()))
}

/// Build the matrix (and optional point placement) for `command`.
pub fn evaluate(command: &Command) -> Result<Evaluation> {
    tracing::debug!(?command, "evaluating");
    let evaluation = match command {
        Command::Rotate {
            axis,
            degrees,
            aux,
            point,
        } => {
            let (m, placed) = match aux {
                Some(aux) => (
                    rotation_about_axis_with(axis, aux, *degrees),
                    point.map(|p| rotate_point_about_axis_with(&p, axis, aux, *degrees)),
                ),
                None => (
                    rotation_about_axis(axis, *degrees),
                    point.map(|p| rotate_point_about_axis(&p, axis, *degrees)),
                ),
            };
            Evaluation::new("rotation", m).with_placement(placed.map(Placement::Transformed))
        }
        Command::Euler { angles, vector } => {
            let angles = EulerAngles::new(angles.x, angles.y, angles.z);
            let rotated = vector.map(|v| Point3::from(rotate_vector_euler(&v, &angles)));
            Evaluation::new("euler rotation", euler_rotation(&angles))
                .with_placement(rotated.map(Placement::Transformed))
        }
        Command::Translate { offset, point } => {
            let moved = point.map(|p| translate_point(&p, offset));
            Evaluation::new("translation", translation(offset))
                .with_placement(moved.map(Placement::Transformed))
        }
        Command::Scale { factors, point } => {
            let scaled = point.map(|p| scale_point(&p, factors));
            Evaluation::new("scale", scaling(factors))
                .with_placement(scaled.map(Placement::Transformed))
        }
        Command::Frame { forward, aux } => {
            Evaluation::new("reference frame", build_frame(forward, aux))
        }
        Command::LookAt { eye, target, up } => Evaluation::new("view", look_at(eye, target, up)),
        Command::Perspective {
            fov,
            aspect,
            near,
            far,
            point,
        } => {
            let m = perspective(*fov, *aspect, *near, *far);
            let ndc = point.map(|p| perspective_divide(&(m * p.to_homogeneous())));
            Evaluation::new("perspective", m).with_placement(ndc.map(Placement::Ndc))
        }
        Command::Camera {
            config,
            width,
            height,
            point,
        } => {
            let camera = load_camera(config.as_deref())?;
            let screen = point.map(|p| {
                camera.project_to_screen(&p, &Matrix4::identity(), *width, *height)
            });
            Evaluation::new("view-projection", camera.view_projection())
                .with_placement(screen.map(Placement::Screen))
        }
    };
    Ok(evaluation)
}

/// Evaluate the parsed arguments and print the result to `writer`.
pub fn run<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let evaluation = evaluate(&args.command)?;
    if args.check {
        ensure_finite_matrix(evaluation.matrix, evaluation.title)?;
    }

    let printer = MatrixPrinter::new(args.precision);
    printer.write_matrix(writer, evaluation.title, &evaluation.matrix)?;
    match evaluation.placement {
        Some(Placement::Transformed(p)) => printer.write_point(writer, "point", &p)?,
        Some(Placement::Ndc(p)) => printer.write_point(writer, "ndc", &p)?,
        Some(Placement::Screen(Some((x, y, depth)))) => {
            printer.write_point(writer, "screen (x, y, depth)", &Point3::new(x, y, depth))?
        }
        Some(Placement::Screen(None)) => {
            tracing::warn!("point is outside the viewport");
            writeln!(writer, "point is outside the viewport")?;
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clap::Parser;

    fn command(argv: &[&str]) -> Command {
        Args::parse_from(std::iter::once("xform3d").chain(argv.iter().copied())).command
    }

    fn eval(argv: &[&str]) -> Evaluation {
        evaluate(&command(argv)).unwrap()
    }

    #[test]
    fn test_rotate_point() {
        let evaluation = eval(&[
            "rotate", "--axis", "1,0,0", "--degrees", "90", "--point", "0,1,0",
        ]);
        match evaluation.placement {
            Some(Placement::Transformed(p)) => {
                assert_relative_eq!(p, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-6)
            }
            other => panic!("unexpected placement {other:?}"),
        }
    }

    #[test]
    fn test_point_forms_agree_with_matrices() {
        let cases: [&[&str]; 4] = [
            &["rotate", "--axis", "2,3,4", "--degrees", "37", "--point", "4,-1,2"],
            &[
                "rotate", "--axis", "-1,0,0", "--degrees", "90", "--aux", "0,1,0", "--point",
                "0,1,0",
            ],
            &["translate", "--offset", "1,-2,3", "--point", "0.5,0.5,0.5"],
            &["scale", "--factors", "2,3,-1", "--point", "1,1,1"],
        ];
        for argv in cases {
            let p = match command(argv) {
                Command::Rotate { point: Some(p), .. }
                | Command::Translate { point: Some(p), .. }
                | Command::Scale { point: Some(p), .. } => p,
                other => panic!("unexpected command {other:?}"),
            };
            let evaluation = eval(argv);
            let h = evaluation.matrix * p.to_homogeneous();
            match evaluation.placement {
                Some(Placement::Transformed(q)) => {
                    assert_relative_eq!(q, Point3::new(h.x, h.y, h.z), epsilon = 1e-5)
                }
                other => panic!("unexpected placement {other:?}"),
            }
        }
    }

    #[test]
    fn test_rotate_with_aux_on_degenerate_axis() {
        let evaluation = eval(&[
            "rotate", "--axis", "-1,0,0", "--degrees", "90", "--aux", "0,1,0", "--point",
            "0,1,0",
        ]);
        match evaluation.placement {
            Some(Placement::Transformed(p)) => {
                assert_relative_eq!(p, Point3::new(0.0, 0.0, -1.0), epsilon = 1e-6)
            }
            other => panic!("unexpected placement {other:?}"),
        }
    }

    #[test]
    fn test_camera_point_behind_eye_is_clipped() {
        let evaluation = eval(&["camera", "--point", "0,0,10"]);
        assert_eq!(evaluation.placement, Some(Placement::Screen(None)));
    }

    #[test]
    fn test_perspective_near_plane() {
        let evaluation = eval(&[
            "perspective", "--fov", "60", "--near", "1", "--far", "100", "--point", "0,0,-1",
        ]);
        match evaluation.placement {
            Some(Placement::Ndc(p)) => assert_relative_eq!(p.z, -1.0, epsilon = 1e-5),
            other => panic!("unexpected placement {other:?}"),
        }
    }

    #[test]
    fn test_default_camera_centers_target() {
        let evaluation = eval(&["camera", "--point", "0,0,0"]);
        match evaluation.placement {
            Some(Placement::Screen(Some((x, y, _)))) => {
                assert_relative_eq!(x, 400.0, epsilon = 1e-3);
                assert_relative_eq!(y, 300.0, epsilon = 1e-3);
            }
            other => panic!("unexpected placement {other:?}"),
        }
    }

    #[test]
    fn test_missing_camera_config_is_an_error() {
        let args = Args::parse_from(["xform3d", "camera", "--config", "/nonexistent/camera.json"]);
        let err = evaluate(&args.command).unwrap_err();
        assert!(err.to_string().contains("failed to read camera config"));
    }

    #[test]
    fn test_check_rejects_degenerate_view() {
        let args = Args::parse_from([
            "xform3d", "--check", "look-at", "--eye", "0,5,0", "--target", "0,0,0", "--up", "0,1,0",
        ]);
        let mut out = Vec::new();
        assert!(run(&args, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_prints_matrix_and_point() {
        let args = Args::parse_from([
            "xform3d", "translate", "--offset", "1,2,3", "--point", "1,1,1",
        ]);
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("translation"));
        assert!(text.contains("4.0000"));
    }
}
