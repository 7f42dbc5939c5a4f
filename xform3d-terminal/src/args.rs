/// Command-line arguments and vector literal parsing
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nalgebra::{Point3, Vector3};
use nom::{
    branch::alt,
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, value},
    number::complete::float,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ArgError {
    #[error("expected three numbers like `1,0,0` or `(1 0 0)`, got `{0}`")]
    InvalidVector(String),
}

/// Build a 4x4 transform and print it
#[derive(Parser, Debug)]
#[command(name = "xform3d", author, version)]
pub struct Args {
    /// Log builder internals (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Digits after the decimal point
    #[arg(long, global = true, default_value_t = 4)]
    pub precision: usize,

    /// Exit with an error when the result has NaN/Inf entries
    #[arg(long, global = true)]
    pub check: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Rotation about an arbitrary axis through the origin
    Rotate {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        axis: Vector3<f32>,
        #[arg(long, allow_hyphen_values = true)]
        degrees: f32,
        /// Auxiliary vector fixing the frame; synthesized when omitted
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        aux: Option<Vector3<f32>>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f32>>,
    },
    /// Rotation about x, then y, then z (degrees)
    Euler {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        angles: Vector3<f32>,
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Option<Vector3<f32>>,
    },
    Translate {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        offset: Vector3<f32>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f32>>,
    },
    Scale {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        factors: Vector3<f32>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f32>>,
    },
    /// Change of basis into the frame of `forward` and `aux`
    Frame {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        forward: Vector3<f32>,
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        aux: Vector3<f32>,
    },
    /// World-to-camera matrix
    LookAt {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        eye: Point3<f32>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Point3<f32>,
        #[arg(
            long,
            value_parser = parse_vector,
            default_value = "0,1,0",
            allow_hyphen_values = true
        )]
        up: Vector3<f32>,
    },
    /// Camera-to-clip matrix; `--point` is projected and divided by w
    Perspective {
        #[arg(long, default_value_t = 45.0)]
        fov: f32,
        #[arg(long, default_value_t = 1.0)]
        aspect: f32,
        #[arg(long, default_value_t = 0.1, allow_hyphen_values = true)]
        near: f32,
        #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
        far: f32,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f32>>,
    },
    /// View-projection of a camera loaded from JSON (defaults when omitted)
    Camera {
        #[arg(long)]
        config: Option<PathBuf>,
        /// Viewport used for `--point` screen projection
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f32>>,
    },
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), tuple((multispace0, char(','), multispace0))),
        value((), multispace1),
    ))(input)
}

fn triple(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, x) = preceded(multispace0, float)(input)?;
    let (input, _) = separator(input)?;
    let (input, y) = float(input)?;
    let (input, _) = separator(input)?;
    let (input, z) = terminated(float, multispace0)(input)?;
    Ok((input, (x, y, z)))
}

fn vector_literal(input: &str) -> IResult<&str, (f32, f32, f32)> {
    alt((
        delimited(preceded(multispace0, char('(')), triple, char(')')),
        delimited(preceded(multispace0, char('[')), triple, char(']')),
        triple,
    ))(input)
}

/// Parse `x,y,z`, `x y z`, `(x, y, z)` or `[x, y, z]`.
pub fn parse_vector(input: &str) -> Result<Vector3<f32>, ArgError> {
    match all_consuming(vector_literal)(input) {
        Ok((_, (x, y, z))) => Ok(Vector3::new(x, y, z)),
        Err(_) => Err(ArgError::InvalidVector(input.to_string())),
    }
}

pub fn parse_point(input: &str) -> Result<Point3<f32>, ArgError> {
    parse_vector(input).map(Point3::from)
}
