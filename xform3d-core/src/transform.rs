/// Elementary affine transforms: Euler rotation, translation and scale
use nalgebra::{Matrix4, Point3, Vector3};

use crate::rotation::{apply_to_point, rotation_z};

/// Rotation amounts about the x, y and z axes (in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerAngles {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Angles with every component negated.
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Right-handed rotation about +x by `degrees`.
pub fn rotation_x(degrees: f32) -> Matrix4<f32> {
    if degrees == 0.0 {
        return Matrix4::identity();
    }
    let (s, c) = degrees.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c,  -s,   0.0,
        0.0, s,   c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Right-handed rotation about +y by `degrees`.
pub fn rotation_y(degrees: f32) -> Matrix4<f32> {
    if degrees == 0.0 {
        return Matrix4::identity();
    }
    let (s, c) = degrees.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        c,   0.0, s,   0.0,
        0.0, 1.0, 0.0, 0.0,
       -s,   0.0, c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Create a rotation matrix from Euler angles.
///
/// The x rotation is applied first, then y, then z: `Rz · Ry · Rx`. An axis
/// with a zero angle contributes the identity without evaluating sin/cos.
pub fn euler_rotation(angles: &EulerAngles) -> Matrix4<f32> {
    rotation_z(angles.z) * rotation_y(angles.y) * rotation_x(angles.x)
}

/// Rotate `v` by the Euler rotation for `angles`.
pub fn rotate_vector_euler(v: &Vector3<f32>, angles: &EulerAngles) -> Vector3<f32> {
    euler_rotation(angles).transform_vector(v)
}

/// Create a translation matrix
pub fn translation(offset: &Vector3<f32>) -> Matrix4<f32> {
    Matrix4::new_translation(offset)
}

pub fn translate_point(point: &Point3<f32>, offset: &Vector3<f32>) -> Point3<f32> {
    apply_to_point(&translation(offset), point)
}

/// Create a non-uniform scale matrix
pub fn scaling(factors: &Vector3<f32>) -> Matrix4<f32> {
    Matrix4::new_nonuniform_scaling(factors)
}

pub fn scale_point(point: &Point3<f32>, factors: &Vector3<f32>) -> Point3<f32> {
    apply_to_point(&scaling(factors), point)
}

/// Create a model-view-projection matrix
pub fn mvp_matrix(
    model: &Matrix4<f32>,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
) -> Matrix4<f32> {
    projection * view * model
}
