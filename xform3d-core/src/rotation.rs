/// Rotation about an arbitrary axis by conjugating a rotation about z
///
/// The axis is turned into a reference frame whose forward direction is the
/// axis, the point is rotated about the frame's z axis, then mapped back:
/// `M = F⁻¹ · R_z · F`.
use nalgebra::{Matrix4, Point3, Vector3};

use crate::frame::build_frame;
use crate::selector::{is_collinear, non_collinear_vector};

/// Right-handed rotation about +z by `degrees`.
pub fn rotation_z(degrees: f32) -> Matrix4<f32> {
    if degrees == 0.0 {
        return Matrix4::identity();
    }
    let (s, c) = degrees.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        c,  -s,   0.0, 0.0,
        s,   c,   0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation of `degrees` about `axis`, with the frame's helper vector
/// synthesized from the axis itself.
pub fn rotation_about_axis(axis: &Vector3<f32>, degrees: f32) -> Matrix4<f32> {
    let aux = non_collinear_vector(axis);
    if is_collinear(axis, &aux) {
        tracing::debug!(?axis, ?aux, "helper vector is collinear with rotation axis");
    }
    rotation_about_axis_with(axis, &aux, degrees)
}

/// Rotation of `degrees` about `axis` using an explicit auxiliary vector.
///
/// `aux` only fixes the frame's orientation around the axis; any vector not
/// parallel to `axis` yields the same rotation.
pub fn rotation_about_axis_with(
    axis: &Vector3<f32>,
    aux: &Vector3<f32>,
    degrees: f32,
) -> Matrix4<f32> {
    let frame = build_frame(axis, aux);
    // Orthonormal, so the inverse is the transpose.
    let back = frame.transpose();
    back * rotation_z(degrees) * frame
}

/// Rotate `point` by `degrees` about `axis` (through the origin).
pub fn rotate_point_about_axis(
    point: &Point3<f32>,
    axis: &Vector3<f32>,
    degrees: f32,
) -> Point3<f32> {
    apply_to_point(&rotation_about_axis(axis, degrees), point)
}

/// Rotate `point` about `axis` using an explicit auxiliary vector.
pub fn rotate_point_about_axis_with(
    point: &Point3<f32>,
    axis: &Vector3<f32>,
    aux: &Vector3<f32>,
    degrees: f32,
) -> Point3<f32> {
    apply_to_point(&rotation_about_axis_with(axis, aux, degrees), point)
}

/// Apply `m` to `point` as a homogeneous point (`w = 1`) and keep `x, y, z`.
pub(crate) fn apply_to_point(m: &Matrix4<f32>, point: &Point3<f32>) -> Point3<f32> {
    let h = m * point.to_homogeneous();
    Point3::new(h.x, h.y, h.z)
}
