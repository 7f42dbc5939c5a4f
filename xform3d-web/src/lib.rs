/// xform3d Web - WASM bindings for the transform builders
///
/// Matrices are returned as 16 column-major floats, ready for
/// `gl.uniformMatrix4fv(loc, false, m)`. Points come back as 3 floats.

use nalgebra::{Matrix4, Point3, Vector3};
use wasm_bindgen::prelude::*;
use xform3d_core as core3d;

fn columns(m: Matrix4<f32>) -> Vec<f32> {
    m.as_slice().to_vec()
}

fn coords(p: Point3<f32>) -> Vec<f32> {
    vec![p.x, p.y, p.z]
}

#[wasm_bindgen(js_name = rotationAboutAxis)]
pub fn rotation_about_axis(ax: f32, ay: f32, az: f32, degrees: f32) -> Vec<f32> {
    columns(core3d::rotation_about_axis(&Vector3::new(ax, ay, az), degrees))
}

/// Rotation about an axis with an explicit auxiliary vector for the frame.
#[wasm_bindgen(js_name = rotationAboutAxisWith)]
pub fn rotation_about_axis_with(
    ax: f32,
    ay: f32,
    az: f32,
    ux: f32,
    uy: f32,
    uz: f32,
    degrees: f32,
) -> Vec<f32> {
    columns(core3d::rotation_about_axis_with(
        &Vector3::new(ax, ay, az),
        &Vector3::new(ux, uy, uz),
        degrees,
    ))
}

#[wasm_bindgen(js_name = rotatePointAboutAxis)]
pub fn rotate_point_about_axis(
    px: f32,
    py: f32,
    pz: f32,
    ax: f32,
    ay: f32,
    az: f32,
    degrees: f32,
) -> Vec<f32> {
    coords(core3d::rotate_point_about_axis(
        &Point3::new(px, py, pz),
        &Vector3::new(ax, ay, az),
        degrees,
    ))
}

/// Rotate a point about an axis with an explicit auxiliary vector for the frame.
#[wasm_bindgen(js_name = rotatePointAboutAxisWith)]
#[allow(clippy::too_many_arguments)]
pub fn rotate_point_about_axis_with(
    px: f32,
    py: f32,
    pz: f32,
    ax: f32,
    ay: f32,
    az: f32,
    ux: f32,
    uy: f32,
    uz: f32,
    degrees: f32,
) -> Vec<f32> {
    coords(core3d::rotate_point_about_axis_with(
        &Point3::new(px, py, pz),
        &Vector3::new(ax, ay, az),
        &Vector3::new(ux, uy, uz),
        degrees,
    ))
}

#[wasm_bindgen(js_name = eulerRotation)]
pub fn euler_rotation(x: f32, y: f32, z: f32) -> Vec<f32> {
    columns(core3d::euler_rotation(&core3d::EulerAngles::new(x, y, z)))
}

#[wasm_bindgen(js_name = rotateVectorEuler)]
pub fn rotate_vector_euler(vx: f32, vy: f32, vz: f32, x: f32, y: f32, z: f32) -> Vec<f32> {
    let v = core3d::rotate_vector_euler(
        &Vector3::new(vx, vy, vz),
        &core3d::EulerAngles::new(x, y, z),
    );
    vec![v.x, v.y, v.z]
}

#[wasm_bindgen]
pub fn translation(x: f32, y: f32, z: f32) -> Vec<f32> {
    columns(core3d::translation(&Vector3::new(x, y, z)))
}

#[wasm_bindgen(js_name = translatePoint)]
pub fn translate_point(px: f32, py: f32, pz: f32, x: f32, y: f32, z: f32) -> Vec<f32> {
    coords(core3d::translate_point(&Point3::new(px, py, pz), &Vector3::new(x, y, z)))
}

#[wasm_bindgen]
pub fn scaling(x: f32, y: f32, z: f32) -> Vec<f32> {
    columns(core3d::scaling(&Vector3::new(x, y, z)))
}

#[wasm_bindgen(js_name = scalePoint)]
pub fn scale_point(px: f32, py: f32, pz: f32, x: f32, y: f32, z: f32) -> Vec<f32> {
    coords(core3d::scale_point(&Point3::new(px, py, pz), &Vector3::new(x, y, z)))
}

#[wasm_bindgen(js_name = referenceFrame)]
pub fn reference_frame(fx: f32, fy: f32, fz: f32, ux: f32, uy: f32, uz: f32) -> Vec<f32> {
    columns(core3d::build_frame(&Vector3::new(fx, fy, fz), &Vector3::new(ux, uy, uz)))
}

#[wasm_bindgen(js_name = lookAt)]
#[allow(clippy::too_many_arguments)]
pub fn look_at(
    ex: f32,
    ey: f32,
    ez: f32,
    tx: f32,
    ty: f32,
    tz: f32,
    ux: f32,
    uy: f32,
    uz: f32,
) -> Vec<f32> {
    columns(core3d::look_at(
        &Point3::new(ex, ey, ez),
        &Point3::new(tx, ty, tz),
        &Vector3::new(ux, uy, uz),
    ))
}

#[wasm_bindgen]
pub fn perspective(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Vec<f32> {
    columns(core3d::perspective(fov_y_degrees, aspect_ratio, near, far))
}

#[wasm_bindgen]
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Vec<f32> {
    columns(core3d::frustum(left, right, bottom, top, near, far))
}

#[wasm_bindgen]
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Vec<f32> {
    columns(core3d::orthographic(left, right, bottom, top, near, far))
}

/// True when every entry of a 16-float matrix is finite.
#[wasm_bindgen(js_name = isFiniteMatrix)]
pub fn is_finite_matrix(m: &[f32]) -> bool {
    m.len() == 16 && core3d::is_finite_matrix(&Matrix4::from_column_slice(m))
}
