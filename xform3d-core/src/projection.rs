/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

use crate::view::look_at;

/// Off-axis perspective projection for the frustum `[l, r] × [b, t]` at
/// distance `near`, clipped at `far`.
///
/// The camera looks down -z. After dividing by the output `w` (which is the
/// input `-z`), points inside the frustum land in `[-1, 1]³`, with the near
/// plane at z = -1 and the far plane at z = +1.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4<f32> {
    let (n, f) = (near, far);
    let (rl, tb) = (right - left, top - bottom);
    #[rustfmt::skip]
    let m = Matrix4::new(
        2.0 * n / rl, 0.0,          (right + left) / rl, 0.0,
        0.0,          2.0 * n / tb, (top + bottom) / tb, 0.0,
        0.0,          0.0,          (f + n) / (n - f),   2.0 * f * n / (n - f),
        0.0,          0.0,          -1.0,                0.0,
    );
    m
}

/// Symmetric perspective projection from a vertical field of view.
///
/// The signs of `near` and `far` are ignored. Zero FOV, `near == 0` or
/// `near == far` produce non-finite entries.
pub fn perspective(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
    let (n, f) = (near.abs(), far.abs());
    let half_theta = fov_y_degrees.to_radians() / 2.0;
    let top = half_theta.tan() * n;
    let right = aspect_ratio * top;
    tracing::trace!(fov_y_degrees, aspect_ratio, n, f, top, right, "perspective frustum");
    frustum(-right, right, -top, top, n, f)
}

/// Orthographic projection of the box `[l, r] × [b, t] × [-near, -far]`
/// onto the canonical clip volume, with `w = 1`.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Matrix4<f32> {
    let (rl, tb, fnr) = (right - left, top - bottom, far - near);
    #[rustfmt::skip]
    let m = Matrix4::new(
        2.0 / rl, 0.0,      0.0,         -(right + left) / rl,
        0.0,      2.0 / tb, 0.0,         -(top + bottom) / tb,
        0.0,      0.0,      -2.0 / fnr,  -(far + near) / fnr,
        0.0,      0.0,      0.0,         1.0,
    );
    m
}

/// Divide homogeneous clip coordinates by `w`.
pub fn perspective_divide(clip: &Vector4<f32>) -> Point3<f32> {
    Point3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
}

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProjectionMode {
    Orthographic,
    #[default]
    Perspective,
}

/// Camera configuration
///
/// Holds the pose and lens parameters; matrices are rebuilt on every call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            ..Self::default()
        }
    }

    /// Decode a camera from JSON; absent fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> crate::error::TransformResult<Self> {
        let camera: Self = serde_json::from_str(input)?;
        tracing::debug!(?camera, "loaded camera");
        Ok(camera)
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        look_at(&self.eye, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                perspective(self.fov_y_degrees, self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                // Same framing as perspective at the target's distance.
                let distance = (self.eye - self.target).norm();
                let half_height = distance * (self.fov_y_degrees.to_radians() / 2.0).tan();
                let half_width = half_height * self.aspect;
                orthographic(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn mvp(&self, model: &Matrix4<f32>) -> Matrix4<f32> {
        crate::transform::mvp_matrix(model, &self.view_matrix(), &self.projection_matrix())
    }

    /// Project a 3D point to 2D screen space
    ///
    /// Returns `(x, y, depth)` with y growing downward and depth the NDC z,
    /// or `None` when the point is on or behind the eye plane (perspective
    /// mode) or outside the viewport.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let clip = self.mvp(model_matrix) * point.to_homogeneous();

        // w is the view-space distance in front of the eye; zero or negative
        // means the point sits on or behind the eye plane.
        if clip.w <= 1e-6 {
            return None;
        }

        let ndc = perspective_divide(&clip);

        // Clip test
        if ndc.x < -1.0 || ndc.x > 1.0 || ndc.y < -1.0 || ndc.y > 1.0 {
            return None;
        }

        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov_y_degrees: 45.0,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
        }
    }
}
