//! xform3d Core Library - Stateless 3D transform builders
//!
//! Every builder is a pure function returning a fresh homogeneous
//! `Matrix4<f32>` (column-vector convention: `M * p`, right operand applied
//! first). Degenerate inputs are not checked; they surface as NaN/Inf entries
//! that callers can detect with the helpers in [`validate`].

pub mod error;
pub mod frame;
pub mod projection;
pub mod rotation;
pub mod selector;
pub mod transform;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use error::{TransformError, TransformResult};
pub use frame::{build_frame, Basis};
pub use projection::{
    frustum, orthographic, perspective, perspective_divide, Camera, ProjectionMode,
};
pub use rotation::{
    rotate_point_about_axis, rotate_point_about_axis_with, rotation_about_axis,
    rotation_about_axis_with,
};
pub use selector::{non_collinear_vector, SELECTOR_RULES};
pub use transform::{
    euler_rotation, mvp_matrix, rotate_vector_euler, scale_point, scaling, translate_point,
    translation, EulerAngles,
};
pub use validate::{ensure_finite_matrix, ensure_finite_point, is_finite_matrix};
pub use view::look_at;
