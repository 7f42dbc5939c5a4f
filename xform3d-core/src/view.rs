/// World-to-camera (view) transform
use nalgebra::{Matrix4, Point3, Vector3};

use crate::frame::build_frame;
use crate::transform::translation;

/// Build the view matrix for a camera at `eye` looking at `target`.
///
/// The camera's forward axis is the gaze reversed (`eye - target`), so the
/// camera looks down its own -z. World points are first translated so the
/// eye sits at the origin, then re-expressed in the camera basis.
///
/// `up` must not be parallel to the gaze; otherwise the frame is non-finite.
pub fn look_at(eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
    let gaze = -(target - eye);
    build_frame(&gaze, up) * translation(&-eye.coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eye_maps_to_origin() {
        let eye = Point3::new(3.0, -2.0, 7.5);
        let view = look_at(&eye, &Point3::new(0.0, 1.0, 0.0), &Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(view.transform_point(&eye), Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_target_lies_on_negative_z() {
        let eye = Point3::new(0.0, 0.0, 5.0);
        let view = look_at(&eye, &Point3::origin(), &Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(
            view.transform_point(&Point3::origin()),
            Point3::new(0.0, 0.0, -5.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_matches_nalgebra_look_at_rh() {
        let eye = Point3::new(1.0, 2.0, 3.0);
        let target = Point3::new(-4.0, 0.5, -1.0);
        let up = Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(
            look_at(&eye, &target, &up),
            Matrix4::look_at_rh(&eye, &target, &up),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_up_parallel_to_gaze_is_not_finite() {
        let view = look_at(
            &Point3::new(0.0, 5.0, 0.0),
            &Point3::origin(),
            &Vector3::new(0.0, 1.0, 0.0),
        );
        assert!(view.iter().any(|c| !c.is_finite()));
    }
}
