/// Opt-in checks for degenerate outputs
use nalgebra::{Matrix4, Point3};

use crate::error::{TransformError, TransformResult};

pub fn is_finite_matrix(m: &Matrix4<f32>) -> bool {
    m.iter().all(|c| c.is_finite())
}

/// Return `m` unchanged if every entry is finite.
pub fn ensure_finite_matrix(m: Matrix4<f32>, what: &'static str) -> TransformResult<Matrix4<f32>> {
    if is_finite_matrix(&m) {
        Ok(m)
    } else {
        tracing::debug!(what, "degenerate transform");
        Err(TransformError::NonFinite { what })
    }
}

pub fn ensure_finite_point(p: Point3<f32>, what: &'static str) -> TransformResult<Point3<f32>> {
    if p.iter().all(|c| c.is_finite()) {
        Ok(p)
    } else {
        tracing::debug!(what, "degenerate point");
        Err(TransformError::NonFinite { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{look_at, perspective};
    use nalgebra::Vector3;

    #[test]
    fn test_valid_matrix_passes() {
        let m = perspective(60.0, 1.0, 1.0, 100.0);
        assert!(ensure_finite_matrix(m, "projection").is_ok());
    }

    #[test]
    fn test_degenerate_frustum_rejected() {
        let m = perspective(60.0, 1.0, 10.0, 10.0);
        let err = ensure_finite_matrix(m, "projection").unwrap_err();
        assert!(matches!(err, TransformError::NonFinite { what: "projection" }));
        assert_eq!(err.to_string(), "non-finite components in projection");
    }

    #[test]
    fn test_degenerate_view_rejected() {
        let view = look_at(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::origin(),
            &Vector3::new(0.0, 0.0, 1.0),
        );
        assert!(!is_finite_matrix(&view));
    }

    #[test]
    fn test_point_check() {
        assert!(ensure_finite_point(Point3::new(1.0, 2.0, 3.0), "point").is_ok());
        assert!(ensure_finite_point(Point3::new(f32::NAN, 0.0, 0.0), "point").is_err());
    }
}
