/// Orthonormal reference frames built from a forward direction
use nalgebra::{Matrix4, Vector3};

/// The `{u, v, w}` basis of a reference frame, `w` being the forward axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub u: Vector3<f32>,
    pub v: Vector3<f32>,
    pub w: Vector3<f32>,
}

impl Basis {
    /// Derive the basis from `forward` and an auxiliary vector.
    ///
    /// `w = normalize(forward)`, `u = normalize(aux × w)`, `v = w × u`. The
    /// result is right-handed (`u × v = w`). A zero `forward` or an `aux`
    /// parallel to it produces non-finite components; nothing is checked.
    pub fn new(forward: &Vector3<f32>, aux: &Vector3<f32>) -> Self {
        let w = forward.normalize();
        let u = aux.cross(&w).normalize();
        let v = w.cross(&u);
        Self { u, v, w }
    }

    /// Change-of-basis matrix taking world coordinates into frame coordinates.
    ///
    /// The basis vectors are the rows of the upper-left block, so
    /// `M * p = (u·p, v·p, w·p)`.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let (u, v, w) = (self.u, self.v, self.w);
        #[rustfmt::skip]
        let m = Matrix4::new(
            u.x, u.y, u.z, 0.0,
            v.x, v.y, v.z, 0.0,
            w.x, w.y, w.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        m
    }
}

/// Build the world-to-frame matrix for `forward` and `aux`.
///
/// Since the basis is orthonormal, the frame-to-world matrix is the transpose.
pub fn build_frame(forward: &Vector3<f32>, aux: &Vector3<f32>) -> Matrix4<f32> {
    let basis = Basis::new(forward, aux);
    tracing::trace!(?basis, "built reference frame");
    basis.to_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_frame_for_z_forward() {
        let m = build_frame(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(m, Matrix4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_forward_magnitude_ignored() {
        let aux = Vector3::new(0.0, 1.0, 0.0);
        let a = build_frame(&Vector3::new(1.0, 2.0, 3.0), &aux);
        let b = build_frame(&Vector3::new(10.0, 20.0, 30.0), &aux);
        assert_relative_eq!(a, b, epsilon = 1e-6);
    }

    #[test]
    fn test_basis_is_right_handed() {
        let basis = Basis::new(&Vector3::new(1.0, -2.0, 0.5), &Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(basis.u.cross(&basis.v), basis.w, epsilon = 1e-6);
    }

    #[test]
    fn test_frame_maps_forward_to_z() {
        let forward = Vector3::new(0.3, 0.4, -1.2);
        let m = build_frame(&forward, &Vector3::new(0.0, 1.0, 0.0));
        let mapped = m.transform_vector(&forward.normalize());
        assert_relative_eq!(mapped, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_parallel_aux_is_not_finite() {
        let m = build_frame(&Vector3::new(0.0, 1.0, 0.0), &Vector3::new(0.0, 2.0, 0.0));
        assert!(m.iter().any(|c| !c.is_finite()));
    }
}
