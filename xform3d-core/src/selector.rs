/// Auxiliary vector synthesis for single-axis frames
///
/// When a rotation is requested about an axis with no companion vector, the
/// reference frame still needs a second direction for its cross product. The
/// selector copies the axis and overwrites its smallest component with `1.0`.
use nalgebra::Vector3;

/// One entry of the selection policy: the component to test and the two
/// components it must not exceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorRule {
    pub axis: usize,
    pub others: [usize; 2],
}

/// Ordered rule table, scanned x, y, z. The first matching rule wins.
pub const SELECTOR_RULES: [SelectorRule; 3] = [
    SelectorRule { axis: 0, others: [1, 2] },
    SelectorRule { axis: 1, others: [0, 2] },
    SelectorRule { axis: 2, others: [0, 1] },
];

impl SelectorRule {
    /// True when the tested component is `<=` both others (signed comparison).
    pub fn matches(&self, v: &Vector3<f32>) -> bool {
        let value = v[self.axis];
        self.others.iter().all(|&other| value <= v[other])
    }
}

/// Index of the component the selector will overwrite, or `None` when no rule
/// matches (only possible with NaN components).
pub fn selected_axis(axis: &Vector3<f32>) -> Option<usize> {
    SELECTOR_RULES
        .iter()
        .find(|rule| rule.matches(axis))
        .map(|rule| rule.axis)
}

/// Synthesize a helper vector that is, for most inputs, not parallel to `axis`.
///
/// Comparisons are signed, so axes with negative components can yield a
/// vector parallel to `axis` (e.g. `(-1, 0, 0)` becomes `(1, 0, 0)`); an axis
/// whose smallest component is already `1.0` comes back unchanged. See
/// [`is_collinear`] for detecting these cases.
pub fn non_collinear_vector(axis: &Vector3<f32>) -> Vector3<f32> {
    let mut helper = *axis;
    match selected_axis(axis) {
        Some(index) => {
            helper[index] = 1.0;
            tracing::trace!(index, ?helper, "selected helper component");
        }
        None => tracing::trace!(?axis, "no selector rule matched"),
    }
    helper
}

/// True when `a` and `b` are parallel (or either is zero) within `1e-6`
/// relative to their lengths.
pub fn is_collinear(a: &Vector3<f32>, b: &Vector3<f32>) -> bool {
    let scale = a.norm() * b.norm();
    if scale == 0.0 {
        return true;
    }
    a.cross(b).norm() <= 1e-6 * scale
}
