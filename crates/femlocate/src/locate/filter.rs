//! Axis-aligned pre-filter run before the exact volume-ratio test.

use crate::mesh::{Dim, Point};

/// `false` if, on some axis in `0..dim`, every vertex lies strictly on one side of
/// `reference`. Necessary but not sufficient for containment; equality counts as
/// "possibly inside".
pub fn possibly_contains(points: &[Point], reference: &Point, dim: Dim) -> bool {
    if points.is_empty() {
        return false;
    }
    (0..dim.axes()).all(|axis| {
        let r = reference[axis];
        let all_below = points.iter().all(|p| p[axis] < r);
        let all_above = points.iter().all(|p| p[axis] > r);
        !(all_below || all_above)
    })
}
