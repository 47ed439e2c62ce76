//! Apex volumes: the element boundary coned to a reference point.
//!
//! For a point P and element E, `apex(E, P) == |measure(E)|` iff P lies in E (boundary
//! included), and `apex(E, P) > |measure(E)|` otherwise, growing with the distance
//! from E. The ratio of the two is the interior test and locality score used by the
//! locator.

use nalgebra::{Vector2, Vector3};

use super::measure::{tetrahedron_volume, triangle_area};
use super::tables::{HEXAHEDRON_FACE_TRIANGLES, QUAD_EDGES, TETRAHEDRON_FACES, TRIANGLE_EDGES};

/// Sum of `|area|` of the triangles formed by each polygon edge and `apex`.
pub(crate) fn polygon_apex_area(
    points: &[Vector2<f64>],
    edges: &[[usize; 2]],
    apex: Vector2<f64>,
) -> f64 {
    edges
        .iter()
        .map(|&[i, j]| triangle_area(points[i], points[j], apex).abs())
        .sum()
}

/// Sum of volumes of the tetrahedra formed by each boundary triangle and `apex`.
pub(crate) fn polyhedron_apex_volume(
    points: &[Vector3<f64>],
    faces: &[[usize; 3]],
    apex: Vector3<f64>,
) -> f64 {
    faces
        .iter()
        .map(|&[i, j, k]| tetrahedron_volume(points[i], points[j], points[k], apex))
        .sum()
}

#[inline]
pub fn triangle_apex_area(points: &[Vector2<f64>; 3], apex: Vector2<f64>) -> f64 {
    polygon_apex_area(points, &TRIANGLE_EDGES, apex)
}

#[inline]
pub fn quad_apex_area(points: &[Vector2<f64>; 4], apex: Vector2<f64>) -> f64 {
    polygon_apex_area(points, &QUAD_EDGES, apex)
}

#[inline]
pub fn tetrahedron_apex_volume(points: &[Vector3<f64>; 4], apex: Vector3<f64>) -> f64 {
    polyhedron_apex_volume(points, &TETRAHEDRON_FACES, apex)
}

/// Twelve boundary triangles (two per face) coned to `apex`.
#[inline]
pub fn hexahedron_apex_volume(points: &[Vector3<f64>; 8], apex: Vector3<f64>) -> f64 {
    polyhedron_apex_volume(points, &HEXAHEDRON_FACE_TRIANGLES, apex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::measure::{hexahedron_volume, quad_area};
    use nalgebra::vector;

    #[test]
    fn triangle_apex_matches_area_inside_and_exceeds_outside() {
        let t = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        assert!((triangle_apex_area(&t, vector![0.2, 0.2]) - 0.5).abs() < 1e-12);
        assert!((triangle_apex_area(&t, vector![0.5, 0.0]) - 0.5).abs() < 1e-12);
        assert!(triangle_apex_area(&t, vector![1.0, 1.0]) > 0.5 + 1e-6);
    }

    #[test]
    fn quad_apex_on_clockwise_quad() {
        // clockwise winding: the signed area is negative, the apex sum is not
        let q = [
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 0.0],
            vector![0.0, 1.0],
        ];
        assert!((quad_area(&q) + 1.0).abs() < 1e-12);
        assert!((quad_apex_area(&q, vector![0.3, 0.9]) - 1.0).abs() < 1e-12);
        assert!(quad_apex_area(&q, vector![1.5, 0.5]) > 1.0);
    }

    #[test]
    fn tetrahedron_apex_matches_volume_inside() {
        let t = [
            vector![0.0, 0.0, 0.0],
            vector![2.0, 0.1, 0.0],
            vector![0.3, 1.5, 0.2],
            vector![0.1, 0.4, 1.8],
        ];
        let vol = tetrahedron_volume(t[0], t[1], t[2], t[3]);
        let centroid = (t[0] + t[1] + t[2] + t[3]) / 4.0;
        assert!((tetrahedron_apex_volume(&t, centroid) - vol).abs() < 1e-12);
        assert!((tetrahedron_apex_volume(&t, t[2]) - vol).abs() < 1e-12);
        let near = tetrahedron_apex_volume(&t, vector![-0.5, 0.2, 0.2]);
        let far = tetrahedron_apex_volume(&t, vector![-2.0, 0.2, 0.2]);
        assert!(near > vol && far > near);
    }

    #[test]
    fn hexahedron_apex_grows_with_distance() {
        let cube = [
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![1.0, 1.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
            vector![1.0, 0.0, 1.0],
            vector![1.0, 1.0, 1.0],
            vector![0.0, 1.0, 1.0],
        ];
        let inside = hexahedron_apex_volume(&cube, vector![0.5, 0.5, 0.5]);
        assert!((inside - hexahedron_volume(&cube)).abs() < 1e-12);
        let near = hexahedron_apex_volume(&cube, vector![1.5, 0.5, 0.5]);
        let far = hexahedron_apex_volume(&cube, vector![3.0, 0.5, 0.5]);
        assert!(near > inside && far > near);
    }
}
