//! Areas and volumes of triangles, quads, tetrahedra and hexahedra.

use nalgebra::{Matrix3, Vector2, Vector3};

use super::tables::{HEX_TETRAHEDRA, QUAD_TRIANGLES};

/// Signed triangle area: half the z-component of `(p2-p1) × (p3-p1)`.
/// Positive for counter-clockwise vertices.
#[inline]
pub fn triangle_area(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    let a = p2 - p1;
    let b = p3 - p1;
    0.5 * (a.x * b.y - a.y * b.x)
}

/// Signed quad area as the sum of triangles {0,1,2} and {0,2,3}.
pub fn quad_area(points: &[Vector2<f64>; 4]) -> f64 {
    QUAD_TRIANGLES
        .iter()
        .map(|&[i, j, k]| triangle_area(points[i], points[j], points[k]))
        .sum()
}

/// Tetrahedron volume: `|det[p1-p4, p2-p4, p3-p4]| / 6`. Never negative.
#[inline]
pub fn tetrahedron_volume(
    p1: Vector3<f64>,
    p2: Vector3<f64>,
    p3: Vector3<f64>,
    p4: Vector3<f64>,
) -> f64 {
    let m = Matrix3::from_columns(&[p1 - p4, p2 - p4, p3 - p4]);
    m.determinant().abs() / 6.0
}

/// Hexahedron volume as the sum of the five tetrahedra of the fixed split.
pub fn hexahedron_volume(points: &[Vector3<f64>; 8]) -> f64 {
    HEX_TETRAHEDRA
        .iter()
        .map(|&[a, b, c, d]| tetrahedron_volume(points[a], points[b], points[c], points[d]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Matrix3};

    fn unit_cube() -> [Vector3<f64>; 8] {
        [
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![1.0, 1.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
            vector![1.0, 0.0, 1.0],
            vector![1.0, 1.0, 1.0],
            vector![0.0, 1.0, 1.0],
        ]
    }

    #[test]
    fn triangle_area_sign_follows_winding() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![0.0, 1.0];
        assert!((triangle_area(a, b, c) - 0.5).abs() < 1e-12);
        assert!((triangle_area(a, c, b) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn quad_area_rectangle() {
        let q = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 3.0],
            vector![0.0, 3.0],
        ];
        assert!((quad_area(&q) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn tetrahedron_volume_reference() {
        let v = tetrahedron_volume(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
        );
        assert!((v - 1.0 / 6.0).abs() < 1e-12);
        // vertex order does not change the sign
        let w = tetrahedron_volume(
            vector![1.0, 0.0, 0.0],
            vector![0.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
        );
        assert!((v - w).abs() < 1e-15);
    }

    #[test]
    fn hexahedron_volume_cube_and_sheared_brick() {
        assert!((hexahedron_volume(&unit_cube()) - 1.0).abs() < 1e-12);
        // a shear with unit determinant preserves the volume of 2*3*4
        let shear = Matrix3::new(1.0, 0.3, 0.0, 0.0, 1.0, 0.2, 0.0, 0.0, 1.0);
        let scale = vector![2.0, 3.0, 4.0];
        let brick = unit_cube().map(|p| shear * p.component_mul(&scale));
        assert!((hexahedron_volume(&brick) - 24.0).abs() < 1e-9);
    }
}
