//! Geometric kernel: element measures and apex volumes.
//!
//! Purpose
//! - Exact area/volume arithmetic for triangles, quads, tetrahedra and hexahedra.
//! - Apex volumes (boundary coned to a reference point) for interior tests.
//!
//! Conventions
//! - 2D measures are signed (sign = winding); 3D measures are non-negative.
//! - Dispatch on `(Dim, vertex count)`. Unsupported pairs are logged and yield `0.0`
//!   (measures) or `None` (ratios); nothing here panics on them.
//! - 2D routines read `x` and `y` of each point and ignore `z`.

mod apex;
mod measure;
pub(crate) mod tables;

pub use apex::{
    hexahedron_apex_volume, quad_apex_area, tetrahedron_apex_volume, triangle_apex_area,
};
pub use measure::{hexahedron_volume, quad_area, tetrahedron_volume, triangle_area};

use nalgebra::{Vector2, Vector3};
use tracing::warn;

use crate::mesh::{Dim, Point, Shape};

/// First `N` points projected to the xy-plane. Callers guarantee `points.len() >= N`.
#[inline]
pub(crate) fn planar<const N: usize>(points: &[Point]) -> [Vector2<f64>; N] {
    std::array::from_fn(|i| Vector2::new(points[i].x, points[i].y))
}

/// First `N` points as 3-vectors. Callers guarantee `points.len() >= N`.
#[inline]
pub(crate) fn spatial<const N: usize>(points: &[Point]) -> [Vector3<f64>; N] {
    std::array::from_fn(|i| points[i])
}

#[inline]
pub(crate) fn xy(p: &Point) -> Vector2<f64> {
    Vector2::new(p.x, p.y)
}

/// `false` (logged) when `points` does not carry exactly the corners of `shape`.
pub(crate) fn matches_shape(shape: Shape, points: &[Point]) -> bool {
    if points.len() == shape.vertex_count() {
        return true;
    }
    warn!(?shape, vertices = points.len(), "vertex count does not match shape");
    false
}

/// Measure of an element of known shape. A vertex count other than the shape's is
/// logged and returns `0.0`.
pub fn shape_volume(shape: Shape, points: &[Point]) -> f64 {
    if !matches_shape(shape, points) {
        return 0.0;
    }
    match shape {
        Shape::Triangle => {
            let [a, b, c] = planar::<3>(points);
            triangle_area(a, b, c)
        }
        Shape::Quad => quad_area(&planar::<4>(points)),
        Shape::Tetrahedron => {
            let [a, b, c, d] = spatial::<4>(points);
            tetrahedron_volume(a, b, c, d)
        }
        Shape::Hexahedron => hexahedron_volume(&spatial::<8>(points)),
    }
}

/// Apex volume of an element of known shape; `0.0` on a vertex count mismatch.
pub fn shape_apex_volume(shape: Shape, points: &[Point], reference: &Point) -> f64 {
    if !matches_shape(shape, points) {
        return 0.0;
    }
    match shape {
        Shape::Triangle => triangle_apex_area(&planar::<3>(points), xy(reference)),
        Shape::Quad => quad_apex_area(&planar::<4>(points), xy(reference)),
        Shape::Tetrahedron => tetrahedron_apex_volume(&spatial::<4>(points), *reference),
        Shape::Hexahedron => hexahedron_apex_volume(&spatial::<8>(points), *reference),
    }
}

/// Area (2D, signed) or volume (3D) of the element spanned by `points`.
///
/// Supported `(dim, vertices)`: (2,3), (2,4), (3,4), (3,8). Anything else is
/// logged and returns `0.0`.
pub fn element_volume(points: &[Point], dim: Dim) -> f64 {
    match Shape::from_vertex_count(dim, points.len()) {
        Some(shape) => shape_volume(shape, points),
        None => {
            warn!(%dim, vertices = points.len(), "unsupported element type for volume");
            0.0
        }
    }
}

/// Boundary of the element coned to `reference`: sum of absolute fan areas/volumes.
/// Unsupported shapes are logged and return `0.0`.
pub fn apex_volume(points: &[Point], reference: &Point, dim: Dim) -> f64 {
    match Shape::from_vertex_count(dim, points.len()) {
        Some(shape) => shape_apex_volume(shape, points, reference),
        None => {
            warn!(%dim, vertices = points.len(), "unsupported element type for apex volume");
            0.0
        }
    }
}

/// `apex / |reference_volume|`, or `None` if the reference measure is not a
/// strictly positive finite number (degenerate element).
#[inline]
pub(crate) fn ratio_against(apex: f64, reference_volume: f64) -> Option<f64> {
    let denom = reference_volume.abs();
    if !denom.is_finite() || denom <= 0.0 {
        return None;
    }
    Some(apex / denom)
}

/// Interior score `apex_volume / |element_volume|`: `1.0` on or inside the element,
/// greater than `1.0` outside. `None` for unsupported or degenerate elements.
pub fn volume_ratio(points: &[Point], reference: &Point, dim: Dim) -> Option<f64> {
    let Some(shape) = Shape::from_vertex_count(dim, points.len()) else {
        warn!(%dim, vertices = points.len(), "unsupported element type for volume ratio");
        return None;
    };
    ratio_against(
        shape_apex_volume(shape, points, reference),
        shape_volume(shape, points),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{point2, point3};

    #[test]
    fn element_volume_dispatches_supported_pairs() {
        let tri = [point2(0.0, 0.0), point2(1.0, 0.0), point2(0.0, 1.0)];
        assert!((element_volume(&tri, Dim::Two) - 0.5).abs() < 1e-12);
        let tet = [
            point3(0.0, 0.0, 0.0),
            point3(1.0, 0.0, 0.0),
            point3(0.0, 1.0, 0.0),
            point3(0.0, 0.0, 1.0),
        ];
        assert!((element_volume(&tet, Dim::Three) - 1.0 / 6.0).abs() < 1e-12);
        // the same four points read as a 2D quad
        let quad = [
            point2(0.0, 0.0),
            point2(1.0, 0.0),
            point2(1.0, 1.0),
            point2(0.0, 1.0),
        ];
        assert!((element_volume(&quad, Dim::Two) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unsupported_pairs_are_neutral() {
        let five = [point3(0.0, 0.0, 0.0); 5];
        assert_eq!(element_volume(&five, Dim::Three), 0.0);
        assert_eq!(apex_volume(&five, &point3(1.0, 1.0, 1.0), Dim::Two), 0.0);
        assert!(volume_ratio(&five, &point3(1.0, 1.0, 1.0), Dim::Three).is_none());
    }

    #[test]
    fn short_vertex_lists_are_neutral() {
        let three = [point3(0.0, 0.0, 0.0), point3(1.0, 0.0, 0.0), point3(0.0, 1.0, 0.0)];
        assert_eq!(shape_volume(Shape::Hexahedron, &three), 0.0);
        assert_eq!(shape_volume(Shape::Quad, &three), 0.0);
        assert_eq!(
            shape_apex_volume(Shape::Tetrahedron, &three, &point3(0.2, 0.2, 0.2)),
            0.0
        );
        assert!((shape_volume(Shape::Triangle, &three) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn two_dimensional_routines_ignore_z() {
        let tri = [
            point3(0.0, 0.0, 5.0),
            point3(1.0, 0.0, -2.0),
            point3(0.0, 1.0, 9.0),
        ];
        assert!((element_volume(&tri, Dim::Two) - 0.5).abs() < 1e-12);
        let r = volume_ratio(&tri, &point3(0.25, 0.25, 100.0), Dim::Two).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_element_has_no_ratio() {
        let flat = [point2(0.0, 0.0), point2(1.0, 0.0), point2(2.0, 0.0)];
        assert!(volume_ratio(&flat, &point2(0.5, 0.0), Dim::Two).is_none());
    }
}
