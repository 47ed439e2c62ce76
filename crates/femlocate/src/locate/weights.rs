//! Nodal interpolation weights of a point with respect to an element.
//!
//! - Triangles and tetrahedra: barycentric coordinates via Cramer's rule on the edge
//!   matrix. Negative entries mean the point is outside; `|det| <= 1e-7` yields the
//!   sentinel (all `-1.0`).
//! - Quads: four triangles fanned around the centroid. Hexahedra: 24 tetrahedra, each
//!   spanning one face edge, the body centroid and that face's centroid. The first
//!   sub-simplex with non-negative weights wins; auxiliary-point weights are split
//!   equally over the corners that define the auxiliary point. No sub-simplex
//!   accepting the point yields the sentinel.
//!
//! For points inside, weights sum to one and reproduce the point as the weighted
//! sum of the corners.

use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};
use tracing::warn;

use crate::cfg::{DET_EPS, SENTINEL_WEIGHT, WEIGHT_EPS};
use crate::kernel::tables::{HEXAHEDRON_FACES, HEXAHEDRON_SUB_TETRAHEDRA, QUAD_EDGES};
use crate::kernel::{matches_shape, planar, spatial, xy};
use crate::mesh::{
    resolve_element_labels, resolve_element_points, Dim, Element, ElementLabel, LabelIndex,
    Node, NodeLabel, Point, Shape,
};

/// Weights of one point over the corner nodes of the element that contains it.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementWeights {
    pub element: ElementLabel,
    pub nodes: Vec<NodeLabel>,
    pub weights: Vec<f64>,
}

/// `true` for a non-empty vector filled with the sentinel value.
#[inline]
pub fn is_sentinel(weights: &[f64]) -> bool {
    !weights.is_empty() && weights.iter().all(|&w| w == SENTINEL_WEIGHT)
}

#[inline]
fn accepted(weights: &[f64]) -> bool {
    weights.iter().all(|&w| w >= -WEIGHT_EPS)
}

/// Barycentric weights in a triangle; sentinel if degenerate.
pub fn triangle_weights(points: &[Vector2<f64>; 3], reference: Vector2<f64>) -> [f64; 3] {
    let e1 = points[1] - points[0];
    let e2 = points[2] - points[0];
    let r = reference - points[0];
    let det = Matrix2::from_columns(&[e1, e2]).determinant();
    if det.abs() <= DET_EPS {
        return [SENTINEL_WEIGHT; 3];
    }
    let s = Matrix2::from_columns(&[r, e2]).determinant() / det;
    let t = Matrix2::from_columns(&[e1, r]).determinant() / det;
    [1.0 - s - t, s, t]
}

/// Barycentric weights in a tetrahedron; sentinel if degenerate.
pub fn tetrahedron_weights(points: &[Vector3<f64>; 4], reference: Vector3<f64>) -> [f64; 4] {
    let e1 = points[1] - points[0];
    let e2 = points[2] - points[0];
    let e3 = points[3] - points[0];
    let r = reference - points[0];
    let det = Matrix3::from_columns(&[e1, e2, e3]).determinant();
    if det.abs() <= DET_EPS {
        return [SENTINEL_WEIGHT; 4];
    }
    let s = Matrix3::from_columns(&[r, e2, e3]).determinant() / det;
    let t = Matrix3::from_columns(&[e1, r, e3]).determinant() / det;
    let u = Matrix3::from_columns(&[e1, e2, r]).determinant() / det;
    [1.0 - s - t - u, s, t, u]
}

/// Quad weights via the centroid fan; sentinel if the point is outside.
pub fn quad_weights(points: &[Vector2<f64>; 4], reference: Vector2<f64>) -> [f64; 4] {
    let centroid = points.iter().fold(Vector2::zeros(), |acc, p| acc + p) / 4.0;
    for &[a, b] in &QUAD_EDGES {
        let w = triangle_weights(&[points[a], points[b], centroid], reference);
        if !accepted(&w) {
            continue;
        }
        let mut out = [w[2] / 4.0; 4];
        out[a] += w[0];
        out[b] += w[1];
        return out;
    }
    [SENTINEL_WEIGHT; 4]
}

/// Hexahedron weights via the 24-tetrahedron split; sentinel if the point is outside.
///
/// Each sub-tetrahedron has `|det| = h^3 / 4` for edge length `h`, so with the fixed
/// `1e-7` degeneracy threshold every sub-solve of a cube with `h` below about `0.0074`
/// is rejected and the result is the sentinel. Scale such meshes up first.
pub fn hexahedron_weights(points: &[Vector3<f64>; 8], reference: Vector3<f64>) -> [f64; 8] {
    let centroid = points.iter().fold(Vector3::zeros(), |acc, p| acc + p) / 8.0;
    let face_centroids: [Vector3<f64>; 6] = std::array::from_fn(|f| {
        HEXAHEDRON_FACES[f]
            .iter()
            .fold(Vector3::zeros(), |acc, &v| acc + points[v])
            / 4.0
    });
    for &(a, b, f) in &HEXAHEDRON_SUB_TETRAHEDRA {
        let w = tetrahedron_weights(
            &[points[a], points[b], centroid, face_centroids[f]],
            reference,
        );
        if !accepted(&w) {
            continue;
        }
        let mut out = [w[2] / 8.0; 8];
        out[a] += w[0];
        out[b] += w[1];
        for &v in &HEXAHEDRON_FACES[f] {
            out[v] += w[3] / 4.0;
        }
        return out;
    }
    [SENTINEL_WEIGHT; 8]
}

/// Weights for an element of known shape; empty (logged) when `points.len()` is not
/// the shape's vertex count.
pub fn shape_weights(shape: Shape, points: &[Point], reference: &Point) -> Vec<f64> {
    if !matches_shape(shape, points) {
        return Vec::new();
    }
    match shape {
        Shape::Triangle => triangle_weights(&planar::<3>(points), xy(reference)).to_vec(),
        Shape::Quad => quad_weights(&planar::<4>(points), xy(reference)).to_vec(),
        Shape::Tetrahedron => tetrahedron_weights(&spatial::<4>(points), *reference).to_vec(),
        Shape::Hexahedron => hexahedron_weights(&spatial::<8>(points), *reference).to_vec(),
    }
}

/// One weight per vertex of `points`.
///
/// Returns the sentinel (all `-1.0`) for degenerate simplices and for quads/hexahedra
/// not containing `reference`; an empty vector (logged) for unsupported shapes.
pub fn nodal_weights(points: &[Point], reference: &Point, dim: Dim) -> Vec<f64> {
    match Shape::from_vertex_count(dim, points.len()) {
        Some(shape) => shape_weights(shape, points, reference),
        None => {
            warn!(%dim, vertices = points.len(), "unsupported element type for weighting");
            Vec::new()
        }
    }
}

/// Resolve `element` against `nodes` and weight `reference` over its corners.
///
/// `None` if a connectivity entry does not resolve.
pub fn element_nodal_weights(
    element: &Element,
    reference: &Point,
    nodes: &[Node],
    index: &LabelIndex,
) -> Option<ElementWeights> {
    let points = resolve_element_points(element, nodes, index)?;
    let labels = resolve_element_labels(element, nodes, index)?;
    Some(ElementWeights {
        element: element.label,
        nodes: labels,
        weights: nodal_weights(&points, reference, element.dim),
    })
}
