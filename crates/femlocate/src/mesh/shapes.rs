//! Structured meshes of the unit square and unit cube, used in tests and benchmarks.
//!
//! Purpose
//! - Give tests and benches small deterministic meshes with known measures
//!   (the unit square has area 1, the unit cube volume 1).
//!
//! Layout
//! - `n` cells per axis, node spacing `1/n`. Node labels start at 1 and run
//!   x-fastest; element labels start at 1 in cell order. Connectivity is
//!   label-addressed.
//! - Quads and triangles are counter-clockwise. Hexahedra follow the vertex order
//!   documented on [`Shape`]. Tetrahedral meshes split every cell with the same
//!   five-tetrahedron pattern, so neighbouring cells need not share face diagonals.

use super::types::{point2, point3, Addressing, Dim, Element, Node, Shape};
use super::Mesh;
use crate::kernel::tables::HEX_TETRAHEDRA;

/// Unit square `[0,1]^2` with `n × n` cells of triangles (two per cell) or quads.
///
/// `None` for `n == 0` or a three-dimensional `shape`.
pub fn unit_square(n: usize, shape: Shape) -> Option<Mesh> {
    if n == 0 || shape.dim() != Dim::Two {
        return None;
    }
    let h = 1.0 / n as f64;
    let label = |i: usize, j: usize| (1 + i + j * (n + 1)) as u64;

    let mut nodes = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            nodes.push(Node::new(label(i, j), point2(i as f64 * h, j as f64 * h)));
        }
    }

    let mut elements = Vec::new();
    for j in 0..n {
        for i in 0..n {
            let c = [label(i, j), label(i + 1, j), label(i + 1, j + 1), label(i, j + 1)];
            match shape {
                Shape::Quad => elements.push(c.to_vec()),
                _ => {
                    elements.push(vec![c[0], c[1], c[2]]);
                    elements.push(vec![c[0], c[2], c[3]]);
                }
            }
        }
    }
    let elements = elements
        .into_iter()
        .enumerate()
        .map(|(k, conn)| Element::new(k as u64 + 1, Dim::Two, conn))
        .collect();
    Mesh::new(nodes, elements, Addressing::Label).ok()
}

/// Unit cube `[0,1]^3` with `n × n × n` cells of tetrahedra (five per cell) or hexahedra.
///
/// `None` for `n == 0` or a two-dimensional `shape`.
pub fn unit_cube(n: usize, shape: Shape) -> Option<Mesh> {
    if n == 0 || shape.dim() != Dim::Three {
        return None;
    }
    let h = 1.0 / n as f64;
    let m = n + 1;
    let label = |i: usize, j: usize, k: usize| (1 + i + j * m + k * m * m) as u64;

    let mut nodes = Vec::with_capacity(m * m * m);
    for k in 0..=n {
        for j in 0..=n {
            for i in 0..=n {
                nodes.push(Node::new(
                    label(i, j, k),
                    point3(i as f64 * h, j as f64 * h, k as f64 * h),
                ));
            }
        }
    }

    let mut elements = Vec::new();
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                let c = [
                    label(i, j, k),
                    label(i + 1, j, k),
                    label(i + 1, j + 1, k),
                    label(i, j + 1, k),
                    label(i, j, k + 1),
                    label(i + 1, j, k + 1),
                    label(i + 1, j + 1, k + 1),
                    label(i, j + 1, k + 1),
                ];
                match shape {
                    Shape::Hexahedron => elements.push(c.to_vec()),
                    _ => elements.extend(
                        HEX_TETRAHEDRA
                            .iter()
                            .map(|tet| tet.iter().map(|&v| c[v]).collect::<Vec<_>>()),
                    ),
                }
            }
        }
    }
    let elements = elements
        .into_iter()
        .enumerate()
        .map(|(k, conn)| Element::new(k as u64 + 1, Dim::Three, conn))
        .collect();
    Mesh::new(nodes, elements, Addressing::Label).ok()
}
