//! Fixed vertex-index tables for the supported shapes.
//!
//! All tables assume the vertex order documented on [`Shape`](crate::mesh::Shape):
//!
//! ```text
//!    7 __________ 6
//!     |\         .\
//!     | \        . \          3 ____________ 0
//!     |4 \__________\ 5        |            |
//!     |  |       .  |          |            |
//!   3 |..|........ 2|          |____________|
//!      \ |         .|         2              1
//!       \|__________|
//!      0             1
//! ```

/// Quad split along diagonal 0-2.
pub(crate) const QUAD_TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

/// Five tetrahedra tiling a hexahedron without gaps or overlaps.
pub(crate) const HEX_TETRAHEDRA: [[usize; 4]; 5] = [
    [0, 1, 2, 5],
    [0, 2, 3, 7],
    [0, 4, 5, 7],
    [0, 2, 5, 7],
    [2, 5, 6, 7],
];

/// Boundary edges of a triangle.
pub(crate) const TRIANGLE_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

/// Boundary edges of a quad.
pub(crate) const QUAD_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

/// Boundary faces of a tetrahedron.
pub(crate) const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Boundary of a hexahedron: each quad face split into two triangles along the
/// same diagonals as [`HEX_TETRAHEDRA`].
pub(crate) const HEXAHEDRON_FACE_TRIANGLES: [[usize; 3]; 12] = [
    [0, 1, 2],
    [0, 1, 5],
    [0, 2, 3],
    [0, 3, 7],
    [0, 4, 5],
    [0, 4, 7],
    [1, 2, 5],
    [2, 3, 7],
    [2, 5, 6],
    [2, 6, 7],
    [4, 5, 7],
    [5, 6, 7],
];

/// The six quad faces of a hexahedron (used for face centroids).
pub(crate) const HEXAHEDRON_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 1, 4, 5],
    [0, 3, 4, 7],
    [1, 2, 5, 6],
    [2, 3, 6, 7],
    [4, 5, 6, 7],
];

/// Sub-tetrahedra of a hexahedron for weighting: `(corner a, corner b, face)`.
/// Each one spans corners `a`, `b`, the body centroid and the centroid of `face`
/// (an index into [`HEXAHEDRON_FACES`]). Together they tile the hexahedron.
pub(crate) const HEXAHEDRON_SUB_TETRAHEDRA: [(usize, usize, usize); 24] = [
    (0, 1, 0),
    (0, 1, 1),
    (0, 3, 0),
    (0, 3, 2),
    (0, 4, 1),
    (0, 4, 2),
    (1, 2, 0),
    (1, 2, 3),
    (1, 5, 1),
    (1, 5, 3),
    (2, 3, 0),
    (2, 3, 4),
    (2, 6, 3),
    (2, 6, 4),
    (3, 7, 2),
    (3, 7, 4),
    (4, 5, 1),
    (4, 5, 5),
    (4, 7, 2),
    (4, 7, 5),
    (5, 6, 3),
    (5, 6, 5),
    (6, 7, 4),
    (6, 7, 5),
];
