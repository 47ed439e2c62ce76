//! Core mesh types: points, dimensionality tags, shapes, labelled nodes and elements.

use std::fmt;

use nalgebra::Vector3;

/// Node coordinates. Two-dimensional meshes keep `z = 0`; 2D code reads `x` and `y` only.
pub type Point = Vector3<f64>;

/// Build a 2D point (`z = 0`).
#[inline]
pub fn point2(x: f64, y: f64) -> Point {
    Vector3::new(x, y, 0.0)
}

/// Build a 3D point.
#[inline]
pub fn point3(x: f64, y: f64, z: f64) -> Point {
    Vector3::new(x, y, z)
}

/// Spatial dimensionality of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    Two,
    Three,
}

impl Dim {
    /// Number of coordinate axes.
    #[inline]
    pub fn axes(self) -> usize {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }
}

/// Rejected integer dimensionality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimError(pub u8);

impl fmt::Display for DimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported dimensionality {} (expected 2 or 3)", self.0)
    }
}

impl std::error::Error for DimError {}

impl TryFrom<u8> for Dim {
    type Error = DimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dim::Two),
            3 => Ok(Dim::Three),
            other => Err(DimError(other)),
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

/// The four supported low-order element shapes.
///
/// Vertex order conventions (not validated at runtime):
/// - `Quad`: 0-1-2-3 consistently clockwise or counter-clockwise.
/// - `Hexahedron`: bottom quad 0-1-2-3, top quad 4-5-6-7, vertical edges 0-4, 1-5, 2-6, 3-7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle,
    Quad,
    Tetrahedron,
    Hexahedron,
}

impl Shape {
    /// Resolve `(dim, vertex count)`; `None` for any pair outside the supported four.
    #[inline]
    pub fn from_vertex_count(dim: Dim, count: usize) -> Option<Shape> {
        match (dim, count) {
            (Dim::Two, 3) => Some(Shape::Triangle),
            (Dim::Two, 4) => Some(Shape::Quad),
            (Dim::Three, 4) => Some(Shape::Tetrahedron),
            (Dim::Three, 8) => Some(Shape::Hexahedron),
            _ => None,
        }
    }

    #[inline]
    pub fn dim(self) -> Dim {
        match self {
            Shape::Triangle | Shape::Quad => Dim::Two,
            Shape::Tetrahedron | Shape::Hexahedron => Dim::Three,
        }
    }

    #[inline]
    pub fn vertex_count(self) -> usize {
        match self {
            Shape::Triangle => 3,
            Shape::Quad => 4,
            Shape::Tetrahedron => 4,
            Shape::Hexahedron => 8,
        }
    }
}

/// Externally assigned node label (unique per mesh, not necessarily contiguous).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeLabel(pub u64);

/// Externally assigned element label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementLabel(pub u64);

/// How element connectivity entries address nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Addressing {
    /// Entries are node labels (result-database style meshes).
    #[default]
    Label,
    /// Entries are 0-based positions into the node list (model-definition style meshes).
    Index,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub label: NodeLabel,
    pub point: Point,
}

impl Node {
    #[inline]
    pub fn new(label: u64, point: Point) -> Self {
        Self {
            label: NodeLabel(label),
            point,
        }
    }
}

/// An element: label, dimensionality tag and ordered connectivity.
///
/// Connectivity entries are interpreted through the owning mesh's [`Addressing`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub label: ElementLabel,
    pub dim: Dim,
    pub connectivity: Vec<u64>,
}

impl Element {
    #[inline]
    pub fn new(label: u64, dim: Dim, connectivity: Vec<u64>) -> Self {
        Self {
            label: ElementLabel(label),
            dim,
            connectivity,
        }
    }

    /// Shape implied by `(dim, connectivity length)`, if supported.
    #[inline]
    pub fn shape(&self) -> Option<Shape> {
        Shape::from_vertex_count(self.dim, self.connectivity.len())
    }
}

/// Errors raised while assembling a [`Mesh`](super::Mesh).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Two nodes share a label.
    DuplicateNodeLabel { label: NodeLabel },
    /// A connectivity entry does not resolve to a node.
    UnresolvedNode { element: ElementLabel, key: u64 },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::DuplicateNodeLabel { label } => {
                write!(f, "node label {} occurs more than once", label.0)
            }
            MeshError::UnresolvedNode { element, key } => write!(
                f,
                "element {} references node {} which is not part of the mesh",
                element.0, key
            ),
        }
    }
}

impl std::error::Error for MeshError {}
