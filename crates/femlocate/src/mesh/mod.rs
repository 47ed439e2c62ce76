//! Meshes of low-order 2D/3D elements.
//!
//! Purpose
//! - Hold labelled nodes and elements together with the addressing mode of their
//!   connectivity, and a prebuilt [`LabelIndex`].
//! - A `Mesh` is immutable after construction, so its index never goes stale.
//!   Coordinate changes produce a new mesh (`map_nodes`).
//!
//! Conventions
//! - Result-database meshes address nodes by label (`Addressing::Label`), model-definition
//!   meshes by 0-based position (`Addressing::Index`). The caller states which.
//! - Element winding is a precondition (see [`Shape`]); nothing here validates it.

mod index;
pub mod select;
pub mod shapes;
mod types;

pub use index::{resolve_element_labels, resolve_element_points, LabelIndex};
pub use types::{
    point2, point3, Addressing, Dim, DimError, Element, ElementLabel, MeshError, Node, NodeLabel,
    Point, Shape,
};

use std::collections::{HashMap, HashSet};

use crate::kernel::element_volume;

#[derive(Clone, Debug)]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    addressing: Addressing,
    index: LabelIndex,
}

impl Mesh {
    /// Assemble a mesh, checking label uniqueness and that all connectivity resolves.
    pub fn new(
        nodes: Vec<Node>,
        elements: Vec<Element>,
        addressing: Addressing,
    ) -> Result<Self, MeshError> {
        let mut seen = HashSet::with_capacity(nodes.len());
        for n in &nodes {
            if !seen.insert(n.label) {
                return Err(MeshError::DuplicateNodeLabel { label: n.label });
            }
        }
        let index = LabelIndex::for_addressing(&nodes, addressing);
        for e in &elements {
            if let Some(&key) = e.connectivity.iter().find(|&&k| index.position(k).is_none()) {
                return Err(MeshError::UnresolvedNode {
                    element: e.label,
                    key,
                });
            }
        }
        Ok(Self {
            nodes,
            elements,
            addressing,
            index,
        })
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
    #[inline]
    pub fn addressing(&self) -> Addressing {
        self.addressing
    }
    #[inline]
    pub fn index(&self) -> &LabelIndex {
        &self.index
    }

    /// Dimensionality of the first element; `None` for an element-free mesh.
    pub fn dim(&self) -> Option<Dim> {
        self.elements.first().map(|e| e.dim)
    }

    /// Vertex coordinates of the element at `position`.
    pub fn element_points(&self, position: usize) -> Option<Vec<Point>> {
        let element = self.elements.get(position)?;
        resolve_element_points(element, &self.nodes, &self.index)
    }

    /// Arithmetic mean of the element's vertices.
    pub fn element_centroid(&self, position: usize) -> Option<Point> {
        let pts = self.element_points(position)?;
        if pts.is_empty() {
            return None;
        }
        let sum = pts.iter().fold(Point::zeros(), |acc, p| acc + p);
        Some(sum / pts.len() as f64)
    }

    /// Element label → position.
    pub fn element_positions(&self) -> HashMap<ElementLabel, usize> {
        self.elements
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.label, pos))
            .collect()
    }

    /// Sum of element volumes (areas in 2D). Unsupported elements contribute zero.
    pub fn total_volume(&self) -> f64 {
        (0..self.elements.len())
            .filter_map(|pos| {
                let pts = self.element_points(pos)?;
                Some(element_volume(&pts, self.elements[pos].dim))
            })
            .sum()
    }

    /// Copy of the mesh with every node coordinate passed through `f`.
    ///
    /// Labels and connectivity are unchanged, so the label index carries over.
    pub fn map_nodes<F>(&self, f: F) -> Mesh
    where
        F: Fn(&Point) -> Point,
    {
        let nodes = self
            .nodes
            .iter()
            .map(|n| Node {
                label: n.label,
                point: f(&n.point),
            })
            .collect();
        Mesh {
            nodes,
            elements: self.elements.clone(),
            addressing: self.addressing,
            index: self.index.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
