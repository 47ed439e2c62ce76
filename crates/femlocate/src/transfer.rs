//! State transfer between two meshes of the same region.
//!
//! Purpose
//! - Plan once, map many fields: [`plan_transfer`] locates every target element
//!   centroid and every target node in the source mesh and records the nodal
//!   weights; [`TransferPlan::interpolate_nodal`] and [`TransferPlan::map_elemental`]
//!   then carry value vectors over without further geometry.
//!
//! Conventions
//! - Both meshes must share one dimensionality and use supported shapes only.
//! - Target nodes outside the source mesh carry no weighting; their interpolated
//!   values are `None`.
//! - Transfers run on one thread over the source's element list in order.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::locate::{is_sentinel, ElementWeights, Locator};
use crate::mesh::{Dim, ElementLabel, Mesh, NodeLabel};

/// Which side of a transfer a mesh is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshRole {
    Source,
    Target,
}

impl fmt::Display for MeshRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshRole::Source => write!(f, "source"),
            MeshRole::Target => write!(f, "target"),
        }
    }
}

/// Errors rejected before any point is located.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferError {
    /// The source mesh has no elements to locate in.
    EmptySource,
    /// An element's `(dim, vertex count)` is not one of the supported shapes.
    UnsupportedElement {
        role: MeshRole,
        element: ElementLabel,
        vertices: usize,
    },
    /// Elements of one mesh disagree on dimensionality.
    MixedDimensions { role: MeshRole },
    /// Source and target have different dimensionality.
    DimensionMismatch { source: Dim, target: Dim },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::EmptySource => write!(f, "source mesh has no elements"),
            TransferError::UnsupportedElement {
                role,
                element,
                vertices,
            } => write!(
                f,
                "{role} element {} has unsupported type ({vertices} vertices)",
                element.0
            ),
            TransferError::MixedDimensions { role } => {
                write!(f, "{role} mesh mixes 2D and 3D elements")
            }
            TransferError::DimensionMismatch { source, target } => write!(
                f,
                "source mesh is {source} but target mesh is {target}"
            ),
        }
    }
}

impl std::error::Error for TransferError {}

/// Reference element of one target element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementReference {
    pub element: ElementLabel,
    pub source: Option<ElementLabel>,
}

/// Source weighting of one target node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeWeighting {
    pub node: NodeLabel,
    pub source: Option<ElementWeights>,
}

/// Result of [`plan_transfer`], in target element and node order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransferPlan {
    pub elements: Vec<ElementReference>,
    pub nodes: Vec<NodeWeighting>,
}

/// Common dimensionality of a mesh's elements; `Ok(None)` for an element-free mesh.
fn uniform_dim(mesh: &Mesh, role: MeshRole) -> Result<Option<Dim>, TransferError> {
    let mut dim = None;
    for e in mesh.elements() {
        if e.shape().is_none() {
            return Err(TransferError::UnsupportedElement {
                role,
                element: e.label,
                vertices: e.connectivity.len(),
            });
        }
        match dim {
            None => dim = Some(e.dim),
            Some(d) if d != e.dim => return Err(TransferError::MixedDimensions { role }),
            Some(_) => {}
        }
    }
    Ok(dim)
}

/// Locate the target mesh in the source mesh.
///
/// Each target element is assigned the source element containing its centroid;
/// each target node gets the source element containing it and the nodal weights
/// over that element's nodes.
///
/// Weight solves use an absolute `1e-7` degeneracy threshold. Hexahedral source
/// elements with edges below about `0.0074` (millimetre meshes in metres, say) give
/// sentinel weights everywhere, so their nodes end up unlocated; scale such meshes
/// up before planning.
pub fn plan_transfer(source: &Mesh, target: &Mesh) -> Result<TransferPlan, TransferError> {
    let source_dim = uniform_dim(source, MeshRole::Source)?.ok_or(TransferError::EmptySource)?;
    if let Some(target_dim) = uniform_dim(target, MeshRole::Target)? {
        if target_dim != source_dim {
            return Err(TransferError::DimensionMismatch {
                source: source_dim,
                target: target_dim,
            });
        }
    }

    let locator = Locator::with_cache(source);

    let elements: Vec<ElementReference> = target
        .elements()
        .iter()
        .enumerate()
        .map(|(pos, e)| ElementReference {
            element: e.label,
            source: target
                .element_centroid(pos)
                .and_then(|c| locator.locate(&c)),
        })
        .collect();

    let nodes: Vec<NodeWeighting> = target
        .nodes()
        .iter()
        .map(|n| {
            let source = locator.weights_at(&n.point).filter(|w| {
                let usable = !w.weights.is_empty() && !is_sentinel(&w.weights);
                if !usable {
                    debug!(node = n.label.0, element = w.element.0, "no usable weights");
                }
                usable
            });
            NodeWeighting {
                node: n.label,
                source,
            }
        })
        .collect();

    let plan = TransferPlan { elements, nodes };
    info!(
        dim = %source_dim,
        source_elements = source.elements().len(),
        nodes_located = plan.located_nodes(),
        nodes_unlocated = plan.unlocated_nodes(),
        elements_located = plan.located_elements(),
        elements_unlocated = plan.unlocated_elements(),
        "transfer planned"
    );
    Ok(plan)
}

impl TransferPlan {
    pub fn located_nodes(&self) -> usize {
        self.nodes.iter().filter(|n| n.source.is_some()).count()
    }

    pub fn unlocated_nodes(&self) -> usize {
        self.nodes.len() - self.located_nodes()
    }

    pub fn located_elements(&self) -> usize {
        self.elements.iter().filter(|e| e.source.is_some()).count()
    }

    pub fn unlocated_elements(&self) -> usize {
        self.elements.len() - self.located_elements()
    }

    /// Weighted sum of source nodal value vectors for every target node.
    ///
    /// `None` for unlocated nodes, and when a source node has no value or value
    /// vectors differ in length.
    pub fn interpolate_nodal(&self, values: &HashMap<NodeLabel, Vec<f64>>) -> Vec<Option<Vec<f64>>> {
        self.nodes
            .iter()
            .map(|n| {
                let w = n.source.as_ref()?;
                let mut out: Option<Vec<f64>> = None;
                for (label, &weight) in w.nodes.iter().zip(&w.weights) {
                    let v = values.get(label)?;
                    let acc = out.get_or_insert_with(|| vec![0.0; v.len()]);
                    if acc.len() != v.len() {
                        return None;
                    }
                    for (a, x) in acc.iter_mut().zip(v) {
                        *a += weight * x;
                    }
                }
                out
            })
            .collect()
    }

    /// Value vector of each target element's reference element.
    pub fn map_elemental(
        &self,
        values: &HashMap<ElementLabel, Vec<f64>>,
    ) -> Vec<Option<Vec<f64>>> {
        self.elements
            .iter()
            .map(|e| e.source.and_then(|s| values.get(&s).cloned()))
            .collect()
    }
}
