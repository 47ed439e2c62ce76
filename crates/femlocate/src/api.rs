//! Curated surface for the command-line front end (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports in callers so moves
//! inside the crate stay local.

// Geometry
pub use crate::kernel::{apex_volume, element_volume, volume_ratio};
// Meshes
pub use crate::mesh::select::{
    elements_by_label, select_elements, select_nodes, sort_elements_along, sort_nodes_along, Axis,
    Order,
};
pub use crate::mesh::shapes::{unit_cube, unit_square};
pub use crate::mesh::{
    point2, point3, Addressing, Dim, DimError, Element, ElementLabel, LabelIndex, Mesh, MeshError,
    Node, NodeLabel, Point, Shape,
};
// Location and weights
pub use crate::locate::{
    element_nodal_weights, is_sentinel, locate_element, nodal_weights, possibly_contains,
    ElementInfoCache, ElementWeights, Locator,
};
// Transfer
pub use crate::transfer::{
    plan_transfer, ElementReference, MeshRole, NodeWeighting, TransferError, TransferPlan,
};
// Sampling
pub use crate::sample::{lattice_in_bounds, points_in_bounds, Bounds3};
