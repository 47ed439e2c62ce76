//! Point location and interpolation weights on low-order finite-element meshes.
//!
//! Modules
//! - `kernel`: areas, volumes and apex volumes of triangles, quads, tetrahedra, hexahedra.
//! - `locate`: bounding-box pre-filter, minimal volume-ratio search, nodal weights.
//! - `mesh`: labelled nodes/elements, label index, selection helpers, structured meshes.
//! - `transfer`: node and element mapping from one mesh onto another.
//! - `sample`: seeded query points.
//!
//! API Policy
//! - The crate has no stable public API yet; `api` collects the surface the CLI uses.

pub mod api;
mod cfg;
pub mod kernel;
pub mod locate;
pub mod mesh;
pub mod sample;
pub mod transfer;

pub use cfg::SENTINEL_WEIGHT;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::locate::{locate_element, nodal_weights, ElementInfoCache, Locator};
    pub use crate::mesh::{
        point2, point3, Addressing, Dim, Element, ElementLabel, Mesh, Node, NodeLabel, Point,
        Shape,
    };
    pub use crate::transfer::{plan_transfer, TransferPlan};
}
