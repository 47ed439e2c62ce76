//! Point location and interpolation weights.
//!
//! Purpose
//! - Find the element of a mesh containing a query point (`locate_element`).
//! - Express the point as a convex combination of that element's corners (`nodal_weights`).
//!
//! Conventions
//! - "Not found" is `None`; in-loop failures of the weight solver are the sentinel
//!   vector (every entry `-1.0`), see [`is_sentinel`].
//! - Search is linear in the number of elements per query. Callers with large meshes
//!   pre-filter candidates before calling in.
//! - Everything here is read-only over the mesh; a [`Locator`] may be shared across
//!   threads.

mod filter;
mod search;
mod weights;

pub use filter::possibly_contains;
pub use search::{
    locate_element, locate_position, ElementInfo, ElementInfoCache, Locator,
};
pub use weights::{
    element_nodal_weights, hexahedron_weights, is_sentinel, nodal_weights, quad_weights,
    shape_weights, tetrahedron_weights, triangle_weights, ElementWeights,
};
