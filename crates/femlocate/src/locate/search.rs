//! Exhaustive element search by minimal volume ratio.

use tracing::{debug, warn};

use crate::cfg::RATIO_LIMIT;
use crate::kernel::{apex_volume, element_volume, ratio_against};
use crate::mesh::{
    resolve_element_points, Element, ElementLabel, LabelIndex, Mesh, Node, Point,
};

use super::filter::possibly_contains;
use super::weights::{element_nodal_weights, ElementWeights};

/// Resolved vertices of one element and its reference measure.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementInfo {
    pub points: Vec<Point>,
    pub volume: f64,
}

/// Per-element [`ElementInfo`], aligned with the element list it was built from.
///
/// Entries are `None` for elements whose connectivity does not resolve. A cache is a
/// snapshot: rebuild it after node coordinates change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementInfoCache {
    entries: Vec<Option<ElementInfo>>,
}

impl ElementInfoCache {
    pub fn build(elements: &[Element], nodes: &[Node], index: &LabelIndex) -> Self {
        let entries = elements
            .iter()
            .map(|e| {
                let points = resolve_element_points(e, nodes, index)?;
                let volume = element_volume(&points, e.dim);
                Some(ElementInfo { points, volume })
            })
            .collect();
        Self { entries }
    }

    #[inline]
    pub fn for_mesh(mesh: &Mesh) -> Self {
        Self::build(mesh.elements(), mesh.nodes(), mesh.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&ElementInfo> {
        self.entries.get(position).and_then(Option::as_ref)
    }
}

/// Position of the element with the smallest volume ratio below 2.0 for `reference`.
///
/// Scans every element in order (no spatial index). Candidates failing the
/// bounding-box test are skipped; unresolved and degenerate elements are skipped
/// and logged at debug level. Ties on the exact minimal ratio go to the first
/// element in iteration order.
///
/// With `cache`, stored points and volumes replace per-query resolution. A cache
/// whose length differs from `elements` is logged and yields `None`.
pub fn locate_position(
    elements: &[Element],
    nodes: &[Node],
    reference: &Point,
    index: &LabelIndex,
    cache: Option<&ElementInfoCache>,
) -> Option<usize> {
    if let Some(cache) = cache {
        if cache.len() != elements.len() {
            warn!(
                cache = cache.len(),
                elements = elements.len(),
                "element info cache does not match element list"
            );
            return None;
        }
    }

    let mut best: Option<usize> = None;
    let mut best_ratio = RATIO_LIMIT;
    for (pos, element) in elements.iter().enumerate() {
        let resolved;
        let (points, cached_volume) = match cache {
            Some(cache) => match cache.get(pos) {
                Some(info) => (info.points.as_slice(), Some(info.volume)),
                None => {
                    debug!(element = element.label.0, "skipping element without cached info");
                    continue;
                }
            },
            None => {
                let Some(pts) = resolve_element_points(element, nodes, index) else {
                    debug!(element = element.label.0, "skipping unresolved element");
                    continue;
                };
                resolved = pts;
                (resolved.as_slice(), None)
            }
        };
        if !possibly_contains(points, reference, element.dim) {
            continue;
        }
        let volume = cached_volume.unwrap_or_else(|| element_volume(points, element.dim));
        let Some(ratio) = ratio_against(apex_volume(points, reference, element.dim), volume)
        else {
            debug!(element = element.label.0, "skipping degenerate element");
            continue;
        };
        if ratio < best_ratio {
            best_ratio = ratio;
            best = Some(pos);
        }
    }
    best
}

/// Label of the element containing `reference`; see [`locate_position`].
pub fn locate_element(
    elements: &[Element],
    nodes: &[Node],
    reference: &Point,
    index: &LabelIndex,
    cache: Option<&ElementInfoCache>,
) -> Option<ElementLabel> {
    locate_position(elements, nodes, reference, index, cache).map(|pos| elements[pos].label)
}

/// Repeated point queries against one mesh, reusing its label index and an
/// optional element info cache.
#[derive(Clone, Debug)]
pub struct Locator<'m> {
    mesh: &'m Mesh,
    cache: Option<ElementInfoCache>,
}

impl<'m> Locator<'m> {
    /// Locator without a cache; each query resolves element points afresh.
    #[inline]
    pub fn new(mesh: &'m Mesh) -> Self {
        Self { mesh, cache: None }
    }

    /// Locator with a prebuilt element info cache.
    pub fn with_cache(mesh: &'m Mesh) -> Self {
        Self {
            mesh,
            cache: Some(ElementInfoCache::for_mesh(mesh)),
        }
    }

    #[inline]
    pub fn mesh(&self) -> &'m Mesh {
        self.mesh
    }

    #[inline]
    pub fn locate_position(&self, reference: &Point) -> Option<usize> {
        locate_position(
            self.mesh.elements(),
            self.mesh.nodes(),
            reference,
            self.mesh.index(),
            self.cache.as_ref(),
        )
    }

    #[inline]
    pub fn locate(&self, reference: &Point) -> Option<ElementLabel> {
        self.locate_position(reference)
            .map(|pos| self.mesh.elements()[pos].label)
    }

    /// Locate `reference` and weight it over the owning element's nodes.
    pub fn weights_at(&self, reference: &Point) -> Option<ElementWeights> {
        let pos = self.locate_position(reference)?;
        let element = &self.mesh.elements()[pos];
        element_nodal_weights(element, reference, self.mesh.nodes(), self.mesh.index())
    }
}
