//! Selecting and ordering nodes and elements by position.
//!
//! Predicates are plain closures over node coordinates. Orderings use
//! `f64::total_cmp`, are stable, and keep input order among equal keys.

use std::cmp::Ordering;

use super::types::{Element, ElementLabel, Node, NodeLabel, Point};
use super::{resolve_element_points, Mesh};

/// Coordinate axis used as a sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    #[inline]
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Order::Ascending => ord,
            Order::Descending => ord.reverse(),
        }
    }
}

/// Labels of the nodes whose coordinates satisfy `predicate`, in node order.
pub fn select_nodes<F>(nodes: &[Node], predicate: F) -> Vec<NodeLabel>
where
    F: Fn(&Point) -> bool,
{
    nodes
        .iter()
        .filter(|n| predicate(&n.point))
        .map(|n| n.label)
        .collect()
}

/// Labels of the elements all of whose nodes satisfy `predicate`, in element order.
///
/// Elements with unresolved connectivity are never selected.
pub fn select_elements<F>(mesh: &Mesh, predicate: F) -> Vec<ElementLabel>
where
    F: Fn(&Point) -> bool,
{
    mesh.elements()
        .iter()
        .filter(|e| {
            resolve_element_points(e, mesh.nodes(), mesh.index())
                .is_some_and(|pts| pts.iter().all(&predicate))
        })
        .map(|e| e.label)
        .collect()
}

/// Elements of `mesh` with the given labels, in the order of `labels`. Unknown labels
/// are skipped.
pub fn elements_by_label<'m>(mesh: &'m Mesh, labels: &[ElementLabel]) -> Vec<&'m Element> {
    let positions = mesh.element_positions();
    labels
        .iter()
        .filter_map(|l| positions.get(l).map(|&pos| &mesh.elements()[pos]))
        .collect()
}

/// Node labels ordered by coordinate along `axis`.
pub fn sort_nodes_along(nodes: &[Node], axis: Axis, order: Order) -> Vec<NodeLabel> {
    let a = axis.index();
    let mut keyed: Vec<(f64, NodeLabel)> = nodes.iter().map(|n| (n.point[a], n.label)).collect();
    keyed.sort_by(|l, r| order.apply(l.0.total_cmp(&r.0)));
    keyed.into_iter().map(|(_, label)| label).collect()
}

/// Element labels ordered by centroid coordinate along `axis`. Elements with
/// unresolved connectivity are left out.
pub fn sort_elements_along(mesh: &Mesh, axis: Axis, order: Order) -> Vec<ElementLabel> {
    let a = axis.index();
    let mut keyed: Vec<(f64, ElementLabel)> = (0..mesh.elements().len())
        .filter_map(|pos| {
            let c = mesh.element_centroid(pos)?;
            Some((c[a], mesh.elements()[pos].label))
        })
        .collect();
    keyed.sort_by(|l, r| order.apply(l.0.total_cmp(&r.0)));
    keyed.into_iter().map(|(_, label)| label).collect()
}
