//! Label → position lookup and element coordinate resolution.
//!
//! Build a [`LabelIndex`] once per node list and pass it to every query; it stays
//! valid as long as the node list is unchanged.

use std::collections::HashMap;

use super::types::{Addressing, Element, Node, NodeLabel, Point};

/// Maps connectivity keys to positions in a node list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelIndex {
    /// Keys are node labels.
    ByLabel(HashMap<u64, usize>),
    /// Keys are positions already (`0..len`).
    ByPosition { len: usize },
}

impl LabelIndex {
    /// Index node labels to their positions. Later duplicates shadow earlier ones;
    /// [`Mesh::new`](super::Mesh::new) rejects duplicates up front.
    pub fn by_label(nodes: &[Node]) -> Self {
        let map = nodes
            .iter()
            .enumerate()
            .map(|(pos, n)| (n.label.0, pos))
            .collect();
        LabelIndex::ByLabel(map)
    }

    #[inline]
    pub fn by_position(len: usize) -> Self {
        LabelIndex::ByPosition { len }
    }

    /// The index matching how a mesh's connectivity addresses `nodes`.
    pub fn for_addressing(nodes: &[Node], addressing: Addressing) -> Self {
        match addressing {
            Addressing::Label => Self::by_label(nodes),
            Addressing::Index => Self::by_position(nodes.len()),
        }
    }

    /// Position of the node addressed by `key`, if any.
    #[inline]
    pub fn position(&self, key: u64) -> Option<usize> {
        match self {
            LabelIndex::ByLabel(map) => map.get(&key).copied(),
            LabelIndex::ByPosition { len } => {
                let pos = usize::try_from(key).ok()?;
                (pos < *len).then_some(pos)
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            LabelIndex::ByLabel(map) => map.len(),
            LabelIndex::ByPosition { len } => *len,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered vertex coordinates of `element`, or `None` if any entry does not resolve.
pub fn resolve_element_points(
    element: &Element,
    nodes: &[Node],
    index: &LabelIndex,
) -> Option<Vec<Point>> {
    element
        .connectivity
        .iter()
        .map(|&key| index.position(key).and_then(|pos| nodes.get(pos)).map(|n| n.point))
        .collect()
}

/// Labels of the nodes of `element` in connectivity order.
pub fn resolve_element_labels(
    element: &Element,
    nodes: &[Node],
    index: &LabelIndex,
) -> Option<Vec<NodeLabel>> {
    element
        .connectivity
        .iter()
        .map(|&key| index.position(key).and_then(|pos| nodes.get(pos)).map(|n| n.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::types::{point3, Dim};

    fn nodes() -> Vec<Node> {
        vec![
            Node::new(10, point3(0.0, 0.0, 0.0)),
            Node::new(20, point3(1.0, 0.0, 0.0)),
            Node::new(30, point3(0.0, 1.0, 0.0)),
            Node::new(40, point3(0.0, 0.0, 1.0)),
        ]
    }

    #[test]
    fn label_index_maps_sparse_labels() {
        let idx = LabelIndex::by_label(&nodes());
        assert_eq!(idx.position(30), Some(2));
        assert_eq!(idx.position(31), None);
        assert_eq!(idx.len(), 4);
    }

    #[test]
    fn position_index_bounds_checks() {
        let idx = LabelIndex::by_position(4);
        assert_eq!(idx.position(3), Some(3));
        assert_eq!(idx.position(4), None);
    }

    #[test]
    fn resolves_points_in_connectivity_order() {
        let ns = nodes();
        let elem = Element::new(1, Dim::Three, vec![40, 10, 20, 30]);
        let idx = LabelIndex::by_label(&ns);
        let pts = resolve_element_points(&elem, &ns, &idx).unwrap();
        assert_eq!(pts[0], point3(0.0, 0.0, 1.0));
        assert_eq!(pts[3], point3(0.0, 1.0, 0.0));
        let labels = resolve_element_labels(&elem, &ns, &idx).unwrap();
        assert_eq!(labels[0], NodeLabel(40));
    }

    #[test]
    fn same_connectivity_differs_by_addressing() {
        let ns = nodes();
        let elem = Element::new(1, Dim::Three, vec![0, 1, 2, 3]);
        let by_pos = LabelIndex::for_addressing(&ns, Addressing::Index);
        assert!(resolve_element_points(&elem, &ns, &by_pos).is_some());
        let by_label = LabelIndex::for_addressing(&ns, Addressing::Label);
        assert!(resolve_element_points(&elem, &ns, &by_label).is_none());
    }
}
