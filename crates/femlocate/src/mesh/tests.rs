use super::select::{
    elements_by_label, select_elements, select_nodes, sort_elements_along, sort_nodes_along, Axis,
    Order,
};
use super::shapes::{unit_cube, unit_square};
use super::*;

fn two_triangles_by_index() -> Mesh {
    let nodes = vec![
        Node::new(10, point2(0.0, 0.0)),
        Node::new(20, point2(1.0, 0.0)),
        Node::new(30, point2(1.0, 1.0)),
        Node::new(40, point2(0.0, 1.0)),
    ];
    let elements = vec![
        Element::new(7, Dim::Two, vec![0, 1, 2]),
        Element::new(8, Dim::Two, vec![0, 2, 3]),
    ];
    Mesh::new(nodes, elements, Addressing::Index).unwrap()
}

#[test]
fn new_rejects_duplicate_labels_and_dangling_connectivity() {
    let dup = vec![Node::new(1, point2(0.0, 0.0)), Node::new(1, point2(1.0, 0.0))];
    assert_eq!(
        Mesh::new(dup, vec![], Addressing::Label).unwrap_err(),
        MeshError::DuplicateNodeLabel { label: NodeLabel(1) }
    );

    let nodes = vec![
        Node::new(1, point2(0.0, 0.0)),
        Node::new(2, point2(1.0, 0.0)),
        Node::new(3, point2(0.0, 1.0)),
    ];
    let bad = vec![Element::new(5, Dim::Two, vec![1, 2, 4])];
    let err = Mesh::new(nodes.clone(), bad, Addressing::Label).unwrap_err();
    assert_eq!(
        err,
        MeshError::UnresolvedNode {
            element: ElementLabel(5),
            key: 4
        }
    );
    // positional addressing: key 3 is out of range for three nodes
    let bad = vec![Element::new(5, Dim::Two, vec![0, 1, 3])];
    assert!(Mesh::new(nodes, bad, Addressing::Index).is_err());
}

#[test]
fn index_addressed_mesh_resolves_by_position() {
    let mesh = two_triangles_by_index();
    assert_eq!(mesh.addressing(), Addressing::Index);
    let pts = mesh.element_points(1).unwrap();
    assert_eq!(pts, vec![point2(0.0, 0.0), point2(1.0, 1.0), point2(0.0, 1.0)]);
    assert!((mesh.total_volume() - 1.0).abs() < 1e-12);
    assert_eq!(mesh.dim(), Some(Dim::Two));
}

#[test]
fn structured_meshes_have_unit_measure() {
    for shape in [Shape::Triangle, Shape::Quad] {
        let m = unit_square(3, shape).unwrap();
        assert_eq!(m.nodes().len(), 16);
        assert!((m.total_volume() - 1.0).abs() < 1e-12, "{shape:?}");
    }
    let hex = unit_cube(2, Shape::Hexahedron).unwrap();
    assert_eq!(hex.elements().len(), 8);
    assert!((hex.total_volume() - 1.0).abs() < 1e-12);
    let tet = unit_cube(2, Shape::Tetrahedron).unwrap();
    assert_eq!(tet.elements().len(), 40);
    assert!((tet.total_volume() - 1.0).abs() < 1e-12);

    assert!(unit_square(2, Shape::Hexahedron).is_none());
    assert!(unit_cube(0, Shape::Hexahedron).is_none());
}

#[test]
fn structured_windings_are_positive() {
    let tri = unit_square(2, Shape::Triangle).unwrap();
    for pos in 0..tri.elements().len() {
        let pts = tri.element_points(pos).unwrap();
        assert!(crate::kernel::element_volume(&pts, Dim::Two) > 0.0);
    }
}

#[test]
fn centroid_and_map_nodes() {
    let mesh = unit_square(1, Shape::Quad).unwrap();
    let c = mesh.element_centroid(0).unwrap();
    assert!((c - point2(0.5, 0.5)).norm() < 1e-12);

    let scaled = mesh.map_nodes(|p| point2(2.0 * p.x, 3.0 * p.y));
    assert!((scaled.total_volume() - 6.0).abs() < 1e-12);
    assert_eq!(scaled.elements(), mesh.elements());
    assert!((mesh.total_volume() - 1.0).abs() < 1e-12);
}

#[test]
fn selection_requires_every_node() {
    let mesh = unit_square(2, Shape::Quad).unwrap();
    let left = select_elements(&mesh, |p| p.x <= 0.5 + 1e-12);
    assert_eq!(left, vec![ElementLabel(1), ElementLabel(3)]);
    let none = select_elements(&mesh, |p| p.x < 0.25);
    assert!(none.is_empty());

    let bottom = select_nodes(mesh.nodes(), |p| p.y == 0.0);
    assert_eq!(bottom, vec![NodeLabel(1), NodeLabel(2), NodeLabel(3)]);
}

#[test]
fn elements_by_label_skips_unknown() {
    let mesh = two_triangles_by_index();
    let found = elements_by_label(&mesh, &[ElementLabel(8), ElementLabel(99), ElementLabel(7)]);
    let labels: Vec<_> = found.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec![ElementLabel(8), ElementLabel(7)]);
}

#[test]
fn sorting_along_axes() {
    let nodes = vec![
        Node::new(1, point3(0.0, 2.0, 0.0)),
        Node::new(2, point3(1.0, 0.0, 0.0)),
        Node::new(3, point3(2.0, 1.0, 0.0)),
        Node::new(4, point3(3.0, 1.0, 0.0)),
    ];
    let asc = sort_nodes_along(&nodes, Axis::Y, Order::Ascending);
    assert_eq!(asc, vec![NodeLabel(2), NodeLabel(3), NodeLabel(4), NodeLabel(1)]);
    let desc = sort_nodes_along(&nodes, Axis::Y, Order::Descending);
    // equal keys keep input order
    assert_eq!(desc, vec![NodeLabel(1), NodeLabel(3), NodeLabel(4), NodeLabel(2)]);

    let mesh = unit_square(2, Shape::Quad).unwrap();
    let by_x = sort_elements_along(&mesh, Axis::X, Order::Descending);
    assert_eq!(
        by_x,
        vec![ElementLabel(2), ElementLabel(4), ElementLabel(1), ElementLabel(3)]
    );
}
