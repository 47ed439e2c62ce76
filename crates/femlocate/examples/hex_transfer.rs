//! Transfer timing probe: hexahedral source, tetrahedral target.
//!
//! Purpose
//! - Give a reproducible data point for "how long does planning a transfer take
//!   for a few thousand target nodes against a few hundred source elements?"
//! - Check on the way that a linear nodal field survives the transfer exactly.

use std::collections::HashMap;
use std::time::Instant;

use femlocate::mesh::shapes::unit_cube;
use femlocate::mesh::Shape;
use femlocate::transfer::plan_transfer;

fn main() {
    let source = unit_cube(8, Shape::Hexahedron).expect("hexahedral source mesh");
    let target = unit_cube(6, Shape::Tetrahedron).expect("tetrahedral target mesh");

    let start = Instant::now();
    let plan = plan_transfer(&source, &target).expect("compatible meshes");
    let plan_ms = start.elapsed().as_secs_f64() * 1e3;

    let field: HashMap<_, _> = source
        .nodes()
        .iter()
        .map(|n| (n.label, vec![n.point.x + 2.0 * n.point.y - n.point.z]))
        .collect();
    let start = Instant::now();
    let values = plan.interpolate_nodal(&field);
    let map_ms = start.elapsed().as_secs_f64() * 1e3;

    let max_err = target
        .nodes()
        .iter()
        .zip(&values)
        .filter_map(|(n, v)| {
            let v = v.as_ref()?;
            Some((v[0] - (n.point.x + 2.0 * n.point.y - n.point.z)).abs())
        })
        .fold(0.0_f64, f64::max);

    println!(
        "source_elements={} target_nodes={} target_elements={}",
        source.elements().len(),
        target.nodes().len(),
        target.elements().len()
    );
    println!(
        "nodes_unlocated={} elements_unlocated={} max_abs_error={max_err:.3e}",
        plan.unlocated_nodes(),
        plan.unlocated_elements()
    );
    println!("plan_time_ms={plan_ms:.3}");
    println!("interpolate_time_ms={map_ms:.3}");
}
