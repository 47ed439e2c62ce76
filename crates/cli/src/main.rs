use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use femlocate::api::{
    element_volume, plan_transfer, unit_cube, unit_square, Dim, Locator, Mesh, Point, Shape,
};
use polars::prelude::{DataFrame, NamedFrom, Series};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::fmt::SubscriberBuilder;

mod mesh_io;
mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "femlocate", version)]
#[command(about = "Point location and nodal weights on finite-element meshes")]
struct Cmd {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a structured unit-square or unit-cube mesh as JSON
    Grid {
        #[arg(long, value_enum)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 4)]
        cells: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print counts and total area/volume of a mesh
    Volume {
        #[arg(long)]
        mesh: PathBuf,
        /// Also write per-element measures to this JSON file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Find the containing element of every query point (table out)
    Locate {
        #[arg(long)]
        mesh: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Resolve element coordinates per query instead of caching them
        #[arg(long)]
        no_cache: bool,
    },
    /// Locate query points and write their nodal weights (JSON out)
    Weights {
        #[arg(long)]
        mesh: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Locate a target mesh in a source mesh and interpolate nodal values
    Transfer {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        target: PathBuf,
        /// Source nodal values: `label` column plus one column per component
        #[arg(long)]
        values: Option<PathBuf>,
        /// Target node table
        #[arg(long)]
        out: PathBuf,
        /// Target element table (reference source element per element)
        #[arg(long)]
        elements_out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Triangle,
    Quad,
    Tetrahedron,
    Hexahedron,
}

impl From<ShapeArg> for Shape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Triangle => Shape::Triangle,
            ShapeArg::Quad => Shape::Quad,
            ShapeArg::Tetrahedron => Shape::Tetrahedron,
            ShapeArg::Hexahedron => Shape::Hexahedron,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Grid { shape, cells, out } => grid(shape.into(), cells, &out),
        Action::Volume { mesh, out } => volume(&mesh, out.as_deref()),
        Action::Locate {
            mesh,
            points,
            out,
            no_cache,
        } => locate(&mesh, &points, &out, !no_cache),
        Action::Weights { mesh, points, out } => weights(&mesh, &points, &out),
        Action::Transfer {
            source,
            target,
            values,
            out,
            elements_out,
        } => transfer(
            &source,
            &target,
            values.as_deref(),
            &out,
            elements_out.as_deref(),
        ),
        Action::Report => report(),
    }
}

fn mesh_dim(mesh: &Mesh, path: &Path) -> Result<Dim> {
    mesh.dim()
        .with_context(|| format!("mesh {} has no elements", path.display()))
}

fn coordinate_columns(points: &[Point]) -> Vec<Series> {
    ["x", "y", "z"]
        .iter()
        .enumerate()
        .map(|(axis, name)| {
            let values: Vec<f64> = points.iter().map(|p| p[axis]).collect();
            Series::new((*name).into(), values)
        })
        .collect()
}

fn grid(shape: Shape, cells: usize, out: &Path) -> Result<()> {
    let mesh = match shape.dim() {
        Dim::Two => unit_square(cells, shape),
        Dim::Three => unit_cube(cells, shape),
    }
    .context("cell count must be positive")?;
    mesh_io::write_mesh(out, &mesh)?;
    info!(
        ?shape,
        cells,
        nodes = mesh.nodes().len(),
        elements = mesh.elements().len(),
        "grid written"
    );
    write_sidecar(
        out,
        Payload::new("grid", json!({ "shape": format!("{shape:?}"), "cells": cells })),
    )?;
    Ok(())
}

#[derive(Serialize)]
struct ElementMeasure {
    label: u64,
    volume: f64,
}

#[derive(Serialize)]
struct VolumeReport {
    dim: String,
    nodes: usize,
    elements: usize,
    total_volume: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    element_volumes: Vec<ElementMeasure>,
}

fn volume(mesh_path: &Path, out: Option<&Path>) -> Result<()> {
    let mesh = mesh_io::read_mesh(mesh_path)?;
    let dim = mesh_dim(&mesh, mesh_path)?;
    let mut report = VolumeReport {
        dim: dim.to_string(),
        nodes: mesh.nodes().len(),
        elements: mesh.elements().len(),
        total_volume: mesh.total_volume(),
        element_volumes: Vec::new(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(out) = out {
        report.element_volumes = mesh
            .elements()
            .iter()
            .enumerate()
            .filter_map(|(pos, e)| {
                let pts = mesh.element_points(pos)?;
                Some(ElementMeasure {
                    label: e.label.0,
                    volume: element_volume(&pts, e.dim),
                })
            })
            .collect();
        fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        write_sidecar(out, Payload::new("volume", json!({})).with_input(mesh_path))?;
    }
    Ok(())
}

fn locate(mesh_path: &Path, points_path: &Path, out: &Path, cache: bool) -> Result<()> {
    let mesh = mesh_io::read_mesh(mesh_path)?;
    let dim = mesh_dim(&mesh, mesh_path)?;
    let points = table::read_points(points_path, dim)?;
    let locator = if cache {
        Locator::with_cache(&mesh)
    } else {
        Locator::new(&mesh)
    };

    let found: Vec<Option<u64>> = points
        .iter()
        .map(|p| locator.locate(p).map(|label| label.0))
        .collect();
    let unlocated = found.iter().filter(|f| f.is_none()).count();
    if unlocated > 0 {
        warn!(unlocated, "query points outside the mesh");
    }

    let mut columns = coordinate_columns(&points);
    columns.push(Series::new("element".into(), found));
    let mut df = DataFrame::new(columns)?;
    table::write_frame(out, &mut df)?;
    info!(points = points.len(), unlocated, out = %out.display(), "locate done");

    write_sidecar(
        out,
        Payload::new("locate", json!({ "cache": cache }))
            .with_input(mesh_path)
            .with_input(points_path),
    )?;
    Ok(())
}

#[derive(Serialize)]
struct PointWeights {
    point: [f64; 3],
    element: Option<u64>,
    nodes: Vec<u64>,
    weights: Vec<f64>,
}

fn weights(mesh_path: &Path, points_path: &Path, out: &Path) -> Result<()> {
    let mesh = mesh_io::read_mesh(mesh_path)?;
    let dim = mesh_dim(&mesh, mesh_path)?;
    let points = table::read_points(points_path, dim)?;
    let locator = Locator::with_cache(&mesh);

    let rows: Vec<PointWeights> = points
        .iter()
        .map(|p| {
            let point = [p.x, p.y, p.z];
            match locator.weights_at(p) {
                Some(w) => PointWeights {
                    point,
                    element: Some(w.element.0),
                    nodes: w.nodes.iter().map(|n| n.0).collect(),
                    weights: w.weights,
                },
                None => PointWeights {
                    point,
                    element: None,
                    nodes: Vec::new(),
                    weights: Vec::new(),
                },
            }
        })
        .collect();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    info!(points = rows.len(), out = %out.display(), "weights done");

    write_sidecar(
        out,
        Payload::new("weights", json!({}))
            .with_input(mesh_path)
            .with_input(points_path),
    )?;
    Ok(())
}

fn transfer(
    source_path: &Path,
    target_path: &Path,
    values_path: Option<&Path>,
    out: &Path,
    elements_out: Option<&Path>,
) -> Result<()> {
    let source = mesh_io::read_mesh(source_path)?;
    let target = mesh_io::read_mesh(target_path)?;
    let plan = plan_transfer(&source, &target).context("planning transfer")?;

    let labels: Vec<u64> = plan.nodes.iter().map(|n| n.node.0).collect();
    let owners: Vec<Option<u64>> = plan
        .nodes
        .iter()
        .map(|n| n.source.as_ref().map(|w| w.element.0))
        .collect();
    let points: Vec<Point> = target.nodes().iter().map(|n| n.point).collect();

    let mut columns = vec![Series::new("label".into(), labels)];
    columns.extend(coordinate_columns(&points));
    columns.push(Series::new("source_element".into(), owners));

    let mut payload = Payload::new(
        "transfer",
        json!({ "nodes_unlocated": plan.unlocated_nodes(),
                "elements_unlocated": plan.unlocated_elements() }),
    )
    .with_input(source_path)
    .with_input(target_path);

    if let Some(values_path) = values_path {
        let (names, values) = table::read_nodal_values(values_path)?;
        let mapped = plan.interpolate_nodal(&values);
        for (k, name) in names.iter().enumerate() {
            let component: Vec<Option<f64>> = mapped
                .iter()
                .map(|v| v.as_ref().map(|v| v[k]))
                .collect();
            columns.push(Series::new(name.as_str().into(), component));
        }
        let missing = mapped.iter().filter(|v| v.is_none()).count();
        info!(components = names.len(), missing, "nodal values interpolated");
        payload = payload.with_input(values_path);
    }

    let mut df = DataFrame::new(columns)?;
    table::write_frame(out, &mut df)?;
    write_sidecar(out, payload)?;

    if let Some(elements_out) = elements_out {
        let labels: Vec<u64> = plan.elements.iter().map(|e| e.element.0).collect();
        let refs: Vec<Option<u64>> = plan
            .elements
            .iter()
            .map(|e| e.source.map(|s| s.0))
            .collect();
        let mut df = DataFrame::new(vec![
            Series::new("label".into(), labels),
            Series::new("source_element".into(), refs),
        ])?;
        table::write_frame(elements_out, &mut df)?;
        write_sidecar(
            elements_out,
            Payload::new("transfer", json!({ "table": "elements" }))
                .with_input(source_path)
                .with_input(target_path),
        )?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": femlocate::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{df, DataType};
    use tempfile::tempdir;

    #[test]
    fn grid_locate_transfer_pipeline() {
        let dir = tempdir().unwrap();
        let coarse = dir.path().join("coarse.json");
        let fine = dir.path().join("fine.json");
        grid(Shape::Hexahedron, 2, &coarse).unwrap();
        grid(Shape::Tetrahedron, 1, &fine).unwrap();
        assert!(dir.path().join("coarse.provenance.json").exists());

        let points = dir.path().join("points.csv");
        let mut df = df!(
            "x" => [0.25, 0.75, 3.0],
            "y" => [0.25, 0.25, 0.0],
            "z" => [0.25, 0.75, 0.0]
        )
        .unwrap();
        table::write_frame(&points, &mut df).unwrap();

        let located = dir.path().join("out/located.csv");
        locate(&coarse, &points, &located, true).unwrap();
        let df = table::read_frame(&located).unwrap();
        let elements: Vec<Option<i64>> = df
            .column("element")
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(elements, vec![Some(1), Some(6), None]);

        let weights_out = dir.path().join("weights.json");
        weights(&coarse, &points, &weights_out).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&fs::read(&weights_out).unwrap()).unwrap();
        assert_eq!(parsed[0]["element"], 1);
        assert_eq!(parsed[0]["weights"].as_array().unwrap().len(), 8);
        assert!(parsed[2]["element"].is_null());

        let values = dir.path().join("values.parquet");
        let mesh = mesh_io::read_mesh(&coarse).unwrap();
        let labels: Vec<u64> = mesh.nodes().iter().map(|n| n.label.0).collect();
        let field: Vec<f64> = mesh.nodes().iter().map(|n| n.point.x + n.point.z).collect();
        let mut vdf = df!("label" => labels, "u" => field).unwrap();
        table::write_frame(&values, &mut vdf).unwrap();

        let nodes_out = dir.path().join("transfer.csv");
        let elems_out = dir.path().join("transfer_elements.csv");
        transfer(
            &coarse,
            &fine,
            Some(values.as_path()),
            &nodes_out,
            Some(elems_out.as_path()),
        )
        .unwrap();
        let df = table::read_frame(&nodes_out).unwrap();
        let target = mesh_io::read_mesh(&fine).unwrap();
        let u: Vec<Option<f64>> = df
            .column("u")
            .unwrap()
            .cast(&DataType::Float64)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        for (n, v) in target.nodes().iter().zip(u) {
            assert!((v.unwrap() - (n.point.x + n.point.z)).abs() < 1e-9);
        }
        assert_eq!(table::read_frame(&elems_out).unwrap().height(), 5);
    }

    #[test]
    fn volume_report_and_errors() {
        let dir = tempdir().unwrap();
        let mesh = dir.path().join("square.json");
        grid(Shape::Quad, 3, &mesh).unwrap();
        let out = dir.path().join("volume.json");
        volume(&mesh, Some(out.as_path())).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["dim"], "2D");
        assert_eq!(parsed["element_volumes"].as_array().unwrap().len(), 9);
        assert!((parsed["total_volume"].as_f64().unwrap() - 1.0).abs() < 1e-12);

        assert!(grid(Shape::Quad, 0, &dir.path().join("empty.json")).is_err());
        assert!(volume(&dir.path().join("missing.json"), None).is_err());
    }
}
