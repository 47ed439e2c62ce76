//! Mesh JSON files.
//!
//! Layout:
//! ```json
//! {
//!   "addressing": "label",
//!   "nodes": [{ "label": 1, "x": 0.0, "y": 0.0, "z": 0.0 }],
//!   "elements": [{ "label": 1, "dim": 2, "connectivity": [1, 2, 3] }]
//! }
//! ```
//! `addressing` is `"label"` (default) or `"index"`; `z` defaults to `0.0`.

use anyhow::{Context, Result};
use femlocate::api::{point3, Addressing, Dim, Element, Mesh, Node};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingDto {
    #[default]
    Label,
    Index,
}

impl From<AddressingDto> for Addressing {
    fn from(a: AddressingDto) -> Self {
        match a {
            AddressingDto::Label => Addressing::Label,
            AddressingDto::Index => Addressing::Index,
        }
    }
}

impl From<Addressing> for AddressingDto {
    fn from(a: Addressing) -> Self {
        match a {
            Addressing::Label => AddressingDto::Label,
            Addressing::Index => AddressingDto::Index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeDto {
    pub label: u64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDto {
    pub label: u64,
    pub dim: u8,
    pub connectivity: Vec<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshFile {
    #[serde(default)]
    pub addressing: AddressingDto,
    pub nodes: Vec<NodeDto>,
    pub elements: Vec<ElementDto>,
}

impl MeshFile {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            addressing: mesh.addressing().into(),
            nodes: mesh
                .nodes()
                .iter()
                .map(|n| NodeDto {
                    label: n.label.0,
                    x: n.point.x,
                    y: n.point.y,
                    z: n.point.z,
                })
                .collect(),
            elements: mesh
                .elements()
                .iter()
                .map(|e| ElementDto {
                    label: e.label.0,
                    dim: e.dim.axes() as u8,
                    connectivity: e.connectivity.clone(),
                })
                .collect(),
        }
    }

    pub fn into_mesh(self) -> Result<Mesh> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|n| Node::new(n.label, point3(n.x, n.y, n.z)))
            .collect();
        let elements = self
            .elements
            .into_iter()
            .map(|e| {
                let dim = Dim::try_from(e.dim)
                    .with_context(|| format!("element {}", e.label))?;
                Ok(Element::new(e.label, dim, e.connectivity))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Mesh::new(nodes, elements, self.addressing.into())?)
    }
}

pub fn read_mesh(path: &Path) -> Result<Mesh> {
    let bytes = fs::read(path).with_context(|| format!("reading mesh {}", path.display()))?;
    let file: MeshFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing mesh {}", path.display()))?;
    file.into_mesh()
        .with_context(|| format!("assembling mesh {}", path.display()))
}

pub fn write_mesh(path: &Path, mesh: &Mesh) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = serde_json::to_vec_pretty(&MeshFile::from_mesh(mesh))?;
    fs::write(path, doc).with_context(|| format!("writing mesh {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use femlocate::api::{unit_square, Shape};
    use tempfile::tempdir;

    #[test]
    fn mesh_survives_a_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/square.json");
        let mesh = unit_square(2, Shape::Triangle).unwrap();
        write_mesh(&path, &mesh).unwrap();
        let back = read_mesh(&path).unwrap();
        assert_eq!(back.nodes(), mesh.nodes());
        assert_eq!(back.elements(), mesh.elements());
        assert_eq!(back.addressing(), Addressing::Label);
    }

    #[test]
    fn defaults_and_index_addressing() {
        let text = r#"{
            "addressing": "index",
            "nodes": [
                {"label": 5, "x": 0.0, "y": 0.0},
                {"label": 6, "x": 1.0, "y": 0.0},
                {"label": 7, "x": 0.0, "y": 1.0}
            ],
            "elements": [{"label": 1, "dim": 2, "connectivity": [0, 1, 2]}]
        }"#;
        let file: MeshFile = serde_json::from_str(text).unwrap();
        let mesh = file.into_mesh().unwrap();
        assert_eq!(mesh.addressing(), Addressing::Index);
        assert!((mesh.total_volume() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn bad_dimension_and_dangling_nodes_are_errors() {
        let bad_dim = r#"{"nodes": [], "elements": [{"label": 1, "dim": 4, "connectivity": []}]}"#;
        let file: MeshFile = serde_json::from_str(bad_dim).unwrap();
        let err = file.into_mesh().unwrap_err();
        assert!(format!("{err:#}").contains("unsupported dimensionality 4"));

        let dangling = r#"{
            "nodes": [{"label": 1, "x": 0.0, "y": 0.0}],
            "elements": [{"label": 3, "dim": 2, "connectivity": [1, 2, 9]}]
        }"#;
        let file: MeshFile = serde_json::from_str(dangling).unwrap();
        assert!(file.into_mesh().is_err());
    }
}
