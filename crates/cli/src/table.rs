//! Tabular inputs and outputs (CSV or Parquet, chosen by file extension).
//!
//! Query points: columns `x`, `y` and, for 3D, `z`.
//! Nodal values: a `label` column plus one numeric column per value component.

use anyhow::{bail, Context, Result};
use femlocate::api::{point3, Dim, NodeLabel, Point};
use polars::prelude::*;
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Parquet,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(Format::Csv),
        Some("parquet") => Ok(Format::Parquet),
        _ => bail!(
            "unsupported table format for {} (expected .csv or .parquet)",
            path.display()
        ),
    }
}

pub fn read_frame(path: &Path) -> Result<DataFrame> {
    let lf = match format_of(path)? {
        Format::Csv => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    };
    lf.collect()
        .with_context(|| format!("reading table {}", path.display()))
}

pub fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    let format = format_of(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        Format::Csv => {
            CsvWriter::new(&mut file).finish(df)?;
        }
        Format::Parquet => {
            ParquetWriter::new(file).finish(df)?;
        }
    }
    Ok(())
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column '{name}'"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null in column '{name}' at row {row}")))
        .collect()
}

fn u64_column(df: &DataFrame, name: &str) -> Result<Vec<u64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column '{name}'"))?
        .cast(&DataType::UInt64)?;
    col.u64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null in column '{name}' at row {row}")))
        .collect()
}

/// Query points from `df`; `z` is required for 3D and ignored for 2D.
pub fn points_from_frame(df: &DataFrame, dim: Dim) -> Result<Vec<Point>> {
    let xs = f64_column(df, "x")?;
    let ys = f64_column(df, "y")?;
    let zs = match dim {
        Dim::Three => f64_column(df, "z")?,
        Dim::Two => vec![0.0; xs.len()],
    };
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| point3(x, y, z))
        .collect())
}

pub fn read_points(path: &Path, dim: Dim) -> Result<Vec<Point>> {
    let df = read_frame(path)?;
    points_from_frame(&df, dim).with_context(|| format!("query points {}", path.display()))
}

/// Nodal value vectors keyed by node label, plus the component column names in order.
pub fn nodal_values_from_frame(
    df: &DataFrame,
) -> Result<(Vec<String>, HashMap<NodeLabel, Vec<f64>>)> {
    let labels = u64_column(df, "label")?;
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .filter(|s| s != "label")
        .collect();
    if names.is_empty() {
        bail!("nodal value table has no value columns");
    }
    let columns = names
        .iter()
        .map(|n| f64_column(df, n))
        .collect::<Result<Vec<_>>>()?;
    let mut values = HashMap::with_capacity(labels.len());
    for (row, label) in labels.into_iter().enumerate() {
        let v = columns.iter().map(|c| c[row]).collect();
        if values.insert(NodeLabel(label), v).is_some() {
            bail!("node label {label} appears twice in the value table");
        }
    }
    Ok((names, values))
}

pub fn read_nodal_values(path: &Path) -> Result<(Vec<String>, HashMap<NodeLabel, Vec<f64>>)> {
    let df = read_frame(path)?;
    nodal_values_from_frame(&df).with_context(|| format!("nodal values {}", path.display()))
}
