//! Test-fixture loader: turns delimited numeric text into weight-1 points.
//!
//! Shape-only guarantees; meant for quick large-scale checks and the debug
//! binary, not production ingestion.

use crate::types::WeightedPoint;
use rand::Rng;
use snafu::prelude::*;
use std::path::Path;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum FixtureError {
    #[snafu(display("dimensions must be positive"))]
    ZeroDimensions,

    #[snafu(display("no numeric values found in input"))]
    NoValues,

    #[snafu(display("failed to read {path}: {source}"))]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}

/// Parse whitespace- or comma-delimited scalars into d-dimensional weight-1
/// points. Non-numeric tokens are skipped.
///
/// Scalars are grouped in input order into vectors of `dimensions` entries.
/// A trailing partial vector is completed by reusing earlier values chosen
/// uniformly at random from the parsed scalars.
pub fn parse(
    text: &str,
    dimensions: usize,
    rng: &mut impl Rng,
) -> Result<Vec<WeightedPoint>, FixtureError> {
    ensure!(dimensions > 0, ZeroDimensionsSnafu);

    let values: Vec<f64> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .filter_map(|t| t.parse().ok())
        .collect();
    ensure!(!values.is_empty(), NoValuesSnafu);

    let num_full = values.len() / dimensions;
    let mut points = Vec::with_capacity(num_full + 1);
    for chunk in values.chunks_exact(dimensions) {
        points.push(WeightedPoint::unit(chunk.to_vec()));
    }

    let leftover = &values[num_full * dimensions..];
    if !leftover.is_empty() {
        let mut vector = leftover.to_vec();
        while vector.len() < dimensions {
            vector.push(values[rng.random_range(0..values.len())]);
        }
        points.push(WeightedPoint::unit(vector));
    }

    Ok(points)
}

pub fn load(
    path: &Path,
    dimensions: usize,
    rng: &mut impl Rng,
) -> Result<Vec<WeightedPoint>, FixtureError> {
    let text = std::fs::read_to_string(path).context(ReadFileSnafu {
        path: path.display().to_string(),
    })?;
    parse(&text, dimensions, rng)
}
