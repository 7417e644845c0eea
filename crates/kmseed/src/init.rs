use crate::centers::Centers;
use crate::types::WeightedPoint;
use crate::{EmptyPointsSnafu, SeedError, ZeroClustersSnafu, ZeroTotalWeightSnafu};
use rand::Rng;
use rayon::prelude::*;
use snafu::ensure;

pub mod parallel;
pub mod plus_plus;
pub mod random;

// References:
// - k-means++: The Advantages of Careful Seeding (D. Arthur, S. Vassilvitskii)
//   https://theory.stanford.edu/~sergei/papers/kMeansPP-soda.pdf
// - Scalable K-Means++ (B. Bahmani et al)
//   https://theory.stanford.edu/~sergei/papers/vldb12-kmpar.pdf

/// The closed set of center-seeding strategies run before Lloyd's algorithm.
///
/// All three share one contract: given a weighted point collection, a target
/// cluster count and a random source, produce a [`Centers`] to hand to the
/// refinement loop. Output is deterministic given a fixed seed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InitStrategy {
    /// K points drawn without replacement, proportional to weight.
    Random,
    /// k-means++: D²-weighted sequential selection.
    PlusPlus,
    /// k-means‖: oversample candidates in parallel-friendly rounds, then
    /// recluster the weighted pool down to K via k-means++.
    Parallel,
}

impl InitStrategy {
    /// Validates the argument contract, then runs the strategy.
    ///
    /// `PlusPlus` and `Parallel` return exactly `num_clusters` centers;
    /// `Random` may return fewer when fewer positive-weight points exist.
    /// When the input holds fewer distinct vectors than `num_clusters`, the
    /// result may repeat a vector (degraded quality, not a failure).
    pub fn apply(
        &self,
        points: &[WeightedPoint],
        num_clusters: usize,
        rng: &mut impl Rng,
    ) -> Result<Centers, SeedError> {
        ensure!(num_clusters > 0, ZeroClustersSnafu);
        ensure!(!points.is_empty(), EmptyPointsSnafu);
        ensure!(
            points.iter().any(|p| p.weight() > 0.0),
            ZeroTotalWeightSnafu
        );

        Ok(match self {
            InitStrategy::Random => random::init(points, num_clusters, rng),
            InitStrategy::PlusPlus => plus_plus::init(points, num_clusters, rng),
            InitStrategy::Parallel => parallel::init(points, num_clusters, rng),
        })
    }
}

/// Cumulative D² score array: entry i+1 accumulates
/// `scale * weight_i * d²(point_i, nearest center)`. Length n+1, entry 0
/// is 0. The per-point scores are an order-preserving parallel scatter; the
/// prefix sum stays sequential so results are reproducible.
pub(crate) fn cumulative_scores(
    points: &[WeightedPoint],
    centers: &Centers,
    scale: f64,
) -> Vec<f64> {
    let scores: Vec<f64> = points
        .par_iter()
        .map(|p| scale * p.weight() * centers.distance_to(p.vector()).squared_distance)
        .collect();

    let mut cumulative = Vec::with_capacity(points.len() + 1);
    cumulative.push(0.0);
    let mut acc = 0.0;
    for s in scores {
        acc += s;
        cumulative.push(acc);
    }
    cumulative
}
