use crate::centers::Centers;
use crate::sample::weighted_sample;
use crate::types::WeightedPoint;
use rand::Rng;

/// Classic random selection: K points drawn without replacement, each
/// point's selection probability proportional to its weight. No iteration,
/// no distance computation.
///
/// Returns fewer than K centers when fewer positive-weight points exist.
pub fn init(points: &[WeightedPoint], num_clusters: usize, rng: &mut impl Rng) -> Centers {
    let chosen = weighted_sample(points, num_clusters, rng);
    Centers::new(
        chosen
            .into_iter()
            .map(|i| points[i].vector().to_vec())
            .collect(),
    )
}
