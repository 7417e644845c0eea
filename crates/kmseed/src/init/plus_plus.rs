use crate::centers::Centers;
use crate::init::{cumulative_scores, random};
use crate::sample::{avoid_duplicate, pick_cumulative};
use crate::types::WeightedPoint;
use rand::Rng;

/// k-means++ (Arthur & Vassilvitskii 2007): after a weighted single draw,
/// each new center is picked with probability proportional to
/// `weight * d²(point, nearest current center)`, so far-away and heavy
/// points dominate the selection.
///
/// Always returns exactly `num_clusters` centers; when the input holds
/// fewer distinct vectors, the backward duplicate scan bottoms out at
/// index 0 and a vector repeats.
pub fn init(points: &[WeightedPoint], num_clusters: usize, rng: &mut impl Rng) -> Centers {
    assert!(num_clusters > 0);
    assert!(!points.is_empty());

    let mut centers = random::init(points, 1, rng);
    assert_eq!(centers.len(), 1);

    for _ in 1..num_clusters {
        let cumulative = cumulative_scores(points, &centers, 1.0);
        let r = cumulative[points.len()] * rng.random::<f64>();
        let index = avoid_duplicate(pick_cumulative(&cumulative, r), points, &centers);
        centers = centers.extend_with(points[index].vector().to_vec());
    }

    centers
}
