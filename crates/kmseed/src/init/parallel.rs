use crate::centers::Centers;
use crate::init::{cumulative_scores, plus_plus, random};
use crate::sample::{avoid_duplicate, pick_cumulative};
use crate::types::WeightedPoint;
use log::debug;
use rand::Rng;
use rayon::prelude::*;

/// k-means‖ (Bahmani et al. 2012): oversamples a candidate pool in a small
/// number of rounds, weights each candidate by the number of input points
/// assigned to it, then reclusters the weighted pool down to exactly K via
/// k-means++.
///
/// The per-round score computation is an order-preserving parallel scatter
/// over a read-only Centers snapshot; the picks themselves are sequential,
/// so output is deterministic given a fixed seed.
pub fn init(points: &[WeightedPoint], num_clusters: usize, rng: &mut impl Rng) -> Centers {
    assert!(num_clusters > 0);
    assert!(!points.is_empty());

    let mut centers = random::init(points, 1, rng);
    assert_eq!(centers.len(), 1);

    let cost = centers.clustering_cost(points);
    let oversampling_factor = (0.5 * num_clusters as f64).round() as usize;

    // Round count is the base-10 log of the initial cost, not the natural
    // log; cost <= 1 yields zero rounds and the pool stays at one seed.
    let rounds = cost.log10().round().max(0.0) as usize;

    debug!("k-means|| oversampling: cost={cost}, l={oversampling_factor}, rounds={rounds}");

    for _ in 0..rounds {
        // One cumulative array per round, shared by all l picks; duplicate
        // avoidance still runs against the growing pool.
        let cumulative = cumulative_scores(points, &centers, oversampling_factor as f64);
        for _ in 0..oversampling_factor {
            let r = cumulative[points.len()] * rng.random::<f64>();
            let index = avoid_duplicate(pick_cumulative(&cumulative, r), points, &centers);
            centers = centers.extend_with(points[index].vector().to_vec());
        }
    }

    // Weight every candidate by how many input points it is nearest to,
    // then reduce the weighted pool to exactly K.
    let assignments: Vec<usize> = points
        .par_iter()
        .map(|p| centers.distance_to(p.vector()).closest_center_index)
        .collect();
    let mut counts = vec![0u64; centers.len()];
    for a in assignments {
        counts[a] += 1;
    }

    let reweighted: Vec<WeightedPoint> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| WeightedPoint::new(centers.get(i).to_vec(), count as f64))
        .collect();

    debug!(
        "k-means|| reclustering {} candidates down to {num_clusters}",
        reweighted.len(),
    );

    plus_plus::init(&reweighted, num_clusters, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::InitStrategy;
    use crate::rng;
    use pretty_assertions::assert_eq;

    fn unit_points(values: &[f64]) -> Vec<WeightedPoint> {
        values
            .iter()
            .map(|&v| WeightedPoint::unit(vec![v]))
            .collect()
    }

    /// Four tight clusters far enough apart that the initial clustering
    /// cost is large and several oversampling rounds run.
    fn four_clusters() -> Vec<WeightedPoint> {
        let mut points = Vec::new();
        for &(cx, cy) in &[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0)] {
            for i in 0..25 {
                let offset = i as f64 * 0.01;
                points.push(WeightedPoint::unit(vec![cx + offset, cy + offset]));
            }
        }
        points
    }

    #[test]
    fn returns_exactly_k_centers() {
        let points = four_clusters();

        for k in 1..=6 {
            let centers = init(&points, k, &mut rng::new());
            assert_eq!(centers.len(), k);
        }
    }

    #[test]
    fn identical_points_terminate_with_k_copies() {
        let points = unit_points(&[3.0, 3.0, 3.0, 3.0]);

        let centers = init(&points, 3, &mut rng::new());
        assert_eq!(centers.len(), 3);
        for center in centers.iter() {
            assert_eq!(center, &[3.0]);
        }
    }

    #[test]
    fn zero_rounds_when_cost_at_most_one() {
        // All points within a tiny ball: cost0 << 1, so the pool never
        // grows past the seed and reclustering pads out to k
        let points = unit_points(&[0.0, 1e-4, 2e-4, 3e-4]);

        let centers = init(&points, 2, &mut rng::new());
        assert_eq!(centers.len(), 2);
    }

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let points = four_clusters();

        let a = init(&points, 4, &mut rng::with_seed(5));
        let b = init(&points, 4, &mut rng::with_seed(5));
        assert_eq!(a, b);
    }

    #[test]
    fn mean_cost_no_worse_than_random_seeding() {
        let points = four_clusters();
        let k = 4;
        let seeds = 50;

        let mut parallel_total = 0.0;
        let mut random_total = 0.0;
        for seed in 0..seeds {
            let parallel = InitStrategy::Parallel
                .apply(&points, k, &mut rng::with_seed(seed))
                .unwrap();
            parallel_total += parallel.clustering_cost(&points);

            let random = InitStrategy::Random
                .apply(&points, k, &mut rng::with_seed(seed))
                .unwrap();
            random_total += random.clustering_cost(&points);
        }

        let parallel_mean = parallel_total / seeds as f64;
        let random_mean = random_total / seeds as f64;
        assert!(
            parallel_mean <= random_mean,
            "k-means|| mean cost {parallel_mean} vs random {random_mean}",
        );
    }
}
