use crate::types::{squared_distance, WeightedPoint};
use rayon::prelude::*;

/// Squared distance from a query point to its nearest center, plus that
/// center's index. Computed fresh per query; extending Centers produces a
/// new instance, so a previously computed Distance never outlives the
/// instance it was computed against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Distance {
    pub squared_distance: f64,
    pub closest_center_index: usize,
}

/// An ordered, immutable sequence of centroids.
///
/// Membership is exact value equality. `extend_with` copies rather than
/// mutates, so the i-th center keeps its index for the lifetime of a given
/// instance and the sequence never shrinks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Centers {
    centers: Vec<Vec<f64>>,
}

impl Centers {
    pub fn new(centers: Vec<Vec<f64>>) -> Self {
        Self { centers }
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn get(&self, index: usize) -> &[f64] {
        &self.centers[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.centers.iter().map(Vec::as_slice)
    }

    /// Squared Euclidean distance to the nearest center and its index.
    ///
    /// Callers must guarantee at least one center exists.
    pub fn distance_to(&self, point: &[f64]) -> Distance {
        assert!(!self.centers.is_empty());

        let mut min = f64::MAX;
        let mut min_idx = 0;
        for (i, center) in self.centers.iter().enumerate() {
            let d = squared_distance(point, center);
            if d < min {
                min = d;
                min_idx = i;
            }
        }

        Distance {
            squared_distance: min,
            closest_center_index: min_idx,
        }
    }

    pub fn contains(&self, point: &[f64]) -> bool {
        self.centers.iter().any(|c| c == point)
    }

    /// A new sequence identical to the receiver plus `point` appended.
    pub fn extend_with(&self, point: Vec<f64>) -> Centers {
        let mut centers = self.centers.clone();
        centers.push(point);
        Centers { centers }
    }

    /// Total weighted squared distance from every point to its nearest
    /// center. The per-point distances are an order-preserving parallel
    /// scatter; the sum stays sequential to keep runs bit-reproducible.
    pub fn clustering_cost(&self, points: &[WeightedPoint]) -> f64 {
        let costs: Vec<f64> = points
            .par_iter()
            .map(|p| p.weight() * self.distance_to(p.vector()).squared_distance)
            .collect();
        costs.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_centers() -> Centers {
        Centers::new(vec![vec![0.0, 0.0], vec![10.0, 0.0]])
    }

    #[test]
    fn distance_to_picks_minimum_and_index() {
        let centers = two_centers();

        let near_first = centers.distance_to(&[1.0, 0.0]);
        assert_eq!(near_first.closest_center_index, 0);
        assert!((near_first.squared_distance - 1.0).abs() < 1e-12);

        let near_second = centers.distance_to(&[9.0, 0.0]);
        assert_eq!(near_second.closest_center_index, 1);
        assert!((near_second.squared_distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_to_tie_prefers_lower_index() {
        let centers = two_centers();
        let midpoint = centers.distance_to(&[5.0, 0.0]);
        assert_eq!(midpoint.closest_center_index, 0);
    }

    #[test]
    #[should_panic]
    fn distance_to_empty_centers_panics() {
        Centers::default().distance_to(&[0.0]);
    }

    #[test]
    fn contains_is_exact_value_equality() {
        let centers = two_centers();
        assert!(centers.contains(&[0.0, 0.0]));
        assert!(centers.contains(&[10.0, 0.0]));
        assert!(!centers.contains(&[10.0, 1e-15]));
    }

    #[test]
    fn extend_with_leaves_receiver_untouched() {
        let centers = two_centers();
        let extended = centers.extend_with(vec![5.0, 5.0]);

        assert_eq!(centers.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(extended.get(2), &[5.0, 5.0]);

        // Existing indices are stable across extension
        assert_eq!(extended.get(0), centers.get(0));
        assert_eq!(extended.get(1), centers.get(1));
    }

    #[test]
    fn clustering_cost_weighted_sum() {
        // Single center {0}; points (0, w=1) and (2, w=1): 1*0 + 1*4 = 4
        let centers = Centers::new(vec![vec![0.0]]);
        let points = vec![
            WeightedPoint::new(vec![0.0], 1.0),
            WeightedPoint::new(vec![2.0], 1.0),
        ];
        assert_eq!(centers.clustering_cost(&points), 4.0);
    }

    #[test]
    fn clustering_cost_respects_weights() {
        let centers = Centers::new(vec![vec![0.0]]);
        let points = vec![
            WeightedPoint::new(vec![2.0], 3.0),
            WeightedPoint::new(vec![1.0], 0.0),
        ];
        // 3*4 + 0*1
        assert_eq!(centers.clustering_cost(&points), 12.0);
    }

    #[test]
    fn clustering_cost_empty_points_is_zero() {
        let centers = two_centers();
        assert_eq!(centers.clustering_cost(&[]), 0.0);
    }
}
