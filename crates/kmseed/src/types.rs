/// A real vector paired with a non-negative sampling weight.
///
/// Produced upstream (feature extraction, or the per-candidate counts of
/// k-means||); consumed read-only by the seeding strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPoint {
    vector: Vec<f64>,
    weight: f64,
}

impl WeightedPoint {
    pub fn new(vector: Vec<f64>, weight: f64) -> Self {
        assert!(weight >= 0.0);
        Self { vector, weight }
    }

    /// A point with weight 1, the common case for raw input data.
    pub fn unit(vector: Vec<f64>) -> Self {
        Self::new(vector, 1.0)
    }

    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

pub(crate) fn squared_distance(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    x.iter().zip(y).fold(0.0, |acc, (a, b)| {
        let d = a - b;
        d.mul_add(d, acc)
    })
}
