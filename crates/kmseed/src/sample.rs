use crate::centers::Centers;
use crate::types::WeightedPoint;
use rand::Rng;

/// Weighted sampling without replacement via the Efraimidis–Spirakis key
/// method: every positive-weight point draws the key `ln(u) / w` for a fresh
/// uniform `u`, and the `n` largest keys win. This matches sequential draws
/// proportional to weight among the points not yet drawn.
///
/// Returns at most `min(n, positive-weight count)` indices in draw order.
/// Zero-weight points are never selected.
pub fn weighted_sample(points: &[WeightedPoint], n: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.weight() > 0.0)
        .map(|(i, p)| (rng.random::<f64>().ln() / p.weight(), i))
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.truncate(n);
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Inverse-CDF lookup over a cumulative score array.
///
/// `cumulative` has length n+1 with `cumulative[0] == 0`; point `i` owns the
/// right-open interval `[cumulative[i], cumulative[i+1])`. Returns the point
/// whose interval holds `r`; a hit exactly on a boundary selects the
/// interval that starts there, so zero-score points (empty intervals) are
/// skipped. A degenerate all-zero array selects index 0 rather than
/// producing NaN.
pub fn pick_cumulative(cumulative: &[f64], r: f64) -> usize {
    let n = cumulative.len() - 1;
    assert!(n > 0);

    if cumulative[n] <= 0.0 {
        return 0;
    }

    // Largest index whose cumulative value is <= r. The clamp only fires
    // when floating-point slop pushes r to or past the total.
    let index = cumulative[1..].partition_point(|&c| c <= r);
    index.min(n - 1)
}

/// Scan backward past points whose vector is already a center.
///
/// If every candidate down to index 0 is already present, index 0 is
/// selected anyway; callers accept the duplicate center rather than loop.
pub fn avoid_duplicate(mut index: usize, points: &[WeightedPoint], centers: &Centers) -> usize {
    while index > 0 && centers.contains(points[index].vector()) {
        index -= 1;
    }
    index
}
