//! Center seeding for weighted k-means.
//!
//! Three interchangeable strategies pick the initial [`Centers`] handed to a
//! Lloyd's-algorithm refinement loop: plain weighted sampling
//! ([`InitStrategy::Random`]), k-means++ ([`InitStrategy::PlusPlus`]) and
//! the oversampling k-means‖ ([`InitStrategy::Parallel`]). All three are
//! deterministic given a fixed random seed.
//!
//! ```
//! use kmseed::{InitStrategy, WeightedPoint};
//!
//! let points = vec![
//!     WeightedPoint::unit(vec![0.0, 0.0]),
//!     WeightedPoint::unit(vec![0.1, 0.0]),
//!     WeightedPoint::unit(vec![10.0, 10.0]),
//!     WeightedPoint::unit(vec![10.1, 10.0]),
//! ];
//!
//! let mut rng = kmseed::rng::new();
//! let centers = InitStrategy::PlusPlus.apply(&points, 2, &mut rng).unwrap();
//!
//! assert_eq!(centers.len(), 2);
//! assert!(centers.clustering_cost(&points) < 1.0);
//! ```

pub mod centers;
pub mod fixture;
pub mod init;
pub mod rng;
pub mod sample;
pub mod types;

use snafu::prelude::*;

pub use centers::{Centers, Distance};
pub use init::InitStrategy;
pub use types::WeightedPoint;

/// Argument-contract violations for a seeding run. These are caller errors;
/// nothing here is retried internally.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SeedError {
    #[snafu(display("number of clusters must be positive"))]
    ZeroClusters,

    #[snafu(display("input point collection is empty"))]
    EmptyPoints,

    #[snafu(display("no input point has positive weight"))]
    ZeroTotalWeight,
}
