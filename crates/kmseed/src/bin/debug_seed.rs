use clap::{Parser, ValueEnum};
use kmseed::{fixture, rng, InitStrategy};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Strategy {
    Random,
    PlusPlus,
    Parallel,
}

impl From<Strategy> for InitStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Random => InitStrategy::Random,
            Strategy::PlusPlus => InitStrategy::PlusPlus,
            Strategy::Parallel => InitStrategy::Parallel,
        }
    }
}

#[derive(Parser)]
struct Args {
    /// Delimited numeric file to form vectors from
    file: PathBuf,

    /// Vector dimensionality
    #[arg(short, long, default_value_t = 2)]
    dimensions: usize,

    /// Number of centers to seed
    #[arg(short, long, default_value_t = 4)]
    k: usize,

    #[arg(short, long, value_enum, default_value = "plus-plus")]
    strategy: Strategy,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let mut rng = rng::with_seed(args.seed);
    let points = fixture::load(&args.file, args.dimensions, &mut rng).unwrap();

    let t = Instant::now();
    let centers = InitStrategy::from(args.strategy)
        .apply(&points, args.k, &mut rng)
        .unwrap();
    let elapsed = t.elapsed();

    let cost = centers.clustering_cost(&points);
    println!(
        "{:?}: {} points, {} centers, cost={cost:.4}, {elapsed:?}",
        args.strategy,
        points.len(),
        centers.len(),
    );
    for i in 0..centers.len() {
        println!("  [{i}] {:?}", centers.get(i));
    }
}
