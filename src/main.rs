//! kmeans2d command-line tool
//!
//! Clusters the points of a text file (`x y` per line) into k clusters and writes
//! `x<TAB>y<TAB>cluster` lines (1-based cluster numbers) to an output file.
//!
//! ```text
//! kmeans2d 3 input.txt
//! kmeans2d 3 input.txt --output clusters.txt --seed 42 -vv
//! ```

use clap::Parser;
use env_logger::Env;
use kmeans2d::{io, Error, KMeans, KMeansConfig, Result, MAX_ITERATIONS};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

/// k-means clustering of two-dimensional points
#[derive(Parser, Debug)]
#[command(name = "kmeans2d", version, about, allow_negative_numbers = true)]
struct Cli {
    /// Number of clusters (at least 1)
    k: i64,

    /// Input file, one `x y` pair per line
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Maximum number of iterations
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iter: usize,

    /// Seed for the random number generator (random if not given)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let k = usize::try_from(cli.k)
        .ok()
        .filter(|&k| k >= 1)
        .ok_or_else(|| Error::InvalidParameter { name: "k", message: format!("must be a positive integer, got {}", cli.k) })?;

    let points = io::load_points::<f64>(&cli.input)?;

    let mut conf = KMeansConfig::build().max_iterations(cli.max_iter);
    if let Some(seed) = cli.seed {
        conf = conf.random_generator(StdRng::seed_from_u64(seed));
    }
    let conf = conf.build();

    let kmean = KMeans::new(points);
    let state = kmean.kmeans_lloyd(k, KMeans::init_shuffle, &conf)?;
    info!(
        "clustered {} points into {} clusters in {} iterations (converged: {}, distsum: {})",
        kmean.sample_cnt(), k, state.iterations, state.converged, state.distsum
    );

    io::save_labeled_points(&cli.output, &kmean.labeled_points(&state))
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&cli) {
        Ok(()) => println!("Clustering complete. Output written to {}", cli.output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
