use kmeans2d::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let (sample_cnt, k) = (20000, 4);

    // Generate some random data around k blob centers
    let mut rnd = StdRng::seed_from_u64(7);
    let samples: Vec<Point<f64>> = (0..sample_cnt)
        .map(|i| {
            let center = (i % k) as f64 * 10.0;
            Point::new(center + rnd.gen_range(-2.0..2.0), center + rnd.gen_range(-2.0..2.0))
        })
        .collect();

    // Calculate kmeans, using the shuffle seeding as initialization-method
    let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(42)).build();
    let kmean = KMeans::new(samples);
    let result = kmean.kmeans_lloyd(k, KMeans::init_shuffle, &conf).unwrap();

    println!("Centroids: {:?}", result.centroids);
    println!("Cluster-Sizes: {:?}", result.centroid_frequency);
    println!("Iterations: {} (converged: {})", result.iterations, result.converged);
    println!("Error: {}", result.distsum);
}
