use kmeans2d::*;

fn main() {
    let (sample_cnt, k, max_iter) = (20000, 4, 2500);

    // Generate some random data
    let samples: Vec<Point<f64>> = (0..sample_cnt)
        .map(|_| Point::new(rand::random(), rand::random()))
        .collect();

    let conf = KMeansConfig::build()
        .init_done(&|_| println!("Initialization completed."))
        .iteration_done(&|s, nr, new_distsum|
            println!("Iteration {} - Error: {:.4} -> {:.4} | Improvement: {:.4}",
                nr, s.distsum, new_distsum, s.distsum - new_distsum))
        .max_iterations(max_iter)
        .build();

    let kmean = KMeans::new(samples);
    let result = kmean.kmeans_lloyd(k, KMeans::init_shuffle, &conf).unwrap();

    println!("Centroids: {:?}", result.centroids);
    println!("Error: {}", result.distsum);
}
