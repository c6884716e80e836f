//! # kmeans2d - API documentation
//!
//! kmeans2d is a small rust library for k-means clustering of two-dimensional points,
//! using Lloyd's algorithm.
//!
//! ## Algorithm
//! After seeding k centroids, two steps alternate:
//! - **assignment**: every point is assigned to its nearest centroid (squared euclidean distance,
//!   ties go to the lowest cluster index)
//! - **update**: every centroid is moved to the mean of its assigned points. A cluster that lost
//!   all of its points keeps its previous centroid.
//!
//! The calculation stops once an assignment pass did not change any label, or when the iteration
//! limit (1000 by default) is reached. The result is a local optimum of the within-cluster variance,
//! which depends on the seeding.
//!
//! ## Seeding
//! The default seeding ([`KMeans::init_shuffle`]) shuffles the points and uses the first k of them as
//! initial centroids. The shuffled order is kept: points are returned in that order.
//! The random number generator is seeded from the operating system's entropy source, so two runs
//! generally differ. Pass a seeded generator through [`KMeansConfigBuilder::random_generator`] for
//! reproducible results.
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans2d::*;
//!
//! let points = vec![
//!     Point::new(0.0f64, 0.0), Point::new(0.0, 1.0),
//!     Point::new(10.0, 10.0), Point::new(10.0, 11.0),
//! ];
//! for p in cluster(points, 2).unwrap() {
//!     println!("({}, {}) -> cluster {}", p.point.x, p.point.y, p.label);
//! }
//! ```
//!
//! ## Example (seeded, with status callbacks)
//! ```rust
//! use kmeans2d::*;
//! use rand::prelude::*;
//!
//! let mut rnd = StdRng::seed_from_u64(1337);
//! let samples: Vec<Point<f64>> = (0..2000)
//!     .map(|_| Point::new(rnd.gen_range(0.0..1.0), rnd.gen_range(0.0..1.0)))
//!     .collect();
//!
//! let conf = KMeansConfig::build()
//!     .random_generator(StdRng::seed_from_u64(42))
//!     .init_done(&|_| println!("Initialization completed."))
//!     .iteration_done(&|s, nr, new_distsum|
//!         println!("Iteration {} - Error: {:.2} -> {:.2}", nr, s.distsum, new_distsum))
//!     .build();
//!
//! let kmean = KMeans::new(samples);
//! let result = kmean.kmeans_lloyd(4, KMeans::init_shuffle, &conf).unwrap();
//! println!("Centroids: {:?}", result.centroids);
//! println!("Iterations: {} (converged: {})", result.iterations, result.converged);
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct (or the [`cluster`] shortcut). Calling
//! [`KMeans::kmeans_lloyd`] does not mutate it; a new [`KMeansState`] stores the state (and finally
//! the result) of the calculation. The [`io`] module reads and writes the plain text formats used
//! by the `kmeans2d` command-line tool.

#![forbid(unsafe_code)]

#[macro_use] mod helpers;
mod memory;
mod point;
mod error;
mod api;
mod variants;
mod inits;
mod abort_strategy;
pub mod io;

pub use abort_strategy::AbortStrategy;
pub use api::{cluster, cluster_with, KMeans, KMeansConfig, KMeansConfigBuilder, KMeansState, MAX_ITERATIONS};
pub use error::{Error, Result};
pub use memory::Primitive;
pub use point::{LabeledPoint, Point, UNASSIGNED};
