use crate::{memory::*, AbortStrategy, Error, LabeledPoint, Point, Result, UNASSIGNED};
use std::cell::RefCell;
use rand::prelude::*;

/// Default upper bound for the amount of iterations of a k-means calculation.
pub const MAX_ITERATIONS: usize = 1000;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// This is a structure holding various configuration options for the a k-means calculations, such as
/// the random number generator to use, the convergence policy, or a couple of callbacks, that can be set
/// to get status information from a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current[`KMeansState`] after the iteration
    /// - **iteration_id**: Number of the current iteration (starting at 1)
    /// - **distsum**: New distance sum (**state** contains the distsum from the previous iteration)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The abort-strategy to use for the running calculation
    pub(crate) abort_strategy: AbortStrategy<T>,
    /// Hard limit for the amount of iterations
    pub(crate) max_iterations: usize
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            rnd: Box::new(RefCell::new(StdRng::from_entropy())),
            abort_strategy: AbortStrategy::NoLabelChange,
            max_iterations: MAX_ITERATIONS
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("abort_strategy", &self.abort_strategy)
            .field("max_iterations", &self.max_iterations)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    /// ## Default
    /// [`StdRng`] seeded from the operating system's entropy source.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the abort-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::NoLabelChange`]
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy<T>) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// Set the maximum amount of iterations. Reaching this limit is not an error, the
    /// assignment of the last iteration is simply accepted as result.
    /// ## Default
    /// [`MAX_ITERATIONS`] (1000)
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// This is the internally used data-structure, storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **distsum**: The total sum of (squared) distances from all samples to their respective centroids
/// - **centroids**: Calculated cluster centers, indexed by cluster
/// - **centroid_frequency**: Amount of samples in each cluster
/// - **assignments**: Vector mapping each sample (in input order) to its cluster ([`UNASSIGNED`] before the first pass)
/// - **centroid_distances**: Vector containing each sample's (squared) distance to its centroid
/// - **order**: Order in which the samples were processed, and in which they are returned (a permutation of the input indices)
/// - **iterations**: Amount of iterations that were run
/// - **converged**: Whether the abort-strategy ended the calculation (**false** if the iteration limit was hit)
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub centroids: Vec<Point<T>>,
    pub centroid_frequency: Vec<usize>,
    pub assignments: Vec<usize>,
    pub centroid_distances: Vec<T>,
    pub order: Vec<usize>,
    pub iterations: usize,
    pub converged: bool
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(sample_cnt: usize, k: usize) -> Self {
        Self {
            k,
            distsum: T::infinity(),
            centroids: vec![Point::default();k],
            centroid_frequency: vec![0usize;k],
            assignments: vec![UNASSIGNED;sample_cnt],
            centroid_distances: vec![T::infinity();sample_cnt],
            order: (0..sample_cnt).collect(),
            iterations: 0,
            converged: false
        }
    }
}


/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The primitive type
/// of the passed samples will be the type used internaly for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported initialization methods
/// - Shuffle [`KMeans::init_shuffle`]
/// - Precomputed centroids [`KMeans::init_precomputed`]
pub struct KMeans<T: Primitive> {
    pub(crate) samples: Vec<Point<T>>
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: The points to cluster
    pub fn new(samples: Vec<Point<T>>) -> Self {
        Self { samples }
    }

    /// Amount of samples this instance operates on.
    pub fn sample_cnt(&self) -> usize { self.samples.len() }

    /// The samples, in input order.
    pub fn samples(&self) -> &[Point<T>] { &self.samples }

    /// Lloyd's k-means algorithm: alternating assignment and update steps, until the configured
    /// abort-strategy or the iteration limit ends the calculation.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result).
    ///
    /// ## Errors
    /// - [`Error::InvalidParameter`] if `k == 0` or the iteration limit is 0
    /// - [`Error::InsufficientData`] if there are fewer samples than `k`
    /// - [`Error::NonFiniteSample`] if a sample contains NaN or an infinite coordinate
    ///
    /// ## Example
    /// ```rust
    /// use kmeans2d::*;
    ///
    /// let samples = vec![
    ///     Point::new(0.0f64, 0.0), Point::new(0.0, 1.0),
    ///     Point::new(10.0, 10.0), Point::new(10.0, 11.0),
    /// ];
    /// let kmean = KMeans::new(samples);
    /// let result = kmean.kmeans_lloyd(2, KMeans::init_shuffle, &KMeansConfig::default()).unwrap();
    ///
    /// assert_eq!(result.assignments[0], result.assignments[1]);
    /// assert_ne!(result.assignments[0], result.assignments[2]);
    /// println!("Centroids: {:?}", result.centroids);
    /// println!("Error: {}", result.distsum);
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        crate::variants::Lloyd::calculate(self, k, init, config)
    }

    /// Pair every sample with its final label, in the order the calculation processed them.
    pub fn labeled_points(&self, state: &KMeansState<T>) -> Vec<LabeledPoint<T>> {
        state.order.iter().cloned()
            .map(|idx| LabeledPoint { point: self.samples[idx], label: state.assignments[idx] })
            .collect()
    }

    /// Shuffle initialization method
    ///
    /// ## Description
    /// This initialization method draws a uniformly random permutation of the samples, and uses the
    /// first k permuted samples as initial centroids. The permutation also becomes the order in which
    /// the samples are processed and returned.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_shuffle(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<()> {
        crate::inits::shuffle::calculate(kmean, state, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given points as initial centroids (exactly k of them), and keeps the input order of the samples.
    /// Mostly useful to reproduce a known calculation.
    pub fn init_precomputed(centroids: Vec<Point<T>>) -> impl FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'_, T>) -> Result<()> {
        move |kmean, state, config| crate::inits::precomputed::calculate(kmean, state, config, centroids)
    }
}


/// Cluster **points** into **k** clusters, using the default configuration and shuffle initialization.
///
/// Returns the points in processing order (not the input order), each with its 0-based cluster label.
///
/// ## Example
/// ```rust
/// use kmeans2d::*;
///
/// let points = vec![Point::new(0.0f64, 0.0), Point::new(0.1, 0.1), Point::new(9.0, 9.0)];
/// let labeled = cluster(points, 2).unwrap();
/// assert_eq!(labeled.len(), 3);
/// assert!(labeled.iter().all(|p| p.label < 2));
///
/// assert!(matches!(cluster(vec![Point::new(1.0f64, 1.0)], 2), Err(Error::InsufficientData { .. })));
/// ```
pub fn cluster<T: Primitive>(points: Vec<Point<T>>, k: usize) -> Result<Vec<LabeledPoint<T>>> {
    cluster_with(points, k, &KMeansConfig::default())
}

/// Same as [`cluster`], but using the given [`KMeansConfig`].
pub fn cluster_with<T: Primitive>(points: Vec<Point<T>>, k: usize, config: &KMeansConfig<'_, T>) -> Result<Vec<LabeledPoint<T>>> {
    let kmean = KMeans::new(points);
    let state = kmean.kmeans_lloyd(k, KMeans::init_shuffle, config)?;
    Ok(kmean.labeled_points(&state))
}

pub(crate) fn validate<T: Primitive>(kmean: &KMeans<T>, k: usize, config: &KMeansConfig<'_, T>) -> Result<()> {
    if k < 1 {
        return Err(Error::invalid_parameter("k", "must be a positive integer"));
    }
    if config.max_iterations < 1 {
        return Err(Error::invalid_parameter("max_iterations", "must be at least 1"));
    }
    if kmean.sample_cnt() < k {
        return Err(Error::InsufficientData { k, sample_cnt: kmean.sample_cnt() });
    }
    if let Some(index) = kmean.samples.iter().position(|s| !s.is_finite()) {
        return Err(Error::NonFiniteSample { index });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Point<f64>> {
        vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(10.0, 10.0), Point::new(10.0, 11.0)]
    }

    #[test]
    fn rejects_zero_k() {
        let res = cluster(samples(), 0);
        assert!(matches!(res, Err(Error::InvalidParameter { name: "k", .. })));
    }

    #[test]
    fn rejects_insufficient_data() {
        let res = cluster(vec![Point::new(1.0f64, 2.0)], 2);
        assert!(matches!(res, Err(Error::InsufficientData { k: 2, sample_cnt: 1 })));
        let res = cluster(Vec::<Point<f32>>::new(), 1);
        assert!(matches!(res, Err(Error::InsufficientData { k: 1, sample_cnt: 0 })));
    }

    #[test]
    fn zero_k_is_reported_before_missing_data() {
        let res = cluster(Vec::<Point<f64>>::new(), 0);
        assert!(matches!(res, Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn rejects_zero_iteration_limit() {
        let conf = KMeansConfig::build().max_iterations(0).build();
        let res = cluster_with(samples(), 2, &conf);
        assert!(matches!(res, Err(Error::InvalidParameter { name: "max_iterations", .. })));
    }

    #[test]
    fn rejects_non_finite_samples() {
        let mut s = samples();
        s[2].y = f64::NAN;
        assert!(matches!(cluster(s, 2), Err(Error::NonFiniteSample { index: 2 })));
    }

    #[test]
    fn init_done_is_not_called_on_validation_failure() {
        let called = std::cell::Cell::new(false);
        let on_init = |_: &KMeansState<f64>| called.set(true);
        let conf = KMeansConfig::build().init_done(&on_init).build();
        assert!(cluster_with(samples(), 5, &conf).is_err());
        assert!(!called.get());
    }

    #[test]
    fn labeled_points_follow_processing_order() {
        let kmean = KMeans::new(samples());
        let mut state = KMeansState::new(4, 2);
        state.order = vec![3, 1, 0, 2];
        state.assignments = vec![0, 0, 1, 1];

        let labeled = kmean.labeled_points(&state);
        let coords: Vec<_> = labeled.iter().map(|l| (l.point.x, l.point.y, l.label)).collect();
        assert_eq!(coords, vec![(10.0, 11.0, 1), (0.0, 1.0, 0), (0.0, 0.0, 0), (10.0, 10.0, 1)]);
    }

    #[test]
    fn fresh_state_is_unassigned() {
        let state = KMeansState::<f32>::new(3, 2);
        assert_eq!(state.assignments, vec![UNASSIGNED; 3]);
        assert_eq!(state.order, vec![0, 1, 2]);
        assert_eq!(state.centroids.len(), 2);
        assert_eq!(state.iterations, 0);
        assert!(!state.converged);
    }
}
