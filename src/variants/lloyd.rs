use crate::{api, KMeans, KMeansState, KMeansConfig, Point, Result, memory::*};
use crate::abort_strategy::IterationOutcome;
use log::{debug, trace};

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
    /// Index of, and squared distance to, the centroid closest to **sample**.
    /// Ties resolve to the lowest index: a later centroid only wins when it is strictly closer.
    #[inline(always)]
    pub(crate) fn nearest_centroid(sample: &Point<T>, centroids: &[Point<T>]) -> (usize, T) {
        let mut best = (0, sample.squared_distance(&centroids[0]));
        for (ci, c) in centroids.iter().enumerate().skip(1) {
            let dist = sample.squared_distance(c);
            if dist < best.1 {
                best = (ci, dist);
            }
        }
        best
    }

    /// Assignment step. Computes a fresh label for every sample against the current centroids,
    /// diffs it with the previous labels and returns the amount of changed labels.
    fn update_cluster_assignments(data: &KMeans<T>, state: &mut KMeansState<T>) -> usize {
        let centroids = &state.centroids;
        let new_assignments: Vec<usize> = data.samples.iter()
            .map(|s| Self::nearest_centroid(s, centroids).0)
            .collect();
        let changed = new_assignments.iter().zip(state.assignments.iter())
            .filter(|(new, old)| new != old)
            .count();
        state.assignments = new_assignments;
        changed
    }

    /// Update step. Moves every centroid to the mean of its members, then refreshes the
    /// per-sample centroid distances. Clusters without members keep their previous centroid.
    /// ## Returns
    /// (largest squared centroid movement, new distsum)
    fn update_centroids(data: &KMeans<T>, state: &mut KMeansState<T>) -> (T, T) {
        let mut sums = ClusterSum::<T>::zeroed(state.k);
        for idx in state.order.iter().cloned() {
            let (sample, sum) = (&data.samples[idx], &mut sums[state.assignments[idx]]);
            sum.x += sample.x;
            sum.y += sample.y;
            sum.count += 1;
        }

        let mut max_shift = T::zero();
        state.centroids.iter_mut()
            .zip(sums.iter())
            .zip(state.centroid_frequency.iter_mut())
            .for_each(|((c, sum), cfreq)| {
                *cfreq = sum.count;
                if sum.count == 0 {
                    return;
                }
                let cnt = T::from(sum.count).unwrap();
                let moved = Point::new(sum.x / cnt, sum.y / cnt);
                max_shift = max_shift.max(c.squared_distance(&moved));
                *c = moved;
            });

        let centroids = &state.centroids;
        data.samples.iter()
            .zip(state.assignments.iter().cloned())
            .zip(state.centroid_distances.iter_mut())
            .for_each(|((s, assignment), centroid_dist)| *centroid_dist = s.squared_distance(&centroids[assignment]));
        let new_distsum = state.order.iter().map(|&idx| state.centroid_distances[idx]).sum::<T>();

        (max_shift, new_distsum)
    }

    pub fn calculate<'a, F>(data: &KMeans<T>, k: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        api::validate(data, k, config)?;

        let mut state = KMeansState::new(data.sample_cnt(), k);

        // Initialize clusters and notify subscriber
        init(data, &mut state, config)?;
        debug!("initialized {} centroids for {} samples", k, data.sample_cnt());
        (config.init_done)(&state);
        let mut abort_strategy = config.abort_strategy.create_logic();

        for i in 1..=config.max_iterations {
            let changed = Self::update_cluster_assignments(data, &mut state);
            let (max_shift, new_distsum) = Self::update_centroids(data, &mut state);
            state.iterations = i;
            trace!("iteration {}: {} labels changed, max centroid shift {:e}, distsum {:e}", i, changed, max_shift, new_distsum);

            // Notify subscriber about finished iteration
            (config.iteration_done)(&state, i, new_distsum);
            let proceed = abort_strategy.next(&IterationOutcome { changed, max_shift, distsum: new_distsum });
            state.distsum = new_distsum;
            if !proceed {
                state.converged = true;
                break;
            }
        }

        if state.converged {
            debug!("converged after {} iterations, distsum {}", state.iterations, state.distsum);
        } else {
            debug!("stopped at the iteration limit ({}), distsum {}", config.max_iterations, state.distsum);
        }
        Ok(state)
    }
}
