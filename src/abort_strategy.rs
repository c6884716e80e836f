use crate::memory::*;

/// Enum with possible abort strategies.
/// These strategies specify when a running iteration (with the k-means calculation) is aborted.
/// Independent of the strategy, the calculation never runs more than the configured
/// maximum amount of iterations (see [`crate::KMeansConfigBuilder::max_iterations`]).
#[derive(Clone, Copy, Debug)]
pub enum AbortStrategy<T: Primitive> {
	/// This strategy aborts the calculation after the first assignment pass in which no sample
	/// changed its cluster. This is the fixed point of Lloyd's algorithm and the default.
	NoLabelChange,
	/// This strategy aborts the calculation once no centroid moved further than `threshold`
	/// during an update step.
	/// ## Fields:
	/// - **threshold**: Squared distance a centroid has to move, for the iteration to continue (`shift > threshold`)
	CentroidShift { threshold: T },
	/// This strategy aborts the calculation directly after an iteration produced no improvement where `improvement > threshold`
	/// for the first time.
	/// ## Fields:
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	NoImprovement { threshold: T },
}
impl<T: Primitive> Default for AbortStrategy<T> {
	fn default() -> Self { AbortStrategy::NoLabelChange }
}
impl<T: Primitive> AbortStrategy<T> {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic<T>> {
		match *self {
			AbortStrategy::NoLabelChange => Box::new(NoLabelChangeLogic),
			AbortStrategy::CentroidShift{threshold} => Box::new(CentroidShiftLogic { threshold }),
			AbortStrategy::NoImprovement{threshold} => Box::new(NoImprovementLogic {
				threshold,
				prev_error: T::infinity()
			})
		}
	}
}

/// Summary of one finished iteration (assignment + update), as fed into the abort-strategy.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IterationOutcome<T: Primitive> {
	/// Amount of samples whose label changed in the assignment pass
	pub changed: usize,
	/// Largest squared distance any centroid moved in the update step
	pub max_shift: T,
	/// Sum of squared distances from all samples to their updated centroids
	pub distsum: T,
}

pub(crate) trait AbortStrategyLogic<T: Primitive> {
	/// Function that has to be called once an iteration of the calculation ended.
	/// ## Arguments
	/// - **outcome**: Label changes, centroid movement and error (distsum) of the iteration
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation should abort
	fn next(&mut self, outcome: &IterationOutcome<T>) -> bool;
}


pub(crate) struct NoLabelChangeLogic;
impl<T: Primitive> AbortStrategyLogic<T> for NoLabelChangeLogic {
	fn next(&mut self, outcome: &IterationOutcome<T>) -> bool {
		outcome.changed > 0
	}
}


pub(crate) struct CentroidShiftLogic<T: Primitive> {
	threshold: T
}
impl<T: Primitive> AbortStrategyLogic<T> for CentroidShiftLogic<T> {
	fn next(&mut self, outcome: &IterationOutcome<T>) -> bool {
		outcome.max_shift > self.threshold
	}
}


pub(crate) struct NoImprovementLogic<T: Primitive> {
	threshold: T,
	prev_error: T
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementLogic<T> {
	fn next(&mut self, outcome: &IterationOutcome<T>) -> bool {
		let improvement = self.prev_error - outcome.distsum;
		self.prev_error = outcome.distsum;
		improvement > self.threshold
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn outcome<T: Primitive>(changed: usize, max_shift: f64, distsum: f64) -> IterationOutcome<T> {
		IterationOutcome { changed, max_shift: T::from(max_shift).unwrap(), distsum: T::from(distsum).unwrap() }
	}

	#[test] fn test_no_label_change_f32() { test_no_label_change::<f32>(); }
	#[test] fn test_no_label_change_f64() { test_no_label_change::<f64>(); }

	fn test_no_label_change<T: Primitive>() {
		let mut abort_strategy = AbortStrategy::<T>::NoLabelChange.create_logic();
		assert_eq!(abort_strategy.next(&outcome(4, 10.0, 3000.0)), true);
		assert_eq!(abort_strategy.next(&outcome(1, 0.0, 3000.0)), true);
		// distsum and movement are irrelevant, only label changes count
		assert_eq!(abort_strategy.next(&outcome(0, 10.0, 1.0)), false);
	}

	#[test] fn test_centroid_shift_f32() { test_centroid_shift::<f32>(); }
	#[test] fn test_centroid_shift_f64() { test_centroid_shift::<f64>(); }

	fn test_centroid_shift<T: Primitive>() {
		let threshold = T::from(0.0005).unwrap();
		let mut abort_strategy = AbortStrategy::CentroidShift { threshold }.create_logic();
		assert_eq!(abort_strategy.next(&outcome(3, 2.5, 3000.0)), true);
		assert_eq!(abort_strategy.next(&outcome(1, 0.0006, 2999.0)), true);
		assert_eq!(abort_strategy.next(&outcome(1, 0.0005, 2999.0)), false);
		assert_eq!(abort_strategy.next(&outcome(0, 0.0, 2999.0)), false);
	}

	#[test] fn test_no_improvement_f32() { test_no_improvement::<f32>(); }
	#[test] fn test_no_improvement_f64() { test_no_improvement::<f64>(); }

	fn test_no_improvement<T: Primitive>() {
		let threshold = T::from(0.0005).unwrap();
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold }.create_logic();
			assert_eq!(abort_strategy.next(&outcome(1, 0.0, 3000.0)), true);
			assert_eq!(abort_strategy.next(&outcome(1, 0.0, 3000.0)), false);
		}
		{
			let mut abort_strategy = AbortStrategy::NoImprovement { threshold }.create_logic();
			assert_eq!(abort_strategy.next(&outcome(1, 0.0, 3000.0)), true);
			assert_eq!(abort_strategy.next(&outcome(1, 0.0, 2000.0)), true);
			assert_eq!(abort_strategy.next(&outcome(1, 0.0, 1999.99)), true);
			assert_eq!(abort_strategy.next(&outcome(0, 0.0, 1999.99999999)), false);
		}
	}

	#[test]
	fn default_is_no_label_change() {
		assert!(matches!(AbortStrategy::<f64>::default(), AbortStrategy::NoLabelChange));
	}
}
