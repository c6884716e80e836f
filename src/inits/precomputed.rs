use crate::{Error, KMeans, KMeansConfig, KMeansState, Point, Result, memory::*};

pub fn calculate<T: Primitive>(
    _kmean: &KMeans<T>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>, computed: Vec<Point<T>>,
) -> Result<()> {
    if computed.len() != state.k {
        return Err(Error::invalid_parameter(
            "centroids",
            format!("expected {} precomputed centroids, got {}", state.k, computed.len()),
        ));
    }
    if computed.iter().any(|c| !c.is_finite()) {
        return Err(Error::invalid_parameter("centroids", "precomputed centroids must be finite"));
    }
    state.centroids = computed;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn train_with_precomputed_centroids() {
        let samples = vec![0.0f32, 1.0, 10.0, 11.0, 20.0, 21.0].into_iter().map(|x| Point::new(x, 0.0)).collect();
        let centroids = vec![Point::new(0.0, 0.0), Point::new(21.0, 0.0)];

        let kmean = KMeans::new(samples);
        let result = kmean.kmeans_lloyd(2, KMeans::init_precomputed(centroids), &KMeansConfig::default()).unwrap();

        assert_eq!(result.assignments, vec![0, 0, 0, 1, 1, 1]);
        assert_approx_eq!(result.centroids[0].x, 11.0 / 3.0, 1e-5);
        assert_approx_eq!(result.centroids[1].x, 52.0 / 3.0, 1e-5);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn wrong_centroid_count() {
        let samples = vec![Point::new(0.0f64, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let kmean = KMeans::new(samples);
        let res = kmean.kmeans_lloyd(2, KMeans::init_precomputed(vec![Point::new(0.0, 0.0)]), &KMeansConfig::default());
        assert!(matches!(res, Err(Error::InvalidParameter { name: "centroids", .. })));
    }
}
