use crate::memory::Primitive;

/// Label carried by a sample before the first assignment pass.
pub const UNASSIGNED: usize = usize::MAX;

/// A two-dimensional sample (or centroid).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T: Primitive> {
    pub x: T,
    pub y: T,
}
impl<T: Primitive> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance `(x1-x2)^2 + (y1-y2)^2`.
    /// The square root is never taken, nearest-centroid comparisons only need the ordering.
    #[inline(always)]
    pub fn squared_distance(&self, other: &Point<T>) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
impl<T: Primitive> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// A sample together with the (0-based) index of the cluster it was assigned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledPoint<T: Primitive> {
    pub point: Point<T>,
    pub label: usize,
}
