use num::{Float, NumCast, Zero};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

/// Floating point type all coordinates, centroids and distances are computed in.
pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + FromStr
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static {}
impl Primitive for f32 {}
impl Primitive for f64 {}

/// Per-cluster accumulator used by the update step: coordinate sums and member count.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ClusterSum<T: Primitive> {
    pub x: T,
    pub y: T,
    pub count: usize,
}
impl<T: Primitive> ClusterSum<T> {
    pub fn zeroed(k: usize) -> Vec<Self> {
        vec![Self { x: T::zero(), y: T::zero(), count: 0 }; k]
    }
}
