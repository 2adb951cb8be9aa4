mod mean;
mod basic;
mod summary;

pub use mean::{mean, Mean};
pub use basic::*;
pub use summary::{MomentSummary, Moments};

/// A statistic computed from a whole dataset `D`, producing `T`.
///
/// The moment statistics in this crate produce `Option<F>`: `None` marks an
/// input for which the statistic is undefined (too few observations, zero
/// dispersion), never a partial or default value.
pub trait Statistic<D, T> {
    /// Computes the statistic over `data`.
    fn compute(&self, data: &D) -> T;
}

// ===== 0-tuple: Identity statistic (no-op) =====
impl<D> Statistic<D, ()> for () {
    #[inline]
    fn compute(&self, _data: &D) {}
}

// ===== 1-tuple: Transparent wrapper =====
impl<D, T1, S1> Statistic<D, (T1,)> for (S1,)
where
    S1: Statistic<D, T1>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1,) {
        (self.0.compute(data),)
    }
}

// ===== 2-tuple =====
impl<D, T1, T2, S1, S2> Statistic<D, (T1, T2)> for (S1, S2)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2) {
        (self.0.compute(data), self.1.compute(data))
    }
}

// ===== 3-tuple =====
impl<D, T1, T2, T3, S1, S2, S3> Statistic<D, (T1, T2, T3)> for (S1, S2, S3)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
    S3: Statistic<D, T3>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2, T3) {
        (
            self.0.compute(data),
            self.1.compute(data),
            self.2.compute(data),
        )
    }
}
