use num_traits::{Float, FromPrimitive};

#[cfg(feature = "log")]
use log::debug;

use crate::math::KahanSum;
use super::Statistic;

/// Arithmetic mean, accumulated with **Kahan summation** so that long or
/// wide-ranging datasets do not drift before the deviations are formed.
///
/// The sum runs over offsets from the first observation, which keeps the
/// terms small for data far from zero and makes the mean of a constant
/// sample exactly that constant. Downstream dispersion checks compare
/// against an exact zero and rely on this.
///
/// Undefined (`None`) for an empty dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, F> Statistic<D, Option<F>> for Mean
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        let slice = data.as_ref();

        let Some(&origin) = slice.first() else {
            #[cfg(feature = "log")]
            debug!("mean: empty sample");
            return None;
        };

        let sum: KahanSum<F> = slice.iter().map(|&x| x - origin).collect();

        // Length conversion is exact for practical dataset sizes
        // (f32: exact <= 16M elements; f64: exact <= 9 quadrillion)
        Some(origin + sum.total() / F::from_usize(slice.len())?)
    }
}

/// Arithmetic mean of `values`, `None` when empty.
pub fn mean<F>(values: &[F]) -> Option<F>
where
    F: Float + FromPrimitive,
{
    Mean.compute(&values)
}
