use num_traits::{Float, FromPrimitive};

#[cfg(feature = "log")]
use log::debug;

use crate::math::KahanSum;
use crate::statistics::*;

/// Variance with a delta-degrees-of-freedom adjustment: `Σ(xᵢ - x̄)² / (n - ddof)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variance {
    /// Subtracted from `n` to form the divisor.
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased)
    /// - `ddof = 1`: sample variance (unbiased, Bessel's correction) — this is the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }

    /// Sample variance, divisor `n - 1`.
    pub fn sample() -> Self {
        Variance { ddof: 1 }
    }

    /// Population variance, divisor `n`.
    pub fn population() -> Self {
        Variance { ddof: 0 }
    }
}

impl Default for Variance {
    /// Returns a `Variance` estimator with `ddof = 1` (unbiased sample variance).
    fn default() -> Self {
        Variance::sample()
    }
}

impl<D, F> Statistic<D, Option<F>> for Variance
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        let slice = data.as_ref();

        // The divisor n - ddof must stay positive
        if slice.len() <= self.ddof {
            #[cfg(feature = "log")]
            debug!("variance(ddof={}): {} observations", self.ddof, slice.len());
            return None;
        }

        let mean: F = Mean.compute(data)?;
        let sq_sum: KahanSum<F> = slice
            .iter()
            .map(|&x| {
                let dev = x - mean;
                dev * dev
            })
            .collect();

        Some(sq_sum.total() / F::from_usize(slice.len() - self.ddof)?)
    }
}

/// Standard deviation: the square root of [`Variance`] with the same `ddof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardDeviation {
    /// Subtracted from `n` to form the variance divisor.
    pub ddof: usize,
}

impl StandardDeviation {
    /// Creates a `StandardDeviation` with the given degrees of freedom adjustment.
    pub fn new(ddof: usize) -> Self {
        StandardDeviation { ddof }
    }

    /// Bessel-corrected, undefined below two observations.
    pub fn sample() -> Self {
        StandardDeviation { ddof: 1 }
    }

    /// Divisor `n`, undefined for an empty dataset.
    pub fn population() -> Self {
        StandardDeviation { ddof: 0 }
    }
}

impl Default for StandardDeviation {
    fn default() -> Self {
        StandardDeviation::sample()
    }
}

impl<D, F> Statistic<D, Option<F>> for StandardDeviation
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        let variance: Option<F> = Variance::new(self.ddof).compute(data);
        variance.map(F::sqrt)
    }
}

/// Sample variance (divisor `n - 1`), `None` below two observations.
pub fn variance_sample<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    Variance::sample().compute(&values)
}

/// Population variance (divisor `n`), `None` when empty.
pub fn variance_population<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    Variance::population().compute(&values)
}

/// Sample standard deviation (divisor `n - 1`), `None` below two observations.
pub fn standard_deviation_sample<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    StandardDeviation::sample().compute(&values)
}

/// Population standard deviation (divisor `n`), `None` when empty.
pub fn standard_deviation_population<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    StandardDeviation::population().compute(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use statrs::statistics::Statistics;

    #[test]
    fn sample_variance_needs_two_observations() {
        assert_eq!(variance_sample::<f64>(&[]), None);
        assert_eq!(variance_sample(&[1.5_f64]), None);
        assert_eq!(standard_deviation_sample(&[1.5_f64]), None);
        assert!(variance_sample(&[1.0_f64, 2.0]).is_some());
    }

    #[test]
    fn population_variance_needs_one_observation() {
        assert_eq!(variance_population::<f64>(&[]), None);
        assert_eq!(variance_population(&[7.0_f64]), Some(0.0));
        assert_eq!(standard_deviation_population(&[7.0_f64]), Some(0.0));
    }

    #[test]
    fn ddof_beyond_length_is_undefined() {
        let v: Option<f64> = Variance::new(3).compute(&vec![1.0, 2.0, 3.0]);
        assert_eq!(v, None);
        let v: Option<f64> = Variance::new(2).compute(&vec![1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(v.unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn known_values() {
        let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(variance_population(&data).unwrap(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(standard_deviation_population(&data).unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(variance_sample(&data).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_statrs_reference() {
        let data = vec![4.0_f64, 2.1, 8.0, 21.0, 1.0, -3.5, 0.25];
        assert_relative_eq!(
            standard_deviation_sample(&data).unwrap(),
            data.iter().std_dev(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            standard_deviation_population(&data).unwrap(),
            data.iter().population_std_dev(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn constant_data_has_zero_dispersion() {
        let data = vec![3.3_f64; 10];
        assert_eq!(standard_deviation_sample(&data), Some(0.0));
        assert_eq!(standard_deviation_population(&data), Some(0.0));
    }
}
