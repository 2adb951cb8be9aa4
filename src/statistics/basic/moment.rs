use num_traits::{Float, FromPrimitive};

#[cfg(feature = "log")]
use log::debug;

use crate::math::KahanSum;
use crate::statistics::*;

/// Central moment of order k (biased, divisor `n`).
///
/// μₖ = (1/n) Σ(xᵢ - x̄)ᵏ
///
/// Shared by every moment-based statistic of the crate: skewness and
/// kurtosis are closed-form ratios over one or two of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralMoment {
    /// The power k; must be positive.
    pub order: u32,
}

impl CentralMoment {
    /// Central moment of order `order`.
    pub fn new(order: u32) -> Self {
        CentralMoment { order }
    }
}

impl<D, F> Statistic<D, Option<F>> for CentralMoment
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        let slice = data.as_ref();

        if self.order == 0 {
            #[cfg(feature = "log")]
            debug!("central moment: order must be positive");
            return None;
        }
        let exponent = i32::try_from(self.order).ok()?;

        let mean: F = Mean.compute(data)?;
        let sum: KahanSum<F> = slice.iter().map(|&x| (x - mean).powi(exponent)).collect();

        Some(sum.total() / F::from_usize(slice.len())?)
    }
}

/// Central moment of the given positive `order`, `None` for an empty input.
pub fn central_moment<F>(values: &[F], order: u32) -> Option<F>
where
    F: Float + FromPrimitive,
{
    CentralMoment::new(order).compute(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_input_is_undefined() {
        for order in 1..=4 {
            assert_eq!(central_moment::<f64>(&[], order), None);
        }
    }

    #[test]
    fn order_zero_is_undefined() {
        assert_eq!(central_moment(&[1.0_f64, 2.0], 0), None);
    }

    #[test]
    fn first_moment_vanishes() {
        let data = [4.0_f64, 2.1, 8.0, 21.0, 1.0];
        assert_abs_diff_eq!(central_moment(&data, 1).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn second_moment_is_population_variance() {
        let data = [1.0_f64, 12.0, 19.5, -5.0, 3.0, 8.0];
        assert_abs_diff_eq!(
            central_moment(&data, 2).unwrap(),
            variance_population(&data).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn known_values() {
        // deviations from the mean 3: -2, -1, 0, 1, 2
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(central_moment(&data, 2).unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(central_moment(&data, 3).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(central_moment(&data, 4).unwrap(), 34.0 / 5.0, epsilon = 1e-12);

        // deviations from the mean 1: -1, -1, 2
        let data = [0.0_f64, 0.0, 3.0];
        assert_abs_diff_eq!(central_moment(&data, 3).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn single_observation_has_zero_moments() {
        for order in 1..=4 {
            assert_eq!(central_moment(&[-2.5_f64], order), Some(0.0));
        }
    }

    #[test]
    fn statistic_and_function_agree() {
        let data = vec![0.5_f32, 1.5, -2.0, 4.25];
        let via_statistic: Option<f32> = CentralMoment::new(3).compute(&data);
        assert_eq!(via_statistic, central_moment(&data, 3));
    }
}
