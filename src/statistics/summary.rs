use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use super::*;

/// Every moment statistic of a dataset, computed in one call.
///
/// `mean` and `std_dev_population` exist for any non-empty dataset; the
/// remaining fields are `None` exactly when the matching free function
/// would return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentSummary<F> {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: F,
    /// Standard deviation, divisor `n - 1`.
    pub std_dev_sample: Option<F>,
    /// Standard deviation, divisor `n`.
    pub std_dev_population: F,
    /// Bias-corrected skewness (`SKEW`).
    pub skewness_sample: Option<F>,
    /// Population skewness (`SKEW.P`).
    pub skewness_population: Option<F>,
    /// μ₄ / μ₂²
    pub kurtosis: Option<F>,
    /// μ₄ / μ₂² - 3
    pub excess_kurtosis: Option<F>,
}

impl<F> MomentSummary<F>
where
    F: Float + FromPrimitive,
{
    /// Summarises `values`, `None` when empty.
    pub fn from_data(values: &[F]) -> Option<Self> {
        Moments.compute(&values)
    }
}

/// Statistic producing a [`MomentSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Moments;

impl<D, F> Statistic<D, Option<MomentSummary<F>>> for Moments
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<MomentSummary<F>> {
        let location = (
            Mean,
            StandardDeviation::sample(),
            StandardDeviation::population(),
        );
        let shape = (
            (Skewness::sample(), Skewness::population()),
            (Kurtosis::population(), Kurtosis::excess()),
        );

        let (mean, std_dev_sample, std_dev_population): (Option<F>, Option<F>, Option<F>) =
            location.compute(data);
        let ((skewness_sample, skewness_population), (kurtosis, excess_kurtosis)): (
            (Option<F>, Option<F>),
            (Option<F>, Option<F>),
        ) = shape.compute(data);

        Some(MomentSummary {
            n: data.as_ref().len(),
            mean: mean?,
            std_dev_sample,
            std_dev_population: std_dev_population?,
            skewness_sample,
            skewness_population,
            kurtosis,
            excess_kurtosis,
        })
    }
}
