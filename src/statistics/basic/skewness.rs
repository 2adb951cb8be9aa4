use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::debug;

use crate::statistics::*;

/// Which normalisation of the third standardized moment to report.
///
/// The two are not interchangeable: `Sample` carries the bias correction
/// n² / ((n-1)(n-2)) and divides by the Bessel-corrected deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkewnessKind {
    /// Spreadsheet `SKEW`: n² / ((n-1)(n-2)) · μ₃ / s³
    #[default]
    Sample,
    /// Spreadsheet `SKEW.P`: μ₃ / σ³
    Population,
}

/// Skewness (third standardized moment).
///
/// Undefined (`None`) below three observations and for a dataset with zero
/// standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Skewness {
    /// Normalisation to report.
    pub kind: SkewnessKind,
}

impl Skewness {
    /// Skewness with an explicit normalisation.
    pub fn new(kind: SkewnessKind) -> Self {
        Skewness { kind }
    }

    /// Bias-corrected `SKEW` variant.
    pub fn sample() -> Self {
        Skewness { kind: SkewnessKind::Sample }
    }

    /// Uncorrected `SKEW.P` variant.
    pub fn population() -> Self {
        Skewness { kind: SkewnessKind::Population }
    }
}

impl<D, F> Statistic<D, Option<F>> for Skewness
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        let n = data.as_ref().len();
        if n < 3 {
            #[cfg(feature = "log")]
            debug!("skewness({:?}): {} observations, need 3", self.kind, n);
            return None;
        }

        let std_dev: F = match self.kind {
            SkewnessKind::Sample => StandardDeviation::sample().compute(data)?,
            SkewnessKind::Population => StandardDeviation::population().compute(data)?,
        };
        if std_dev == F::zero() {
            #[cfg(feature = "log")]
            debug!("skewness({:?}): zero standard deviation", self.kind);
            return None;
        }

        let m3: F = CentralMoment::new(3).compute(data)?;
        let standardized = m3 / std_dev.powi(3);

        match self.kind {
            SkewnessKind::Sample => {
                let n_f = F::from_usize(n)?;
                let n1 = n_f - F::one();
                let n2 = n1 - F::one();
                Some((n_f * n_f) / (n1 * n2) * standardized)
            }
            SkewnessKind::Population => Some(standardized),
        }
    }
}

/// Bias-corrected sample skewness (`SKEW`).
pub fn skewness_sample<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    Skewness::sample().compute(&values)
}

/// Population skewness (`SKEW.P`).
pub fn skewness_population<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    Skewness::population().compute(&values)
}
