use num_traits::{Float, FromPrimitive};

#[cfg(feature = "log")]
use log::debug;

use crate::statistics::*;

/// Population kurtosis (fourth standardized moment).
///
/// β₂ = μ₄ / μ₂²
///
/// - `excess = false` reports β₂ itself (3 for a normal distribution)
/// - `excess = true` reports β₂ - 3 (0 for a normal distribution)
///
/// A single observation is defined to have kurtosis `0` in both forms.
/// An empty dataset, or a constant one of two or more observations
/// (μ₂ = 0), is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Kurtosis {
    /// Subtract 3 from μ₄ / μ₂².
    pub excess: bool,
}

impl Kurtosis {
    /// Kurtosis, in excess form when `excess` is set.
    pub fn new(excess: bool) -> Self {
        Kurtosis { excess }
    }

    /// μ₄ / μ₂²
    pub fn population() -> Self {
        Kurtosis { excess: false }
    }

    /// μ₄ / μ₂² - 3
    pub fn excess() -> Self {
        Kurtosis { excess: true }
    }
}

impl<D, F> Statistic<D, Option<F>> for Kurtosis
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> Option<F> {
        match data.as_ref().len() {
            0 => {
                #[cfg(feature = "log")]
                debug!("kurtosis: empty sample");
                return None;
            }
            1 => return Some(F::zero()),
            _ => {}
        }

        let m2: F = CentralMoment::new(2).compute(data)?;
        if m2 == F::zero() {
            #[cfg(feature = "log")]
            debug!("kurtosis: zero second central moment");
            return None;
        }
        let m4: F = CentralMoment::new(4).compute(data)?;

        let beta2 = m4 / (m2 * m2);
        if self.excess {
            Some(beta2 - F::from_u8(3)?)
        } else {
            Some(beta2)
        }
    }
}

/// Population kurtosis μ₄ / μ₂².
pub fn kurtosis_population<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    Kurtosis::population().compute(&values)
}

/// Population excess kurtosis μ₄ / μ₂² - 3.
pub fn excess_kurtosis_population<F: Float + FromPrimitive>(values: &[F]) -> Option<F> {
    Kurtosis::excess().compute(&values)
}
