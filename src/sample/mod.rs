mod read;

use num_traits::{Float, FromPrimitive};

use crate::statistics::{MomentSummary, Statistic};

pub use read::SampleError;

/// An owned set of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample<T> {
    /// The observations, in input order.
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of observations in the sample
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Estimate a statistic from the sample data
    pub fn estimate<Output>(&self, statistic: impl Statistic<Self, Output>) -> Output {
        statistic.compute(self)
    }
}

impl<F> Sample<F>
where
    F: Float + FromPrimitive,
{
    /// Every moment statistic of the sample, `None` when it is empty.
    pub fn summary(&self) -> Option<MomentSummary<F>> {
        MomentSummary::from_data(&self.data)
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> From<Vec<T>> for Sample<T> {
    fn from(data: Vec<T>) -> Self {
        Sample::new(data)
    }
}

/// Collects the first `n` items of any iterator into a [`Sample`].
pub trait SamplingIterator: Iterator {
    /// Takes at most `n` items.
    fn sample(self, n: usize) -> Sample<Self::Item>
    where
        Self: Sized,
    {
        self.take(n).collect()
    }
}

impl<I: Iterator> SamplingIterator for I {}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] { &self.data }
}
