mod variance;
mod moment;
mod skewness;
mod kurtosis;

pub use variance::{
    standard_deviation_population, standard_deviation_sample, variance_population,
    variance_sample, StandardDeviation, Variance,
};
pub use moment::{central_moment, CentralMoment};
pub use skewness::{skewness_population, skewness_sample, Skewness, SkewnessKind};
pub use kurtosis::{excess_kurtosis_population, kurtosis_population, Kurtosis};
