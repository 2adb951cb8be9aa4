//! Moment-based descriptive statistics: skewness and kurtosis of a finite
//! sample of real numbers.
//!
//! Every statistic is a pure function of the whole dataset and reports an
//! undefined result as `None` rather than NaN or a panic.
//!
//! ```
//! use momenta::{kurtosis_population, skewness_population, skewness_sample};
//!
//! let data = [4.0_f64, 2.1, 8.0, 21.0, 1.0];
//! assert!((skewness_sample(&data).unwrap() - 1.6994131524).abs() < 1e-9);
//! assert!((skewness_population(&data).unwrap() - 1.1400009992).abs() < 1e-9);
//!
//! assert_eq!(skewness_sample(&[1.0, 2.0]), None);
//! assert_eq!(kurtosis_population(&[42.0]), Some(0.0));
//! ```
//!
//! The same statistics are available as values implementing [`Statistic`],
//! which compose into tuples:
//!
//! ```
//! use momenta::{Kurtosis, Mean, Statistic};
//!
//! let data = vec![1.0, 12.0, 19.5, -5.0, 3.0, 8.0];
//! let (mean, kurtosis): (Option<f64>, Option<f64>) =
//!     (Mean, Kurtosis::population()).compute(&data);
//! assert!((kurtosis.unwrap() - 2.0460654088343166).abs() < 1e-12);
//! assert!(mean.is_some());
//! ```

mod math;

mod sample;
mod statistics;
mod display;

pub use math::*;
pub use crate::sample::{Sample, SampleError, SamplingIterator};
pub use crate::statistics::*;
