//! Numeric building blocks shared by the statistics.

mod kahan;

pub use kahan::KahanSum;
