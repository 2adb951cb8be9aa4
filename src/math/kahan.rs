use num_traits::Float;

/// Compensated (Kahan) summation accumulator.
///
/// Every moment in this crate is a sum of powered deviations, and raising a
/// deviation to the third or fourth power widens the dynamic range of the
/// terms considerably. The running compensation term keeps the rounding
/// error of the total bounded independently of the number of terms.
#[derive(Debug, Clone, Copy)]
pub struct KahanSum<F> {
    sum: F,
    c: F,
}

impl<F: Float> KahanSum<F> {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            sum: F::zero(),
            c: F::zero(),
        }
    }

    /// Adds a single term.
    #[inline]
    pub fn add(&mut self, x: F) {
        let y = x - self.c;
        let t = self.sum + y;
        self.c = (t - self.sum) - y;
        self.sum = t;
    }

    /// Returns the compensated total.
    #[inline]
    pub fn total(&self) -> F {
        self.sum
    }
}

impl<F: Float> Default for KahanSum<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Extend<F> for KahanSum<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<F: Float> FromIterator<F> for KahanSum<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_total_is_zero() {
        let acc = KahanSum::<f64>::new();
        assert_eq!(acc.total(), 0.0);
    }

    #[test]
    fn beats_naive_summation() {
        let n = 10_000;
        let data = vec![0.1_f32; n];

        let kahan: KahanSum<f32> = data.iter().copied().collect();
        let naive: f32 = data.iter().sum();
        let expected = 1000.0_f32;

        let kahan_error = (kahan.total() - expected).abs();
        let naive_error = (naive - expected).abs();
        assert!(
            kahan_error < naive_error,
            "Kahan error ({:.2e}) should beat naive error ({:.2e})",
            kahan_error,
            naive_error
        );
        assert_abs_diff_eq!(kahan.total(), expected, epsilon = 1e-3);
    }

    #[test]
    fn extend_continues_the_running_sum() {
        let mut acc: KahanSum<f64> = [1.0, 2.0].into_iter().collect();
        acc.extend([3.0, 4.0]);
        assert_abs_diff_eq!(acc.total(), 10.0, epsilon = 1e-12);
    }
}
