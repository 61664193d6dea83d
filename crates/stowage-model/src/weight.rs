// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Fixed-point mass primitive.
//!
//! Weights are stored as whole grams in an `i64`. The search compares and
//! accumulates weights in its innermost loop; an integer representation keeps
//! those comparisons exact and the totals deterministic across runs, and it
//! gives the dynamic-programming engine a well-defined weight grid.
//!
//! Fractional kilogram inputs are rounded to the nearest gram at the
//! boundary; everything past that point is integer arithmetic.

/// A mass, stored as whole grams.
///
/// `Weight` is a transparent wrapper around an `i64` gram count. Negative
/// weights are representable so that validation can report them; the
/// `Manifest` and `Constraints` constructors reject them before any engine
/// runs.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Weight(i64);

impl Weight {
    /// The zero weight.
    pub const ZERO: Weight = Weight(0);

    /// Number of grams in one kilogram.
    pub const GRAMS_PER_KILOGRAM: i64 = 1_000;

    /// Creates a `Weight` from a whole gram count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stowage_model::weight::Weight;
    ///
    /// let w = Weight::from_grams(2_500);
    /// assert_eq!(w.grams(), 2_500);
    /// assert_eq!(w.kilograms(), 2.5);
    /// ```
    #[inline(always)]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Creates a `Weight` from fractional kilograms, rounding to the
    /// nearest gram.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stowage_model::weight::Weight;
    ///
    /// let w = Weight::from_kilograms(8.0);
    /// assert_eq!(w.grams(), 8_000);
    /// ```
    #[inline]
    pub fn from_kilograms(kilograms: f64) -> Self {
        Weight((kilograms * Self::GRAMS_PER_KILOGRAM as f64).round() as i64)
    }

    /// Returns the gram count.
    #[inline(always)]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Returns the weight in kilograms.
    #[inline]
    pub fn kilograms(&self) -> f64 {
        self.0 as f64 / Self::GRAMS_PER_KILOGRAM as f64
    }

    /// Checks whether the weight is strictly positive.
    #[inline(always)]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks whether the weight is negative.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Weight) -> Option<Weight> {
        self.0.checked_add(other.0).map(Weight)
    }

    /// Saturating addition.
    #[inline]
    pub fn saturating_add(self, other: Weight) -> Weight {
        Weight(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    #[inline]
    pub fn saturating_sub(self, other: Weight) -> Weight {
        Weight(self.0.saturating_sub(other.0))
    }
}

impl std::ops::Add for Weight {
    type Output = Weight;

    #[inline]
    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Weight {
    type Output = Weight;

    #[inline]
    fn sub(self, rhs: Weight) -> Weight {
        Weight(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, rhs: Weight) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Weight {
    #[inline]
    fn sub_assign(&mut self, rhs: Weight) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc.saturating_add(w))
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg", self.kilograms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gram_and_kilogram_roundtrip() {
        let w = Weight::from_kilograms(2.5);
        assert_eq!(w.grams(), 2_500);
        assert_eq!(w.kilograms(), 2.5);

        let w = Weight::from_grams(8_000);
        assert_eq!(w.kilograms(), 8.0);
    }

    #[test]
    fn test_from_kilograms_rounds_to_nearest_gram() {
        assert_eq!(Weight::from_kilograms(0.4999).grams(), 500);
        assert_eq!(Weight::from_kilograms(0.0004).grams(), 0);
        assert_eq!(Weight::from_kilograms(-1.5).grams(), -1_500);
    }

    #[test]
    fn test_ordering_is_exact() {
        // 0.1 + 0.2 style pitfalls must not exist on the search path.
        let a = Weight::from_kilograms(0.1) + Weight::from_kilograms(0.2);
        let b = Weight::from_kilograms(0.3);
        assert_eq!(a, b);
        assert!(Weight::from_grams(8_001) > Weight::from_grams(8_000));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Weight::from_grams(1).is_positive());
        assert!(!Weight::ZERO.is_positive());
        assert!(Weight::from_grams(-1).is_negative());
        assert!(!Weight::ZERO.is_negative());
    }

    #[test]
    fn test_checked_and_saturating_arithmetic() {
        let max = Weight::from_grams(i64::MAX);
        assert_eq!(max.checked_add(Weight::from_grams(1)), None);
        assert_eq!(max.saturating_add(Weight::from_grams(1)), max);
        assert_eq!(
            Weight::from_grams(5).checked_add(Weight::from_grams(7)),
            Some(Weight::from_grams(12))
        );
        assert_eq!(
            Weight::from_grams(5).saturating_sub(Weight::from_grams(7)),
            Weight::from_grams(-2)
        );
    }

    #[test]
    fn test_sum_saturates() {
        let total: Weight = [Weight::from_grams(i64::MAX), Weight::from_grams(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Weight::from_grams(i64::MAX));
    }

    #[test]
    fn test_display_in_kilograms() {
        assert_eq!(format!("{}", Weight::from_grams(7_500)), "7.500 kg");
        assert_eq!(format!("{}", Weight::ZERO), "0.000 kg");
    }
}
