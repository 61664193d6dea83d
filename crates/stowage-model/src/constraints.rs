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

//! The configuration surface of the optimizer.
//!
//! Two scalars only: the total weight cap, and the minimum item weight below
//! which an item is categorically ineligible. The minimum weight is a domain
//! rule (an item too light to be usefully placed), not a performance knob —
//! the engines treat it as an eligibility test, never as a capacity check.

use crate::{error::ModelError, weight::Weight};

/// Default weight cap: 8.0 kg.
pub const DEFAULT_MAX_WEIGHT: Weight = Weight::from_grams(8_000);

/// Default minimum eligible item weight: 0.5 kg.
pub const DEFAULT_MIN_ITEM_WEIGHT: Weight = Weight::from_grams(500);

/// The search constraints: a weight cap and an eligibility threshold.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Constraints {
    max_weight: Weight,
    min_item_weight: Weight,
}

impl Constraints {
    /// Creates a validated constraint set.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidConstraint` if `max_weight` is not
    /// strictly positive or `min_item_weight` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stowage_model::constraints::Constraints;
    /// # use stowage_model::weight::Weight;
    ///
    /// let constraints =
    ///     Constraints::try_new(Weight::from_kilograms(8.0), Weight::from_kilograms(0.5))
    ///         .unwrap();
    /// assert_eq!(constraints.max_weight().grams(), 8_000);
    /// ```
    pub fn try_new(max_weight: Weight, min_item_weight: Weight) -> Result<Self, ModelError> {
        if !max_weight.is_positive() || min_item_weight.is_negative() {
            return Err(ModelError::InvalidConstraint {
                max_weight,
                min_item_weight,
            });
        }

        Ok(Self {
            max_weight,
            min_item_weight,
        })
    }

    /// Returns the total weight cap.
    #[inline]
    pub fn max_weight(&self) -> Weight {
        self.max_weight
    }

    /// Returns the minimum eligible item weight.
    #[inline]
    pub fn min_item_weight(&self) -> Weight {
        self.min_item_weight
    }

    /// Checks whether an item weight satisfies the eligibility threshold.
    #[inline]
    pub fn is_eligible(&self, item_weight: Weight) -> bool {
        item_weight >= self.min_item_weight
    }
}

impl Default for Constraints {
    /// The default constraint set: 8.0 kg cap, 0.5 kg minimum item weight.
    fn default() -> Self {
        Self {
            max_weight: DEFAULT_MAX_WEIGHT,
            min_item_weight: DEFAULT_MIN_ITEM_WEIGHT,
        }
    }
}

impl std::fmt::Display for Constraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Constraints(max_weight: {}, min_item_weight: {})",
            self.max_weight, self.min_item_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let constraints = Constraints::default();
        assert_eq!(constraints.max_weight(), Weight::from_kilograms(8.0));
        assert_eq!(constraints.min_item_weight(), Weight::from_kilograms(0.5));
    }

    #[test]
    fn test_try_new_accepts_valid_bounds() {
        let constraints =
            Constraints::try_new(Weight::from_grams(1), Weight::ZERO).unwrap();
        assert_eq!(constraints.max_weight().grams(), 1);
        assert_eq!(constraints.min_item_weight(), Weight::ZERO);
    }

    #[test]
    fn test_try_new_rejects_non_positive_cap() {
        for grams in [0i64, -10] {
            let err = Constraints::try_new(Weight::from_grams(grams), Weight::ZERO)
                .unwrap_err();
            assert!(matches!(err, ModelError::InvalidConstraint { .. }));
        }
    }

    #[test]
    fn test_try_new_rejects_negative_threshold() {
        let err = Constraints::try_new(Weight::from_grams(8_000), Weight::from_grams(-1))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_eligibility_is_inclusive_at_threshold() {
        let constraints = Constraints::default();
        assert!(constraints.is_eligible(Weight::from_kilograms(0.5)));
        assert!(!constraints.is_eligible(Weight::from_kilograms(0.4)));
    }
}
