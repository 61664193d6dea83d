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

//! The best-solution slot.
//!
//! A single mutable `Incumbent` is shared by the whole call tree of one
//! search invocation. It is replaced as a whole record whenever a strictly
//! greater total value is observed, so its value is monotonically
//! non-decreasing over the lifetime of a run. The initial incumbent is the
//! empty selection at value zero, which is always feasible.
//!
//! The incumbent is invocation-local. Sharing it between concurrent solver
//! instances would require synchronization that this engine deliberately
//! does not carry.

use crate::state::SearchState;
use stowage_model::{index::ItemIndex, weight::Weight};
use stowage_search::num::ValueNumeric;

/// The best solution observed so far in one search invocation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Incumbent<T> {
    total_value: T,
    total_weight: Weight,
    selected: Vec<ItemIndex>,
}

impl<T> Incumbent<T>
where
    T: ValueNumeric,
{
    /// Creates the initial incumbent: the empty selection at value zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            total_value: T::zero(),
            total_weight: Weight::ZERO,
            selected: Vec::new(),
        }
    }

    /// Replaces the incumbent with a snapshot of `state` if the state's
    /// value is a strict improvement. Returns whether a replacement
    /// happened.
    ///
    /// Equal values never replace: the first solution discovered under the
    /// engine's fixed traversal order wins ties.
    #[inline]
    pub fn try_improve(&mut self, state: &SearchState<T>) -> bool {
        if state.total_value() <= self.total_value {
            return false;
        }

        self.total_value = state.total_value();
        self.total_weight = state.total_weight();
        self.selected.clear();
        self.selected.extend_from_slice(state.selected());
        true
    }

    /// Resets to the initial incumbent without deallocating.
    #[inline]
    pub fn reset(&mut self) {
        self.total_value = T::zero();
        self.total_weight = Weight::ZERO;
        self.selected.clear();
    }

    /// Returns the incumbent value.
    #[inline]
    pub fn total_value(&self) -> T {
        self.total_value
    }

    /// Returns the incumbent weight.
    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the incumbent selection in selection order.
    #[inline]
    pub fn selected(&self) -> &[ItemIndex] {
        &self.selected
    }
}

impl<T> Default for Incumbent<T>
where
    T: ValueNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(items: &[(usize, i64, i64)]) -> SearchState<i64> {
        let mut state = SearchState::new();
        for &(index, grams, value) in items {
            state.push_item(ItemIndex::new(index), Weight::from_grams(grams), value);
        }
        state
    }

    #[test]
    fn test_initial_incumbent_is_empty_at_zero() {
        let incumbent = Incumbent::<i64>::new();
        assert_eq!(incumbent.total_value(), 0);
        assert_eq!(incumbent.total_weight(), Weight::ZERO);
        assert!(incumbent.selected().is_empty());
    }

    #[test]
    fn test_strict_improvement_replaces_whole_record() {
        let mut incumbent = Incumbent::<i64>::new();
        let state = state_with(&[(0, 1_000, 200), (2, 2_000, 150)]);

        assert!(incumbent.try_improve(&state));
        assert_eq!(incumbent.total_value(), 350);
        assert_eq!(incumbent.total_weight(), Weight::from_grams(3_000));
        assert_eq!(
            incumbent.selected(),
            &[ItemIndex::new(0), ItemIndex::new(2)]
        );
    }

    #[test]
    fn test_equal_value_does_not_replace() {
        let mut incumbent = Incumbent::<i64>::new();
        assert!(incumbent.try_improve(&state_with(&[(0, 1_000, 100)])));

        // A different selection with the same value is rejected.
        assert!(!incumbent.try_improve(&state_with(&[(1, 500, 100)])));
        assert_eq!(incumbent.selected(), &[ItemIndex::new(0)]);
    }

    #[test]
    fn test_value_is_monotonic() {
        let mut incumbent = Incumbent::<i64>::new();
        let mut observed = Vec::new();

        for value in [10i64, 5, 30, 30, 20, 40] {
            incumbent.try_improve(&state_with(&[(0, 100, value)]));
            observed.push(incumbent.total_value());
        }

        assert!(observed.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(incumbent.total_value(), 40);
    }

    #[test]
    fn test_reset() {
        let mut incumbent = Incumbent::<i64>::new();
        incumbent.try_improve(&state_with(&[(0, 1_000, 100)]));
        incumbent.reset();

        assert_eq!(incumbent.total_value(), 0);
        assert!(incumbent.selected().is_empty());
    }
}
