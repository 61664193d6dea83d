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

//! The mutable partial solution.
//!
//! One `SearchState` is owned by a search session and mutated in place as
//! the engine descends and backtracks. Every `push_item` must be matched by
//! a `pop_item` on the same call frame before returning to the parent —
//! strict LIFO discipline. The state is never shared across sibling
//! branches.

use stowage_model::{index::ItemIndex, weight::Weight};
use stowage_search::num::ValueNumeric;

/// The partial solution of an in-flight search: selected indices in
/// selection order, running totals, and the current recursion depth.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchState<T> {
    selected: Vec<ItemIndex>,
    total_weight: Weight,
    total_value: T,
    depth: usize,
}

impl<T> SearchState<T>
where
    T: ValueNumeric,
{
    /// Creates an empty search state.
    #[inline]
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            total_weight: Weight::ZERO,
            total_value: T::zero(),
            depth: 0,
        }
    }

    /// Creates an empty search state with preallocated selection storage.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            selected: Vec::with_capacity(num_items),
            total_weight: Weight::ZERO,
            total_value: T::zero(),
            depth: 0,
        }
    }

    /// Resets the state to empty without deallocating.
    #[inline]
    pub fn reset(&mut self) {
        self.selected.clear();
        self.total_weight = Weight::ZERO;
        self.total_value = T::zero();
        self.depth = 0;
    }

    /// Appends an item to the partial solution, updating the totals.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the item is already selected.
    #[inline]
    pub fn push_item(&mut self, index: ItemIndex, weight: Weight, value: T) {
        debug_assert!(
            !self.selected.contains(&index),
            "called `SearchState::push_item` with already selected item: {}",
            index
        );

        self.selected.push(index);
        self.total_weight += weight;
        self.total_value = self.total_value + value;
    }

    /// Removes the most recently appended item, restoring the totals.
    ///
    /// This is the inverse of `push_item` and must be called with the same
    /// arguments, on the same call frame.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `index` is not the most recent selection.
    #[inline]
    pub fn pop_item(&mut self, index: ItemIndex, weight: Weight, value: T) {
        debug_assert_eq!(
            self.selected.last(),
            Some(&index),
            "called `SearchState::pop_item` out of LIFO order"
        );

        self.selected.pop();
        self.total_weight -= weight;
        self.total_value = self.total_value - value;
    }

    /// Enters a child recursion frame.
    #[inline]
    pub fn descend(&mut self) {
        self.depth += 1;
    }

    /// Leaves a child recursion frame.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the depth is already zero.
    #[inline]
    pub fn ascend(&mut self) {
        debug_assert!(
            self.depth > 0,
            "called `SearchState::ascend` at depth zero"
        );
        self.depth -= 1;
    }

    /// Returns the selected indices in selection order.
    #[inline]
    pub fn selected(&self) -> &[ItemIndex] {
        &self.selected
    }

    /// Returns the running total weight.
    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the running total value.
    #[inline]
    pub fn total_value(&self) -> T {
        self.total_value
    }

    /// Returns the current recursion depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of selected items.
    #[inline]
    pub fn num_selected(&self) -> usize {
        self.selected.len()
    }

    /// Checks whether the partial solution is empty and at depth zero.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.selected.is_empty() && self.depth == 0
    }
}

impl<T> Default for SearchState<T>
where
    T: ValueNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: ValueNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(items: {}, weight: {}, value: {}, depth: {})",
            self.num_selected(),
            self.total_weight,
            self.total_value,
            self.depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_push_pop_are_inverse() {
        let mut state = SearchState::<i64>::new();
        state.push_item(idx(0), Weight::from_grams(1_000), 200_000);
        state.push_item(idx(2), Weight::from_grams(2_000), 150_000);

        assert_eq!(state.num_selected(), 2);
        assert_eq!(state.total_weight(), Weight::from_grams(3_000));
        assert_eq!(state.total_value(), 350_000);

        state.pop_item(idx(2), Weight::from_grams(2_000), 150_000);
        state.pop_item(idx(0), Weight::from_grams(1_000), 200_000);

        assert!(state.is_clean());
        assert_eq!(state.total_weight(), Weight::ZERO);
        assert_eq!(state.total_value(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of LIFO order")]
    fn test_pop_out_of_order_panics() {
        let mut state = SearchState::<i64>::new();
        state.push_item(idx(0), Weight::from_grams(100), 1);
        state.push_item(idx(1), Weight::from_grams(100), 1);
        state.pop_item(idx(0), Weight::from_grams(100), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already selected item")]
    fn test_double_push_panics() {
        let mut state = SearchState::<i64>::new();
        state.push_item(idx(0), Weight::from_grams(100), 1);
        state.push_item(idx(0), Weight::from_grams(100), 1);
    }

    #[test]
    fn test_depth_tracking() {
        let mut state = SearchState::<i64>::new();
        state.descend();
        state.descend();
        assert_eq!(state.depth(), 2);
        state.ascend();
        assert_eq!(state.depth(), 1);
        state.ascend();
        assert!(state.is_clean());
    }

    #[test]
    fn test_reset_keeps_no_residue() {
        let mut state = SearchState::<i64>::preallocated(8);
        state.push_item(idx(3), Weight::from_grams(500), 7);
        state.descend();
        state.reset();

        assert!(state.is_clean());
        assert_eq!(state.total_value(), 0);
        assert_eq!(state.total_weight(), Weight::ZERO);
    }

    #[test]
    fn test_display() {
        let mut state = SearchState::<i64>::new();
        state.push_item(idx(1), Weight::from_grams(2_500), 42);
        assert_eq!(
            format!("{}", state),
            "SearchState(items: 1, weight: 2.500 kg, value: 42, depth: 0)"
        );
    }
}
