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

//! The chosen subset.
//!
//! A `Selection` is the immutable output record of an engine run: the
//! selected item identifiers in selection order plus the aggregate weight
//! and value. Callers never mutate a selection; engines build one exactly
//! once, after their search terminates.

use crate::{item::ItemId, weight::Weight};
use num_traits::Zero;

/// An immutable chosen subset with its totals.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Selection<T> {
    total_value: T,
    total_weight: Weight,
    item_ids: Vec<ItemId>,
}

impl<T> Selection<T>
where
    T: Copy,
{
    /// Constructs a new `Selection`.
    ///
    /// The totals are trusted as given; engines compute them incrementally
    /// during search and snapshot them here.
    #[inline]
    pub fn new(total_value: T, total_weight: Weight, item_ids: Vec<ItemId>) -> Self {
        Self {
            total_value,
            total_weight,
            item_ids,
        }
    }

    /// The empty selection: no items, zero weight, zero value.
    #[inline]
    pub fn empty() -> Self
    where
        T: Zero,
    {
        Self {
            total_value: T::zero(),
            total_weight: Weight::ZERO,
            item_ids: Vec::new(),
        }
    }

    /// Returns the aggregate value.
    #[inline]
    pub fn total_value(&self) -> T {
        self.total_value
    }

    /// Returns the aggregate weight.
    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the selected identifiers in selection order.
    #[inline]
    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    /// Returns the number of selected items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.item_ids.len()
    }

    /// Checks whether nothing was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selection Summary")?;
        writeln!(f, "   Total Value:  {}", self.total_value)?;
        writeln!(f, "   Total Weight: {}", self.total_weight)?;
        writeln!(f, "   Items:        {}", self.num_items())?;

        if self.is_empty() {
            writeln!(f, "   (No items selected)")?;
            return Ok(());
        }

        for (position, id) in self.item_ids.iter().enumerate() {
            writeln!(f, "   [{}] {}", position + 1, id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let selection = Selection::new(
            530_000i64,
            Weight::from_kilograms(5.5),
            vec![ItemId::new("978-1"), ItemId::new("978-4"), ItemId::new("978-3")],
        );

        assert_eq!(selection.total_value(), 530_000);
        assert_eq!(selection.total_weight(), Weight::from_grams(5_500));
        assert_eq!(selection.num_items(), 3);
        assert!(!selection.is_empty());
        assert_eq!(selection.item_ids()[0].as_str(), "978-1");
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::<i64>::empty();
        assert!(selection.is_empty());
        assert_eq!(selection.total_value(), 0);
        assert_eq!(selection.total_weight(), Weight::ZERO);
        assert_eq!(selection.num_items(), 0);
    }

    #[test]
    fn test_display_lists_items_in_selection_order() {
        let selection = Selection::new(
            10i64,
            Weight::from_grams(1_500),
            vec![ItemId::new("b"), ItemId::new("a")],
        );
        let rendered = format!("{}", selection);
        let b_pos = rendered.find("[1] b").unwrap();
        let a_pos = rendered.find("[2] a").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_display_empty() {
        let rendered = format!("{}", Selection::<i64>::empty());
        assert!(rendered.contains("(No items selected)"));
    }
}
