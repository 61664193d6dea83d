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

//! The validated candidate set.
//!
//! A `Manifest` is the finite, materialized item sequence the engines
//! consume. The engines do not stream or lazily fetch items: both the
//! candidate ordering step and the optimistic-bound computation need random
//! access to the remaining items, so the full set is resolved up front.
//!
//! Construction is the validation boundary. A `Manifest` that exists
//! contains only items with strictly positive weight and pairwise-distinct
//! identifiers; the engines rely on this and perform no re-validation
//! mid-search.

use crate::{error::ModelError, index::ItemIndex, item::Item};
use rustc_hash::FxHashSet;

/// A finite, validated sequence of candidate items.
///
/// Input order is preserved; engines that reorder candidates do so on index
/// permutations of their own, never by mutating the manifest.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Manifest<T> {
    items: Vec<Item<T>>,
}

impl<T> Manifest<T>
where
    T: Copy,
{
    /// Builds a manifest from an item list, validating every item.
    ///
    /// An empty list is valid: the search over an empty manifest returns an
    /// empty selection, which is not an error.
    ///
    /// # Errors
    ///
    /// - `ModelError::InvalidItem` if any item has weight ≤ 0.
    /// - `ModelError::DuplicateItem` if two items share an identifier.
    pub fn try_from_items(items: Vec<Item<T>>) -> Result<Self, ModelError> {
        let mut seen = FxHashSet::default();
        for item in &items {
            if !item.weight().is_positive() {
                return Err(ModelError::InvalidItem {
                    id: item.id().clone(),
                    weight: item.weight(),
                });
            }
            if !seen.insert(item.id().clone()) {
                return Err(ModelError::DuplicateItem {
                    id: item.id().clone(),
                });
            }
        }

        Ok(Self { items })
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the manifest is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn item(&self, index: ItemIndex) -> &Item<T> {
        debug_assert!(
            index.get() < self.items.len(),
            "called `Manifest::item` with index out of bounds: the len is {} but the index is {}",
            self.items.len(),
            index.get()
        );

        &self.items[index.get()]
    }

    /// Returns the full item slice in input order.
    #[inline]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Iterates over `(index, item)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemIndex, &Item<T>)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ItemIndex::new(i), item))
    }
}

impl<T> std::fmt::Display for Manifest<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Manifest ({} items)", self.num_items())?;
        for (index, item) in self.iter() {
            writeln!(f, "   [{}] {}", index.get(), item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::Weight;

    fn kg(kilograms: f64) -> Weight {
        Weight::from_kilograms(kilograms)
    }

    #[test]
    fn test_valid_manifest() {
        let manifest = Manifest::try_from_items(vec![
            Item::new("978-1", kg(1.0), 200_000i64),
            Item::new("978-2", kg(3.0), 50_000i64),
        ])
        .unwrap();

        assert_eq!(manifest.num_items(), 2);
        assert!(!manifest.is_empty());
        assert_eq!(manifest.item(ItemIndex::new(0)).id().as_str(), "978-1");
        assert_eq!(manifest.item(ItemIndex::new(1)).value(), 50_000);
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest = Manifest::<i64>::try_from_items(Vec::new()).unwrap();
        assert!(manifest.is_empty());
        assert_eq!(manifest.num_items(), 0);
    }

    #[test]
    fn test_rejects_zero_weight_item() {
        let err = Manifest::try_from_items(vec![Item::new("bad", Weight::ZERO, 10i64)])
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidItem { ref id, .. } if id.as_str() == "bad"));
    }

    #[test]
    fn test_rejects_negative_weight_item() {
        let err =
            Manifest::try_from_items(vec![Item::new("bad", Weight::from_grams(-100), 10i64)])
                .unwrap_err();
        assert!(matches!(err, ModelError::InvalidItem { .. }));
    }

    #[test]
    fn test_rejects_duplicate_identifier() {
        let err = Manifest::try_from_items(vec![
            Item::new("dup", kg(1.0), 10i64),
            Item::new("other", kg(1.0), 20i64),
            Item::new("dup", kg(2.0), 30i64),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateItem { ref id } if id.as_str() == "dup"));
    }

    #[test]
    fn test_no_partial_validation() {
        // The first offending item is reported even when a later one is
        // also malformed.
        let err = Manifest::try_from_items(vec![
            Item::new("a", kg(1.0), 1i64),
            Item::new("b", Weight::ZERO, 2i64),
            Item::new("a", kg(1.0), 3i64),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::InvalidItem { ref id, .. } if id.as_str() == "b"));
    }

    #[test]
    fn test_iter_preserves_input_order() {
        let manifest = Manifest::try_from_items(vec![
            Item::new("z", kg(2.0), 1i64),
            Item::new("a", kg(1.0), 2i64),
        ])
        .unwrap();

        let ids: Vec<&str> = manifest.iter().map(|(_, item)| item.id().as_str()).collect();
        assert_eq!(ids, ["z", "a"]);
    }
}
