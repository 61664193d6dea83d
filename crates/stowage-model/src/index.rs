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

//! Strongly typed manifest indices.
//!
//! `ItemIndex` wraps a `usize` position within a `Manifest`. Keeping the
//! index a distinct type prevents accidentally mixing manifest positions
//! with other integer quantities (candidate ordering ranks, recursion
//! depths) that flow through the engines side by side. The wrapper is
//! `#[repr(transparent)]` and compiles down to a plain `usize`.

/// A strongly typed index into a `Manifest`.
///
/// # Examples
///
/// ```rust
/// # use stowage_model::index::ItemIndex;
///
/// let index = ItemIndex::new(5);
/// assert_eq!(index.get(), 5);
/// assert_eq!(format!("{}", index), "ItemIndex(5)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Creates a new `ItemIndex` with the given `usize` position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        ItemIndex(index)
    }

    /// Returns the underlying `usize` position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ItemIndex {
    #[inline(always)]
    fn from(index: usize) -> Self {
        ItemIndex(index)
    }
}

impl From<ItemIndex> for usize {
    #[inline(always)]
    fn from(index: ItemIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let index = ItemIndex::new(3);
        assert_eq!(index.get(), 3);
    }

    #[test]
    fn test_conversions() {
        let index: ItemIndex = 7usize.into();
        assert_eq!(index, ItemIndex::new(7));
        let raw: usize = index.into();
        assert_eq!(raw, 7);
    }

    #[test]
    fn test_ordering_follows_position() {
        assert!(ItemIndex::new(1) < ItemIndex::new(2));
        assert_eq!(ItemIndex::new(4), ItemIndex::new(4));
    }
}
