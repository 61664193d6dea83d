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

//! Candidate items.
//!
//! An `Item` is a fixed-field record: an opaque identifier, a fixed-point
//! weight, and a value scalar. Items are read-only during search; the
//! engines only ever copy weights and values out of them.

use crate::weight::Weight;

/// An opaque, unique item identifier.
///
/// The optimizer treats identifiers as uninterpreted keys; uniqueness within
/// a manifest is enforced when the manifest is built.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new `ItemId` from anything string-like.
    #[inline]
    pub fn new<S: Into<String>>(id: S) -> Self {
        ItemId(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    #[inline]
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    #[inline]
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate item: identifier, weight, and value.
///
/// `T` is the value scalar; the engines constrain it to `ValueNumeric`, the
/// model itself only needs it to be copyable. Values are non-negative by
/// contract: the engines' optimistic bound treats every unconsidered item
/// as a potential gain, which a negative value would invalidate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Item<T> {
    id: ItemId,
    weight: Weight,
    value: T,
}

impl<T> Item<T>
where
    T: Copy,
{
    /// Creates a new item.
    ///
    /// No validation happens here; the `Manifest` constructor is the
    /// validation boundary.
    #[inline]
    pub fn new<I: Into<ItemId>>(id: I, weight: Weight, value: T) -> Self {
        Self {
            id: id.into(),
            weight,
            value,
        }
    }

    /// Returns the item identifier.
    #[inline]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the item weight.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the item value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> std::fmt::Display for Item<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Item(id: {}, weight: {}, value: {})",
            self.id, self.weight, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = Item::new("978-1", Weight::from_kilograms(1.0), 200_000i64);
        assert_eq!(item.id().as_str(), "978-1");
        assert_eq!(item.weight(), Weight::from_grams(1_000));
        assert_eq!(item.value(), 200_000);
    }

    #[test]
    fn test_item_id_conversions() {
        let a = ItemId::new("x");
        let b: ItemId = "x".into();
        let c: ItemId = String::from("x").into();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(format!("{}", a), "x");
    }

    #[test]
    fn test_display() {
        let item = Item::new("b-1", Weight::from_grams(500), 42i64);
        assert_eq!(
            format!("{}", item),
            "Item(id: b-1, weight: 0.500 kg, value: 42)"
        );
    }
}
