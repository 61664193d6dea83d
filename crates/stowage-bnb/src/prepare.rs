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

//! Candidate preparation.
//!
//! Orders the manifest by value-to-weight ratio, descending. Exploring dense
//! items first discovers strong solutions early, which tightens the
//! incumbent and makes the optimistic bound bite sooner. Ratios are compared
//! exactly by cross-multiplication in `i128`; item weights are validated
//! strictly positive, so the comparison direction is always preserved.
//!
//! Ties are stable with respect to input order, so repeated runs on
//! identical input are deterministic.
//!
//! No item is dropped here. Eligibility against the minimum item weight is a
//! search-time decision: a skipped item still counts as an explored node and
//! the search continues past it rather than terminating the branch.

use std::cmp::Ordering;
use stowage_model::{index::ItemIndex, item::Item, manifest::Manifest};
use stowage_search::num::ValueNumeric;

/// Compares two items by value density (`value / weight`).
///
/// Equivalent to comparing `a.value * b.weight` against `b.value * a.weight`
/// in `i128`, which cannot overflow and introduces no rounding.
#[inline]
fn compare_density<T>(a: &Item<T>, b: &Item<T>) -> Ordering
where
    T: ValueNumeric,
{
    let lhs = i128::from(a.value().into()) * i128::from(b.weight().grams());
    let rhs = i128::from(b.value().into()) * i128::from(a.weight().grams());
    lhs.cmp(&rhs)
}

/// Fills `out` with all manifest indices, ordered by value density
/// descending, stable on ties.
pub fn order_by_value_density_into<T>(manifest: &Manifest<T>, out: &mut Vec<ItemIndex>)
where
    T: ValueNumeric,
{
    out.clear();
    out.extend((0..manifest.num_items()).map(ItemIndex::new));
    out.sort_by(|&a, &b| compare_density(manifest.item(b), manifest.item(a)));
}

/// Returns all manifest indices ordered by value density descending.
pub fn order_by_value_density<T>(manifest: &Manifest<T>) -> Vec<ItemIndex>
where
    T: ValueNumeric,
{
    let mut out = Vec::new();
    order_by_value_density_into(manifest, &mut out);
    out
}
