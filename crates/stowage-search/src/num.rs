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

//! # Value Numeric Trait
//!
//! Unified numeric bounds for the value scalar used by both engines.
//! `ValueNumeric` collects the integer capabilities the search requires —
//! intrinsic traits (`PrimInt`, `Signed`), conversion to `i64` for exact
//! cross-multiplication in the candidate ordering, and formatting — into a
//! single alias, simplifying generic signatures.
//!
//! ## Motivation
//!
//! Exact search pipelines should remain generic over integer types while
//! retaining predictable arithmetic semantics. `PrimInt` already carries the
//! checked and saturating operations the engines need; this alias only adds
//! the conversions and marker bounds on top.
//!
//! Note: `i128` is intentionally excluded (no `Into<i64>`), matching the
//! exact-ratio comparison which widens `i64` values into `i128` internally.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types usable as item values.
///
/// These are the signed integer types `i8`, `i16`, `i32`, `i64`.
pub trait ValueNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + Into<i64>
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> ValueNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + Into<i64>
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_value_numeric<T: ValueNumeric>() {}

    #[test]
    fn test_signed_integer_types_satisfy_alias() {
        assert_value_numeric::<i8>();
        assert_value_numeric::<i16>();
        assert_value_numeric::<i32>();
        assert_value_numeric::<i64>();
    }

    #[test]
    fn test_saturating_ops_available_through_prim_int() {
        fn saturating_total<T: ValueNumeric>(values: &[T]) -> T {
            values
                .iter()
                .fold(T::zero(), |acc, v| acc.saturating_add(*v))
        }

        assert_eq!(saturating_total(&[1i64, 2, 3]), 6);
        assert_eq!(saturating_total(&[i64::MAX, 1]), i64::MAX);
    }
}
