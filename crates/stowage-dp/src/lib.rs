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

//! # Stowage DP
//!
//! **Exact dynamic-programming engine over the fixed-point weight grid.**
//!
//! An independently implemented second engine for the same problem the
//! branch-and-bound solver handles: maximize total value under a weight cap
//! with a minimum-item-weight eligibility rule. Because weights are whole
//! grams, the classic 0/1 knapsack table is well-defined with no precision
//! scaling tricks.
//!
//! Memory is `O(n · W)` where `W` is the weight cap in grams (clamped to
//! the total eligible mass), so this engine suits dense instances with
//! moderate caps; the branch-and-bound engine has no such dependence on
//! the cap.

pub mod dp;
