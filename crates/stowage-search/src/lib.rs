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

//! # Stowage Search
//!
//! **Shared search vocabulary for the stowage engines.**
//!
//! The branch-and-bound engine (`stowage_bnb`) and the dynamic-programming
//! engine (`stowage_dp`) share a small common layer: the numeric bounds
//! required of the value scalar, the cooperative-cancellation command, and
//! the termination reason reported with every result.
//!
//! * **`num`**: the `ValueNumeric` trait alias.
//! * **`monitor`**: `SearchCommand`, issued by monitors to continue or
//!   terminate a running search.
//! * **`result`**: `TerminationReason`, attached to every finished run.

pub mod monitor;
pub mod num;
pub mod result;
