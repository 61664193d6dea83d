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

//! # Stowage Model
//!
//! **The Core Domain Model for the Stowage Optimizer.**
//!
//! This crate defines the fundamental data structures used to represent a
//! weight-constrained value-maximization instance. It serves as the data
//! interchange layer between the problem definition (user input) and the
//! solving engines (`stowage_bnb`, `stowage_dp`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`weight`**: Fixed-point mass primitive (whole grams) so weight
//!   comparisons and totals are exact and deterministic.
//! * **`index`**: A strongly-typed wrapper (`ItemIndex`) to prevent logical
//!   indexing errors.
//! * **`item`**: The `Item` record (identifier, weight, value) and its
//!   opaque `ItemId` key.
//! * **`manifest`**: The `Manifest` — the finite, materialized, validated
//!   candidate set consumed by the engines.
//! * **`constraints`**: The capacity and eligibility configuration surface.
//! * **`selection`**: Defines the output format: a chosen subset with its
//!   totals.
//! * **`error`**: The input-validation error taxonomy.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Manifests and constraints validate inputs eagerly, so
//!     the engines never encounter an invalid state and stay infallible.
//! 2.  **Exact Arithmetic**: Weights are fixed-point integers; there is no
//!     floating point anywhere on the search path.
//! 3.  **Read-Only During Search**: Items, manifests and selections are
//!     immutable once constructed.

pub mod constraints;
pub mod error;
pub mod index;
pub mod item;
pub mod manifest;
pub mod selection;
pub mod weight;
