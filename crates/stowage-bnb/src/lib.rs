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

//! Stowage-BnB: branch-and-bound for weight-capped value maximization
//!
//! High-level crate that implements a deterministic branch-and-bound search
//! over subsets of a validated item manifest. The engine explores an
//! include/exclude decision tree depth-first and applies three pruning rules:
//! categorical exclusion of items below the minimum eligible weight, capacity
//! pruning of include branches that would exceed the weight cap, and
//! optimistic-bound pruning of subtrees that cannot beat the incumbent.
//!
//! Core flow
//! - Provide a `stowage_model::manifest::Manifest<T>` and `Constraints`.
//! - Optionally pick a `monitor::TreeSearchMonitor` (trace, node limit).
//! - Run `bnb::BnbSolver::solve`; read the returned `SolutionReport`.
//!
//! Design highlights
//! - Candidates are ordered by value density before the search so strong
//!   solutions are discovered early and the bound bites sooner.
//! - One mutable partial solution is shared down the call tree; every push
//!   is paired with a pop on the same frame, so the end state is clean.
//! - The incumbent is replaced as a whole record on strict improvement and
//!   its value never decreases within a run.
//! - Deterministic: identical input yields identical selections and
//!   counters.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `prepare`: candidate ordering (value density, stable on ties).
//! - `state`: the mutable partial solution.
//! - `monitor`: tree-search monitors (trace, node limit, no-op).
//! - `report`: the final read-only solution report.
//! - `stats`: lightweight counters/timing.

pub mod bnb;
mod incumbent;
pub mod monitor;
pub mod prepare;
pub mod report;
pub mod state;
pub mod stats;
