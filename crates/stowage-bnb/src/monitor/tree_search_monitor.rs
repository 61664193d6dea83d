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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait and `PruneReason` for observing
//! and controlling the branch-and-bound search. Callbacks track the solver
//! lifecycle, and a monitor can influence execution via `SearchCommand`
//! (default: Continue).
//!
//! Lifecycle highlights
//! - enter → step → {prune | descend/backtrack} → solution → exit
//! - `SearchStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; avoid blocking I/O in hot paths.
//! - Generic over `T: ValueNumeric` (the value scalar).

use crate::{state::SearchState, stats::SearchStatistics};
use stowage_model::{index::ItemIndex, manifest::Manifest};
use stowage_search::{monitor::SearchCommand, num::ValueNumeric};

/// Reasons for pruning at a search node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The item is below the minimum eligible weight and is skipped
    /// categorically.
    BelowMinimumWeight,
    /// Including the item would exceed the weight cap; only the include
    /// branch is pruned.
    CapacityExceeded,
    /// No achievable completion of this branch can beat the incumbent; the
    /// remaining subtree is pruned.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::BelowMinimumWeight => write!(f, "BelowMinimumWeight"),
            PruneReason::CapacityExceeded => write!(f, "CapacityExceeded"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor<T>
where
    T: ValueNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, manifest: &Manifest<T>, statistics: &SearchStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called to determine the next action of the search.
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called at each node of the search.
    fn on_step(&mut self, state: &SearchState<T>, statistics: &SearchStatistics);
    /// Called after an item was appended and the search descends into the
    /// include branch.
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        item: ItemIndex,
        statistics: &SearchStatistics,
    );
    /// Called after the appended item was removed again (backtrack).
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &SearchStatistics);
    /// Called when a branch is pruned.
    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        statistics: &SearchStatistics,
    );
    /// Called when the incumbent improves; `state` is the new best.
    fn on_solution_found(&mut self, state: &SearchState<T>, statistics: &SearchStatistics);
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: ValueNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: ValueNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_reason_display() {
        assert_eq!(
            format!("{}", PruneReason::BelowMinimumWeight),
            "BelowMinimumWeight"
        );
        assert_eq!(format!("{}", PruneReason::CapacityExceeded), "CapacityExceeded");
        assert_eq!(format!("{}", PruneReason::BoundDominated), "BoundDominated");
    }
}
