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

//! Exploration tracing.
//!
//! Prints an indented line per search event, useful for demonstrating how
//! the decision tree is walked on small instances. The indentation follows
//! the recursion depth. Do not attach this monitor to large searches; the
//! output volume grows with the node count.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::SearchState,
    stats::SearchStatistics,
};
use stowage_model::{index::ItemIndex, manifest::Manifest};
use stowage_search::num::ValueNumeric;

/// A monitor that prints an indented exploration trace to stdout.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TraceMonitor<T>
where
    T: ValueNumeric,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TraceMonitor<T>
where
    T: ValueNumeric,
{
    /// Creates a new `TraceMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth)
    }
}

impl<T> TreeSearchMonitor<T> for TraceMonitor<T>
where
    T: ValueNumeric,
{
    fn name(&self) -> &str {
        "TraceMonitor"
    }

    fn on_enter_search(&mut self, manifest: &Manifest<T>, _statistics: &SearchStatistics) {
        println!("=== exploration trace ({} candidates) ===", manifest.num_items());
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        println!("=== done ===");
        print!("{}", statistics);
    }

    fn on_step(&mut self, state: &SearchState<T>, statistics: &SearchStatistics) {
        println!(
            "{}[node {}] weight {}, value {}",
            Self::indent(state.depth()),
            statistics.nodes_explored,
            state.total_weight(),
            state.total_value()
        );
    }

    fn on_descend(&mut self, state: &SearchState<T>, item: ItemIndex, _statistics: &SearchStatistics) {
        println!(
            "{}v include {} -> weight {}, value {}",
            Self::indent(state.depth().saturating_sub(1)),
            item,
            state.total_weight(),
            state.total_value()
        );
    }

    fn on_backtrack(&mut self, state: &SearchState<T>, _statistics: &SearchStatistics) {
        println!("{}^ backtrack", Self::indent(state.depth()));
    }

    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        _statistics: &SearchStatistics,
    ) {
        println!("{}x pruned: {}", Self::indent(state.depth()), reason);
    }

    fn on_solution_found(&mut self, state: &SearchState<T>, _statistics: &SearchStatistics) {
        println!(
            "{}* new best: value {}, weight {}",
            Self::indent(state.depth()),
            state.total_value(),
            state.total_weight()
        );
    }
}

impl<T> std::fmt::Display for TraceMonitor<T>
where
    T: ValueNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TraceMonitor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_search::monitor::SearchCommand;

    #[test]
    fn test_trace_monitor_never_terminates() {
        let mut monitor = TraceMonitor::<i64>::new();
        let state = SearchState::new();
        let stats = SearchStatistics::default();
        assert_eq!(
            monitor.search_command(&state, &stats),
            SearchCommand::Continue
        );
        assert_eq!(monitor.name(), "TraceMonitor");
    }
}
