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

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::SearchState,
    stats::SearchStatistics,
};
use stowage_model::{index::ItemIndex, manifest::Manifest};
use stowage_search::{monitor::SearchCommand, num::ValueNumeric};

/// A monitor that terminates the search once a node budget is exhausted.
///
/// The command is evaluated at the top of each node, so the search stops
/// after at most `max_nodes` explored nodes and returns the best solution
/// found up to that point.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NodeLimitMonitor<T>
where
    T: ValueNumeric,
{
    max_nodes: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NodeLimitMonitor<T>
where
    T: ValueNumeric,
{
    /// Creates a monitor that allows at most `max_nodes` explored nodes.
    #[inline]
    pub fn new(max_nodes: u64) -> Self {
        Self {
            max_nodes,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the node budget.
    #[inline]
    pub fn max_nodes(&self) -> u64 {
        self.max_nodes
    }
}

impl<T> TreeSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: ValueNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _manifest: &Manifest<T>, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    #[inline]
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        if statistics.nodes_explored >= self.max_nodes {
            SearchCommand::Terminate(format!("node limit of {} reached", self.max_nodes))
        } else {
            SearchCommand::Continue
        }
    }

    #[inline(always)]
    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_descend(
        &mut self,
        _state: &SearchState<T>,
        _item: ItemIndex,
        _statistics: &SearchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_prune(
        &mut self,
        _state: &SearchState<T>,
        _reason: PruneReason,
        _statistics: &SearchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_solution_found(&mut self, _state: &SearchState<T>, _statistics: &SearchStatistics) {}
}

impl<T> std::fmt::Display for NodeLimitMonitor<T>
where
    T: ValueNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeLimitMonitor(max_nodes: {})", self.max_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_below_budget() {
        let mut monitor = NodeLimitMonitor::<i64>::new(10);
        let state = SearchState::new();
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();

        assert_eq!(
            monitor.search_command(&state, &stats),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_terminates_at_budget() {
        let mut monitor = NodeLimitMonitor::<i64>::new(2);
        let state = SearchState::new();
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();

        match monitor.search_command(&state, &stats) {
            SearchCommand::Terminate(reason) => {
                assert_eq!(reason, "node limit of 2 reached")
            }
            SearchCommand::Continue => panic!("expected termination at the node budget"),
        }
    }
}
