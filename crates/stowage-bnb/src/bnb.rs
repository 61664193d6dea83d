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

//! Branch-and-bound engine for weight-capped value maximization.
//!
//! This module implements a stateful search engine that explores subsets of
//! a validated manifest while pruning branches using capacity, eligibility,
//! and an incumbent-backed optimistic bound. The `BnbSolver` manages
//! reusable internal buffers so repeated solves do not reallocate, and a
//! fast `reset` keeps capacities while clearing per-run state.
//!
//! A search session object encapsulates per-run state, statistics, and
//! timing, enabling reproducible and debuggable runs. At every node exactly
//! one action fires, in a fixed priority order: incumbent update, terminal
//! check, threshold exclusion, capacity-gated include branch, optimistic
//! bound, exclude branch. The design emphasizes determinism under the
//! density ordering, internal consistency at backtrack points, and
//! end-state cleanliness after each solve.

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    prepare,
    report::SolutionReport,
    state::SearchState,
    stats::SearchStatistics,
};
use stowage_model::{
    constraints::Constraints, index::ItemIndex, manifest::Manifest, selection::Selection,
};
use stowage_search::{monitor::SearchCommand, num::ValueNumeric, result::TerminationReason};

/// A branch-and-bound solver over item subsets.
///
/// The solver owns the buffers a search needs (candidate order, bound
/// table, partial solution, incumbent) and lends them to one search session
/// at a time. Construction and navigation of the decision tree live in the
/// session; this type is the reusable shell.
#[derive(Clone, Debug)]
pub struct BnbSolver<T> {
    order: Vec<ItemIndex>,
    remaining_bounds: Vec<T>,
    state: SearchState<T>,
    incumbent: Incumbent<T>,
}

impl<T> Default for BnbSolver<T>
where
    T: ValueNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: ValueNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            remaining_bounds: Vec::new(),
            state: SearchState::new(),
            incumbent: Incumbent::new(),
        }
    }

    /// Creates a new solver instance with preallocated storage for the
    /// given number of items.
    ///
    /// # Note
    ///
    /// Solving grows the buffers as needed either way; preallocating only
    /// moves the allocation cost to construction time.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            order: Vec::with_capacity(num_items),
            remaining_bounds: Vec::with_capacity(num_items + 1),
            state: SearchState::preallocated(num_items),
            incumbent: Incumbent::new(),
        }
    }

    /// Runs the search and returns the assembled report.
    ///
    /// The manifest and constraints are validated at construction, so the
    /// search itself cannot fail; a monitor may cut it short, in which case
    /// the report carries `TerminationReason::Aborted` and the best
    /// selection found up to that point.
    pub fn solve<M>(
        &mut self,
        manifest: &Manifest<T>,
        constraints: &Constraints,
        monitor: M,
    ) -> SolutionReport<T>
    where
        M: TreeSearchMonitor<T>,
    {
        let mut monitor = monitor;
        let session = BnbSearchSession::new(self, manifest, constraints, &mut monitor);
        let report = session.run();
        self.reset();
        report
    }

    /// Resets the internal buffers, clearing per-run state.
    ///
    /// # Note
    ///
    /// This does not deallocate; it only resets logical state.
    #[inline]
    fn reset(&mut self) {
        self.order.clear();
        self.remaining_bounds.clear();
        self.state.reset();
        self.incumbent.reset();
    }
}

/// Fills `out` with the optimistic-bound table for the given candidate
/// order: `out[i]` is the saturating sum of the values of all
/// threshold-eligible candidates at order positions `i..`, and
/// `out[order.len()]` is zero.
///
/// Ineligible items contribute nothing; they can never be included, so
/// counting them would weaken the bound without ever being realizable.
fn fill_remaining_value_bounds<T>(
    manifest: &Manifest<T>,
    order: &[ItemIndex],
    constraints: &Constraints,
    out: &mut Vec<T>,
) where
    T: ValueNumeric,
{
    out.clear();
    out.resize(order.len() + 1, T::zero());
    for position in (0..order.len()).rev() {
        let item = manifest.item(order[position]);
        let contribution = if constraints.is_eligible(item.weight()) {
            item.value()
        } else {
            T::zero()
        };
        out[position] = out[position + 1].saturating_add(contribution);
    }
}

/// A single search run: borrows the solver's buffers, walks the decision
/// tree, and assembles the report.
struct BnbSearchSession<'a, T, M>
where
    T: ValueNumeric,
{
    solver: &'a mut BnbSolver<T>,
    manifest: &'a Manifest<T>,
    constraints: &'a Constraints,
    monitor: &'a mut M,
    stats: SearchStatistics,
    abort_reason: Option<String>,
    start_time: std::time::Instant,
}

impl<'a, T, M> BnbSearchSession<'a, T, M>
where
    T: ValueNumeric,
    M: TreeSearchMonitor<T>,
{
    /// Creates a new search session.
    #[inline]
    fn new(
        solver: &'a mut BnbSolver<T>,
        manifest: &'a Manifest<T>,
        constraints: &'a Constraints,
        monitor: &'a mut M,
    ) -> Self {
        Self {
            solver,
            manifest,
            constraints,
            monitor,
            stats: SearchStatistics::default(),
            abort_reason: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the session to completion.
    #[inline]
    fn run(mut self) -> SolutionReport<T> {
        self.monitor.on_enter_search(self.manifest, &self.stats);
        self.initialize();
        self.explore(0);

        debug_assert!(
            self.solver.state.is_clean(),
            "search finished with a non-empty partial solution: {}",
            self.solver.state
        );

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize()
    }

    /// Prepares the candidate order and the bound table.
    #[inline]
    fn initialize(&mut self) {
        self.solver.state.reset();
        self.solver.incumbent.reset();
        prepare::order_by_value_density_into(self.manifest, &mut self.solver.order);
        fill_remaining_value_bounds(
            self.manifest,
            &self.solver.order,
            self.constraints,
            &mut self.solver.remaining_bounds,
        );
    }

    /// Evaluates one node of the decision tree at the given candidate
    /// position.
    ///
    /// The action order is fixed: count the node, honor the monitor
    /// command, update the incumbent on strict improvement, stop at the
    /// terminal position, skip ineligible items, try the include branch
    /// under the capacity cap, apply the optimistic bound, and finally take
    /// the exclude branch. The incumbent update precedes every pruning
    /// decision so the bound is evaluated against the freshest best value.
    fn explore(&mut self, index: usize) {
        self.stats.on_node_explored();
        self.stats.on_depth_update(self.solver.state.depth() as u64);
        self.monitor.on_step(&self.solver.state, &self.stats);

        if let SearchCommand::Terminate(reason) =
            self.monitor.search_command(&self.solver.state, &self.stats)
        {
            self.abort_reason = Some(reason);
            return;
        }

        if self.solver.incumbent.try_improve(&self.solver.state) {
            self.stats.on_solution_found();
            self.monitor.on_solution_found(&self.solver.state, &self.stats);
        }

        if index == self.solver.order.len() {
            return;
        }

        let item_index = self.solver.order[index];
        let item = self.manifest.item(item_index);
        let (weight, value) = (item.weight(), item.value());

        // Categorical eligibility: skipping the item is the only choice,
        // and the search continues past it with the state unchanged.
        if !self.constraints.is_eligible(weight) {
            self.stats.on_pruning_threshold();
            self.monitor.on_prune(
                &self.solver.state,
                PruneReason::BelowMinimumWeight,
                &self.stats,
            );
            self.explore(index + 1);
            return;
        }

        // Capacity gates only the include branch; the exclude branch below
        // remains valid for an item that does not fit.
        if self
            .solver
            .state
            .total_weight()
            .saturating_add(weight)
            <= self.constraints.max_weight()
        {
            self.solver.state.push_item(item_index, weight, value);
            self.solver.state.descend();
            self.monitor.on_descend(&self.solver.state, item_index, &self.stats);

            self.explore(index + 1);

            self.solver.state.ascend();
            self.solver.state.pop_item(item_index, weight, value);
            self.monitor.on_backtrack(&self.solver.state, &self.stats);
        } else {
            self.stats.on_pruning_capacity();
            self.monitor.on_prune(
                &self.solver.state,
                PruneReason::CapacityExceeded,
                &self.stats,
            );
        }

        if self.abort_reason.is_some() {
            return;
        }

        // Optimistic bound over the remaining eligible values; prunes the
        // entire rest of this node, exclude branch included.
        let bound = self.solver.remaining_bounds[index + 1];
        if self
            .solver
            .state
            .total_value()
            .saturating_add(bound)
            <= self.solver.incumbent.total_value()
        {
            self.stats.on_pruning_bound();
            self.monitor.on_prune(
                &self.solver.state,
                PruneReason::BoundDominated,
                &self.stats,
            );
            return;
        }

        self.solver.state.descend();
        self.explore(index + 1);
        self.solver.state.ascend();
    }

    /// Assembles the report from the incumbent and the counters.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize(self) -> SolutionReport<T> {
        let item_ids = self
            .solver
            .incumbent
            .selected()
            .iter()
            .map(|&index| self.manifest.item(index).id().clone())
            .collect();
        let selection = Selection::new(
            self.solver.incumbent.total_value(),
            self.solver.incumbent.total_weight(),
            item_ids,
        );

        let termination_reason = match self.abort_reason {
            Some(reason) => TerminationReason::Aborted(reason),
            None => TerminationReason::OptimalityProven,
        };

        SolutionReport::new(
            selection,
            self.stats,
            self.manifest.num_items(),
            termination_reason,
        )
    }
}
