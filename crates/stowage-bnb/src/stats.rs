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

use std::time::Duration;

/// Statistics collected during one run of the branch-and-bound engine.
///
/// Counters are purely observational: they never influence the search
/// outcome. `nodes_explored` increments exactly once per search-tree node;
/// each pruning counter increments exactly once per pruning event of its
/// rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total nodes visited.
    pub nodes_explored: u64,
    /// Branches pruned because the item is below the minimum eligible
    /// weight (categorical exclusion, not a capacity decision).
    pub prunings_threshold: u64,
    /// Include branches pruned because the item would exceed the weight
    /// cap.
    pub prunings_capacity: u64,
    /// Subtrees pruned because the optimistic bound cannot beat the
    /// incumbent.
    pub prunings_bound: u64,
    /// Incumbent improvements observed.
    pub solutions_found: u64,
    /// The deepest recursion level reached.
    pub max_depth: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            prunings_threshold: 0,
            prunings_capacity: 0,
            prunings_bound: 0,
            solutions_found: 0,
            max_depth: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_threshold(&mut self) {
        self.prunings_threshold = self.prunings_threshold.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_capacity(&mut self) {
        self.prunings_capacity = self.prunings_capacity.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Total pruning events across all three rules.
    #[inline]
    pub fn branches_pruned(&self) -> u64 {
        self.prunings_threshold
            .saturating_add(self.prunings_capacity)
            .saturating_add(self.prunings_bound)
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stowage-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Prunings (threshold): {}", self.prunings_threshold)?;
        writeln!(f, "  Prunings (capacity):  {}", self.prunings_capacity)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Branches pruned:      {}", self.branches_pruned())?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
