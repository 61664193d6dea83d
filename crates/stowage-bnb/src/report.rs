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

//! The final solution report.
//!
//! Assembled exactly once, after the top-level search call returns, and
//! read-only from then on. The report bundles the best selection found, the
//! exploration statistics, the candidate count, the derived efficiency
//! ratio, and the termination reason. Persisting reports anywhere is the
//! caller's business.

use crate::stats::SearchStatistics;
use stowage_model::{item::ItemId, selection::Selection, weight::Weight};
use stowage_search::{num::ValueNumeric, result::TerminationReason};

/// The immutable result record of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionReport<T> {
    selection: Selection<T>,
    statistics: SearchStatistics,
    candidate_count: usize,
    efficiency: f64,
    termination_reason: TerminationReason,
}

impl<T> SolutionReport<T>
where
    T: ValueNumeric,
{
    /// Assembles a report. The efficiency ratio is derived from the node
    /// count and the candidate count.
    pub fn new(
        selection: Selection<T>,
        statistics: SearchStatistics,
        candidate_count: usize,
        termination_reason: TerminationReason,
    ) -> Self {
        let efficiency = pruning_efficiency(statistics.nodes_explored, candidate_count);
        Self {
            selection,
            statistics,
            candidate_count,
            efficiency,
            termination_reason,
        }
    }

    /// Returns the best selection found.
    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    /// Returns the exploration statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the number of candidate items before any filtering.
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Returns the efficiency ratio `1 - explored / 2^N`.
    ///
    /// Descriptive only; can be negative when exploration exceeds `2^N`
    /// (the decision tree has more nodes than subsets) and tends to 1.0 for
    /// large N.
    #[inline]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns why the run ended.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Convenience: the aggregate value of the selection.
    #[inline]
    pub fn total_value(&self) -> T {
        self.selection.total_value()
    }

    /// Convenience: the aggregate weight of the selection.
    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.selection.total_weight()
    }

    /// Convenience: the selected identifiers in selection order.
    #[inline]
    pub fn item_ids(&self) -> &[ItemId] {
        self.selection.item_ids()
    }

    /// Convenience: the number of selected items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.selection.num_items()
    }
}

/// Computes `1 - explored / 2^N` in `f64`.
///
/// `2^N` is evaluated as a float so large candidate counts saturate towards
/// a ratio of 1.0 instead of overflowing.
fn pruning_efficiency(nodes_explored: u64, candidate_count: usize) -> f64 {
    let subsets = 2f64.powi(candidate_count.min(i32::MAX as usize) as i32);
    1.0 - (nodes_explored as f64) / subsets
}

impl<T> std::fmt::Display for SolutionReport<T>
where
    T: ValueNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Report")?;
        writeln!(f, "  Termination:  {}", self.termination_reason)?;
        writeln!(f, "  Candidates:   {}", self.candidate_count)?;
        writeln!(f, "  Efficiency:   {:.2}%", self.efficiency * 100.0)?;
        writeln!(f)?;
        write!(f, "{}", self.selection)?;
        writeln!(f)?;
        write!(f, "{}", self.statistics)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(nodes_explored: u64, candidate_count: usize) -> SolutionReport<i64> {
        let stats = SearchStatistics {
            nodes_explored,
            ..Default::default()
        };
        SolutionReport::new(
            Selection::empty(),
            stats,
            candidate_count,
            TerminationReason::OptimalityProven,
        )
    }

    #[test]
    fn test_efficiency_for_empty_candidate_set() {
        // One terminal node over 2^0 = 1 subset.
        assert_eq!(report(1, 0).efficiency(), 0.0);
    }

    #[test]
    fn test_efficiency_reflects_pruning() {
        // 6 nodes explored over 2^4 = 16 subsets.
        assert_eq!(report(6, 4).efficiency(), 1.0 - 6.0 / 16.0);
    }

    #[test]
    fn test_efficiency_can_be_negative() {
        // A full tree over N items has 2^(N+1) - 1 nodes, which exceeds 2^N.
        assert!(report(7, 2).efficiency() < 0.0);
    }

    #[test]
    fn test_efficiency_saturates_for_large_candidate_counts() {
        let e = report(u64::MAX, 4_000).efficiency();
        assert!(e > 0.999_999);
        assert!(e <= 1.0);
    }

    #[test]
    fn test_accessors() {
        let r = report(3, 2);
        assert_eq!(r.candidate_count(), 2);
        assert_eq!(r.statistics().nodes_explored, 3);
        assert!(r.termination_reason().is_optimal());
        assert_eq!(r.total_value(), 0);
        assert_eq!(r.total_weight(), Weight::ZERO);
        assert_eq!(r.num_items(), 0);
        assert!(r.item_ids().is_empty());
    }

    #[test]
    fn test_display_mentions_termination_and_efficiency() {
        let rendered = format!("{}", report(6, 4));
        assert!(rendered.contains("Termination:  Optimality Proven"));
        assert!(rendered.contains("Efficiency:   62.50%"));
        assert!(rendered.contains("Candidates:   4"));
    }
}
