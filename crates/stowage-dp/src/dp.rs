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

//! Table-based 0/1 knapsack over the gram grid.
//!
//! Items failing the minimum-weight eligibility rule are excluded up front;
//! for an exhaustive table this is equivalent to the search-time skip of the
//! branch-and-bound engine, since an ineligible item can never appear in any
//! feasible subset. The table is filled row by row and a reconstruction pass
//! recovers the selected items in manifest order.

use stowage_model::{
    constraints::Constraints, index::ItemIndex, manifest::Manifest, selection::Selection,
    weight::Weight,
};
use stowage_search::num::ValueNumeric;

/// An exact dynamic-programming solver over item subsets.
///
/// The table buffer is reused across solves.
#[derive(Clone, Debug, Default)]
pub struct DpSolver<T> {
    table: Vec<T>,
    eligible: Vec<ItemIndex>,
}

impl<T> DpSolver<T>
where
    T: ValueNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            table: Vec::new(),
            eligible: Vec::new(),
        }
    }

    /// Computes an optimal selection for the manifest under the given
    /// constraints.
    ///
    /// Memory use is proportional to `eligible items × weight cap in
    /// grams`; the cap is clamped to the total eligible mass first, so an
    /// oversized cap costs no more than the items themselves allow.
    pub fn solve(&mut self, manifest: &Manifest<T>, constraints: &Constraints) -> Selection<T> {
        self.eligible.clear();
        self.eligible.extend(
            manifest
                .iter()
                .filter(|(_, item)| constraints.is_eligible(item.weight()))
                .map(|(index, _)| index),
        );

        let total_eligible_grams: i64 = self
            .eligible
            .iter()
            .map(|&index| manifest.item(index).weight().grams())
            .fold(0i64, |acc, grams| acc.saturating_add(grams));
        let capacity = constraints
            .max_weight()
            .grams()
            .min(total_eligible_grams)
            .max(0) as usize;

        let num_rows = self.eligible.len() + 1;
        let row_len = capacity + 1;
        self.table.clear();
        self.table.resize(num_rows * row_len, T::zero());

        // dp[i][w]: best value using the first i eligible items within w
        // grams; row 0 stays zero.
        for i in 1..num_rows {
            let item = manifest.item(self.eligible[i - 1]);
            let item_grams = item.weight().grams() as usize;
            let item_value = item.value();

            for w in 0..row_len {
                let mut best = self.table[(i - 1) * row_len + w];
                if item_grams <= w {
                    let with_item = self.table[(i - 1) * row_len + (w - item_grams)]
                        .saturating_add(item_value);
                    if with_item > best {
                        best = with_item;
                    }
                }
                self.table[i * row_len + w] = best;
            }
        }

        // Walk the table backwards to recover which items were taken; the
        // reversed walk yields manifest order once flipped back.
        let mut selected = Vec::new();
        let mut w = capacity;
        for i in (1..num_rows).rev() {
            if self.table[i * row_len + w] != self.table[(i - 1) * row_len + w] {
                let index = self.eligible[i - 1];
                selected.push(index);
                w -= manifest.item(index).weight().grams() as usize;
            }
        }
        selected.reverse();

        let mut total_weight = Weight::ZERO;
        let mut total_value = T::zero();
        let mut item_ids = Vec::with_capacity(selected.len());
        for &index in &selected {
            let item = manifest.item(index);
            total_weight += item.weight();
            total_value = total_value.saturating_add(item.value());
            item_ids.push(item.id().clone());
        }

        Selection::new(total_value, total_weight, item_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_model::item::Item;

    fn manifest(items: &[(&str, i64, i64)]) -> Manifest<i64> {
        Manifest::try_from_items(
            items
                .iter()
                .map(|&(id, grams, value)| Item::new(id, Weight::from_grams(grams), value))
                .collect(),
        )
        .unwrap()
    }

    fn ids(selection: &Selection<i64>) -> Vec<&str> {
        selection.item_ids().iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_four_item_reference_instance() {
        let m = manifest(&[
            ("978-1", 1_000, 200_000),
            ("978-2", 3_000, 50_000),
            ("978-3", 2_000, 150_000),
            ("978-4", 2_500, 180_000),
        ]);
        let selection = DpSolver::new().solve(&m, &Constraints::default());

        assert_eq!(selection.total_value(), 530_000);
        assert_eq!(selection.total_weight(), Weight::from_grams(5_500));
        // Reconstruction yields manifest order.
        assert_eq!(ids(&selection), ["978-1", "978-3", "978-4"]);
    }

    #[test]
    fn test_empty_manifest() {
        let m = manifest(&[]);
        let selection = DpSolver::new().solve(&m, &Constraints::default());
        assert!(selection.is_empty());
        assert_eq!(selection.total_value(), 0);
    }

    #[test]
    fn test_underweight_items_are_never_selected() {
        let m = manifest(&[("light", 400, 1_000_000), ("ok", 1_000, 10)]);
        let selection = DpSolver::new().solve(&m, &Constraints::default());

        assert_eq!(ids(&selection), ["ok"]);
        assert_eq!(selection.total_value(), 10);
    }

    #[test]
    fn test_oversized_item_is_never_selected() {
        let m = manifest(&[("big", 9_000, 1_000_000)]);
        let selection = DpSolver::new().solve(&m, &Constraints::default());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_cap_exceeding_total_mass_selects_everything_eligible() {
        let m = manifest(&[("a", 600, 1), ("b", 700, 2), ("light", 100, 50)]);
        let c = Constraints::try_new(Weight::from_kilograms(100.0), Weight::from_grams(500))
            .unwrap();
        let selection = DpSolver::new().solve(&m, &c);

        assert_eq!(ids(&selection), ["a", "b"]);
        assert_eq!(selection.total_weight(), Weight::from_grams(1_300));
    }

    #[test]
    fn test_solver_reuse_is_consistent() {
        let m1 = manifest(&[("a", 1_000, 10), ("b", 2_000, 30)]);
        let m2 = manifest(&[("c", 600, 5)]);
        let c = Constraints::default();
        let mut solver = DpSolver::new();

        let first = solver.solve(&m1, &c);
        let detour = solver.solve(&m2, &c);
        let second = solver.solve(&m1, &c);

        assert_eq!(first, second);
        assert_eq!(ids(&detour), ["c"]);
    }

    #[test]
    fn test_agrees_with_branch_and_bound() {
        use stowage_bnb::{bnb::BnbSolver, monitor::no_op::NoOperationMonitor};

        let mut state = 0xD00Du64;
        let mut next = move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state >> 33
        };

        let c = Constraints::default();
        for round in 0..6 {
            let items = (0..10 + round)
                .map(|i| {
                    let grams = 200 + (next() % 3_000) as i64;
                    let value = 1 + (next() % 50_000) as i64;
                    Item::new(format!("item-{}", i), Weight::from_grams(grams), value)
                })
                .collect();
            let m = Manifest::try_from_items(items).unwrap();

            let dp_selection = DpSolver::new().solve(&m, &c);
            let bnb_report = BnbSolver::new().solve(&m, &c, NoOperationMonitor::new());

            assert_eq!(
                dp_selection.total_value(),
                bnb_report.total_value(),
                "engines disagree on round {}",
                round
            );
            assert!(dp_selection.total_weight() <= c.max_weight());
        }
    }
}
