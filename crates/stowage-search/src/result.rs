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

//! Termination reporting.
//!
//! Every finished search run carries a `TerminationReason`. The empty
//! selection is always feasible in this problem, so there is no
//! infeasibility outcome: a run either proves optimality or was cut short
//! by a monitor.

/// Why a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search explored or pruned the entire tree; the reported solution
    /// is optimal.
    OptimalityProven,
    /// The search was stopped by a monitor command. The string carries the
    /// monitor's stated reason; the reported solution is the best found up
    /// to that point.
    Aborted(String),
}

impl TerminationReason {
    /// Checks whether the run proved optimality.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, TerminationReason::OptimalityProven)
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_optimal() {
        assert!(TerminationReason::OptimalityProven.is_optimal());
        assert!(!TerminationReason::Aborted("limit".to_string()).is_optimal());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", TerminationReason::OptimalityProven),
            "Optimality Proven"
        );
        assert_eq!(
            format!("{}", TerminationReason::Aborted("time limit".to_string())),
            "Aborted: time limit"
        );
    }
}
