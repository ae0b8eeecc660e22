use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which run direction counts toward the colinearity score.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    /// The better of the two directions.
    #[default]
    Either,
}

/// The monotonic-run oracle consumed by the scorer.
///
/// Returns the length of the longest monotonic subsequence of `series` and
/// the count of elements outside that run. Implementations must not mutate
/// their input and must be deterministic.
pub trait RunOracle: Send + Sync {
    fn longest_run(&self, series: &[i64]) -> (usize, usize);
}

/// Patience-sorting oracle, O(n log n). Runs are strictly monotonic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestMonotonicRun {
    pub monotonicity: Monotonicity,
}

impl LongestMonotonicRun {
    pub fn new(monotonicity: Monotonicity) -> Self {
        Self { monotonicity }
    }
}

impl RunOracle for LongestMonotonicRun {
    fn longest_run(&self, series: &[i64]) -> (usize, usize) {
        let len = match self.monotonicity {
            Monotonicity::Increasing => strictly_increasing_len(series),
            Monotonicity::Decreasing => strictly_decreasing_len(series),
            Monotonicity::Either => {
                strictly_increasing_len(series).max(strictly_decreasing_len(series))
            }
        };
        (len, series.len() - len)
    }
}

fn strictly_increasing_len(series: &[i64]) -> usize {
    // tails[k] = smallest tail of any increasing subsequence of length k+1
    let mut tails: Vec<i64> = Vec::new();
    for &x in series {
        let pos = tails.partition_point(|&t| t < x);
        if pos == tails.len() {
            tails.push(x);
        } else {
            tails[pos] = x;
        }
    }
    tails.len()
}

fn strictly_decreasing_len(series: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &x in series {
        let pos = tails.partition_point(|&t| t > x);
        if pos == tails.len() {
            tails.push(x);
        } else {
            tails[pos] = x;
        }
    }
    tails.len()
}
