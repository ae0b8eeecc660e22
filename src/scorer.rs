use crate::core_types::{Fitness, OrientedTour, Tour};
use crate::error::{ScafForgeError, SfResult};
use crate::lis::{LongestMonotonicRun, Monotonicity, RunOracle};
use crate::optimizer::Evaluator;
use crate::scaffolds::ScaffoldTable;
use std::sync::Arc;

/// Scores a candidate ordering by the longest monotonic run of the
/// concatenated marker series.
///
/// Pure and deterministic: the same tour against the same table always
/// yields the same fitness, which is what makes the stale-fitness cache and
/// the parallel dispatcher safe.
pub struct ColinearScorer<O = LongestMonotonicRun> {
    table: Arc<ScaffoldTable>,
    oracle: O,
}

impl ColinearScorer<LongestMonotonicRun> {
    pub fn new(table: Arc<ScaffoldTable>) -> Self {
        Self {
            table,
            oracle: LongestMonotonicRun::default(),
        }
    }

    pub fn with_monotonicity(table: Arc<ScaffoldTable>, monotonicity: Monotonicity) -> Self {
        Self {
            table,
            oracle: LongestMonotonicRun::new(monotonicity),
        }
    }
}

impl<O: RunOracle> ColinearScorer<O> {
    /// Swap in a different oracle implementation.
    pub fn with_oracle(table: Arc<ScaffoldTable>, oracle: O) -> Self {
        Self { table, oracle }
    }

    fn markers(&self, id: u32) -> SfResult<&[i64]> {
        self.table.markers(id).ok_or_else(|| {
            ScafForgeError::Evaluation(format!(
                "tour references block {} outside the table ({} blocks)",
                id,
                self.table.block_count()
            ))
        })
    }

    fn score(&self, series: &[i64]) -> Fitness {
        let (run, _rest) = self.oracle.longest_run(series);
        run as Fitness
    }
}

impl<O: RunOracle> Evaluator<Tour> for ColinearScorer<O> {
    fn evaluate(&self, tour: &Tour) -> SfResult<Fitness> {
        let mut series = Vec::with_capacity(self.table.total_markers());
        for &id in &tour.0 {
            series.extend_from_slice(self.markers(id)?);
        }
        Ok(self.score(&series))
    }
}

impl<O: RunOracle> Evaluator<OrientedTour> for ColinearScorer<O> {
    fn evaluate(&self, tour: &OrientedTour) -> SfResult<Fitness> {
        let mut series = Vec::with_capacity(self.table.total_markers());
        for gene in &tour.0 {
            let markers = self.markers(gene.id)?;
            if gene.reversed {
                series.extend(markers.iter().rev());
            } else {
                series.extend_from_slice(markers);
            }
        }
        Ok(self.score(&series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::OrientedBlock;

    /// Four blocks of five sequential markers each; the identity ordering
    /// concatenates to a strictly increasing series of 20.
    fn sequential_table() -> Arc<ScaffoldTable> {
        let blocks = (0..4)
            .map(|b| (b * 5..(b + 1) * 5).collect())
            .collect();
        Arc::new(ScaffoldTable::new(blocks).unwrap())
    }

    #[test]
    fn identity_order_scores_every_marker() {
        let scorer = ColinearScorer::with_monotonicity(sequential_table(), Monotonicity::Increasing);
        let fitness = scorer.evaluate(&Tour(vec![0, 1, 2, 3])).unwrap();
        assert_eq!(fitness, 20);
    }

    #[test]
    fn reversed_order_scores_one_block_at_most() {
        let scorer = ColinearScorer::with_monotonicity(sequential_table(), Monotonicity::Increasing);
        let identity = scorer.evaluate(&Tour(vec![0, 1, 2, 3])).unwrap();
        let reversed = scorer.evaluate(&Tour(vec![3, 2, 1, 0])).unwrap();
        assert!(reversed < identity);
        assert!(reversed <= 5);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let scorer = ColinearScorer::new(sequential_table());
        let tour = Tour(vec![2, 0, 3, 1]);
        let first = scorer.evaluate(&tour).unwrap();
        for _ in 0..10 {
            assert_eq!(scorer.evaluate(&tour).unwrap(), first);
        }
    }

    #[test]
    fn flipping_a_reversed_block_restores_the_run() {
        let mut blocks: Vec<Vec<i64>> = (0..4).map(|b| (b * 5..(b + 1) * 5).collect()).collect();
        blocks[2].reverse();
        let table = Arc::new(ScaffoldTable::new(blocks).unwrap());
        let scorer = ColinearScorer::with_monotonicity(table, Monotonicity::Increasing);

        let forward = OrientedTour::forward(&[0, 1, 2, 3]);
        let broken = scorer.evaluate(&forward).unwrap();
        assert!(broken < 20);

        let mut repaired = forward.clone();
        repaired.0[2] = OrientedBlock {
            id: 2,
            reversed: true,
        };
        assert_eq!(scorer.evaluate(&repaired).unwrap(), 20);
    }

    #[test]
    fn unknown_block_is_an_evaluation_error() {
        let scorer = ColinearScorer::new(sequential_table());
        let err = scorer.evaluate(&Tour(vec![0, 1, 2, 9])).unwrap_err();
        assert!(matches!(err, ScafForgeError::Evaluation(_)));
    }
}
