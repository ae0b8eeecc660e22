use crate::config::GaConfig;
use crate::core_types::{BlockId, OrientedTour, Tour};
use crate::error::{ScafForgeError, SfResult};
use crate::optimizer::{
    EvolutionRunner, OrientationMutation, PartiallyMatched, RunOutcome, Tournament, TourMutation,
};
use crate::scaffolds::ScaffoldTable;
use crate::scorer::ColinearScorer;
use std::sync::Arc;

fn check_seed(table: &ScaffoldTable, seed: &[BlockId]) -> SfResult<()> {
    if seed.len() != table.block_count() {
        return Err(ScafForgeError::Config(format!(
            "seed ordering has {} blocks, table has {}",
            seed.len(),
            table.block_count()
        )));
    }
    Ok(())
}

/// Search for the block ordering with the longest colinear marker run,
/// starting from `seed`. Wires the stock strategy set: partially-matched
/// crossover, inversion/insertion mutation, tournament selection, and the
/// default monotonic-run oracle.
pub fn optimize_order(
    table: Arc<ScaffoldTable>,
    seed: &[BlockId],
    config: GaConfig,
) -> SfResult<RunOutcome<Tour>> {
    check_seed(&table, seed)?;
    let tournament = Tournament {
        size: config.tournament_size,
    };
    let runner = EvolutionRunner::new(
        config,
        PartiallyMatched,
        TourMutation,
        tournament,
        ColinearScorer::new(table),
    );
    runner.run(Tour(seed.to_vec()))
}

/// Search order and strand jointly. Blocks start on the forward strand;
/// crossover reorders them while mutation flips strands.
pub fn optimize_orientation(
    table: Arc<ScaffoldTable>,
    seed: &[BlockId],
    config: GaConfig,
) -> SfResult<RunOutcome<OrientedTour>> {
    check_seed(&table, seed)?;
    let tournament = Tournament {
        size: config.tournament_size,
    };
    let runner = EvolutionRunner::new(
        config,
        PartiallyMatched,
        OrientationMutation,
        tournament,
        ColinearScorer::new(table),
    );
    runner.run(OrientedTour::forward(seed))
}
