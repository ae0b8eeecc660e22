pub mod crossover;
pub mod mutation;
pub mod pool;
pub mod runner;
pub mod selection;

pub use self::crossover::PartiallyMatched;
pub use self::mutation::{OrientationMutation, TourMutation};
pub use self::pool::EvalPool;
pub use self::runner::{EvolutionRunner, RunOutcome};
pub use self::selection::Tournament;

use crate::core_types::{Fitness, Genome, Individual, Population};
use crate::error::SfResult;
use serde::Serialize;

/// Order-preserving recombination of two parents, in place.
///
/// Implementations must keep both genomes valid permutations of the same
/// block set and may assume equal length.
pub trait Crossover<G: Genome>: Send + Sync {
    fn mate(&self, a: &mut G, b: &mut G, rng: &mut fastrand::Rng);
}

pub trait Mutation<G: Genome>: Send + Sync {
    fn mutate(&self, genome: &mut G, rng: &mut fastrand::Rng);
}

/// Draws `count` individuals from the population, with replacement.
/// Selection never mutates fitness; it only decides who proceeds to
/// variation.
pub trait Selection<G: Genome>: Send + Sync {
    fn select(
        &self,
        population: &[Individual<G>],
        count: usize,
        rng: &mut fastrand::Rng,
    ) -> Population<G>;
}

/// Pure fitness function. Must be deterministic and side-effect free so
/// batches can be dispatched across workers in any order.
pub trait Evaluator<G: Genome>: Send + Sync {
    fn evaluate(&self, genome: &G) -> SfResult<Fitness>;
}

/// Capacity-1 record of the best individual ever observed.
///
/// Replacement requires strict fitness improvement; ties keep the incumbent.
/// The stored fitness is therefore non-decreasing across a run.
#[derive(Debug, Clone)]
pub struct HallOfFame<G> {
    best: Option<Individual<G>>,
}

impl<G> Default for HallOfFame<G> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<G: Genome> HallOfFame<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, population: &[Individual<G>]) {
        for ind in population {
            let Some(fitness) = ind.fitness() else {
                continue;
            };
            let improves = self
                .best
                .as_ref()
                .and_then(|b| b.fitness())
                .map_or(true, |current| fitness > current);
            if improves {
                self.best = Some(ind.clone());
            }
        }
    }

    pub fn best(&self) -> Option<&Individual<G>> {
        self.best.as_ref()
    }
}

/// Per-generation max/min over evaluated fitness values. Recomputed each
/// generation for logging and the convergence check; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub max: Fitness,
    pub min: Fitness,
}

impl GenerationStats {
    pub fn compile<G: Genome>(generation: usize, population: &[Individual<G>]) -> Self {
        let mut max = 0;
        let mut min = Fitness::MAX;
        for fitness in population.iter().filter_map(|i| i.fitness()) {
            max = max.max(fitness);
            min = min.min(fitness);
        }
        if min > max {
            min = max;
        }
        Self {
            generation,
            max,
            min,
        }
    }
}
