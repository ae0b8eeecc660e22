use super::{Crossover, EvalPool, Evaluator, GenerationStats, HallOfFame, Mutation, Selection};
use crate::config::GaConfig;
use crate::core_types::{Fitness, Genome, Individual, Population};
use crate::error::{ScafForgeError, SfResult};
use serde::Serialize;
use tracing::{debug, info};

/// Result of a converged run: the hall-of-fame genome, its fitness, and the
/// generation count at termination.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome<G> {
    pub best: G,
    pub fitness: Fitness,
    pub generations: usize,
}

/// Convergence-driven generational loop.
///
/// The strategies are first-class typed values injected at construction.
/// The loop replaces the population wholesale each generation (no elitism
/// beyond the hall of fame) and terminates once `convergence_patience`
/// consecutive generations pass without strict improvement of the best
/// fitness ever seen.
pub struct EvolutionRunner<X, M, S, E> {
    config: GaConfig,
    crossover: X,
    mutation: M,
    selection: S,
    evaluator: E,
}

impl<X, M, S, E> EvolutionRunner<X, M, S, E> {
    pub fn new(config: GaConfig, crossover: X, mutation: M, selection: S, evaluator: E) -> Self {
        Self {
            config,
            crossover,
            mutation,
            selection,
            evaluator,
        }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn run<G>(&self, seed: G) -> SfResult<RunOutcome<G>>
    where
        G: Genome,
        X: Crossover<G>,
        M: Mutation<G>,
        S: Selection<G>,
        E: Evaluator<G>,
    {
        let cfg = &self.config;
        cfg.validate()?;
        if !seed.is_permutation() {
            return Err(ScafForgeError::Config(
                "seed ordering is not a permutation of the block ids".to_string(),
            ));
        }

        debug!(
            population = cfg.population_size,
            cxpb = cfg.crossover_probability,
            mutpb = cfg.mutation_probability,
            patience = cfg.convergence_patience,
            workers = cfg.worker_count,
            "GA setup"
        );

        let mut rng = match cfg.random_seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        let pool = EvalPool::new(cfg.worker_count)?;

        // Seed population: identical clones, all stale. Variation supplies
        // the diversity.
        let mut population: Population<G> = (0..cfg.population_size)
            .map(|_| Individual::new(seed.clone()))
            .collect();
        pool.evaluate(&mut population, &self.evaluator)?;

        let mut hof = HallOfFame::new();
        hof.update(&population);

        let mut best_ever = GenerationStats::compile(0, &population).max;
        let mut last_improvement = 0usize;
        let mut generation = 0usize;

        loop {
            generation += 1;

            let mut offspring = self
                .selection
                .select(&population, population.len(), &mut rng);

            for pair in offspring.chunks_mut(2) {
                if pair.len() == 2 && rng.f64() < cfg.crossover_probability {
                    let (left, right) = pair.split_at_mut(1);
                    self.crossover
                        .mate(&mut left[0].genome, &mut right[0].genome, &mut rng);
                    left[0].invalidate();
                    right[0].invalidate();
                }
            }
            for ind in &mut offspring {
                if rng.f64() < cfg.mutation_probability {
                    self.mutation.mutate(&mut ind.genome, &mut rng);
                    ind.invalidate();
                }
            }

            for ind in &offspring {
                if !ind.genome.is_permutation() {
                    return Err(ScafForgeError::Invariant(format!(
                        "generation {}: an operator broke the block permutation",
                        generation
                    )));
                }
            }

            pool.evaluate(&mut offspring, &self.evaluator)?;
            hof.update(&offspring);
            population = offspring;

            let stats = GenerationStats::compile(generation, &population);
            debug!(
                generation,
                max = stats.max,
                min = stats.min,
                "generation complete"
            );
            if generation % 20 == 0 {
                info!(generation, max_score = stats.max, "search progress");
            }

            // Only strict improvement resets the patience window.
            if stats.max > best_ever {
                best_ever = stats.max;
                last_improvement = generation;
            }
            if generation - last_improvement > cfg.convergence_patience {
                break;
            }
        }

        let best = hof.best().cloned().ok_or_else(|| {
            ScafForgeError::Evaluation("no individual was ever evaluated".to_string())
        })?;
        let fitness = best.fitness().unwrap_or(0);
        info!(fitness, generations = generation, "search converged");

        Ok(RunOutcome {
            best: best.genome,
            fitness,
            generations: generation,
        })
    }
}
