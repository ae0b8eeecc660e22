use super::Selection;
use crate::core_types::{Genome, Individual, Population};
use fastrand::Rng;

/// Tournament selection: fittest of `size` uniform picks, with replacement.
/// `size = 1` degenerates to uniform random sampling.
#[derive(Debug, Clone, Copy)]
pub struct Tournament {
    pub size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl<G: Genome> Selection<G> for Tournament {
    fn select(
        &self,
        population: &[Individual<G>],
        count: usize,
        rng: &mut Rng,
    ) -> Population<G> {
        let mut chosen = Vec::with_capacity(count);
        for _ in 0..count {
            let mut winner = rng.usize(0..population.len());
            for _ in 1..self.size {
                let rival = rng.usize(0..population.len());
                if population[rival].fitness() > population[winner].fitness() {
                    winner = rival;
                }
            }
            chosen.push(population[winner].clone());
        }
        chosen
    }
}
