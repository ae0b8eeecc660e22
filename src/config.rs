use crate::error::{ScafForgeError, SfResult};
use serde::{Deserialize, Serialize};

/// Knobs for a single evolutionary run.
///
/// Probabilities are per-pair (`crossover_probability`) and per-individual
/// (`mutation_probability`). `convergence_patience` is the number of
/// consecutive generations without strict improvement tolerated before the
/// search halts; there is no fixed generation cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub population_size: usize,
    pub crossover_probability: f64,
    pub mutation_probability: f64,
    pub tournament_size: usize,
    pub convergence_patience: usize,
    pub worker_count: usize,
    pub random_seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_probability: 0.7,
            mutation_probability: 0.2,
            tournament_size: 3,
            convergence_patience: 500,
            worker_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            random_seed: None,
        }
    }
}

impl GaConfig {
    /// Rejects impossible runs before any worker is spawned.
    pub fn validate(&self) -> SfResult<()> {
        if self.population_size == 0 {
            return Err(ScafForgeError::Config(
                "population_size must be positive".to_string(),
            ));
        }
        for (name, p) in [
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ScafForgeError::Config(format!(
                    "{} must lie in [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.tournament_size == 0 {
            return Err(ScafForgeError::Config(
                "tournament_size must be at least 1".to_string(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(ScafForgeError::Config(format!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size, self.population_size
            )));
        }
        if self.convergence_patience == 0 {
            return Err(ScafForgeError::Config(
                "convergence_patience must be positive".to_string(),
            ));
        }
        if self.worker_count == 0 {
            return Err(ScafForgeError::Config(
                "worker_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
