use super::Evaluator;
use crate::core_types::{Genome, Individual};
use crate::error::{ScafForgeError, SfResult};
use rayon::prelude::*;

/// Fixed worker pool dispatching pure fitness evaluations.
///
/// Built once at the start of a run and dropped at the end; the generational
/// loop blocks on each batch. Evaluation order is irrelevant (the evaluator
/// is pure) and results land on their originating individual.
pub struct EvalPool {
    pool: rayon::ThreadPool,
}

impl EvalPool {
    pub fn new(workers: usize) -> SfResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("scafforge-eval-{}", i))
            .build()
            .map_err(|e| ScafForgeError::Config(format!("worker pool: {}", e)))?;
        Ok(Self { pool })
    }

    /// Evaluate every stale individual in the batch. Any worker failure
    /// aborts the whole batch and propagates; no partial results are
    /// accepted.
    pub fn evaluate<G, E>(&self, batch: &mut [Individual<G>], evaluator: &E) -> SfResult<usize>
    where
        G: Genome,
        E: Evaluator<G>,
    {
        let stale: Vec<&mut Individual<G>> =
            batch.iter_mut().filter(|i| !i.is_evaluated()).collect();
        let count = stale.len();

        self.pool.install(|| {
            stale.into_par_iter().try_for_each(|ind| {
                let fitness = evaluator.evaluate(&ind.genome)?;
                ind.set_fitness(fitness);
                Ok(())
            })
        })?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Fitness, Tour};

    struct TourLength;

    impl Evaluator<Tour> for TourLength {
        fn evaluate(&self, tour: &Tour) -> SfResult<Fitness> {
            Ok(tour.0.len() as Fitness)
        }
    }

    struct AlwaysFails;

    impl Evaluator<Tour> for AlwaysFails {
        fn evaluate(&self, _tour: &Tour) -> SfResult<Fitness> {
            Err(ScafForgeError::Evaluation("oracle blew up".to_string()))
        }
    }

    #[test]
    fn only_stale_individuals_are_dispatched() {
        let pool = EvalPool::new(2).unwrap();
        let mut batch = vec![Individual::new(Tour::identity(4)); 6];
        batch[0].set_fitness(99);

        let evaluated = pool.evaluate(&mut batch, &TourLength).unwrap();
        assert_eq!(evaluated, 5);
        assert_eq!(batch[0].fitness(), Some(99));
        assert!(batch.iter().skip(1).all(|i| i.fitness() == Some(4)));
    }

    #[test]
    fn worker_failure_aborts_the_batch() {
        let pool = EvalPool::new(2).unwrap();
        let mut batch = vec![Individual::new(Tour::identity(4)); 3];
        let err = pool.evaluate(&mut batch, &AlwaysFails).unwrap_err();
        assert!(matches!(err, ScafForgeError::Evaluation(_)));
    }

    #[test]
    fn single_worker_pool_is_allowed() {
        let pool = EvalPool::new(1).unwrap();
        let mut batch = vec![Individual::new(Tour::identity(3)); 2];
        assert_eq!(pool.evaluate(&mut batch, &TourLength).unwrap(), 2);
    }
}
