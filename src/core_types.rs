use serde::{Deserialize, Serialize};

/// Index of a block (scaffold) in the table. Valid ids are `0..N`.
pub type BlockId = u32;

/// Scalar colinearity fitness: length of the longest monotonic marker run.
/// Bounded by the total marker count of the table.
pub type Fitness = u32;

/// The seam the genetic operators and the invariant check work through.
///
/// A genome is a permutation of the block ids `0..N`; the oriented variant
/// additionally carries a strand flag per element, which travels with its id
/// under [`swap`](Genome::swap).
pub trait Genome: Clone + Send + Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn id_at(&self, index: usize) -> BlockId;

    fn swap(&mut self, a: usize, b: usize);

    /// Every id in `0..len` present exactly once.
    fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for i in 0..self.len() {
            let id = self.id_at(i) as usize;
            if id >= seen.len() || seen[id] {
                return false;
            }
            seen[id] = true;
        }
        true
    }
}

/// Order-only genome: a permutation of block ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour(pub Vec<BlockId>);

impl Tour {
    /// The ordering `0, 1, .., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n as BlockId).collect())
    }
}

impl Genome for Tour {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn id_at(&self, index: usize) -> BlockId {
        self.0[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

/// One element of an [`OrientedTour`]: a block id plus its strand.
///
/// Replaces the sign-on-integer encoding of signed permutations, which has
/// no way to flip block 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientedBlock {
    pub id: BlockId,
    pub reversed: bool,
}

/// Order + orientation genome: the id sequence is a permutation of `0..N`,
/// the strand flag is independent per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientedTour(pub Vec<OrientedBlock>);

impl OrientedTour {
    /// Wrap an ordering with every block on the forward strand.
    pub fn forward(order: &[BlockId]) -> Self {
        Self(
            order
                .iter()
                .map(|&id| OrientedBlock {
                    id,
                    reversed: false,
                })
                .collect(),
        )
    }
}

impl Genome for OrientedTour {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn id_at(&self, index: usize) -> BlockId {
        self.0[index].id
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

/// A candidate solution plus its cached fitness.
///
/// `fitness` is `None` while stale; every operator that touches the genome
/// calls [`invalidate`](Individual::invalidate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual<G> {
    pub genome: G,
    fitness: Option<Fitness>,
}

impl<G> Individual<G> {
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    pub fn fitness(&self) -> Option<Fitness> {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = Some(fitness);
    }

    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }
}

pub type Population<G> = Vec<Individual<G>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_permutation() {
        assert!(Tour::identity(6).is_permutation());
    }

    #[test]
    fn duplicate_id_is_not_permutation() {
        assert!(!Tour(vec![0, 1, 1, 3]).is_permutation());
    }

    #[test]
    fn out_of_range_id_is_not_permutation() {
        assert!(!Tour(vec![0, 1, 4]).is_permutation());
    }

    #[test]
    fn oriented_permutation_ignores_strand() {
        let mut tour = OrientedTour::forward(&[2, 0, 1]);
        tour.0[1].reversed = true;
        assert!(tour.is_permutation());
    }

    #[test]
    fn fitness_cache_lifecycle() {
        let mut ind = Individual::new(Tour::identity(3));
        assert!(!ind.is_evaluated());
        ind.set_fitness(7);
        assert_eq!(ind.fitness(), Some(7));
        ind.invalidate();
        assert!(!ind.is_evaluated());
    }
}
