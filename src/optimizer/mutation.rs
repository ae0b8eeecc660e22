use super::Mutation;
use crate::core_types::{OrientedBlock, OrientedTour, Tour};
use fastrand::Rng;

/// Reverse the half-open slice `[p, q)`.
pub fn invert_segment<T>(genes: &mut [T], p: usize, q: usize) {
    genes[p..q].reverse();
}

/// Remove the element at `q` and reinsert it at `p`, shifting the elements
/// in between.
pub fn shift_insert<T>(genes: &mut Vec<T>, p: usize, q: usize) {
    let gene = genes.remove(q);
    genes.insert(p, gene);
}

/// Toggle the strand of every element in `[p, q)`.
pub fn flip_range(genes: &mut [OrientedBlock], p: usize, q: usize) {
    for gene in &mut genes[p..q] {
        gene.reversed = !gene.reversed;
    }
}

/// Order-variant mutation: a fair coin picks inversion or insertion.
/// Both moves are permutation-preserving.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourMutation;

impl Mutation<Tour> for TourMutation {
    fn mutate(&self, tour: &mut Tour, rng: &mut Rng) {
        let len = tour.0.len();
        if len < 2 {
            return;
        }
        let mut p = rng.usize(0..len);
        let mut q = rng.usize(0..len);
        if rng.bool() {
            if p > q {
                std::mem::swap(&mut p, &mut q);
            }
            invert_segment(&mut tour.0, p, q);
        } else {
            shift_insert(&mut tour.0, p, q);
        }
    }
}

/// Orientation-variant mutation: a fair coin picks a range flip or a single
/// flip. The magnitude permutation is untouched, only strands change.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationMutation;

impl Mutation<OrientedTour> for OrientationMutation {
    fn mutate(&self, tour: &mut OrientedTour, rng: &mut Rng) {
        let len = tour.0.len();
        if len == 0 {
            return;
        }
        if rng.bool() {
            let mut p = rng.usize(0..len);
            let mut q = rng.usize(0..len);
            if p > q {
                std::mem::swap(&mut p, &mut q);
            }
            flip_range(&mut tour.0, p, q);
        } else {
            let p = rng.usize(0..len);
            tour.0[p].reversed = !tour.0[p].reversed;
        }
    }
}
