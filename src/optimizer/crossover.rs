use super::Crossover;
use crate::core_types::Genome;
use fastrand::Rng;

/// Partially-matched crossover (PMX) over the block-id alphabet.
///
/// Two cut points are drawn; inside the window the children exchange the
/// block at each position, and the clash that would create a duplicate is
/// resolved by swapping with the block's current position, tracked through
/// per-child position maps. Both children stay valid permutations, and an
/// oriented block's strand flag travels with its id.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartiallyMatched;

impl<G: Genome> Crossover<G> for PartiallyMatched {
    fn mate(&self, a: &mut G, b: &mut G, rng: &mut Rng) {
        let len = a.len();
        debug_assert_eq!(len, b.len());
        if len < 2 {
            return;
        }

        let mut cut1 = rng.usize(0..=len);
        let mut cut2 = rng.usize(0..len);
        if cut2 >= cut1 {
            cut2 += 1;
        } else {
            std::mem::swap(&mut cut1, &mut cut2);
        }

        // pos_x[id] = index of `id` in genome x
        let mut pos_a = vec![0usize; len];
        let mut pos_b = vec![0usize; len];
        for i in 0..len {
            pos_a[a.id_at(i) as usize] = i;
            pos_b[b.id_at(i) as usize] = i;
        }

        for i in cut1..cut2 {
            let va = a.id_at(i) as usize;
            let vb = b.id_at(i) as usize;

            a.swap(i, pos_a[vb]);
            b.swap(i, pos_b[va]);

            pos_a.swap(va, vb);
            pos_b.swap(va, vb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{BlockId, OrientedTour, Tour};
    use proptest::prelude::*;

    fn sorted_ids<G: Genome>(genome: &G) -> Vec<BlockId> {
        let mut ids: Vec<BlockId> = (0..genome.len()).map(|i| genome.id_at(i)).collect();
        ids.sort();
        ids
    }

    #[test]
    fn both_children_stay_permutations() {
        let mut rng = Rng::with_seed(42);
        let mut a = Tour(vec![0, 1, 2, 3, 4]);
        let mut b = Tour(vec![4, 3, 2, 1, 0]);
        PartiallyMatched.mate(&mut a, &mut b, &mut rng);
        assert_eq!(sorted_ids(&a), vec![0, 1, 2, 3, 4]);
        assert_eq!(sorted_ids(&b), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn strand_flags_travel_with_their_block() {
        let mut rng = Rng::with_seed(9);
        let mut a = OrientedTour::forward(&[0, 1, 2, 3, 4, 5]);
        a.0[2].reversed = true;
        let mut b = OrientedTour::forward(&[5, 4, 3, 2, 1, 0]);
        PartiallyMatched.mate(&mut a, &mut b, &mut rng);

        assert!(a.is_permutation());
        assert!(b.is_permutation());
        for gene in &a.0 {
            assert_eq!(gene.reversed, gene.id == 2);
        }
        assert!(b.0.iter().all(|g| !g.reversed));
    }

    proptest! {
        #[test]
        fn prop_permutation_closure(seed in any::<u64>(), len in 2usize..24) {
            let mut rng = Rng::with_seed(seed);
            let mut a = Tour::identity(len);
            let mut b = Tour::identity(len);
            rng.shuffle(&mut a.0);
            rng.shuffle(&mut b.0);

            PartiallyMatched.mate(&mut a, &mut b, &mut rng);

            prop_assert!(a.is_permutation(), "child a broke closure: {:?}", a.0);
            prop_assert!(b.is_permutation(), "child b broke closure: {:?}", b.0);
        }
    }
}
