use crate::DecodeError;
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

/// Encodes the relative placement of `n` rectangles as two permutations of `0..n` and a rotation vector.
///
/// `a` lies left of `b` if `a` precedes `b` in both sequences.
/// `a` lies below `b` if `a` precedes `b` in `g_plus` but follows it in `g_minus`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SequencePair {
    /// The positive sequence, `G+`
    pub g_plus: Vec<usize>,
    /// The negative sequence, `G-`
    pub g_minus: Vec<usize>,
    /// `rotations[i]` is only meaningful if rectangle `i` is rotatable
    pub rotations: Vec<bool>,
}

impl SequencePair {
    /// Creates a sequence pair, verifying both sequences are permutations of the same `0..n`.
    pub fn new(g_plus: Vec<usize>, g_minus: Vec<usize>, rotations: Vec<bool>) -> Result<Self, DecodeError> {
        let sp = SequencePair {
            g_plus,
            g_minus,
            rotations,
        };
        sp.validate(sp.g_plus.len())?;
        Ok(sp)
    }

    /// Both sequences in ascending order, no rotations
    pub fn identity(n: usize) -> Self {
        SequencePair {
            g_plus: (0..n).collect_vec(),
            g_minus: (0..n).collect_vec(),
            rotations: vec![false; n],
        }
    }

    /// Independently shuffled `G+` and `G-`, no rotations
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        let mut sp = Self::identity(n);
        sp.g_plus.shuffle(rng);
        sp.g_minus.shuffle(rng);
        sp
    }

    pub fn n(&self) -> usize {
        self.g_plus.len()
    }

    /// Checks the representation invariant against a problem of `n` rectangles
    pub fn validate(&self, n: usize) -> Result<(), DecodeError> {
        if !is_permutation(&self.g_plus, n) {
            return Err(DecodeError::NotAPermutation { sequence: "G+", n });
        }
        if !is_permutation(&self.g_minus, n) {
            return Err(DecodeError::NotAPermutation { sequence: "G-", n });
        }
        if self.rotations.len() != n {
            return Err(DecodeError::RotationLength {
                len: self.rotations.len(),
                n,
            });
        }
        Ok(())
    }

    /// Swaps the rectangles at positions `i` and `j` of `G+`
    pub fn swap_plus(&mut self, i: usize, j: usize) {
        self.g_plus.swap(i, j);
    }

    /// Swaps the rectangles at positions `i` and `j` of `G-`
    pub fn swap_minus(&mut self, i: usize, j: usize) {
        self.g_minus.swap(i, j);
    }

    pub fn flip_rotation(&mut self, id: usize) {
        self.rotations[id] = !self.rotations[id];
    }

    /// Transposes rectangles `a` and `b` in `G+`, and independently in `G-`.
    /// Their positions generally differ between both sequences.
    pub fn swap_rects(&mut self, a: usize, b: usize) {
        for seq in [&mut self.g_plus, &mut self.g_minus] {
            let pos_a = seq.iter().position(|&v| v == a);
            let pos_b = seq.iter().position(|&v| v == b);
            debug_assert!(pos_a.is_some() && pos_b.is_some());
            if let (Some(pos_a), Some(pos_b)) = (pos_a, pos_b) {
                seq.swap(pos_a, pos_b);
            }
        }
    }

    /// `inverse[id]` is the position of rectangle `id` in `G-`
    pub fn minus_positions(&self) -> Vec<usize> {
        inverse(&self.g_minus)
    }
}

fn inverse(seq: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; seq.len()];
    for (pos, &id) in seq.iter().enumerate() {
        inv[id] = pos;
    }
    inv
}

fn is_permutation(seq: &[usize], n: usize) -> bool {
    if seq.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    seq.iter().all(|&v| v < n && !std::mem::replace(&mut seen[v], true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    #[test]
    fn swap_rects_transposes_each_sequence_independently() {
        let mut sp = SequencePair::new(vec![2, 0, 1], vec![1, 2, 0], vec![false; 3]).unwrap();
        sp.swap_rects(0, 1);
        assert_eq!(sp.g_plus, vec![2, 1, 0]);
        assert_eq!(sp.g_minus, vec![0, 2, 1]);
    }

    #[test]
    fn rejects_non_permutations() {
        assert_eq!(
            SequencePair::new(vec![0, 0, 1], vec![0, 1, 2], vec![false; 3]),
            Err(DecodeError::NotAPermutation { sequence: "G+", n: 3 })
        );
        assert_eq!(
            SequencePair::new(vec![0, 1, 2], vec![0, 1, 3], vec![false; 3]),
            Err(DecodeError::NotAPermutation { sequence: "G-", n: 3 })
        );
        assert_eq!(
            SequencePair::new(vec![0, 1], vec![1, 0], vec![false; 3]),
            Err(DecodeError::RotationLength { len: 3, n: 2 })
        );
    }

    #[test]
    fn random_pairs_are_permutations() {
        let mut rng = SmallRng::seed_from_u64(0);
        for n in [0, 1, 7, 32] {
            let sp = SequencePair::random(n, &mut rng);
            assert!(sp.validate(n).is_ok());
        }
    }
}
