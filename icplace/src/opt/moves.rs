use rand::Rng;
use seqpair::entities::SequencePair;

/// Neighbourhood move on a sequence pair. Every move is its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Swap the rectangles at two positions of `G+`
    SwapPlus(usize, usize),
    /// Swap the rectangles at two positions of `G-`
    SwapMinus(usize, usize),
    /// Flip the rotation flag of a rotatable rectangle
    Rotate(usize),
}

impl Move {
    /// Draws a move kind uniformly among the ones applicable, then its operands uniformly.
    /// Swaps need at least two rectangles, rotations a rotatable rectangle.
    /// Returns `None` if no move is applicable at all.
    pub fn sample(n: usize, rotatable: &[usize], rng: &mut impl Rng) -> Option<Move> {
        let n_swap_kinds = if n >= 2 { 2 } else { 0 };
        let n_kinds = n_swap_kinds + usize::from(!rotatable.is_empty());
        if n_kinds == 0 {
            return None;
        }
        let mv = match rng.random_range(0..n_kinds) {
            0 if n_swap_kinds > 0 => {
                let (i, j) = distinct_pair(n, rng);
                Move::SwapPlus(i, j)
            }
            1 if n_swap_kinds > 0 => {
                let (i, j) = distinct_pair(n, rng);
                Move::SwapMinus(i, j)
            }
            _ => Move::Rotate(rotatable[rng.random_range(0..rotatable.len())]),
        };
        Some(mv)
    }

    pub fn apply(&self, sp: &mut SequencePair) {
        match *self {
            Move::SwapPlus(i, j) => sp.swap_plus(i, j),
            Move::SwapMinus(i, j) => sp.swap_minus(i, j),
            Move::Rotate(id) => sp.flip_rotation(id),
        }
    }

    /// Reverts [`Move::apply`]
    pub fn undo(&self, sp: &mut SequencePair) {
        self.apply(sp)
    }
}

/// Two distinct indices in `0..n`, `n >= 2`
fn distinct_pair(n: usize, rng: &mut impl Rng) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
