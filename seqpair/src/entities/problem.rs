use crate::PlacementError;
use crate::entities::{FixedBlock, Rectangle};
use crate::util::assertions::problem_ids_correct;
use itertools::Itertools;

/// Immutable description of a floorplanning problem: the rectangles to place and the fixed blocks to avoid.
#[derive(Clone, Debug)]
pub struct Problem {
    pub rectangles: Vec<Rectangle>,
    pub fixed_blocks: Vec<FixedBlock>,
}

impl Problem {
    /// Creates a new problem, fails if any pair of fixed blocks overlaps.
    /// Ids have to be dense and in order, see [`crate::io::import`] to build a problem from external input.
    pub fn new(rectangles: Vec<Rectangle>, fixed_blocks: Vec<FixedBlock>) -> Result<Self, PlacementError> {
        check_fixed_blocks(&fixed_blocks)?;
        let problem = Self {
            rectangles,
            fixed_blocks,
        };
        debug_assert!(problem_ids_correct(&problem));
        Ok(problem)
    }

    /// Number of rectangles
    pub fn n(&self) -> usize {
        self.rectangles.len()
    }

    pub fn rectangle(&self, id: usize) -> &Rectangle {
        &self.rectangles[id]
    }

    pub fn rotatable_ids(&self) -> Vec<usize> {
        self.rectangles
            .iter()
            .filter(|r| r.rotatable)
            .map(|r| r.id)
            .collect_vec()
    }

    /// Sum of the areas of all rectangles, a lower bound for any floorplan
    pub fn total_rect_area(&self) -> f32 {
        self.rectangles.iter().map(|r| r.area()).sum()
    }
}

/// Verifies that no two fixed blocks overlap.
/// Reports the first offending pair in input order.
pub fn check_fixed_blocks(blocks: &[FixedBlock]) -> Result<(), PlacementError> {
    match blocks
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.overlaps(b))
    {
        Some((a, b)) => Err(PlacementError::OverlappingFixedBlocks { a: a.id, b: b.id }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_fixed_blocks_rejected() {
        let rects = vec![Rectangle::try_new(0, 10.0, 5.0, false).unwrap()];
        let blocks = vec![
            FixedBlock::try_new(0, 10.0, 0.0, 0.0, 5.0).unwrap(),
            FixedBlock::try_new(1, 5.0, 2.0, -5.0, 8.0).unwrap(),
        ];
        let err = Problem::new(rects, blocks).unwrap_err();
        assert_eq!(err, PlacementError::OverlappingFixedBlocks { a: 0, b: 1 });
    }

    #[test]
    fn touching_fixed_blocks_accepted() {
        let blocks = vec![
            FixedBlock::try_new(0, 10.0, 0.0, 0.0, 5.0).unwrap(),
            FixedBlock::try_new(1, 10.0, 5.0, 0.0, 8.0).unwrap(),
        ];
        assert!(Problem::new(vec![], blocks).is_ok());
    }
}
