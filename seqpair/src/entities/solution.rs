use crate::entities::{Floorplan, SequencePair};
use std::time::Instant;

/// Immutable snapshot of a sequence pair and the floorplan it decodes to.
#[derive(Clone, Debug)]
pub struct Solution {
    pub floorplan: Floorplan,
    pub sequence_pair: SequencePair,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(floorplan: Floorplan, sequence_pair: SequencePair) -> Self {
        Solution {
            floorplan,
            sequence_pair,
            time_stamp: Instant::now(),
        }
    }

    pub fn area(&self) -> f32 {
        self.floorplan.area
    }
}
