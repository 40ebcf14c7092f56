mod fixed_block;
mod floorplan;
mod problem;
mod rectangle;
mod sequence_pair;
mod solution;

#[doc(inline)]
pub use fixed_block::FixedBlock;
#[doc(inline)]
pub use floorplan::Floorplan;
#[doc(inline)]
pub use floorplan::PlacedRect;
#[doc(inline)]
pub use problem::Problem;
#[doc(inline)]
pub use problem::check_fixed_blocks;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use sequence_pair::SequencePair;
#[doc(inline)]
pub use solution::Solution;
