pub mod annealer;
pub mod moves;
pub mod schedule;
