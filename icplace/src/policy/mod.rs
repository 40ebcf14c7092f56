//! Decision makers driving a [`PerturbationSession`](crate::session::PerturbationSession)

mod greedy;
mod random;

pub use greedy::GreedyDecisionMaker;
pub use random::RandomDecisionMaker;

use clap::ValueEnum;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

use crate::session::Observation;

/// Proposes which rectangle the current focus should be swapped with.
///
/// The session treats decision makers as stateless. A single instance may serve several
/// sessions running concurrently, hence the `Send + Sync` bound.
pub trait DecisionMaker: Send + Sync {
    /// Returns a candidate in `0..observation.n()`, different from `observation.focus`
    fn propose(&self, observation: &Observation<'_>, rng: &mut SmallRng) -> usize;
}

impl<F> DecisionMaker for F
where
    F: Fn(&Observation<'_>, &mut SmallRng) -> usize + Send + Sync,
{
    fn propose(&self, observation: &Observation<'_>, rng: &mut SmallRng) -> usize {
        self(observation, rng)
    }
}

/// Built-in decision makers, selectable from the config file or command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMakerKind {
    /// Uniformly random candidate
    #[default]
    Random,
    /// Candidate whose swap yields the smallest area
    Greedy,
}
