use rand::Rng;
use rand::prelude::SmallRng;

use crate::policy::DecisionMaker;
use crate::session::Observation;

/// Baseline: every rectangle except the focus is equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDecisionMaker;

impl DecisionMaker for RandomDecisionMaker {
    fn propose(&self, observation: &Observation<'_>, rng: &mut SmallRng) -> usize {
        let i = rng.random_range(0..observation.n() - 1);
        if i >= observation.focus { i + 1 } else { i }
    }
}
