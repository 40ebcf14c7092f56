use ordered_float::NotNan;
use rand::prelude::SmallRng;
use seqpair::decode;
use seqpair::entities::Problem;

use crate::policy::DecisionMaker;
use crate::session::Observation;

/// One-step lookahead: decodes the swap of the focus with every candidate and
/// proposes the one leading to the smallest area. Ties go to the lowest index.
#[derive(Debug, Clone, Copy)]
pub struct GreedyDecisionMaker<'a> {
    pub problem: &'a Problem,
}

impl<'a> GreedyDecisionMaker<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }
}

impl DecisionMaker for GreedyDecisionMaker<'_> {
    fn propose(&self, observation: &Observation<'_>, _rng: &mut SmallRng) -> usize {
        let base = observation.sequence_pair();
        observation
            .candidates()
            .filter_map(|candidate| {
                let mut sp = base.clone();
                sp.swap_rects(observation.focus, candidate);
                let area = decode(self.problem, &sp).ok()?.area;
                Some((candidate, NotNan::new(area).ok()?))
            })
            .min_by_key(|(_, area)| *area)
            .map(|(candidate, _)| candidate)
            .unwrap_or_else(|| (observation.focus + 1) % observation.n())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use seqpair::entities::{Rectangle, SequencePair};

    #[test]
    fn picks_the_swap_with_the_smallest_area() {
        //a long bar and two unit squares
        let rects = vec![
            Rectangle::try_new(0, 4.0, 1.0, false).unwrap(),
            Rectangle::try_new(1, 1.0, 1.0, false).unwrap(),
            Rectangle::try_new(2, 1.0, 1.0, false).unwrap(),
        ];
        let problem = Problem::new(rects, vec![]).unwrap();
        //1 left of 0, 2 on top of 1: bbox 5 x 2 = 10
        let sp = SequencePair::new(vec![1, 2, 0], vec![2, 1, 0], vec![false; 3]).unwrap();
        assert_eq!(decode(&problem, &sp).unwrap().area, 10.0);

        let obs = Observation {
            g_plus: &sp.g_plus,
            g_minus: &sp.g_minus,
            rotations: &sp.rotations,
            focus: 0,
        };
        let dm = GreedyDecisionMaker::new(&problem);
        let proposed = dm.propose(&obs, &mut SmallRng::seed_from_u64(0));

        let area_of = |candidate: usize| {
            let mut sp = sp.clone();
            sp.swap_rects(0, candidate);
            decode(&problem, &sp).unwrap().area
        };
        assert_ne!(proposed, 0);
        assert!(area_of(proposed) <= area_of(1));
        assert!(area_of(proposed) <= area_of(2));
    }
}
