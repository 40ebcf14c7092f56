use log::{debug, warn};
use ndarray::Array2;
use rand::Rng;
use seqpair::entities::{Problem, SequencePair, Solution};
use seqpair::{PlacementError, decode};

/// Bounded sequence of swap edits on a sequence pair, meant to hand a better than random seed to the annealer.
///
/// Every step a decision maker is shown the current sequence pair and a *focus* rectangle,
/// and answers with a candidate rectangle to swap the focus with.
/// The session itself does not learn, it only enforces the protocol and computes rewards.
#[derive(Clone, Debug)]
pub struct PerturbationSession<'a> {
    problem: &'a Problem,
    sequence_pair: SequencePair,
    focus: usize,
    steps_taken: usize,
    step_limit: usize,
    /// Area at step 0
    initial_area: f32,
    current_area: f32,
}

/// What a decision maker gets to see before proposing a candidate
#[derive(Clone, Copy, Debug)]
pub struct Observation<'a> {
    pub g_plus: &'a [usize],
    pub g_minus: &'a [usize],
    pub rotations: &'a [bool],
    /// Rectangle currently in question
    pub focus: usize,
}

/// Result of a single session step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// `area_after - area_before`, negative values are improvements
    pub reward: f32,
    /// The session reached its step limit
    pub done: bool,
}

impl<'a> PerturbationSession<'a> {
    /// Starts a session from `seed`, drawing the first focus uniformly.
    /// A single rectangle has nothing to be swapped with, such a session is terminal from the start.
    pub fn new(
        problem: &'a Problem,
        seed: SequencePair,
        step_limit: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, PlacementError> {
        let n = problem.n();
        if n == 0 {
            return Err(PlacementError::EmptyProblem);
        }
        let initial_area = decode(problem, &seed)?.area;
        let step_limit = match n {
            1 => {
                warn!("[SESSION] single rectangle, no swaps possible");
                0
            }
            _ => step_limit,
        };
        Ok(Self {
            problem,
            sequence_pair: seed,
            focus: rng.random_range(0..n),
            steps_taken: 0,
            step_limit,
            initial_area,
            current_area: initial_area,
        })
    }

    pub fn observe(&self) -> Observation<'_> {
        Observation {
            g_plus: &self.sequence_pair.g_plus,
            g_minus: &self.sequence_pair.g_minus,
            rotations: &self.sequence_pair.rotations,
            focus: self.focus,
        }
    }

    /// Swaps the focus with `candidate` (independently in `G+` and `G-`), then moves the focus
    /// to a different, uniformly drawn rectangle.
    pub fn step(&mut self, candidate: usize, rng: &mut impl Rng) -> Result<Step, PlacementError> {
        if self.is_terminal() {
            return Err(PlacementError::SessionTerminated);
        }
        let n = self.problem.n();
        if candidate >= n || candidate == self.focus {
            return Err(PlacementError::InvalidCandidate {
                candidate,
                focus: self.focus,
                n,
            });
        }

        let area_before = self.current_area;
        self.sequence_pair.swap_rects(self.focus, candidate);
        let area_after = decode(self.problem, &self.sequence_pair)?.area;
        debug!(
            "[SESSION: {}/{}] swapped {} <-> {}, area: {:.3} -> {:.3}",
            self.steps_taken + 1,
            self.step_limit,
            self.focus,
            candidate,
            area_before,
            area_after
        );

        self.current_area = area_after;
        self.steps_taken += 1;
        self.focus = draw_other(n, self.focus, rng);

        Ok(Step {
            reward: area_after - area_before,
            done: self.is_terminal(),
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.steps_taken >= self.step_limit
    }

    /// Reward of the whole session: area of the solution annealed from this session's
    /// final state minus the area at step 0. Negative if the seed helped.
    pub fn terminal_reward(&self, annealed: &Solution) -> f32 {
        annealed.area() - self.initial_area
    }

    pub fn sequence_pair(&self) -> &SequencePair {
        &self.sequence_pair
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn initial_area(&self) -> f32 {
        self.initial_area
    }

    pub fn current_area(&self) -> f32 {
        self.current_area
    }
}

impl Observation<'_> {
    pub fn n(&self) -> usize {
        self.g_plus.len()
    }

    pub fn one_hot(&self) -> Vec<i64> {
        (0..self.n()).map(|i| i64::from(i == self.focus)).collect()
    }

    /// Rectangles the focus may be swapped with: all except the focus itself
    pub fn candidates(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.n()).filter(|&i| i != self.focus)
    }

    /// `3 x n` matrix with rows `G+`, `G-` and the one-hot encoded focus
    pub fn to_array(&self) -> Array2<i64> {
        let n = self.n();
        Array2::from_shape_fn((3, n), |(row, col)| match row {
            0 => self.g_plus[col] as i64,
            1 => self.g_minus[col] as i64,
            _ => i64::from(col == self.focus),
        })
    }

    /// The observed state as an owned sequence pair
    pub fn sequence_pair(&self) -> SequencePair {
        SequencePair {
            g_plus: self.g_plus.to_vec(),
            g_minus: self.g_minus.to_vec(),
            rotations: self.rotations.to_vec(),
        }
    }
}

/// Uniform draw from `0..n` without `exclude`, `n >= 2`
fn draw_other(n: usize, exclude: usize, rng: &mut impl Rng) -> usize {
    let i = rng.random_range(0..n - 1);
    if i >= exclude { i + 1 } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use seqpair::entities::Rectangle;

    fn unit_squares(n: usize) -> Problem {
        let rects = (0..n)
            .map(|i| Rectangle::try_new(i, 1.0, 1.0, false).unwrap())
            .collect_vec();
        Problem::new(rects, vec![]).unwrap()
    }

    fn session_with_focus(problem: &Problem, seed: SequencePair, focus: usize, limit: usize) -> PerturbationSession<'_> {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut session = PerturbationSession::new(problem, seed, limit, &mut rng).unwrap();
        session.focus = focus;
        session
    }

    #[test]
    fn swap_transposes_focus_and_candidate_in_both_sequences() {
        let problem = unit_squares(3);
        let seed = SequencePair::new(vec![2, 0, 1], vec![1, 2, 0], vec![false; 3]).unwrap();
        let mut session = session_with_focus(&problem, seed, 0, 10);
        let mut rng = SmallRng::seed_from_u64(0);
        session.step(1, &mut rng).unwrap();
        assert_eq!(session.sequence_pair().g_plus, vec![2, 1, 0]);
        assert_eq!(session.sequence_pair().g_minus, vec![0, 2, 1]);
        assert_eq!(session.steps_taken(), 1);
        assert_ne!(session.focus(), 0);
    }

    #[test]
    fn reward_is_the_area_delta() {
        let problem = unit_squares(3);
        //0 left of 1, 2 on top of both: area 4
        let seed = SequencePair::new(vec![0, 1, 2], vec![2, 0, 1], vec![false; 3]).unwrap();
        let mut session = session_with_focus(&problem, seed, 2, 10);
        assert_eq!(session.initial_area(), 4.0);
        let mut rng = SmallRng::seed_from_u64(0);
        //swapping 2 and 1 yields G+ [0,2,1], G- [1,0,2]: a 2 wide, 2 high L-shape is still area 4
        let step = session.step(1, &mut rng).unwrap();
        assert_eq!(step.reward, session.current_area() - 4.0);
        assert!(!step.done);
    }

    #[test]
    fn focus_and_out_of_range_candidates_are_rejected() {
        let problem = unit_squares(3);
        let mut session = session_with_focus(&problem, SequencePair::identity(3), 1, 10);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            session.step(1, &mut rng),
            Err(PlacementError::InvalidCandidate { candidate: 1, focus: 1, n: 3 })
        );
        assert_eq!(
            session.step(3, &mut rng),
            Err(PlacementError::InvalidCandidate { candidate: 3, focus: 1, n: 3 })
        );
        assert_eq!(session.steps_taken(), 0);
    }

    #[test]
    fn terminates_at_the_step_limit() {
        let problem = unit_squares(4);
        let mut rng = SmallRng::seed_from_u64(3);
        let seed = SequencePair::random(4, &mut rng);
        let mut session = PerturbationSession::new(&problem, seed, 5, &mut rng).unwrap();
        let mut dones = vec![];
        while !session.is_terminal() {
            let candidate = session.observe().candidates().next().unwrap();
            dones.push(session.step(candidate, &mut rng).unwrap().done);
            assert!(session.sequence_pair().validate(4).is_ok());
        }
        assert_eq!(dones, vec![false, false, false, false, true]);
        assert_eq!(session.step(0, &mut rng), Err(PlacementError::SessionTerminated));
    }

    #[test]
    fn focus_never_repeats() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let n = rng.random_range(2..10);
            let exclude = rng.random_range(0..n);
            let drawn = draw_other(n, exclude, &mut rng);
            assert!(drawn < n && drawn != exclude);
        }
    }

    #[test]
    fn observation_matrix_layout() {
        let problem = unit_squares(3);
        let seed = SequencePair::new(vec![2, 0, 1], vec![1, 2, 0], vec![false; 3]).unwrap();
        let session = session_with_focus(&problem, seed, 0, 10);
        let obs = session.observe();
        assert_eq!(
            obs.to_array(),
            ndarray::arr2(&[[2, 0, 1], [1, 2, 0], [1, 0, 0]])
        );
        assert_eq!(obs.one_hot(), vec![1, 0, 0]);
        assert_eq!(obs.candidates().collect_vec(), vec![1, 2]);
    }

    #[test]
    fn single_rectangle_session_is_terminal() {
        let problem = unit_squares(1);
        let mut rng = SmallRng::seed_from_u64(0);
        let session = PerturbationSession::new(&problem, SequencePair::identity(1), 10, &mut rng).unwrap();
        assert!(session.is_terminal());
    }

    #[test]
    fn empty_problem_has_no_session() {
        let problem = unit_squares(0);
        let mut rng = SmallRng::seed_from_u64(0);
        let res = PerturbationSession::new(&problem, SequencePair::identity(0), 10, &mut rng);
        assert_eq!(res.unwrap_err(), PlacementError::EmptyProblem);
    }
}
