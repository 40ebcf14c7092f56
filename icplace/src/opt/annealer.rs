use log::{debug, info};
use rand::Rng;
use rand::prelude::SmallRng;
use seqpair::entities::{Problem, SequencePair, Solution};
use seqpair::util::assertions::{sequence_pair_is_valid, solution_is_consistent};
use seqpair::{PlacementError, decode};
use std::time::Instant;
use thousands::Separable;

use crate::config::AnnealConfig;
use crate::opt::moves::Move;
use crate::opt::schedule::CoolingSchedule;

/// Simulated annealing over sequence pairs, minimizing the area of the decoded bounding box.
///
/// Moves that do not increase the area (ties included) are always accepted,
/// worsening moves with probability `exp(-delta / T)`.
/// The best state ever encountered is returned, not necessarily the last accepted one.
pub struct Annealer {
    pub config: AnnealConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub move_counter: usize,
}

impl Annealer {
    pub fn new(config: AnnealConfig, rng: SmallRng) -> Self {
        Self {
            config,
            rng,
            move_counter: 0,
        }
    }

    /// Anneals from `initial`, or from a random sequence pair if none is given.
    /// Stops when either the step budget or the time budget is exhausted.
    pub fn solve(
        &mut self,
        problem: &Problem,
        initial: Option<SequencePair>,
    ) -> Result<Solution, PlacementError> {
        let n = problem.n();
        if n == 0 {
            return Err(PlacementError::EmptyProblem);
        }
        let start = Instant::now();
        let time_limit = self.config.time_limit();

        let mut current = match initial {
            Some(sp) => {
                sp.validate(n)?;
                sp
            }
            None => SequencePair::random(n, &mut self.rng),
        };
        let mut current_area = decode(problem, &current)?.area;
        let mut best = Solution::new(decode(problem, &current)?, current.clone());

        let schedule = CoolingSchedule::from_config(&self.config, problem, &current, &mut self.rng)?;
        let rotatable = problem.rotatable_ids();

        info!(
            "[SA] starting from area {:.3} ({} steps, {:.2} min, T: {:.3} -> {:.5})",
            current_area,
            self.config.n_steps.separate_with_commas(),
            self.config.time_limit_min,
            schedule.t_start,
            schedule.t_end
        );

        let mut n_accepted = 0;
        let mut n_moves = 0;
        for step in 0..self.config.n_steps {
            if start.elapsed() >= time_limit {
                info!("[SA] time limit reached after {} moves", step.separate_with_commas());
                break;
            }
            let Some(mv) = Move::sample(n, &rotatable, &mut self.rng) else {
                debug!("[SA] no applicable moves for this problem");
                break;
            };

            mv.apply(&mut current);
            let floorplan = decode(problem, &current)?;
            let delta = floorplan.area - current_area;
            let temperature = schedule.temperature(step);
            n_moves += 1;

            let accept = delta <= 0.0 || self.rng.random::<f32>() < (-delta / temperature).exp();
            if accept {
                n_accepted += 1;
                current_area = floorplan.area;
                if floorplan.area < best.area() {
                    debug!(
                        "[SA: {step}/{}] better: {:.3} (T: {:.3})",
                        self.config.n_steps, floorplan.area, temperature
                    );
                    best = Solution::new(floorplan, current.clone());
                }
            } else {
                mv.undo(&mut current);
            }
            debug_assert!(sequence_pair_is_valid(problem, &current));
        }
        self.move_counter += n_moves;

        info!(
            "[SA] finished in {:.3}ms ({} moves, {:.1}% accepted), best area: {:.3} (density: {:.3}%)",
            start.elapsed().as_secs_f64() * 1000.0,
            n_moves.separate_with_commas(),
            match n_moves {
                0 => 0.0,
                _ => n_accepted as f32 / n_moves as f32 * 100.0,
            },
            best.area(),
            best.floorplan.density() * 100.0
        );
        debug_assert!(solution_is_consistent(problem, &best));

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use seqpair::entities::Rectangle;

    fn unit_squares(n: usize) -> Problem {
        let rects = (0..n)
            .map(|i| Rectangle::try_new(i, 1.0, 1.0, false).unwrap())
            .collect_vec();
        Problem::new(rects, vec![]).unwrap()
    }

    #[test]
    fn empty_problem_is_rejected() {
        let mut annealer = Annealer::new(AnnealConfig::default(), SmallRng::seed_from_u64(0));
        let res = annealer.solve(&unit_squares(0), None);
        assert_eq!(res.unwrap_err(), PlacementError::EmptyProblem);
    }

    #[test]
    fn invalid_seed_is_a_decode_error() {
        let mut annealer = Annealer::new(AnnealConfig::default(), SmallRng::seed_from_u64(0));
        let res = annealer.solve(&unit_squares(3), Some(SequencePair::identity(2)));
        assert!(matches!(res, Err(PlacementError::Decode(_))));
    }

    #[test]
    fn single_fixed_rectangle_returns_the_seed() {
        let mut annealer = Annealer::new(AnnealConfig::default(), SmallRng::seed_from_u64(0));
        let sol = annealer.solve(&unit_squares(1), None).unwrap();
        assert_eq!(sol.area(), 1.0);
        assert_eq!(annealer.move_counter, 0);
    }

    #[test]
    fn zero_time_budget_returns_the_seed() {
        let config = AnnealConfig {
            time_limit_min: 0.0,
            ..AnnealConfig::default()
        };
        let mut annealer = Annealer::new(config, SmallRng::seed_from_u64(0));
        let seed = SequencePair::new(vec![0, 1, 2], vec![2, 1, 0], vec![false; 3]).unwrap();
        let sol = annealer.solve(&unit_squares(3), Some(seed.clone())).unwrap();
        assert_eq!(sol.sequence_pair, seed);
        assert_eq!(annealer.move_counter, 0);
    }
}
