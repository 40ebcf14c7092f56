use log::debug;
use rand::Rng;
use seqpair::entities::{Problem, SequencePair};
use seqpair::{DecodeError, decode};

use crate::config::AnnealConfig;
use crate::opt::moves::Move;

/// Geometric cooling from `t_start` down to `t_end` over `n_steps` moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    pub t_start: f32,
    pub t_end: f32,
    pub n_steps: usize,
}

impl CoolingSchedule {
    pub fn new(t_start: f32, t_end: f32, n_steps: usize) -> Self {
        debug_assert!(t_start > 0.0 && t_end > 0.0 && t_end <= t_start);
        Self {
            t_start,
            t_end,
            n_steps,
        }
    }

    /// Builds a schedule for `config`, calibrating the initial temperature around `seed` if none is configured.
    pub fn from_config(
        config: &AnnealConfig,
        problem: &Problem,
        seed: &SequencePair,
        rng: &mut impl Rng,
    ) -> Result<Self, DecodeError> {
        let t_start = match config.initial_temperature {
            Some(t) if t > 0.0 => t,
            _ => calibrate_temperature(config, problem, seed, rng)?,
        };
        let t_end = t_start * config.final_temperature_ratio.clamp(f32::MIN_POSITIVE, 1.0);
        Ok(Self::new(t_start, t_end, config.n_steps))
    }

    /// Temperature at move `step`, `T(k) = t_start * (t_end / t_start)^(k / n_steps)`
    pub fn temperature(&self, step: usize) -> f32 {
        let progress = match self.n_steps {
            0 => 1.0,
            n => (step as f32 / n as f32).min(1.0),
        };
        self.t_start * (self.t_end / self.t_start).powf(progress)
    }
}

/// Samples moves around `seed` and picks the temperature at which the average worsening move
/// would be accepted with probability `config.initial_acceptance`.
fn calibrate_temperature(
    config: &AnnealConfig,
    problem: &Problem,
    seed: &SequencePair,
    rng: &mut impl Rng,
) -> Result<f32, DecodeError> {
    let rotatable = problem.rotatable_ids();
    let seed_area = decode(problem, seed)?.area;
    let mut sp = seed.clone();

    let mut worsening = vec![];
    for _ in 0..config.n_calibration_moves {
        let Some(mv) = Move::sample(problem.n(), &rotatable, rng) else {
            break;
        };
        mv.apply(&mut sp);
        let delta = decode(problem, &sp)?.area - seed_area;
        mv.undo(&mut sp);
        if delta > 0.0 {
            worsening.push(delta);
        }
    }

    let p0 = config.initial_acceptance.clamp(0.01, 0.99);
    let t_start = match worsening.is_empty() {
        //flat neighbourhood, fall back to a small fraction of the area
        true => (seed_area * 0.01).max(1e-3),
        false => {
            let mean = worsening.iter().sum::<f32>() / worsening.len() as f32;
            -mean / p0.ln()
        }
    };
    debug!(
        "[SA] calibrated initial temperature {:.3} from {} worsening trial moves",
        t_start,
        worsening.len()
    );
    Ok(t_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn cools_geometrically_to_the_end_temperature() {
        let schedule = CoolingSchedule::new(100.0, 0.01, 100);
        assert_eq!(schedule.temperature(0), 100.0);
        assert!(approx_eq!(f32, schedule.temperature(50), 1.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, schedule.temperature(100), 0.01, epsilon = 1e-5));
        let temps = (0..=100).map(|k| schedule.temperature(k)).collect::<Vec<_>>();
        assert!(temps.windows(2).all(|w| w[1] <= w[0]));
    }
}
