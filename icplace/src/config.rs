use serde::{Deserialize, Serialize};
use std::time::Duration;

use seqpair::io::svg::SvgDrawOptions;

use crate::policy::DecisionMakerKind;

/// Configuration of a complete placement run: perturbation session followed by simulated annealing
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct PlacementConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of swaps performed by the perturbation session before annealing starts
    pub session_step_limit: usize,
    /// Number of independent session + annealing episodes per problem, the best solution is kept
    pub n_episodes: usize,
    /// Decision maker proposing the swap candidates during the perturbation session
    pub decision_maker: DecisionMakerKind,
    /// Configuration of the annealing optimizer
    pub anneal: AnnealConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            session_step_limit: 200,
            n_episodes: 4,
            decision_maker: DecisionMakerKind::Random,
            anneal: AnnealConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Configuration of the simulated annealing optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AnnealConfig {
    /// Maximum number of moves
    pub n_steps: usize,
    /// Wall-clock budget in minutes, checked between moves
    pub time_limit_min: f32,
    /// Temperature at the first move. If undefined, it is calibrated from the initial state
    pub initial_temperature: Option<f32>,
    /// Targeted acceptance probability of an average worsening move at the start, used for calibration
    pub initial_acceptance: f32,
    /// Temperature at the last move as a fraction of the initial temperature
    pub final_temperature_ratio: f32,
    /// Number of trial moves used to calibrate the initial temperature
    pub n_calibration_moves: usize,
}

impl AnnealConfig {
    /// Budgets too large to represent (or infinite) mean no time limit
    pub fn time_limit(&self) -> Duration {
        Duration::try_from_secs_f32(self.time_limit_min.max(0.0) * 60.0).unwrap_or(Duration::MAX)
    }
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            n_steps: 100,
            time_limit_min: 1.0,
            initial_temperature: None,
            initial_acceptance: 0.8,
            final_temperature_ratio: 1e-4,
            n_calibration_moves: 32,
        }
    }
}
