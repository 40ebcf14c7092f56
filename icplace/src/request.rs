use log::{error, info};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Instant;

use seqpair::PlacementError;
use seqpair::entities::{Problem, Solution};
use seqpair::io::export::export;
use seqpair::io::ext_repr::{ExtProblem, ExtSolution};
use seqpair::io::import::import;

use crate::config::PlacementConfig;
use crate::orchestrator;
use crate::policy::{DecisionMaker, DecisionMakerKind, GreedyDecisionMaker, RandomDecisionMaker};

/// A placement request covering up to two independent layers of a board
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlacementRequest {
    #[serde(rename = "TopLayer", default, skip_serializing_if = "Option::is_none")]
    pub top_layer: Option<ExtProblem>,
    #[serde(rename = "BottomLayer", default, skip_serializing_if = "Option::is_none")]
    pub bottom_layer: Option<ExtProblem>,
    /// Number of episodes per layer
    #[serde(rename = "Epoch", default, skip_serializing_if = "Option::is_none")]
    pub n_episodes: Option<usize>,
    /// Annealing step budget
    #[serde(rename = "SACount", default, skip_serializing_if = "Option::is_none")]
    pub annealing_steps: Option<usize>,
    /// Perturbation session step limit
    #[serde(rename = "RLSteps", default, skip_serializing_if = "Option::is_none")]
    pub session_steps: Option<usize>,
    /// Annealing time budget in minutes
    #[serde(rename = "SAMinutes", default, skip_serializing_if = "Option::is_none")]
    pub annealing_minutes: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    #[serde(rename = "TopLayer")]
    Top,
    #[serde(rename = "BottomLayer")]
    Bottom,
}

impl Display for Layer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Top => write!(f, "top"),
            Layer::Bottom => write!(f, "bottom"),
        }
    }
}

impl PlacementRequest {
    /// `config` with the solve parameters present in the request applied on top
    pub fn apply_to(&self, mut config: PlacementConfig) -> PlacementConfig {
        if let Some(n) = self.n_episodes {
            config.n_episodes = n;
        }
        if let Some(n) = self.annealing_steps {
            config.anneal.n_steps = n;
        }
        if let Some(n) = self.session_steps {
            config.session_step_limit = n;
        }
        if let Some(min) = self.annealing_minutes {
            config.anneal.time_limit_min = min;
        }
        config
    }

    pub fn layers(&self) -> Vec<(Layer, &ExtProblem)> {
        [
            (Layer::Top, self.top_layer.as_ref()),
            (Layer::Bottom, self.bottom_layer.as_ref()),
        ]
        .into_iter()
        .filter_map(|(layer, ext)| ext.map(|ext| (layer, ext)))
        .collect()
    }
}

/// Result of solving one layer, failures never affect the other layer
#[derive(Debug, Clone)]
pub struct LayerResult {
    pub layer: Layer,
    pub outcome: Result<(Problem, Solution), PlacementError>,
}

/// Response for a [`PlacementRequest`], one entry per requested layer
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlacementResponse {
    #[serde(rename = "TopLayer", default, skip_serializing_if = "Option::is_none")]
    pub top_layer: Option<LayerOutcome>,
    #[serde(rename = "BottomLayer", default, skip_serializing_if = "Option::is_none")]
    pub bottom_layer: Option<LayerOutcome>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum LayerOutcome {
    Success(ExtSolution),
    Failure(String),
}

impl PlacementResponse {
    pub fn new(results: &[LayerResult], epoch: Instant) -> Self {
        let mut response = PlacementResponse::default();
        for res in results {
            let outcome = match &res.outcome {
                Ok((_, solution)) => LayerOutcome::Success(export(solution, epoch)),
                Err(e) => LayerOutcome::Failure(e.to_string()),
            };
            match res.layer {
                Layer::Top => response.top_layer = Some(outcome),
                Layer::Bottom => response.bottom_layer = Some(outcome),
            }
        }
        response
    }
}

/// Imports and solves a single layer
pub fn solve_layer(
    ext_problem: &ExtProblem,
    config: &PlacementConfig,
    rng: &mut SmallRng,
) -> Result<(Problem, Solution), PlacementError> {
    let problem = import(ext_problem)?;
    let greedy = GreedyDecisionMaker::new(&problem);
    let decision_maker: &dyn DecisionMaker = match config.decision_maker {
        DecisionMakerKind::Random => &RandomDecisionMaker,
        DecisionMakerKind::Greedy => &greedy,
    };
    let report = orchestrator::solve(&problem, config, decision_maker, rng)?;
    Ok((problem, report.solution))
}

/// Solves all layers of a request in parallel.
/// Every layer gets its own PRNG, derived from the configured seed and the layer.
pub fn solve_request(request: &PlacementRequest, config: &PlacementConfig) -> Vec<LayerResult> {
    let config = request.apply_to(*config);
    info!("[REQ] solving {} layer(s) with {config:?}", request.layers().len());

    request
        .layers()
        .into_par_iter()
        .map(|(layer, ext_problem)| {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(layer as u64)),
                None => SmallRng::from_os_rng(),
            };
            let outcome = solve_layer(ext_problem, &config, &mut rng);
            match &outcome {
                Ok((_, sol)) => info!("[REQ] {layer} layer solved, area: {:.3}", sol.area()),
                Err(e) => error!("[REQ] {layer} layer failed: {e}"),
            }
            LayerResult { layer, outcome }
        })
        .collect()
}
