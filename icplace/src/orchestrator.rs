use log::info;
use rand::RngCore;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use seqpair::PlacementError;
use seqpair::entities::{Problem, SequencePair, Solution};

use crate::config::{AnnealConfig, PlacementConfig};
use crate::opt::annealer::Annealer;
use crate::policy::DecisionMaker;
use crate::session::PerturbationSession;

/// Outcome of one perturbation session followed by one annealing run
#[derive(Debug, Clone)]
pub struct EpisodeReport {
    /// Best solution found by the annealer
    pub solution: Solution,
    /// Area of the random sequence pair the session started from
    pub initial_area: f32,
    /// Area of the seed handed to the annealer
    pub seed_area: f32,
    /// Sum of the per-step rewards of the session
    pub session_reward: f32,
    /// Annealed area minus the initial area
    pub terminal_reward: f32,
}

/// Runs a complete perturbation session from `seed`, asking `decision_maker` for every swap,
/// then anneals from the session's final sequence pair.
pub fn run_episode(
    problem: &Problem,
    seed: SequencePair,
    session_step_limit: usize,
    anneal_config: AnnealConfig,
    decision_maker: &dyn DecisionMaker,
    rng: &mut SmallRng,
) -> Result<EpisodeReport, PlacementError> {
    let mut session = PerturbationSession::new(problem, seed, session_step_limit, rng)?;

    let mut session_reward = 0.0;
    while !session.is_terminal() {
        let candidate = decision_maker.propose(&session.observe(), rng);
        session_reward += session.step(candidate, rng)?.reward;
    }
    info!(
        "[ORCH] session finished after {} swaps, area: {:.3} -> {:.3}",
        session.steps_taken(),
        session.initial_area(),
        session.current_area()
    );

    let mut annealer = Annealer::new(anneal_config, SmallRng::seed_from_u64(rng.next_u64()));
    let solution = annealer.solve(problem, Some(session.sequence_pair().clone()))?;

    Ok(EpisodeReport {
        terminal_reward: session.terminal_reward(&solution),
        initial_area: session.initial_area(),
        seed_area: session.current_area(),
        session_reward,
        solution,
    })
}

/// Runs `config.n_episodes` independent episodes, each from a fresh random sequence pair,
/// and returns the report of the episode with the smallest area.
pub fn solve(
    problem: &Problem,
    config: &PlacementConfig,
    decision_maker: &dyn DecisionMaker,
    rng: &mut SmallRng,
) -> Result<EpisodeReport, PlacementError> {
    if problem.n() == 0 {
        return Err(PlacementError::EmptyProblem);
    }
    let mut best: Option<EpisodeReport> = None;
    for episode in 0..config.n_episodes.max(1) {
        let seed = SequencePair::random(problem.n(), rng);
        let report = run_episode(
            problem,
            seed,
            config.session_step_limit,
            config.anneal,
            decision_maker,
            rng,
        )?;
        info!(
            "[ORCH] episode {}/{}: area {:.3} (terminal reward: {:.3})",
            episode + 1,
            config.n_episodes.max(1),
            report.solution.area(),
            report.terminal_reward
        );
        best = match best {
            Some(b) if b.solution.area() <= report.solution.area() => Some(b),
            _ => Some(report),
        };
    }
    //at least one episode is always run
    best.ok_or(PlacementError::EmptyProblem)
}
