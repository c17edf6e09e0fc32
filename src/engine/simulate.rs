//! Monte Carlo aggregator: many sampled outcomes to one expected-strokes figure.
//!
//! Each evaluation is a pure function of its inputs plus the resolved seed:
//! the baseline is a single deterministic curve lookup and the expected value
//! if played is the mean per-trial total over `trials` samples. Candidates in
//! a batch are evaluated independently from the same resolved seed, so a batch
//! is reproducible end to end.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::classify::strokes_remaining;
use crate::engine::curves::{expected_strokes, Surface};
use crate::engine::dispersion::ClubCategory;
use crate::engine::green::{GreenInterval, TroubleLabel};
use crate::engine::rng::Rng;

/// Default number of trials per candidate.
pub const DEFAULT_TRIALS: usize = 200;
/// Default seed: fixed so demonstrations and tests reproduce exactly.
pub const DEFAULT_SEED: u64 = 42;

/// One candidate club/shot option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotCandidate {
    /// Nominal carry+roll distance (yards).
    pub total: f64,
    /// Longitudinal dispersion (1 sigma, yards) before skill scaling.
    pub long_sigma: f64,
    pub category: ClubCategory,
}

/// Situational parameters for one evaluation. Supplied fresh per call; the
/// engine keeps no state between invocations besides the curve constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SituationContext {
    pub start_distance: f64,
    pub start_surface: Surface,
    pub target_distance: f64,
    #[serde(default)]
    pub front_yards: Option<f64>,
    #[serde(default)]
    pub back_yards: Option<f64>,
    #[serde(default)]
    pub trouble_short: TroubleLabel,
    #[serde(default)]
    pub trouble_long: TroubleLabel,
    #[serde(default = "default_skill_factor")]
    pub skill_factor: f64,
}

fn default_skill_factor() -> f64 {
    1.0
}

/// Whether to keep the per-trial sample set for charting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceMode {
    #[default]
    Off,
    Samples,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Trials per candidate; clamped to >= 1.
    pub trials: usize,
    /// None draws a process-entropy seed; Some(n) reproduces exactly.
    pub seed: Option<u64>,
    pub trace_mode: TraceMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: Some(DEFAULT_SEED),
            trace_mode: TraceMode::Off,
        }
    }
}

/// One trial's sampled landing point and its total strokes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrialSample {
    pub actual_total: f64,
    pub lateral: f64,
    pub strokes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// Expected strokes from the current position if no shot is played.
    pub baseline: f64,
    /// Mean per-trial total strokes if the candidate is played.
    pub expected_if_played: f64,
    /// Per-trial samples; empty unless [TraceMode::Samples] was requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<TrialSample>,
}

impl SimulationResult {
    /// Positive means the shot is a net improvement over standing still.
    pub fn strokes_gained(&self) -> f64 {
        self.baseline - self.expected_if_played
    }
}

/// Batch evaluation output; order matches the input candidate order.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub candidate: ShotCandidate,
    pub baseline: f64,
    pub expected_if_played: f64,
}

/// Run the Monte Carlo evaluation for one candidate shot.
pub fn simulate(
    shot: &ShotCandidate,
    ctx: &SituationContext,
    config: SimulationConfig,
) -> SimulationResult {
    let baseline = expected_strokes(ctx.start_distance, ctx.start_surface);
    let trials = config.trials.max(1);
    let mut rng = match config.seed {
        Some(seed) => Rng::new(seed),
        None => Rng::from_entropy(),
    };

    let green = GreenInterval::resolve(ctx.front_yards, ctx.back_yards, ctx.target_distance);
    let long_sigma = shot.long_sigma * ctx.skill_factor;
    let lateral_sigma = shot.category.lateral_sigma() * ctx.skill_factor;

    let mut total_strokes = 0.0;
    let mut samples = Vec::new();
    if config.trace_mode == TraceMode::Samples {
        samples.reserve(trials);
    }

    for _ in 0..trials {
        let actual_total = rng.sample_normal(shot.total, long_sigma);
        let lateral = rng.sample_normal(0.0, lateral_sigma);
        let remaining = strokes_remaining(
            actual_total,
            lateral,
            ctx.target_distance,
            green,
            ctx.trouble_short,
            ctx.trouble_long,
        );
        let strokes = 1.0 + remaining;
        total_strokes += strokes;
        if config.trace_mode == TraceMode::Samples {
            samples.push(TrialSample {
                actual_total,
                lateral,
                strokes,
            });
        }
    }

    SimulationResult {
        baseline,
        expected_if_played: total_strokes / trials as f64,
        samples,
    }
}

/// Evaluate a candidate list sequentially. Order is preserved.
pub fn evaluate_candidates(
    candidates: &[ShotCandidate],
    ctx: &SituationContext,
    config: SimulationConfig,
) -> Vec<EvaluationResult> {
    candidates.iter().map(|c| evaluate_one(c, ctx, config)).collect()
}

/// Like [evaluate_candidates] but distributes candidates across CPU cores via
/// Rayon. Use for large candidate lists; results order matches input order.
pub fn evaluate_candidates_parallel(
    candidates: &[ShotCandidate],
    ctx: &SituationContext,
    config: SimulationConfig,
) -> Vec<EvaluationResult> {
    candidates
        .par_iter()
        .map(|c| evaluate_one(c, ctx, config))
        .collect()
}

fn evaluate_one(
    candidate: &ShotCandidate,
    ctx: &SituationContext,
    config: SimulationConfig,
) -> EvaluationResult {
    let result = simulate(
        candidate,
        ctx,
        SimulationConfig {
            trace_mode: TraceMode::Off,
            ..config
        },
    );
    EvaluationResult {
        candidate: *candidate,
        baseline: result.baseline,
        expected_if_played: result.expected_if_played,
    }
}
