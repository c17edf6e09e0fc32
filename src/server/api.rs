//! JSON payload builders for the HTTP facade.
//!
//! The engine itself never fails; this boundary is where malformed input is
//! rejected instead of silently defaulted. Unknown surface or category labels,
//! non-finite numbers and oversized trial counts are 400s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::bag::{build_candidates, full_bag};
use crate::engine::curves::{CurveSet, Surface};
use crate::engine::dispersion::ClubCategory;
use crate::engine::green::TroubleLabel;
use crate::engine::simulate::{
    evaluate_candidates, evaluate_candidates_parallel, simulate, ShotCandidate, SimulationConfig,
    SituationContext, TraceMode, TrialSample, DEFAULT_TRIALS,
};

/// Hard cap on trials per candidate; the only latency bound the engine has.
pub const MAX_TRIALS: usize = 10_000;

#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be deserialized (client error).
    Parse(serde_json::Error),
    Validation(String),
    /// The response could not be serialized (server error).
    Encode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, Deserialize)]
pub struct ShotRequest {
    pub total: f64,
    pub long_sigma: f64,
    pub category: ClubCategory,
    /// Optional display label echoed back in evaluate results.
    #[serde(default)]
    pub club: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextRequest {
    pub start_distance: f64,
    pub start_surface: Surface,
    pub target_distance: f64,
    #[serde(default)]
    pub front_yards: Option<f64>,
    #[serde(default)]
    pub back_yards: Option<f64>,
    /// Free-form label; matched by case-insensitive prefix ("mild*"/"severe*").
    #[serde(default)]
    pub trouble_short: Option<String>,
    #[serde(default)]
    pub trouble_long: Option<String>,
    #[serde(default)]
    pub skill_factor: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRequest {
    pub shot: ShotRequest,
    pub context: ContextRequest,
    #[serde(default)]
    pub trials: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub include_samples: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    /// Explicit candidates; when empty, `driver_speed` builds the full bag.
    #[serde(default)]
    pub candidates: Vec<ShotRequest>,
    #[serde(default)]
    pub driver_speed: Option<f64>,
    pub context: ContextRequest,
    #[serde(default)]
    pub trials: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub start_distance: f64,
    pub start_surface: Surface,
    pub target_distance: f64,
    pub trials: usize,
    /// The requested seed; absent means a process-entropy seed was drawn.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispersionSummary {
    pub long_sigma_effective: f64,
    pub lateral_sigma_effective: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulateResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub scenario: ScenarioSummary,
    pub baseline: f64,
    pub expected_if_played: f64,
    pub strokes_gained: f64,
    pub dispersion: DispersionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<TrialSample>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    pub total: f64,
    pub category: ClubCategory,
    pub baseline: f64,
    pub expected_if_played: f64,
    pub strokes_gained: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub scenario: ScenarioSummary,
    /// Ordered by descending strokes gained (a downstream transform; the
    /// engine itself only reports baseline and expected-if-played).
    pub results: Vec<CandidateResult>,
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "caddy-api",
        "version": env!("CARGO_PKG_VERSION"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

pub fn curves_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "curves": CurveSet::standard(),
    }))
}

/// Parse query string for driver_speed=N (mph); default 100.
fn parse_driver_speed(path: &str) -> f64 {
    let query = path.split('?').nth(1).unwrap_or("");
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("driver_speed"))
        .and_then(|(_, value)| value.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite() && *speed > 0.0)
        .unwrap_or(100.0)
}

pub fn bag_payload(path: &str) -> Result<String, serde_json::Error> {
    let driver_speed = parse_driver_speed(path);
    serde_json::to_string_pretty(&serde_json::json!({
        "driver_speed": driver_speed,
        "full_bag": full_bag(driver_speed),
        "candidates": build_candidates(driver_speed),
    }))
}

fn require_finite(value: f64, field: &str) -> Result<f64, ApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::Validation(format!("{field} must be finite")))
    }
}

fn require_non_negative(value: f64, field: &str) -> Result<f64, ApiError> {
    let value = require_finite(value, field)?;
    if value < 0.0 {
        Err(ApiError::Validation(format!("{field} must be >= 0")))
    } else {
        Ok(value)
    }
}

fn resolve_trials(requested: Option<usize>) -> Result<usize, ApiError> {
    let trials = requested.unwrap_or(DEFAULT_TRIALS);
    if trials > MAX_TRIALS {
        return Err(ApiError::Validation(format!(
            "trials must be <= {MAX_TRIALS}"
        )));
    }
    Ok(trials)
}

fn context_from_request(request: &ContextRequest) -> Result<SituationContext, ApiError> {
    Ok(SituationContext {
        start_distance: require_non_negative(request.start_distance, "start_distance")?,
        start_surface: request.start_surface,
        target_distance: require_non_negative(request.target_distance, "target_distance")?,
        front_yards: request.front_yards,
        back_yards: request.back_yards,
        trouble_short: TroubleLabel::from_label(request.trouble_short.as_deref().unwrap_or("")),
        trouble_long: TroubleLabel::from_label(request.trouble_long.as_deref().unwrap_or("")),
        skill_factor: require_non_negative(request.skill_factor.unwrap_or(1.0), "skill_factor")?,
    })
}

fn shot_from_request(request: &ShotRequest) -> Result<ShotCandidate, ApiError> {
    Ok(ShotCandidate {
        total: require_non_negative(request.total, "shot.total")?,
        long_sigma: require_finite(request.long_sigma, "shot.long_sigma")?,
        category: request.category,
    })
}

pub fn simulate_payload(body: &str) -> Result<String, ApiError> {
    let request: SimulateRequest = serde_json::from_str(body).map_err(ApiError::Parse)?;
    let shot = shot_from_request(&request.shot)?;
    let ctx = context_from_request(&request.context)?;
    let trials = resolve_trials(request.trials)?;

    let result = simulate(
        &shot,
        &ctx,
        SimulationConfig {
            trials,
            seed: request.seed,
            trace_mode: if request.include_samples {
                TraceMode::Samples
            } else {
                TraceMode::Off
            },
        },
    );

    let response = SimulateResponse {
        status: "ok",
        engine: "sg_monte_carlo_v1",
        scenario: ScenarioSummary {
            start_distance: ctx.start_distance,
            start_surface: ctx.start_surface,
            target_distance: ctx.target_distance,
            trials,
            seed: request.seed,
        },
        baseline: result.baseline,
        expected_if_played: result.expected_if_played,
        strokes_gained: result.strokes_gained(),
        dispersion: DispersionSummary {
            long_sigma_effective: shot.long_sigma * ctx.skill_factor,
            lateral_sigma_effective: shot.category.lateral_sigma() * ctx.skill_factor,
        },
        samples: if request.include_samples {
            Some(result.samples)
        } else {
            None
        },
    };
    serde_json::to_string_pretty(&response).map_err(ApiError::Encode)
}

pub fn evaluate_payload(body: &str) -> Result<String, ApiError> {
    let request: EvaluateRequest = serde_json::from_str(body).map_err(ApiError::Parse)?;
    let ctx = context_from_request(&request.context)?;
    let trials = resolve_trials(request.trials)?;

    let mut labels: Vec<Option<String>> = Vec::new();
    let mut candidates: Vec<ShotCandidate> = Vec::new();
    if request.candidates.is_empty() {
        let driver_speed = request.driver_speed.unwrap_or(100.0);
        require_non_negative(driver_speed, "driver_speed")?;
        for shot in build_candidates(driver_speed) {
            labels.push(Some(format!("{} {}", shot.club, shot.swing.label())));
            candidates.push(shot.to_candidate());
        }
    } else {
        for shot in &request.candidates {
            labels.push(shot.club.clone());
            candidates.push(shot_from_request(shot)?);
        }
    }

    let config = SimulationConfig {
        trials,
        seed: request.seed,
        trace_mode: TraceMode::Off,
    };
    let evaluations = if request.parallel {
        evaluate_candidates_parallel(&candidates, &ctx, config)
    } else {
        evaluate_candidates(&candidates, &ctx, config)
    };

    let mut results: Vec<CandidateResult> = evaluations
        .into_iter()
        .zip(labels)
        .map(|(eval, club)| CandidateResult {
            club,
            total: eval.candidate.total,
            category: eval.candidate.category,
            baseline: eval.baseline,
            expected_if_played: eval.expected_if_played,
            strokes_gained: eval.baseline - eval.expected_if_played,
        })
        .collect();
    results.sort_by(|left, right| right.strokes_gained.total_cmp(&left.strokes_gained));

    let response = EvaluateResponse {
        status: "ok",
        engine: "sg_monte_carlo_v1",
        scenario: ScenarioSummary {
            start_distance: ctx.start_distance,
            start_surface: ctx.start_surface,
            target_distance: ctx.target_distance,
            trials,
            seed: request.seed,
        },
        results,
    };
    serde_json::to_string_pretty(&response).map_err(ApiError::Encode)
}
