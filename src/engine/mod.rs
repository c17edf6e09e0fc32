pub mod classify;
pub mod curves;
pub mod dispersion;
pub mod export_csv;
pub mod green;
pub mod rng;
pub mod simulate;

pub use classify::{strokes_remaining, HOLED_RADIUS, NEAR_HOLE_PUTT_RADIUS, SHORT_GAME_RADIUS};
pub use curves::{
    expected_strokes, Anchor, CurveSet, ExpectedStrokesCurve, Surface, HEAVY_ROUGH_OFFSET,
    LIGHT_ROUGH_OFFSET, YARDS_TO_FEET,
};
pub use dispersion::{ClubCategory, DEFAULT_LATERAL_SIGMA};
pub use export_csv::{export_samples_csv, write_samples_csv, ExportError};
pub use green::{
    GreenInterval, TroubleLabel, GREEN_LATERAL_HALF_WIDTH, VIRTUAL_GREEN_HALF_DEPTH,
};
pub use rng::Rng;
pub use simulate::{
    evaluate_candidates, evaluate_candidates_parallel, simulate, EvaluationResult, ShotCandidate,
    SimulationConfig, SimulationResult, SituationContext, TraceMode, TrialSample, DEFAULT_SEED,
    DEFAULT_TRIALS,
};
