//! End-to-end scenarios through the public API: curves, classification and
//! the Monte Carlo aggregator working together.

use caddy::data::bag::build_candidates;
use caddy::data::conditions::{
    plays_like, Elevation, LieQuality, WindDirection, WindStrength,
};
use caddy::engine::curves::{expected_strokes, Surface};
use caddy::engine::dispersion::ClubCategory;
use caddy::engine::green::TroubleLabel;
use caddy::engine::simulate::{
    evaluate_candidates, evaluate_candidates_parallel, simulate, ShotCandidate, SimulationConfig,
    SituationContext, TraceMode, DEFAULT_SEED,
};

fn approach_context(target: f64) -> SituationContext {
    SituationContext {
        start_distance: target,
        start_surface: Surface::Fairway,
        target_distance: target,
        front_yards: Some(target - 7.0),
        back_yards: Some(target + 7.0),
        trouble_short: TroubleLabel::None,
        trouble_long: TroubleLabel::None,
        skill_factor: 1.0,
    }
}

#[test]
fn perfect_approach_gains_just_over_two_strokes() {
    // 150 out on the fairway, shot lands dead on the pin every trial.
    let ctx = SituationContext {
        skill_factor: 0.0,
        ..approach_context(150.0)
    };
    let shot = ShotCandidate {
        total: 150.0,
        long_sigma: 5.0,
        category: ClubCategory::ShortIron,
    };
    let result = simulate(&shot, &ctx, SimulationConfig::default());
    assert_eq!(result.baseline, 3.05);
    assert_eq!(result.expected_if_played, 1.0);
    assert!((result.strokes_gained() - 2.05).abs() < 1e-12);
}

#[test]
fn chunked_approach_leaves_a_chip() {
    // Ten yards short of a green starting 7 yards in front of the pin:
    // an off-green short-game leave, 1 + 1.85 strokes per trial.
    let ctx = SituationContext {
        skill_factor: 0.0,
        ..approach_context(150.0)
    };
    let shot = ShotCandidate {
        total: 140.0,
        long_sigma: 5.0,
        category: ClubCategory::ShortIron,
    };
    let result = simulate(&shot, &ctx, SimulationConfig::default());
    assert!((result.expected_if_played - 2.85).abs() < 1e-12);
    assert!((result.strokes_gained() - 0.20).abs() < 1e-12);
}

#[test]
fn severe_short_trouble_punishes_the_short_miss_only() {
    let trouble_ctx = SituationContext {
        trouble_short: TroubleLabel::Severe,
        ..approach_context(150.0)
    };
    let clean_ctx = approach_context(150.0);
    let layup = ShotCandidate {
        // Always finishes 60 short: a long miss on the short side.
        total: 90.0,
        long_sigma: 0.0,
        category: ClubCategory::ShortIron,
    };
    let ctx_zero_skill = |ctx: SituationContext| SituationContext {
        skill_factor: 0.0,
        ..ctx
    };
    let with_trouble = simulate(
        &layup,
        &ctx_zero_skill(trouble_ctx),
        SimulationConfig::default(),
    );
    let without = simulate(
        &layup,
        &ctx_zero_skill(clean_ctx),
        SimulationConfig::default(),
    );
    let penalty = with_trouble.expected_if_played - without.expected_if_played;
    assert!((penalty - TroubleLabel::Severe.penalty()).abs() < 1e-12);
}

#[test]
fn rough_start_raises_the_baseline_not_the_outcome() {
    let fairway_ctx = approach_context(150.0);
    let rough_ctx = SituationContext {
        start_surface: Surface::HeavyRough,
        ..approach_context(150.0)
    };
    let shot = ShotCandidate {
        total: 150.0,
        long_sigma: 9.0,
        category: ClubCategory::ShortIron,
    };
    let from_fairway = simulate(&shot, &fairway_ctx, SimulationConfig::default());
    let from_rough = simulate(&shot, &rough_ctx, SimulationConfig::default());
    assert!(from_rough.baseline > from_fairway.baseline);
    assert_eq!(
        from_rough.expected_if_played,
        from_fairway.expected_if_played
    );
}

#[test]
fn missing_green_interval_synthesizes_a_virtual_green() {
    // With no front/back, a shot 5 yards long of the pin is still on the
    // virtual green (target +- 7) and putts out.
    let ctx = SituationContext {
        front_yards: None,
        back_yards: None,
        skill_factor: 0.0,
        ..approach_context(150.0)
    };
    let shot = ShotCandidate {
        total: 155.0,
        long_sigma: 0.0,
        category: ClubCategory::ScoringWedge,
    };
    let result = simulate(&shot, &ctx, SimulationConfig::default());
    let expected = 1.0 + expected_strokes(5.0, Surface::Green);
    assert!((result.expected_if_played - expected).abs() < 1e-12);
}

#[test]
fn traced_samples_reconstruct_the_mean() {
    let ctx = approach_context(165.0);
    let shot = ShotCandidate {
        total: 161.0,
        long_sigma: 12.0,
        category: ClubCategory::MidIron,
    };
    let result = simulate(
        &shot,
        &ctx,
        SimulationConfig {
            trials: 400,
            seed: Some(DEFAULT_SEED),
            trace_mode: TraceMode::Samples,
        },
    );
    assert_eq!(result.samples.len(), 400);
    let mean: f64 =
        result.samples.iter().map(|s| s.strokes).sum::<f64>() / result.samples.len() as f64;
    assert!((mean - result.expected_if_played).abs() < 1e-9);
}

#[test]
fn bag_evaluation_prefers_clubs_near_the_target() {
    // From 150 out, the best full-bag candidate should land within a couple of
    // clubs of the target distance, never the driver.
    let ctx = approach_context(150.0);
    let bag = build_candidates(100.0);
    let candidates: Vec<ShotCandidate> = bag.iter().map(|s| s.to_candidate()).collect();
    let results = evaluate_candidates(&candidates, &ctx, SimulationConfig::default());

    let best = results
        .iter()
        .max_by(|a, b| {
            let sg_a = a.baseline - a.expected_if_played;
            let sg_b = b.baseline - b.expected_if_played;
            sg_a.total_cmp(&sg_b)
        })
        .expect("non-empty bag");
    assert!(
        (best.candidate.total - 150.0).abs() < 20.0,
        "best candidate total {} is not near the target",
        best.candidate.total
    );
}

#[test]
fn parallel_bag_evaluation_matches_sequential() {
    let ctx = approach_context(172.0);
    let bag = build_candidates(105.0);
    let candidates: Vec<ShotCandidate> = bag.iter().map(|s| s.to_candidate()).collect();
    let config = SimulationConfig::default();
    let sequential = evaluate_candidates(&candidates, &ctx, config);
    let parallel = evaluate_candidates_parallel(&candidates, &ctx, config);
    for (s, p) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(s.candidate, p.candidate);
        assert_eq!(s.expected_if_played, p.expected_if_played);
    }
}

#[test]
fn plays_like_target_feeds_the_simulation() {
    // 150 raw into a medium wind, slightly uphill, from an ok lie.
    let target = plays_like(
        150.0,
        WindDirection::Into,
        WindStrength::Medium,
        Elevation::SlightUp,
        LieQuality::Ok,
    );
    assert!(target > 150.0);

    let ctx = SituationContext {
        skill_factor: 0.0,
        ..approach_context(target)
    };
    let matched = ShotCandidate {
        total: target,
        long_sigma: 0.0,
        category: ClubCategory::MidIron,
    };
    let result = simulate(&matched, &ctx, SimulationConfig::default());
    assert_eq!(result.expected_if_played, 1.0);
}
