//! Command-line dispatch. Thin consumer of the engine: parses positional
//! args, runs one evaluation, emits pretty JSON on stdout.

use std::env;

use crate::data::bag::{build_candidates, full_bag};
use crate::engine::curves::Surface;
use crate::engine::dispersion::ClubCategory;
use crate::engine::export_csv::export_samples_csv;
use crate::engine::green::TroubleLabel;
use crate::engine::simulate::{
    simulate, ShotCandidate, SimulationConfig, SituationContext, TraceMode, DEFAULT_SEED,
    DEFAULT_TRIALS,
};
use crate::parallel::{run_evaluation_batches, WorkerPool};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Simulate,
    Evaluate,
    Bag,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("simulate") => Some(Command::Simulate),
        Some("evaluate") => Some(Command::Evaluate),
        Some("bag") => Some(Command::Bag),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Evaluate) => handle_evaluate(args),
        Some(Command::Bag) => handle_bag(args),
        None => {
            eprintln!("usage: caddy <serve|simulate|evaluate|bag>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("CADDY_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

/// `caddy simulate [total] [target] [trials] [seed] [--csv PATH]`
/// Demo candidate: a short iron with a 9-yard depth sigma from the fairway.
fn handle_simulate(args: &[String]) -> i32 {
    let total = parse_f64_arg(args.get(2), "total", 150.0);
    let target = parse_f64_arg(args.get(3), "target", total);
    let trials = parse_usize_arg(args.get(4), "trials", DEFAULT_TRIALS);
    let seed = parse_u64_arg(args.get(5), "seed", DEFAULT_SEED);
    let csv_path = args
        .iter()
        .position(|arg| arg == "--csv")
        .and_then(|i| args.get(i + 1));

    let shot = ShotCandidate {
        total,
        long_sigma: 9.0,
        category: ClubCategory::ShortIron,
    };
    let ctx = SituationContext {
        start_distance: target,
        start_surface: Surface::Fairway,
        target_distance: target,
        front_yards: None,
        back_yards: None,
        trouble_short: TroubleLabel::None,
        trouble_long: TroubleLabel::None,
        skill_factor: 1.0,
    };
    let result = simulate(
        &shot,
        &ctx,
        SimulationConfig {
            trials,
            seed: Some(seed),
            trace_mode: if csv_path.is_some() {
                TraceMode::Samples
            } else {
                TraceMode::Off
            },
        },
    );

    if let Some(path) = csv_path {
        if let Err(err) = export_samples_csv(&result.samples, path) {
            eprintln!("failed to export samples: {err}");
            return 1;
        }
    }

    let payload = serde_json::json!({
        "shot": shot,
        "baseline": result.baseline,
        "expected_if_played": result.expected_if_played,
        "strokes_gained": result.strokes_gained(),
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize simulation result: {err}");
            1
        }
    }
}

/// `caddy evaluate [start_distance] [target] [driver_speed] [trials]`
/// Evaluates the whole bag in parallel and prints candidates sorted by
/// strokes gained (descending).
fn handle_evaluate(args: &[String]) -> i32 {
    let start_distance = parse_f64_arg(args.get(2), "start_distance", 150.0);
    let target = parse_f64_arg(args.get(3), "target", start_distance);
    let driver_speed = parse_f64_arg(args.get(4), "driver_speed", 100.0);
    let trials = parse_usize_arg(args.get(5), "trials", DEFAULT_TRIALS);

    let ctx = SituationContext {
        start_distance,
        start_surface: Surface::Fairway,
        target_distance: target,
        front_yards: None,
        back_yards: None,
        trouble_short: TroubleLabel::None,
        trouble_long: TroubleLabel::None,
        skill_factor: 1.0,
    };
    let bag = build_candidates(driver_speed);
    let candidates: Vec<ShotCandidate> = bag.iter().map(|shot| shot.to_candidate()).collect();
    let config = SimulationConfig {
        trials,
        seed: Some(DEFAULT_SEED),
        trace_mode: TraceMode::Off,
    };
    let results = run_evaluation_batches(&candidates, &ctx, config, &WorkerPool::default_workers());

    let mut rows: Vec<serde_json::Value> = results
        .iter()
        .zip(bag.iter())
        .map(|(eval, shot)| {
            serde_json::json!({
                "club": shot.club,
                "swing": shot.swing.label(),
                "total": eval.candidate.total,
                "baseline": eval.baseline,
                "expected_if_played": eval.expected_if_played,
                "strokes_gained": eval.baseline - eval.expected_if_played,
            })
        })
        .collect();
    rows.sort_by(|left, right| {
        let lhs = left["strokes_gained"].as_f64().unwrap_or(f64::NEG_INFINITY);
        let rhs = right["strokes_gained"].as_f64().unwrap_or(f64::NEG_INFINITY);
        rhs.total_cmp(&lhs)
    });

    match serde_json::to_string_pretty(&rows) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize evaluation result: {err}");
            1
        }
    }
}

/// `caddy bag [driver_speed]`
fn handle_bag(args: &[String]) -> i32 {
    let driver_speed = parse_f64_arg(args.get(2), "driver_speed", 100.0);
    match serde_json::to_string_pretty(&full_bag(driver_speed)) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize bag: {err}");
            1
        }
    }
}

fn parse_f64_arg(arg: Option<&String>, name: &str, default: f64) -> f64 {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} '{raw}', using {default}");
            default
        }),
    }
}

fn parse_u64_arg(arg: Option<&String>, name: &str, default: u64) -> u64 {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} '{raw}', using {default}");
            default
        }),
    }
}

fn parse_usize_arg(arg: Option<&String>, name: &str, default: usize) -> usize {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} '{raw}', using {default}");
            default
        }),
    }
}
