//! caddy: a strokes-gained shot simulation engine.
//!
//! For a candidate golf shot, estimates the expected strokes to finish the
//! hole if the shot is played versus the expected strokes from the current
//! position (the baseline). The difference is the shot's strokes-gained
//! value, used by downstream layers to rank competing club/shot choices.
//!
//! The core is [engine]: empirical expected-strokes curves, a dispersion
//! sampler, a green/trouble geometry model and a Monte Carlo aggregator.
//! [data] supplies bag candidates and plays-like adjustments, [parallel]
//! spreads batch evaluation across cores, and [server]/[cli] are thin
//! consumers.

pub mod cli;
pub mod data;
pub mod engine;
pub mod parallel;
pub mod server;
