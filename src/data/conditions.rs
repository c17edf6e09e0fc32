//! Plays-like yardage: wind, elevation and lie adjustments applied to the raw
//! target before simulation. All parsers are lenient: unrecognized labels mean
//! "no adjustment", matching the engine's never-fail policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindDirection {
    #[default]
    None,
    Into,
    Down,
    Cross,
}

impl WindDirection {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "into" => Self::Into,
            "down" => Self::Down,
            "cross" => Self::Cross,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindStrength {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl WindStrength {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "medium" => Self::Medium,
            "heavy" => Self::Heavy,
            _ => Self::None,
        }
    }

    pub const fn mph(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 5.0,
            Self::Medium => 10.0,
            Self::Heavy => 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elevation {
    #[default]
    Flat,
    SlightUp,
    ModerateUp,
    SlightDown,
    ModerateDown,
}

impl Elevation {
    /// Prefix match, as the original inputs were free-form labels like
    /// "Slight uphill" / "Moderate downhill".
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_ascii_lowercase();
        if lower.starts_with("slight up") {
            Self::SlightUp
        } else if lower.starts_with("moderate up") {
            Self::ModerateUp
        } else if lower.starts_with("slight down") {
            Self::SlightDown
        } else if lower.starts_with("moderate down") {
            Self::ModerateDown
        } else {
            Self::Flat
        }
    }

    /// Yards added to the plays-like target.
    pub const fn delta_yards(self) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::SlightUp => 5.0,
            Self::ModerateUp => 10.0,
            Self::SlightDown => -5.0,
            Self::ModerateDown => -10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LieQuality {
    #[default]
    Good,
    Ok,
    Bad,
}

impl LieQuality {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "ok" | "okay" => Self::Ok,
            "bad" => Self::Bad,
            _ => Self::Good,
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Good => 1.00,
            Self::Ok => 1.05,
            Self::Bad => 1.12,
        }
    }
}

/// Wind adjustment in yards. Headwind adds distance, tailwind removes some,
/// crosswind adds a little; the effect scales with how long the shot is,
/// clamped to [0.5, 1.2] of the 150-yard reference.
pub fn adjust_for_wind(target: f64, direction: WindDirection, strength: WindStrength) -> f64 {
    let wind_mph = strength.mph();
    let scale = (target / 150.0).clamp(0.5, 1.2);
    match direction {
        WindDirection::Into => target + wind_mph * 0.9 * scale,
        WindDirection::Down => target - wind_mph * 0.4 * scale,
        WindDirection::Cross => target + wind_mph * 0.1 * scale,
        WindDirection::None => target,
    }
}

pub fn apply_elevation(target: f64, elevation: Elevation) -> f64 {
    target + elevation.delta_yards()
}

pub fn apply_lie(target: f64, lie: LieQuality) -> f64 {
    target * lie.multiplier()
}

/// Plays-like yardage: wind, then elevation, then lie, clamped to >= 0.
pub fn plays_like(
    raw_target: f64,
    direction: WindDirection,
    strength: WindStrength,
    elevation: Elevation,
    lie: LieQuality,
) -> f64 {
    let with_wind = adjust_for_wind(raw_target, direction, strength);
    let with_elevation = apply_elevation(with_wind, elevation);
    apply_lie(with_elevation, lie).max(0.0)
}
