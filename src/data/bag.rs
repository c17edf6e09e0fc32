//! Candidate shot source: the player's bag scaled from a 100 mph driver-speed
//! baseline, plus the wedge scoring-shot matrix (partial swings).
//!
//! Distances scale linearly with driver speed. Each bag entry converts to an
//! engine [ShotCandidate] with a per-club default depth sigma.

use serde::{Deserialize, Serialize};

use crate::engine::dispersion::ClubCategory;
use crate::engine::simulate::ShotCandidate;

/// All baseline numbers are calibrated at this driver speed (mph).
pub const BASELINE_DRIVER_SPEED: f64 = 100.0;

/// club, ball speed (mph), launch (deg), spin (rpm), carry (yds), total (yds)
const FULL_BAG_BASE: &[(&str, f64, f64, f64, f64, f64)] = &[
    ("Driver", 148.0, 13.0, 2500.0, 233.0, 253.0),
    ("3W", 140.0, 14.5, 3300.0, 216.0, 233.0),
    ("3H", 135.0, 16.0, 3900.0, 202.0, 220.0),
    ("4i", 128.0, 14.5, 4600.0, 182.0, 194.0),
    ("5i", 122.0, 15.5, 5000.0, 172.0, 185.0),
    ("6i", 116.0, 17.0, 5400.0, 162.0, 172.0),
    ("7i", 110.0, 18.5, 6200.0, 151.0, 161.0),
    ("8i", 104.0, 20.5, 7000.0, 139.0, 149.0),
    ("9i", 98.0, 23.0, 7800.0, 127.0, 137.0),
    ("PW", 92.0, 28.0, 8500.0, 118.0, 124.0),
    ("GW", 86.0, 30.0, 9000.0, 104.0, 110.0),
    ("SW", 81.0, 32.0, 9500.0, 89.0, 95.0),
    ("LW", 75.0, 34.0, 10500.0, 75.0, 81.0),
];

/// Full-swing wedge carries at the baseline driver speed.
const FULL_WEDGE_CARRIES: &[(&str, f64)] = &[
    ("PW", 121.0),
    ("GW", 107.0),
    ("SW", 92.0),
    ("LW", 78.0),
];

/// Wedge scoring shots: club, swing, trajectory.
const SCORING_DEFS: &[(&str, SwingType, &str)] = &[
    ("PW", SwingType::Full, "Medium-High"),
    ("PW", SwingType::ChokeDown, "Medium"),
    ("PW", SwingType::ThreeQuarter, "Medium"),
    ("SW", SwingType::Full, "High"),
    ("LW", SwingType::Full, "High"),
    ("SW", SwingType::ThreeQuarter, "Medium-High"),
    ("PW", SwingType::Half, "Medium-Low"),
    ("LW", SwingType::ThreeQuarter, "Medium"),
    ("SW", SwingType::Half, "Medium-Low"),
    ("PW", SwingType::Quarter, "Low"),
    ("LW", SwingType::Half, "Medium-Low"),
    ("GW", SwingType::Quarter, "Low"),
    ("SW", SwingType::Quarter, "Low"),
    ("LW", SwingType::Quarter, "Low"),
    ("GW", SwingType::Full, "Medium-High"),
    ("GW", SwingType::ChokeDown, "Medium"),
    ("GW", SwingType::ThreeQuarter, "Medium"),
    ("GW", SwingType::Half, "Medium-Low"),
];

/// Swing length for a scoring shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingType {
    Full,
    ChokeDown,
    ThreeQuarter,
    Half,
    Quarter,
}

impl SwingType {
    pub const fn carry_multiplier(self) -> f64 {
        match self {
            Self::Full => 1.00,
            Self::ChokeDown => 0.94,
            Self::ThreeQuarter => 0.80,
            Self::Half => 0.60,
            Self::Quarter => 0.40,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::ChokeDown => "Choke-Down",
            Self::ThreeQuarter => "3/4",
            Self::Half => "1/2",
            Self::Quarter => "1/4",
        }
    }
}

/// One full-swing club row, scaled to the player's driver speed.
#[derive(Debug, Clone, Serialize)]
pub struct BagClubRow {
    pub club: &'static str,
    pub ball_speed: f64,
    pub launch_deg: f64,
    pub spin_rpm: f64,
    pub carry: f64,
    pub total: f64,
}

/// One candidate bag shot (full swing or wedge partial).
#[derive(Debug, Clone, Serialize)]
pub struct BagShot {
    pub club: &'static str,
    pub swing: SwingType,
    pub trajectory: &'static str,
    pub carry: f64,
    pub total: f64,
    pub category: ClubCategory,
}

impl BagShot {
    /// Convert to an engine candidate using the per-club default depth sigma.
    pub fn to_candidate(&self) -> ShotCandidate {
        ShotCandidate {
            total: self.total,
            long_sigma: depth_sigma_for_club(self.club),
            category: self.category,
        }
    }
}

fn scale(base: f64, driver_speed: f64) -> f64 {
    base * (driver_speed / BASELINE_DRIVER_SPEED)
}

/// Category used by the lateral dispersion model.
pub fn category_for_club(club: &str) -> ClubCategory {
    match club {
        "Driver" | "3W" | "3H" | "4i" | "5i" => ClubCategory::Long,
        "6i" | "7i" => ClubCategory::MidIron,
        "8i" | "9i" => ClubCategory::ShortIron,
        "PW" | "GW" | "SW" | "LW" => ClubCategory::ScoringWedge,
        _ => ClubCategory::Other,
    }
}

/// Default longitudinal (depth) dispersion per club (1 sigma, yards).
pub fn depth_sigma_for_club(club: &str) -> f64 {
    match club {
        "Driver" | "3W" | "3H" => 18.0,
        "4i" | "5i" => 15.0,
        "6i" | "7i" => 12.0,
        "8i" | "9i" => 9.0,
        "PW" | "GW" | "SW" | "LW" => 7.0,
        _ => 10.0,
    }
}

/// Full-club yardage table at the given driver speed.
pub fn full_bag(driver_speed: f64) -> Vec<BagClubRow> {
    FULL_BAG_BASE
        .iter()
        .map(|&(club, ball_speed, launch_deg, spin_rpm, carry, total)| BagClubRow {
            club,
            ball_speed: scale(ball_speed, driver_speed),
            launch_deg,
            spin_rpm,
            carry: scale(carry, driver_speed),
            total: scale(total, driver_speed),
        })
        .collect()
}

/// Wedge scoring-shot matrix at the given driver speed. Partial wedges are
/// assumed to roll out negligibly (total == carry).
pub fn scoring_shots(driver_speed: f64) -> Vec<BagShot> {
    SCORING_DEFS
        .iter()
        .map(|&(club, swing, trajectory)| {
            let full_carry = FULL_WEDGE_CARRIES
                .iter()
                .find(|(c, _)| *c == club)
                .map(|(_, carry)| scale(*carry, driver_speed))
                .unwrap_or(0.0);
            let carry = full_carry * swing.carry_multiplier();
            BagShot {
                club,
                swing,
                trajectory,
                carry,
                total: carry,
                category: ClubCategory::ScoringWedge,
            }
        })
        .collect()
}

/// All candidate shots: one full swing per club plus the wedge partials.
pub fn build_candidates(driver_speed: f64) -> Vec<BagShot> {
    let mut shots: Vec<BagShot> = full_bag(driver_speed)
        .into_iter()
        .map(|row| BagShot {
            club: row.club,
            swing: SwingType::Full,
            trajectory: "Stock",
            carry: row.carry,
            total: row.total,
            category: category_for_club(row.club),
        })
        .collect();
    shots.extend(scoring_shots(driver_speed));
    shots
}
