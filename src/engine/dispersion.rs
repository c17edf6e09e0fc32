//! Lateral dispersion by club category.
//!
//! Longitudinal (depth) dispersion is supplied by the caller per candidate;
//! this module only owns the lateral side. Both sigmas are scaled by the
//! caller's skill factor before sampling (1.0 neutral, >1 wider, <1 tighter).

use serde::{Deserialize, Serialize};

/// Base lateral sigma for anything we cannot categorize.
pub const DEFAULT_LATERAL_SIGMA: f64 = 10.0;

/// Club category. Determines the base lateral dispersion magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubCategory {
    /// Driver, woods, hybrids, long irons.
    Long,
    MidIron,
    ShortIron,
    ScoringWedge,
    /// Unrecognized input; gets the default sigma.
    Other,
}

impl ClubCategory {
    /// Parse a caller-supplied label. Unknown labels map to [ClubCategory::Other]
    /// rather than failing: the simulation is best-effort advisory.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "long" => Self::Long,
            "mid_iron" | "mid iron" => Self::MidIron,
            "short_iron" | "short iron" => Self::ShortIron,
            "scoring_wedge" | "scoring wedge" => Self::ScoringWedge,
            _ => Self::Other,
        }
    }

    /// Base lateral dispersion (1 sigma, yards) before skill scaling.
    pub const fn lateral_sigma(self) -> f64 {
        match self {
            Self::Long => 15.0,
            Self::MidIron => 12.0,
            Self::ShortIron => 10.0,
            Self::ScoringWedge => 8.0,
            Self::Other => DEFAULT_LATERAL_SIGMA,
        }
    }
}
