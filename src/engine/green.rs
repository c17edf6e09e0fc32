//! Green interval and trouble-zone geometry.
//!
//! The green is modeled as a longitudinal [front, back] interval with a fixed
//! lateral half-width; there is no lateral green-shape modeling. Trouble zones
//! short or long of the target map to a flat strokes penalty.

use serde::{Deserialize, Serialize};

/// Half-depth of the virtual green synthesized when front/back are unusable.
pub const VIRTUAL_GREEN_HALF_DEPTH: f64 = 7.0;
/// Fixed lateral half-width of any green (yards).
pub const GREEN_LATERAL_HALF_WIDTH: f64 = 10.0;

/// Longitudinal green interval in yards from the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GreenInterval {
    pub front: f64,
    pub back: f64,
}

impl GreenInterval {
    /// Use the supplied front/back when they describe a real interval;
    /// otherwise synthesize a virtual green centered on the target.
    pub fn resolve(front: Option<f64>, back: Option<f64>, target: f64) -> Self {
        match (front, back) {
            (Some(front), Some(back)) if back > front && front > 0.0 => Self { front, back },
            _ => Self {
                front: target - VIRTUAL_GREEN_HALF_DEPTH,
                back: target + VIRTUAL_GREEN_HALF_DEPTH,
            },
        }
    }

    /// Whether a landing point is on the green: inside the interval
    /// longitudinally and within the fixed half-width laterally.
    pub fn contains(&self, longitudinal: f64, lateral: f64) -> bool {
        longitudinal >= self.front
            && longitudinal <= self.back
            && lateral.abs() <= GREEN_LATERAL_HALF_WIDTH
    }
}

/// Severity of the trouble zone on one side of the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TroubleLabel {
    #[default]
    None,
    Mild,
    Severe,
}

impl TroubleLabel {
    /// Case-insensitive prefix match on "mild"/"severe"; anything else is None.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_ascii_lowercase();
        if lower.starts_with("mild") {
            Self::Mild
        } else if lower.starts_with("severe") {
            Self::Severe
        } else {
            Self::None
        }
    }

    /// Flat strokes penalty for finishing in this trouble zone.
    pub const fn penalty(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Mild => 0.30,
            Self::Severe => 0.80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_front_back_used_directly() {
        let green = GreenInterval::resolve(Some(143.0), Some(157.0), 150.0);
        assert_eq!(green.front, 143.0);
        assert_eq!(green.back, 157.0);
    }

    #[test]
    fn inverted_or_missing_interval_synthesizes_virtual_green() {
        for (front, back) in [
            (None, None),
            (Some(150.0), Some(140.0)),
            (Some(0.0), Some(160.0)),
            (Some(-5.0), Some(160.0)),
            (Some(143.0), None),
        ] {
            let green = GreenInterval::resolve(front, back, 150.0);
            assert_eq!(green.front, 143.0);
            assert_eq!(green.back, 157.0);
        }
    }

    #[test]
    fn contains_checks_both_axes() {
        let green = GreenInterval::resolve(Some(143.0), Some(157.0), 150.0);
        assert!(green.contains(150.0, 0.0));
        assert!(green.contains(143.0, 10.0));
        assert!(!green.contains(142.9, 0.0));
        assert!(!green.contains(150.0, 10.1));
        assert!(!green.contains(157.1, -3.0));
    }

    #[test]
    fn trouble_labels_prefix_match() {
        assert_eq!(TroubleLabel::from_label("Mild rough left"), TroubleLabel::Mild);
        assert_eq!(TroubleLabel::from_label("SEVERE water"), TroubleLabel::Severe);
        assert_eq!(TroubleLabel::from_label("none"), TroubleLabel::None);
        assert_eq!(TroubleLabel::from_label(""), TroubleLabel::None);
        assert_eq!(TroubleLabel::from_label("bunker"), TroubleLabel::None);
    }

    #[test]
    fn penalties_are_ordered() {
        assert!(TroubleLabel::Severe.penalty() > TroubleLabel::Mild.penalty());
        assert!(TroubleLabel::Mild.penalty() > TroubleLabel::None.penalty());
        assert_eq!(TroubleLabel::None.penalty(), 0.0);
    }
}
