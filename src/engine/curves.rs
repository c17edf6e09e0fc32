//! Expected-strokes-to-hole-out curves indexed by surface and remaining distance.
//!
//! Each curve is a short list of (distance, strokes) anchors in descending-distance
//! order with piecewise-linear interpolation between anchors and clamping beyond
//! them. The rough curves are the fairway curve plus a flat offset: rough costs
//! roughly a fixed strokes penalty over fairway regardless of distance.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Flat strokes offset of light rough over fairway.
pub const LIGHT_ROUGH_OFFSET: f64 = 0.05;
/// Flat strokes offset of heavy rough over fairway.
pub const HEAVY_ROUGH_OFFSET: f64 = 0.15;
/// Putting distances are tracked in feet.
pub const YARDS_TO_FEET: f64 = 3.0;

/// Fairway anchors (yards). Strokes are non-decreasing with distance.
const FAIRWAY_ANCHORS: &[(f64, f64)] = &[
    (300.0, 4.10),
    (250.0, 3.80),
    (200.0, 3.40),
    (175.0, 3.20),
    (150.0, 3.05),
    (125.0, 2.95),
    (100.0, 2.80),
    (75.0, 2.70),
    (50.0, 2.60),
    (25.0, 2.45),
    (10.0, 2.20),
];

/// Around-the-green anchors (yards), short-game shots from off the putting surface.
const AROUND_GREEN_ANCHORS: &[(f64, f64)] = &[
    (40.0, 2.55),
    (30.0, 2.35),
    (20.0, 2.15),
    (10.0, 1.85),
    (5.0, 1.60),
    (2.0, 1.30),
];

/// Putting anchors (feet).
const PUTTING_ANCHORS_FEET: &[(f64, f64)] = &[
    (90.0, 2.35),
    (60.0, 2.20),
    (40.0, 2.05),
    (30.0, 1.95),
    (20.0, 1.85),
    (10.0, 1.60),
    (6.0, 1.35),
    (3.0, 1.05),
    (1.0, 1.00),
];

/// Lie surface. Selects which expected-strokes curve answers a distance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Fairway,
    LightRough,
    HeavyRough,
    AroundGreen,
    Green,
}

impl Surface {
    /// Parse a caller-supplied label. Returns None for anything unrecognized
    /// so the boundary decides the fallback instead of hiding it.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "fairway" => Some(Self::Fairway),
            "light_rough" | "light rough" => Some(Self::LightRough),
            "heavy_rough" | "heavy rough" => Some(Self::HeavyRough),
            "around_green" | "around green" => Some(Self::AroundGreen),
            "green" => Some(Self::Green),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fairway => "fairway",
            Self::LightRough => "light_rough",
            Self::HeavyRough => "heavy_rough",
            Self::AroundGreen => "around_green",
            Self::Green => "green",
        }
    }
}

/// One (distance, strokes) anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub distance: f64,
    pub strokes: f64,
}

/// Immutable expected-strokes curve: anchors in strictly descending distance order.
#[derive(Debug, Clone, Serialize)]
pub struct ExpectedStrokesCurve {
    anchors: Vec<Anchor>,
}

impl ExpectedStrokesCurve {
    /// Build from (distance, strokes) pairs. Anchors must already be in
    /// strictly descending distance order with no duplicates.
    ///
    /// # Panics
    /// Panics on an empty anchor list; `lookup` has no sensible answer for it.
    pub fn new(pairs: &[(f64, f64)]) -> Self {
        assert!(!pairs.is_empty(), "curve needs at least one anchor");
        debug_assert!(
            pairs.windows(2).all(|w| w[0].0 > w[1].0),
            "anchor distances must be strictly descending"
        );
        Self {
            anchors: pairs
                .iter()
                .map(|&(distance, strokes)| Anchor { distance, strokes })
                .collect(),
        }
    }

    /// Same curve shifted up by a flat strokes offset.
    pub fn with_offset(&self, offset: f64) -> Self {
        Self {
            anchors: self
                .anchors
                .iter()
                .map(|a| Anchor {
                    distance: a.distance,
                    strokes: a.strokes + offset,
                })
                .collect(),
        }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Piecewise-linear lookup. Clamps to the first anchor above the curve's
    /// range and to the last anchor below it.
    pub fn lookup(&self, distance: f64) -> f64 {
        let first = self.anchors[0];
        if distance >= first.distance {
            return first.strokes;
        }
        let last = self.anchors[self.anchors.len() - 1];
        if distance <= last.distance {
            return last.strokes;
        }
        for pair in self.anchors.windows(2) {
            let (hi, lo) = (pair[0], pair[1]);
            if distance <= hi.distance && distance >= lo.distance {
                let t = (hi.distance - distance) / (hi.distance - lo.distance);
                return hi.strokes + t * (lo.strokes - hi.strokes);
            }
        }
        // Unreachable for well-formed anchors; clamp low as a last resort.
        last.strokes
    }
}

/// The process-wide curve constants: one curve per surface plus putting.
#[derive(Debug, Clone, Serialize)]
pub struct CurveSet {
    pub fairway: ExpectedStrokesCurve,
    pub light_rough: ExpectedStrokesCurve,
    pub heavy_rough: ExpectedStrokesCurve,
    pub around_green: ExpectedStrokesCurve,
    /// Putting curve, indexed in feet.
    pub putting: ExpectedStrokesCurve,
}

impl CurveSet {
    fn build() -> Self {
        let fairway = ExpectedStrokesCurve::new(FAIRWAY_ANCHORS);
        let light_rough = fairway.with_offset(LIGHT_ROUGH_OFFSET);
        let heavy_rough = fairway.with_offset(HEAVY_ROUGH_OFFSET);
        Self {
            fairway,
            light_rough,
            heavy_rough,
            around_green: ExpectedStrokesCurve::new(AROUND_GREEN_ANCHORS),
            putting: ExpectedStrokesCurve::new(PUTTING_ANCHORS_FEET),
        }
    }

    /// Shared immutable instance, constructed once at first use.
    pub fn standard() -> &'static CurveSet {
        static CURVES: OnceLock<CurveSet> = OnceLock::new();
        CURVES.get_or_init(CurveSet::build)
    }

    fn curve_for(&self, surface: Surface) -> &ExpectedStrokesCurve {
        match surface {
            Surface::Fairway => &self.fairway,
            Surface::LightRough => &self.light_rough,
            Surface::HeavyRough => &self.heavy_rough,
            Surface::AroundGreen => &self.around_green,
            Surface::Green => &self.putting,
        }
    }
}

/// Expected strokes to hole out from `distance_yards` on `surface`.
/// Distance is clamped to >= 0. Green queries convert yards to feet and use
/// the putting curve.
pub fn expected_strokes(distance_yards: f64, surface: Surface) -> f64 {
    let distance = distance_yards.max(0.0);
    let curves = CurveSet::standard();
    match surface {
        Surface::Green => curves.putting.lookup(distance * YARDS_TO_FEET),
        _ => curves.curve_for(surface).lookup(distance),
    }
}
