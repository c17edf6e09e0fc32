pub mod bag;
pub mod conditions;

pub use bag::{
    build_candidates, category_for_club, depth_sigma_for_club, full_bag, scoring_shots,
    BagClubRow, BagShot, SwingType, BASELINE_DRIVER_SPEED,
};
pub use conditions::{
    adjust_for_wind, apply_elevation, apply_lie, plays_like, Elevation, LieQuality,
    WindDirection, WindStrength,
};
