//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node: linear motion from the J2000.0 value,
//! `Ω = 125.04452° − 0.0529538083°/day`. Ketu is always Rahu + 180°.
//!
//! True node: mean + the five largest periodic terms of Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47. Each term is a sine of
//! a combination of the Delaunay arguments D, M, M′, F.
//!
//! Both return tropical longitudes of date; callers subtract the ayanamsha.

use serde::{Deserialize, Serialize};

use kundali_frames::fundamental_arguments;

use crate::util::normalize_360;

/// Mean node longitude at J2000.0, degrees.
pub const MEAN_NODE_J2000_DEG: f64 = 125.04452;

/// Mean node regression, degrees per day.
pub const MEAN_NODE_RATE_DEG_PER_DAY: f64 = 0.0529538083;

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Mean node: linear regression only.
    #[default]
    Mean,
    /// True node: mean + periodic perturbations.
    True,
}

pub const ALL_NODE_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_NODE_MODES
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Mean Rahu tropical longitude, degrees [0, 360).
pub fn mean_rahu_deg(days_since_j2000: f64) -> f64 {
    normalize_360(MEAN_NODE_J2000_DEG - MEAN_NODE_RATE_DEG_PER_DAY * days_since_j2000)
}

/// Periodic correction of the true node, degrees.
///
/// `args` = `[l, l', F, D, Ω]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    // [nl, nl', nF, nD, amplitude_deg]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 5] = [
        [ 0.0,  0.0, -2.0,  2.0, -1.4979], // 2(D − F)
        [ 0.0,  1.0,  0.0,  0.0, -0.1500], // M
        [ 0.0,  0.0,  0.0,  2.0, -0.1226], // 2D
        [ 0.0,  0.0,  2.0,  0.0,  0.1176], // 2F
        [ 2.0,  0.0, -2.0,  0.0, -0.0801], // 2(M′ − F)
    ];

    TERMS
        .iter()
        .map(|t| {
            let angle = t[0] * args[0] + t[1] * args[1] + t[2] * args[2] + t[3] * args[3];
            t[4] * angle.sin()
        })
        .sum()
}

/// True Rahu tropical longitude, degrees [0, 360).
pub fn true_rahu_deg(days_since_j2000: f64) -> f64 {
    let args = fundamental_arguments(days_since_j2000 / 36_525.0);
    normalize_360(mean_rahu_deg(days_since_j2000) + node_perturbation_deg(&args))
}

/// Rahu tropical longitude for the chosen mode.
pub fn rahu_deg(days_since_j2000: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(days_since_j2000),
        NodeMode::True => true_rahu_deg(days_since_j2000),
    }
}

/// Ketu from Rahu: the opposite point.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}
