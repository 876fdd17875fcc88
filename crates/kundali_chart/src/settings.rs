//! Per-run computation choices.

use kundali_core::ReferenceStar;
use kundali_vedic_base::{AyanamshaStrategy, NodeMode};
use serde::{Deserialize, Serialize};

/// How the sidereal zodiac and the lunar nodes are resolved.
///
/// Serialized under the `chart` section of the configuration file and
/// echoed into every chart document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub ayanamsa: AyanamshaStrategy,
    pub node_mode: NodeMode,
    /// Anchor star for [`AyanamshaStrategy::TrueStar`]; ignored otherwise.
    pub reference_star: ReferenceStar,
}
