//! Kundali chart computation.
//!
//! [`compute_chart`] takes a [`ChartRequest`], an [`EphemerisPort`] and
//! [`ChartSettings`] and returns a [`Chart`]:
//!
//! 1. the request is validated into a [`BirthContext`];
//! 2. a [`SiderealFrame`] fixes the ayanamsha and rotation for the instant;
//! 3. body, node, and ascendant longitudes are resolved;
//! 4. vargas, dashas, ashtakavarga, panchanga, and yogas are derived.
//!
//! [`render_narrative`] turns a chart into plain prose.
//!
//! [`EphemerisPort`]: kundali_core::EphemerisPort

pub mod assemble;
pub mod document;
pub mod error;
pub mod frame;
pub mod narrative;
pub mod positions;
pub mod request;
pub mod settings;

pub use assemble::compute_chart;
pub use document::{
    ASCENDANT, AshtakavargaRecord, BinduRow, Chart, ChartMeta, DashaRecord, PanchangaRecord,
    PlanetRecord, YogaEntry,
};
pub use error::ChartError;
pub use frame::SiderealFrame;
pub use narrative::{STRONG_SIGN_BINDUS, render_narrative};
pub use positions::{resolve_ascendant, resolve_bodies, resolve_nodes, resolve_positions};
pub use request::{BirthContext, ChartRequest};
pub use settings::ChartSettings;
