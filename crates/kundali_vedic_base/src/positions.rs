//! Sidereal longitudes of the nine grahas and the lagna.

use crate::error::VedicError;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::util::{normalize_360, sign_index};

/// Sidereal longitudes in degrees [0, 360), indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPositions {
    grahas: [f64; 9],
    lagna: f64,
}

impl SiderealPositions {
    /// Normalize and store. Rejects non-finite longitudes.
    pub fn new(grahas: [f64; 9], lagna: f64) -> Result<Self, VedicError> {
        if !lagna.is_finite() || grahas.iter().any(|lon| !lon.is_finite()) {
            return Err(VedicError::InvalidInput("longitudes must be finite"));
        }
        Ok(Self {
            grahas: grahas.map(normalize_360),
            lagna: normalize_360(lagna),
        })
    }

    pub fn longitude(&self, graha: Graha) -> f64 {
        self.grahas[graha.index() as usize]
    }

    pub fn lagna(&self) -> f64 {
        self.lagna
    }

    /// Sign index (0..=11) of a graha.
    pub fn sign(&self, graha: Graha) -> u8 {
        sign_index(self.longitude(graha))
    }

    pub fn lagna_sign(&self) -> u8 {
        sign_index(self.lagna)
    }

    /// Sign indices of the seven classical grahas, Sun through Saturn.
    pub fn sapta_signs(&self) -> [u8; 7] {
        SAPTA_GRAHAS.map(|g| self.sign(g))
    }
}
