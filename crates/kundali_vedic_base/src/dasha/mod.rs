//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle assigns each graha a fixed number of
//! years. The cycle at birth starts with the lord of the Moon's nakshatra,
//! pro-rated by the part of that nakshatra the Moon has yet to traverse.
//! Only the top level (mahadashas) is generated.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use types::{
    DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, vimshottari_years,
};
pub use vimshottari::{balance_years, vimshottari, years_to_delta};
