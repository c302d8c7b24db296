//! Mass unit module
//!
//! Conversion between kilograms and display units, and display formatting.

pub mod converter;
pub mod locale;
pub mod mass_unit;

pub use converter::{convert_from_kg, convert_to_kg, format_mass, format_mass_default};
pub use locale::NumberLocale;
pub use mass_unit::{MassUnit, LBS_PER_KG, UNIT_LABELS};
