//! Mass conversion and display formatting

use super::locale::NumberLocale;
use super::mass_unit::{MassUnit, LBS_PER_KG};

/// Minimum fractional digits in formatted mass values
const MIN_FRACTION_DIGITS: usize = 1;
/// Maximum fractional digits in formatted mass values
const MAX_FRACTION_DIGITS: usize = 2;

/// Convert a kilogram value to the given display unit
pub fn convert_from_kg(kg_value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kg => kg_value,
        MassUnit::Lbs => kg_value * LBS_PER_KG,
    }
}

/// Convert a value in the given display unit back to kilograms
pub fn convert_to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kg => value,
        MassUnit::Lbs => value / LBS_PER_KG,
    }
}

/// Format a kilogram value for display in `unit`
///
/// The result has between one and two fractional digits and uses the
/// separators of `locale`. It is meant for display only.
pub fn format_mass(kg_value: f64, unit: MassUnit, locale: &NumberLocale) -> String {
    let converted = convert_from_kg(kg_value, unit);
    locale.format_decimal(converted, MIN_FRACTION_DIGITS, MAX_FRACTION_DIGITS)
}

/// Format a kilogram value using the default locale
pub fn format_mass_default(kg_value: f64, unit: MassUnit) -> String {
    format_mass(kg_value, unit, &NumberLocale::default())
}
