//! Mass model
//!
//! A single logged body-weight measurement, always stored in kilograms.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::{normalize_timestamp_in, to_wire, TimestampError};
use crate::units::{format_mass, MassUnit, NumberLocale};

/// A mass record as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub id: i64,
    pub mass_kg: f64,
    pub measurement_timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Mass {
    /// Format the mass for display, e.g. `70.5 Kg`
    pub fn format_value(&self, unit: MassUnit, locale: &NumberLocale) -> String {
        format!("{} {}", format_mass(self.mass_kg, unit, locale), unit.label())
    }
}

/// Data for creating or updating a mass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMass {
    pub mass_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl NewMass {
    pub fn new(mass_kg: f64) -> Self {
        Self {
            mass_kg,
            ..Self::default()
        }
    }

    /// Set when the measurement was taken
    pub fn measured_at(mut self, timestamp: &DateTime<Utc>) -> Self {
        self.measurement_timestamp = Some(to_wire(timestamp));
        self
    }

    /// Set the measurement time from caller input (normalized before sending)
    pub fn with_measurement_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.measurement_timestamp = Some(timestamp.into());
        self
    }

    /// Set the creation time from caller input (normalized before sending)
    pub fn with_created_at(mut self, timestamp: impl Into<String>) -> Self {
        self.created_at = Some(timestamp.into());
        self
    }

    /// Copy with every present timestamp rewritten as a UTC instant
    ///
    /// Naive timestamps are read in `tz`.
    pub fn normalized_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Self, TimestampError> {
        let normalize = |value: &Option<String>| {
            value
                .as_deref()
                .map(|ts| normalize_timestamp_in(ts, tz))
                .transpose()
        };

        Ok(Self {
            mass_kg: self.mass_kg,
            measurement_timestamp: normalize(&self.measurement_timestamp)?,
            created_at: normalize(&self.created_at)?,
        })
    }

    /// Copy with every present timestamp rewritten as a UTC instant, reading
    /// naive values in local time
    pub fn normalized(&self) -> Result<Self, TimestampError> {
        self.normalized_in(&Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_deserialize_server_record() {
        let json = r#"{
            "id": 7,
            "mass_kg": 81.3,
            "measurement_timestamp": "2024-05-01T07:30:00.123456Z",
            "created_at": "2024-05-01T07:31:02Z"
        }"#;
        let mass: Mass = serde_json::from_str(json).unwrap();
        assert_eq!(mass.id, 7);
        assert_eq!(mass.mass_kg, 81.3);
        assert_eq!(to_wire(&mass.created_at), "2024-05-01T07:31:02.000Z");
    }

    #[test]
    fn test_format_value() {
        let mass = Mass {
            id: 1,
            mass_kg: 70.0,
            measurement_timestamp: Utc::now(),
            created_at: Utc::now(),
        };
        assert_eq!(mass.format_value(MassUnit::Kg, &NumberLocale::EN_US), "70.0 Kg");
        assert_eq!(mass.format_value(MassUnit::Lbs, &NumberLocale::EN_US), "154.32 Lbs");
    }

    #[test]
    fn test_absent_timestamps_are_omitted() {
        let value = serde_json::to_value(NewMass::new(70.0)).unwrap();
        assert_eq!(value, serde_json::json!({ "mass_kg": 70.0 }));
    }

    #[test]
    fn test_normalized_rewrites_both_timestamps() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let payload = NewMass::new(70.0)
            .with_measurement_timestamp("2024-01-01T08:00")
            .with_created_at("2024-01-01T00:00:00");

        let normalized = payload.normalized_in(&plus_one).unwrap();
        assert_eq!(normalized.mass_kg, 70.0);
        assert_eq!(
            normalized.measurement_timestamp.as_deref(),
            Some("2024-01-01T07:00:00.000Z")
        );
        assert_eq!(normalized.created_at.as_deref(), Some("2023-12-31T23:00:00.000Z"));
        // Source payload is untouched
        assert_eq!(payload.created_at.as_deref(), Some("2024-01-01T00:00:00"));
    }

    #[test]
    fn test_normalized_rejects_bad_timestamp() {
        let payload = NewMass::new(70.0).with_created_at("not a date");
        assert!(payload.normalized().is_err());
    }
}
