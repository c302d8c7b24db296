//! Import document
//!
//! User data bundles accepted by the `/import` endpoint. The client does not
//! validate their structure; it only requires well-formed JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::mass::Mass;

/// A parsed import body, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDocument(Value);

/// One mass entry in the shape `/import` expects
#[derive(Debug, Serialize)]
struct ImportMass {
    mass_kg: f64,
    measurement_timestamp: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ImportBundle {
    masses: Vec<ImportMass>,
}

impl ImportDocument {
    /// Parse user-supplied JSON text
    pub fn parse(json_text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_text).map(Self)
    }

    /// Build a document from existing records (ids are dropped)
    pub fn from_masses(masses: &[Mass]) -> Self {
        let bundle = ImportBundle {
            masses: masses
                .iter()
                .map(|m| ImportMass {
                    mass_kg: m.mass_kg,
                    measurement_timestamp: m.measurement_timestamp,
                    created_at: m.created_at,
                })
                .collect(),
        };
        // Serializing plain structs of numbers and timestamps cannot fail
        Self(serde_json::to_value(bundle).unwrap_or(Value::Null))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON text
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

/// What happened to an import request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported,
    /// The server refused the data; `message` is its response body
    Rejected { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_accepts_any_json() {
        assert!(ImportDocument::parse(r#"{"masses": []}"#).is_ok());
        assert!(ImportDocument::parse("[1, 2, 3]").is_ok());
        assert!(ImportDocument::parse("not json").is_err());
    }

    #[test]
    fn test_from_masses_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let masses = vec![Mass {
            id: 9,
            mass_kg: 80.5,
            measurement_timestamp: ts,
            created_at: ts,
        }];

        let doc = ImportDocument::from_masses(&masses);
        let entry = &doc.as_value()["masses"][0];
        assert_eq!(entry["mass_kg"], 80.5);
        assert_eq!(entry["measurement_timestamp"], "2024-01-02T03:04:05Z");
        assert!(entry.get("id").is_none());
    }

    #[test]
    fn test_round_trip_through_text() {
        let doc = ImportDocument::from_masses(&[]);
        let reparsed = ImportDocument::parse(&doc.to_pretty_string()).unwrap();
        assert_eq!(reparsed, doc);
    }
}
