use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::value::FieldValue;

/// Errors raised while assembling a record from persisted rows.
///
/// Evaluation itself never fails: once a record is built, a missing or
/// malformed field simply reads as "signal absent".
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Section data parse failed ({section}): {source}")]
    Parse {
        section: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Section data for '{0}' is not a JSON object")]
    NotAnObject(String),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

/// The free-text portion of a visit: what the patient says is wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChiefComplaint {
    pub western_conditions: Option<String>,
    pub primary_concern: Option<String>,
    pub recent_symptoms: Option<String>,
}

type SectionFields = BTreeMap<String, FieldValue>;

/// Immutable snapshot of one visit's diagnostic data.
///
/// The caller fetches persisted per-section rows, builds this snapshot, and
/// hands it to the engine. Keeping evaluation off the storage layer keeps
/// every matcher pure and testable. Sections that were never filled in are
/// simply absent from the maps; absence is an expected state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalRecord {
    visit_id: Uuid,
    observation: BTreeMap<String, SectionFields>,
    interrogation: BTreeMap<String, SectionFields>,
    chief_complaint: Option<ChiefComplaint>,
}

impl ClinicalRecord {
    pub fn builder(visit_id: Uuid) -> ClinicalRecordBuilder {
        ClinicalRecordBuilder {
            record: ClinicalRecord {
                visit_id,
                observation: BTreeMap::new(),
                interrogation: BTreeMap::new(),
                chief_complaint: None,
            },
        }
    }

    pub fn visit_id(&self) -> Uuid {
        self.visit_id
    }

    /// Look up a field in an observation (physical examination) section.
    pub fn observation(&self, section: &str, field: &str) -> Option<&FieldValue> {
        self.observation.get(section).and_then(|s| s.get(field))
    }

    /// Look up a field in an interrogation (patient interview) section.
    pub fn interrogation(&self, section: &str, field: &str) -> Option<&FieldValue> {
        self.interrogation.get(section).and_then(|s| s.get(field))
    }

    pub fn chief_complaint(&self) -> Option<&ChiefComplaint> {
        self.chief_complaint.as_ref()
    }

    /// Chief-complaint primary concern, lower-cased for keyword matching.
    pub fn primary_concern_lower(&self) -> Option<String> {
        self.chief_complaint
            .as_ref()
            .and_then(|cc| cc.primary_concern.as_deref())
            .map(str::to_lowercase)
    }

    /// Number of sections with any recorded data, across both modules.
    pub fn section_count(&self) -> usize {
        self.observation.len() + self.interrogation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observation.is_empty()
            && self.interrogation.is_empty()
            && self.chief_complaint.is_none()
    }
}

/// Builds a [`ClinicalRecord`] from persisted section rows.
///
/// Two entry points per module: `*_section` for already-decoded JSON (rows
/// read through a typed store) and `*_section_json` for raw text blobs.
/// Field values of unexpected shape are dropped with a debug log; a blob
/// that is not a JSON object at all is reported to the caller, whose
/// storage layer owns that failure.
#[derive(Debug)]
pub struct ClinicalRecordBuilder {
    record: ClinicalRecord,
}

impl ClinicalRecordBuilder {
    pub fn observation_section(mut self, section: &str, data: &serde_json::Value) -> Self {
        if let Some(fields) = decode_fields(section, data) {
            self.record.observation.insert(section.to_string(), fields);
        }
        self
    }

    pub fn interrogation_section(mut self, section: &str, data: &serde_json::Value) -> Self {
        if let Some(fields) = decode_fields(section, data) {
            self.record
                .interrogation
                .insert(section.to_string(), fields);
        }
        self
    }

    pub fn observation_section_json(self, section: &str, blob: &str) -> Result<Self, RecordError> {
        let data = parse_blob(section, blob)?;
        Ok(self.observation_section(section, &data))
    }

    pub fn interrogation_section_json(
        self,
        section: &str,
        blob: &str,
    ) -> Result<Self, RecordError> {
        let data = parse_blob(section, blob)?;
        Ok(self.interrogation_section(section, &data))
    }

    pub fn chief_complaint(mut self, complaint: ChiefComplaint) -> Self {
        self.record.chief_complaint = Some(complaint);
        self
    }

    pub fn build(self) -> ClinicalRecord {
        self.record
    }
}

fn parse_blob(section: &str, blob: &str) -> Result<serde_json::Value, RecordError> {
    serde_json::from_str(blob).map_err(|source| RecordError::Parse {
        section: section.to_string(),
        source,
    })
}

fn decode_fields(section: &str, data: &serde_json::Value) -> Option<SectionFields> {
    let object = match data.as_object() {
        Some(object) => object,
        None => {
            tracing::debug!(section, "Skipping non-object section data");
            return None;
        }
    };

    let mut fields = SectionFields::new();
    for (name, raw) in object {
        match FieldValue::from_json(raw) {
            Some(value) => {
                fields.insert(name.clone(), value);
            }
            None => {
                tracing::debug!(section, field = %name, "Skipping unrecognized field value");
            }
        }
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with_tongue() -> ClinicalRecord {
        ClinicalRecord::builder(Uuid::new_v4())
            .observation_section(
                "tongue",
                &json!({
                    "body_color": "pale",
                    "features": ["tooth_marked"],
                    "photo_ref": 12345
                }),
            )
            .interrogation_section("digestion", &json!({"stools": "loose"}))
            .build()
    }

    #[test]
    fn field_lookup_by_module() {
        let record = record_with_tongue();

        assert!(record
            .observation("tongue", "body_color")
            .is_some_and(|v| v.is("pale")));
        assert!(record
            .interrogation("digestion", "stools")
            .is_some_and(|v| v.is("loose")));

        // Wrong module, wrong section, wrong field: all read as absent.
        assert!(record.interrogation("tongue", "body_color").is_none());
        assert!(record.observation("pulse", "rate").is_none());
        assert!(record.observation("tongue", "moisture").is_none());
    }

    /// A non-signal field value is dropped; the section itself survives.
    #[test]
    fn unrecognized_values_are_dropped() {
        let record = record_with_tongue();
        assert!(record.observation("tongue", "photo_ref").is_none());
        assert_eq!(record.section_count(), 2);
    }

    #[test]
    fn non_object_section_is_skipped() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section("tongue", &json!("scrawled note"))
            .build();
        assert!(record.is_empty());
        assert_eq!(record.section_count(), 0);
    }

    #[test]
    fn json_blob_round_trip() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section_json("tongue", r#"{"body_color": "red"}"#)
            .unwrap()
            .build();
        assert!(record
            .observation("tongue", "body_color")
            .is_some_and(|v| v.is("red")));
    }

    #[test]
    fn invalid_blob_reports_section() {
        let err = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section_json("tongue", "{not json")
            .unwrap_err();
        assert!(err.to_string().contains("tongue"));
    }

    #[test]
    fn primary_concern_is_lowercased() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .chief_complaint(ChiefComplaint {
                primary_concern: Some("Severe Arthritis".into()),
                ..Default::default()
            })
            .build();
        assert_eq!(
            record.primary_concern_lower().as_deref(),
            Some("severe arthritis")
        );
        assert!(!record.is_empty());
    }
}
