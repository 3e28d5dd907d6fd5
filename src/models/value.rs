use serde::{Deserialize, Serialize};

/// A recorded answer for one clinical field.
///
/// Practitioners submit sections as free-form JSON objects; only these three
/// shapes carry diagnostic signal. Anything else (numbers, nested objects,
/// null) is dropped during record construction so that a malformed value
/// reads as "not recorded" rather than failing the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Yes/no finding, e.g. `tinnitus: true`.
    Flag(bool),
    /// Single-select answer, e.g. `body_color: "pale"`.
    Text(String),
    /// Multi-select answer, e.g. `features: ["tooth_marked", "cracks"]`.
    Multi(Vec<String>),
}

impl FieldValue {
    /// Decode a raw JSON value, returning `None` for shapes that carry no
    /// recognizable signal. String entries inside a list are kept; other
    /// entry types are skipped.
    pub fn from_json(raw: &serde_json::Value) -> Option<Self> {
        match raw {
            serde_json::Value::Bool(b) => Some(Self::Flag(*b)),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Array(items) => {
                let entries: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(Self::Multi(entries))
                }
            }
            _ => None,
        }
    }

    /// True when the value is the single-select answer `expected`.
    pub fn is(&self, expected: &str) -> bool {
        matches!(self, Self::Text(s) if s == expected)
    }

    /// True when a multi-select answer includes `entry`. A single-select
    /// value equal to `entry` also counts: some older visits stored
    /// one-choice answers where the form now records a list.
    pub fn has(&self, entry: &str) -> bool {
        match self {
            Self::Multi(items) => items.iter().any(|i| i == entry),
            Self::Text(s) => s == entry,
            Self::Flag(_) => false,
        }
    }

    /// True when the value is the boolean flag `true`.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Flag(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_supported_shapes() {
        assert_eq!(
            FieldValue::from_json(&json!("pale")),
            Some(FieldValue::Text("pale".into()))
        );
        assert_eq!(
            FieldValue::from_json(&json!(true)),
            Some(FieldValue::Flag(true))
        );
        assert_eq!(
            FieldValue::from_json(&json!(["tooth_marked", "cracks"])),
            Some(FieldValue::Multi(vec![
                "tooth_marked".into(),
                "cracks".into()
            ]))
        );
    }

    /// Unexpected shapes degrade to absence, never an error.
    #[test]
    fn malformed_shapes_are_absent() {
        assert_eq!(FieldValue::from_json(&json!(42)), None);
        assert_eq!(FieldValue::from_json(&json!(null)), None);
        assert_eq!(FieldValue::from_json(&json!({"nested": "object"})), None);
        assert_eq!(FieldValue::from_json(&json!([1, 2, 3])), None);
    }

    #[test]
    fn mixed_list_keeps_string_entries() {
        assert_eq!(
            FieldValue::from_json(&json!(["red_tip", 7, null])),
            Some(FieldValue::Multi(vec!["red_tip".into()]))
        );
    }

    #[test]
    fn matching_is_shape_aware() {
        let text = FieldValue::Text("pale".into());
        assert!(text.is("pale"));
        assert!(!text.is("red"));
        assert!(!text.is_set());

        let multi = FieldValue::Multi(vec!["red_tip".into()]);
        assert!(multi.has("red_tip"));
        assert!(!multi.has("red_sides"));
        assert!(!multi.is("red_tip"));

        // Single-select stored where a multi-select is expected still matches.
        assert!(text.has("pale"));

        let flag = FieldValue::Flag(true);
        assert!(flag.is_set());
        assert!(!FieldValue::Flag(false).is_set());
        assert!(!flag.has("true"));
    }
}
