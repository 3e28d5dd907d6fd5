//! Declarative diagnostic criteria and the interpreter that scores them.
//!
//! Each pattern is a data record: a list of weighted rules plus the clinical
//! payload shown to the practitioner. One generic fold evaluates any rule
//! list, so adding a pattern means adding a table entry, not control flow.

use crate::models::record::ClinicalRecord;
use crate::models::value::FieldValue;

/// Fixed bonus when the chief complaint mentions one of a pattern's keywords.
/// Free text can nudge a score; it can never carry a pattern past its
/// threshold on its own.
pub const COMPLAINT_BONUS: u32 = 10;

/// Which module a signal is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Observation,
    Interrogation,
}

/// How a recorded value qualifies a signal.
#[derive(Debug, Clone, Copy)]
pub enum Test {
    /// Single-select answer equals the value.
    Is(&'static str),
    /// Single-select answer is any of the values.
    OneOf(&'static [&'static str]),
    /// Multi-select answer includes the entry.
    Has(&'static str),
    /// Boolean finding is set.
    Flag,
}

/// One field lookup with its qualifying test. Absent sections and fields
/// never qualify; they are not errors.
#[derive(Debug, Clone, Copy)]
pub struct Signal {
    pub module: Module,
    pub section: &'static str,
    pub field: &'static str,
    pub test: Test,
}

impl Signal {
    fn present(&self, record: &ClinicalRecord) -> bool {
        let value = match self.module {
            Module::Observation => record.observation(self.section, self.field),
            Module::Interrogation => record.interrogation(self.section, self.field),
        };
        let Some(value) = value else {
            return false;
        };
        match self.test {
            Test::Is(expected) => value.is(expected),
            Test::OneOf(options) => options.iter().any(|option| value.is(option)),
            Test::Has(entry) => value.has(entry),
            Test::Flag => matches!(value, FieldValue::Flag(true)),
        }
    }
}

/// How a rule's signals combine.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// At least one signal present.
    Any(&'static [Signal]),
    /// Every signal present.
    All(&'static [Signal]),
}

impl Trigger {
    fn satisfied(&self, record: &ClinicalRecord) -> bool {
        match self {
            Trigger::Any(signals) => signals.iter().any(|s| s.present(record)),
            Trigger::All(signals) => signals.iter().all(|s| s.present(record)),
        }
    }
}

/// One weighted diagnostic criterion. The evidence sentence is emitted
/// exactly when the weight is scored; the two can never drift apart.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub weight: u32,
    pub evidence: &'static str,
    pub when: Trigger,
}

/// A complete pattern matcher: criteria, threshold, and clinical payload.
#[derive(Debug, Clone, Copy)]
pub struct PatternDefinition {
    pub name: &'static str,
    pub category: &'static str,
    /// Minimum accumulated score for the pattern to be reported.
    pub threshold: u32,
    pub rules: &'static [Rule],
    /// Chief-complaint keywords granting [`COMPLAINT_BONUS`]; empty for
    /// patterns that ignore free text.
    pub keywords: &'static [&'static str],
    /// Evidence sentence emitted with the keyword bonus.
    pub keyword_evidence: &'static str,
    pub description: &'static str,
    pub treatment_principle: &'static str,
    pub herbal_formula: &'static str,
    pub acupuncture_points: &'static str,
    pub dietary_advice: &'static str,
}

impl PatternDefinition {
    /// Fold the rule list into `(score, evidence)`, in rule order.
    pub fn evaluate(&self, record: &ClinicalRecord) -> (u32, Vec<&'static str>) {
        let (mut score, mut evidence) = (0u32, Vec::new());

        for rule in self.rules {
            if rule.when.satisfied(record) {
                score += rule.weight;
                evidence.push(rule.evidence);
            }
        }

        if !self.keywords.is_empty() {
            if let Some(concern) = record.primary_concern_lower() {
                if self.keywords.iter().any(|kw| concern.contains(*kw)) {
                    score += COMPLAINT_BONUS;
                    evidence.push(self.keyword_evidence);
                }
            }
        }

        (score, evidence)
    }

    pub fn is_significant(&self, score: u32) -> bool {
        score >= self.threshold
    }
}

// ---------------------------------------------------------------------------
// Table constructors
// ---------------------------------------------------------------------------
// Shorthand so the pattern tables read close to the clinical criteria they
// encode: `obs`/`ask` build a signal from each module, `when_any`/`when_all`
// build the rule around them.

pub const fn obs(section: &'static str, field: &'static str, test: Test) -> Signal {
    Signal {
        module: Module::Observation,
        section,
        field,
        test,
    }
}

pub const fn ask(section: &'static str, field: &'static str, test: Test) -> Signal {
    Signal {
        module: Module::Interrogation,
        section,
        field,
        test,
    }
}

pub const fn when_any(
    weight: u32,
    evidence: &'static str,
    signals: &'static [Signal],
) -> Rule {
    Rule {
        weight,
        evidence,
        when: Trigger::Any(signals),
    }
}

pub const fn when_all(
    weight: u32,
    evidence: &'static str,
    signals: &'static [Signal],
) -> Rule {
    Rule {
        weight,
        evidence,
        when: Trigger::All(signals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{ChiefComplaint, ClinicalRecord};
    use serde_json::json;
    use uuid::Uuid;

    const TEST_PATTERN: PatternDefinition = PatternDefinition {
        name: "Test Pattern",
        category: "Test",
        threshold: 35,
        rules: &[
            when_any(
                20,
                "pale tongue",
                &[obs("tongue", "body_color", Test::Is("pale"))],
            ),
            when_all(
                25,
                "pale and swollen tongue",
                &[
                    obs("tongue", "body_color", Test::Is("pale")),
                    obs("tongue", "body_shape", Test::Is("swollen")),
                ],
            ),
            when_any(
                15,
                "loose or watery stools",
                &[ask(
                    "digestion",
                    "stools",
                    Test::OneOf(&["loose", "watery"]),
                )],
            ),
            when_any(
                10,
                "tooth-marked tongue",
                &[obs("tongue", "features", Test::Has("tooth_marked"))],
            ),
            when_any(10, "tinnitus", &[ask("hearing", "tinnitus", Test::Flag)]),
        ],
        keywords: &["fatigue", "loose stool"],
        keyword_evidence: "complaint aligns",
        description: "",
        treatment_principle: "",
        herbal_formula: "",
        acupuncture_points: "",
        dietary_advice: "",
    };

    fn full_record() -> ClinicalRecord {
        ClinicalRecord::builder(Uuid::new_v4())
            .observation_section(
                "tongue",
                &json!({
                    "body_color": "pale",
                    "body_shape": "swollen",
                    "features": ["tooth_marked"]
                }),
            )
            .interrogation_section("digestion", &json!({"stools": "watery"}))
            .interrogation_section("hearing", &json!({"tinnitus": true}))
            .build()
    }

    /// Every satisfied rule contributes its weight and exactly one sentence.
    #[test]
    fn score_and_evidence_move_in_lock_step() {
        let (score, evidence) = TEST_PATTERN.evaluate(&full_record());
        assert_eq!(score, 20 + 25 + 15 + 10 + 10);
        assert_eq!(evidence.len(), 5);
        assert_eq!(evidence[0], "pale tongue");
        assert_eq!(evidence[1], "pale and swollen tongue");
    }

    #[test]
    fn empty_record_scores_zero() {
        let record = ClinicalRecord::builder(Uuid::new_v4()).build();
        let (score, evidence) = TEST_PATTERN.evaluate(&record);
        assert_eq!(score, 0);
        assert!(evidence.is_empty());
    }

    /// Lowering a signal below its trigger removes exactly its contribution.
    #[test]
    fn all_trigger_requires_every_signal() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section("tongue", &json!({"body_color": "pale"}))
            .build();
        let (score, evidence) = TEST_PATTERN.evaluate(&record);
        // Conjunction misses body_shape; only the single-signal rule fires.
        assert_eq!(score, 20);
        assert_eq!(evidence, vec!["pale tongue"]);
    }

    #[test]
    fn complaint_keywords_add_fixed_bonus() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .chief_complaint(ChiefComplaint {
                primary_concern: Some("Constant FATIGUE since spring".into()),
                ..Default::default()
            })
            .build();
        let (score, evidence) = TEST_PATTERN.evaluate(&record);
        assert_eq!(score, COMPLAINT_BONUS);
        assert_eq!(evidence, vec!["complaint aligns"]);
        assert!(!TEST_PATTERN.is_significant(score));
    }

    #[test]
    fn flag_test_ignores_text_values() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .interrogation_section("hearing", &json!({"tinnitus": "sometimes"}))
            .build();
        let (score, _) = TEST_PATTERN.evaluate(&record);
        assert_eq!(score, 0);
    }

    /// Repeated evaluation of the same record is byte-identical.
    #[test]
    fn evaluation_is_deterministic() {
        let record = full_record();
        let first = TEST_PATTERN.evaluate(&record);
        for _ in 0..10 {
            assert_eq!(TEST_PATTERN.evaluate(&record), first);
        }
    }
}
