use std::collections::BTreeSet;

use crate::models::record::ClinicalRecord;

use super::patterns;
use super::principles::{diagnostic_confidence, resolve_axes, AxisScores, Contribution};
use super::rules::PatternDefinition;
use super::signals::all_contributions;
use super::types::{
    AnalysisResult, DiagnosticEngine, DiagnosticReport, PatternMatch, TcmProfile,
    CANONICAL_SECTION_COUNT,
};

/// Reported confidence ceiling. A rule engine never claims 100.
const CONFIDENCE_CAP: u32 = 95;
/// How many significant patterns the result retains.
const TOP_PATTERN_LIMIT: usize = 5;

/// Default implementation of the diagnostic engine.
/// Evaluates the full pattern library and the Eight-Principles extractors
/// against one immutable record per call; holds no per-visit state.
pub struct DefaultDiagnosticEngine {
    library: &'static [PatternDefinition],
}

impl DefaultDiagnosticEngine {
    pub fn new() -> Self {
        Self {
            library: patterns::LIBRARY,
        }
    }

    /// Engine over a custom pattern library. Used by tests; production
    /// callers want [`DefaultDiagnosticEngine::new`].
    pub fn with_library(library: &'static [PatternDefinition]) -> Self {
        Self { library }
    }

    fn data_completeness(record: &ClinicalRecord) -> u8 {
        let present = record.section_count().min(CANONICAL_SECTION_COUNT);
        (present as f64 / CANONICAL_SECTION_COUNT as f64 * 100.0).round() as u8
    }
}

impl Default for DefaultDiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticEngine for DefaultDiagnosticEngine {
    fn analyze_patterns(&self, record: &ClinicalRecord) -> AnalysisResult {
        let mut significant: Vec<PatternMatch> = Vec::new();

        for definition in self.library {
            let (score, evidence) = definition.evaluate(record);
            if !definition.is_significant(score) {
                continue;
            }
            debug_assert!(
                evidence.iter().all(|e| !e.is_empty()),
                "evidence must accompany every scored criterion"
            );
            significant.push(PatternMatch {
                name: definition.name.to_string(),
                confidence: score.min(CONFIDENCE_CAP) as u8,
                supporting_evidence: evidence.iter().map(|e| e.to_string()).collect(),
                description: definition.description.to_string(),
                treatment_principle: definition.treatment_principle.to_string(),
                herbal_formula: definition.herbal_formula.to_string(),
                acupuncture_points: definition.acupuncture_points.to_string(),
                dietary_advice: definition.dietary_advice.to_string(),
                category: definition.category.to_string(),
            });
        }

        // Stable sort: equal confidence keeps library order.
        significant.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        significant.truncate(TOP_PATTERN_LIMIT);

        let overall_confidence = if significant.is_empty() {
            0
        } else {
            let sum: u32 = significant.iter().map(|p| p.confidence as u32).sum();
            (sum as f64 / significant.len() as f64).round() as u8
        };

        let result = AnalysisResult {
            overall_confidence,
            data_completeness: Self::data_completeness(record),
            total_patterns_evaluated: self.library.len(),
            patterns: significant,
        };

        tracing::info!(
            visit_id = %record.visit_id(),
            evaluated = result.total_patterns_evaluated,
            reported = result.patterns.len(),
            confidence = result.overall_confidence,
            "Pattern analysis complete"
        );

        result
    }

    fn classify(&self, record: &ClinicalRecord) -> TcmProfile {
        let mut scores = AxisScores::default();
        let mut organs: BTreeSet<&'static str> = BTreeSet::new();
        let mut factors: BTreeSet<&'static str> = BTreeSet::new();
        let mut substances: BTreeSet<&'static str> = BTreeSet::new();
        let mut manifestations: Vec<String> = Vec::new();
        let mut notes: Vec<String> = Vec::new();

        for contribution in all_contributions(record) {
            let Contribution {
                scores: delta,
                organs: o,
                factors: f,
                substances: s,
                manifestations: m,
                notes: n,
            } = contribution;
            scores.absorb(&delta);
            organs.extend(o);
            factors.extend(f);
            substances.extend(s);
            manifestations.extend(m.into_iter().map(str::to_string));
            notes.extend(n);
        }

        let eight_principles = resolve_axes(&scores);
        let confidence = diagnostic_confidence(&scores, record.section_count());

        let profile = TcmProfile {
            eight_principles,
            affected_organs: organs.into_iter().map(str::to_string).collect(),
            pathogenic_factors: factors.into_iter().map(str::to_string).collect(),
            qi_blood_fluids: substances.into_iter().map(str::to_string).collect(),
            clinical_manifestations: manifestations,
            reasoning_notes: notes,
            diagnostic_confidence: confidence,
        };

        tracing::info!(
            visit_id = %record.visit_id(),
            hot_cold = profile.eight_principles.hot_cold.as_str(),
            excess_deficiency = profile.eight_principles.excess_deficiency.as_str(),
            confidence = profile.diagnostic_confidence,
            "Eight Principles classification complete"
        );

        profile
    }

    fn assess(&self, record: &ClinicalRecord) -> DiagnosticReport {
        DiagnosticReport {
            pattern_analysis: self.analyze_patterns(record),
            tcm_profile: self.classify(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    use crate::models::enums::{ExcessDeficiency, HotCold, YinYang};
    use crate::models::record::ChiefComplaint;

    fn engine() -> DefaultDiagnosticEngine {
        DefaultDiagnosticEngine::new()
    }

    fn empty_record() -> ClinicalRecord {
        ClinicalRecord::builder(Uuid::new_v4()).build()
    }

    /// Spleen-Qi-aligned findings across tongue, digestion, and energy.
    fn spleen_qi_record() -> ClinicalRecord {
        ClinicalRecord::builder(Uuid::new_v4())
            .observation_section(
                "tongue",
                &json!({"body_color": "pale", "body_shape": "swollen"}),
            )
            .interrogation_section("digestion", &json!({"stools": "loose"}))
            .interrogation_section("energy", &json!({"overall_energy": "fatigued"}))
            .build()
    }

    #[test]
    fn empty_record_yields_zeroed_analysis() {
        let result = engine().analyze_patterns(&empty_record());
        assert!(result.patterns.is_empty());
        assert_eq!(result.overall_confidence, 0);
        assert_eq!(result.data_completeness, 0);
        assert_eq!(result.total_patterns_evaluated, 37);
    }

    #[test]
    fn empty_record_yields_neutral_profile() {
        let profile = engine().classify(&empty_record());
        assert_eq!(profile.eight_principles.hot_cold, HotCold::Neutral);
        assert_eq!(profile.diagnostic_confidence, 0);
        assert!(profile.affected_organs.is_empty());
        assert!(profile.clinical_manifestations.is_empty());
    }

    #[test]
    fn spleen_qi_presentation_ranks_first() {
        let result = engine().analyze_patterns(&spleen_qi_record());

        let top = &result.patterns[0];
        assert_eq!(top.name, "Spleen Qi Deficiency");
        assert!(top.confidence >= 60, "got {}", top.confidence);
        assert!(top.supporting_evidence.len() >= 3);
        assert_eq!(top.category, "Spleen Patterns");
        assert!(!top.herbal_formula.is_empty());
    }

    /// A chief-complaint keyword bonus alone can never clear a threshold.
    #[test]
    fn keyword_bonus_alone_is_not_significant() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .chief_complaint(ChiefComplaint {
                primary_concern: Some("severe arthritis joint pain worse with rain".into()),
                ..Default::default()
            })
            .build();

        let result = engine().analyze_patterns(&record);
        assert!(result.patterns.is_empty());
        assert_eq!(result.overall_confidence, 0);
        assert_eq!(result.data_completeness, 0);
    }

    #[test]
    fn completeness_is_section_fraction() {
        let mut builder = ClinicalRecord::builder(Uuid::new_v4());
        for section in [
            "posture", "gait", "body_type", "shen", "complexion", "tongue",
        ] {
            builder = builder.observation_section(section, &json!({"noted": "normal"}));
        }
        for section in ["fever", "sweating", "head", "digestion", "sleep", "energy"] {
            builder = builder.interrogation_section(section, &json!({"noted": "normal"}));
        }
        let record = builder.build();

        assert_eq!(record.section_count(), 12);
        let result = engine().analyze_patterns(&record);
        assert_eq!(result.data_completeness, 50);
    }

    #[test]
    fn completeness_rounds_and_clamps() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section("tongue", &json!({"body_color": "pale_red"}))
            .interrogation_section("sleep", &json!({"quality": "good"}))
            .interrogation_section("energy", &json!({"overall_energy": "normal"}))
            .build();
        // 3 of 24 sections: 12.5 rounds to 13.
        assert_eq!(engine().analyze_patterns(&record).data_completeness, 13);

        // More sections than the canonical 24 still reads 100, not beyond.
        let mut builder = ClinicalRecord::builder(Uuid::new_v4());
        for i in 0..13 {
            builder = builder.observation_section(&format!("obs_{i}"), &json!({"noted": "ok"}));
        }
        for i in 0..13 {
            builder = builder.interrogation_section(&format!("int_{i}"), &json!({"noted": "ok"}));
        }
        let overfull = builder.build();
        assert_eq!(overfull.section_count(), 26);
        assert_eq!(engine().analyze_patterns(&overfull).data_completeness, 100);
    }

    /// Strong unopposed heat signals resolve hot, and yin/yang comes from
    /// the hot x excess lookup.
    #[test]
    fn hot_excess_record_classifies_yang_excess() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section(
                "tongue",
                &json!({
                    "body_color": "red",
                    "coating_color": "yellow",
                    "coating_thickness": "thick"
                }),
            )
            .interrogation_section("temperature", &json!({"feeling": "hot"}))
            .build();

        let profile = engine().classify(&record);
        assert_eq!(profile.eight_principles.hot_cold, HotCold::Hot);
        assert_eq!(
            profile.eight_principles.excess_deficiency,
            ExcessDeficiency::Excess
        );
        assert_eq!(profile.eight_principles.yin_yang, YinYang::YangExcess);
        assert!(profile.pathogenic_factors.contains(&"Heat".to_string()));
    }

    #[test]
    fn collected_lists_are_sorted_and_unique() {
        let record = spleen_qi_record();
        let profile = engine().classify(&record);

        let mut sorted = profile.affected_organs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(profile.affected_organs, sorted);
        assert!(profile.affected_organs.contains(&"Spleen".to_string()));
    }

    #[test]
    fn confidence_values_stay_bounded() {
        // Pile on enough aligned findings to overflow the raw scores.
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section(
                "tongue",
                &json!({
                    "body_color": "pale",
                    "body_shape": "swollen",
                    "moisture": "wet",
                    "features": ["tooth_marked"]
                }),
            )
            .interrogation_section(
                "temperature",
                &json!({"feeling": "cold", "extremities": "cold_feet"}),
            )
            .interrogation_section(
                "urination",
                &json!({"frequency": "frequent", "color": "clear", "nocturia": true}),
            )
            .interrogation_section(
                "digestion",
                &json!({"stools": "loose", "appetite": "poor", "bloating": "severe"}),
            )
            .interrogation_section("energy", &json!({"overall_energy": "fatigued"}))
            .interrogation_section("edema", &json!({"location": "lower_body"}))
            .chief_complaint(ChiefComplaint {
                primary_concern: Some("always cold, chronic diarrhea and edema".into()),
                ..Default::default()
            })
            .build();

        let report = engine().assess(&record);
        assert!(!report.pattern_analysis.patterns.is_empty());
        assert!(report.pattern_analysis.patterns.len() <= 5);
        for pattern in &report.pattern_analysis.patterns {
            assert!(pattern.confidence <= 95);
        }
        assert!(report.pattern_analysis.overall_confidence <= 95);
        assert!(report.tcm_profile.diagnostic_confidence <= 100);
    }

    #[test]
    fn ranking_is_descending_and_capped_at_five() {
        let result = engine().analyze_patterns(&spleen_qi_record());
        assert!(result.patterns.len() <= 5);
        for pair in result.patterns.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn overall_confidence_is_mean_of_retained() {
        let result = engine().analyze_patterns(&spleen_qi_record());
        let sum: u32 = result.patterns.iter().map(|p| p.confidence as u32).sum();
        let mean = (sum as f64 / result.patterns.len() as f64).round() as u8;
        assert_eq!(result.overall_confidence, mean);
    }

    /// Repeated runs over the same record are byte-identical.
    #[test]
    fn assessment_is_deterministic() {
        let record = spleen_qi_record();
        let first = serde_json::to_string(&engine().assess(&record)).unwrap();
        for _ in 0..5 {
            let again = serde_json::to_string(&engine().assess(&record)).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn assess_packages_both_outputs() {
        let report = engine().assess(&spleen_qi_record());
        assert_eq!(
            report.pattern_analysis.patterns[0].name,
            "Spleen Qi Deficiency"
        );
        assert!(report
            .tcm_profile
            .qi_blood_fluids
            .contains(&"Qi Deficiency".to_string()));
    }
}
