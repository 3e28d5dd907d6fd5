use serde::{Deserialize, Serialize};

use crate::models::enums::{ExcessDeficiency, HotCold, InteriorExterior, YinYang};
use crate::models::record::ClinicalRecord;

/// Canonical number of clinical sections across both modules
/// (12 observation + 12 interrogation). Data completeness is the recorded
/// fraction of these, independent of any score.
pub const CANONICAL_SECTION_COUNT: usize = 24;

// ---------------------------------------------------------------------------
// Pattern analysis results
// ---------------------------------------------------------------------------

/// One diagnostic pattern that cleared its significance threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    pub name: String,
    /// Accumulated score capped at 95. Never 100: a rule engine should not
    /// claim certainty.
    pub confidence: u8,
    /// One sentence per satisfied criterion, in evaluation order.
    pub supporting_evidence: Vec<String>,
    pub description: String,
    pub treatment_principle: String,
    pub herbal_formula: String,
    pub acupuncture_points: String,
    pub dietary_advice: String,
    pub category: String,
}

/// Ranked pattern-analysis outcome for one visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// At most the top 5 significant patterns, strongest first.
    pub patterns: Vec<PatternMatch>,
    /// Rounded mean confidence of the retained patterns; 0 when none.
    pub overall_confidence: u8,
    /// Percentage of the 24 canonical sections with recorded data.
    pub data_completeness: u8,
    /// How many matchers ran, significant or not.
    pub total_patterns_evaluated: usize,
}

// ---------------------------------------------------------------------------
// Eight Principles profile
// ---------------------------------------------------------------------------

/// The four classification axes of the patient's overall presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EightPrinciples {
    pub interior_exterior: InteriorExterior,
    pub hot_cold: HotCold,
    pub excess_deficiency: ExcessDeficiency,
    pub yin_yang: YinYang,
}

/// Constitutional profile synthesized from all signal extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcmProfile {
    pub eight_principles: EightPrinciples,
    /// Sorted, de-duplicated organ names.
    pub affected_organs: Vec<String>,
    /// Sorted, de-duplicated pathogenic factors.
    pub pathogenic_factors: Vec<String>,
    /// Sorted, de-duplicated Qi/Blood/Fluid disturbances.
    pub qi_blood_fluids: Vec<String>,
    /// Findings in extractor order.
    pub clinical_manifestations: Vec<String>,
    /// Narrative notes in extractor order, chief-complaint context last.
    pub reasoning_notes: Vec<String>,
    /// 0-100: half from data completeness, half from signal strength.
    pub diagnostic_confidence: u8,
}

// ---------------------------------------------------------------------------
// Assembled report
// ---------------------------------------------------------------------------

/// Both engine outputs packaged for report and UI callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub pattern_analysis: AnalysisResult,
    pub tcm_profile: TcmProfile,
}

// ---------------------------------------------------------------------------
// DiagnosticEngine trait
// ---------------------------------------------------------------------------

/// The main diagnostic engine seam.
///
/// Every operation is a pure function of the record: no I/O, no shared
/// mutable state, no failure path. Callers own fetching the record and
/// persisting the results.
pub trait DiagnosticEngine {
    /// Score every pattern matcher against the record and rank the
    /// significant ones.
    fn analyze_patterns(&self, record: &ClinicalRecord) -> AnalysisResult;

    /// Accumulate Eight-Principles signals and resolve the four axes.
    fn classify(&self, record: &ClinicalRecord) -> TcmProfile;

    /// Run both analyses and assemble the combined report.
    fn assess(&self, record: &ClinicalRecord) -> DiagnosticReport;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{ExcessDeficiency, HotCold, InteriorExterior, YinYang};

    #[test]
    fn profile_serializes_with_snake_case_axes() {
        let profile = TcmProfile {
            eight_principles: EightPrinciples {
                interior_exterior: InteriorExterior::Neutral,
                hot_cold: HotCold::Warm,
                excess_deficiency: ExcessDeficiency::MildDeficiency,
                yin_yang: YinYang::YinDeficiency,
            },
            affected_organs: vec!["Kidney".into()],
            pathogenic_factors: vec![],
            qi_blood_fluids: vec!["Yin Deficiency".into()],
            clinical_manifestations: vec![],
            reasoning_notes: vec![],
            diagnostic_confidence: 42,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["eight_principles"]["hot_cold"], "warm");
        assert_eq!(json["eight_principles"]["yin_yang"], "yin_deficiency");
        assert_eq!(json["diagnostic_confidence"], 42);
    }
}
