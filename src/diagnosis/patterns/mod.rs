//! The pattern library: every matcher the engine evaluates, grouped by
//! family. Library order is load-bearing — ranking uses a stable sort, so
//! equal scores keep this order.

pub mod blood;
pub mod cold;
pub mod combined;
pub mod damp_heat;
pub mod exterior;
pub mod heat;
pub mod organs;
pub mod phlegm;
pub mod qi;
pub mod stagnation;
pub mod stasis;
pub mod wind;
pub mod wind_damp;
pub mod yang;
pub mod yin;

use super::rules::PatternDefinition;

pub static LIBRARY: &[PatternDefinition] = &[
    // Qi deficiency
    qi::SPLEEN_QI_DEFICIENCY,
    qi::LUNG_QI_DEFICIENCY,
    qi::HEART_QI_DEFICIENCY,
    qi::KIDNEY_QI_DEFICIENCY,
    // Yang deficiency
    yang::KIDNEY_YANG_DEFICIENCY,
    yang::SPLEEN_YANG_DEFICIENCY,
    yang::HEART_YANG_DEFICIENCY,
    // Yin deficiency
    yin::KIDNEY_YIN_DEFICIENCY,
    yin::LUNG_YIN_DEFICIENCY,
    yin::LIVER_YIN_DEFICIENCY,
    yin::HEART_YIN_DEFICIENCY,
    yin::STOMACH_YIN_DEFICIENCY,
    // Blood deficiency
    blood::HEART_BLOOD_DEFICIENCY,
    blood::LIVER_BLOOD_DEFICIENCY,
    // Qi stagnation
    stagnation::LIVER_QI_STAGNATION,
    // Blood stasis
    stasis::BLOOD_STASIS,
    // Phlegm-Dampness
    phlegm::PHLEGM_DAMPNESS,
    // Heat and fire
    heat::LIVER_FIRE_RISING,
    heat::HEART_FIRE_BLAZING,
    heat::STOMACH_FIRE,
    // Cold
    cold::INTERNAL_COLD,
    // Wind
    wind::INTERNAL_WIND,
    // Exterior invasions
    exterior::WIND_COLD_EXTERIOR,
    exterior::WIND_HEAT_EXTERIOR,
    exterior::SUMMERHEAT,
    // Damp-Heat
    damp_heat::DAMP_HEAT,
    damp_heat::LUNG_HEAT,
    // Fu-organ heat
    organs::GALLBLADDER_FIRE,
    organs::SMALL_INTESTINE_HEAT,
    organs::BLADDER_DAMP_HEAT,
    organs::LARGE_INTESTINE_HEAT,
    // Combined patterns
    combined::LIVER_SPLEEN_DISHARMONY,
    combined::HEART_KIDNEY_NOT_COMMUNICATING,
    combined::LUNG_KIDNEY_YIN_DEFICIENCY,
    combined::LIVER_KIDNEY_YIN_DEFICIENCY,
    combined::SPLEEN_KIDNEY_YANG_DEFICIENCY,
    // Wind-Damp obstruction
    wind_damp::WIND_DAMP_BI,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn library_holds_every_family() {
        assert_eq!(LIBRARY.len(), 37);
    }

    #[test]
    fn pattern_names_are_unique() {
        let names: HashSet<&str> = LIBRARY.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), LIBRARY.len());
    }

    /// Qi deficiency reports at 30; every other family at 35.
    #[test]
    fn thresholds_follow_family_convention() {
        for pattern in LIBRARY {
            if pattern.name.ends_with("Qi Deficiency") {
                assert_eq!(pattern.threshold, 30, "{}", pattern.name);
            } else {
                assert_eq!(pattern.threshold, 35, "{}", pattern.name);
            }
        }
    }

    /// Keyword bonus configuration is all-or-nothing per pattern.
    #[test]
    fn keyword_evidence_matches_keywords() {
        for pattern in LIBRARY {
            assert_eq!(
                pattern.keywords.is_empty(),
                pattern.keyword_evidence.is_empty(),
                "{}",
                pattern.name
            );
        }
    }

    #[test]
    fn every_pattern_carries_rules_and_payload() {
        for pattern in LIBRARY {
            assert!(!pattern.rules.is_empty(), "{}", pattern.name);
            assert!(!pattern.description.is_empty(), "{}", pattern.name);
            assert!(!pattern.treatment_principle.is_empty(), "{}", pattern.name);
            assert!(!pattern.herbal_formula.is_empty(), "{}", pattern.name);
            assert!(!pattern.acupuncture_points.is_empty(), "{}", pattern.name);
            assert!(!pattern.dietary_advice.is_empty(), "{}", pattern.name);
            assert!(!pattern.category.is_empty(), "{}", pattern.name);
        }
    }

    /// Each pattern's criteria can reach its own threshold.
    #[test]
    fn thresholds_are_reachable() {
        for pattern in LIBRARY {
            let max_score: u32 = pattern.rules.iter().map(|r| r.weight).sum();
            assert!(
                max_score >= pattern.threshold,
                "{} cannot reach {}",
                pattern.name,
                pattern.threshold
            );
        }
    }
}
