//! Eight-Principles signal extractors.
//!
//! One function per clinical signal group. Each reads only the immutable
//! record and returns its own [`Contribution`]; the engine merges them in
//! the order listed in [`all_contributions`]. Nothing here can fail: an
//! absent or malformed field is simply a signal that is not present.

use crate::models::record::ClinicalRecord;
use crate::models::value::FieldValue;

use super::principles::Contribution;

/// Run every extractor over the record, in fixed order.
pub fn all_contributions(record: &ClinicalRecord) -> Vec<Contribution> {
    vec![
        tongue_signals(record),
        complexion_signals(record),
        pulse_signals(record),
        temperature_signals(record),
        energy_signals(record),
        digestion_signals(record),
        sleep_signals(record),
        emotion_signals(record),
        urination_signals(record),
        pain_signals(record),
        complaint_notes(record),
    ]
}

// ---------------------------------------------------------------------------
// Observation signals
// ---------------------------------------------------------------------------

/// Tongue examination: the richest single signal source.
fn tongue_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    // Body color
    if obs_is(record, "tongue", "body_color", "pale") {
        c.scores.deficiency += 25;
        c.scores.cold += 20;
        c.scores.yang -= 15;
        c.substances.push("Blood Deficiency");
        c.substances.push("Qi Deficiency");
        c.organs.push("Spleen");
        c.organs.push("Heart");
        c.manifestations
            .push("Pale tongue body indicates Qi and Blood deficiency");
        c.notes.push(
            "Pale tongue suggests insufficient Qi and Blood, commonly from Spleen-Stomach dysfunction"
                .into(),
        );
    } else if obs_is(record, "tongue", "body_color", "pale_red") {
        c.notes
            .push("Normal pale-red tongue indicates balanced Qi and Blood".into());
    } else if obs_is(record, "tongue", "body_color", "red") {
        c.scores.hot += 30;
        c.scores.excess += 15;
        c.scores.yin -= 20;
        c.factors.push("Heat");
        c.organs.push("Heart");
        c.organs.push("Liver");
        c.manifestations.push("Red tongue indicates Heat pattern");
        c.notes.push(
            "Red tongue reflects internal Heat, often from Yin deficiency or pathogenic Heat"
                .into(),
        );
    } else if obs_is(record, "tongue", "body_color", "dark_red") {
        c.scores.hot += 40;
        c.scores.excess += 20;
        c.scores.yin -= 30;
        c.factors.push("Extreme Heat");
        c.substances.push("Blood Stasis");
        c.manifestations
            .push("Dark red tongue indicates extreme Heat or Blood stasis");
        c.notes.push(
            "Dark red tongue suggests severe Heat entering Blood level or chronic Blood stasis"
                .into(),
        );
    } else if obs_one_of(record, "tongue", "body_color", &["purple", "blue"]) {
        c.scores.cold += 30;
        c.scores.deficiency += 20;
        c.substances.push("Blood Stasis");
        c.substances.push("Qi Stagnation");
        c.factors.push("Cold");
        c.organs.push("Heart");
        c.organs.push("Liver");
        c.manifestations
            .push("Purple/blue tongue indicates Blood stasis with Cold");
        c.notes.push(
            "Purple-blue tongue reflects severe Qi and Blood stagnation, often with Cold obstruction"
                .into(),
        );
    }

    // Body shape
    if obs_is(record, "tongue", "body_shape", "thin") {
        c.scores.deficiency += 20;
        c.scores.yin -= 15;
        c.substances.push("Blood Deficiency");
        c.substances.push("Yin Deficiency");
        c.organs.push("Spleen");
        c.organs.push("Kidney");
        c.manifestations
            .push("Thin tongue indicates Yin and Blood deficiency");
    } else if obs_is(record, "tongue", "body_shape", "swollen") {
        c.scores.deficiency += 15;
        c.scores.cold += 15;
        c.substances.push("Dampness");
        c.substances.push("Phlegm");
        c.factors.push("Dampness");
        c.organs.push("Spleen");
        c.organs.push("Kidney");
        c.manifestations
            .push("Swollen tongue indicates Spleen Qi deficiency with Dampness");
        c.notes.push(
            "Swollen tongue reflects impaired fluid metabolism from Spleen-Kidney Yang deficiency"
                .into(),
        );
    }

    // Special features
    if obs_has(record, "tongue", "features", "tooth_marked") {
        c.scores.deficiency += 20;
        c.substances.push("Qi Deficiency");
        c.organs.push("Spleen");
        c.manifestations
            .push("Tooth-marked edges indicate Spleen Qi deficiency with Dampness");
        c.notes.push(
            "Tooth marks result from tongue swelling pressing against teeth, indicating Spleen Qi weakness"
                .into(),
        );
    }
    if obs_has(record, "tongue", "features", "cracks") {
        c.scores.deficiency += 15;
        c.scores.yin -= 20;
        c.substances.push("Yin Deficiency");
        c.manifestations
            .push("Cracked tongue indicates Yin deficiency or chronic Qi consumption");
    }
    if obs_has(record, "tongue", "features", "red_tip") {
        c.scores.hot += 15;
        c.organs.push("Heart");
        c.factors.push("Heart Fire");
        c.manifestations
            .push("Red tip indicates Heart Fire disturbing Spirit");
    }
    if obs_has(record, "tongue", "features", "red_sides") {
        c.scores.hot += 15;
        c.organs.push("Liver");
        c.organs.push("Gallbladder");
        c.factors.push("Liver Fire");
        c.manifestations
            .push("Red sides indicate Liver-Gallbladder Heat");
    }

    // Moisture
    let tongue_dry = obs_is(record, "tongue", "moisture", "dry");
    if tongue_dry {
        c.scores.hot += 20;
        c.scores.deficiency += 15;
        c.scores.yin -= 25;
        c.substances.push("Yin Deficiency");
        c.substances.push("Fluid Depletion");
        c.manifestations
            .push("Dry tongue indicates Yin and Fluid deficiency");
    } else if obs_one_of(record, "tongue", "moisture", &["wet", "very_wet"]) {
        c.scores.cold += 20;
        c.scores.deficiency += 15;
        c.substances.push("Dampness");
        c.factors.push("Dampness");
        c.organs.push("Spleen");
        c.organs.push("Kidney");
        c.manifestations
            .push("Excessively wet tongue indicates Spleen-Kidney Yang deficiency with Dampness");
    }

    // Coating thickness
    if obs_is(record, "tongue", "coating_thickness", "thick") {
        c.scores.excess += 25;
        c.factors.push("Dampness");
        c.factors.push("Phlegm");
        c.organs.push("Spleen");
        c.manifestations
            .push("Thick coating indicates pathogenic accumulation");
    } else if obs_one_of(record, "tongue", "coating_thickness", &["none", "peeled"]) {
        c.scores.deficiency += 25;
        c.scores.yin -= 30;
        c.substances.push("Stomach Yin Deficiency");
        c.organs.push("Stomach");
        c.organs.push("Kidney");
        c.manifestations
            .push("Absent coating indicates severe Yin deficiency");
    }

    // Coating color. Gray or black marks a deep interior condition whose
    // nature is read off the moisture: scorched dry or flooded cold.
    if obs_is(record, "tongue", "coating_color", "white") {
        c.scores.cold += 15;
        c.scores.exterior += 10;
        c.factors.push("Cold");
    } else if obs_is(record, "tongue", "coating_color", "yellow") {
        c.scores.hot += 25;
        c.scores.interior += 15;
        c.factors.push("Heat");
    } else if obs_one_of(record, "tongue", "coating_color", &["gray", "black"]) {
        c.scores.interior += 30;
        if tongue_dry {
            c.scores.hot += 30;
            c.factors.push("Extreme Heat");
        } else {
            c.scores.cold += 30;
            c.factors.push("Extreme Cold");
        }
    }

    c
}

fn complexion_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if obs_one_of(record, "complexion", "primary_color", &["pale", "white"]) {
        c.scores.deficiency += 20;
        c.scores.cold += 15;
        c.substances.push("Blood Deficiency");
        c.organs.push("Lung");
        c.organs.push("Spleen");
        c.manifestations
            .push("Pale complexion indicates Qi and Blood deficiency");
    } else if obs_one_of(record, "complexion", "primary_color", &["red", "flushed"]) {
        c.scores.hot += 20;
        c.organs.push("Heart");
        c.organs.push("Liver");
        c.manifestations
            .push("Red face indicates Heat rising upward");
    } else if obs_one_of(record, "complexion", "primary_color", &["yellow", "sallow"]) {
        c.scores.deficiency += 15;
        c.substances.push("Dampness");
        c.organs.push("Spleen");
        c.organs.push("Stomach");
        c.manifestations
            .push("Yellow complexion indicates Spleen deficiency with Dampness");
    } else if obs_one_of(record, "complexion", "primary_color", &["dark", "gray"]) {
        c.substances.push("Blood Stasis");
        c.organs.push("Kidney");
        c.organs.push("Liver");
    }

    if obs_one_of(record, "complexion", "luster", &["dull", "withered"]) {
        c.scores.deficiency += 15;
        c.substances.push("Essence Deficiency");
    } else if obs_one_of(record, "complexion", "luster", &["shiny", "greasy"]) {
        c.substances.push("Dampness");
        c.substances.push("Phlegm");
    }

    c
}

fn pulse_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if obs_is(record, "pulse", "rate", "rapid") {
        c.scores.hot += 25;
        c.scores.excess += 10;
    } else if obs_is(record, "pulse", "rate", "slow") {
        c.scores.cold += 25;
        c.scores.deficiency += 10;
    }

    if obs_is(record, "pulse", "depth", "floating") {
        c.scores.exterior += 25;
    } else if obs_is(record, "pulse", "depth", "deep") {
        c.scores.interior += 25;
    }

    if obs_is(record, "pulse", "strength", "forceful") {
        c.scores.excess += 20;
    } else if obs_is(record, "pulse", "strength", "weak") {
        c.scores.deficiency += 20;
    }

    if obs_is(record, "pulse", "quality", "slippery") {
        c.substances.push("Phlegm");
        c.substances.push("Dampness");
    } else if obs_is(record, "pulse", "quality", "wiry") {
        c.organs.push("Liver");
        c.substances.push("Qi Stagnation");
    } else if obs_is(record, "pulse", "quality", "thready") {
        c.scores.deficiency += 20;
        c.substances.push("Blood Deficiency");
    }

    c
}

// ---------------------------------------------------------------------------
// Interrogation signals
// ---------------------------------------------------------------------------

fn temperature_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if ask_one_of(record, "temperature", "feeling", &["cold", "chilly"]) {
        c.scores.cold += 25;
        c.scores.deficiency += 15;
        c.scores.yang -= 25;
        c.manifestations
            .push("Aversion to cold indicates Yang deficiency");
    } else if ask_is(record, "temperature", "feeling", "hot") {
        c.scores.hot += 25;
        c.scores.yin -= 20;
        c.manifestations
            .push("Feeling hot indicates Heat pattern or Yin deficiency");
    }

    if ask_is(record, "temperature", "preference", "cold_drinks") {
        c.scores.hot += 15;
    } else if ask_is(record, "temperature", "preference", "warm_drinks") {
        c.scores.cold += 15;
    }

    c
}

fn energy_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if ask_one_of(record, "energy", "overall_energy", &["low", "fatigued"]) {
        c.scores.deficiency += 30;
        c.substances.push("Qi Deficiency");
        c.organs.push("Spleen");
        c.organs.push("Kidney");
        c.organs.push("Lung");
        c.manifestations
            .push("Chronic fatigue indicates Qi deficiency");
    }

    if ask_is(record, "energy", "time_of_day", "worse_morning") {
        c.organs.push("Kidney");
    } else if ask_is(record, "energy", "time_of_day", "worse_afternoon") {
        c.organs.push("Spleen");
        c.scores.yin -= 10;
    }

    c
}

fn digestion_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if ask_one_of(record, "digestion", "appetite", &["poor", "no_appetite"]) {
        c.scores.deficiency += 15;
        c.organs.push("Spleen");
        c.organs.push("Stomach");
    } else if ask_is(record, "digestion", "appetite", "excessive") {
        c.scores.hot += 15;
        c.scores.excess += 10;
        c.factors.push("Stomach Fire");
    }

    if ask_one_of(record, "digestion", "stools", &["loose", "watery"]) {
        c.scores.deficiency += 25;
        c.scores.cold += 20;
        c.substances.push("Spleen Qi Deficiency");
        c.substances.push("Dampness");
        c.organs.push("Spleen");
        c.organs.push("Kidney");
        c.manifestations
            .push("Loose stools indicate Spleen Yang deficiency");
    } else if ask_is(record, "digestion", "stools", "constipated") {
        c.scores.hot += 15;
        c.substances.push("Fluid Deficiency");
        c.manifestations
            .push("Constipation may indicate Heat or Fluid deficiency");
    }

    if ask_one_of(record, "digestion", "bloating", &["severe", "moderate"]) {
        c.substances.push("Qi Stagnation");
        c.substances.push("Dampness");
        c.organs.push("Spleen");
        c.organs.push("Liver");
    }

    c
}

fn sleep_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if ask_is(record, "sleep", "quality", "poor") {
        if ask_is(record, "sleep", "difficulty", "falling_asleep") {
            c.organs.push("Liver");
            c.substances.push("Qi Stagnation");
        } else if ask_is(record, "sleep", "difficulty", "staying_asleep") {
            c.organs.push("Heart");
            c.organs.push("Kidney");
            c.substances.push("Yin Deficiency");
        } else if ask_is(record, "sleep", "difficulty", "early_waking") {
            c.organs.push("Liver");
            c.organs.push("Gallbladder");
        }
    }

    if ask_one_of(record, "sleep", "dreams", &["excessive", "disturbing"]) {
        c.organs.push("Heart");
        c.substances.push("Heart Blood Deficiency");
    }

    c
}

fn emotion_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if ask_one_of(record, "emotions", "primary_emotion", &["anxious", "worried"]) {
        c.organs.push("Spleen");
        c.organs.push("Heart");
        c.substances.push("Qi Stagnation");
        c.manifestations.push("Anxiety affects Heart and Spleen");
    } else if ask_one_of(record, "emotions", "primary_emotion", &["irritable", "angry"]) {
        c.organs.push("Liver");
        c.substances.push("Liver Qi Stagnation");
        c.manifestations
            .push("Irritability indicates Liver Qi stagnation");
    } else if ask_one_of(record, "emotions", "primary_emotion", &["sad", "depressed"]) {
        c.organs.push("Lung");
        c.organs.push("Heart");
        c.substances.push("Qi Stagnation");
    } else if ask_is(record, "emotions", "primary_emotion", "fearful") {
        c.organs.push("Kidney");
        c.scores.deficiency += 10;
    }

    c
}

fn urination_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if ask_is(record, "urination", "frequency", "frequent") {
        if ask_one_of(record, "urination", "color", &["clear", "pale"]) {
            c.scores.cold += 20;
            c.scores.deficiency += 20;
            c.scores.yang -= 25;
            c.organs.push("Kidney");
            c.substances.push("Kidney Yang Deficiency");
            c.manifestations
                .push("Frequent clear urination indicates Kidney Yang deficiency");
        } else if ask_is(record, "urination", "color", "dark") {
            c.scores.hot += 15;
            c.factors.push("Damp-Heat");
        }
    } else if ask_is(record, "urination", "frequency", "scanty") {
        c.substances.push("Fluid Deficiency");
        if ask_is(record, "urination", "color", "dark") {
            c.scores.hot += 20;
        }
    }

    c
}

fn pain_signals(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    // Pain qualities only count once a location is actually recorded.
    let located = record
        .interrogation("pain", "location")
        .is_some_and(|value| match value {
            FieldValue::Multi(items) => !items.is_empty(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Flag(set) => *set,
        });
    if !located {
        return c;
    }

    if ask_one_of(record, "pain", "quality", &["dull", "heavy"]) {
        c.scores.deficiency += 15;
        c.substances.push("Qi Deficiency");
    } else if ask_one_of(record, "pain", "quality", &["sharp", "stabbing"]) {
        c.substances.push("Blood Stasis");
        c.substances.push("Qi Stagnation");
    } else if ask_is(record, "pain", "quality", "distending") {
        c.substances.push("Qi Stagnation");
    }

    if ask_is(record, "pain", "temperature_effect", "better_with_warmth") {
        c.scores.cold += 15;
    } else if ask_is(record, "pain", "temperature_effect", "better_with_cold") {
        c.scores.hot += 15;
    }

    c
}

/// Chief-complaint context: narrative only, never scores.
fn complaint_notes(record: &ClinicalRecord) -> Contribution {
    let mut c = Contribution::default();

    if let Some(complaint) = record.chief_complaint() {
        let concern = complaint
            .primary_concern
            .as_deref()
            .unwrap_or("Not specified");
        c.notes.push(format!("Chief Concern: {concern}"));

        if let Some(conditions) = complaint.western_conditions.as_deref() {
            c.notes
                .push(format!("Western Diagnosis Context: {conditions}"));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn obs_is(record: &ClinicalRecord, section: &str, field: &str, expected: &str) -> bool {
    record
        .observation(section, field)
        .is_some_and(|v| v.is(expected))
}

fn obs_one_of(record: &ClinicalRecord, section: &str, field: &str, options: &[&str]) -> bool {
    record
        .observation(section, field)
        .is_some_and(|v| options.iter().any(|o| v.is(o)))
}

fn obs_has(record: &ClinicalRecord, section: &str, field: &str, entry: &str) -> bool {
    record
        .observation(section, field)
        .is_some_and(|v| v.has(entry))
}

fn ask_is(record: &ClinicalRecord, section: &str, field: &str, expected: &str) -> bool {
    record
        .interrogation(section, field)
        .is_some_and(|v| v.is(expected))
}

fn ask_one_of(record: &ClinicalRecord, section: &str, field: &str, options: &[&str]) -> bool {
    record
        .interrogation(section, field)
        .is_some_and(|v| options.iter().any(|o| v.is(o)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    use crate::models::record::{ChiefComplaint, ClinicalRecord};

    fn empty_record() -> ClinicalRecord {
        ClinicalRecord::builder(Uuid::new_v4()).build()
    }

    #[test]
    fn empty_record_contributes_nothing() {
        for contribution in all_contributions(&empty_record()) {
            assert_eq!(contribution.scores, Default::default());
            assert!(contribution.organs.is_empty());
            assert!(contribution.manifestations.is_empty());
        }
    }

    #[test]
    fn pale_tongue_pulls_toward_cold_deficiency() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section("tongue", &json!({"body_color": "pale"}))
            .build();
        let c = tongue_signals(&record);
        assert_eq!(c.scores.deficiency, 25);
        assert_eq!(c.scores.cold, 20);
        assert_eq!(c.scores.yang, -15);
        assert!(c.substances.contains(&"Blood Deficiency"));
        assert!(c.organs.contains(&"Spleen"));
        assert_eq!(c.manifestations.len(), 1);
    }

    /// A normal tongue leaves a note but moves no axis.
    #[test]
    fn pale_red_tongue_is_neutral() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section("tongue", &json!({"body_color": "pale_red"}))
            .build();
        let c = tongue_signals(&record);
        assert_eq!(c.scores, Default::default());
        assert_eq!(c.notes.len(), 1);
        assert!(c.manifestations.is_empty());
    }

    /// Gray/black coating reads its nature off tongue moisture.
    #[test]
    fn dark_coating_splits_on_moisture() {
        let dry = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section(
                "tongue",
                &json!({"coating_color": "black", "moisture": "dry"}),
            )
            .build();
        let c = tongue_signals(&dry);
        assert_eq!(c.scores.interior, 30);
        assert!(c.factors.contains(&"Extreme Heat"));

        let damp = ClinicalRecord::builder(Uuid::new_v4())
            .observation_section("tongue", &json!({"coating_color": "gray"}))
            .build();
        let c = tongue_signals(&damp);
        assert_eq!(c.scores.cold, 30);
        assert!(c.factors.contains(&"Extreme Cold"));
    }

    #[test]
    fn frequent_clear_urination_is_yang_deficient() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .interrogation_section(
                "urination",
                &json!({"frequency": "frequent", "color": "clear"}),
            )
            .build();
        let c = urination_signals(&record);
        assert_eq!(c.scores.yang, -25);
        assert!(c.substances.contains(&"Kidney Yang Deficiency"));
    }

    #[test]
    fn frequent_dark_urination_is_damp_heat() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .interrogation_section(
                "urination",
                &json!({"frequency": "frequent", "color": "dark"}),
            )
            .build();
        let c = urination_signals(&record);
        assert_eq!(c.scores.hot, 15);
        assert!(c.factors.contains(&"Damp-Heat"));
    }

    /// Pain qualities without a recorded location stay silent.
    #[test]
    fn pain_requires_location() {
        let no_location = ClinicalRecord::builder(Uuid::new_v4())
            .interrogation_section("pain", &json!({"quality": "stabbing"}))
            .build();
        assert!(pain_signals(&no_location).substances.is_empty());

        let located = ClinicalRecord::builder(Uuid::new_v4())
            .interrogation_section(
                "pain",
                &json!({"quality": "stabbing", "location": ["shoulder"]}),
            )
            .build();
        let c = pain_signals(&located);
        assert!(c.substances.contains(&"Blood Stasis"));
    }

    #[test]
    fn sleep_difficulty_branches_by_phase() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .interrogation_section(
                "sleep",
                &json!({"quality": "poor", "difficulty": "staying_asleep"}),
            )
            .build();
        let c = sleep_signals(&record);
        assert!(c.organs.contains(&"Heart"));
        assert!(c.organs.contains(&"Kidney"));
        assert!(c.substances.contains(&"Yin Deficiency"));
    }

    #[test]
    fn complaint_context_becomes_notes() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .chief_complaint(ChiefComplaint {
                primary_concern: Some("chronic migraines".into()),
                western_conditions: Some("hypertension".into()),
                recent_symptoms: None,
            })
            .build();
        let c = complaint_notes(&record);
        assert_eq!(c.notes[0], "Chief Concern: chronic migraines");
        assert_eq!(c.notes[1], "Western Diagnosis Context: hypertension");
        assert_eq!(c.scores, Default::default());
    }

    #[test]
    fn complaint_without_concern_says_not_specified() {
        let record = ClinicalRecord::builder(Uuid::new_v4())
            .chief_complaint(ChiefComplaint::default())
            .build();
        let c = complaint_notes(&record);
        assert_eq!(c.notes, vec!["Chief Concern: Not specified".to_string()]);
    }
}
