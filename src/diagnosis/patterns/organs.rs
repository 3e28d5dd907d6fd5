//! Fu-organ heat patterns: Gallbladder, Small Intestine, Bladder, Large
//! Intestine.

use crate::diagnosis::rules::Test::{Flag, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const GALLBLADDER_FIRE: PatternDefinition = PatternDefinition {
    name: "Gallbladder Fire",
    category: "Gallbladder Patterns",
    threshold: 35,
    rules: &[
        when_all(
            20,
            "Yellow greasy coating indicates Gallbladder Fire",
            &[
                obs("tongue", "coating_color", Is("yellow")),
                obs("tongue", "coating_quality", Is("greasy")),
            ],
        ),
        when_any(
            30,
            "Bitter taste indicates Gallbladder Fire",
            &[ask("mouth", "taste", Is("bitter"))],
        ),
        when_any(
            25,
            "Temporal/one-sided headache indicates Gallbladder Fire",
            &[ask("head", "pain", OneOf(&["temporal", "one_sided"]))],
        ),
        when_any(
            25,
            "Sudden loud tinnitus indicates Gallbladder Fire",
            &[ask("hearing", "tinnitus", OneOf(&["sudden", "loud"]))],
        ),
        when_any(
            20,
            "Irritability indicates Liver-Gallbladder Fire",
            &[ask(
                "emotions",
                "primary_emotion",
                OneOf(&["irritable", "angry"]),
            )],
        ),
        when_any(
            20,
            "Red painful eyes indicate Liver-Gallbladder Fire rising",
            &[obs("eyes", "redness", Flag), obs("eyes", "pain", Flag)],
        ),
        when_any(
            25,
            "Hypochondriac pain indicates Gallbladder Fire",
            &[
                ask("hypochondrium", "pain", Flag),
                ask("hypochondrium", "distention", Flag),
            ],
        ),
        when_any(
            20,
            "Nausea/vomiting bitter fluid indicates Gallbladder Fire",
            &[
                ask("digestion", "nausea", Flag),
                ask("vomiting", "content", Is("bitter_fluid")),
            ],
        ),
    ],
    keywords: &[
        "bitter taste",
        "gallbladder",
        "side pain",
        "hypochondriac",
        "migraine",
    ],
    keyword_evidence: "Chief complaint aligns with Gallbladder Fire",
    description: "Gallbladder Fire rising causing bitter taste, headache, and irritability",
    treatment_principle: "Clear Gallbladder Fire, harmonize Liver and Gallbladder",
    herbal_formula: "Long Dan Xie Gan Tang (Gentiana Drain Liver Decoction)",
    acupuncture_points: "GB20, GB34, GB41, LV2, LV3, SJ6",
    dietary_advice: "Cooling bitter foods, avoid alcohol and greasy foods",
};

pub const SMALL_INTESTINE_HEAT: PatternDefinition = PatternDefinition {
    name: "Small Intestine Heat",
    category: "Small Intestine Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Red tongue tip indicates Heart/Small Intestine Heat",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "tip", Is("very_red")),
            ],
        ),
        when_all(
            35,
            "Dark burning urination indicates Small Intestine Heat",
            &[
                ask("urination", "color", Is("dark")),
                ask("urination", "sensation", Is("burning")),
            ],
        ),
        when_any(
            25,
            "Blood in urine indicates Small Intestine Heat",
            &[ask("urination", "blood", Flag)],
        ),
        when_any(
            25,
            "Mouth/tongue ulcers indicate Heart Fire descending to Small Intestine",
            &[ask("mouth", "ulcers", Flag), ask("tongue", "ulcers", Flag)],
        ),
        when_any(
            15,
            "Restlessness/insomnia indicate Heart-Small Intestine Heat",
            &[
                ask("emotions", "restlessness", Is("severe")),
                ask("sleep", "insomnia", Is("severe")),
            ],
        ),
        when_all(
            20,
            "Lower abdominal burning pain indicates Small Intestine Heat",
            &[
                ask("abdomen", "pain", Is("lower")),
                ask("abdomen", "pain_quality", Is("burning")),
            ],
        ),
        when_any(
            10,
            "Thirst indicates Heat",
            &[ask("thirst", "quality", Is("thirsty"))],
        ),
    ],
    keywords: &[
        "urinary burning",
        "uti",
        "mouth ulcers",
        "restless",
        "blood in urine",
    ],
    keyword_evidence: "Chief complaint aligns with Small Intestine Heat",
    description: "Heat in Small Intestine causing urinary symptoms and mouth ulcers",
    treatment_principle: "Clear Heart Fire, drain Small Intestine Heat, promote urination",
    herbal_formula: "Dao Chi San (Guide Out the Red Powder)",
    acupuncture_points: "HT8, SI3, BL27, CV3, SP6",
    dietary_advice: "Cooling diuretic foods, avoid spicy foods and alcohol",
};

pub const BLADDER_DAMP_HEAT: PatternDefinition = PatternDefinition {
    name: "Bladder Damp-Heat",
    category: "Bladder Patterns",
    threshold: 35,
    rules: &[
        when_all(
            20,
            "Thick yellow coating indicates Damp-Heat",
            &[
                obs("tongue", "coating_color", Is("yellow")),
                obs("tongue", "coating_thickness", Is("thick")),
            ],
        ),
        when_all(
            30,
            "Frequent scanty urination indicates Bladder Damp-Heat",
            &[
                ask("urination", "frequency", Is("frequent")),
                ask("urination", "amount", Is("scanty")),
            ],
        ),
        when_any(
            35,
            "Painful burning urination indicates Bladder Damp-Heat",
            &[ask("urination", "sensation", OneOf(&["burning", "painful"]))],
        ),
        when_any(
            25,
            "Dark cloudy urine indicates Bladder Damp-Heat",
            &[ask("urination", "color", OneOf(&["dark", "cloudy"]))],
        ),
        when_any(
            20,
            "Urinary urgency indicates Bladder Damp-Heat",
            &[ask("urination", "urgency", Flag)],
        ),
        when_any(
            25,
            "Blood in urine indicates severe Bladder Damp-Heat",
            &[ask("urination", "blood", Flag)],
        ),
        when_any(
            15,
            "Lower back heaviness indicates Bladder Damp-Heat",
            &[
                ask("lower_back", "pain", Flag),
                ask("lower_back", "heaviness", Flag),
            ],
        ),
        when_any(
            10,
            "Low-grade fever indicates Damp-Heat",
            &[ask("fever", "quality", Is("low_grade"))],
        ),
    ],
    keywords: &[
        "uti",
        "bladder infection",
        "cystitis",
        "painful urination",
        "urinary urgency",
    ],
    keyword_evidence: "Chief complaint aligns with Bladder Damp-Heat",
    description: "Damp-Heat in the Bladder causing urinary tract infection symptoms",
    treatment_principle: "Clear Heat, resolve Dampness, promote urination",
    herbal_formula: "Ba Zheng San (Eight Herb Powder for Rectification)",
    acupuncture_points: "BL28, BL22, CV3, SP9, SP6, LV2",
    dietary_advice: "Diuretic foods, cranberry juice, avoid spicy and damp-forming foods",
};

pub const LARGE_INTESTINE_HEAT: PatternDefinition = PatternDefinition {
    name: "Large Intestine Heat",
    category: "Large Intestine Patterns",
    threshold: 35,
    rules: &[
        when_all(
            20,
            "Thick yellow coating indicates Heat",
            &[
                obs("tongue", "coating_color", Is("yellow")),
                obs("tongue", "coating_thickness", Is("thick")),
            ],
        ),
        when_any(
            30,
            "Constipation indicates Large Intestine Heat",
            &[ask("digestion", "stools", Is("constipated"))],
        ),
        when_any(
            25,
            "Dry hard stools indicate Large Intestine Heat",
            &[ask("digestion", "stool_quality", OneOf(&["dry", "hard"]))],
        ),
        when_any(
            20,
            "Foul-smelling stools indicate Heat",
            &[ask("digestion", "stool_smell", OneOf(&["foul", "burning"]))],
        ),
        when_all(
            25,
            "Severe abdominal burning pain indicates Large Intestine Heat",
            &[
                ask("abdomen", "pain", Is("severe")),
                ask("abdomen", "pain_quality", Is("burning")),
            ],
        ),
        when_any(
            20,
            "Burning anus/hemorrhoids indicate Large Intestine Heat",
            &[
                ask("anus", "burning", Flag),
                ask("anus", "hemorrhoids", Flag),
            ],
        ),
        when_any(
            15,
            "Extreme thirst indicates Heat",
            &[
                ask("thirst", "quality", Is("very_thirsty")),
                ask("thirst", "preference", Is("cold_drinks")),
            ],
        ),
        when_any(
            15,
            "High fever indicates Heat",
            &[
                ask("fever", "severity", Is("high")),
                ask("fever", "pattern", Is("afternoon")),
            ],
        ),
    ],
    keywords: &["constipation", "hemorrhoids", "anal burning", "abdominal pain"],
    keyword_evidence: "Chief complaint aligns with Large Intestine Heat",
    description: "Heat in Large Intestine causing constipation and dry hard stools",
    treatment_principle: "Clear Heat, moisten Intestines, promote bowel movement",
    herbal_formula: "Ma Zi Ren Wan (Hemp Seed Pill) or Da Cheng Qi Tang",
    acupuncture_points: "ST25, ST37, LI4, LI11, SJ6",
    dietary_advice: "High fiber foods, increase fluids, avoid hot spicy foods",
};
