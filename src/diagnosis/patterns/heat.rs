//! Full-heat and fire patterns rising through Liver, Heart, and Stomach.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const LIVER_FIRE_RISING: PatternDefinition = PatternDefinition {
    name: "Liver Fire Rising",
    category: "Liver Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Red tongue with red sides indicates Liver Fire",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "features", Has("red_sides")),
            ],
        ),
        when_any(
            20,
            "Yellow coating indicates Heat",
            &[obs("tongue", "coating_color", Is("yellow"))],
        ),
        when_any(
            25,
            "Red face indicates Heat rising",
            &[
                obs("complexion", "primary_color", Is("red")),
                obs("face", "flushing", Flag),
            ],
        ),
        when_any(
            25,
            "Red eyes indicate Liver Fire",
            &[obs("eyes", "redness", Flag), obs("eyes", "bloodshot", Flag)],
        ),
        when_any(
            25,
            "Severe temporal headache indicates Liver Fire rising",
            &[ask("head", "pain", OneOf(&["temporal", "severe"]))],
        ),
        when_any(
            25,
            "Irritability/anger indicate Liver Fire",
            &[ask(
                "emotions",
                "primary_emotion",
                OneOf(&["irritable", "angry"]),
            )],
        ),
        when_any(
            20,
            "Severe dizziness/vertigo indicate Liver Fire rising",
            &[
                ask("head", "dizziness", Is("severe")),
                ask("head", "vertigo", Flag),
            ],
        ),
        when_any(
            20,
            "Sudden loud tinnitus indicates Liver Fire rising",
            &[ask("hearing", "tinnitus", OneOf(&["sudden", "loud"]))],
        ),
        when_any(
            20,
            "Bitter taste indicates Liver/Gallbladder Fire",
            &[ask("mouth", "taste", Is("bitter"))],
        ),
        when_any(
            15,
            "Strong thirst indicates Heat",
            &[ask("thirst", "quality", Is("very_thirsty"))],
        ),
        when_all(
            15,
            "Constipation and dark urine indicate Heat",
            &[
                ask("digestion", "stools", Is("constipated")),
                ask("urination", "color", Is("dark")),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Liver Fire rising upward causing heat signs in head and eyes",
    treatment_principle: "Clear Liver Fire, calm Liver, settle Yang",
    herbal_formula: "Long Dan Xie Gan Tang (Gentiana Drain Liver Decoction)",
    acupuncture_points: "LV2, LV3, GB20, GB43, LI11, TH5",
    dietary_advice: "Cooling foods, avoid alcohol/spicy foods, stress reduction",
};

pub const HEART_FIRE_BLAZING: PatternDefinition = PatternDefinition {
    name: "Heart Fire Blazing",
    category: "Heart Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Red tongue with red tip indicates Heart Fire",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "features", Has("red_tip")),
            ],
        ),
        when_any(
            25,
            "Ulcers on tongue tip indicate Heart Fire",
            &[obs("tongue", "features", Has("ulcers_tip"))],
        ),
        when_any(
            25,
            "Severe palpitations indicate Heart Fire",
            &[ask("cardiovascular", "palpitations", Is("severe"))],
        ),
        when_any(
            25,
            "Severe agitation/restlessness indicate Heart Fire",
            &[
                ask("emotions", "primary_emotion", Is("agitated")),
                ask("emotions", "restlessness", Is("severe")),
            ],
        ),
        when_all(
            20,
            "Insomnia with disturbing dreams indicates Heart Fire",
            &[
                ask("sleep", "quality", Is("insomnia")),
                ask("sleep", "dreams", Is("disturbing")),
            ],
        ),
        when_any(
            25,
            "Mouth ulcers indicate Heart Fire",
            &[ask("mouth", "ulcers", Flag), ask("mouth", "sores", Flag)],
        ),
        when_any(
            15,
            "Strong thirst indicates Heat",
            &[ask("thirst", "quality", Is("very_thirsty"))],
        ),
        when_any(
            20,
            "Dark/burning urination indicates Heart Fire descending",
            &[
                ask("urination", "color", Is("dark")),
                ask("urination", "burning", Flag),
            ],
        ),
        when_all(
            15,
            "Severe facial acne with irritability indicates Heart Fire",
            &[
                obs("face", "acne", Is("severe")),
                ask("emotions", "irritability", Is("high")),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Heart Fire blazing upward disturbing the mind and spirit",
    treatment_principle: "Clear Heart Fire, calm the mind, nourish Yin",
    herbal_formula: "Dao Chi San (Guide Out the Red Powder) or Huang Lian Jie Du Tang",
    acupuncture_points: "HT8, HT7, PC8, PC7, SI3, BL15",
    dietary_advice: "Cooling foods, avoid stimulants, emotional calm",
};

pub const STOMACH_FIRE: PatternDefinition = PatternDefinition {
    name: "Stomach Fire",
    category: "Stomach Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red tongue with yellow coating indicates Stomach Fire",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_color", Is("yellow")),
            ],
        ),
        when_any(
            30,
            "Excessive appetite indicates Stomach Fire",
            &[
                ask("digestion", "appetite", Is("excessive")),
                ask("digestion", "hunger", Is("excessive")),
            ],
        ),
        when_all(
            25,
            "Strong thirst for cold drinks indicates Stomach Fire",
            &[
                ask("thirst", "quality", Is("very_thirsty")),
                ask("thirst", "preference", Is("cold_drinks")),
            ],
        ),
        when_any(
            25,
            "Bleeding/swollen gums indicate Stomach Fire",
            &[
                ask("mouth", "bleeding_gums", Flag),
                ask("gums", "swelling", Flag),
            ],
        ),
        when_any(
            20,
            "Mouth ulcers indicate Stomach Fire",
            &[ask("mouth", "ulcers", Flag), ask("mouth", "sores", Flag)],
        ),
        when_any(
            20,
            "Bad breath/foul taste indicate Stomach Fire",
            &[
                ask("breath", "odor", Is("bad")),
                ask("mouth", "taste", Is("foul")),
            ],
        ),
        when_all(
            25,
            "Burning epigastric pain indicates Stomach Fire",
            &[
                ask("digestion", "pain", Is("epigastric")),
                ask("digestion", "pain_quality", Is("burning")),
            ],
        ),
        when_any(
            15,
            "Constipation indicates Stomach Heat",
            &[ask("digestion", "stools", Is("constipated"))],
        ),
        when_any(
            10,
            "Dark urine indicates Heat",
            &[ask("urination", "color", Is("dark"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Stomach Fire blazing causing excessive hunger and heat signs",
    treatment_principle: "Clear Stomach Fire, generate fluids",
    herbal_formula: "Qing Wei San (Clear the Stomach Powder) or Bai Hu Tang",
    acupuncture_points: "ST44, ST45, LI4, LI11, CV12",
    dietary_advice: "Cooling foods, avoid spicy/fried foods",
};
