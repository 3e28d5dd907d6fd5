//! Qi deficiency patterns. The only family with the lower significance
//! threshold: Qi depletion presents diffusely, so fewer concurrent findings
//! are required before it is worth reporting.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const SPLEEN_QI_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Spleen Qi Deficiency",
    category: "Spleen Patterns",
    threshold: 30,
    rules: &[
        when_any(
            20,
            "Pale tongue indicates Qi/Blood deficiency",
            &[obs("tongue", "body_color", Is("pale"))],
        ),
        when_any(
            15,
            "Swollen tongue indicates Spleen Qi deficiency",
            &[obs("tongue", "body_shape", Is("swollen"))],
        ),
        when_any(
            20,
            "Tooth-marked tongue indicates Spleen Qi deficiency with dampness",
            &[obs("tongue", "features", Has("tooth_marked"))],
        ),
        when_any(
            20,
            "Poor appetite indicates Spleen Qi deficiency",
            &[ask("digestion", "appetite", OneOf(&["poor", "no_appetite"]))],
        ),
        when_any(
            25,
            "Loose stools indicate Spleen Qi deficiency",
            &[ask("digestion", "stools", OneOf(&["loose", "watery"]))],
        ),
        when_any(
            20,
            "Chronic fatigue indicates Qi deficiency",
            &[ask("energy", "overall_energy", OneOf(&["low", "fatigued"]))],
        ),
        when_any(
            15,
            "Bloating indicates Spleen Qi deficiency",
            &[ask("digestion", "bloating", OneOf(&["moderate", "severe"]))],
        ),
    ],
    keywords: &[
        "fatigue",
        "tired",
        "digestive",
        "bloating",
        "loose stool",
        "diarrhea",
    ],
    keyword_evidence: "Chief complaint aligns with Spleen Qi deficiency",
    description: "Weakness of Spleen's transformation and transportation functions leading to poor digestion and energy",
    treatment_principle: "Tonify Spleen Qi, strengthen digestion, resolve dampness",
    herbal_formula: "Si Jun Zi Tang (Four Gentlemen Decoction) or Bu Zhong Yi Qi Tang",
    acupuncture_points: "ST36, SP6, SP3, CV12, BL20, BL21",
    dietary_advice: "Warm cooked foods, regular meals, avoid cold/raw foods",
};

pub const LUNG_QI_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Lung Qi Deficiency",
    category: "Lung Patterns",
    threshold: 30,
    rules: &[
        when_any(
            25,
            "Weak voice indicates Lung Qi deficiency",
            &[obs("voice", "quality", Is("weak"))],
        ),
        when_any(
            25,
            "Shortness of breath indicates Lung Qi deficiency",
            &[ask("breathing", "quality", OneOf(&["shortness", "weak"]))],
        ),
        when_any(
            20,
            "Spontaneous sweating indicates Lung Qi deficiency with weak defensive Qi",
            &[ask("sweating", "type", Is("spontaneous"))],
        ),
        when_any(
            20,
            "Frequent colds indicate weak defensive Qi",
            &[ask("respiratory", "frequency", Is("frequent_colds"))],
        ),
        when_any(
            15,
            "Fatigue on exertion indicates Qi deficiency",
            &[ask("energy", "overall_energy", Is("low"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Weakness of Lung Qi affecting breathing and defensive Qi",
    treatment_principle: "Tonify Lung Qi, consolidate defensive Qi",
    herbal_formula: "Bu Fei Tang (Tonify Lungs Decoction) or Yu Ping Feng San",
    acupuncture_points: "LU9, LU7, BL13, ST36, CV17",
    dietary_advice: "Lung-strengthening foods, avoid cold exposure",
};

pub const HEART_QI_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Heart Qi Deficiency",
    category: "Heart Patterns",
    threshold: 30,
    rules: &[
        when_any(
            30,
            "Palpitations indicate Heart Qi deficiency",
            &[
                ask("cardiovascular", "palpitations", Flag),
                ask("cardiovascular", "palpitations", Is("frequent")),
            ],
        ),
        when_any(
            20,
            "Shortness of breath on exertion indicates Heart Qi deficiency",
            &[ask("breathing", "quality", Is("shortness_on_exertion"))],
        ),
        when_any(
            15,
            "Spontaneous sweating indicates Qi deficiency",
            &[ask("sweating", "type", Is("spontaneous"))],
        ),
        when_any(
            20,
            "Pale complexion indicates Qi/Blood deficiency",
            &[obs("complexion", "primary_color", Is("pale"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Weakness of Heart Qi affecting circulation and mental functions",
    treatment_principle: "Tonify Heart Qi, calm the mind",
    herbal_formula: "Zhi Gan Cao Tang (Honey-Prepared Licorice Decoction)",
    acupuncture_points: "HT7, PC6, CV17, BL15, ST36",
    dietary_advice: "Heart-nourishing foods, avoid stress",
};

pub const KIDNEY_QI_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Kidney Qi Deficiency",
    category: "Kidney Patterns",
    threshold: 30,
    rules: &[
        when_any(
            25,
            "Frequent urination indicates Kidney Qi not securing",
            &[ask("urination", "frequency", Is("frequent"))],
        ),
        when_any(
            25,
            "Urinary urgency/incontinence indicates Kidney Qi deficiency",
            &[
                ask("urination", "urgency", Is("urgent")),
                ask("urination", "incontinence", Flag),
            ],
        ),
        when_all(
            20,
            "Lower back weakness indicates Kidney Qi deficiency",
            &[
                ask("back", "pain", Is("lower_back")),
                ask("back", "quality", Is("aching")),
            ],
        ),
        when_any(
            15,
            "Hearing decline/tinnitus indicates Kidney Qi deficiency",
            &[
                ask("hearing", "quality", Is("declining")),
                ask("hearing", "tinnitus", Flag),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Weakness of Kidney Qi affecting holding and grasping functions",
    treatment_principle: "Tonify Kidney Qi, secure and astringe",
    herbal_formula: "Suo Quan Wan (Shut the Sluice Pill)",
    acupuncture_points: "KI3, BL23, CV4, GV4, SP6",
    dietary_advice: "Kidney-tonifying foods, adequate rest",
};
