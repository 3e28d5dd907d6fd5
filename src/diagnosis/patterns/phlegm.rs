//! Phlegm and Dampness: turbid accumulation, heaviness, obstruction.

use crate::diagnosis::rules::Test::{Flag, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const PHLEGM_DAMPNESS: PatternDefinition = PatternDefinition {
    name: "Phlegm-Dampness",
    category: "Phlegm-Dampness Disorders",
    threshold: 35,
    rules: &[
        when_any(
            30,
            "Greasy tongue coating indicates Phlegm-Dampness",
            &[obs("tongue", "coating_quality", OneOf(&["greasy", "sticky"]))],
        ),
        when_any(
            20,
            "Thick coating indicates Dampness accumulation",
            &[obs("tongue", "coating_thickness", Is("thick"))],
        ),
        when_any(
            15,
            "Swollen tongue indicates Dampness",
            &[obs("tongue", "body_shape", Is("swollen"))],
        ),
        when_any(
            25,
            "Body heaviness indicates Dampness",
            &[
                ask("body", "heaviness", Flag),
                ask("body", "feeling", Is("heavy")),
            ],
        ),
        when_any(
            20,
            "Sticky sensation in mouth indicates Dampness",
            &[
                ask("mouth", "sticky", Flag),
                ask("mouth", "taste", Is("sticky")),
            ],
        ),
        when_any(
            20,
            "Loose/sticky stools indicate Dampness",
            &[ask("digestion", "stools", OneOf(&["loose", "sticky"]))],
        ),
        when_any(
            25,
            "Copious white sputum indicates Phlegm-Dampness",
            &[ask("respiratory", "sputum", OneOf(&["copious", "white"]))],
        ),
        when_any(
            20,
            "Dizziness/heavy head indicate Phlegm-Dampness",
            &[
                ask("head", "dizziness", Flag),
                ask("head", "feeling", Is("heavy")),
            ],
        ),
        when_any(
            20,
            "Chest oppression indicates Phlegm-Dampness",
            &[
                ask("chest", "oppression", Flag),
                ask("chest", "fullness", Flag),
            ],
        ),
        when_all(
            15,
            "Poor appetite with bloating indicates Dampness",
            &[
                ask("digestion", "poor_appetite", Flag),
                ask("digestion", "bloating", Is("moderate")),
            ],
        ),
        when_any(
            20,
            "Edema indicates Dampness accumulation",
            &[ask("edema", "present", Flag)],
        ),
        when_any(
            15,
            "Obesity indicates Phlegm-Dampness accumulation",
            &[obs("body_type", "build", Is("overweight"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Accumulation of Phlegm and Dampness causing heaviness and obstruction",
    treatment_principle: "Resolve Phlegm, transform Dampness, strengthen Spleen",
    herbal_formula: "Er Chen Tang (Two-Cured Decoction) or Wen Dan Tang",
    acupuncture_points: "ST40, SP9, SP6, CV12, PC6, ST36",
    dietary_advice: "Avoid greasy/dairy foods, eat warm/drying foods",
};
