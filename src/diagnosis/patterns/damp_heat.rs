//! Damp-Heat combinations and heat lodged in the Lung.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const DAMP_HEAT: PatternDefinition = PatternDefinition {
    name: "Damp-Heat",
    category: "Damp-Heat Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Thick yellow coating indicates Damp-Heat",
            &[
                obs("tongue", "coating_color", Is("yellow")),
                obs("tongue", "coating_thickness", Is("thick")),
            ],
        ),
        when_any(
            25,
            "Greasy coating indicates Dampness with Heat",
            &[obs("tongue", "coating_quality", OneOf(&["greasy", "sticky"]))],
        ),
        when_any(
            25,
            "Sticky foul-smelling stools indicate Damp-Heat",
            &[
                ask("digestion", "stools", Is("sticky")),
                ask("digestion", "stool_smell", Is("foul")),
            ],
        ),
        when_all(
            30,
            "Dark burning urination indicates Damp-Heat in Lower Jiao",
            &[
                ask("urination", "color", Is("dark")),
                ask("urination", "sensation", OneOf(&["burning", "painful"])),
            ],
        ),
        when_any(
            20,
            "Heavy sensation indicates Dampness",
            &[
                ask("body", "heaviness", Flag),
                ask("limbs", "heaviness", Is("severe")),
            ],
        ),
        when_all(
            20,
            "Persistent low fever with heat sensation indicates Damp-Heat",
            &[
                ask("temperature", "feeling", Is("hot")),
                ask("fever", "quality", Is("persistent_low_grade")),
            ],
        ),
        when_any(
            20,
            "Skin eruptions indicate Damp-Heat",
            &[
                ask("skin", "conditions", Has("eczema")),
                ask("skin", "conditions", Has("boils")),
            ],
        ),
        when_any(
            25,
            "Yellow foul discharge indicates Damp-Heat in Lower Jiao",
            &[
                ask("genital", "discharge", Is("yellow")),
                ask("genital", "odor", Is("foul")),
            ],
        ),
        when_all(
            15,
            "Poor appetite with bitter taste indicates Damp-Heat affecting Spleen",
            &[
                ask("digestion", "appetite", Is("poor")),
                ask("mouth", "taste", Is("bitter")),
            ],
        ),
    ],
    keywords: &[
        "uti",
        "urinary",
        "burning",
        "discharge",
        "eczema",
        "skin infection",
        "vaginal",
    ],
    keyword_evidence: "Chief complaint aligns with Damp-Heat pattern",
    description: "Combination of Dampness and Heat causing obstruction and inflammation",
    treatment_principle: "Clear Heat, resolve Dampness, promote urination",
    herbal_formula: "Long Dan Xie Gan Tang or Si Miao San",
    acupuncture_points: "SP9, SP6, LV2, BL22, BL23, CV3",
    dietary_advice: "Avoid greasy, spicy, and damp-forming foods; eat cooling bitter foods",
};

pub const LUNG_HEAT: PatternDefinition = PatternDefinition {
    name: "Lung Heat",
    category: "Heat Patterns",
    threshold: 35,
    rules: &[
        when_all(
            20,
            "Red tongue with yellow coating indicates Heat",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_color", Is("yellow")),
            ],
        ),
        when_any(
            25,
            "Severe cough indicates Lung Heat",
            &[ask("respiratory", "cough", OneOf(&["severe", "barking"]))],
        ),
        when_any(
            30,
            "Yellow thick phlegm indicates Lung Heat",
            &[
                ask("respiratory", "phlegm_color", Is("yellow")),
                ask("respiratory", "phlegm_quality", Is("thick")),
            ],
        ),
        when_any(
            25,
            "Blood in sputum indicates Lung Heat damaging vessels",
            &[ask("respiratory", "blood_in_phlegm", Flag)],
        ),
        when_any(
            20,
            "Fever indicates Heat",
            &[
                ask("fever", "severity", Is("high")),
                ask("fever", "pattern", Is("afternoon")),
            ],
        ),
        when_any(
            20,
            "Chest pain indicates Lung Heat",
            &[ask("chest", "pain", Flag), ask("breathing", "pain", Flag)],
        ),
        when_any(
            15,
            "Thirst for cold drinks indicates Heat",
            &[
                ask("thirst", "quality", Is("thirsty")),
                ask("thirst", "preference", Is("cold_drinks")),
            ],
        ),
        when_any(
            20,
            "Wheezing/dyspnea indicate Lung Heat obstructing Lung Qi",
            &[
                ask("respiratory", "wheezing", Flag),
                ask("breathing", "difficulty", Is("severe")),
            ],
        ),
        when_any(
            20,
            "Nosebleeds indicate Lung Heat forcing blood out",
            &[ask("nose", "bleeding", Flag)],
        ),
    ],
    keywords: &[
        "cough",
        "pneumonia",
        "bronchitis",
        "lung infection",
        "yellow phlegm",
        "chest pain",
    ],
    keyword_evidence: "Chief complaint aligns with Lung Heat pattern",
    description: "Heat in the Lungs causing cough with yellow phlegm and respiratory symptoms",
    treatment_principle: "Clear Lung Heat, resolve phlegm, restore descending of Lung Qi",
    herbal_formula: "Ma Xing Shi Gan Tang (Ephedra-Apricot-Gypsum-Licorice Decoction)",
    acupuncture_points: "LU5, LU10, LI4, LI11, BL13, CV17",
    dietary_advice: "Cooling moistening foods, pears, avoid hot spicy foods",
};
