//! Exterior invasions: acute-onset pathogens at the body surface.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const WIND_COLD_EXTERIOR: PatternDefinition = PatternDefinition {
    name: "Wind-Cold Attacking the Exterior",
    category: "Exterior Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Thin white coating indicates Exterior Cold",
            &[
                obs("tongue", "coating_color", Is("white")),
                obs("tongue", "coating_thickness", Is("thin")),
            ],
        ),
        when_any(
            30,
            "Aversion to cold indicates Exterior Wind-Cold",
            &[
                ask("temperature", "feeling", Is("cold")),
                ask("temperature", "aversion_to", Is("cold")),
            ],
        ),
        when_all(
            20,
            "Mild fever with sudden onset suggests Wind-Cold",
            &[
                ask("fever", "onset", Is("sudden")),
                ask("fever", "severity", Is("mild")),
            ],
        ),
        when_all(
            25,
            "Clear nasal discharge indicates Wind-Cold",
            &[
                ask("respiratory", "symptoms", Has("runny_nose")),
                ask("respiratory", "discharge_color", Is("clear")),
            ],
        ),
        when_any(
            25,
            "Occipital headache and neck stiffness indicate Wind-Cold",
            &[
                ask("head", "pain", Is("occipital")),
                ask("neck", "stiffness", Flag),
            ],
        ),
        when_any(
            20,
            "Body aches indicate Wind-Cold invading muscles",
            &[
                ask("body", "aches", Is("severe")),
                ask("muscles", "soreness", Flag),
            ],
        ),
        when_all(
            15,
            "Cough with white phlegm indicates Wind-Cold",
            &[
                ask("respiratory", "cough", Is("mild")),
                ask("respiratory", "phlegm_color", Is("white")),
            ],
        ),
        when_any(
            20,
            "Absence of sweating indicates Wind-Cold (exterior tight)",
            &[
                ask("sweating", "presence", Is("absent")),
                ask("sweating", "amount", Is("none")),
            ],
        ),
    ],
    keywords: &[
        "cold",
        "chills",
        "runny nose",
        "nasal congestion",
        "body aches",
        "caught a cold",
    ],
    keyword_evidence: "Chief complaint aligns with Wind-Cold pattern",
    description: "Exterior pathogen of Wind-Cold invading the body surface causing acute symptoms",
    treatment_principle: "Release the Exterior, expel Wind-Cold, warm the channels",
    herbal_formula: "Gui Zhi Tang (Cinnamon Twig Decoction) or Ma Huang Tang",
    acupuncture_points: "LI4, LU7, BL12, BL13, GB20, GV14 (with moxa)",
    dietary_advice: "Warm ginger tea, avoid cold foods, keep warm, rest",
};

pub const WIND_HEAT_EXTERIOR: PatternDefinition = PatternDefinition {
    name: "Wind-Heat Attacking the Exterior",
    category: "Exterior Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red tongue with yellow coating indicates Wind-Heat",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_color", Is("yellow")),
            ],
        ),
        when_any(
            30,
            "High fever indicates Wind-Heat",
            &[
                ask("fever", "severity", Is("high")),
                ask("fever", "onset", Is("sudden")),
            ],
        ),
        when_any(
            15,
            "Slight aversion to wind indicates Exterior Wind-Heat",
            &[ask("temperature", "aversion_to", OneOf(&["wind", "mild_cold"]))],
        ),
        when_any(
            30,
            "Sore throat indicates Wind-Heat",
            &[ask("throat", "pain", Flag), ask("throat", "swollen", Flag)],
        ),
        when_any(
            25,
            "Yellow nasal discharge indicates Wind-Heat",
            &[ask("respiratory", "discharge_color", Is("yellow"))],
        ),
        when_any(
            15,
            "Thirst indicates Heat",
            &[ask("thirst", "quality", Is("thirsty"))],
        ),
        when_all(
            20,
            "Cough with yellow phlegm indicates Wind-Heat",
            &[
                ask("respiratory", "cough", Is("severe")),
                ask("respiratory", "phlegm_color", Is("yellow")),
            ],
        ),
        when_any(
            15,
            "Sweating indicates Wind-Heat (exterior loose)",
            &[
                ask("sweating", "onset", Is("early")),
                ask("sweating", "amount", Is("moderate")),
            ],
        ),
        when_any(
            20,
            "Red painful eyes indicate Wind-Heat",
            &[obs("eyes", "redness", Flag), obs("eyes", "pain", Flag)],
        ),
    ],
    keywords: &["sore throat", "fever", "hot", "flu", "yellow mucus", "red eyes"],
    keyword_evidence: "Chief complaint aligns with Wind-Heat pattern",
    description: "Exterior pathogen of Wind-Heat invading the body surface causing acute febrile symptoms",
    treatment_principle: "Release the Exterior, expel Wind-Heat, clear Heat",
    herbal_formula: "Yin Qiao San (Honeysuckle and Forsythia Powder) or Sang Ju Yin",
    acupuncture_points: "LI4, LI11, LU11, GV14, GB20, SJ5",
    dietary_advice: "Cooling foods, peppermint tea, avoid spicy/hot foods, rest",
};

pub const SUMMERHEAT: PatternDefinition = PatternDefinition {
    name: "Summerheat",
    category: "Exterior Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "High afternoon fever indicates Summerheat",
            &[
                ask("fever", "severity", Is("high")),
                ask("fever", "timing", Is("afternoon")),
            ],
        ),
        when_any(
            30,
            "Profuse sweating indicates Summerheat",
            &[ask("sweating", "amount", Is("profuse"))],
        ),
        when_any(
            25,
            "Severe exhaustion indicates Summerheat damaging Qi",
            &[
                ask("energy", "overall_energy", Is("exhausted")),
                ask("energy", "weakness", Is("severe")),
            ],
        ),
        when_any(
            20,
            "Extreme thirst indicates Summerheat",
            &[ask("thirst", "quality", Is("very_thirsty"))],
        ),
        when_any(
            15,
            "Heavy head indicates Summerheat with Dampness",
            &[
                ask("head", "pain", Is("heavy")),
                ask("head", "heaviness", Flag),
            ],
        ),
        when_any(
            20,
            "Nausea/vomiting indicate Summerheat affecting Stomach",
            &[
                ask("digestion", "nausea", Flag),
                ask("vomiting", "present", Flag),
            ],
        ),
        when_all(
            15,
            "Scanty dark urine indicates Summerheat",
            &[
                ask("urination", "amount", Is("scanty")),
                ask("urination", "color", Is("dark")),
            ],
        ),
    ],
    keywords: &[
        "heat stroke",
        "summer",
        "exhausted",
        "profuse sweat",
        "heat exhaustion",
    ],
    keyword_evidence: "Chief complaint aligns with Summerheat pattern",
    description: "Summerheat pathogen damaging Qi and fluids causing heat exhaustion",
    treatment_principle: "Clear Summerheat, generate fluids, tonify Qi",
    herbal_formula: "Qing Shu Yi Qi Tang (Clear Summerheat and Augment Qi Decoction)",
    acupuncture_points: "GV14, LI11, LI4, ST36, CV12, PC6",
    dietary_advice: "Cooling fluids, watermelon, avoid hot sun exposure, rest in cool place",
};
