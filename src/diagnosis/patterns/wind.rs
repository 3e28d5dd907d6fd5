//! Internal wind: tremor, spasm, and sudden neurological change.

use crate::diagnosis::rules::Test::{Flag, Is, OneOf};
use crate::diagnosis::rules::{ask, when_any, PatternDefinition};

pub const INTERNAL_WIND: PatternDefinition = PatternDefinition {
    name: "Internal Wind",
    category: "Wind Disorders",
    threshold: 35,
    rules: &[
        when_any(
            30,
            "Tremors indicate Internal Wind",
            &[
                ask("neurological", "tremors", Flag),
                ask("neurological", "tremors", Is("severe")),
            ],
        ),
        when_any(
            25,
            "Muscle twitching/spasms indicate Internal Wind",
            &[
                ask("muscles", "twitching", Flag),
                ask("muscles", "spasms", Flag),
            ],
        ),
        when_any(
            25,
            "Severe dizziness/vertigo indicate Internal Wind",
            &[
                ask("head", "dizziness", Is("severe")),
                ask("head", "vertigo", Flag),
            ],
        ),
        when_any(
            20,
            "Severe/moving numbness indicates Internal Wind",
            &[ask("neurological", "numbness", OneOf(&["severe", "moving"]))],
        ),
        when_any(
            35,
            "Seizures/convulsions indicate severe Internal Wind",
            &[
                ask("neurological", "seizures", Flag),
                ask("neurological", "convulsions", Flag),
            ],
        ),
        when_any(
            25,
            "Speech difficulty indicates Internal Wind",
            &[
                ask("speech", "slurred", Flag),
                ask("speech", "difficulty", Flag),
            ],
        ),
        when_any(
            30,
            "Deviation/facial asymmetry indicate Internal Wind (stroke)",
            &[
                ask("movement", "deviation", Flag),
                ask("facial", "asymmetry", Flag),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Internal Wind causing tremors, spasms, and neurological symptoms",
    treatment_principle: "Extinguish Wind, nourish Liver and Kidney Yin",
    herbal_formula: "Tian Ma Gou Teng Yin (Gastrodia-Uncaria Beverage)",
    acupuncture_points: "LV3, GB20, GB34, LI4, LI11, GV20",
    dietary_advice: "Wind-calming foods, avoid alcohol, adequate sleep",
};
