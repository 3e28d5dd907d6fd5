//! Wind-Damp painful obstruction (Bi) of the channels and joints.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const WIND_DAMP_BI: PatternDefinition = PatternDefinition {
    name: "Wind-Damp Bi Syndrome",
    category: "Wind-Damp Patterns",
    threshold: 35,
    rules: &[
        when_all(
            20,
            "Thick white coating indicates Dampness",
            &[
                obs("tongue", "coating_color", Is("white")),
                obs("tongue", "coating_thickness", Is("thick")),
            ],
        ),
        when_any(
            15,
            "Greasy coating indicates Dampness",
            &[obs("tongue", "coating_quality", Is("greasy"))],
        ),
        when_any(
            35,
            "Migratory joint pain indicates Wind-Damp Bi",
            &[ask("joints", "pain", OneOf(&["multiple", "migratory"]))],
        ),
        when_any(
            25,
            "Joint stiffness indicates Dampness obstructing joints",
            &[
                ask("joints", "stiffness", Flag),
                ask("joints", "morning_stiffness", Flag),
            ],
        ),
        when_any(
            25,
            "Joint swelling indicates Damp Bi",
            &[ask("joints", "swelling", Flag)],
        ),
        when_any(
            20,
            "Heavy sensation indicates Dampness",
            &[
                ask("muscles", "heaviness", Flag),
                ask("limbs", "heaviness", Is("severe")),
            ],
        ),
        when_any(
            20,
            "Generalized/moving body aches indicate Wind-Damp",
            &[ask("body", "aches", OneOf(&["generalized", "moving"]))],
        ),
        when_any(
            25,
            "Pain worsening with damp weather indicates Wind-Damp Bi",
            &[
                ask("joints", "worse_with", Has("damp_weather")),
                ask("joints", "worse_with", Has("rain")),
            ],
        ),
        when_any(
            15,
            "Limited range of motion indicates Bi syndrome",
            &[ask("range_of_motion", "limited", Flag)],
        ),
    ],
    keywords: &["arthritis", "joint pain", "rheumatism", "body aches", "stiffness"],
    keyword_evidence: "Chief complaint aligns with Wind-Damp Bi syndrome",
    description: "Wind and Dampness obstructing channels causing joint pain and stiffness",
    treatment_principle: "Expel Wind, dispel Dampness, unblock channels, stop pain",
    herbal_formula: "Juan Bi Tang (Remove Painful Obstruction Decoction) or Du Huo Ji Sheng Tang",
    acupuncture_points: "Local Ah-shi points, LI4, LI11, ST36, SP9, GB34",
    dietary_advice: "Avoid damp-forming foods, warming anti-rheumatic herbs, gentle exercise",
};
