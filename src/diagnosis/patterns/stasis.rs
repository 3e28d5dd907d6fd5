//! Blood stasis: obstructed circulation with fixed, sharp pain.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_any, PatternDefinition};

pub const BLOOD_STASIS: PatternDefinition = PatternDefinition {
    name: "Blood Stasis",
    category: "Blood Disorders",
    threshold: 35,
    rules: &[
        when_any(
            30,
            "Purple/dark tongue indicates Blood stasis",
            &[obs("tongue", "body_color", OneOf(&["purple", "dark"]))],
        ),
        when_any(
            25,
            "Purple spots on tongue indicate Blood stasis",
            &[
                obs("tongue", "features", Has("purple_spots")),
                obs("tongue", "features", Has("purple_macules")),
            ],
        ),
        when_any(
            20,
            "Dark/purple complexion indicates Blood stasis",
            &[obs("complexion", "primary_color", OneOf(&["dark", "purple"]))],
        ),
        when_any(
            30,
            "Sharp/stabbing pain indicates Blood stasis",
            &[ask("pain", "quality", OneOf(&["sharp", "stabbing"]))],
        ),
        when_any(
            25,
            "Fixed pain location indicates Blood stasis",
            &[ask("pain", "location_fixed", Flag)],
        ),
        when_any(
            30,
            "Blood clots in menstruation indicate Blood stasis",
            &[
                ask("menstruation", "blood_clots", Flag),
                ask("menstruation", "blood_clots", Is("large")),
            ],
        ),
        when_any(
            25,
            "Dark menstrual blood indicates Blood stasis",
            &[ask("menstruation", "blood_color", OneOf(&["dark", "purple"]))],
        ),
        when_any(
            25,
            "Fixed masses indicate Blood stasis",
            &[
                ask("masses", "present", Flag),
                ask("masses", "location", Is("abdomen")),
            ],
        ),
        when_any(
            20,
            "Spider/varicose veins indicate Blood stasis",
            &[
                obs("skin", "spider_veins", Flag),
                obs("skin", "varicose_veins", Flag),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Obstruction of blood circulation with stagnation and pain",
    treatment_principle: "Invigorate Blood, remove stasis, stop pain",
    herbal_formula: "Xue Fu Zhu Yu Tang (Drive Out Stasis from Mansion of Blood)",
    acupuncture_points: "SP10, SP6, BL17, LV3, PC6, ST36",
    dietary_advice: "Blood-moving foods: vinegar, hawthorn berry, avoid cold",
};
