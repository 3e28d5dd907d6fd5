//! Yang deficiency patterns: failure of warming and transformation.

use crate::diagnosis::rules::Test::{Flag, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const KIDNEY_YANG_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Kidney Yang Deficiency",
    category: "Kidney Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Pale swollen tongue indicates Yang deficiency",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "body_shape", Is("swollen")),
            ],
        ),
        when_any(
            20,
            "Wet tongue indicates Yang deficiency with fluid retention",
            &[obs("tongue", "moisture", OneOf(&["wet", "very_wet"]))],
        ),
        when_any(
            30,
            "Cold intolerance indicates Yang deficiency",
            &[ask("temperature", "feeling", OneOf(&["cold", "chilly"]))],
        ),
        when_any(
            25,
            "Cold extremities indicate Yang deficiency",
            &[ask(
                "temperature",
                "extremities",
                OneOf(&["cold_hands", "cold_feet"]),
            )],
        ),
        when_all(
            25,
            "Frequent clear urination indicates Kidney Yang deficiency",
            &[
                ask("urination", "frequency", Is("frequent")),
                ask("urination", "color", Is("clear")),
            ],
        ),
        when_any(
            20,
            "Nocturia indicates Kidney Yang deficiency",
            &[
                ask("urination", "nocturia", Flag),
                ask("urination", "nocturia", Is("frequent")),
            ],
        ),
        when_all(
            20,
            "Cold lower back pain indicates Kidney Yang deficiency",
            &[
                ask("back", "pain", Is("lower_back")),
                ask("temperature", "feeling", Is("cold")),
            ],
        ),
        when_any(
            25,
            "Morning diarrhea indicates Kidney Yang deficiency",
            &[ask("digestion", "stools", Is("early_morning_diarrhea"))],
        ),
        when_any(
            20,
            "Sexual dysfunction indicates Kidney Yang deficiency",
            &[
                ask("sexual", "libido", Is("low")),
                ask("sexual", "impotence", Flag),
            ],
        ),
        when_any(
            15,
            "Lower body edema indicates Yang deficiency",
            &[ask("edema", "location", OneOf(&["lower_body", "ankles"]))],
        ),
    ],
    keywords: &["cold", "back pain", "frequent urination", "impotence", "edema"],
    keyword_evidence: "Chief complaint aligns with Kidney Yang deficiency",
    description: "Deficiency of Kidney Yang affecting warming and water metabolism functions",
    treatment_principle: "Warm and tonify Kidney Yang, strengthen lower jiao",
    herbal_formula: "Jin Gui Shen Qi Wan (Golden Cabinet Kidney Qi Pill) or You Gui Wan",
    acupuncture_points: "GV4, BL23, KI3, KI7, CV4, CV6 (with moxa)",
    dietary_advice: "Warming foods, avoid cold exposure, kidney-yang tonifying foods",
};

pub const SPLEEN_YANG_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Spleen Yang Deficiency",
    category: "Spleen Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Pale swollen tongue indicates Yang deficiency",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "body_shape", Is("swollen")),
            ],
        ),
        when_all(
            20,
            "Wet tongue with thick coating indicates Spleen Yang deficiency with dampness",
            &[
                obs("tongue", "moisture", Is("wet")),
                obs("tongue", "coating_thickness", Is("thick")),
            ],
        ),
        when_any(
            30,
            "Watery stools with undigested food indicate Spleen Yang deficiency",
            &[ask(
                "digestion",
                "stools",
                OneOf(&["watery", "undigested_food"]),
            )],
        ),
        when_any(
            25,
            "Cold abdomen indicates Spleen Yang deficiency",
            &[
                ask("temperature", "abdomen", Is("cold")),
                ask("digestion", "cold_abdomen", Flag),
            ],
        ),
        when_any(
            20,
            "Cold intolerance indicates Yang deficiency",
            &[ask("temperature", "feeling", Is("cold"))],
        ),
        when_any(
            15,
            "Poor appetite indicates Spleen dysfunction",
            &[ask("digestion", "appetite", Is("poor"))],
        ),
        when_any(
            20,
            "Edema indicates Spleen Yang deficiency with fluid retention",
            &[
                ask("edema", "location", Is("lower_body")),
                ask("edema", "generalized", Flag),
            ],
        ),
        when_any(
            15,
            "No thirst or preference for warm drinks indicates Yang deficiency",
            &[
                ask("thirst", "quality", Is("no_thirst")),
                ask("thirst", "preference", Is("warm_drinks")),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Spleen Yang with cold and dampness accumulation",
    treatment_principle: "Warm and tonify Spleen Yang, transform dampness and cold",
    herbal_formula: "Fu Zi Li Zhong Wan (Aconite Center-Rectifying Pill)",
    acupuncture_points: "ST36, SP6, SP9, CV12, BL20 (with moxa)",
    dietary_advice: "Warm cooked foods, ginger, avoid cold/raw foods",
};

pub const HEART_YANG_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Heart Yang Deficiency",
    category: "Heart Patterns",
    threshold: 35,
    rules: &[
        when_any(
            25,
            "Pale or purple tongue indicates Heart Yang deficiency",
            &[obs("tongue", "body_color", OneOf(&["pale", "purple"]))],
        ),
        when_any(
            30,
            "Severe palpitations indicate Heart Yang deficiency",
            &[ask(
                "cardiovascular",
                "palpitations",
                OneOf(&["severe", "frequent"]),
            )],
        ),
        when_any(
            25,
            "Cold sensation in chest indicates Heart Yang deficiency",
            &[
                ask("temperature", "chest", Is("cold")),
                ask("temperature", "feeling", Is("cold")),
            ],
        ),
        when_any(
            25,
            "Cyanosis/purple lips indicate Heart Yang deficiency",
            &[
                obs("complexion", "cyanosis", Flag),
                obs("lips", "color", Is("purple")),
            ],
        ),
        when_any(
            20,
            "Shortness of breath indicates Heart Yang deficiency",
            &[ask("breathing", "quality", Is("shortness"))],
        ),
        when_any(
            20,
            "Edema indicates Heart Yang deficiency",
            &[ask("edema", "location", OneOf(&["generalized", "upper_body"]))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Heart Yang affecting circulation and warming",
    treatment_principle: "Warm and tonify Heart Yang, promote circulation",
    herbal_formula: "Bao Yuan Tang or Gui Zhi Gan Cao Long Gu Mu Li Tang",
    acupuncture_points: "HT7, PC6, CV17, BL15, GV14 (with moxa)",
    dietary_advice: "Warming foods, keep chest warm, avoid cold",
};
