//! Combined patterns spanning two organ systems.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const LIVER_SPLEEN_DISHARMONY: PatternDefinition = PatternDefinition {
    name: "Liver-Spleen Disharmony",
    category: "Combined Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Pale tongue with red sides indicates Liver-Spleen disharmony",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "features", Has("red_sides")),
            ],
        ),
        when_any(
            25,
            "Emotional disturbance indicates Liver Qi stagnation",
            &[
                ask("emotions", "primary_emotion", Is("irritable")),
                ask("emotions", "mood", Is("depressed")),
            ],
        ),
        when_any(
            30,
            "Loose/alternating stools indicate Spleen deficiency with Liver overacting",
            &[
                ask("digestion", "stools", Is("loose")),
                ask("digestion", "alternating", Flag),
            ],
        ),
        when_any(
            20,
            "Hypochondriac distention indicates Liver Qi stagnation",
            &[
                ask("hypochondrium", "distention", Flag),
                ask("hypochondrium", "pain", Flag),
            ],
        ),
        when_any(
            25,
            "Abdominal bloating indicates Spleen deficiency",
            &[ask("digestion", "bloating", OneOf(&["moderate", "severe"]))],
        ),
        when_any(
            15,
            "Fatigue indicates Spleen Qi deficiency",
            &[ask("energy", "overall_energy", Is("low"))],
        ),
        when_any(
            15,
            "Poor appetite indicates Spleen deficiency",
            &[ask("digestion", "appetite", Is("poor"))],
        ),
        when_any(
            20,
            "Stress worsening symptoms indicates Liver overacting on Spleen",
            &[ask("symptoms_relationship", "stress_worsens", Flag)],
        ),
    ],
    keywords: &[
        "ibs",
        "irritable bowel",
        "stress digestion",
        "alternating",
        "bloating irritable",
    ],
    keyword_evidence: "Chief complaint aligns with Liver-Spleen disharmony",
    description: "Liver Qi stagnation overacting on Spleen causing digestive and emotional symptoms",
    treatment_principle: "Soothe Liver, strengthen Spleen, harmonize Middle Jiao",
    herbal_formula: "Xiao Yao San (Free and Easy Wanderer) or Tong Xie Yao Fang",
    acupuncture_points: "LV3, LV13, SP6, ST36, CV12, PC6",
    dietary_advice: "Regular meals, avoid stress while eating, warm cooked foods",
};

pub const HEART_KIDNEY_NOT_COMMUNICATING: PatternDefinition = PatternDefinition {
    name: "Heart-Kidney Not Communicating",
    category: "Combined Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red peeled tongue indicates Yin deficiency with Heart-Kidney disharmony",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_thickness", Is("none")),
            ],
        ),
        when_any(
            30,
            "Severe insomnia indicates Heart-Kidney not communicating",
            &[
                ask("sleep", "insomnia", Is("severe")),
                ask("sleep", "dream_disturbed", Flag),
            ],
        ),
        when_any(
            25,
            "Anxiety/restlessness indicate Heart Fire with Kidney Yin deficiency",
            &[
                ask("emotions", "anxiety", Is("severe")),
                ask("emotions", "restlessness", Is("severe")),
            ],
        ),
        when_any(
            25,
            "Palpitations indicate Heart-Kidney disharmony",
            &[ask("heart", "palpitations", OneOf(&["severe", "night"]))],
        ),
        when_any(
            20,
            "Night sweats indicate Yin deficiency",
            &[
                ask("night_sweats", "presence", Flag),
                ask("night_sweats", "severity", Is("severe")),
            ],
        ),
        when_any(
            20,
            "Lower back weakness indicates Kidney deficiency",
            &[
                ask("lower_back", "pain", Flag),
                ask("lower_back", "weakness", Flag),
            ],
        ),
        when_any(
            15,
            "Poor memory indicates Heart-Kidney not communicating",
            &[
                ask("memory", "poor", Flag),
                ask("concentration", "difficulty", Flag),
            ],
        ),
        when_any(
            15,
            "High-pitched tinnitus indicates Kidney Yin deficiency",
            &[ask("tinnitus", "quality", Is("high_pitched"))],
        ),
    ],
    keywords: &["insomnia", "anxiety", "palpitations", "restless", "cant sleep"],
    keyword_evidence: "Chief complaint aligns with Heart-Kidney not communicating",
    description: "Kidney Yin failing to nourish Heart, Heart Fire not warming Kidneys",
    treatment_principle: "Nourish Kidney Yin, clear Heart Fire, promote Heart-Kidney communication",
    herbal_formula: "Liu Wei Di Huang Wan with Huang Lian or Tian Wang Bu Xin Dan",
    acupuncture_points: "HT7, KI3, KI6, BL15, BL23, CV4, GV20",
    dietary_advice: "Yin-nourishing foods, reduce stress, adequate sleep",
};

pub const LUNG_KIDNEY_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Lung-Kidney Yin Deficiency",
    category: "Combined Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red peeled tongue indicates Yin deficiency",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_thickness", Is("none")),
            ],
        ),
        when_any(
            30,
            "Chronic dry cough indicates Lung-Kidney Yin deficiency",
            &[ask("respiratory", "cough", OneOf(&["chronic", "dry"]))],
        ),
        when_any(
            20,
            "Scanty sticky phlegm indicates Yin deficiency",
            &[
                ask("respiratory", "phlegm_amount", Is("scanty")),
                ask("respiratory", "phlegm_quality", Is("sticky")),
            ],
        ),
        when_any(
            25,
            "Blood-tinged sputum indicates Lung Yin deficiency with Heat",
            &[ask("respiratory", "blood_in_phlegm", Flag)],
        ),
        when_any(
            20,
            "Lower back soreness indicates Kidney deficiency",
            &[
                ask("lower_back", "soreness", Flag),
                ask("lower_back", "weakness", Flag),
            ],
        ),
        when_any(
            20,
            "Night sweats indicate Yin deficiency",
            &[ask("night_sweats", "presence", Flag)],
        ),
        when_any(
            20,
            "Afternoon tidal fever indicates Yin deficiency",
            &[ask("fever", "quality", OneOf(&["afternoon_low_grade", "tidal"]))],
        ),
        when_any(
            15,
            "Hoarse voice indicates Lung Yin deficiency",
            &[
                ask("voice", "hoarseness", Flag),
                ask("voice", "quality", Is("weak")),
            ],
        ),
    ],
    keywords: &["chronic cough", "dry cough", "tuberculosis", "chronic bronchitis"],
    keyword_evidence: "Chief complaint aligns with Lung-Kidney Yin deficiency",
    description: "Kidney Yin failing to nourish Lung Yin causing chronic dry cough",
    treatment_principle: "Nourish Lung and Kidney Yin, stop cough, clear deficiency Heat",
    herbal_formula: "Bai He Gu Jin Tang (Lily Bulb to Preserve Metal Decoction)",
    acupuncture_points: "LU9, KI3, KI6, BL13, BL23, CV17",
    dietary_advice: "Yin-nourishing moistening foods, pears, honey, adequate rest",
};

pub const LIVER_KIDNEY_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Liver-Kidney Yin Deficiency",
    category: "Combined Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red tongue with thin coating indicates Yin deficiency",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_thickness", Is("thin")),
            ],
        ),
        when_any(
            25,
            "Dizziness/vertigo indicate Liver-Kidney Yin deficiency",
            &[
                ask("head", "dizziness", Is("severe")),
                ask("head", "vertigo", Flag),
            ],
        ),
        when_any(
            25,
            "Dry eyes/blurred vision indicate Liver-Kidney Yin deficiency",
            &[
                obs("eyes", "dryness", Flag),
                ask("vision", "quality", Is("blurred")),
            ],
        ),
        when_any(
            25,
            "Lower back/knee weakness indicates Kidney Yin deficiency",
            &[
                ask("lower_back", "soreness", Flag),
                ask("knees", "weakness", Flag),
            ],
        ),
        when_any(
            20,
            "High-pitched tinnitus indicates Kidney Yin deficiency",
            &[ask("tinnitus", "quality", Is("high_pitched"))],
        ),
        when_any(
            20,
            "Night sweats indicate Yin deficiency",
            &[ask("night_sweats", "presence", Flag)],
        ),
        when_any(
            20,
            "Muscle twitching/numbness indicate Liver Blood-Yin deficiency",
            &[
                ask("muscles", "twitching", Flag),
                ask("numbness", "location", Is("limbs")),
            ],
        ),
        when_any(
            15,
            "Reproductive symptoms indicate Liver-Kidney Yin deficiency",
            &[
                ask("men", "nocturnal_emission", Flag),
                ask("women", "menstrual_flow", Is("scanty")),
            ],
        ),
    ],
    keywords: &[
        "dizziness",
        "vertigo",
        "tinnitus",
        "dry eyes",
        "blurred vision",
        "weak knees",
    ],
    keyword_evidence: "Chief complaint aligns with Liver-Kidney Yin deficiency",
    description: "Deficiency of Liver and Kidney Yin causing dizziness, dry eyes, and weakness",
    treatment_principle: "Nourish Liver and Kidney Yin, benefit Essence",
    herbal_formula: "Qi Ju Di Huang Wan (Lycium-Chrysanthemum-Rehmannia Pill)",
    acupuncture_points: "LV3, KI3, KI6, BL18, BL23, GB20",
    dietary_advice: "Yin-nourishing foods, black sesame, goji berries, adequate rest",
};

pub const SPLEEN_KIDNEY_YANG_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Spleen-Kidney Yang Deficiency",
    category: "Combined Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Pale swollen tongue indicates Yang deficiency",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "body_shape", Is("swollen")),
            ],
        ),
        when_any(
            30,
            "Loose early morning stools (cock-crow diarrhea) indicate Spleen-Kidney Yang deficiency",
            &[
                ask("digestion", "stools", Is("loose")),
                ask("digestion", "timing", Is("early_morning")),
            ],
        ),
        when_any(
            25,
            "Cold sensation/limbs indicate Yang deficiency",
            &[
                ask("temperature", "feeling", Is("cold")),
                ask("temperature", "cold_limbs", Flag),
            ],
        ),
        when_any(
            20,
            "Severe exhaustion indicates Spleen-Kidney Yang deficiency",
            &[ask("energy", "overall_energy", Is("exhausted"))],
        ),
        when_all(
            25,
            "Cold lower back pain indicates Kidney Yang deficiency",
            &[
                ask("lower_back", "pain", Flag),
                ask("lower_back", "coldness", Flag),
            ],
        ),
        when_any(
            25,
            "Undigested food in stools indicates Spleen-Kidney Yang deficiency",
            &[ask("digestion", "undigested_food", Flag)],
        ),
        when_all(
            20,
            "Frequent clear urination indicates Kidney Yang deficiency",
            &[
                ask("urination", "frequency", Is("frequent")),
                ask("urination", "color", Is("clear")),
            ],
        ),
        when_any(
            20,
            "Edema indicates Spleen-Kidney Yang deficiency affecting water metabolism",
            &[ask("edema", "location", OneOf(&["legs", "generalized"]))],
        ),
    ],
    keywords: &[
        "chronic diarrhea",
        "morning diarrhea",
        "always cold",
        "edema",
        "exhausted",
    ],
    keyword_evidence: "Chief complaint aligns with Spleen-Kidney Yang deficiency",
    description: "Combined Yang deficiency of Spleen and Kidney affecting digestion and water metabolism",
    treatment_principle: "Warm and tonify Spleen and Kidney Yang, consolidate",
    herbal_formula: "Si Shen Wan (Four-Miracle Pill)",
    acupuncture_points: "BL20, BL21, BL23, GV4, CV4, CV6, ST36 (with moxa)",
    dietary_advice: "Warming foods, avoid cold/raw foods, ginger, cinnamon",
};
