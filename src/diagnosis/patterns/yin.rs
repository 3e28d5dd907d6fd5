//! Yin deficiency patterns: depleted cooling and moistening with empty heat.

use crate::diagnosis::rules::Test::{Flag, Has, Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const KIDNEY_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Kidney Yin Deficiency",
    category: "Kidney Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Red tongue with little/no coating indicates Yin deficiency",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_thickness", OneOf(&["none", "thin"])),
            ],
        ),
        when_any(
            20,
            "Dry tongue indicates Yin deficiency",
            &[obs("tongue", "moisture", Is("dry"))],
        ),
        when_any(
            25,
            "Night sweats indicate Yin deficiency",
            &[ask("sweating", "type", Is("night_sweats"))],
        ),
        when_any(
            25,
            "Afternoon/low-grade fever indicates Yin deficiency",
            &[ask("temperature", "fever", OneOf(&["afternoon", "low_grade"]))],
        ),
        when_any(
            25,
            "Five-palm heat indicates Yin deficiency",
            &[ask("temperature", "five_palm_heat", Flag)],
        ),
        when_all(
            20,
            "Lower back soreness indicates Kidney Yin deficiency",
            &[
                ask("back", "pain", Is("lower_back")),
                ask("back", "quality", Is("soreness")),
            ],
        ),
        when_any(
            15,
            "Tinnitus/hearing loss indicates Kidney Yin deficiency",
            &[
                ask("hearing", "tinnitus", Flag),
                ask("hearing", "quality", Is("declining")),
            ],
        ),
        when_any(
            20,
            "Dry mouth at night indicates Yin deficiency",
            &[
                ask("mouth", "dryness", Is("night")),
                ask("thirst", "quality", Is("thirsty_night")),
            ],
        ),
        when_any(
            15,
            "Insomnia indicates Yin deficiency with empty heat",
            &[
                ask("sleep", "quality", Is("insomnia")),
                ask("sleep", "difficulty", Is("staying_asleep")),
            ],
        ),
        when_any(
            20,
            "Sexual dysfunction indicates Kidney Yin deficiency",
            &[
                ask("sexual", "nocturnal_emission", Flag),
                ask("sexual", "premature_ejaculation", Flag),
            ],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Kidney Yin with deficiency heat signs",
    treatment_principle: "Nourish Kidney Yin, clear deficiency heat",
    herbal_formula: "Liu Wei Di Huang Wan (Six Ingredient Pill) or Zhi Bai Di Huang Wan",
    acupuncture_points: "KI3, KI6, BL23, SP6, KI10",
    dietary_advice: "Yin-nourishing foods, adequate sleep, avoid late nights",
};

pub const LUNG_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Lung Yin Deficiency",
    category: "Lung Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red tongue without coating indicates Lung Yin deficiency",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "coating_thickness", Is("none")),
            ],
        ),
        when_any(
            30,
            "Dry cough indicates Lung Yin deficiency",
            &[ask("respiratory", "cough", OneOf(&["dry", "persistent"]))],
        ),
        when_any(
            20,
            "Scanty sticky sputum indicates Lung Yin deficiency",
            &[ask("respiratory", "sputum", OneOf(&["scanty", "sticky"]))],
        ),
        when_any(
            25,
            "Blood in sputum indicates Lung Yin deficiency with heat",
            &[ask("respiratory", "blood_in_sputum", Flag)],
        ),
        when_any(
            20,
            "Dry throat/mouth indicates Yin deficiency",
            &[
                ask("throat", "dryness", Flag),
                ask("mouth", "dryness", Is("constant")),
            ],
        ),
        when_any(
            15,
            "Hoarse voice indicates Lung Yin deficiency",
            &[ask("voice", "quality", Is("hoarse"))],
        ),
        when_any(
            20,
            "Night sweats indicate Yin deficiency",
            &[ask("sweating", "type", Is("night_sweats"))],
        ),
        when_any(
            20,
            "Afternoon fever indicates Yin deficiency",
            &[ask("temperature", "fever", Is("afternoon"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Lung Yin with dry heat signs",
    treatment_principle: "Nourish Lung Yin, moisten dryness, clear heat",
    herbal_formula: "Bai He Gu Jin Tang (Lily Bulb Metal-Securing Decoction)",
    acupuncture_points: "LU9, LU10, LU5, KI6, BL13",
    dietary_advice: "Lung-moistening foods, adequate hydration",
};

pub const LIVER_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Liver Yin Deficiency",
    category: "Liver Patterns",
    threshold: 35,
    rules: &[
        when_any(
            20,
            "Red tongue indicates Yin deficiency with heat",
            &[obs("tongue", "body_color", Is("red"))],
        ),
        when_any(
            25,
            "Dry eyes indicate Liver Yin deficiency",
            &[
                obs("eyes", "dryness", Flag),
                obs("eyes", "quality", Is("dry")),
            ],
        ),
        when_any(
            25,
            "Blurred vision/floaters indicate Liver Yin deficiency",
            &[
                ask("vision", "quality", Is("blurred")),
                ask("vision", "floaters", Flag),
            ],
        ),
        when_any(
            20,
            "Vertex headache/dizziness indicates Liver Yin deficiency",
            &[
                ask("head", "pain", Is("vertex")),
                ask("head", "dizziness", Flag),
            ],
        ),
        when_any(
            15,
            "Tinnitus indicates Liver-Kidney Yin deficiency",
            &[ask("hearing", "tinnitus", Flag)],
        ),
        when_any(
            20,
            "Tremors/numbness indicate Liver Yin deficiency with internal wind",
            &[
                ask("neurological", "tremors", Flag),
                ask("neurological", "numbness", Flag),
            ],
        ),
        when_any(
            15,
            "Irritability indicates Liver Yin deficiency with heat",
            &[ask("emotions", "primary_emotion", Is("irritable"))],
        ),
        when_any(
            15,
            "Scanty menstruation indicates Liver Blood/Yin deficiency",
            &[ask("menstruation", "amount", Is("scanty"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Liver Yin with internal wind and heat signs",
    treatment_principle: "Nourish Liver Yin, subdue wind, clear heat",
    herbal_formula: "Qi Ju Di Huang Wan (Lycium-Chrysanthemum-Rehmannia Pill)",
    acupuncture_points: "LV3, LV8, GB20, KI3, SP6, BL18",
    dietary_advice: "Eye-nourishing foods, rest eyes frequently",
};

pub const HEART_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Heart Yin Deficiency",
    category: "Heart Patterns",
    threshold: 35,
    rules: &[
        when_all(
            30,
            "Red tongue with red tip indicates Heart Yin deficiency with fire",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "features", Has("red_tip")),
            ],
        ),
        when_any(
            20,
            "Center cracks indicate Heart Yin deficiency",
            &[obs("tongue", "features", Has("cracks_center"))],
        ),
        when_any(
            25,
            "Palpitations indicate Heart Yin deficiency",
            &[ask("cardiovascular", "palpitations", Is("frequent"))],
        ),
        when_any(
            25,
            "Insomnia indicates Heart Yin deficiency",
            &[
                ask("sleep", "quality", Is("insomnia")),
                ask("sleep", "difficulty", Is("falling_asleep")),
            ],
        ),
        when_any(
            20,
            "Excessive dreams indicate Heart Yin deficiency",
            &[ask("sleep", "dreams", OneOf(&["excessive", "disturbing"]))],
        ),
        when_any(
            20,
            "Anxiety/restlessness indicate Heart Yin deficiency",
            &[
                ask("emotions", "primary_emotion", Is("anxious")),
                ask("emotions", "restlessness", Flag),
            ],
        ),
        when_any(
            15,
            "Poor memory indicates Heart Yin deficiency",
            &[ask("memory", "quality", Is("poor"))],
        ),
        when_any(
            20,
            "Night sweats indicate Yin deficiency",
            &[ask("sweating", "type", Is("night_sweats"))],
        ),
        when_any(
            15,
            "Dry mouth at night indicates Yin deficiency",
            &[ask("mouth", "dryness", Is("night"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Heart Yin affecting mental functions with empty heat",
    treatment_principle: "Nourish Heart Yin, calm the mind, clear heat",
    herbal_formula: "Tian Wang Bu Xin Dan (Emperor of Heaven Heart-Supplementing Elixir)",
    acupuncture_points: "HT7, HT6, PC7, KI3, SP6, BL15",
    dietary_advice: "Heart-nourishing foods, adequate sleep, emotional calm",
};

pub const STOMACH_YIN_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Stomach Yin Deficiency",
    category: "Stomach Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Red tongue with center cracks indicates Stomach Yin deficiency",
            &[
                obs("tongue", "body_color", Is("red")),
                obs("tongue", "features", Has("cracks_center")),
            ],
        ),
        when_any(
            25,
            "No coating indicates severe Stomach Yin deficiency",
            &[obs("tongue", "coating_thickness", OneOf(&["none", "peeled"]))],
        ),
        when_all(
            30,
            "Hunger without desire to eat indicates Stomach Yin deficiency",
            &[
                ask("digestion", "appetite", Is("no_appetite")),
                ask("digestion", "hunger", Is("hungry_but_no_desire")),
            ],
        ),
        when_any(
            25,
            "Dry mouth/throat indicate Stomach Yin deficiency",
            &[
                ask("mouth", "dryness", Is("constant")),
                ask("throat", "dryness", Flag),
            ],
        ),
        when_all(
            25,
            "Thirst with desire for small sips indicates Yin deficiency",
            &[
                ask("thirst", "quality", Is("thirsty")),
                ask("thirst", "preference", Is("small_sips")),
            ],
        ),
        when_any(
            20,
            "Dry stools indicate Stomach Yin deficiency",
            &[ask("digestion", "stools", OneOf(&["dry", "constipated"]))],
        ),
        when_all(
            15,
            "Epigastric discomfort indicates Stomach Yin deficiency",
            &[
                ask("digestion", "pain", Is("epigastric")),
                ask("digestion", "pain_quality", Is("dull")),
            ],
        ),
        when_any(
            15,
            "Afternoon fever indicates Yin deficiency",
            &[ask("temperature", "fever", Is("afternoon"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Stomach Yin with dry heat signs",
    treatment_principle: "Nourish Stomach Yin, generate fluids, clear heat",
    herbal_formula: "Yi Wei Tang (Benefit the Stomach Decoction)",
    acupuncture_points: "ST36, CV12, SP6, KI3, ST44",
    dietary_advice: "Stomach-nourishing foods, small frequent meals",
};
