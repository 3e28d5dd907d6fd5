//! Qi stagnation: obstructed movement, classically the Liver.

use crate::diagnosis::rules::Test::{Flag, Is, OneOf};
use crate::diagnosis::rules::{ask, when_all, when_any, PatternDefinition};

pub const LIVER_QI_STAGNATION: PatternDefinition = PatternDefinition {
    name: "Liver Qi Stagnation",
    category: "Liver Patterns",
    threshold: 35,
    rules: &[
        when_any(
            30,
            "Irritability/anger indicate Liver Qi stagnation",
            &[ask(
                "emotions",
                "primary_emotion",
                OneOf(&["irritable", "angry"]),
            )],
        ),
        when_any(
            25,
            "Depression/mood swings indicate Liver Qi stagnation",
            &[
                ask("emotions", "primary_emotion", Is("depressed")),
                ask("emotions", "mood_swings", Flag),
            ],
        ),
        when_any(
            20,
            "High stress contributes to Liver Qi stagnation",
            &[ask("stress", "level", OneOf(&["high", "severe"]))],
        ),
        when_any(
            25,
            "Chest distension indicates Liver Qi stagnation",
            &[
                ask("chest", "distension", Flag),
                ask("chest", "oppression", Flag),
            ],
        ),
        when_any(
            20,
            "Abdominal bloating indicates Liver Qi stagnation",
            &[ask("digestion", "bloating", OneOf(&["moderate", "severe"]))],
        ),
        when_any(
            25,
            "Hypochondriac pain indicates Liver Qi stagnation",
            &[
                ask("digestion", "pain", Is("hypochondriac")),
                ask("chest", "pain", Is("sides")),
            ],
        ),
        when_any(
            20,
            "Frequent sighing indicates Liver Qi stagnation",
            &[ask("breathing", "sighing", Is("frequent"))],
        ),
        when_all(
            15,
            "Difficulty falling asleep indicates Liver Qi stagnation",
            &[
                ask("sleep", "quality", Is("insomnia")),
                ask("sleep", "difficulty", Is("falling_asleep")),
            ],
        ),
        when_any(
            20,
            "Severe PMS/breast tenderness indicate Liver Qi stagnation",
            &[
                ask("menstruation", "pms", Is("severe")),
                ask("menstruation", "breast_tenderness", Flag),
            ],
        ),
        when_any(
            15,
            "Irregular menstruation indicates Liver Qi stagnation",
            &[ask("menstruation", "cycle", Is("irregular"))],
        ),
    ],
    keywords: &[
        "stress",
        "anxiety",
        "irritable",
        "angry",
        "insomnia",
        "depression",
        "mood",
    ],
    keyword_evidence: "Chief complaint aligns with Liver Qi stagnation",
    description: "Stagnation of Liver Qi causing emotional frustration and physical tension",
    treatment_principle: "Soothe Liver, regulate Qi flow, calm spirit",
    herbal_formula: "Xiao Yao San (Free and Easy Wanderer) or Chai Hu Shu Gan San",
    acupuncture_points: "LV3, LV14, GB34, PC6, HT7, LI4",
    dietary_advice: "Qi-moving foods, stress reduction, regular exercise",
};
