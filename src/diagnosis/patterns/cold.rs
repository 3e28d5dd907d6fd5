//! Interior cold: pain and dysfunction relieved by warmth.

use crate::diagnosis::rules::Test::{Is, OneOf};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const INTERNAL_COLD: PatternDefinition = PatternDefinition {
    name: "Internal Cold",
    category: "Cold Disorders",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Pale tongue with white coating indicates Cold",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "coating_color", Is("white")),
            ],
        ),
        when_any(
            30,
            "Severe cold intolerance indicates Internal Cold",
            &[
                ask("temperature", "feeling", Is("very_cold")),
                ask("temperature", "intolerance", Is("severe")),
            ],
        ),
        when_any(
            25,
            "Icy cold extremities indicate Internal Cold",
            &[ask("temperature", "extremities", Is("icy_cold"))],
        ),
        when_all(
            25,
            "Cramping pain relieved by warmth indicates Cold",
            &[
                ask("pain", "quality", Is("cramping")),
                ask("pain", "better_with", Is("warmth")),
            ],
        ),
        when_all(
            25,
            "Abdominal pain relieved by warmth indicates Stomach Cold",
            &[
                ask("digestion", "pain", Is("abdominal")),
                ask("pain", "better_with", Is("warmth")),
            ],
        ),
        when_any(
            15,
            "Clear pale urine indicates Cold",
            &[ask("urination", "color", OneOf(&["clear", "pale"]))],
        ),
        when_any(
            20,
            "No thirst or preference for warm drinks indicates Cold",
            &[
                ask("thirst", "quality", Is("no_thirst")),
                ask("thirst", "preference", Is("warm_drinks")),
            ],
        ),
        when_any(
            20,
            "Vomiting clear fluid indicates Cold",
            &[ask("vomiting", "type", Is("clear_fluid"))],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Accumulation of internal Cold causing pain and dysfunction",
    treatment_principle: "Warm the Interior, expel Cold, stop pain",
    herbal_formula: "Li Zhong Tang (Regulate Middle Decoction) or Wu Zhu Yu Tang",
    acupuncture_points: "CV12, CV6, ST36, SP6 (with moxa)",
    dietary_advice: "Warming foods: ginger, cinnamon, avoid cold foods",
};
