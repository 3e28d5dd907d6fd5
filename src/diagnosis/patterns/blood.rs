//! Blood deficiency patterns: undernourished Heart and Liver.

use crate::diagnosis::rules::Test::{Flag, Is};
use crate::diagnosis::rules::{ask, obs, when_all, when_any, PatternDefinition};

pub const HEART_BLOOD_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Heart Blood Deficiency",
    category: "Heart Patterns",
    threshold: 35,
    rules: &[
        when_all(
            25,
            "Pale thin tongue indicates Blood deficiency",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "body_shape", Is("thin")),
            ],
        ),
        when_any(
            20,
            "Pale complexion/lips indicate Blood deficiency",
            &[
                obs("complexion", "primary_color", Is("pale")),
                obs("lips", "color", Is("pale")),
            ],
        ),
        when_any(
            30,
            "Palpitations indicate Heart Blood deficiency",
            &[ask("cardiovascular", "palpitations", Is("frequent"))],
        ),
        when_any(
            25,
            "Insomnia/excessive dreams indicate Heart Blood deficiency",
            &[
                ask("sleep", "quality", Is("insomnia")),
                ask("sleep", "dreams", Is("excessive")),
            ],
        ),
        when_any(
            20,
            "Poor memory indicates Heart Blood deficiency",
            &[ask("memory", "quality", Is("poor"))],
        ),
        when_any(
            20,
            "Anxiety/easily startled indicate Heart Blood deficiency",
            &[
                ask("emotions", "primary_emotion", Is("anxious")),
                ask("emotions", "easily_startled", Flag),
            ],
        ),
        when_any(
            15,
            "Dizziness indicates Blood deficiency",
            &[ask("head", "dizziness", Flag)],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Heart Blood affecting mental functions and sleep",
    treatment_principle: "Nourish Heart Blood, calm the mind",
    herbal_formula: "Gui Pi Tang (Restore the Spleen Decoction)",
    acupuncture_points: "HT7, PC6, SP6, BL15, BL17, CV4",
    dietary_advice: "Blood-nourishing foods: dates, spinach, liver",
};

pub const LIVER_BLOOD_DEFICIENCY: PatternDefinition = PatternDefinition {
    name: "Liver Blood Deficiency",
    category: "Liver Patterns",
    threshold: 35,
    rules: &[
        when_all(
            20,
            "Pale thin tongue indicates Blood deficiency",
            &[
                obs("tongue", "body_color", Is("pale")),
                obs("tongue", "body_shape", Is("thin")),
            ],
        ),
        when_any(
            25,
            "Blurred vision/dry eyes indicate Liver Blood deficiency",
            &[
                ask("vision", "quality", Is("blurred")),
                obs("eyes", "dryness", Flag),
            ],
        ),
        when_any(
            20,
            "Floaters/night blindness indicate Liver Blood deficiency",
            &[
                ask("vision", "floaters", Flag),
                ask("vision", "night_blindness", Flag),
            ],
        ),
        when_any(
            25,
            "Numbness/tingling indicate Liver Blood deficiency",
            &[
                ask("neurological", "numbness", Flag),
                ask("neurological", "tingling", Flag),
            ],
        ),
        when_any(
            20,
            "Muscle cramps/twitching indicate Liver Blood deficiency",
            &[
                ask("muscles", "cramps", Flag),
                ask("muscles", "twitching", Flag),
            ],
        ),
        when_any(
            25,
            "Scanty/delayed menstruation indicate Liver Blood deficiency",
            &[
                ask("menstruation", "amount", Is("scanty")),
                ask("menstruation", "delayed", Flag),
            ],
        ),
        when_any(
            20,
            "Pale menstrual blood indicates Blood deficiency",
            &[ask("menstruation", "blood_color", Is("pale"))],
        ),
        when_any(
            15,
            "Brittle/pale nails indicate Liver Blood deficiency",
            &[
                obs("nails", "quality", Is("brittle")),
                obs("nails", "color", Is("pale")),
            ],
        ),
        when_any(
            15,
            "Dizziness indicates Blood deficiency",
            &[ask("head", "dizziness", Flag)],
        ),
    ],
    keywords: &[],
    keyword_evidence: "",
    description: "Deficiency of Liver Blood affecting eyes, tendons, and menstruation",
    treatment_principle: "Nourish Liver Blood, benefit eyes and tendons",
    herbal_formula: "Si Wu Tang (Four Substance Decoction) or Bu Gan Tang",
    acupuncture_points: "LV3, LV8, SP6, BL17, BL18, GB20",
    dietary_advice: "Blood-nourishing foods, rest eyes frequently",
};
