//! Eight-Principles scoring: the signed axis accumulators, the merge of
//! extractor contributions, and the final resolution into categorical
//! labels.

use crate::models::enums::{ExcessDeficiency, HotCold, InteriorExterior, YinYang};

use super::types::{EightPrinciples, CANONICAL_SECTION_COUNT};

/// Interior/exterior stays neutral until the gap exceeds this.
const INTERIOR_EXTERIOR_GAP: i32 = 15;
/// Graded axes: neutral within 10, mild within 20, full beyond.
const MILD_GAP: i32 = 10;
const FULL_GAP: i32 = 20;
/// Yin/yang fallback when the hot/cold x excess/deficiency lookup misses.
const YIN_YANG_SUM_GAP: i32 = 20;

/// The eight running axis accumulators. Extractors only ever add signed
/// deltas; nothing resets mid-evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisScores {
    pub interior: i32,
    pub exterior: i32,
    pub hot: i32,
    pub cold: i32,
    pub excess: i32,
    pub deficiency: i32,
    pub yin: i32,
    pub yang: i32,
}

impl AxisScores {
    pub fn absorb(&mut self, other: &AxisScores) {
        self.interior += other.interior;
        self.exterior += other.exterior;
        self.hot += other.hot;
        self.cold += other.cold;
        self.excess += other.excess;
        self.deficiency += other.deficiency;
        self.yin += other.yin;
        self.yang += other.yang;
    }
}

/// One extractor's local output. Extractors share nothing; the engine merges
/// contributions in a fixed order after all of them have run.
#[derive(Debug, Default)]
pub struct Contribution {
    pub scores: AxisScores,
    pub organs: Vec<&'static str>,
    pub factors: Vec<&'static str>,
    pub substances: Vec<&'static str>,
    pub manifestations: Vec<&'static str>,
    pub notes: Vec<String>,
}

/// Resolve the four axes from the accumulated scores.
pub fn resolve_axes(scores: &AxisScores) -> EightPrinciples {
    let interior_exterior = if (scores.interior - scores.exterior).abs() > INTERIOR_EXTERIOR_GAP {
        if scores.interior > scores.exterior {
            InteriorExterior::Interior
        } else {
            InteriorExterior::Exterior
        }
    } else {
        InteriorExterior::Neutral
    };

    let hc_gap = (scores.hot - scores.cold).abs();
    let hot_cold = if hc_gap > FULL_GAP {
        if scores.hot > scores.cold {
            HotCold::Hot
        } else {
            HotCold::Cold
        }
    } else if hc_gap > MILD_GAP {
        if scores.hot > scores.cold {
            HotCold::Warm
        } else {
            HotCold::Cool
        }
    } else {
        HotCold::Neutral
    };

    let ed_gap = (scores.excess - scores.deficiency).abs();
    let excess_deficiency = if ed_gap > FULL_GAP {
        if scores.excess > scores.deficiency {
            ExcessDeficiency::Excess
        } else {
            ExcessDeficiency::Deficiency
        }
    } else if ed_gap > MILD_GAP {
        if scores.excess > scores.deficiency {
            ExcessDeficiency::MildExcess
        } else {
            ExcessDeficiency::MildDeficiency
        }
    } else {
        ExcessDeficiency::Neutral
    };

    // Yin/yang is synthesized from the two axes above; the raw yin+yang sum
    // only decides when that lookup has no entry.
    let yin_yang = match (hot_cold, excess_deficiency) {
        (HotCold::Hot, ExcessDeficiency::Excess) => YinYang::YangExcess,
        (HotCold::Cold, ExcessDeficiency::Deficiency) => YinYang::YangDeficiency,
        (HotCold::Hot, ExcessDeficiency::Deficiency) => YinYang::YinDeficiency,
        (HotCold::Cold, ExcessDeficiency::Excess) => YinYang::YinExcess,
        _ => {
            let sum = scores.yin + scores.yang;
            if sum < -YIN_YANG_SUM_GAP {
                YinYang::YinDeficiency
            } else if sum > YIN_YANG_SUM_GAP {
                YinYang::YangDeficiency
            } else {
                YinYang::Neutral
            }
        }
    };

    EightPrinciples {
        interior_exterior,
        hot_cold,
        excess_deficiency,
        yin_yang,
    }
}

/// Confidence in the profile: half from how much of the canonical record is
/// filled in, half from how decisively the axes separate. Each component is
/// capped at 50.
pub fn diagnostic_confidence(scores: &AxisScores, sections_present: usize) -> u8 {
    let completeness =
        (sections_present as f64 / CANONICAL_SECTION_COUNT as f64 * 50.0).min(50.0);

    let separation = ((scores.hot - scores.cold).abs()
        + (scores.excess - scores.deficiency).abs()
        + (scores.interior - scores.exterior).abs()) as f64;
    let strength = (separation / 200.0 * 50.0).min(50.0);

    (completeness + strength).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(hot: i32, cold: i32, excess: i32, deficiency: i32) -> AxisScores {
        AxisScores {
            hot,
            cold,
            excess,
            deficiency,
            ..Default::default()
        }
    }

    /// Hot/cold transitions exactly past 10 and past 20.
    #[test]
    fn hot_cold_boundaries() {
        assert_eq!(resolve_axes(&axes(10, 0, 0, 0)).hot_cold, HotCold::Neutral);
        assert_eq!(resolve_axes(&axes(11, 0, 0, 0)).hot_cold, HotCold::Warm);
        assert_eq!(resolve_axes(&axes(20, 0, 0, 0)).hot_cold, HotCold::Warm);
        assert_eq!(resolve_axes(&axes(21, 0, 0, 0)).hot_cold, HotCold::Hot);
        assert_eq!(resolve_axes(&axes(0, 11, 0, 0)).hot_cold, HotCold::Cool);
        assert_eq!(resolve_axes(&axes(0, 21, 0, 0)).hot_cold, HotCold::Cold);
    }

    #[test]
    fn excess_deficiency_boundaries() {
        assert_eq!(
            resolve_axes(&axes(0, 0, 10, 0)).excess_deficiency,
            ExcessDeficiency::Neutral
        );
        assert_eq!(
            resolve_axes(&axes(0, 0, 11, 0)).excess_deficiency,
            ExcessDeficiency::MildExcess
        );
        assert_eq!(
            resolve_axes(&axes(0, 0, 0, 20)).excess_deficiency,
            ExcessDeficiency::MildDeficiency
        );
        assert_eq!(
            resolve_axes(&axes(0, 0, 0, 21)).excess_deficiency,
            ExcessDeficiency::Deficiency
        );
    }

    #[test]
    fn interior_exterior_boundary() {
        let depth = |interior: i32, exterior: i32| {
            let scores = AxisScores {
                interior,
                exterior,
                ..Default::default()
            };
            resolve_axes(&scores).interior_exterior
        };
        assert_eq!(depth(15, 0), InteriorExterior::Neutral);
        assert_eq!(depth(16, 0), InteriorExterior::Interior);
        assert_eq!(depth(0, 16), InteriorExterior::Exterior);
    }

    /// The four-way lookup wins over the yin+yang sum.
    #[test]
    fn yin_yang_lookup_table() {
        assert_eq!(
            resolve_axes(&axes(30, 0, 30, 0)).yin_yang,
            YinYang::YangExcess
        );
        assert_eq!(
            resolve_axes(&axes(0, 30, 0, 30)).yin_yang,
            YinYang::YangDeficiency
        );
        assert_eq!(
            resolve_axes(&axes(30, 0, 0, 30)).yin_yang,
            YinYang::YinDeficiency
        );
        assert_eq!(
            resolve_axes(&axes(0, 30, 30, 0)).yin_yang,
            YinYang::YinExcess
        );
    }

    #[test]
    fn yin_yang_sum_fallback() {
        let balance = |yin: i32, yang: i32| {
            let scores = AxisScores {
                yin,
                yang,
                ..Default::default()
            };
            resolve_axes(&scores).yin_yang
        };
        assert_eq!(balance(-21, 0), YinYang::YinDeficiency);
        assert_eq!(balance(-20, 0), YinYang::Neutral);
        assert_eq!(balance(0, 21), YinYang::YangDeficiency);
        assert_eq!(balance(0, 20), YinYang::Neutral);
    }

    #[test]
    fn confidence_components_cap_at_fifty_each() {
        // Full record, enormous separation: both halves saturate.
        let loud = axes(500, 0, 500, 0);
        assert_eq!(diagnostic_confidence(&loud, 24), 100);
        // Over-complete input cannot push past the cap either.
        assert_eq!(diagnostic_confidence(&loud, 40), 100);
        // Empty record, silent axes.
        assert_eq!(diagnostic_confidence(&AxisScores::default(), 0), 0);
    }

    #[test]
    fn confidence_half_complete_record() {
        // 12 of 24 sections and no signal separation: 25.
        assert_eq!(diagnostic_confidence(&AxisScores::default(), 12), 25);
        // Separation of 100 across the three axes adds 25 more.
        assert_eq!(diagnostic_confidence(&axes(60, 0, 40, 0), 12), 50);
    }

    #[test]
    fn absorb_sums_every_axis() {
        let mut total = axes(1, 2, 3, 4);
        total.interior = 5;
        total.yin = -7;
        let delta = AxisScores {
            interior: 10,
            exterior: 1,
            hot: 1,
            cold: 1,
            excess: 1,
            deficiency: 1,
            yin: -3,
            yang: 2,
        };
        total.absorb(&delta);
        assert_eq!(total.interior, 15);
        assert_eq!(total.hot, 2);
        assert_eq!(total.yin, -10);
        assert_eq!(total.yang, 2);
    }
}
