//! Scoring rules.
//!
//! Two tables drive the recommender:
//! - per face shape, an ordered list of [`ScoreCondition`]s (one positive
//!   rule followed by penalties)
//! - a face-shape-independent list of [`FeatureRule`]s that apply only when
//!   the analysis carries a matching feature
//!
//! Score deltas are empirical and tuned together with the inclusion
//! threshold in [`ScoringConfig`](crate::config::ScoringConfig).

use crate::analysis::{FaceAnalysis, FaceShape};
use crate::features::FaceFeature;
use crate::hair::{
    HairBangs, HairLayers, HairLength, HairStructure, HairTexture, HairVolume, HairstyleAttributes,
};

pub type AttributePredicate = fn(&HairstyleAttributes) -> bool;
pub type AnalysisPredicate = fn(&FaceAnalysis) -> bool;

/// One scoring rule: if `check` holds for a style, add `score_delta` and
/// record `reason`.
#[derive(Clone, Copy)]
pub struct ScoreCondition {
    pub score_delta: f32,
    pub reason: &'static str,
    pub check: AttributePredicate,
}

impl std::fmt::Debug for ScoreCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCondition")
            .field("score_delta", &self.score_delta)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl ScoreCondition {
    pub fn matches(&self, attributes: &HairstyleAttributes) -> bool {
        (self.check)(attributes)
    }
}

/// A rule gated on the analysis as well as the style.
#[derive(Clone, Copy)]
pub struct FeatureRule {
    pub applies: AnalysisPredicate,
    pub condition: ScoreCondition,
}

impl std::fmt::Debug for FeatureRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureRule")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

impl FeatureRule {
    pub fn matches(&self, analysis: &FaceAnalysis, attributes: &HairstyleAttributes) -> bool {
        (self.applies)(analysis) && self.condition.matches(attributes)
    }
}

/// Rules for `shape`, in evaluation order. `Unknown` has none.
pub fn face_shape_rules(shape: FaceShape) -> &'static [ScoreCondition] {
    match shape {
        FaceShape::Oval => &OVAL_RULES,
        FaceShape::Round => &ROUND_RULES,
        FaceShape::Square => &SQUARE_RULES,
        FaceShape::Heart => &HEART_RULES,
        FaceShape::Rectangle => &RECTANGLE_RULES,
        FaceShape::Diamond => &DIAMOND_RULES,
        FaceShape::Triangle => &TRIANGLE_RULES,
        FaceShape::Unknown => &[],
    }
}

pub fn feature_rules() -> &'static [FeatureRule] {
    &FEATURE_RULES
}

static OVAL_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.5,
        reason: "Your oval face is very versatile and suits almost any style.",
        check: any_style,
    },
    ScoreCondition {
        score_delta: -0.25,
        reason: "Even so, styles with very drastic lines can upset the natural harmony of your face.",
        check: drastic_lines,
    },
];

static ROUND_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.6,
        reason: "Long styles with volume on top or layers visually lengthen a round face.",
        check: long_with_lift,
    },
    ScoreCondition {
        score_delta: -0.4,
        reason: "Chin-length bobs without volume on top can accentuate roundness.",
        check: flat_chin_bob,
    },
];

static SQUARE_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.6,
        reason: "Wavy or curly texture and layers soften the strong angles of a square jaw.",
        check: soft_layered_texture,
    },
    ScoreCondition {
        score_delta: -0.5,
        reason: "Very straight jaw-length bobs can harden square features.",
        check: straight_chin_bob,
    },
];

static HEART_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.6,
        reason: "Volume toward the bottom and soft bangs balance a wide forehead.",
        check: lower_balance,
    },
    ScoreCondition {
        score_delta: -0.4,
        reason: "Short styles with a lot of volume on top can unbalance a heart-shaped face.",
        check: short_top_heavy,
    },
];

static RECTANGLE_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.6,
        reason: "Bangs and medium length add width and shorten a long face.",
        check: mid_length_with_bangs,
    },
    ScoreCondition {
        score_delta: -0.5,
        reason: "Very long, straight styles can accentuate the length of the face.",
        check: long_flat_straight,
    },
];

static DIAMOND_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.65,
        reason: "This style adds volume at the chin or softens the forehead, balancing wide cheekbones.",
        check: chin_or_forehead_balance,
    },
    ScoreCondition {
        score_delta: -0.5,
        reason: "Volume at ear level can widen the cheekbones too much.",
        check: ear_level_volume,
    },
];

static TRIANGLE_RULES: [ScoreCondition; 2] = [
    ScoreCondition {
        score_delta: 0.55,
        reason: "Volume on top and bangs help balance a wide jaw.",
        check: top_volume_with_bangs,
    },
    ScoreCondition {
        score_delta: -0.45,
        reason: "A style with a lot of volume at the jaw can widen it even more.",
        check: heavy_unlayered_chin,
    },
];

static FEATURE_RULES: [FeatureRule; 2] = [
    FeatureRule {
        applies: prominent_forehead,
        condition: ScoreCondition {
            score_delta: 0.30,
            reason: "Bangs help balance a prominent forehead.",
            check: real_fringe,
        },
    },
    FeatureRule {
        applies: wide_jaw,
        condition: ScoreCondition {
            score_delta: 0.25,
            reason: "Layers or wavy texture soften a wide jaw.",
            check: layered_or_textured,
        },
    },
];

// Analysis predicates

fn prominent_forehead(a: &FaceAnalysis) -> bool {
    a.has_feature(FaceFeature::HighForehead) || a.has_feature(FaceFeature::LongUpperThird)
}

fn wide_jaw(a: &FaceAnalysis) -> bool {
    a.has_feature(FaceFeature::WideJaw)
}

// Style predicates

fn any_style(_: &HairstyleAttributes) -> bool {
    true
}

fn drastic_lines(s: &HairstyleAttributes) -> bool {
    s.structure == HairStructure::Mohawk
        || (s.bangs == HairBangs::FullBangs && s.length <= HairLength::ChinLength)
}

fn long_with_lift(s: &HairstyleAttributes) -> bool {
    s.length >= HairLength::ShoulderLength
        && (s.volume == HairVolume::High || s.layers >= HairLayers::Medium)
}

fn flat_chin_bob(s: &HairstyleAttributes) -> bool {
    s.length == HairLength::ChinLength
        && s.structure == HairStructure::Bob
        && s.volume != HairVolume::High
}

fn soft_layered_texture(s: &HairstyleAttributes) -> bool {
    s.texture >= HairTexture::Wavy
        && s.layers >= HairLayers::Medium
        && s.length >= HairLength::ChinLength
}

fn straight_chin_bob(s: &HairstyleAttributes) -> bool {
    s.structure == HairStructure::Bob
        && s.length == HairLength::ChinLength
        && s.texture == HairTexture::Straight
}

fn lower_balance(s: &HairstyleAttributes) -> bool {
    matches!(s.bangs, HairBangs::SideSwept | HairBangs::CurtainBangs)
        || (s.length >= HairLength::ChinLength && s.volume > HairVolume::Low)
}

fn short_top_heavy(s: &HairstyleAttributes) -> bool {
    s.volume == HairVolume::High && s.length < HairLength::ChinLength && !s.has_bangs()
}

fn mid_length_with_bangs(s: &HairstyleAttributes) -> bool {
    s.length >= HairLength::ChinLength && s.length <= HairLength::ShoulderLength && s.has_bangs()
}

fn long_flat_straight(s: &HairstyleAttributes) -> bool {
    s.length >= HairLength::MidBackLength
        && s.texture == HairTexture::Straight
        && s.volume == HairVolume::Low
}

fn chin_or_forehead_balance(s: &HairstyleAttributes) -> bool {
    s.length == HairLength::ChinLength
        || (s.length == HairLength::ShoulderLength && s.has_layers())
        || real_fringe(s)
}

fn ear_level_volume(s: &HairstyleAttributes) -> bool {
    s.length == HairLength::EarLength && s.volume == HairVolume::High
}

fn top_volume_with_bangs(s: &HairstyleAttributes) -> bool {
    s.volume >= HairVolume::Medium
        && s.layers >= HairLayers::Medium
        && s.length <= HairLength::ShoulderLength
        && s.has_bangs()
}

fn heavy_unlayered_chin(s: &HairstyleAttributes) -> bool {
    s.length == HairLength::ChinLength && s.volume == HairVolume::High && !s.has_layers()
}

/// Bangs long enough to cover part of the forehead.
fn real_fringe(s: &HairstyleAttributes) -> bool {
    s.has_bangs() && s.bangs != HairBangs::MicroBangs
}

fn layered_or_textured(s: &HairstyleAttributes) -> bool {
    s.has_layers() || s.texture >= HairTexture::Wavy
}
