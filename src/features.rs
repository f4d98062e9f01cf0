//! Qualitative facial features derived from measured proportions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::FaceShape;
use crate::proportions::FaceProportions;

/// A third longer than this multiple of the ideal third is flagged long.
const LONG_THIRD_RATIO: f32 = 1.15;
/// A third shorter than this multiple of the ideal third is flagged short.
const SHORT_THIRD_RATIO: f32 = 0.85;
const WIDE_JAW_RATIO: f32 = 0.90;
const PROMINENT_CHEEKBONE_RATIO: f32 = 1.1;
const NARROW_CHIN_RATIO: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaceFeature {
    HighForehead,
    WideJaw,
    ProminentCheekbones,
    NarrowChin,
    BalancedFeatures,
    LongUpperThird,
    LongMiddleThird,
    LongLowerThird,
    ShortUpperThird,
    ShortMiddleThird,
    ShortLowerThird,
}

impl FaceFeature {
    pub const ALL: [FaceFeature; 11] = [
        FaceFeature::HighForehead,
        FaceFeature::WideJaw,
        FaceFeature::ProminentCheekbones,
        FaceFeature::NarrowChin,
        FaceFeature::BalancedFeatures,
        FaceFeature::LongUpperThird,
        FaceFeature::LongMiddleThird,
        FaceFeature::LongLowerThird,
        FaceFeature::ShortUpperThird,
        FaceFeature::ShortMiddleThird,
        FaceFeature::ShortLowerThird,
    ];
}

/// Derive feature flags from proportions.
///
/// Degenerate proportions (`face_length <= 0`) yield an empty set. An oval
/// face with no other flag is marked [`FaceFeature::BalancedFeatures`].
pub fn identify_features(p: &FaceProportions, shape: FaceShape) -> BTreeSet<FaceFeature> {
    let mut features = BTreeSet::new();
    if p.is_degenerate() {
        return features;
    }

    let third = p.face_length / 3.0;
    let thirds = [
        (
            p.upper_third_height,
            FaceFeature::LongUpperThird,
            FaceFeature::ShortUpperThird,
        ),
        (
            p.middle_third_height,
            FaceFeature::LongMiddleThird,
            FaceFeature::ShortMiddleThird,
        ),
        (
            p.lower_third_height,
            FaceFeature::LongLowerThird,
            FaceFeature::ShortLowerThird,
        ),
    ];
    for (height, long, short) in thirds {
        if height > third * LONG_THIRD_RATIO {
            features.insert(long);
        } else if height < third * SHORT_THIRD_RATIO {
            features.insert(short);
        }
    }

    if p.jaw_width > p.cheekbone_width * WIDE_JAW_RATIO {
        features.insert(FaceFeature::WideJaw);
    }
    if p.cheekbone_width > p.forehead_width * PROMINENT_CHEEKBONE_RATIO
        && p.cheekbone_width > p.jaw_width * PROMINENT_CHEEKBONE_RATIO
    {
        features.insert(FaceFeature::ProminentCheekbones);
    }
    if p.jaw_width < p.forehead_width * NARROW_CHIN_RATIO {
        features.insert(FaceFeature::NarrowChin);
    }

    if features.is_empty() && shape == FaceShape::Oval {
        features.insert(FaceFeature::BalancedFeatures);
    }

    features
}
