//! Per-face analysis: proportions, symmetry and features combined with the
//! externally classified face shape and gender.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::features::{identify_features, FaceFeature};
use crate::mask::MaskAccess;
use crate::proportions::FaceProportions;
use crate::symmetry::symmetry_score;
use crate::types::{BoundingBox, Contour, FaceLandmarks};

pub const MISSING_CONTOUR_WARNING: &str = "Face contour was not detected.";
pub const SEGMENTATION_WARNING: &str = "Reduced analysis accuracy: skin segmentation failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Rectangle,
    Triangle,
    Unknown,
}

impl FaceShape {
    pub const ALL: [FaceShape; 8] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Diamond,
        FaceShape::Rectangle,
        FaceShape::Triangle,
        FaceShape::Unknown,
    ];

    /// Parse a classifier label such as `"Oval"` or `"heart"`.
    /// Unrecognized labels map to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "OVAL" => FaceShape::Oval,
            "ROUND" => FaceShape::Round,
            "SQUARE" => FaceShape::Square,
            "HEART" => FaceShape::Heart,
            "DIAMOND" => FaceShape::Diamond,
            "RECTANGLE" => FaceShape::Rectangle,
            "TRIANGLE" => FaceShape::Triangle,
            _ => FaceShape::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// A single detected face as reported by the face detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub landmarks: FaceLandmarks,
    #[serde(default)]
    pub face_oval: Contour,
    #[serde(default)]
    pub nose_bridge: Option<Contour>,
}

/// Result of analyzing one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    pub face_shape: FaceShape,
    pub symmetry_score: f32,
    pub proportions: FaceProportions,
    pub features: BTreeSet<FaceFeature>,
    pub gender: Gender,
    pub segmentation_warning: Option<String>,
}

impl FaceAnalysis {
    /// Fallback analysis for a face whose outline could not be measured.
    pub fn degenerate(warning: impl Into<String>) -> Self {
        Self {
            face_shape: FaceShape::Unknown,
            symmetry_score: 0.0,
            proportions: FaceProportions::degenerate(),
            features: BTreeSet::new(),
            gender: Gender::Unknown,
            segmentation_warning: Some(warning.into()),
        }
    }

    pub fn has_feature(&self, feature: FaceFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// Analyze a detected face.
///
/// `face_shape` and `gender` come from external classifiers. `skin_mask` is
/// the segmenter output over the face box; `None` means segmentation was
/// unavailable, which only degrades the hairline estimate and is reported
/// through `segmentation_warning`.
pub fn analyze_face(
    face: &DetectedFace,
    face_shape: FaceShape,
    gender: Gender,
    skin_mask: Option<&dyn MaskAccess>,
) -> FaceAnalysis {
    if face.face_oval.is_empty() {
        warn!("face oval contour missing, returning degenerate analysis");
        return FaceAnalysis::degenerate(MISSING_CONTOUR_WARNING);
    }

    let segmentation_warning = if skin_mask.is_none() {
        warn!("no skin mask available, hairline will not be refined");
        Some(SEGMENTATION_WARNING.to_string())
    } else {
        None
    };

    let proportions = FaceProportions::measure(
        &face.face_oval,
        face.nose_bridge.as_ref(),
        face.landmarks.nose_base,
        skin_mask,
        &face.bounding_box,
    )
    .unwrap_or_else(FaceProportions::degenerate);
    let symmetry_score = symmetry_score(&face.landmarks);
    let features = identify_features(&proportions, face_shape);

    debug!(
        ?face_shape,
        ?gender,
        symmetry_score,
        face_length = proportions.face_length,
        features = features.len(),
        "face analyzed"
    );

    FaceAnalysis {
        face_shape,
        symmetry_score,
        proportions,
        features,
        gender,
        segmentation_warning,
    }
}
