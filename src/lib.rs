//! # face-style
//!
//! Facial proportion analysis and rule-based hairstyle recommendation.
//!
//! This crate provides:
//! - **Proportions**: face length, forehead/cheekbone/jaw widths and the
//!   three vertical face thirds, measured from a detected face-oval contour
//!   (optionally refined with a skin segmentation mask)
//! - **Symmetry**: a scale-invariant left/right symmetry score
//! - **Features**: qualitative flags such as a wide jaw or a long upper third
//! - **Recommendations**: styles from a fixed taxonomy ranked by face-shape
//!   and feature rules
//!
//! Face detection and the face-shape, gender and skin classifiers are
//! external: their outputs are inputs here.
//!
//! ## Pipeline
//!
//! 1. Measure [`FaceProportions`] from the face oval and nose landmarks
//! 2. Score symmetry from eyes, nose base and mouth
//! 3. Derive [`FaceFeature`]s from the proportions
//! 4. Combine with the classified shape and gender into a [`FaceAnalysis`]
//! 5. Score every [`Taxonomy`] style and keep the best five
//!
//! ## Quick Start
//!
//! ```rust
//! use face_style::{
//!     analyze_face, BoundingBox, Contour, DetectedFace, FaceLandmarks, FaceShape, Gender,
//!     Point, Recommender,
//! };
//!
//! let face = DetectedFace {
//!     bounding_box: BoundingBox::new(100.0, 60.0, 100.0, 260.0),
//!     landmarks: FaceLandmarks {
//!         left_eye: Some(Point::new(125.0, 160.0)),
//!         right_eye: Some(Point::new(175.0, 160.0)),
//!         nose_base: Some(Point::new(150.0, 240.0)),
//!         mouth_bottom: Some(Point::new(150.0, 280.0)),
//!         mouth_left: None,
//!     },
//!     face_oval: Contour::new(vec![
//!         Point::new(150.0, 100.0),
//!         Point::new(100.0, 200.0),
//!         Point::new(200.0, 200.0),
//!         Point::new(150.0, 320.0),
//!     ]),
//!     nose_bridge: None,
//! };
//!
//! // Shape and gender come from external classifiers; no skin mask here
//! let analysis = analyze_face(&face, FaceShape::Oval, Gender::Female, None);
//! assert!(analysis.segmentation_warning.is_some());
//!
//! let recommendations = Recommender::default().recommend(&analysis);
//! assert!(recommendations.len() <= 5);
//! ```
//!
//! ## Custom Mask Types
//!
//! Implement [`MaskAccess`] to feed a segmenter's raster without copying:
//!
//! ```rust
//! use face_style::MaskAccess;
//!
//! struct Probabilities { width: u32, height: u32, skin: Vec<f32> }
//!
//! impl MaskAccess for Probabilities {
//!     fn is_skin(&self, x: u32, y: u32) -> bool {
//!         x < self.width && y < self.height
//!             && self.skin[(y * self.width + x) as usize] > 0.5
//!     }
//!     fn width(&self) -> u32 { self.width }
//!     fn height(&self) -> u32 { self.height }
//! }
//! ```

mod analysis;
mod config;
mod describe;
mod error;
mod features;
mod hair;
mod mask;
mod proportions;
mod recommend;
pub mod rules;
mod symmetry;
mod taxonomy;
mod types;

pub use analysis::{
    analyze_face, DetectedFace, FaceAnalysis, FaceShape, Gender, MISSING_CONTOUR_WARNING,
    SEGMENTATION_WARNING,
};
pub use config::ScoringConfig;
pub use describe::{describe_hairstyle, display_name, image_search_query};
pub use error::{Error, Result};
pub use features::{identify_features, FaceFeature};
pub use hair::{
    HairBangs, HairLayers, HairLength, HairParting, HairStructure, HairTexture, HairVolume,
    HairstyleAttributes,
};
pub use mask::{find_skin_bounds, MaskAccess, MaskBounds, SkinMask};
pub use proportions::{FaceProportions, JawShape};
pub use recommend::{recommend, score_style, HairstyleRecommendation, Recommender, StyleScore};
pub use symmetry::{symmetry_score, NEUTRAL_SYMMETRY};
pub use taxonomy::{HairstyleEntry, Taxonomy};
pub use types::{BoundingBox, Contour, Extent, FaceLandmarks, Point};
