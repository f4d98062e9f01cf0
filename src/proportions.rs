//! Facial proportion measurement from the face-oval contour.
//!
//! The face is split vertically into the classical thirds:
//! hairline (trichion) → glabella → subnasale → chin (menton).
//! Widths are taken from horizontal spans of the oval contour in the
//! forehead band, across the whole oval (cheekbones) and in the jaw band.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mask::{find_skin_bounds, MaskAccess};
use crate::types::{BoundingBox, Contour, Point};

/// Forehead band height as a fraction of face length (1 / 3.5).
const FOREHEAD_BAND_DIVISOR: f32 = 3.5;
/// Jaw band height as a fraction of face length (1 / 3).
const JAW_BAND_DIVISOR: f32 = 3.0;
/// Fallback forehead width relative to the cheekbone width.
const FOREHEAD_FALLBACK_RATIO: f32 = 0.88;
/// Fallback jaw width relative to the cheekbone width.
const JAW_FALLBACK_RATIO: f32 = 0.78;
/// Jaw band selections with fewer points than this use the fallback.
const MIN_JAW_POINTS: usize = 3;
/// A jaw wider than this fraction of the cheekbones reads as angular.
const ANGULAR_JAW_RATIO: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JawShape {
    Rounded,
    Angular,
    Unknown,
}

impl JawShape {
    /// Classify the jaw line from its width relative to the cheekbones.
    pub fn from_widths(jaw_width: f32, cheekbone_width: f32) -> Self {
        if jaw_width > cheekbone_width * ANGULAR_JAW_RATIO {
            JawShape::Angular
        } else {
            JawShape::Rounded
        }
    }
}

/// Normalized facial measurements, all in pixels.
///
/// A `face_length` of zero (or less) marks a degenerate measurement from
/// which no features can be derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceProportions {
    pub face_length: f32,
    pub cheekbone_width: f32,
    pub forehead_width: f32,
    pub jaw_width: f32,
    pub upper_third_height: f32,
    pub middle_third_height: f32,
    pub lower_third_height: f32,
    pub jaw_shape: JawShape,
}

impl FaceProportions {
    /// Zeroed proportions used when the face oval is unavailable.
    pub const fn degenerate() -> Self {
        Self {
            face_length: 0.0,
            cheekbone_width: 0.0,
            forehead_width: 0.0,
            jaw_width: 0.0,
            upper_third_height: 0.0,
            middle_third_height: 0.0,
            lower_third_height: 0.0,
            jaw_shape: JawShape::Unknown,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.face_length <= 0.0
    }

    /// Measure proportions from the face oval.
    ///
    /// # Arguments
    ///
    /// * `face_oval` - Ordered points outlining the face
    /// * `nose_bridge` - Nose-bridge contour; its top marks the glabella
    /// * `nose_base` - Nose-base landmark; marks the subnasale
    /// * `skin_mask` - Skin raster covering `face_box`, used to push the
    ///   hairline estimate above the top of the oval
    /// * `face_box` - Detector bounding box the mask was computed over
    ///
    /// Returns `None` when the oval is empty; callers substitute
    /// [`FaceProportions::degenerate`].
    pub fn measure(
        face_oval: &Contour,
        nose_bridge: Option<&Contour>,
        nose_base: Option<Point>,
        skin_mask: Option<&dyn MaskAccess>,
        face_box: &BoundingBox,
    ) -> Option<Self> {
        let extent = face_oval.extent()?;

        let cheekbone_width = extent.width();
        let mut trichion_y = extent.min_y;
        let mut face_length = extent.height();

        if let Some(hairline_y) = skin_mask.and_then(|mask| hairline_from_mask(mask, face_box)) {
            trichion_y = extent.min_y.min(hairline_y);
            face_length = extent.max_y - trichion_y;
        }

        let menton_y = extent.max_y;

        let forehead_limit = trichion_y + face_length / FOREHEAD_BAND_DIVISOR;
        let (forehead_count, forehead_span) =
            face_oval.horizontal_span_where(|y| y >= trichion_y && y <= forehead_limit);
        let forehead_width = if forehead_count > 0 {
            forehead_span
        } else {
            debug!(cheekbone_width, "no oval points in forehead band, using ratio fallback");
            cheekbone_width * FOREHEAD_FALLBACK_RATIO
        };

        let jaw_limit = menton_y - face_length / JAW_BAND_DIVISOR;
        let (jaw_count, jaw_span) = face_oval.horizontal_span_where(|y| y >= jaw_limit);
        let jaw_width = if jaw_count >= MIN_JAW_POINTS {
            jaw_span
        } else {
            debug!(jaw_count, cheekbone_width, "too few oval points in jaw band, using ratio fallback");
            cheekbone_width * JAW_FALLBACK_RATIO
        };
        let jaw_shape = JawShape::from_widths(jaw_width, cheekbone_width);

        let glabella_y = nose_bridge
            .and_then(Contour::min_y)
            .unwrap_or(trichion_y + face_length / 3.0);
        let subnasale_y = nose_base
            .map(|p| p.y)
            .unwrap_or(glabella_y + face_length / 3.0);

        Some(Self {
            face_length,
            cheekbone_width,
            forehead_width,
            jaw_width,
            upper_third_height: (glabella_y - trichion_y).abs(),
            middle_third_height: (subnasale_y - glabella_y).abs(),
            lower_third_height: (menton_y - subnasale_y).abs(),
            jaw_shape,
        })
    }
}

/// Map the topmost skin row of the mask into image coordinates of the
/// face box. `None` if the mask has no skin or either raster is empty.
fn hairline_from_mask(mask: &dyn MaskAccess, face_box: &BoundingBox) -> Option<f32> {
    let bounds = find_skin_bounds(mask)?;
    if mask.height() == 0 || face_box.height <= 0.0 {
        return None;
    }
    let scaled_top = (bounds.top as f32 / mask.height() as f32) * face_box.height;
    Some(face_box.top() + scaled_top)
}
