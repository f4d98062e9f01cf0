use tracing::debug;

use crate::types::FaceLandmarks;

/// Score returned when symmetry cannot be measured.
pub const NEUTRAL_SYMMETRY: f32 = 0.5;

/// Left/right symmetry in [0, 1], 1.0 = perfectly symmetric.
///
/// Measures how far the nose base and mouth drift from the vertical line
/// midway between the eyes, relative to half the eye span. Returns
/// [`NEUTRAL_SYMMETRY`] if any landmark is missing or the eyes share an x.
pub fn symmetry_score(landmarks: &FaceLandmarks) -> f32 {
    let (Some(left_eye), Some(right_eye), Some(nose), Some(mouth)) = (
        landmarks.left_eye,
        landmarks.right_eye,
        landmarks.nose_base,
        landmarks.mouth(),
    ) else {
        debug!("symmetry landmarks incomplete, using neutral score");
        return NEUTRAL_SYMMETRY;
    };

    let eye_span = (right_eye.x - left_eye.x).abs();
    if eye_span == 0.0 {
        debug!("zero eye span, using neutral score");
        return NEUTRAL_SYMMETRY;
    }

    let mid_eyes_x = (left_eye.x + right_eye.x) / 2.0;
    let deviation = ((nose.x - mid_eyes_x).abs() + (mouth.x - mid_eyes_x).abs()) / 2.0;
    (1.0 - deviation / (eye_span / 2.0)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn landmarks(nose_x: f32, mouth_x: f32) -> FaceLandmarks {
        FaceLandmarks {
            left_eye: Some(Point::new(100.0, 100.0)),
            right_eye: Some(Point::new(200.0, 100.0)),
            nose_base: Some(Point::new(nose_x, 160.0)),
            mouth_bottom: Some(Point::new(mouth_x, 200.0)),
            mouth_left: None,
        }
    }

    #[test]
    fn centered_features_are_symmetric() {
        assert!((symmetry_score(&landmarks(150.0, 150.0)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn deviation_lowers_score() {
        // Mean deviation 20px over a 50px half span
        assert!((symmetry_score(&landmarks(170.0, 130.0)) - 0.6).abs() < 1e-5);
    }

    #[test]
    fn large_deviation_clamps_to_zero() {
        assert_eq!(symmetry_score(&landmarks(400.0, 400.0)), 0.0);
    }

    #[test]
    fn mouth_left_is_used_as_fallback() {
        let mut lm = landmarks(150.0, 0.0);
        lm.mouth_bottom = None;
        lm.mouth_left = Some(Point::new(130.0, 200.0));
        // Deviations 0 and 20 -> mean 10 over 50
        assert!((symmetry_score(&lm) - 0.8).abs() < 1e-5);
    }

    #[test]
    fn missing_landmarks_are_neutral() {
        let mut lm = landmarks(150.0, 150.0);
        lm.nose_base = None;
        assert_eq!(symmetry_score(&lm), NEUTRAL_SYMMETRY);

        assert_eq!(symmetry_score(&FaceLandmarks::default()), NEUTRAL_SYMMETRY);
    }

    #[test]
    fn zero_eye_span_is_neutral() {
        let mut lm = landmarks(150.0, 150.0);
        lm.right_eye = Some(Point::new(100.0, 120.0));
        assert_eq!(symmetry_score(&lm), NEUTRAL_SYMMETRY);
    }
}
