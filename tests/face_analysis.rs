use face_style::{
    analyze_face, identify_features, symmetry_score, BoundingBox, Contour, DetectedFace,
    FaceFeature, FaceLandmarks, FaceProportions, FaceShape, Gender, JawShape, Point, Recommender,
    SkinMask, MISSING_CONTOUR_WARNING, NEUTRAL_SYMMETRY,
};
use proptest::prelude::*;

fn landmarks(left: (f32, f32), right: (f32, f32), nose: (f32, f32), mouth: (f32, f32)) -> FaceLandmarks {
    FaceLandmarks {
        left_eye: Some(Point::new(left.0, left.1)),
        right_eye: Some(Point::new(right.0, right.1)),
        nose_base: Some(Point::new(nose.0, nose.1)),
        mouth_bottom: Some(Point::new(mouth.0, mouth.1)),
        mouth_left: None,
    }
}

fn detected_face() -> DetectedFace {
    DetectedFace {
        bounding_box: BoundingBox::new(100.0, 60.0, 100.0, 260.0),
        landmarks: landmarks((125.0, 160.0), (175.0, 160.0), (150.0, 240.0), (150.0, 280.0)),
        face_oval: Contour::new(vec![
            Point::new(150.0, 100.0),
            Point::new(110.0, 110.0),
            Point::new(190.0, 110.0),
            Point::new(100.0, 200.0),
            Point::new(200.0, 200.0),
            Point::new(115.0, 280.0),
            Point::new(185.0, 280.0),
            Point::new(150.0, 320.0),
        ]),
        nose_bridge: None,
    }
}

fn proportions(face_length: f32, upper: f32) -> FaceProportions {
    FaceProportions {
        face_length,
        cheekbone_width: 100.0,
        forehead_width: 90.0,
        jaw_width: 80.0,
        upper_third_height: upper,
        middle_third_height: face_length / 3.0,
        lower_third_height: face_length / 3.0,
        jaw_shape: JawShape::Rounded,
    }
}

#[test]
fn centered_landmarks_are_fully_symmetric() {
    let lm = landmarks((100.0, 100.0), (200.0, 100.0), (150.0, 160.0), (150.0, 200.0));
    assert!((symmetry_score(&lm) - 1.0).abs() < 1e-6);
}

#[test]
fn offset_landmarks_lower_symmetry() {
    let lm = landmarks((100.0, 100.0), (200.0, 100.0), (170.0, 160.0), (130.0, 200.0));
    assert!((symmetry_score(&lm) - 0.6).abs() < 1e-6);
}

#[test]
fn coincident_eyes_are_neutral() {
    let lm = landmarks((150.0, 100.0), (150.0, 100.0), (170.0, 160.0), (130.0, 200.0));
    assert_eq!(symmetry_score(&lm), NEUTRAL_SYMMETRY);
}

#[test]
fn jaw_shape_examples() {
    assert_eq!(JawShape::from_widths(90.0, 100.0), JawShape::Angular);
    assert_eq!(JawShape::from_widths(80.0, 100.0), JawShape::Rounded);
}

#[test]
fn long_upper_third_example() {
    let features = identify_features(&proportions(90.0, 40.0), FaceShape::Oval);
    assert!(features.contains(&FaceFeature::LongUpperThird));
}

#[test]
fn zero_length_yields_no_features() {
    let features = identify_features(&proportions(0.0, 40.0), FaceShape::Heart);
    assert!(features.is_empty());
}

#[test]
fn empty_contour_gives_zeroed_analysis() {
    let mut face = detected_face();
    face.face_oval = Contour::default();
    let analysis = analyze_face(&face, FaceShape::Square, Gender::Male, None);

    assert_eq!(analysis.proportions, FaceProportions::degenerate());
    assert!(analysis.features.is_empty());
    assert_eq!(analysis.segmentation_warning.as_deref(), Some(MISSING_CONTOUR_WARNING));
    assert!(Recommender::default().recommend(&analysis).is_empty());
}

#[test]
fn end_to_end_with_mask() {
    let face = detected_face();
    let mask = SkinMask::from_fn(10, 10, |_, y| y >= 1);
    let analysis = analyze_face(&face, FaceShape::Oval, Gender::Female, Some(&mask));

    assert!(analysis.segmentation_warning.is_none());
    assert!((analysis.symmetry_score - 1.0).abs() < 1e-6);
    assert!((analysis.proportions.face_length - 234.0).abs() < 1e-3);

    let recs = Recommender::default().recommend(&analysis);
    assert_eq!(recs.len(), 5);
    for rec in &recs {
        assert!(rec.attributes.suits_gender(Gender::Female));
        assert!(!rec.reasons.is_empty());
    }
}

#[test]
fn detected_face_reads_from_json() {
    let face: DetectedFace = serde_json::from_str(
        r#"{
            "bounding_box": {"x": 100, "y": 60, "width": 100, "height": 260},
            "landmarks": {"left_eye": {"x": 125, "y": 160}, "right_eye": {"x": 175, "y": 160}},
            "face_oval": [{"x": 150, "y": 100}, {"x": 100, "y": 200}, {"x": 200, "y": 200}, {"x": 150, "y": 320}]
        }"#,
    )
    .unwrap();
    assert_eq!(face.face_oval.num_points(), 4);
    assert!(face.nose_bridge.is_none());
    assert!(face.landmarks.nose_base.is_none());

    // Missing nose and mouth leave symmetry neutral
    let analysis = analyze_face(&face, FaceShape::Unknown, Gender::Unknown, None);
    assert_eq!(analysis.symmetry_score, NEUTRAL_SYMMETRY);
}

fn point() -> impl Strategy<Value = Point> {
    (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn symmetry_stays_in_unit_range(l in point(), r in point(), n in point(), m in point()) {
        let lm = FaceLandmarks {
            left_eye: Some(l),
            right_eye: Some(r),
            nose_base: Some(n),
            mouth_bottom: Some(m),
            mouth_left: None,
        };
        let score = symmetry_score(&lm);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn measured_lengths_are_non_negative(points in prop::collection::vec(point(), 1..40)) {
        let face = DetectedFace {
            bounding_box: BoundingBox::new(0.0, 0.0, 1000.0, 1000.0),
            landmarks: FaceLandmarks::default(),
            face_oval: Contour::new(points),
            nose_bridge: None,
        };
        let p = analyze_face(&face, FaceShape::Unknown, Gender::Unknown, None).proportions;
        for value in [
            p.face_length,
            p.cheekbone_width,
            p.forehead_width,
            p.jaw_width,
            p.upper_third_height,
            p.middle_third_height,
            p.lower_third_height,
        ] {
            prop_assert!(value >= 0.0, "{p:?}");
        }
    }
}
