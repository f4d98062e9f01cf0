use std::collections::BTreeSet;

use face_style::{
    recommend, FaceAnalysis, FaceFeature, FaceShape, Gender, Recommender, ScoringConfig,
    Taxonomy,
};
use proptest::prelude::*;

fn analysis_strategy() -> impl Strategy<Value = FaceAnalysis> {
    (
        0..FaceShape::ALL.len(),
        prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Unknown)],
        0.0f32..=1.0,
        0u16..(1 << FaceFeature::ALL.len()),
    )
        .prop_map(|(shape, gender, symmetry, feature_bits)| {
            let mut analysis = FaceAnalysis::degenerate("generated");
            analysis.segmentation_warning = None;
            analysis.face_shape = FaceShape::ALL[shape];
            analysis.gender = gender;
            analysis.symmetry_score = symmetry;
            analysis.features = FaceFeature::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| feature_bits & (1 << i) != 0)
                .map(|(_, f)| *f)
                .collect();
            analysis
        })
}

proptest! {
    #[test]
    fn confidences_stay_in_unit_range(analysis in analysis_strategy()) {
        for rec in recommend(&analysis, Taxonomy::builtin()) {
            prop_assert!((0.0..=1.0).contains(&rec.confidence), "{}: {}", rec.name, rec.confidence);
            prop_assert!(rec.confidence > 0.40);
        }
    }

    #[test]
    fn at_most_five_sorted_descending(analysis in analysis_strategy()) {
        let recs = recommend(&analysis, Taxonomy::builtin());
        prop_assert!(recs.len() <= 5);
        for pair in recs.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn every_recommendation_has_reasons(analysis in analysis_strategy()) {
        for rec in recommend(&analysis, Taxonomy::builtin()) {
            prop_assert!(!rec.reasons.is_empty());
            let mut deduped = rec.reasons.clone();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), rec.reasons.len());
        }
    }

    #[test]
    fn styles_match_known_gender(analysis in analysis_strategy()) {
        prop_assume!(analysis.gender != Gender::Unknown);
        for rec in recommend(&analysis, Taxonomy::builtin()) {
            prop_assert!(rec.attributes.applicable_gender.contains(&analysis.gender));
        }
    }

    #[test]
    fn female_only_styles_never_reach_men(mut analysis in analysis_strategy()) {
        analysis.gender = Gender::Male;
        for rec in recommend(&analysis, Taxonomy::builtin()) {
            prop_assert!(rec.attributes.applicable_gender != BTreeSet::from([Gender::Female]));
        }
    }

    #[test]
    fn ranking_is_idempotent(analysis in analysis_strategy()) {
        let first = recommend(&analysis, Taxonomy::builtin());
        let second = recommend(&analysis, Taxonomy::builtin());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn limit_is_honored(analysis in analysis_strategy(), limit in 1usize..10) {
        let config = ScoringConfig { max_recommendations: limit, ..Default::default() };
        let recs = Recommender::new(Taxonomy::builtin(), config).recommend(&analysis);
        prop_assert!(recs.len() <= limit);
    }
}

#[test]
fn empty_taxonomy_yields_nothing() {
    let taxonomy = Taxonomy::new(Vec::new()).unwrap();
    let mut analysis = FaceAnalysis::degenerate("unused");
    analysis.face_shape = FaceShape::Oval;
    analysis.symmetry_score = 1.0;
    assert!(recommend(&analysis, &taxonomy).is_empty());
}

#[test]
fn gender_filter_can_empty_the_candidates() {
    let taxonomy = Taxonomy::from_json(
        r#"[{
            "name": "Long_Waves",
            "length": "MID_BACK_LENGTH",
            "texture": "WAVY",
            "volume": "HIGH",
            "layers": "MARKED",
            "bangs": "NONE",
            "structure": "WAVE_HAIR_STYLE",
            "parting": "SIDE",
            "applicable_gender": ["FEMALE"]
        }]"#,
    )
    .unwrap();
    let mut analysis = FaceAnalysis::degenerate("unused");
    analysis.face_shape = FaceShape::Oval;
    analysis.symmetry_score = 1.0;

    analysis.gender = Gender::Male;
    assert!(recommend(&analysis, &taxonomy).is_empty());

    analysis.gender = Gender::Female;
    let recs = recommend(&analysis, &taxonomy);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "Long_Waves");
}
