//! Rule-based hairstyle ranking.
//!
//! ## Algorithm
//!
//! 1. Keep the taxonomy styles offered to the analyzed gender (all of them
//!    when gender is unknown)
//! 2. For each style, sum the deltas of the matching face-shape rules, then
//!    of the matching feature rules, collecting their reasons
//! 3. Clamp the sum to [0, 1] and scale it by the symmetry factor
//! 4. Keep styles above the confidence threshold with at least one reason
//! 5. Sort by confidence, highest first (ties keep taxonomy order), and
//!    truncate

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::FaceAnalysis;
use crate::config::ScoringConfig;
use crate::hair::HairstyleAttributes;
use crate::rules::{face_shape_rules, feature_rules};
use crate::taxonomy::Taxonomy;

/// A ranked style suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairstyleRecommendation {
    pub name: String,
    pub attributes: HairstyleAttributes,
    /// Suitability in [0, 1].
    pub confidence: f32,
    /// Why the style was suggested, in rule order, without repeats.
    pub reasons: Vec<String>,
    /// Example picture, filled in later by an image search.
    pub image_url: Option<String>,
}

impl HairstyleRecommendation {
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = Some(url.into());
    }

    pub fn main_reason(&self) -> Option<&str> {
        self.reasons.first().map(String::as_str)
    }
}

/// Raw rule outcome for one style, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleScore {
    pub raw_score: f32,
    pub reasons: Vec<&'static str>,
}

/// Evaluate the face-shape rules and then the feature rules for one style.
pub fn score_style(analysis: &FaceAnalysis, attributes: &HairstyleAttributes) -> StyleScore {
    let mut score = StyleScore::default();

    for rule in face_shape_rules(analysis.face_shape) {
        if rule.matches(attributes) {
            score.add(rule.score_delta, rule.reason);
        }
    }
    for rule in feature_rules() {
        if rule.matches(analysis, attributes) {
            score.add(rule.condition.score_delta, rule.condition.reason);
        }
    }

    score
}

impl StyleScore {
    fn add(&mut self, delta: f32, reason: &'static str) {
        self.raw_score += delta;
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }
}

/// Ranks taxonomy styles for an analyzed face.
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    taxonomy: &'a Taxonomy,
    config: ScoringConfig,
}

impl Default for Recommender<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::builtin(), ScoringConfig::default())
    }
}

impl<'a> Recommender<'a> {
    pub fn new(taxonomy: &'a Taxonomy, config: ScoringConfig) -> Self {
        Self { taxonomy, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn taxonomy(&self) -> &'a Taxonomy {
        self.taxonomy
    }

    /// Final confidence for a raw rule score.
    pub fn confidence(&self, raw_score: f32, symmetry_score: f32) -> f32 {
        let rule_confidence = raw_score.clamp(0.0, 1.0);
        (rule_confidence * self.config.symmetry_factor(symmetry_score)).clamp(0.0, 1.0)
    }

    /// Best-matching styles, highest confidence first.
    pub fn recommend(&self, analysis: &FaceAnalysis) -> Vec<HairstyleRecommendation> {
        let mut candidates = 0usize;
        let mut recommendations: Vec<HairstyleRecommendation> = self
            .taxonomy
            .iter()
            .filter(|entry| entry.attributes.suits_gender(analysis.gender))
            .filter_map(|entry| {
                candidates += 1;
                let score = score_style(analysis, &entry.attributes);
                let confidence = self.confidence(score.raw_score, analysis.symmetry_score);
                if confidence > self.config.min_confidence && !score.reasons.is_empty() {
                    Some(HairstyleRecommendation {
                        name: entry.name.clone(),
                        attributes: entry.attributes.clone(),
                        confidence,
                        reasons: score.reasons.iter().map(|r| r.to_string()).collect(),
                        image_url: None,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable: equal confidences keep taxonomy order
        recommendations.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        recommendations.truncate(self.config.max_recommendations);

        debug!(
            candidates,
            returned = recommendations.len(),
            face_shape = ?analysis.face_shape,
            gender = ?analysis.gender,
            "hairstyles ranked"
        );
        recommendations
    }
}

/// Rank `taxonomy` for `analysis` with the default scoring parameters.
pub fn recommend(analysis: &FaceAnalysis, taxonomy: &Taxonomy) -> Vec<HairstyleRecommendation> {
    Recommender::new(taxonomy, ScoringConfig::default()).recommend(analysis)
}
