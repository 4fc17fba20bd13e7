use super::tree::TreeEnsemble;
use super::Scorer;
use crate::feature::FamilyRankingFeatureExtractor;

/// A pre-trained model mapping a fixed-order feature vector to a probability.
pub trait ScoreModel: Send + Sync {
    fn predict(&self, features: &[f64]) -> f64;
}

/// Scores a split by feeding ranking features to a learned model.
pub struct LearnedModelScorer<M: ScoreModel = TreeEnsemble> {
    extractor: FamilyRankingFeatureExtractor,
    model: M,
}

impl<M: ScoreModel> LearnedModelScorer<M> {
    pub fn new(extractor: FamilyRankingFeatureExtractor, model: M) -> Self {
        Self { extractor, model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M: ScoreModel> Scorer for LearnedModelScorer<M> {
    fn calc_score(&self, family: &str, given: &str) -> f64 {
        let features = self.extractor.get_features(family, given);
        self.model.predict(&features.to_vector())
    }
}
