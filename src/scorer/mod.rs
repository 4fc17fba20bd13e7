pub mod kanji_feature;
pub mod learned;
pub mod tree;

pub use self::kanji_feature::KanjiFeatureScorer;
pub use self::learned::{LearnedModelScorer, ScoreModel};
pub use self::tree::TreeEnsemble;

/// Scores one candidate split. Higher means more likely; the divider
/// normalizes the scores of all candidates, so no range is required.
pub trait Scorer: Send + Sync {
    fn calc_score(&self, family: &str, given: &str) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for std::sync::Arc<S> {
    fn calc_score(&self, family: &str, given: &str) -> f64 {
        (**self).calc_score(family, given)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn calc_score(&self, family: &str, given: &str) -> f64 {
        (**self).calc_score(family, given)
    }
}
