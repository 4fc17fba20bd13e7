use super::Scorer;
use crate::feature::SimpleFeatureExtractor;
use crate::stats::CharacterStatisticsStore;
use std::sync::Arc;

/// Hand-weighted blend of the order and length scores.
///
/// Order scores are averaged over the interior characters, length scores over
/// every character, and the two averages are averaged again. With
/// `only_order_score_when_4` the length half is dropped for 4-character names.
#[derive(Debug)]
pub struct KanjiFeatureScorer {
    extractor: SimpleFeatureExtractor,
    only_order_score_when_4: bool,
}

impl KanjiFeatureScorer {
    pub fn new(
        store: Arc<CharacterStatisticsStore>,
        only_order_score_when_4: bool,
        cache_mask: bool,
    ) -> Self {
        Self {
            extractor: SimpleFeatureExtractor::new(store, cache_mask),
            only_order_score_when_4,
        }
    }

    pub fn extractor(&self) -> &SimpleFeatureExtractor {
        &self.extractor
    }
}

impl Scorer for KanjiFeatureScorer {
    fn calc_score(&self, family: &str, given: &str) -> f64 {
        let family: Vec<char> = family.chars().collect();
        let given: Vec<char> = given.chars().collect();
        let full_len = family.len() + given.len();
        let features = self.extractor.get_features_from_chars(&family, &given);

        // names of 2 chars or fewer have no interior characters
        let order_score = if full_len > 2 {
            (features.family_order_score + features.given_order_score) / (full_len - 2) as f64
        } else {
            0.0
        };
        if self.only_order_score_when_4 && full_len == 4 {
            return order_score;
        }

        let length_score = if full_len > 0 {
            (features.family_length_score + features.given_length_score) / full_len as f64
        } else {
            0.0
        };

        (order_score + length_score) / 2.0
    }
}
