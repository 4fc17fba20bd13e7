use super::mask::MaskCache;
use super::scores::{calc_length_score, calc_order_score};
use crate::stats::{CharacterStatisticsStore, FamilyNameRepository};
use std::sync::Arc;

/// Kanji that rarely open a given name but often close a family name.
pub const GIVEN_UNLIKELY_FIRST_KANJI: [char; 10] =
    ['田', '谷', '川', '島', '原', '村', '塚', '森', '井', '子'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleFeatures {
    pub family_order_score: f64,
    pub family_length_score: f64,
    pub given_order_score: f64,
    pub given_length_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyRankingFeatures {
    /// NaN when the family part is not a known family name.
    pub rank: f64,
    pub fullname_length: usize,
    pub family_length: usize,
    pub given_length: usize,
    pub family_order_score: f64,
    pub given_order_score: f64,
    pub family_length_score: f64,
    pub given_length_score: f64,
    pub given_startswith_specific_kanji: bool,
}

impl FamilyRankingFeatures {
    pub const LEN: usize = 9;

    /// Fixed-order numeric vector consumed by learned models.
    pub fn to_vector(&self) -> [f64; Self::LEN] {
        [
            self.rank,
            self.fullname_length as f64,
            self.family_length as f64,
            self.given_length as f64,
            self.family_order_score,
            self.given_order_score,
            self.family_length_score,
            self.given_length_score,
            if self.given_startswith_specific_kanji {
                1.0
            } else {
                0.0
            },
        ]
    }
}

/// The four statistical signals shared by every extractor.
fn statistical_features(
    store: &CharacterStatisticsStore,
    cache: Option<&MaskCache>,
    family: &[char],
    given: &[char],
) -> SimpleFeatures {
    let full_len = family.len() + given.len();
    let start = family.len();
    SimpleFeatures {
        family_order_score: calc_order_score(store, family, full_len, 0, cache),
        family_length_score: calc_length_score(store, family, full_len, 0, cache),
        given_order_score: calc_order_score(store, given, full_len, start, cache),
        given_length_score: calc_length_score(store, given, full_len, start, cache),
    }
}

/// Order and length scores for each side of a candidate split.
#[derive(Debug)]
pub struct SimpleFeatureExtractor {
    store: Arc<CharacterStatisticsStore>,
    mask_cache: Option<MaskCache>,
}

impl SimpleFeatureExtractor {
    pub fn new(store: Arc<CharacterStatisticsStore>, cache_mask: bool) -> Self {
        Self {
            store,
            mask_cache: cache_mask.then(MaskCache::new),
        }
    }

    pub fn store(&self) -> &CharacterStatisticsStore {
        &self.store
    }

    pub fn get_features(&self, family: &str, given: &str) -> SimpleFeatures {
        let family: Vec<char> = family.chars().collect();
        let given: Vec<char> = given.chars().collect();
        self.get_features_from_chars(&family, &given)
    }

    pub fn get_features_from_chars(&self, family: &[char], given: &[char]) -> SimpleFeatures {
        statistical_features(&self.store, self.mask_cache.as_ref(), family, given)
    }
}

/// [`SimpleFeatureExtractor`] plus family-name rank and shape features.
#[derive(Debug)]
pub struct FamilyRankingFeatureExtractor {
    store: Arc<CharacterStatisticsStore>,
    family_names: Arc<FamilyNameRepository>,
    mask_cache: Option<MaskCache>,
}

impl FamilyRankingFeatureExtractor {
    pub fn new(
        store: Arc<CharacterStatisticsStore>,
        family_names: Arc<FamilyNameRepository>,
        cache_mask: bool,
    ) -> Self {
        Self {
            store,
            family_names,
            mask_cache: cache_mask.then(MaskCache::new),
        }
    }

    pub fn get_features(&self, family: &str, given: &str) -> FamilyRankingFeatures {
        let family_chars: Vec<char> = family.chars().collect();
        let given_chars: Vec<char> = given.chars().collect();
        let simple = statistical_features(
            &self.store,
            self.mask_cache.as_ref(),
            &family_chars,
            &given_chars,
        );

        FamilyRankingFeatures {
            rank: self.family_names.get_rank(family),
            fullname_length: family_chars.len() + given_chars.len(),
            family_length: family_chars.len(),
            given_length: given_chars.len(),
            family_order_score: simple.family_order_score,
            given_order_score: simple.given_order_score,
            family_length_score: simple.family_length_score,
            given_length_score: simple.given_length_score,
            given_startswith_specific_kanji: given_chars
                .first()
                .is_some_and(|c| GIVEN_UNLIKELY_FIRST_KANJI.contains(c)),
        }
    }
}
