//! The orchestrator: validate, normalize, try the rules, else score every
//! split point and keep the most probable one.

pub mod normalize;
pub mod softmax;

pub use self::normalize::{normalize_name, UndividedName};
pub use self::softmax::{argmax, softmax};

use crate::config::{DataPaths, NameDividerConfig, NameDividerVersion, ScorerBackend};
use crate::divided_name::DividedName;
use crate::error::{NameDividerError, NdResult};
use crate::feature::{FamilyRankingFeatureExtractor, FamilyRankingFeatures};
use crate::rule::{split_chars, Pipeline};
use crate::scorer::{KanjiFeatureScorer, LearnedModelScorer, Scorer, TreeEnsemble};
use crate::stats::{CharacterStatisticsStore, FamilyNameRepository};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

pub struct NameDivider {
    separator: String,
    normalize_name: bool,
    algorithm_name: String,
    pipeline: Pipeline,
    scorer: Box<dyn Scorer>,
}

impl NameDivider {
    /// Wires an arbitrary scorer into the rule pipeline described by `config`.
    /// Table paths and the backend in `config` are ignored.
    pub fn with_scorer<S: Scorer + 'static>(config: NameDividerConfig, scorer: S) -> NdResult<Self> {
        let algorithm_name = config.algorithm_name().to_string();
        let pipeline = Pipeline::new(&config.separator, config.custom_rules)?;
        Ok(Self {
            separator: config.separator,
            normalize_name: config.normalize_name,
            algorithm_name,
            pipeline,
            scorer: Box::new(scorer),
        })
    }

    /// Loads the tables `config` points at and builds the matching scorer.
    pub fn from_config(config: NameDividerConfig) -> NdResult<Self> {
        let store = Arc::new(CharacterStatisticsStore::load_from_file(
            &config.statistics_path,
        )?);

        match config.backend {
            ScorerBackend::KanjiFeature => {
                let scorer = KanjiFeatureScorer::new(
                    store,
                    config.only_order_score_when_4,
                    config.cache_mask,
                );
                info!("🧮 Kanji feature divider ready ({})", config.algorithm_name());
                Self::with_scorer(config, scorer)
            }
            ScorerBackend::Gbdt => {
                if config.only_order_score_when_4 {
                    return Err(NameDividerError::Config(
                        "only_order_score_when_4 applies to the basic backend only".to_string(),
                    ));
                }
                let family_names =
                    Arc::new(FamilyNameRepository::load_from_file(&config.family_names_path)?);
                let model = TreeEnsemble::load_from_file(&config.model_path)?;
                if model.num_features() != FamilyRankingFeatures::LEN {
                    return Err(NameDividerError::Validation(format!(
                        "Model expects {} features, ranking features have {}",
                        model.num_features(),
                        FamilyRankingFeatures::LEN
                    )));
                }
                let extractor =
                    FamilyRankingFeatureExtractor::new(store, family_names, config.cache_mask);
                info!("🌲 GBDT divider ready ({})", config.algorithm_name());
                Self::with_scorer(config, LearnedModelScorer::new(extractor, model))
            }
        }
    }

    pub fn from_version(version: NameDividerVersion, paths: DataPaths) -> NdResult<Self> {
        Self::from_config(NameDividerConfig::from_version(version, paths))
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    /// Raw score of one candidate split.
    pub fn calc_score(&self, family: &str, given: &str) -> f64 {
        self.scorer.calc_score(family, given)
    }

    /// Divides one undivided full name.
    ///
    /// Fails with [`NameDividerError::InvalidInput`] for names shorter than
    /// two characters. The returned parts use the caller's original spelling
    /// even when variant kanji were normalized for scoring.
    pub fn divide_name(&self, undivided_name: &str) -> NdResult<DividedName> {
        if undivided_name.chars().count() < 2 {
            return Err(NameDividerError::InvalidInput(undivided_name.to_string()));
        }

        if !self.normalize_name {
            return Ok(self.divide_normalized(undivided_name));
        }
        let name = UndividedName::new(undivided_name);
        let divided = self.divide_normalized(name.normalized());
        Ok(name.restore(divided))
    }

    /// Divides every name independently in parallel; results keep input order.
    pub fn divide_names<S: AsRef<str> + Sync>(&self, names: &[S]) -> Vec<NdResult<DividedName>> {
        names
            .par_iter()
            .map(|name| self.divide_name(name.as_ref()))
            .collect()
    }

    fn divide_normalized(&self, name: &str) -> DividedName {
        if let Some(divided) = self.pipeline.apply(name) {
            return divided;
        }
        self.divide_by_score(name)
    }

    fn divide_by_score(&self, name: &str) -> DividedName {
        let chars: Vec<char> = name.chars().collect();
        let scores: Vec<f64> = (1..chars.len())
            .map(|family_len| {
                let (family, given) = split_chars(&chars, family_len);
                self.scorer.calc_score(&family, &given)
            })
            .collect();

        let probabilities = softmax(&scores);
        let best = argmax(&probabilities).unwrap_or(0);
        let (family, given) = split_chars(&chars, best + 1);
        debug!(
            "Scored {} splits of '{}', best {}|{} p={:.4}",
            scores.len(),
            name,
            family,
            given,
            probabilities[best]
        );

        DividedName::new(
            family,
            given,
            self.separator.as_str(),
            probabilities[best],
            self.algorithm_name.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FamilyLengthScorer;

    impl Scorer for FamilyLengthScorer {
        fn calc_score(&self, family: &str, _given: &str) -> f64 {
            family.chars().count() as f64
        }
    }

    fn divider(normalize_name: bool) -> NameDivider {
        let config = NameDividerConfig::builder()
            .normalize_name(normalize_name)
            .algorithm_name("test")
            .build();
        NameDivider::with_scorer(config, FamilyLengthScorer).unwrap()
    }

    #[test]
    fn test_rejects_single_character() {
        let err = divider(true).divide_name("原").unwrap_err();
        assert!(matches!(err, NameDividerError::InvalidInput(_)));
        assert!(divider(true).divide_name("").is_err());
    }

    #[test]
    fn test_rules_short_circuit_scoring() {
        let divided = divider(true).divide_name("中山マサ").unwrap();
        assert_eq!(divided.family, "中山");
        assert_eq!(divided.score, 1.0);
        assert_eq!(divided.algorithm, "rule");
    }

    #[test]
    fn test_statistical_path_reports_probability() {
        let divided = divider(true).divide_name("菅義偉").unwrap();
        assert_eq!(divided.family, "菅義");
        assert_eq!(divided.given, "偉");
        assert_eq!(divided.algorithm, "test");
        assert!((divided.score - 0.7310585786300049).abs() < 1e-12);
    }

    #[test]
    fn test_batch_keeps_order() {
        let results = divider(true).divide_names(&["中山マサ", "原", "菅義偉"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().family, "中山");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().given, "偉");
    }
}
