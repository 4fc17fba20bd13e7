pub mod extractor;
pub mod mask;
pub mod scores;

pub use self::extractor::{
    FamilyRankingFeatureExtractor, FamilyRankingFeatures, SimpleFeatureExtractor, SimpleFeatures,
};
pub use self::mask::MaskCache;
pub use self::scores::{calc_length_score, calc_order_score};
