pub mod family_names;
pub mod loader;

pub use self::family_names::FamilyNameRepository;

use crate::error::NdResult;
use fnv::FnvHashMap;
use std::path::Path;

/// Number of positional buckets in `order_counts`:
/// `[family_first, family_other, family_last, given_first, given_other, given_last]`.
pub const ORDER_BUCKETS: usize = 6;

/// Number of length buckets in `length_counts`:
/// `[family_1, family_2, family_3, family_4+, given_1, given_2, given_3, given_4+]`.
pub const LENGTH_BUCKETS: usize = 8;

/// Per-character frequency record.
///
/// `order_counts` tallies where the character appeared inside a family or given
/// name, `length_counts` tallies how long the containing part was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStatistics {
    pub character: char,
    pub order_counts: [u32; ORDER_BUCKETS],
    pub length_counts: [u32; LENGTH_BUCKETS],
}

impl CharacterStatistics {
    /// Zero record handed out for characters absent from the table.
    pub const UNKNOWN: CharacterStatistics = CharacterStatistics {
        character: '\0',
        order_counts: [0; ORDER_BUCKETS],
        length_counts: [0; LENGTH_BUCKETS],
    };
}

/// Immutable character -> statistics table, shared read-only by every scorer.
#[derive(Debug, Clone, Default)]
pub struct CharacterStatisticsStore {
    table: FnvHashMap<char, CharacterStatistics>,
}

impl CharacterStatisticsStore {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CharacterStatistics>,
    {
        let table = records.into_iter().map(|r| (r.character, r)).collect();
        Self { table }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NdResult<Self> {
        loader::load_statistics_from_path(path)
    }

    /// Never fails: unknown characters yield [`CharacterStatistics::UNKNOWN`].
    #[inline]
    pub fn get(&self, character: char) -> &CharacterStatistics {
        self.table
            .get(&character)
            .unwrap_or(&CharacterStatistics::UNKNOWN)
    }

    pub fn contains(&self, character: char) -> bool {
        self.table.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
