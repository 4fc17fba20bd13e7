use crate::error::NdResult;
use fnv::FnvHashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Known family names ranked by frequency, most common first.
#[derive(Debug, Clone, Default)]
pub struct FamilyNameRepository {
    ranks: FnvHashMap<String, usize>,
}

impl FamilyNameRepository {
    /// Builds the table from names in rank order. A repeated name takes the
    /// rank of its last occurrence, matching tables the models were trained on.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = FnvHashMap::default();
        for (rank, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            ranks.insert(name.to_string(), rank);
        }
        Self { ranks }
    }

    /// One family name per line; line order is the rank.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NdResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let repo = Self::from_names(content.lines());
        info!("📚 Loaded {} ranked family names from {:?}", repo.len(), path);
        Ok(repo)
    }

    pub fn exists(&self, family: &str) -> bool {
        self.ranks.contains_key(family)
    }

    /// Rank of `family`, or NaN when the name is not in the table.
    pub fn get_rank(&self, family: &str) -> f64 {
        self.ranks
            .get(family)
            .map(|&rank| rank as f64)
            .unwrap_or(f64::NAN)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
