use crate::error::{NameDividerError, NdResult};
use crate::rule::{Rule, SpecificFamilyNameRule, SpecificGivenNameRule};
use clap::Args;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;

pub const DEFAULT_STATISTICS_PATH: &str = "data/kanji.csv";
pub const DEFAULT_FAMILY_NAMES_PATH: &str = "data/family_names.txt";
pub const DEFAULT_MODEL_PATH: &str = "data/gbdt_model.json";

/// Which scorer ranks the candidate splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ScorerBackend {
    /// Order/length statistics blended by hand.
    #[default]
    #[strum(serialize = "basic")]
    KanjiFeature,
    /// Ranking features fed to a gradient-boosted tree model.
    Gbdt,
}

impl ScorerBackend {
    /// Case-sensitive; anything but "basic" or "gbdt" is a configuration error.
    pub fn parse(raw: &str) -> NdResult<Self> {
        Self::from_str(raw).map_err(|_| {
            NameDividerError::Config(format!(
                "Invalid backend '{}'. Valid backends are: basic, gbdt",
                raw
            ))
        })
    }

    pub fn default_algorithm_name(self) -> &'static str {
        match self {
            ScorerBackend::KanjiFeature => "kanji_feature",
            ScorerBackend::Gbdt => "gbdt",
        }
    }
}

/// Named behaviour presets. Older presets keep their historical scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum NameDividerVersion {
    /// No normalization, order score only for 4-character names.
    BasicV1,
    BasicV2,
    BasicLatest,
    GbdtV1,
    GbdtLatest,
}

impl NameDividerVersion {
    pub fn backend(self) -> ScorerBackend {
        match self {
            NameDividerVersion::BasicV1
            | NameDividerVersion::BasicV2
            | NameDividerVersion::BasicLatest => ScorerBackend::KanjiFeature,
            NameDividerVersion::GbdtV1 | NameDividerVersion::GbdtLatest => ScorerBackend::Gbdt,
        }
    }
}

/// Where the static tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub statistics: PathBuf,
    pub family_names: PathBuf,
    pub model: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            statistics: PathBuf::from(DEFAULT_STATISTICS_PATH),
            family_names: PathBuf::from(DEFAULT_FAMILY_NAMES_PATH),
            model: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

#[derive(TypedBuilder, Clone)]
pub struct NameDividerConfig {
    #[builder(default = " ".to_string(), setter(into))]
    pub separator: String,
    /// Map old/variant kanji forms to their standard forms before dividing.
    #[builder(default = true)]
    pub normalize_name: bool,
    #[builder(default)]
    pub backend: ScorerBackend,
    /// Tag for statistical results; defaults to the backend's name.
    #[builder(default, setter(strip_option, into))]
    pub algorithm_name: Option<String>,
    #[builder(default = PathBuf::from(DEFAULT_STATISTICS_PATH), setter(into))]
    pub statistics_path: PathBuf,
    #[builder(default = PathBuf::from(DEFAULT_FAMILY_NAMES_PATH), setter(into))]
    pub family_names_path: PathBuf,
    #[builder(default = PathBuf::from(DEFAULT_MODEL_PATH), setter(into))]
    pub model_path: PathBuf,
    /// Drop the length score for 4-character names. Not recommended.
    #[builder(default = false)]
    pub only_order_score_when_4: bool,
    #[builder(default = true)]
    pub cache_mask: bool,
    /// Checked after the built-in rules, in order.
    #[builder(default)]
    pub custom_rules: Vec<Arc<dyn Rule>>,
}

impl fmt::Debug for NameDividerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameDividerConfig")
            .field("separator", &self.separator)
            .field("normalize_name", &self.normalize_name)
            .field("backend", &self.backend)
            .field("algorithm_name", &self.algorithm_name())
            .field("statistics_path", &self.statistics_path)
            .field("family_names_path", &self.family_names_path)
            .field("model_path", &self.model_path)
            .field("only_order_score_when_4", &self.only_order_score_when_4)
            .field("cache_mask", &self.cache_mask)
            .field("custom_rules", &self.custom_rules.len())
            .finish()
    }
}

impl NameDividerConfig {
    pub fn from_version(version: NameDividerVersion, paths: DataPaths) -> Self {
        let (normalize_name, only_order_score_when_4) = match version {
            NameDividerVersion::BasicV1 => (false, true),
            _ => (true, false),
        };
        Self {
            separator: " ".to_string(),
            normalize_name,
            backend: version.backend(),
            algorithm_name: None,
            statistics_path: paths.statistics,
            family_names_path: paths.family_names,
            model_path: paths.model,
            only_order_score_when_4,
            cache_mask: true,
            custom_rules: Vec::new(),
        }
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm_name
            .as_deref()
            .unwrap_or_else(|| self.backend.default_algorithm_name())
    }
}

/// Command-line view of [`NameDividerConfig`].
#[derive(Args, Debug, Clone)]
pub struct DividerArgs {
    /// Character statistics table (CSV)
    #[arg(long, default_value = DEFAULT_STATISTICS_PATH)]
    pub stats: PathBuf,

    /// Ranked family names, one per line (gbdt mode)
    #[arg(long, default_value = DEFAULT_FAMILY_NAMES_PATH)]
    pub family_names: PathBuf,

    /// Tree ensemble model (gbdt mode)
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Separator between family name and given name
    #[arg(short, long, default_value = " ")]
    pub separator: String,

    /// Divider mode: basic or gbdt
    #[arg(short, long, default_value = "basic", value_parser = ScorerBackend::parse)]
    pub mode: ScorerBackend,

    /// Start from a named preset (e.g. basic-v1); overrides --mode
    #[arg(long)]
    pub version_preset: Option<NameDividerVersion>,

    /// Divide names as written, without mapping variant kanji
    #[arg(long, default_value_t = false)]
    pub no_normalize: bool,

    /// Family names that always win, one per line
    #[arg(long)]
    pub family_rule_file: Option<PathBuf>,

    /// Given names that always win, one per line
    #[arg(long)]
    pub given_rule_file: Option<PathBuf>,
}

impl DividerArgs {
    pub fn to_config(&self) -> NdResult<NameDividerConfig> {
        let paths = DataPaths {
            statistics: self.stats.clone(),
            family_names: self.family_names.clone(),
            model: self.model.clone(),
        };
        let mut config = match self.version_preset {
            Some(version) => NameDividerConfig::from_version(version, paths),
            None => NameDividerConfig::builder()
                .backend(self.mode)
                .statistics_path(paths.statistics)
                .family_names_path(paths.family_names)
                .model_path(paths.model)
                .build(),
        };

        config.separator = self.separator.clone();
        if self.no_normalize {
            config.normalize_name = false;
        }
        if let Some(path) = &self.family_rule_file {
            config
                .custom_rules
                .push(Arc::new(SpecificFamilyNameRule::load_from_file(path)?));
        }
        if let Some(path) = &self.given_rule_file {
            config
                .custom_rules
                .push(Arc::new(SpecificGivenNameRule::load_from_file(path)?));
        }
        Ok(config)
    }
}
