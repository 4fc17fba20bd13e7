#![allow(dead_code)] // not every suite uses every helper

use namedivider::config::{NameDividerConfig, ScorerBackend};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const STATS_HEADER: &str = "kanji,order_family_first,order_family_other,order_family_last,\
order_given_first,order_given_other,order_given_last,\
length_family_1,length_family_2,length_family_3,length_family_4,\
length_given_1,length_given_2,length_given_3,length_given_4";

/// Builds a character statistics CSV row by row.
#[derive(Default)]
pub struct StatsBuilder {
    rows: Vec<String>,
}

impl StatsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kanji(mut self, c: char, order: [u32; 6], length: [u32; 8]) -> Self {
        let counts: Vec<String> = order
            .iter()
            .chain(length.iter())
            .map(|n| n.to_string())
            .collect();
        self.rows.push(format!("{},{}", c, counts.join(",")));
        self
    }

    pub fn raw_row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    pub fn to_csv(&self) -> String {
        let mut csv = String::from(STATS_HEADER);
        for row in &self.rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv.push('\n');
        csv
    }
}

/// 田中 only ever opens and closes two-character family names, 太郎 only
/// opens and closes two-character given names.
pub fn sample_stats() -> StatsBuilder {
    StatsBuilder::new()
        .kanji('田', [10, 0, 0, 0, 0, 0], [0, 10, 0, 0, 0, 0, 0, 0])
        .kanji('中', [0, 0, 10, 0, 0, 0], [0, 10, 0, 0, 0, 0, 0, 0])
        .kanji('太', [0, 0, 0, 10, 0, 0], [0, 0, 0, 0, 0, 10, 0, 0])
        .kanji('郎', [0, 0, 0, 0, 0, 10], [0, 0, 0, 0, 0, 10, 0, 0])
}

/// softmax([0, 1, 0])[1]: the score of 田中|太郎 against the sample tables.
pub const SAMPLE_SCORE: f64 = 0.5761168847658291;

/// Splits on family_order_score (feature 4): a clean family ending wins.
pub const SAMPLE_MODEL: &str = r#"{
    "num_features": 9,
    "objective": "binary",
    "base_score": 0.0,
    "trees": [
        { "nodes": [
            { "feature": 4, "threshold": 0.5, "left": 1, "right": 2, "default_left": true },
            { "leaf": -1.0 },
            { "leaf": 1.0 }
        ] }
    ]
}"#;

/// On-disk tables in a temp dir that lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub stats_path: PathBuf,
    pub family_names_path: PathBuf,
    pub model_path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_stats(&sample_stats())
    }

    pub fn with_stats(stats: &StatsBuilder) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let stats_path = dir.path().join("kanji.csv");
        let family_names_path = dir.path().join("family_names.txt");
        let model_path = dir.path().join("gbdt_model.json");

        fs::write(&stats_path, stats.to_csv()).unwrap();
        fs::write(&family_names_path, "佐藤\n鈴木\n田中\n").unwrap();
        fs::write(&model_path, SAMPLE_MODEL).unwrap();

        Self {
            _dir: dir,
            stats_path,
            family_names_path,
            model_path,
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.stats_path.with_file_name(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn config(&self, backend: ScorerBackend) -> NameDividerConfig {
        NameDividerConfig::builder()
            .backend(backend)
            .statistics_path(self.stats_path.clone())
            .family_names_path(self.family_names_path.clone())
            .model_path(self.model_path.clone())
            .build()
    }

    pub fn paths(&self) -> namedivider::DataPaths {
        namedivider::DataPaths {
            statistics: self.stats_path.clone(),
            family_names: self.family_names_path.clone(),
            model: self.model_path.clone(),
        }
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}
