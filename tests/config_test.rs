mod common;

use clap::Parser;
use common::Fixture;
use namedivider::config::{
    DataPaths, DividerArgs, NameDividerConfig, NameDividerVersion, ScorerBackend,
    DEFAULT_STATISTICS_PATH,
};
use namedivider::NameDividerError;
use rstest::rstest;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    divider: DividerArgs,
}

#[test]
fn test_builder_defaults() {
    let config = NameDividerConfig::builder().build();
    assert_eq!(config.separator, " ");
    assert!(config.normalize_name);
    assert_eq!(config.backend, ScorerBackend::KanjiFeature);
    assert_eq!(config.algorithm_name(), "kanji_feature");
    assert_eq!(config.statistics_path, PathBuf::from(DEFAULT_STATISTICS_PATH));
    assert!(!config.only_order_score_when_4);
    assert!(config.cache_mask);
    assert!(config.custom_rules.is_empty());
}

#[test]
fn test_algorithm_name_override() {
    let config = NameDividerConfig::builder()
        .backend(ScorerBackend::Gbdt)
        .algorithm_name("my_model")
        .build();
    assert_eq!(config.algorithm_name(), "my_model");
}

#[rstest]
#[case(NameDividerVersion::BasicV1, false, true, ScorerBackend::KanjiFeature)]
#[case(NameDividerVersion::BasicV2, true, false, ScorerBackend::KanjiFeature)]
#[case(NameDividerVersion::BasicLatest, true, false, ScorerBackend::KanjiFeature)]
#[case(NameDividerVersion::GbdtV1, true, false, ScorerBackend::Gbdt)]
#[case(NameDividerVersion::GbdtLatest, true, false, ScorerBackend::Gbdt)]
fn test_version_presets(
    #[case] version: NameDividerVersion,
    #[case] normalize_name: bool,
    #[case] only_order_score_when_4: bool,
    #[case] backend: ScorerBackend,
) {
    let config = NameDividerConfig::from_version(version, DataPaths::default());
    assert_eq!(config.normalize_name, normalize_name);
    assert_eq!(config.only_order_score_when_4, only_order_score_when_4);
    assert_eq!(config.backend, backend);
}

#[test]
fn test_version_names_round_trip() {
    for version in NameDividerVersion::iter() {
        let name = version.to_string();
        assert_eq!(NameDividerVersion::from_str(&name).unwrap(), version);
    }
    assert_eq!(NameDividerVersion::BasicV1.to_string(), "basic-v1");
}

#[test]
fn test_backend_parsing() {
    assert_eq!(ScorerBackend::parse("basic").unwrap(), ScorerBackend::KanjiFeature);
    assert_eq!(ScorerBackend::parse("gbdt").unwrap(), ScorerBackend::Gbdt);
    let err = ScorerBackend::parse("bert").unwrap_err();
    assert!(matches!(err, NameDividerError::Config(_)));
}

#[test]
fn test_cli_args_map_onto_config() {
    let fixture = Fixture::new();
    let family_file = fixture.write("families.txt", "谷田部\n");
    let cli = TestCli::try_parse_from([
        "test",
        "--stats",
        fixture.stats_path.to_str().unwrap(),
        "-s",
        "/",
        "-m",
        "gbdt",
        "--no-normalize",
        "--family-rule-file",
        family_file.to_str().unwrap(),
    ])
    .unwrap();

    let config = cli.divider.to_config().unwrap();
    assert_eq!(config.separator, "/");
    assert_eq!(config.backend, ScorerBackend::Gbdt);
    assert!(!config.normalize_name);
    assert_eq!(config.statistics_path, fixture.stats_path);
    assert_eq!(config.custom_rules.len(), 1);
}

#[test]
fn test_cli_preset_overrides_mode() {
    let cli = TestCli::try_parse_from(["test", "--version-preset", "basic-v1", "-m", "gbdt"]).unwrap();
    let config = cli.divider.to_config().unwrap();
    assert_eq!(config.backend, ScorerBackend::KanjiFeature);
    assert!(config.only_order_score_when_4);
}

#[test]
fn test_cli_rejects_unknown_mode() {
    assert!(TestCli::try_parse_from(["test", "-m", "bert"]).is_err());
}

#[test]
fn test_cli_missing_rule_file_fails_config() {
    let cli =
        TestCli::try_parse_from(["test", "--given-rule-file", "/nonexistent/givens.txt"]).unwrap();
    assert!(matches!(
        cli.divider.to_config().unwrap_err(),
        NameDividerError::Io(_)
    ));
}
