use safeall::config::Config;
use safeall::error::ConfigError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn defaults_match_shipped_figures() {
    let config = Config::load_or_default(None).unwrap();
    assert_eq!(config.analysis.high_risk_quantile, 0.9);
    assert_eq!(config.analysis.max_response_minutes, 720.0);
    assert_eq!(config.analysis.lives_saved_fraction, 0.2);
    assert_eq!(config.analysis.cost_per_life_units, 1.6);
    assert_eq!(config.report.target_minutes, 15.0);
    assert_eq!(config.report.survival_increase_pct, 20);
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let file = write_config(
        "[analysis]\nhigh_risk_quantile = 0.75\n\n[report]\ntarget_minutes = 12.0\n",
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.analysis.high_risk_quantile, 0.75);
    assert_eq!(config.analysis.max_response_minutes, 720.0);
    assert_eq!(config.report.target_minutes, 12.0);
    assert_eq!(config.report.survival_increase_pct, 20);
}

#[test]
fn out_of_range_quantile_is_rejected() {
    let file = write_config("[analysis]\nhigh_risk_quantile = 1.5\n");
    match Config::load(file.path()) {
        Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "analysis.high_risk_quantile"),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn non_positive_target_is_rejected() {
    let file = write_config("[report]\ntarget_minutes = 0.0\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(ConfigError::Invalid { field: "report.target_minutes", .. })
    ));
}

#[test]
fn unknown_keys_are_parse_errors() {
    let file = write_config("[analysis]\nquantile = 0.9\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(Config::load(&path), Err(ConfigError::Read { .. })));
}
