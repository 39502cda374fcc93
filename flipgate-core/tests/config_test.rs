//! Configuration loading from TOML files.

use std::io::Write;

use flipgate_core::config::EngineConfig;
use flipgate_core::types::CanonicalUnit;

#[test]
fn load_reads_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [gates]
        variance_tier1_pct = 4.0
        critical_trades = ["roofing"]

        [panels]
        event_window_days = 14
        "#
    )
    .unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.gates.variance_tier1_pct, 4.0);
    assert!(config.gates.is_critical_trade("Roofing"));
    assert!(!config.gates.is_critical_trade("drywall"));
    assert_eq!(config.panels.event_window_days, 14);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = EngineConfig::load(std::path::Path::new("/nonexistent/flipgate.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/flipgate.toml"));
}

#[test]
fn unit_table_survives_round_trip() {
    let config = EngineConfig::default();
    let text = toml::to_string(&config).unwrap();
    let back = EngineConfig::from_toml_str(&text).unwrap();
    let alias = back.units.lookup("squares").unwrap();
    assert_eq!(alias.unit, CanonicalUnit::Sqft);
    assert_eq!(alias.factor, 100.0);
}
