use chrono::NaiveDate;
use rcalgrab::config::Config;
use rcalgrab::export::ExportFormat;
use rcalgrab::extract::{FLIGHT_PAIRING_DISTANCE, YEAR_ROLLOVER_DAYS};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rcalgrab.conf", name));
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let mut path = env::temp_dir();
    path.push("does_not_exist_rcalgrab.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).expect("defaults");
    assert_eq!(cfg.default_format, "table");
    assert_eq!(cfg.year_rollover_days, YEAR_ROLLOVER_DAYS);
    assert_eq!(cfg.pairing_distance, FLIGHT_PAIRING_DISTANCE);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let path = temp_conf(
        "partial",
        "default_format: json\nyear_rollover_days: 10\ndatabase: /tmp/custom.sqlite\n",
    );
    let cfg = Config::load_from(&path).expect("load partial config");

    assert_eq!(cfg.default_format, "json");
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.pairing_distance, FLIGHT_PAIRING_DISTANCE);
    assert_eq!(ExportFormat::from_config(&cfg.default_format), Some(ExportFormat::Json));

    let today = NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");
    let opts = cfg.extract_options(today);
    assert_eq!(opts.today, today);
    assert_eq!(opts.year_rollover_days, 10);
}

#[test]
fn test_invalid_values_are_rejected() {
    let path = temp_conf("negative", "year_rollover_days: -5\n");
    assert!(Config::load_from(&path).is_err());

    let path = temp_conf("garbage", "pairing_distance: [not, a, number]\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_yaml_round_trip_of_defaults() {
    let cfg = Config::default();
    let yaml = cfg.to_yaml().expect("serialize");
    assert!(yaml.contains("calendar_base_url"));

    let back: Config = serde_yaml::from_str(&yaml).expect("parse back");
    assert_eq!(back, cfg);
}
