// tests/unit_config.rs
use std::fs;
use std::path::PathBuf;

use mailrank_core::config::{Config, RankConfig, CONFIG_FILE};
use mailrank_core::error::MailRankError;

#[test]
fn test_defaults() {
    let r = RankConfig::default();
    assert!((r.damping_factor - 0.85).abs() < f64::EPSILON);
    assert!((r.tolerance - 1e-6).abs() < f64::EPSILON);
    assert_eq!(r.max_iterations, 100);
    assert!((r.score_threshold - 0.005).abs() < f64::EPSILON);
    assert!(r.validate().is_ok());
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[rank]\ndamping_factor = 0.9\nmax_iterations = 50\n\n[input]\nemails = \"data/mail.csv\"\n",
    )
    .unwrap();
    let c = Config::load_from(d.path()).unwrap();
    assert!((c.rank.damping_factor - 0.9).abs() < f64::EPSILON);
    assert_eq!(c.rank.max_iterations, 50);
    assert!((c.rank.tolerance - 1e-6).abs() < f64::EPSILON);
    assert_eq!(c.input.emails, PathBuf::from("data/mail.csv"));
    assert_eq!(c.input.from_column, "MetadataFrom");
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load_from(d.path()).unwrap();
    assert_eq!(c.rank, RankConfig::default());
}

#[test]
fn test_malformed_toml_is_error() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[rank\ndamping_factor = ").unwrap();
    assert!(matches!(
        Config::load_from(d.path()),
        Err(MailRankError::Toml(_))
    ));
}

#[test]
fn test_damping_out_of_range() {
    for damping in [1.0, 1.5, -0.1, f64::NAN] {
        let r = RankConfig {
            damping_factor: damping,
            ..RankConfig::default()
        };
        assert!(
            matches!(r.validate(), Err(MailRankError::InvalidConfig(_))),
            "damping {damping} accepted"
        );
    }
    let zero = RankConfig {
        damping_factor: 0.0,
        ..RankConfig::default()
    };
    assert!(zero.validate().is_ok());
}

#[test]
fn test_bad_tolerance_and_iterations() {
    let no_iterations = RankConfig {
        max_iterations: 0,
        ..RankConfig::default()
    };
    assert!(no_iterations.validate().is_err());

    for tolerance in [0.0, -1e-6, f64::INFINITY] {
        let r = RankConfig {
            tolerance,
            ..RankConfig::default()
        };
        assert!(r.validate().is_err(), "tolerance {tolerance} accepted");
    }
}

#[test]
fn test_negative_threshold() {
    let r = RankConfig {
        score_threshold: -0.5,
        ..RankConfig::default()
    };
    assert!(r.validate().is_err());
}

#[test]
fn test_config_validate_checks_rank() {
    let mut c = Config::new();
    assert!(c.validate().is_ok());
    c.rank.damping_factor = 2.0;
    assert!(c.validate().is_err());
}
