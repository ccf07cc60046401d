use lore_core::config::*;
use lore_core::LoreError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LoreConfig::from_toml("").unwrap();

    // Contradiction defaults
    assert_eq!(config.contradiction.similarity_threshold, 0.85);
    assert_eq!(config.contradiction.min_confidence_delta, 0.1);
    assert!(!config.contradiction.same_kind_only);
    assert_eq!(config.contradiction.conflict_threshold, 0.85);

    // Clustering defaults
    assert_eq!(config.clustering.similarity_threshold, 0.75);
    assert_eq!(config.clustering.min_cluster_size, 2);
    assert_eq!(config.clustering.max_clusters, 10);

    // Analysis defaults
    assert_eq!(config.analysis.theme_cluster_size, 5);
    assert_eq!(config.analysis.recurring_error_count, 3);
    assert_eq!(config.analysis.unused_ratio, 0.3);
    assert_eq!(config.analysis.tag_suggestion_min_cluster_size, 3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[contradiction]
similarity_threshold = 0.9
same_kind_only = true

[clustering]
max_clusters = 4
"#;
    let config = LoreConfig::from_toml(toml).unwrap();
    assert_eq!(config.contradiction.similarity_threshold, 0.9);
    assert!(config.contradiction.same_kind_only);
    // Non-overridden fields keep defaults
    assert_eq!(config.contradiction.min_confidence_delta, 0.1);
    assert_eq!(config.clustering.max_clusters, 4);
    assert_eq!(config.clustering.min_cluster_size, 2);

    let opts = config.contradiction.detection_options();
    assert_eq!(opts.similarity_threshold, 0.9);
    assert!(opts.same_kind_only);
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let toml = r#"
[contradiction]
similarity_threshold = 0.0
"#;
    let err = LoreConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, LoreError::InvalidOptions { ref field, .. } if field == "similarity_threshold"));
}

#[test]
fn config_rejects_zero_max_clusters() {
    let toml = r#"
[clustering]
max_clusters = 0
"#;
    let err = LoreConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, LoreError::InvalidOptions { ref field, .. } if field == "max_clusters"));
}

#[test]
fn config_rejects_malformed_toml() {
    let err = LoreConfig::from_toml("[clustering\nmax_clusters = 3").unwrap_err();
    assert!(matches!(err, LoreError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let config = LoreConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = LoreConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.clustering, config.clustering);
    assert_eq!(
        roundtripped.contradiction.conflict_threshold,
        config.contradiction.conflict_threshold
    );
}

#[test]
fn detection_options_accept_full_range() {
    let opts = DetectionOptions {
        similarity_threshold: 1.0,
        min_confidence_delta: 0.0,
        same_kind_only: false,
    };
    assert!(opts.validate().is_ok());

    let opts = DetectionOptions {
        min_confidence_delta: 1.5,
        ..DetectionOptions::default()
    };
    assert!(opts.validate().is_err());
}
