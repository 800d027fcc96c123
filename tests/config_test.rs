mod common;

use support_triage::*;

#[test]
fn test_default_config() {
    let config = TriageConfig::default();

    assert_eq!(config.placeholder, "[REDACTED]");
    let names: Vec<&str> = config.patterns.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["email", "phone", "card", "order_id"]);
    assert_eq!(config.entity_labels, ["LOC", "PERSON", "GPE", "NORP", "FAC"]);
    assert!(config.trace.project.is_none());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = TriageConfig::from_json_str(
        r#"{ "placeholder": "[PII]", "trace": { "project": "support-eu" } }"#,
    )
    .unwrap();

    assert_eq!(config.placeholder, "[PII]");
    assert_eq!(config.patterns, default_pattern_rules());
    assert_eq!(config.trace.project.as_deref(), Some("support-eu"));
    assert!(config.trace.endpoint.is_none());
}

#[test]
fn test_custom_rules_from_json() {
    let config = TriageConfig::from_json_str(
        r#"{
            "patterns": [
                { "name": "ticket", "pattern": "TCK-\\d+", "replacement": "[TICKET]" }
            ],
            "entity_labels": ["PERSON"]
        }"#,
    )
    .unwrap();
    let redactor = Redactor::new(&config).unwrap();

    assert_eq!(redactor.redact_patterns("see tck-42"), "see [TICKET]");
    assert_eq!(redactor.redact_patterns("mail a@b.com"), "mail a@b.com");
    assert_eq!(redactor.entity_labels(), ["PERSON"]);
}

#[test]
fn test_invalid_regex_is_reported() {
    let config = TriageConfig {
        patterns: vec![PatternRule::new("broken", "(unclosed")],
        ..TriageConfig::default()
    };

    match Redactor::new(&config) {
        Err(TriageError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn test_empty_placeholder_is_rejected() {
    let result = TriageConfig::from_json_str(r#"{ "placeholder": "" }"#);
    assert!(matches!(result, Err(TriageError::Config(_))));
}

#[test]
fn test_empty_pattern_is_rejected() {
    let result = TriageConfig::from_json_str(r#"{ "patterns": [{ "name": "x", "pattern": "" }] }"#);
    assert!(matches!(result, Err(TriageError::Config(_))));
}

#[test]
fn test_malformed_json() {
    let result = TriageConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(TriageError::Json(_))));
}

#[test]
fn test_from_path() {
    let path = common::temp_path("config.json");
    std::fs::write(&path, r#"{ "trace": { "project": "nightly", "endpoint": "http://collector" } }"#)
        .unwrap();

    let config = TriageConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.trace.endpoint.as_deref(), Some("http://collector"));
    assert_eq!(config.with_trace_project("other").trace.project.as_deref(), Some("other"));
}

#[test]
fn test_missing_config_file() {
    let result = TriageConfig::from_path(common::temp_path("missing.json"));
    assert!(matches!(result, Err(TriageError::Io(_))));
}
