//! Tests for linkage-model types.

use linkage_model::{ComparisonLevel, LevelSettings, ModelError, SqlDialect};

#[test]
fn settings_parse_from_mapping() {
    let settings: LevelSettings = serde_json::from_str(
        r#"{"sql_condition": "dob_l = dob_r", "is_null_level": false, "m_probability": 0.9}"#,
    )
    .expect("parse settings");
    assert_eq!(settings.sql_condition, "dob_l = dob_r");
    assert_eq!(settings.label_for_charts, None);
    assert_eq!(settings.is_null_level, Some(false));
    assert_eq!(settings.m_probability, Some(0.9));
}

#[test]
fn unknown_keys_are_rejected() {
    let result: Result<LevelSettings, _> =
        serde_json::from_str(r#"{"sql_condition": "x", "label": "typo"}"#);
    assert!(result.is_err());
}

#[test]
fn level_serializes_with_dialect_tag() {
    let level = ComparisonLevel::new(
        LevelSettings::new("email_l = email_r").with_label("Exact match"),
        Some(SqlDialect::new("spark").unwrap()),
    )
    .unwrap();
    let json = serde_json::to_value(&level).expect("serialize level");
    assert_eq!(
        json,
        serde_json::json!({
            "sql_condition": "email_l = email_r",
            "label_for_charts": "Exact match",
            "sql_dialect": "spark",
        })
    );
}

#[test]
fn untagged_level_omits_dialect() {
    let level = ComparisonLevel::try_from(LevelSettings::new("x").with_null_level(true)).unwrap();
    let json = serde_json::to_value(&level).expect("serialize level");
    assert_eq!(
        json,
        serde_json::json!({"sql_condition": "x", "is_null_level": true})
    );
}

#[test]
fn dialect_deserialization_validates() {
    let dialect: SqlDialect = serde_json::from_str(r#"" Postgres ""#).unwrap();
    assert_eq!(dialect.as_str(), "postgres");
    assert!(serde_json::from_str::<SqlDialect>(r#""""#).is_err());
}

#[test]
fn as_settings_round_trips() {
    let settings = LevelSettings::new("a_l = a_r")
        .with_label("A")
        .with_null_level(false)
        .with_m_probability(0.25);
    let level = ComparisonLevel::try_from(settings.clone()).unwrap();
    assert_eq!(level.as_settings(), settings);
    assert_eq!(
        ComparisonLevel::try_from(LevelSettings::default()),
        Err(ModelError::EmptyCondition)
    );
}
