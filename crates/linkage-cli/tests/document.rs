//! Integration tests for composition documents.

use linkage_cli::document::{ComposedLevels, CompositionDocument};
use linkage_cli::summary::levels_table;
use linkage_model::SqlDialect;

#[test]
fn composes_document_with_dialect() {
    let document = CompositionDocument::from_json(
        r#"{
            "and": [
                {"sql_condition": "a_l = a_r"},
                {"sql_condition": "b_l = b_r"}
            ]
        }"#,
    )
    .unwrap();
    let duckdb = SqlDialect::new("duckdb").unwrap();
    let composed = document.evaluate(Some(&duckdb)).unwrap();

    insta::assert_snapshot!(composed.to_json().unwrap(), @r#"
    {
      "sql_condition": "(a_l = a_r) AND (b_l = b_r)",
      "label_for_charts": "(a_l = a_r) AND (b_l = b_r)",
      "sql_dialect": "duckdb"
    }
    "#);
}

#[test]
fn null_override_and_probability_are_written() {
    let document = CompositionDocument::from_json(
        r#"[{
            "or": [
                {"sql_condition": "x"},
                {"sql_condition": "y", "is_null_level": true}
            ],
            "is_null_level": false,
            "m_probability": 0.25
        }]"#,
    )
    .unwrap();
    let composed = document.evaluate(None).unwrap();

    insta::assert_snapshot!(composed.to_json().unwrap(), @r#"
    [
      {
        "sql_condition": "(x) OR (y)",
        "label_for_charts": "(x) OR (y)",
        "is_null_level": false,
        "m_probability": 0.25
      }
    ]
    "#);
}

#[test]
fn negated_null_level_has_no_flag() {
    let document = CompositionDocument::from_json(
        r#"{"not": {"sql_condition": "a_l = a_r", "is_null_level": true}}"#,
    )
    .unwrap();
    let ComposedLevels::One(level) = document.evaluate(None).unwrap() else {
        panic!("expected a single level");
    };
    assert_eq!(level.null_level_flag(), None);
    assert_eq!(level.label_for_charts(), "NOT (a_l = a_r)");
}

#[test]
fn table_lists_every_level() {
    let document = CompositionDocument::from_json(
        r#"[{"sql_condition": "x"}, {"and": [{"sql_condition": "y"}]}]"#,
    )
    .unwrap();
    let composed = document.evaluate(None).unwrap();
    let rendered = levels_table(composed.levels()).to_string();
    assert!(rendered.contains("(y)"));
    assert_eq!(levels_table(composed.levels()).row_iter().count(), 2);
}
