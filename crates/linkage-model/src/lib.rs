//! Comparison level model for probabilistic record linkage.
//!
//! A comparison level pairs a SQL boolean condition over a left/right record
//! pair with the metadata the matching pipeline needs: a chart label, an
//! optional starting `m` probability and the null-level flag.

#![deny(unsafe_code)]

pub mod dialect;
pub mod error;
pub mod level;
pub mod sql;

pub use dialect::SqlDialect;
pub use error::{ModelError, Result};
pub use level::{ComparisonLevel, LevelSettings};
pub use sql::standardise_colnames_in_sql;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_keeps_absent_keys_absent() {
        let settings = LevelSettings::new("name_l = name_r").with_label("Exact match");
        let json = serde_json::to_string(&settings).expect("serialize settings");
        assert_eq!(
            json,
            r#"{"sql_condition":"name_l = name_r","label_for_charts":"Exact match"}"#
        );
        let round: LevelSettings = serde_json::from_str(&json).expect("deserialize settings");
        assert_eq!(round, settings);
    }

    #[test]
    fn level_keeps_dialect_tag() {
        let dialect = SqlDialect::new("DuckDB").unwrap();
        let level = ComparisonLevel::new(LevelSettings::new("x"), Some(dialect.clone())).unwrap();
        assert_eq!(level.dialect(), Some(&dialect));
    }
}
