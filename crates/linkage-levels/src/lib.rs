//! Ready-made comparison levels bound to a SQL dialect.
//!
//! Column names are given without the `_l` / `_r` suffix; the library adds
//! the suffixes and quotes identifiers for the dialect.

#![deny(unsafe_code)]

use linkage_model::{ComparisonLevel, LevelSettings, ModelError, Result, SqlDialect};
use tracing::trace;

/// Builds common comparison levels for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLibrary {
    dialect: SqlDialect,
}

impl LevelLibrary {
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &SqlDialect {
        &self.dialect
    }

    /// Either side of the pair is missing a value.
    pub fn null_level(&self, column: &str) -> Result<ComparisonLevel> {
        let (left, right) = self.pair(column)?;
        self.build(
            LevelSettings::new(format!("{left} IS NULL OR {right} IS NULL"))
                .with_label("Null")
                .with_null_level(true),
        )
    }

    pub fn exact_match_level(&self, column: &str) -> Result<ComparisonLevel> {
        let (left, right) = self.pair(column)?;
        self.build(LevelSettings::new(format!("{left} = {right}")).with_label("Exact match"))
    }

    pub fn levenshtein_level(&self, column: &str, threshold: usize) -> Result<ComparisonLevel> {
        let (left, right) = self.pair(column)?;
        let function = self.levenshtein_function();
        self.build(
            LevelSettings::new(format!("{function}({left}, {right}) <= {threshold}"))
                .with_label(format!("Levenshtein <= {threshold}")),
        )
    }

    /// Catch-all level for every remaining comparison.
    pub fn else_level(&self) -> Result<ComparisonLevel> {
        self.build(LevelSettings::new("ELSE").with_label("All other comparisons"))
    }

    fn levenshtein_function(&self) -> &'static str {
        match self.dialect.as_str() {
            "athena" => "levenshtein_distance",
            _ => "levenshtein",
        }
    }

    fn pair(&self, column: &str) -> Result<(String, String)> {
        let column = column.trim();
        if column.is_empty() {
            return Err(ModelError::InvalidColumn(column.to_string()));
        }
        Ok((
            self.dialect.quote_identifier(&format!("{column}_l")),
            self.dialect.quote_identifier(&format!("{column}_r")),
        ))
    }

    fn build(&self, settings: LevelSettings) -> Result<ComparisonLevel> {
        trace!(dialect = %self.dialect, sql_condition = %settings.sql_condition, "built library level");
        ComparisonLevel::new(settings, Some(self.dialect.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(dialect: &str) -> LevelLibrary {
        LevelLibrary::new(SqlDialect::new(dialect).unwrap())
    }

    #[test]
    fn null_level_is_flagged() {
        let level = library("duckdb").null_level("first_name").unwrap();
        assert_eq!(
            level.sql_condition(),
            r#""first_name_l" IS NULL OR "first_name_r" IS NULL"#
        );
        assert!(level.is_null_level());
        assert_eq!(level.label_for_charts(), "Null");
        assert_eq!(level.dialect().map(SqlDialect::as_str), Some("duckdb"));
    }

    #[test]
    fn spark_quotes_with_backticks() {
        let level = library("spark").exact_match_level("dob").unwrap();
        assert_eq!(level.sql_condition(), "`dob_l` = `dob_r`");
    }

    #[test]
    fn athena_uses_levenshtein_distance() {
        let level = library("athena").levenshtein_level("name", 2).unwrap();
        assert_eq!(
            level.sql_condition(),
            r#"levenshtein_distance("name_l", "name_r") <= 2"#
        );
        assert_eq!(level.label_for_charts(), "Levenshtein <= 2");
    }

    #[test]
    fn blank_column_is_rejected() {
        let err = library("duckdb").exact_match_level("  ").unwrap_err();
        assert_eq!(err, ModelError::InvalidColumn(String::new()));
    }

    #[test]
    fn else_level_has_no_null_flag() {
        let level = library("sqlite").else_level().unwrap();
        assert_eq!(level.sql_condition(), "ELSE");
        assert_eq!(level.null_level_flag(), None);
    }
}
