//! SQL dialect tags.
//!
//! A dialect is an opaque tag naming the SQL variant a condition is written
//! in. Tags compare by equality after trimming and lower-casing; nothing here
//! checks grammar. The only per-dialect knowledge is the identifier quote
//! character, which column standardization needs to recognise quoted names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Dialect tags with known identifier quoting.
pub const KNOWN_DIALECTS: &[&str] = &["athena", "bigquery", "duckdb", "postgres", "spark", "sqlite"];

/// Identifier quote used when no dialect (or an unknown one) is in play.
pub const DEFAULT_IDENTIFIER_QUOTE: char = '"';

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SqlDialect(String);

impl SqlDialect {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidDialect(value));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_DIALECTS.contains(&self.0.as_str())
    }

    /// Character used to quote identifiers in this dialect.
    pub fn identifier_quote(&self) -> char {
        match self.0.as_str() {
            "spark" | "bigquery" => '`',
            _ => DEFAULT_IDENTIFIER_QUOTE,
        }
    }

    /// Wraps `identifier` in this dialect's quote character.
    pub fn quote_identifier(&self, identifier: &str) -> String {
        quote_with(self.identifier_quote(), identifier)
    }
}

/// Quote character for an optional dialect.
pub fn identifier_quote(dialect: Option<&SqlDialect>) -> char {
    dialect.map_or(DEFAULT_IDENTIFIER_QUOTE, SqlDialect::identifier_quote)
}

pub(crate) fn quote_with(quote: char, identifier: &str) -> String {
    let escaped = identifier.replace(quote, &format!("{quote}{quote}"));
    format!("{quote}{escaped}{quote}")
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SqlDialect {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SqlDialect {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SqlDialect> for String {
    fn from(dialect: SqlDialect) -> Self {
        dialect.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_lowercased() {
        let dialect = SqlDialect::new("  DuckDB ").unwrap();
        assert_eq!(dialect.as_str(), "duckdb");
        assert_eq!(dialect, "duckdb".parse().unwrap());
        assert!(dialect.is_known());
    }

    #[test]
    fn blank_tag_is_rejected() {
        assert_eq!(
            SqlDialect::new("   "),
            Err(ModelError::InvalidDialect("   ".to_string()))
        );
    }

    #[test]
    fn unknown_tags_are_accepted_with_default_quote() {
        let dialect = SqlDialect::new("oracle").unwrap();
        assert!(!dialect.is_known());
        assert_eq!(dialect.identifier_quote(), '"');
    }

    #[test]
    fn spark_quotes_with_backticks() {
        let spark = SqlDialect::new("spark").unwrap();
        assert_eq!(spark.quote_identifier("first_name_l"), "`first_name_l`");
        assert_eq!(identifier_quote(None), '"');
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let duckdb = SqlDialect::new("duckdb").unwrap();
        assert_eq!(duckdb.quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
