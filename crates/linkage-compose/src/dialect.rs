//! Dialect reconciliation.

use std::collections::BTreeSet;

use linkage_model::{ComparisonLevel, SqlDialect};

use crate::{ComposeError, Result};

/// Returns the single dialect shared by `levels`.
///
/// Untagged levels are compatible with anything. At most one distinct tag may
/// be present; levels written for different dialects are never mixed.
pub fn reconcile_dialects<'a, I>(levels: I) -> Result<Option<SqlDialect>>
where
    I: IntoIterator<Item = &'a ComparisonLevel>,
{
    let dialects: BTreeSet<&SqlDialect> = levels
        .into_iter()
        .filter_map(ComparisonLevel::dialect)
        .collect();

    let mut iter = dialects.iter();
    match (iter.next(), iter.next()) {
        (None, _) => Ok(None),
        (Some(dialect), None) => Ok(Some((*dialect).clone())),
        (Some(_), Some(_)) => Err(ComposeError::DialectConflict {
            dialects: dialects.into_iter().cloned().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use linkage_model::LevelSettings;

    use super::*;

    fn level(dialect: Option<&str>) -> ComparisonLevel {
        ComparisonLevel::new(
            LevelSettings::new("x"),
            dialect.map(|name| SqlDialect::new(name).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn no_tags_reconcile_to_none() {
        let levels = [level(None), level(None)];
        assert_eq!(reconcile_dialects(&levels).unwrap(), None);
    }

    #[test]
    fn single_tag_wins_over_untagged() {
        let levels = [level(None), level(Some("duckdb")), level(Some("DUCKDB"))];
        assert_eq!(
            reconcile_dialects(&levels).unwrap(),
            Some(SqlDialect::new("duckdb").unwrap())
        );
    }

    #[test]
    fn distinct_tags_conflict() {
        let levels = [level(Some("spark")), level(None), level(Some("duckdb"))];
        let err = reconcile_dialects(&levels).unwrap_err();
        assert_eq!(
            err,
            ComposeError::DialectConflict {
                dialects: vec![
                    SqlDialect::new("duckdb").unwrap(),
                    SqlDialect::new("spark").unwrap(),
                ],
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot combine comparison levels with different SQL dialects: duckdb, spark"
        );
    }
}
