use std::borrow::Cow;

use linkage_model::{ComparisonLevel, SqlDialect, standardise_colnames_in_sql};

/// Text used for `level` inside a composed chart label.
///
/// Null levels render their condition with standardized column names, since
/// their SQL is usually generated and says more than a generic label.
pub fn effective_label<'a>(level: &'a ComparisonLevel, dialect: Option<&SqlDialect>) -> Cow<'a, str> {
    if level.is_null_level() {
        Cow::Owned(standardise_colnames_in_sql(level.sql_condition(), dialect))
    } else {
        Cow::Borrowed(level.label_for_charts())
    }
}
