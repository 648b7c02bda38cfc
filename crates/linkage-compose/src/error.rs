use linkage_model::{ModelError, SqlDialect};
use thiserror::Error;

use crate::LogicalOperator;

/// Failures of a composition call. No output is produced when one occurs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error("{operator} requires at least one comparison level")]
    EmptyComposition { operator: LogicalOperator },
    #[error(
        "cannot combine comparison levels with different SQL dialects: {}",
        join_dialects(.dialects)
    )]
    DialectConflict { dialects: Vec<SqlDialect> },
    #[error("{operator} takes exactly {expected} comparison level(s), got {actual}")]
    Arity {
        operator: LogicalOperator,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}

fn join_dialects(dialects: &[SqlDialect]) -> String {
    dialects
        .iter()
        .map(SqlDialect::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ComposeError>;
