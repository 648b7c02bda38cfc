//! AND / OR / NOT composition.

use std::fmt;

use linkage_model::{ComparisonLevel, LevelSettings, SqlDialect};
use tracing::{debug, trace};

use crate::input::normalize_inputs;
use crate::{ComposeError, LevelInput, Result, effective_label, reconcile_dialects};

/// Logical operator applied to comparison levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller overrides for [`and_`] and [`or_`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeOptions {
    /// Label used verbatim instead of the generated one. Empty means unset.
    pub label_for_charts: Option<String>,
    /// Starting `m` probability stored on the result.
    pub m_probability: Option<f64>,
    /// Null-level flag for the result, replacing the inferred one.
    pub is_null_level: Option<bool>,
}

impl ComposeOptions {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label_for_charts = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_m_probability(mut self, m_probability: f64) -> Self {
        self.m_probability = Some(m_probability);
        self
    }

    #[must_use]
    pub fn with_null_level(mut self, is_null_level: bool) -> Self {
        self.is_null_level = Some(is_null_level);
        self
    }
}

/// Caller overrides for [`not_`]. Negation takes no null-level override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NegateOptions {
    pub label_for_charts: Option<String>,
    pub m_probability: Option<f64>,
}

impl NegateOptions {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label_for_charts = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_m_probability(mut self, m_probability: f64) -> Self {
        self.m_probability = Some(m_probability);
        self
    }
}

/// Merges levels with a logical AND.
///
/// The condition is every input condition in parentheses, joined with
/// `" AND "` in input order. Unless overridden, the label mirrors that shape
/// and the result is a null level only when every input is one.
pub fn and_<I>(inputs: I, options: ComposeOptions) -> Result<ComparisonLevel>
where
    I: IntoIterator,
    I::Item: Into<LevelInput>,
{
    merge(inputs, LogicalOperator::And, options)
}

/// Merges levels with a logical OR. See [`and_`].
pub fn or_<I>(inputs: I, options: ComposeOptions) -> Result<ComparisonLevel>
where
    I: IntoIterator,
    I::Item: Into<LevelInput>,
{
    merge(inputs, LogicalOperator::Or, options)
}

/// Negates a level: `NOT (<condition>)`.
///
/// A negated null level is no longer a null level, so the result never
/// carries the flag.
pub fn not_(input: impl Into<LevelInput>, options: NegateOptions) -> Result<ComparisonLevel> {
    let level = input.into().into_level()?;
    let dialect = reconcile_dialects([&level])?;

    let sql_condition = format!("NOT ({})", level.sql_condition());
    let label = explicit(options.label_for_charts)
        .unwrap_or_else(|| format!("NOT ({})", effective_label(&level, dialect.as_ref())));
    build_level(
        LogicalOperator::Not,
        LevelSettings {
            sql_condition,
            label_for_charts: Some(label),
            // Negating a null level removes the classification.
            is_null_level: None,
            m_probability: options.m_probability,
        },
        dialect,
        1,
    )
}

fn merge<I>(inputs: I, operator: LogicalOperator, options: ComposeOptions) -> Result<ComparisonLevel>
where
    I: IntoIterator,
    I::Item: Into<LevelInput>,
{
    let levels = normalize_inputs(inputs)?;
    if levels.is_empty() {
        return Err(ComposeError::EmptyComposition { operator });
    }
    let dialect = reconcile_dialects(&levels)?;

    let separator = format!(" {operator} ");
    let sql_condition = join_parenthesized(
        levels.iter().map(ComparisonLevel::sql_condition),
        &separator,
    );
    let label = explicit(options.label_for_charts).unwrap_or_else(|| {
        join_parenthesized(
            levels
                .iter()
                .map(|level| effective_label(level, dialect.as_ref())),
            &separator,
        )
    });
    let is_null_level = options.is_null_level.or_else(|| {
        levels
            .iter()
            .all(ComparisonLevel::is_null_level)
            .then_some(true)
    });

    build_level(
        operator,
        LevelSettings {
            sql_condition,
            label_for_charts: Some(label),
            is_null_level,
            m_probability: options.m_probability,
        },
        dialect,
        levels.len(),
    )
}

fn explicit(label: Option<String>) -> Option<String> {
    label.filter(|label| !label.is_empty())
}

fn join_parenthesized<S: AsRef<str>>(parts: impl Iterator<Item = S>, separator: &str) -> String {
    parts
        .map(|part| format!("({})", part.as_ref()))
        .collect::<Vec<_>>()
        .join(separator)
}

fn build_level(
    operator: LogicalOperator,
    settings: LevelSettings,
    dialect: Option<SqlDialect>,
    inputs: usize,
) -> Result<ComparisonLevel> {
    let level = ComparisonLevel::new(settings, dialect)?;
    debug!(
        %operator,
        inputs,
        dialect = level.dialect().map(SqlDialect::as_str),
        is_null_level = level.null_level_flag(),
        "composed comparison level"
    );
    trace!(
        sql_condition = level.sql_condition(),
        label_for_charts = level.label_for_charts(),
        "composed condition"
    );
    Ok(level)
}
