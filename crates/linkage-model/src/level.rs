//! The comparison level entity and its raw mapping form.

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result, SqlDialect};

/// Raw mapping form of a comparison level.
///
/// Absent keys stay absent through serialization: `is_null_level: None` and
/// `is_null_level: Some(false)` are different settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelSettings {
    pub sql_condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_for_charts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_null_level: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m_probability: Option<f64>,
}

impl LevelSettings {
    pub fn new(sql_condition: impl Into<String>) -> Self {
        Self {
            sql_condition: sql_condition.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label_for_charts = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_null_level(mut self, is_null_level: bool) -> Self {
        self.is_null_level = Some(is_null_level);
        self
    }

    #[must_use]
    pub fn with_m_probability(mut self, m_probability: f64) -> Self {
        self.m_probability = Some(m_probability);
        self
    }
}

/// A validated comparison level, optionally bound to a SQL dialect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonLevel {
    #[serde(flatten)]
    settings: LevelSettings,
    #[serde(rename = "sql_dialect", skip_serializing_if = "Option::is_none")]
    dialect: Option<SqlDialect>,
}

impl ComparisonLevel {
    /// Builds a level from its mapping form.
    ///
    /// The condition must not be blank and `m_probability`, when present, must
    /// lie within `[0, 1]`.
    pub fn new(settings: LevelSettings, dialect: Option<SqlDialect>) -> Result<Self> {
        if settings.sql_condition.trim().is_empty() {
            return Err(ModelError::EmptyCondition);
        }
        if let Some(probability) = settings.m_probability
            && !(0.0..=1.0).contains(&probability)
        {
            return Err(ModelError::InvalidProbability(probability));
        }
        Ok(Self { settings, dialect })
    }

    pub fn sql_condition(&self) -> &str {
        &self.settings.sql_condition
    }

    /// Label for charts, falling back to the raw condition.
    pub fn label_for_charts(&self) -> &str {
        self.settings
            .label_for_charts
            .as_deref()
            .unwrap_or(&self.settings.sql_condition)
    }

    pub fn explicit_label(&self) -> Option<&str> {
        self.settings.label_for_charts.as_deref()
    }

    pub fn is_null_level(&self) -> bool {
        self.settings.is_null_level.unwrap_or(false)
    }

    /// The null-level flag as stored, distinguishing absent from `false`.
    pub fn null_level_flag(&self) -> Option<bool> {
        self.settings.is_null_level
    }

    pub fn m_probability(&self) -> Option<f64> {
        self.settings.m_probability
    }

    pub fn dialect(&self) -> Option<&SqlDialect> {
        self.dialect.as_ref()
    }

    /// Serializes back to the mapping form (without the dialect tag).
    pub fn as_settings(&self) -> LevelSettings {
        self.settings.clone()
    }
}

impl TryFrom<LevelSettings> for ComparisonLevel {
    type Error = ModelError;

    fn try_from(settings: LevelSettings) -> Result<Self> {
        Self::new(settings, None)
    }
}
