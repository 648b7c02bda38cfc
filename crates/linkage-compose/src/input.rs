//! Input normalization.

use linkage_model::{ComparisonLevel, LevelSettings, ModelError};

/// A composition argument: a built level or a raw level mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelInput {
    Built(ComparisonLevel),
    Raw(LevelSettings),
}

impl LevelInput {
    /// Promotes raw mappings to levels with no dialect; built levels pass
    /// through unchanged.
    pub fn into_level(self) -> Result<ComparisonLevel, ModelError> {
        match self {
            Self::Built(level) => Ok(level),
            Self::Raw(settings) => ComparisonLevel::new(settings, None),
        }
    }
}

impl From<ComparisonLevel> for LevelInput {
    fn from(level: ComparisonLevel) -> Self {
        Self::Built(level)
    }
}

impl From<&ComparisonLevel> for LevelInput {
    fn from(level: &ComparisonLevel) -> Self {
        Self::Built(level.clone())
    }
}

impl From<LevelSettings> for LevelInput {
    fn from(settings: LevelSettings) -> Self {
        Self::Raw(settings)
    }
}

/// Normalizes every input to a level, preserving order.
pub(crate) fn normalize_inputs<I>(inputs: I) -> Result<Vec<ComparisonLevel>, ModelError>
where
    I: IntoIterator,
    I::Item: Into<LevelInput>,
{
    inputs
        .into_iter()
        .map(|input| input.into().into_level())
        .collect()
}
