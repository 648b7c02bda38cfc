use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("comparison level sql_condition must not be empty")]
    EmptyCondition,
    #[error("m_probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("invalid sql dialect: {0:?}")]
    InvalidDialect(String),
    #[error("invalid column name: {0:?}")]
    InvalidColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
