//! Logical composition of comparison levels.
//!
//! Existing levels (or raw level mappings) are combined with AND, OR and NOT
//! into new derived levels. Each call normalizes its inputs, reconciles their
//! SQL dialects, composes the condition and chart label, decides the
//! null-level flag and builds a fresh [`ComparisonLevel`]. Inputs are never
//! mutated.
//!
//! ```
//! use linkage_compose::{ComposeOptions, LevelSettings, and_};
//!
//! let level = and_(
//!     [
//!         LevelSettings::new("a_l = a_r"),
//!         LevelSettings::new("b_l = b_r"),
//!     ],
//!     ComposeOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(level.sql_condition(), "(a_l = a_r) AND (b_l = b_r)");
//! ```

#![deny(unsafe_code)]

pub mod compose;
pub mod dialect;
pub mod error;
pub mod input;
pub mod label;
pub mod tree;

pub use compose::{ComposeOptions, LogicalOperator, NegateOptions, and_, not_, or_};
pub use dialect::reconcile_dialects;
pub use error::{ComposeError, Result};
pub use input::LevelInput;
pub use label::effective_label;
pub use linkage_model::{ComparisonLevel, LevelSettings, SqlDialect};
pub use tree::{AndNode, CompositionNode, NotNode, NotOperand, OrNode};
