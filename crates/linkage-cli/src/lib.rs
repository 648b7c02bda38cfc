//! Library components for the `linkage` command-line composer.

pub mod document;
pub mod logging;
pub mod summary;
