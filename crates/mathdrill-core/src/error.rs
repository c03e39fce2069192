//! Catalog error types.
//!
//! These represent failures when resolving a quiz for a session. All of
//! them are recoverable: the CLI reports them and the process continues.

use thiserror::Error;

/// Errors raised by quiz selection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No checker is bound for the quiz name.
    #[error("no checker is registered for quiz '{0}'")]
    UnknownChecker(String),

    /// The quiz has no questions in the bank.
    #[error("no questions available for quiz '{0}'")]
    EmptyQuestionSet(String),

    /// A selected question is not a well-formed text/answer record.
    #[error("malformed question in quiz '{quiz}': {question}")]
    InvalidQuestionShape { quiz: String, question: String },
}

impl CatalogError {
    /// Returns `true` when the error is a data problem in the bank rather
    /// than a missing checker binding.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyQuestionSet(_) | CatalogError::InvalidQuestionShape { .. }
        )
    }
}
