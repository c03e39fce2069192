//! Core data model types for mathdrill.
//!
//! These are the types the question bank document is made of: a quiz is a
//! named list of questions, and every question carries its correct answer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stored correct answer for a question.
///
/// The question bank stores answers as bare JSON integers, floats, or
/// strings; the untagged representation maps those directly. Comparison
/// semantics are selected by the quiz's checker from the variant, never by
/// inspecting the user's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Exact integer answer.
    Int(i64),
    /// Floating-point answer, compared within tolerance by checkers.
    Float(f64),
    /// Fraction strings ("3/4") or generic text.
    Text(String),
}

impl Answer {
    /// Integer view of the answer, if it has one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Answer::Int(v) => Some(*v),
            Answer::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            Answer::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(v) => write!(f, "{v}"),
            Answer::Float(v) => write!(f, "{v}"),
            Answer::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A single question belonging to exactly one named quiz.
///
/// Serialized as `{"question": ..., "answer": ...}` in the bank document.
/// Immutable once loaded; created and destroyed only by bank edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the user.
    #[serde(rename = "question")]
    pub text: String,
    /// The correct answer.
    pub answer: Answer,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: Answer) -> Self {
        Self {
            text: text.into(),
            answer,
        }
    }
}
