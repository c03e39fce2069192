//! The persisted question bank.
//!
//! A JSON document mapping quiz names to question lists. Loaded once at
//! startup and rewritten in full on every mutation; two processes writing
//! concurrently would race (last writer wins, accepted limitation).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::model::{Answer, Question};

/// Mapping from quiz name to its ordered question list.
///
/// Backed by a `BTreeMap` so quiz listing order is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    quizzes: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// Load the bank from a JSON document.
    ///
    /// A missing or malformed document degrades to an empty bank so the
    /// rest of the trainer keeps working.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("question bank {} not readable: {e}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<BTreeMap<String, Vec<Question>>>(&content) {
            Ok(quizzes) => Self { quizzes },
            Err(e) => {
                warn!("failed to parse question bank {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Persist the whole bank to `path` as pretty-printed JSON (UTF-8 as-is,
    /// so non-ASCII quiz names and answers survive round trips).
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.quizzes)
            .context("failed to serialize question bank")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write question bank to {}", path.display()))?;
        Ok(())
    }

    /// Append a question, creating the quiz entry if absent, and persist
    /// the whole document back to `path`.
    pub fn add_question(
        &mut self,
        path: &Path,
        quiz: &str,
        text: &str,
        answer: Answer,
    ) -> Result<()> {
        self.quizzes
            .entry(quiz.to_string())
            .or_default()
            .push(Question::new(text, answer));
        self.save(path)
    }

    /// Questions for one quiz, if present.
    pub fn questions(&self, quiz: &str) -> Option<&[Question]> {
        self.quizzes.get(quiz).map(Vec::as_slice)
    }

    /// Iterate quizzes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Question>)> {
        self.quizzes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }
}
