//! Quiz catalog: reconciles the checker registry with the question bank.
//!
//! The catalog owns the loaded bank plus the instantiated quiz-name →
//! checker map handed in by the caller, and serves randomized question
//! samples for sessions.

use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::bank::QuestionBank;
use crate::error::CatalogError;
use crate::model::Question;
use crate::traits::Checker;

pub struct QuizCatalog {
    bank: QuestionBank,
    checkers: HashMap<String, Box<dyn Checker>>,
}

impl QuizCatalog {
    pub fn new(bank: QuestionBank, checkers: HashMap<String, Box<dyn Checker>>) -> Self {
        Self { bank, checkers }
    }

    /// Quiz names with at least one question, in bank order.
    ///
    /// Listing is independent of checker availability; a name with no bound
    /// checker is surfaced at selection time, not here.
    pub fn list_quizzes(&self) -> Vec<String> {
        self.bank
            .iter()
            .filter(|(_, questions)| !questions.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// The checker bound to `quiz`, if any.
    pub fn checker_for(&self, quiz: &str) -> Option<&dyn Checker> {
        self.checkers.get(quiz).map(Box::as_ref)
    }

    /// Resolve the checker and draw a question sample for a quiz.
    ///
    /// When the quiz has more than `count` questions, a uniformly random
    /// sample of exactly `count` is drawn without replacement; otherwise
    /// every available question is returned in stored order. Every selected
    /// question is validated before the selection is returned.
    pub fn select_quiz(
        &self,
        quiz: &str,
        count: usize,
    ) -> Result<(&dyn Checker, Vec<Question>), CatalogError> {
        let checker = self
            .checkers
            .get(quiz)
            .ok_or_else(|| CatalogError::UnknownChecker(quiz.to_string()))?;

        let pool = match self.bank.questions(quiz) {
            Some(questions) if !questions.is_empty() => questions,
            _ => return Err(CatalogError::EmptyQuestionSet(quiz.to_string())),
        };

        let selected: Vec<Question> = if pool.len() > count {
            pool.choose_multiple(&mut rand::thread_rng(), count)
                .cloned()
                .collect()
        } else {
            pool.to_vec()
        };

        for question in &selected {
            if question.text.trim().is_empty() {
                return Err(CatalogError::InvalidQuestionShape {
                    quiz: quiz.to_string(),
                    question: serde_json::to_string(question)
                        .unwrap_or_else(|_| question.text.clone()),
                });
            }
        }

        Ok((checker.as_ref(), selected))
    }
}
