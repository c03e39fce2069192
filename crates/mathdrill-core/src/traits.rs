//! Capability traits for answer checking and session I/O.
//!
//! `Checker` is implemented by the `mathdrill-checkers` crate, one
//! implementation per quiz family. `SessionIo` is implemented by the CLI
//! over a terminal and by scripted doubles in tests.

use std::io;

use crate::model::{Answer, Question};
use crate::session::SessionOutcome;

/// Trait for answer-checking strategies.
pub trait Checker: Send + Sync {
    /// Checker family name (e.g. "arithmetic").
    fn name(&self) -> &str;

    /// Validate a user's textual answer against the stored correct answer.
    ///
    /// Must be tolerant of malformed input: returns `false`, never panics.
    fn check_answer(&self, input: &str, expected: &Answer) -> bool;
}

/// Hooks driven by the session loop.
pub trait SessionIo {
    /// Present a question (1-based `index` of `total`) and read one answer.
    fn prompt_answer(
        &mut self,
        index: usize,
        total: usize,
        question: &Question,
    ) -> io::Result<String>;

    /// Report the verdict for the question just answered.
    fn on_verdict(&mut self, correct: bool, expected: &Answer);

    /// Report the finished session.
    fn on_complete(&mut self, outcome: &SessionOutcome);
}
