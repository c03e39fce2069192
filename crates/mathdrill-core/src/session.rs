//! The quiz session runner.

use tracing::warn;

use crate::model::Question;
use crate::traits::{Checker, SessionIo};

/// Result of one completed quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Questions answered correctly.
    pub score: u32,
    /// Questions presented.
    pub total: u32,
}

/// Run one quiz session over the selected questions.
///
/// Every question is presented exactly once, in order. A failed read is
/// scored as incorrect and the session continues; nothing here aborts the
/// run.
pub fn run_session(
    checker: &dyn Checker,
    questions: &[Question],
    io: &mut dyn SessionIo,
) -> SessionOutcome {
    let total = questions.len();
    let mut score = 0u32;

    for (i, question) in questions.iter().enumerate() {
        let correct = match io.prompt_answer(i + 1, total, question) {
            Ok(input) => checker.check_answer(input.trim(), &question.answer),
            Err(e) => {
                warn!("failed to read answer for question {}: {e}", i + 1);
                false
            }
        };
        if correct {
            score += 1;
        }
        io.on_verdict(correct, &question.answer);
    }

    let outcome = SessionOutcome {
        score,
        total: total as u32,
    };
    io.on_complete(&outcome);
    outcome
}
