//! Power answer checking.

use mathdrill_core::model::Answer;
use mathdrill_core::traits::Checker;

/// Checker for power quizzes. Powers are whole numbers, so both the input
/// and the stored answer must have an integer reading.
#[derive(Debug, Default)]
pub struct PowerChecker;

impl Checker for PowerChecker {
    fn name(&self) -> &str {
        "power"
    }

    fn check_answer(&self, input: &str, expected: &Answer) -> bool {
        match (input.trim().parse::<i64>(), expected.as_i64()) {
            (Ok(user), Some(expected)) => user == expected,
            _ => false,
        }
    }
}
