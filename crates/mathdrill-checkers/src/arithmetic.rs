//! Arithmetic answer checking.

use mathdrill_core::model::Answer;
use mathdrill_core::traits::Checker;

/// Absolute tolerance for floating-point answers.
const FLOAT_TOLERANCE: f64 = 1e-6;

/// Checker for basic arithmetic quizzes.
///
/// Comparison is directed by the stored answer's tag: exact for integers,
/// within tolerance for floats, literal string match otherwise.
#[derive(Debug, Default)]
pub struct ArithmeticChecker;

impl Checker for ArithmeticChecker {
    fn name(&self) -> &str {
        "arithmetic"
    }

    fn check_answer(&self, input: &str, expected: &Answer) -> bool {
        let input = input.trim();
        match expected {
            Answer::Int(v) => input.parse::<i64>().map_or(false, |user| user == *v),
            Answer::Float(v) => input
                .parse::<f64>()
                .map_or(false, |user| (user - v).abs() < FLOAT_TOLERANCE),
            Answer::Text(s) => input == s,
        }
    }
}
