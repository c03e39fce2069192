//! Mock checker for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use mathdrill_core::model::Answer;
use mathdrill_core::traits::Checker;

/// A scripted checker for exercising the session loop without real answer
/// semantics.
///
/// Verdicts are consumed in call order; once exhausted, the default verdict
/// applies.
pub struct MockChecker {
    verdicts: Vec<bool>,
    default_verdict: bool,
    call_count: AtomicU32,
}

impl MockChecker {
    pub fn with_verdicts(verdicts: Vec<bool>) -> Self {
        Self {
            verdicts,
            default_verdict: false,
            call_count: AtomicU32::new(0),
        }
    }

    /// A mock that returns the same verdict for every answer.
    pub fn always(verdict: bool) -> Self {
        Self {
            verdicts: Vec::new(),
            default_verdict: verdict,
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of `check_answer` calls made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Checker for MockChecker {
    fn name(&self) -> &str {
        "mock"
    }

    fn check_answer(&self, _input: &str, _expected: &Answer) -> bool {
        let call = self.call_count.fetch_add(1, Ordering::Relaxed) as usize;
        self.verdicts
            .get(call)
            .copied()
            .unwrap_or(self.default_verdict)
    }
}
