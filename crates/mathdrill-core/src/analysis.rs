//! Aggregate analysis over the progress ledger.

use serde::{Deserialize, Serialize};

use crate::ledger::ProgressRecord;

/// Outcome of analyzing a record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressAnalysis {
    /// The ledger holds no records at all.
    NoRecords,
    /// A quiz filter was given and nothing matched it.
    NoMatches { quiz: String },
    Summary(ProgressSummary),
}

/// Aggregate numbers over a (possibly filtered) record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Sum of per-record scores.
    pub total_correct: u32,
    /// Sum of per-record question counts.
    pub total_questions: u32,
    /// Overall percentage, rounded to two decimals; `None` when the record
    /// set has no questions (the division never happens).
    pub overall_percentage: Option<f64>,
    /// Best per-record score.
    pub best_score: u32,
    /// Worst per-record score.
    pub worst_score: u32,
    /// Per-quiz breakdown in first-occurrence order; empty when a filter
    /// was applied.
    pub per_quiz: Vec<QuizBreakdown>,
}

/// Aggregate numbers for a single quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizBreakdown {
    pub quiz: String,
    pub correct: u32,
    pub total: u32,
    /// `None` when this quiz's total is zero.
    pub percentage: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percentage(correct: u32, total: u32) -> Option<f64> {
    (total > 0).then(|| round2(correct as f64 / total as f64 * 100.0))
}

/// Analyze a record sequence, optionally restricted to one quiz.
///
/// Pure over its inputs: calling it twice on the same records yields
/// identical numbers.
pub fn analyze(records: &[ProgressRecord], filter: Option<&str>) -> ProgressAnalysis {
    if records.is_empty() {
        return ProgressAnalysis::NoRecords;
    }

    let selected: Vec<&ProgressRecord> = match filter {
        Some(quiz) => {
            let matched: Vec<&ProgressRecord> =
                records.iter().filter(|r| r.quiz == quiz).collect();
            if matched.is_empty() {
                return ProgressAnalysis::NoMatches {
                    quiz: quiz.to_string(),
                };
            }
            matched
        }
        None => records.iter().collect(),
    };

    let total_correct: u32 = selected.iter().map(|r| r.score).sum();
    let total_questions: u32 = selected.iter().map(|r| r.total).sum();
    let best_score = selected.iter().map(|r| r.score).max().unwrap_or(0);
    let worst_score = selected.iter().map(|r| r.score).min().unwrap_or(0);

    let per_quiz = if filter.is_none() {
        let mut breakdowns: Vec<QuizBreakdown> = Vec::new();
        for record in &selected {
            match breakdowns.iter_mut().find(|b| b.quiz == record.quiz) {
                Some(breakdown) => {
                    breakdown.correct += record.score;
                    breakdown.total += record.total;
                }
                None => breakdowns.push(QuizBreakdown {
                    quiz: record.quiz.clone(),
                    correct: record.score,
                    total: record.total,
                    percentage: None,
                }),
            }
        }
        for breakdown in &mut breakdowns {
            breakdown.percentage = percentage(breakdown.correct, breakdown.total);
        }
        breakdowns
    } else {
        Vec::new()
    };

    ProgressAnalysis::Summary(ProgressSummary {
        total_correct,
        total_questions,
        overall_percentage: percentage(total_correct, total_questions),
        best_score,
        worst_score,
        per_quiz,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quiz: &str, score: u32, total: u32) -> ProgressRecord {
        ProgressRecord {
            timestamp: "2026-03-01 10:00:00".into(),
            quiz: quiz.into(),
            score,
            total,
        }
    }

    #[test]
    fn empty_ledger_reports_no_records() {
        assert_eq!(analyze(&[], None), ProgressAnalysis::NoRecords);
    }

    #[test]
    fn filter_with_no_matches() {
        let records = vec![record("Quiz A", 5, 10)];
        assert_eq!(
            analyze(&records, Some("Quiz B")),
            ProgressAnalysis::NoMatches {
                quiz: "Quiz B".into()
            }
        );
    }

    #[test]
    fn two_quizzes_unfiltered() {
        let records = vec![record("Quiz A", 5, 10), record("Quiz B", 8, 10)];
        let ProgressAnalysis::Summary(summary) = analyze(&records, None) else {
            panic!("expected a summary");
        };

        assert_eq!(summary.total_correct, 13);
        assert_eq!(summary.total_questions, 20);
        assert_eq!(summary.overall_percentage, Some(65.0));
        assert_eq!(summary.best_score, 8);
        assert_eq!(summary.worst_score, 5);

        assert_eq!(summary.per_quiz.len(), 2);
        assert_eq!(summary.per_quiz[0].quiz, "Quiz A");
        assert_eq!(summary.per_quiz[0].percentage, Some(50.0));
        assert_eq!(summary.per_quiz[1].quiz, "Quiz B");
        assert_eq!(summary.per_quiz[1].percentage, Some(80.0));
    }

    #[test]
    fn filtered_summary_has_no_breakdown() {
        let records = vec![record("Quiz A", 5, 10), record("Quiz B", 8, 10)];
        let ProgressAnalysis::Summary(summary) = analyze(&records, Some("Quiz A")) else {
            panic!("expected a summary");
        };

        assert_eq!(summary.total_correct, 5);
        assert_eq!(summary.total_questions, 10);
        assert_eq!(summary.overall_percentage, Some(50.0));
        assert!(summary.per_quiz.is_empty());
    }

    #[test]
    fn zero_question_quiz_reports_no_percentage() {
        let records = vec![record("Quiz A", 0, 0), record("Quiz B", 8, 10)];
        let ProgressAnalysis::Summary(summary) = analyze(&records, None) else {
            panic!("expected a summary");
        };

        let quiz_a = &summary.per_quiz[0];
        assert_eq!(quiz_a.quiz, "Quiz A");
        assert_eq!(quiz_a.percentage, None);
        assert_eq!(summary.per_quiz[1].percentage, Some(80.0));
    }

    #[test]
    fn all_zero_questions_guards_overall_percentage() {
        let records = vec![record("Quiz A", 0, 0)];
        let ProgressAnalysis::Summary(summary) = analyze(&records, None) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.overall_percentage, None);
    }

    #[test]
    fn analyze_is_idempotent() {
        let records = vec![
            record("Quiz A", 5, 10),
            record("Quiz B", 8, 10),
            record("Quiz A", 7, 10),
        ];
        assert_eq!(analyze(&records, None), analyze(&records, None));
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        // 1/3 → 33.333…% → 33.33%
        let records = vec![record("Quiz A", 1, 3)];
        let ProgressAnalysis::Summary(summary) = analyze(&records, None) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.overall_percentage, Some(33.33));
    }

    #[test]
    fn breakdown_preserves_first_occurrence_order() {
        let records = vec![
            record("Zeta", 1, 2),
            record("Alpha", 1, 2),
            record("Zeta", 2, 2),
        ];
        let ProgressAnalysis::Summary(summary) = analyze(&records, None) else {
            panic!("expected a summary");
        };
        let order: Vec<&str> = summary.per_quiz.iter().map(|b| b.quiz.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alpha"]);
        assert_eq!(summary.per_quiz[0].correct, 3);
        assert_eq!(summary.per_quiz[0].total, 4);
    }
}
