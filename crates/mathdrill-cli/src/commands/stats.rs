//! The `mathdrill stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use mathdrill_core::analysis::{analyze, ProgressAnalysis};
use mathdrill_core::ledger::ProgressLedger;

pub fn execute(quiz: Option<String>, results_path: PathBuf) -> Result<()> {
    let ledger = ProgressLedger::new(results_path);
    let records = ledger.load_all();

    match analyze(&records, quiz.as_deref()) {
        ProgressAnalysis::NoRecords => {
            println!("No results recorded yet. Run a quiz first.");
        }
        ProgressAnalysis::NoMatches { quiz } => {
            println!("No results for quiz '{quiz}'.");
        }
        ProgressAnalysis::Summary(summary) => {
            match &quiz {
                Some(quiz) => println!("Progress for quiz: {quiz}"),
                None => println!("Overall progress"),
            }
            println!("Total correct answers: {}", summary.total_correct);
            println!("Total questions: {}", summary.total_questions);
            match summary.overall_percentage {
                Some(pct) => println!("Overall percentage: {pct:.2}%"),
                None => println!("Overall percentage: no questions recorded"),
            }
            println!("Best session score: {}", summary.best_score);
            println!("Worst session score: {}", summary.worst_score);

            if !summary.per_quiz.is_empty() {
                let mut table = Table::new();
                table.set_header(vec!["Quiz", "Correct", "Questions", "Percentage"]);
                for breakdown in &summary.per_quiz {
                    let pct = match breakdown.percentage {
                        Some(pct) => format!("{pct:.2}%"),
                        None => "no questions".to_string(),
                    };
                    table.add_row(vec![
                        breakdown.quiz.clone(),
                        breakdown.correct.to_string(),
                        breakdown.total.to_string(),
                        pct,
                    ]);
                }
                println!("\nPer-quiz breakdown:\n{table}");
            }
        }
    }

    Ok(())
}
