//! The `mathdrill add` command.

use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::bank::QuestionBank;
use mathdrill_core::model::Answer;

/// Parse a raw answer into its stored form: integer first, then float,
/// otherwise text (fractions such as "3/4" stay text).
fn parse_answer(raw: &str) -> Answer {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        Answer::Int(v)
    } else if let Some(v) = raw.parse::<f64>().ok().filter(|v| v.is_finite()) {
        Answer::Float(v)
    } else {
        Answer::Text(raw.to_string())
    }
}

pub fn execute(quiz: String, question: String, answer: String, bank_path: PathBuf) -> Result<()> {
    anyhow::ensure!(!quiz.trim().is_empty(), "--quiz must not be empty");
    anyhow::ensure!(
        !question.trim().is_empty(),
        "--question must not be empty"
    );

    let mut bank = QuestionBank::load(&bank_path);
    bank.add_question(&bank_path, quiz.trim(), question.trim(), parse_answer(&answer))?;

    println!("Added question to quiz '{}'", quiz.trim());
    Ok(())
}
